//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Failures coming out of an entity hook
//! travel inside [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate key: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type when the failure came from a hook.
    ///
    /// Any other variant, or an entity error of a different type, is handed back unchanged.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|err| *err)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("fabric short by {0}")]
    struct FabricShort(u32);

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn recovers_matching_entity_error() {
        let err = FrameworkError::EntityError(Box::new(FabricShort(3)));
        assert_eq!(err.into_entity_error::<FabricShort>().unwrap(), FabricShort(3));
    }

    #[test]
    fn keeps_foreign_entity_error_boxed() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.into_entity_error::<FabricShort>().unwrap_err();
        assert!(matches!(back, FrameworkError::EntityError(_)));
        assert_eq!(back.to_string(), "Entity error: other");
    }

    #[test]
    fn passes_through_plumbing_errors() {
        let back = FrameworkError::Conflict("SKU-1".into())
            .into_entity_error::<FabricShort>()
            .unwrap_err();
        assert!(matches!(back, FrameworkError::Conflict(key) if key == "SKU-1"));
    }
}
