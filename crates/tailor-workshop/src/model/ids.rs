//! Sequential identifiers, one newtype per resource.
//!
//! Ids are handed out by the owning actor starting at 1, serialize as plain numbers and
//! display with their resource prefix (`order_3`).

use serde::{Deserialize, Serialize};

macro_rules! entity_ids {
    ($($entity:ident => $prefix:literal),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Type-safe identifier for ", stringify!($entity), " records.")]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
                #[serde(transparent)]
                pub struct [<$entity Id>](pub u32);

                impl From<u32> for [<$entity Id>] {
                    fn from(id: u32) -> Self {
                        Self(id)
                    }
                }

                impl std::fmt::Display for [<$entity Id>] {
                    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, concat!($prefix, "_{}"), self.0)
                    }
                }
            )*
        }
    };
}

entity_ids! {
    Customer => "customer",
    Worker => "worker",
    Material => "material",
    Order => "order",
    Invoice => "invoice",
    Role => "role",
    Staff => "staff",
    Sale => "sale",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_prefix_and_serialize_bare() {
        assert_eq!(OrderId(3).to_string(), "order_3");
        assert_eq!(MaterialId::from(12).to_string(), "material_12");
        assert_eq!(serde_json::to_string(&CustomerId(7)).unwrap(), "7");
        assert_eq!(serde_json::from_str::<WorkerId>("4").unwrap(), WorkerId(4));
    }
}
