use async_trait::async_trait;
use workshop_framework::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Bolt {
    id: u32,
    sku: String,
    meters: u32,
}

#[derive(Debug)]
struct BoltCreate {
    sku: String,
    meters: u32,
}

#[derive(Debug)]
struct BoltUpdate {
    sku: Option<String>,
    meters: Option<u32>,
}

#[derive(Debug)]
enum BoltAction {
    Cut(u32),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum BoltError {
    #[error("sku must not be blank")]
    BlankSku,
    #[error("only {available}m left")]
    Short { available: u32 },
}

#[async_trait]
impl ActorEntity for Bolt {
    type Id = u32;
    type Create = BoltCreate;
    type Update = BoltUpdate;
    type Action = BoltAction;
    type ActionResult = u32;
    type Context = ();
    type Error = BoltError;

    fn from_create_params(id: u32, params: BoltCreate) -> Result<Self, Self::Error> {
        if params.sku.trim().is_empty() {
            return Err(BoltError::BlankSku);
        }
        Ok(Self {
            id,
            sku: params.sku,
            meters: params.meters,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.sku.clone())
    }

    async fn on_update(&mut self, update: BoltUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(meters) = update.meters {
            self.meters = meters;
        }
        if let Some(sku) = update.sku {
            if sku.trim().is_empty() {
                return Err(BoltError::BlankSku);
            }
            self.sku = sku;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BoltAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            BoltAction::Cut(meters) => {
                self.meters = self.meters.checked_sub(meters).ok_or(BoltError::Short {
                    available: self.meters,
                })?;
                Ok(self.meters)
            }
        }
    }
}

fn bolt(sku: &str, meters: u32) -> BoltCreate {
    BoltCreate {
        sku: sku.to_string(),
        meters,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let id: u32 = client.create(bolt("WOOL-01", 40)).await.unwrap();
    assert_eq!(id, 1);

    let left = client.perform_action(id, BoltAction::Cut(6)).await.unwrap();
    assert_eq!(left, 34);

    let updated: Bolt = client
        .update(
            id,
            BoltUpdate {
                sku: None,
                meters: Some(50),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.meters, 50);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_returns_entities_in_id_order() {
    let (actor, client) = ResourceActor::<Bolt>::new(10);
    tokio::spawn(actor.run(()));

    for sku in ["C", "A", "B"] {
        client.create(bolt(sku, 1)).await.unwrap();
    }
    let skus: Vec<String> = client.list().await.unwrap().into_iter().map(|b| b.sku).collect();
    assert_eq!(skus, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn test_unique_key_enforced_on_create_and_update() {
    let (actor, client) = ResourceActor::<Bolt>::new(10);
    tokio::spawn(actor.run(()));

    let first = client.create(bolt("LINEN-02", 10)).await.unwrap();
    let second = client.create(bolt("SILK-03", 10)).await.unwrap();

    let dup = client.create(bolt("LINEN-02", 5)).await;
    assert!(matches!(dup, Err(FrameworkError::Conflict(key)) if key == "LINEN-02"));

    let clash = client
        .update(
            second,
            BoltUpdate {
                sku: Some("LINEN-02".into()),
                meters: Some(99),
            },
        )
        .await;
    assert!(matches!(clash, Err(FrameworkError::Conflict(_))));

    // Rejected update left the entity untouched, and re-saving the own key is fine.
    let unchanged = client.get(second).await.unwrap().unwrap();
    assert_eq!(unchanged.meters, 10);
    assert_eq!(unchanged.sku, "SILK-03");
    client
        .update(
            first,
            BoltUpdate {
                sku: Some("LINEN-02".into()),
                meters: None,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_failed_hooks_leave_store_untouched() {
    let (actor, client) = ResourceActor::<Bolt>::new(10);
    tokio::spawn(actor.run(()));

    let blank = client.create(bolt("  ", 3)).await.unwrap_err();
    assert_eq!(blank.into_entity_error::<BoltError>().unwrap(), BoltError::BlankSku);

    let id = client.create(bolt("COTTON-04", 8)).await.unwrap();

    let short = client.perform_action(id, BoltAction::Cut(9)).await.unwrap_err();
    assert_eq!(
        short.into_entity_error::<BoltError>().unwrap(),
        BoltError::Short { available: 8 }
    );

    // meters were set before the sku check failed; the copy was discarded
    let bad_update = client
        .update(
            id,
            BoltUpdate {
                sku: Some(String::new()),
                meters: Some(1),
            },
        )
        .await;
    assert!(bad_update.is_err());
    assert_eq!(client.get(id).await.unwrap().unwrap().meters, 8);
}

#[tokio::test]
async fn test_failed_create_still_uses_up_its_id() {
    let (actor, client) = ResourceActor::<Bolt>::new(10);
    tokio::spawn(actor.run(()));

    assert_eq!(client.create(bolt("TWEED-05", 4)).await.unwrap(), 1);
    assert!(client.create(bolt("", 4)).await.is_err());
    assert_eq!(client.create(bolt("TWEED-06", 4)).await.unwrap(), 3);
    assert!(client.get(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let (actor, client) = ResourceActor::<Bolt>::new(10);
    tokio::spawn(actor.run(()));

    assert!(matches!(client.delete(7).await, Err(FrameworkError::NotFound(id)) if id == "7"));
    assert!(matches!(
        client.perform_action(7, BoltAction::Cut(1)).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Bolt>::new(1);
    drop(actor);
    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}
