use rust_decimal_macros::dec;
use tailor_workshop::clients::{CustomerClient, MaterialClient, WorkerClient};
use tailor_workshop::material_actor::{MaterialActionResult, MaterialError};
use tailor_workshop::model::{
    Customer, CustomerId, FabricUsage, GarmentType, LoyaltyAccount, Material, MaterialId, OrderCreate,
    OrderStatus, Worker,
};
use tailor_workshop::order_actor::OrderError;
use workshop_framework::mock::MockClient;
use workshop_framework::{ActorClient, FrameworkError};

fn customer(id: u32) -> Customer {
    let now = chrono::Utc::now();
    Customer {
        id: CustomerId(id),
        name: "Fahad Al-Ajmi".into(),
        phone: "+96550001122".into(),
        email: None,
        measurements: Default::default(),
        loyalty: LoyaltyAccount::default(),
        created_at: now,
        updated_at: now,
    }
}

fn dishdasha_order(meters: rust_decimal::Decimal) -> OrderCreate {
    OrderCreate {
        customer_id: CustomerId(1),
        garment: GarmentType::Dishdasha,
        quantity: 2,
        unit_price: dec!(18.500),
        fabric: Some(FabricUsage {
            material_id: MaterialId(1),
            meters,
        }),
        due_date: None,
        notes: None,
    }
}

/// Real Order actor with mocked customer, material and worker dependencies.
/// Order::on_create validates the customer and consumes fabric through the mocks.
#[tokio::test]
async fn test_order_actor_with_mocked_dependencies() {
    let mut customer_mock = MockClient::<Customer>::new();
    let mut material_mock = MockClient::<Material>::new();
    let worker_mock = MockClient::<Worker>::new();

    customer_mock.expect_get(CustomerId(1)).return_ok(Some(customer(1)));
    // consume() is a perform_action() underneath
    material_mock
        .expect_action(MaterialId(1))
        .return_ok(MaterialActionResult::Consume(dec!(33)));

    let customer_client = CustomerClient::new(customer_mock.client());
    let material_client = MaterialClient::new(material_mock.client());
    let worker_client = WorkerClient::new(worker_mock.client());

    let (order_actor, order_client) = tailor_workshop::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run((customer_client, material_client, worker_client)));

    let order_id = order_client.create_order(dishdasha_order(dec!(7))).await.unwrap();

    let order = order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.total, dec!(37.000));
    assert_eq!(order.customer_id, CustomerId(1));

    customer_mock.verify();
    material_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_short_fabric_rejects_order() {
    let mut customer_mock = MockClient::<Customer>::new();
    let mut material_mock = MockClient::<Material>::new();
    let worker_mock = MockClient::<Worker>::new();

    customer_mock.expect_get(CustomerId(1)).return_ok(Some(customer(1)));
    material_mock
        .expect_action(MaterialId(1))
        .return_err(FrameworkError::EntityError(Box::new(MaterialError::InsufficientStock {
            sku: "FAB-JPN-WHT".into(),
            requested: dec!(50),
            available: dec!(12),
        })));

    let (order_actor, order_client) = tailor_workshop::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run((
        CustomerClient::new(customer_mock.client()),
        MaterialClient::new(material_mock.client()),
        WorkerClient::new(worker_mock.client()),
    )));

    let result = order_client.create_order(dishdasha_order(dec!(50))).await;
    assert!(matches!(result, Err(OrderError::InsufficientStock(_))), "{result:?}");
    assert!(order_client.list().await.unwrap().is_empty());

    customer_mock.verify();
    material_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_customer_never_touches_stock() {
    let mut customer_mock = MockClient::<Customer>::new();
    let material_mock = MockClient::<Material>::new();
    let worker_mock = MockClient::<Worker>::new();

    customer_mock.expect_get(CustomerId(1)).return_ok(None);

    let (order_actor, order_client) = tailor_workshop::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run((
        CustomerClient::new(customer_mock.client()),
        MaterialClient::new(material_mock.client()),
        WorkerClient::new(worker_mock.client()),
    )));

    let result = order_client.create_order(dishdasha_order(dec!(7))).await;
    assert_eq!(result, Err(OrderError::InvalidCustomer("customer_1".into())));

    // no material expectation was set; any consume call would have panicked the mock
    customer_mock.verify();
    material_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}
