use tailor_workshop::config::WorkshopConfig;
use tailor_workshop::lifecycle::WorkshopSystem;
use tailor_workshop::model::Permission;
use tailor_workshop::role_actor::RoleError;
use tailor_workshop::seed::{seed_workshop, SeedData, SeedError, SeedReport};
use workshop_framework::ActorClient;

#[tokio::test]
async fn test_embedded_seed_loads_every_record() {
    let system = WorkshopSystem::new(&WorkshopConfig::default());
    let data = SeedData::embedded().unwrap();

    let report = seed_workshop(&system, &data).await.unwrap();
    assert_eq!(
        report,
        SeedReport {
            roles: 4,
            staff: 4,
            customers: 5,
            workers: 4,
            materials: 9,
        }
    );

    let cashier = system.role_client.find_by_name("CASHIER").await.unwrap().unwrap();
    let staff = system.staff_client.list().await.unwrap();
    let yousef = staff.iter().find(|s| s.email.starts_with("yousef")).unwrap();
    assert_eq!(yousef.role_id, cashier.id);
    assert!(system.staff_client.can(yousef.id, Permission::UsePos).await.unwrap());
    assert!(!system.staff_client.can(yousef.id, Permission::RunPayroll).await.unwrap());

    let dashboard = system.dashboard(chrono::Utc::now().date_naive()).await.unwrap();
    assert_eq!(dashboard.counts.materials, 9);
    assert!(dashboard.low_stock.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeding_twice_hits_unique_keys() {
    let system = WorkshopSystem::new(&WorkshopConfig::default());
    let data = SeedData::embedded().unwrap();

    seed_workshop(&system, &data).await.unwrap();
    let again = seed_workshop(&system, &data).await;
    assert!(matches!(again, Err(SeedError::Role(RoleError::AlreadyExists(_)))), "{again:?}");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_staff_with_unknown_role_is_rejected() {
    let system = WorkshopSystem::new(&WorkshopConfig::default());
    let data = SeedData::from_json(
        r#"{ "staff": [{ "name": "Ali", "email": "ali@example.com.kw", "role": "Tailor" }] }"#,
    )
    .unwrap();

    let result = seed_workshop(&system, &data).await;
    assert!(matches!(result, Err(SeedError::UnknownRole { ref role, .. }) if role == "Tailor"));

    system.shutdown().await.unwrap();
}
