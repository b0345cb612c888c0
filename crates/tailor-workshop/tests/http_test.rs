use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tailor_workshop::config::WorkshopConfig;
use tailor_workshop::http::{customers, dashboard, materials, orders, sales, staff, AppState};
use tailor_workshop::lifecycle::WorkshopSystem;
use tailor_workshop::model::{
    CustomerCreate, GarmentType, MaterialCategory, MaterialCreate, OrderCreate, OrderStatus,
    PaymentMethod, Permission, RoleCreate, StaffCreate, StockUnit,
};
use tailor_workshop::pos::{CreateSaleRequest, SaleItemRequest};

fn state() -> AppState {
    Arc::new(WorkshopSystem::new(&WorkshopConfig::default()))
}

fn customer_params(phone: &str) -> CustomerCreate {
    CustomerCreate {
        name: "Hessa Al-Fadhli".into(),
        phone: phone.into(),
        email: None,
        measurements: Default::default(),
    }
}

#[tokio::test]
async fn test_customer_endpoints() {
    let state = state();

    let (status, Json(created)) =
        customers::create_customer(State(state.clone()), Json(customer_params("+965 5123 4567")))
            .await
            .unwrap();
    assert_eq!(status, StatusCode::CREATED);

    let duplicate =
        customers::create_customer(State(state.clone()), Json(customer_params("+96551234567"))).await;
    assert_eq!(duplicate.unwrap_err().status(), StatusCode::CONFLICT);

    let Json(receipt) = customers::earn_points(
        State(state.clone()),
        Path(created.id),
        Json(customers::EarnRequest { amount: dec!(42.9) }),
    )
    .await
    .unwrap();
    assert_eq!(receipt.points, 42);

    let overdraw = customers::redeem_points(
        State(state.clone()),
        Path(created.id),
        Json(customers::RedeemRequest { points: 100 }),
    )
    .await;
    assert_eq!(overdraw.unwrap_err().status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(
        customers::delete_customer(State(state.clone()), Path(created.id)).await.unwrap(),
        StatusCode::NO_CONTENT
    );
    let missing = customers::get_customer(State(state.clone()), Path(created.id)).await;
    assert_eq!(missing.unwrap_err().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_and_sale_endpoints() {
    let state = state();

    let (_, Json(customer)) =
        customers::create_customer(State(state.clone()), Json(customer_params("+965 6677 8899")))
            .await
            .unwrap();
    let (_, Json(buttons)) = materials::create_material(
        State(state.clone()),
        Json(MaterialCreate {
            sku: "btn-prl".into(),
            name: "Pearl press buttons".into(),
            category: MaterialCategory::Button,
            unit: StockUnit::Piece,
            quantity: dec!(20),
            unit_cost: dec!(0.050),
            retail_price: dec!(0.150),
            reorder_level: dec!(5),
        }),
    )
    .await
    .unwrap();
    assert_eq!(buttons.sku, "BTN-PRL");

    let (status, Json(order)) = orders::create_order(
        State(state.clone()),
        Json(OrderCreate {
            customer_id: customer.id,
            garment: GarmentType::Alteration,
            quantity: 1,
            unit_price: dec!(4),
            fabric: None,
            due_date: None,
            notes: Some("shorten sleeves".into()),
        }),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order.status, OrderStatus::Confirmed);

    let early = orders::advance_stage(State(state.clone()), Path(order.id)).await;
    assert_eq!(early.unwrap_err().status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (status, Json(sale)) = sales::create_sale(
        State(state.clone()),
        Json(CreateSaleRequest {
            customer_id: Some(customer.id),
            items: vec![SaleItemRequest {
                material_id: buttons.id,
                quantity: dec!(6),
            }],
            discount: None,
            redeem_points: None,
            payment_method: PaymentMethod::Card,
            tendered: None,
        }),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sale.sale.total, dec!(0.900));

    let Json(journal) = sales::list_sales(State(state.clone())).await.unwrap();
    assert_eq!(journal.len(), 1);

    let Json(board) = dashboard::dashboard(
        State(state.clone()),
        Query(dashboard::DashboardQuery { date: None }),
    )
    .await
    .unwrap();
    assert_eq!(board.counts.sales, 1);
    assert_eq!(board.revenue.sales, dec!(0.900));
    assert_eq!(board.orders_by_status.get("confirmed"), Some(&1));
}

#[tokio::test]
async fn test_role_and_staff_endpoints() {
    let state = state();

    let (_, Json(role)) = staff::create_role(
        State(state.clone()),
        Json(RoleCreate {
            name: "Cashier".into(),
            permissions: [Permission::UsePos].into_iter().collect(),
        }),
    )
    .await
    .unwrap();

    let Json(change) = staff::grant_permission(
        State(state.clone()),
        Path(role.id),
        Json(staff::PermissionRequest {
            permission: Permission::ManageInvoices,
        }),
    )
    .await
    .unwrap();
    assert!(change.changed);
    assert!(change.role.permissions.contains(&Permission::ManageInvoices));

    let (status, Json(user)) = staff::create_staff(
        State(state.clone()),
        Json(StaffCreate {
            name: "Yousef Al-Enezi".into(),
            email: "yousef@alsadu-tailoring.com.kw".into(),
            role_id: role.id,
        }),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert!(user.active);

    let Json(all) = staff::list_staff(State(state.clone())).await.unwrap();
    assert_eq!(all.len(), 1);
}
