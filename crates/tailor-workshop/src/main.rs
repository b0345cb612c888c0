//! # tailor-workshop
//!
//! ```bash
//! tailor-workshop serve --bind 0.0.0.0:8080 --seed
//! tailor-workshop --config workshop.toml demo
//! ```

use chrono::{Days, Utc};
use clap::{Parser, Subcommand};
use rust_decimal_macros::dec;
use std::path::PathBuf;
use std::sync::Arc;
use tailor_workshop::config::WorkshopConfig;
use tailor_workshop::http;
use tailor_workshop::lifecycle::{setup_tracing, WorkshopSystem};
use tailor_workshop::model::{FabricUsage, GarmentType, OrderCreate, OrderStatus, PaymentMethod};
use tailor_workshop::order_actor::OrderError;
use tailor_workshop::pos::{ring_up, CreateSaleRequest, Discount, SaleItemRequest};
use tailor_workshop::seed::{seed_workshop, SeedData};
use tracing::{error, info, Instrument};
use workshop_framework::ActorClient;

#[derive(Parser, Debug)]
#[command(name = "tailor-workshop")]
#[command(about = "Tailoring workshop back office")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "WORKSHOP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API
    Serve {
        /// Listen address, overrides `http.bind`
        #[arg(long)]
        bind: Option<String>,
        /// Load the bundled demo data before serving
        #[arg(long)]
        seed: bool,
    },
    /// Seed the workshop, walk one order and one sale through it, print the dashboard
    Demo,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let mut config = WorkshopConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;

    setup_tracing(&config.log.level);

    match cli.command {
        Command::Serve { bind, seed } => {
            if let Some(bind) = bind {
                config.http.bind = bind;
            }
            config.actors.seed |= seed;
            config.validate().map_err(|e| e.to_string())?;
            serve(config).await
        }
        Command::Demo => demo(config).await,
    }
}

async fn serve(config: WorkshopConfig) -> Result<(), String> {
    let addr = config.bind_addr().map_err(|e| e.to_string())?;
    let system = WorkshopSystem::new(&config);

    if config.actors.seed {
        let data = SeedData::embedded().map_err(|e| e.to_string())?;
        seed_workshop(&system, &data).await.map_err(|e| e.to_string())?;
    }

    let state = Arc::new(system);
    let app = http::router(state.clone());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Cannot bind {addr}: {e}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Cannot listen for ctrl-c");
            }
            info!("Shutdown requested");
        })
        .await
        .map_err(|e| e.to_string())?;

    match Arc::try_unwrap(state) {
        Ok(system) => system.shutdown().await,
        Err(_) => {
            error!("Workshop still shared after the server stopped; actors not drained");
            Ok(())
        }
    }
}

async fn demo(config: WorkshopConfig) -> Result<(), String> {
    info!("Starting workshop demo");
    let system = WorkshopSystem::new(&config);

    let data = SeedData::embedded().map_err(|e| e.to_string())?;
    let report = seed_workshop(&system, &data)
        .instrument(tracing::info_span!("seeding"))
        .await
        .map_err(|e| e.to_string())?;
    info!(?report, "Seed data loaded");

    let customers = system.customer_client.list().await.map_err(|e| e.to_string())?;
    let workers = system.worker_client.list().await.map_err(|e| e.to_string())?;
    let materials = system.material_client.list().await.map_err(|e| e.to_string())?;
    let (Some(customer), Some(tailor), Some(fabric)) =
        (customers.first(), workers.get(1), materials.first())
    else {
        return Err("Seed data has no customer, tailor or fabric".into());
    };

    let span = tracing::info_span!("order_processing");
    let order_id = async {
        let order_id = system
            .order_client
            .create_order(OrderCreate {
                customer_id: customer.id,
                garment: GarmentType::Dishdasha,
                quantity: 2,
                unit_price: dec!(18.500),
                fabric: Some(FabricUsage {
                    material_id: fabric.id,
                    meters: dec!(7),
                }),
                due_date: Utc::now().date_naive().checked_add_days(Days::new(10)),
                notes: Some("Kuwaiti collar, hidden buttons".into()),
            })
            .await?;
        system.order_client.assign_worker(order_id, tailor.id).await?;
        system.order_client.start_production(order_id).await?;
        let mut status = system.order_client.advance_stage(order_id).await?;
        while status != OrderStatus::Ready {
            status = system.order_client.advance_stage(order_id).await?;
        }
        let points = system.order_client.mark_delivered(order_id).await?;
        info!(%order_id, points, "Order delivered");
        Ok::<_, OrderError>(order_id)
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let invoice_id = system.invoice_order(order_id).await.map_err(|e| e.to_string())?;
    let due = system
        .invoice_client
        .get(invoice_id)
        .await
        .map_err(|e| e.to_string())?
        .map(|invoice| invoice.balance())
        .unwrap_or_default();
    let (status, balance) = system
        .invoice_client
        .record_payment(invoice_id, due)
        .await
        .map_err(|e| e.to_string())?;
    info!(%invoice_id, ?status, %balance, "Order invoice settled");

    let receipt = ring_up(
        &system,
        CreateSaleRequest {
            customer_id: Some(customer.id),
            items: materials
                .iter()
                .skip(5)
                .take(2)
                .map(|material| SaleItemRequest {
                    material_id: material.id,
                    quantity: dec!(2),
                })
                .collect(),
            discount: Some(Discount::Percent(dec!(10))),
            redeem_points: None,
            payment_method: PaymentMethod::Cash,
            tendered: Some(dec!(5)),
        },
    )
    .instrument(tracing::info_span!("pos_sale"))
    .await
    .map_err(|e| e.to_string())?;
    info!(sale_id = %receipt.sale.id, change = %receipt.sale.change, "Sale rung up");

    let slip = system
        .worker_client
        .run_payroll(tailor.id, Utc::now().format("%Y-%m").to_string())
        .await
        .map_err(|e| e.to_string())?;
    info!(worker = %slip.worker_name, gross = %slip.gross, "Payroll run");

    let dashboard = system
        .dashboard(Utc::now().date_naive())
        .await
        .map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&dashboard).map_err(|e| e.to_string())?;
    println!("{json}");

    system.shutdown().await
}
