use crate::analytics::{Dashboard, WorkshopSnapshot};
use crate::clients::{
    CustomerClient, InvoiceClient, MaterialClient, OrderClient, RoleClient, SaleClient, StaffClient,
    WorkerClient,
};
use crate::config::WorkshopConfig;
use crate::invoice_actor::InvoiceError;
use crate::model::{
    round_money, InvoiceCreate, InvoiceId, InvoiceLine, InvoiceSource, InvoiceStatus, OrderId,
    OrderStatus, Sale, SaleCreate, WorkerId,
};
use crate::pos::{Cart, CartSettings};
use crate::sale_actor::SaleError;
use crate::worker_actor::WorkerError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{error, info, instrument, warn};
use workshop_framework::{ActorClient, FrameworkError};

/// The runtime orchestrator of the workshop back office.
///
/// `WorkshopSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every resource actor
/// - **Dependency Wiring**: handing each actor the clients it calls from its hooks
/// - **Cross-resource workflows**: invoicing an order, ringing up a sale with its
///   invoice, and guarded worker deletion
///
/// # Architecture
///
/// | Actor | Context |
/// |---|---|
/// | roles, workers, materials, invoices | none |
/// | customers | loyalty policy |
/// | staff | role client |
/// | orders | customer, material and worker clients |
/// | sales | material and customer clients |
///
/// The dependency graph has no cycles, so dropping the clients held here lets every
/// actor drain and stop.
pub struct WorkshopSystem {
    pub customer_client: CustomerClient,
    pub worker_client: WorkerClient,
    pub material_client: MaterialClient,
    pub order_client: OrderClient,
    pub invoice_client: InvoiceClient,
    pub role_client: RoleClient,
    pub staff_client: StaffClient,
    pub sale_client: SaleClient,

    cart_settings: CartSettings,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkshopSystem {
    /// Creates every actor, injects its context and spawns it.
    pub fn new(config: &WorkshopConfig) -> Self {
        let buffer = config.actors.buffer_size;

        // 1. Create actors (no dependencies yet)
        let (role_actor, role_client) = crate::role_actor::new(buffer);
        let (customer_actor, customer_client) = crate::customer_actor::new(buffer);
        let (worker_actor, worker_client) = crate::worker_actor::new(buffer);
        let (material_actor, material_client) = crate::material_actor::new(buffer);
        let (staff_actor, staff_client) = crate::staff_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer);
        let (invoice_actor, invoice_client) = crate::invoice_actor::new(buffer);
        let (sale_actor, sale_client) = crate::sale_actor::new(buffer);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(role_actor.run(())),
            tokio::spawn(customer_actor.run(config.loyalty.clone())),
            tokio::spawn(worker_actor.run(())),
            tokio::spawn(material_actor.run(())),
            tokio::spawn(invoice_actor.run(())),
            tokio::spawn(staff_actor.run(role_client.clone())),
            tokio::spawn(order_actor.run((
                customer_client.clone(),
                material_client.clone(),
                worker_client.clone(),
            ))),
            tokio::spawn(sale_actor.run((material_client.clone(), customer_client.clone()))),
        ];
        info!(actors = handles.len(), buffer, "Workshop started");

        Self {
            customer_client,
            worker_client,
            material_client,
            order_client,
            invoice_client,
            role_client,
            staff_client,
            sale_client,
            cart_settings: config.cart_settings(),
            handles,
        }
    }

    /// An empty POS cart with the configured tax, discount and loyalty rules.
    pub fn cart(&self) -> Cart {
        Cart::new(self.cart_settings.clone())
    }

    /// Raises an Issued invoice for an order. Cancelled orders cannot be invoiced and an
    /// order gets at most one invoice that is not void.
    #[instrument(skip(self))]
    pub async fn invoice_order(&self, order_id: OrderId) -> Result<InvoiceId, InvoiceError> {
        let order = self
            .order_client
            .get(order_id)
            .await
            .map_err(|e| InvoiceError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| InvoiceError::InvalidSource(order_id.to_string()))?;
        if order.status == OrderStatus::Cancelled {
            return Err(InvoiceError::InvalidSource(format!("{order_id} is cancelled")));
        }

        let source = InvoiceSource::Order(order_id);
        let already = self
            .invoice_client
            .list()
            .await?
            .iter()
            .any(|invoice| invoice.source == source && invoice.status != InvoiceStatus::Void);
        if already {
            return Err(InvoiceError::AlreadyInvoiced(order_id.to_string()));
        }

        let tax = round_money(order.total * self.cart_settings.tax_rate);
        self.invoice_client
            .create_invoice(InvoiceCreate {
                source,
                customer_id: Some(order.customer_id),
                lines: vec![InvoiceLine {
                    description: format!("{:?} x{}", order.garment, order.quantity),
                    quantity: Decimal::from(order.quantity),
                    unit_price: order.unit_price,
                    line_total: order.total,
                }],
                discount: Decimal::ZERO,
                tax,
                amount_paid: Decimal::ZERO,
                due_date: order.due_date,
            })
            .await
    }

    /// Stores a checked-out sale, then raises its Paid invoice.
    #[instrument(skip(self, params), fields(total = %params.total))]
    pub async fn create_sale(&self, params: SaleCreate) -> Result<(Sale, InvoiceId), SaleError> {
        let sale_id = self.sale_client.create_sale(params).await?;
        let sale = self
            .sale_client
            .get(sale_id)
            .await?
            .ok_or_else(|| SaleError::NotFound(sale_id.to_string()))?;

        let invoice_id = self
            .invoice_client
            .create_invoice(InvoiceCreate {
                source: InvoiceSource::Sale(sale_id),
                customer_id: sale.customer_id,
                lines: sale
                    .lines
                    .iter()
                    .map(|line| InvoiceLine {
                        description: format!("{} {}", line.sku, line.name),
                        quantity: line.quantity,
                        unit_price: line.unit_price,
                        line_total: line.line_total,
                    })
                    .collect(),
                discount: sale.discount + sale.redemption_value,
                tax: sale.tax,
                amount_paid: sale.total,
                due_date: None,
            })
            .await
            .map_err(|e| {
                error!(%sale_id, error = %e, "Sale stored without invoice");
                SaleError::Invoice(e.to_string())
            })?;

        info!(%sale_id, %invoice_id, total = %sale.total, "Sale completed");
        Ok((sale, invoice_id))
    }

    /// Deletes a worker unless open orders are still assigned to them.
    #[instrument(skip(self))]
    pub async fn delete_worker(&self, worker_id: WorkerId) -> Result<(), WorkerError> {
        let open = self
            .order_client
            .list()
            .await
            .map_err(|e| WorkerError::ActorCommunicationError(e.to_string()))?
            .iter()
            .filter(|order| order.is_open() && order.assigned_worker == Some(worker_id))
            .count();
        if open > 0 {
            warn!(%worker_id, open, "Refusing to delete worker with open orders");
            return Err(WorkerError::HasOpenOrders {
                worker: worker_id.to_string(),
                orders: open,
            });
        }
        self.worker_client.delete(worker_id).await
    }

    /// Reads every store once.
    pub async fn snapshot(&self) -> Result<WorkshopSnapshot, FrameworkError> {
        Ok(WorkshopSnapshot {
            customers: self.customer_client.inner().list().await?,
            workers: self.worker_client.inner().list().await?,
            materials: self.material_client.inner().list().await?,
            orders: self.order_client.inner().list().await?,
            invoices: self.invoice_client.inner().list().await?,
            sales: self.sale_client.inner().list().await?,
        })
    }

    pub async fn dashboard(&self, today: NaiveDate) -> Result<Dashboard, FrameworkError> {
        Ok(Dashboard::compute(&self.snapshot().await?, today))
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor finishes its queue, logs its
    /// final size and exits. Actors holding other actors' clients release them on exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down workshop...");

        drop(self.customer_client);
        drop(self.worker_client);
        drop(self.material_client);
        drop(self.order_client);
        drop(self.invoice_client);
        drop(self.role_client);
        drop(self.staff_client);
        drop(self.sale_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Workshop shutdown complete.");
        Ok(())
    }
}
