use std::sync::Arc;
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use tracing::{error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::AddressClient;
use crate::domain::{LedgerSummary, Order, OrderCreate, OrderDraft, OrderFilter, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use crate::pricing::{price, PriceBreakdown, PricingConfig};

/// Client for the order ledger.
///
/// Creation is orchestrated here: the address is resolved through the
/// address book and the draft is priced before the order is appended.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    address_client: AddressClient,
    pricing: Arc<PricingConfig>,
    delivery_eta: Duration,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        address_client: AddressClient,
        pricing: PricingConfig,
        delivery_eta: Duration,
    ) -> Self {
        Self {
            inner,
            address_client,
            pricing: Arc::new(pricing),
            delivery_eta,
        }
    }

    /// Prices a draft without placing it.
    pub fn quote(&self, draft: &OrderDraft) -> PriceBreakdown {
        price(draft, &self.pricing)
    }

    #[instrument(skip(self, draft), fields(quantity = draft.quantity()))]
    pub async fn create_order(&self, draft: OrderDraft, address_id: String) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Resolve address
        let address = match self.address_client.get_address(address_id.clone()).await {
            Ok(Some(address)) => address,
            Ok(None) => {
                error!("Address not found");
                return Err(OrderError::InvalidAddress(address_id));
            }
            Err(e) => {
                error!(error = %e, "Address lookup failed");
                return Err(OrderError::InvalidAddress(format!("Address lookup failed: {}", e)));
            }
        };

        // Step 2: Price the draft
        let bill = self.quote(&draft);
        info!(total = bill.total, "Draft priced");

        // Step 3: Append to the ledger
        let created_at = Utc::now();
        let params = OrderCreate {
            items: draft,
            address,
            total: bill.total,
            confirmation_code: generate_confirmation_code(),
            created_at,
            estimated_delivery_at: created_at + self.delivery_eta,
        };
        let order = self.inner.create(params).await?;
        info!(order_id = %order.id, "Order created successfully");
        Ok(order)
    }

    /// Moves an order forward.
    ///
    /// `Pending -> OnTheWay` needs no code; `-> Delivered` needs the order's
    /// confirmation code. Every other request is rejected and leaves the order as is.
    #[instrument(skip(self, code))]
    pub async fn transition_status(
        &self,
        id: String,
        new_status: OrderStatus,
        code: Option<String>,
    ) -> Result<OrderStatus, OrderError> {
        let action = match new_status {
            OrderStatus::OnTheWay => OrderAction::Dispatch,
            OrderStatus::Delivered => match code.filter(|c| !c.is_empty()) {
                Some(code) => OrderAction::ConfirmDelivery { code },
                None => {
                    warn!("Delivery attempted without a code");
                    return Err(OrderError::MissingCode);
                }
            },
            OrderStatus::Pending => {
                let order = self.get_order(id.clone()).await?.ok_or(OrderError::NotFound(id))?;
                return Err(OrderError::InvalidTransition { from: order.status, to: OrderStatus::Pending });
            }
        };

        match self.inner.perform_action(id, action).await {
            Ok(status) => {
                info!(status = %status, "Order status updated");
                Ok(status)
            }
            Err(e) => {
                let e = OrderError::from(e);
                warn!(error = %e, "Status transition rejected");
                Err(e)
            }
        }
    }

    pub async fn dispatch(&self, id: String) -> Result<OrderStatus, OrderError> {
        self.transition_status(id, OrderStatus::OnTheWay, None).await
    }

    pub async fn confirm_delivery(&self, id: String, code: String) -> Result<OrderStatus, OrderError> {
        self.transition_status(id, OrderStatus::Delivered, Some(code)).await
    }

    /// Orders matching `filter`, newest first.
    #[instrument(skip(self))]
    pub async fn find_orders(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list_all_orders().await?;
        orders.retain(|order| filter.matches(order));
        orders.reverse();
        Ok(orders)
    }

    /// The most recently placed order, if any.
    pub async fn latest_order(&self) -> Result<Option<Order>, OrderError> {
        Ok(self.list_all_orders().await?.pop())
    }

    pub async fn summary(&self, today: NaiveDate) -> Result<LedgerSummary, OrderError> {
        let orders = self.list_all_orders().await?;
        Ok(LedgerSummary::from_orders(&orders, today))
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order, all_orders);

/// Four-digit hand-off code.
fn generate_confirmation_code() -> String {
    rand::thread_rng().gen_range(1000..=9999).to_string()
}
