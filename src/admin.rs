//! Admin order desk: ledger views and OTP-gated hand-off, with toasts.

use chrono::NaiveDate;
use tracing::instrument;
use crate::clients::OrderClient;
use crate::domain::{LedgerSummary, Order, OrderFilter, OrderStatus};
use crate::notify::Notifier;
use crate::order_actor::OrderError;

pub struct AdminDesk {
    orders: OrderClient,
    notifier: Notifier,
}

impl AdminDesk {
    pub fn new(orders: OrderClient, notifier: Notifier) -> Self {
        Self { orders, notifier }
    }

    pub async fn orders(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        self.orders.find_orders(filter).await
    }

    pub async fn summary(&self, today: NaiveDate) -> Result<LedgerSummary, OrderError> {
        self.orders.summary(today).await
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&self, id: String) -> Result<OrderStatus, OrderError> {
        let result = self.orders.dispatch(id).await;
        self.report(result)
    }

    /// Hands the order over. `code` is what the delivery partner read back
    /// from the customer.
    #[instrument(skip(self, code))]
    pub async fn mark_delivered(&self, id: String, code: Option<String>) -> Result<OrderStatus, OrderError> {
        let result = self.orders.transition_status(id, OrderStatus::Delivered, code).await;
        let status = self.report(result)?;
        self.notifier.success("Order marked as delivered!");
        Ok(status)
    }

    fn report(&self, result: Result<OrderStatus, OrderError>) -> Result<OrderStatus, OrderError> {
        if let Err(e) = &result {
            self.notifier.error(e.to_string());
        }
        result
    }
}
