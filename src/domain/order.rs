use std::fmt;
use chrono::{DateTime, NaiveDate, Utc};
use super::address::SavedAddress;
use super::draft::OrderDraft;

/// Delivery progress. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    OnTheWay,
    Delivered,
}

impl OrderStatus {
    /// Still waiting to reach the customer.
    pub fn is_active(self) -> bool {
        !matches!(self, OrderStatus::Delivered)
    }

    /// Customer-facing wording.
    pub fn display_text(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Preparing",
            OrderStatus::OnTheWay => "On the way",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::OnTheWay => "on-the-way",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(s)
    }
}

/// Represents a placed order.
///
/// Everything except `status` is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub items: OrderDraft,
    pub address: SavedAddress,
    pub total: u32,
    pub confirmation_code: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery_at: DateTime<Utc>,
}

/// Params for appending a new order to the ledger.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub items: OrderDraft,
    pub address: SavedAddress,
    pub total: u32,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery_at: DateTime<Utc>,
}

/// Admin-side filter over the ledger.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    /// Matched against the order id, or case-insensitively against the address.
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn with_status(status: OrderStatus) -> Self {
        Self { status: Some(status), search: None }
    }

    pub fn matches(&self, order: &Order) -> bool {
        let status_ok = self.status.map_or(true, |status| order.status == status);
        let search_ok = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                order.id.contains(term)
                    || order.address.label().to_lowercase().contains(&term.to_lowercase())
            }
        };
        status_ok && search_ok
    }
}

/// Counters for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub today_orders: usize,
    pub today_revenue: u64,
    pub active_orders: usize,
    pub pending: usize,
    pub on_the_way: usize,
    pub delivered: usize,
}

impl LedgerSummary {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>, today: NaiveDate) -> Self {
        let mut summary = Self::default();
        for order in orders {
            if order.created_at.date_naive() == today {
                summary.today_orders += 1;
                summary.today_revenue += u64::from(order.total);
            }
            if order.status.is_active() {
                summary.active_orders += 1;
            }
            match order.status {
                OrderStatus::Pending => summary.pending += 1,
                OrderStatus::OnTheWay => summary.on_the_way += 1,
                OrderStatus::Delivered => summary.delivered += 1,
            }
        }
        summary
    }
}
