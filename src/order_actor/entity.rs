use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};
use super::actions::OrderAction;
use super::error::OrderError;

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Error = OrderError;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// Every order enters the ledger as `Pending`.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.selected_dishes().is_empty() {
            return Err(OrderError::EmptyDraft);
        }
        Ok(Self {
            id,
            items: params.items,
            address: params.address,
            total: params.total,
            confirmation_code: params.confirmation_code,
            status: OrderStatus::Pending,
            created_at: params.created_at,
            estimated_delivery_at: params.estimated_delivery_at,
        })
    }

    /// Applies a status transition and returns the new status.
    ///
    /// # Errors
    /// - `InvalidTransition` when the order is not in a state the action starts from.
    /// - `CodeMismatch` when the supplied code differs from the issued one.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderStatus, OrderError> {
        match action {
            OrderAction::Dispatch => match self.status {
                OrderStatus::Pending => self.status = OrderStatus::OnTheWay,
                from => return Err(OrderError::InvalidTransition { from, to: OrderStatus::OnTheWay }),
            },
            OrderAction::ConfirmDelivery { code } => match self.status {
                OrderStatus::Delivered => {
                    return Err(OrderError::InvalidTransition {
                        from: OrderStatus::Delivered,
                        to: OrderStatus::Delivered,
                    });
                }
                _ if code != self.confirmation_code => return Err(OrderError::CodeMismatch),
                _ => self.status = OrderStatus::Delivered,
            },
        }
        Ok(self.status)
    }
}
