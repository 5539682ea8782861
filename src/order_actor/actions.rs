/// Status transitions that can be performed on a placed order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// `Pending` to `OnTheWay`. Needs no code.
    Dispatch,
    /// Hand-off to the customer.
    ///
    /// # Errors
    /// Fails unless `code` equals the order's confirmation code.
    ConfirmDelivery { code: String },
}
