use thiserror::Error;
use crate::address_actor::AddressError;
use crate::checkout::CheckoutError;
use crate::meal_builder::WizardError;
use crate::order_actor::OrderError;
use crate::session::SessionError;
use crate::share::ShareError;
use super::config::ConfigError;

/// Top-level error for the application binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Link(#[from] ShareError),
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
