//! Turns a finished meal-builder draft into a paid, ledgered order.

use thiserror::Error;
use tracing::{info, instrument};
use crate::address_actor::AddressError;
use crate::clients::{AddressClient, OrderClient};
use crate::domain::{Order, SavedAddress};
use crate::meal_builder::{MealBuilder, Step};
use crate::notify::Notifier;
use crate::order_actor::OrderError;
use crate::payment::{MockGateway, PaymentMethod};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Finish building your thali first")]
    DraftIncomplete,
    #[error("Please select a delivery address")]
    MissingAddress,
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

pub struct Checkout {
    orders: OrderClient,
    addresses: AddressClient,
    gateway: MockGateway,
    notifier: Notifier,
}

impl Checkout {
    pub fn new(orders: OrderClient, addresses: AddressClient, gateway: MockGateway, notifier: Notifier) -> Self {
        Self { orders, addresses, gateway, notifier }
    }

    /// Saves the customer's current coordinates as a delivery address.
    #[instrument(skip(self))]
    pub async fn save_current_location(&self, latitude: f64, longitude: f64) -> Result<SavedAddress, CheckoutError> {
        let result = self.addresses.add_geolocation(latitude, longitude).await;
        self.report_saved(result, "Location detected successfully!")
    }

    /// Saves a hand-typed hostel address. Hostel and room are required.
    #[instrument(skip(self))]
    pub async fn save_manual_address(
        &self,
        hostel: String,
        room: String,
        details: Option<String>,
    ) -> Result<SavedAddress, CheckoutError> {
        let result = self.addresses.add_manual(hostel, room, details).await;
        self.report_saved(result, "Address saved successfully!")
    }

    fn report_saved(
        &self,
        result: Result<SavedAddress, AddressError>,
        success: &str,
    ) -> Result<SavedAddress, CheckoutError> {
        match result {
            Ok(address) => {
                self.notifier.success(success);
                Ok(address)
            }
            Err(e) => {
                self.notifier.error(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Pays for and places the builder's draft, then resets the builder.
    ///
    /// The builder must be on its last step. On any error the draft is kept
    /// so the customer can fix their input and retry.
    #[instrument(skip(self, builder, method))]
    pub async fn place_order(
        &self,
        builder: &mut MealBuilder,
        address_id: Option<&str>,
        method: &PaymentMethod,
    ) -> Result<Order, CheckoutError> {
        match self.try_place_order(builder, address_id, method).await {
            Ok(order) => Ok(order),
            Err(e) => {
                self.notifier.error(e.to_string());
                Err(e)
            }
        }
    }

    async fn try_place_order(
        &self,
        builder: &mut MealBuilder,
        address_id: Option<&str>,
        method: &PaymentMethod,
    ) -> Result<Order, CheckoutError> {
        if builder.step() != Step::Extras || builder.draft().selected_dishes().is_empty() {
            return Err(CheckoutError::DraftIncomplete);
        }
        let address_id = address_id.ok_or(CheckoutError::MissingAddress)?;
        // Never charge for an order that cannot be placed.
        if self.addresses.get_address(address_id.to_string()).await?.is_none() {
            return Err(AddressError::NotFound(address_id.to_string()).into());
        }

        let bill = self.orders.quote(builder.draft());
        let receipt = self.gateway.charge(bill.total, method).await;
        self.notifier.success("Payment successful!");

        let order = self.orders.create_order(builder.draft().clone(), address_id.to_string()).await?;
        builder.reset();
        info!(order_id = %order.id, paid = receipt.amount, method = %receipt.method, paid_at = %receipt.paid_at, "Order placed");
        Ok(order)
    }
}
