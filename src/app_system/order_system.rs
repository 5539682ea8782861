use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use chrono::Utc;
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::admin::AdminDesk;
use crate::checkout::Checkout;
use crate::clients::{AddressClient, OrderClient};
use crate::domain::{Order, SavedAddress};
use crate::notify::Notifier;
use crate::payment::MockGateway;
use crate::pricing::PricingConfig;
use super::config::AppConfig;
use super::error::AppError;

/// Owns the in-memory ledger and address book and hands out clients to them.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct ThaliSystem {
    pub order_client: OrderClient,
    pub address_client: AddressClient,
    pub notifier: Notifier,
    gateway: MockGateway,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ThaliSystem {
    pub fn new(config: &AppConfig, pricing: PricingConfig) -> Self {
        info!("Starting thali system");

        // 1. Address book
        let address_counter = Arc::new(AtomicU64::new(1));
        let next_address_id = move || {
            let id = address_counter.fetch_add(1, Ordering::SeqCst);
            format!("address_{}", id)
        };
        let (address_actor, address_resource_client) =
            ResourceActor::<SavedAddress>::new(config.channel_buffer, next_address_id);
        let address_client = AddressClient::new(address_resource_client);
        let address_handle = tokio::spawn(address_actor.run());

        // 2. Order ledger. Ids are creation millis plus a sequence number
        // that never repeats within one ledger.
        let order_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || {
            let seq = order_counter.fetch_add(1, Ordering::SeqCst);
            format!("{}{:03}", Utc::now().timestamp_millis(), seq)
        };
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.channel_buffer, next_order_id);
        let order_client = OrderClient::new(
            order_resource_client,
            address_client.clone(),
            pricing,
            chrono::Duration::minutes(config.delivery_eta_minutes),
        );
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            order_client,
            address_client,
            notifier: Notifier::new(config.channel_buffer),
            gateway: MockGateway::new(config.payment_delay),
            handles: vec![address_handle, order_handle],
        }
    }

    pub fn checkout(&self) -> Checkout {
        Checkout::new(
            self.order_client.clone(),
            self.address_client.clone(),
            self.gateway.clone(),
            self.notifier.clone(),
        )
    }

    pub fn admin(&self) -> AdminDesk {
        AdminDesk::new(self.order_client.clone(), self.notifier.clone())
    }

    /// Drops the clients, which closes the actor channels, then waits for the
    /// actors to drain. Outstanding clones elsewhere keep their actor alive.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.address_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(AppError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
