mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod admin;
mod order_actor;
mod address_actor;

mod checkout;
mod meal_builder;
mod notify;
mod payment;
mod pricing;
mod session;
mod share;

use chrono::Utc;
use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, AppConfig, AppError, ThaliSystem};
use crate::domain::{catalog, BaseOption, OrderFilter, Upgrade};
use crate::meal_builder::{Advance, MealBuilder};
use crate::payment::PaymentMethod;
use crate::pricing::PricingConfig;
use crate::session::{AuthSession, LocalStore};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::load()?;
    info!("Starting thali ordering demo");

    let mut session = AuthSession::new(LocalStore::new(&config.session_path), config.login_delay);
    if session.restore()?.is_none() {
        session.login("guest@skfood.in", "guest").await?;
    }
    if let Some(user) = session.user() {
        info!(user_id = %user.id, name = %user.name, "Signed in");
    }

    let system = ThaliSystem::new(&config, PricingConfig::default());
    let mut toasts = system.notifier.subscribe();
    tokio::spawn(async move {
        while let Ok(toast) = toasts.recv().await {
            info!(kind = ?toast.kind, "{}", toast.message);
        }
    });

    // Build a thali
    let menu = catalog();
    let mut builder = MealBuilder::new(system.notifier.clone());
    let span = tracing::info_span!("meal_builder");
    async {
        for dish in menu.iter().take(3) {
            // The third pick is rejected and leaves the selection as is.
            if let Err(e) = builder.toggle_dish(dish.clone()) {
                warn!(error = %e, "Dish not added");
            }
        }
        info!(step = builder.step().title(), "Dishes chosen");
        builder.next()?;
        builder.select_base(BaseOption::RotiOnly);
        builder.change_extra_roti(2);
        builder.next()?;
        builder.toggle_upgrade(Upgrade::ExtraSide);
        builder.set_quantity(3)?;
        match builder.next()? {
            Advance::ReadyForReview => info!(
                dishes = %builder.draft().dish_names(),
                base = builder.draft().base_option().label(),
                upgrades = ?builder.draft().upgrades().enabled_labels(),
                "Thali ready for review"
            ),
            Advance::Moved(step) => warn!(step = step.title(), "Builder not finished"),
        }
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    let bill = system.order_client.quote(builder.draft());
    info!(
        per_thali = bill.per_thali,
        subtotal = bill.subtotal,
        delivery_fee = bill.delivery_fee,
        tax = bill.tax,
        discount = bill.discount,
        total = bill.total,
        "Bill"
    );

    // Checkout
    let checkout = system.checkout();
    let address = checkout
        .save_manual_address("Kaveri Hostel".into(), "A-205".into(), Some("Second floor".into()))
        .await?;
    let saved = system.address_client.list_addresses().await?;
    info!(title = address.title(), label = %address.label(), saved = saved.len(), "Delivering to");
    let method = PaymentMethod::Upi { vpa: "guest@upi".into() };

    let span = tracing::info_span!("checkout");
    let order = checkout.place_order(&mut builder, Some(&address.id), &method)
        .instrument(span)
        .await?;
    info!(
        order_id = %order.id,
        otp = %order.confirmation_code,
        eta = %order.estimated_delivery_at.format("%H:%M"),
        "Order confirmed"
    );
    info!(link = %share::whatsapp_link(&config.support_phone, &order)?, "Handoff link");
    info!("{}", share::share_text(&order));

    // Admin side
    let desk = system.admin();
    let span = tracing::info_span!("admin");
    async {
        desk.dispatch(order.id.clone()).await?;
        if desk.mark_delivered(order.id.clone(), Some("0000".into())).await.is_ok() {
            warn!("Wrong OTP was accepted");
        }
        let status = desk.mark_delivered(order.id.clone(), Some(order.confirmation_code.clone())).await?;
        info!(status = status.display_text(), "Delivery confirmed");

        let summary = desk.summary(Utc::now().date_naive()).await?;
        let ledger = desk.orders(OrderFilter::default()).await?;
        info!(
            orders = ledger.len(),
            today_orders = summary.today_orders,
            today_revenue = summary.today_revenue,
            active = summary.active_orders,
            "Dashboard"
        );
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    drop(desk);
    drop(checkout);
    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
        return Err(e);
    }

    info!("Application completed successfully");
    Ok(())
}
