//! Thali pricing.
//!
//! All amounts are whole rupees. Percentages are rounded half-up, matching
//! what the customer sees on the bill.

use crate::domain::OrderDraft;

/// Rates used by [`price`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    pub base_price: u32,
    pub extra_roti_price: u32,
    pub premium_protein_price: u32,
    pub extra_side_price: u32,
    pub salad_addons_price: u32,
    pub free_delivery_threshold: u32,
    pub delivery_fee: u32,
    pub tax_percent: u32,
    pub bulk_discount_percent: u32,
    pub bulk_min_quantity: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: 120,
            extra_roti_price: 5,
            premium_protein_price: 30,
            extra_side_price: 15,
            salad_addons_price: 20,
            free_delivery_threshold: 200,
            delivery_fee: 20,
            tax_percent: 5,
            bulk_discount_percent: 5,
            bulk_min_quantity: 3,
        }
    }
}

/// Itemized bill for a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub per_thali: u32,
    pub subtotal: u32,
    pub delivery_fee: u32,
    pub tax: u32,
    pub discount: u32,
    pub total: u32,
}

fn percent_of(amount: u32, percent: u32) -> u32 {
    let scaled = u64::from(amount) * u64::from(percent);
    u32::try_from((scaled + 50) / 100).unwrap_or(u32::MAX)
}

/// Prices a draft. Pure and deterministic.
///
/// Amounts saturate at `u32::MAX` instead of wrapping when a config's rates
/// are large enough to overflow.
pub fn price(draft: &OrderDraft, config: &PricingConfig) -> PriceBreakdown {
    let upgrades = draft.upgrades();
    let upgrade_price = [
        (upgrades.premium_protein, config.premium_protein_price),
        (upgrades.extra_side, config.extra_side_price),
        (upgrades.salad_addons, config.salad_addons_price),
    ]
    .iter()
    .filter(|(enabled, _)| *enabled)
    .fold(0u32, |sum, (_, price)| sum.saturating_add(*price));

    let per_thali = config.base_price
        .saturating_add(draft.extra_roti().saturating_mul(config.extra_roti_price))
        .saturating_add(upgrade_price);
    let subtotal = per_thali.saturating_mul(draft.quantity());
    let delivery_fee = if subtotal >= config.free_delivery_threshold { 0 } else { config.delivery_fee };
    let tax = percent_of(subtotal, config.tax_percent);
    let discount = if draft.quantity() >= config.bulk_min_quantity {
        percent_of(subtotal, config.bulk_discount_percent)
    } else {
        0
    };

    PriceBreakdown {
        per_thali,
        subtotal,
        delivery_fee,
        tax,
        discount,
        total: subtotal.saturating_add(delivery_fee).saturating_add(tax).saturating_sub(discount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BaseOption, Upgrade};

    fn draft_with_quantity(quantity: u32) -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.set_quantity(quantity).unwrap();
        draft
    }

    #[test]
    fn test_single_plain_thali() {
        let bill = price(&draft_with_quantity(1), &PricingConfig::default());
        assert_eq!(
            bill,
            PriceBreakdown { per_thali: 120, subtotal: 120, delivery_fee: 20, tax: 6, discount: 0, total: 146 }
        );
    }

    #[test]
    fn test_bulk_discount_at_three() {
        let bill = price(&draft_with_quantity(3), &PricingConfig::default());
        assert_eq!(
            bill,
            PriceBreakdown { per_thali: 120, subtotal: 360, delivery_fee: 0, tax: 18, discount: 18, total: 360 }
        );
    }

    #[test]
    fn test_extras_and_upgrades() {
        let mut draft = draft_with_quantity(2);
        draft.set_base_option(BaseOption::RiceOnly);
        draft.change_extra_roti(4);
        draft.toggle_upgrade(Upgrade::PremiumProtein);
        draft.toggle_upgrade(Upgrade::ExtraSide);
        draft.toggle_upgrade(Upgrade::SaladAddons);

        let bill = price(&draft, &PricingConfig::default());
        // 120 + 4*5 + 30 + 15 + 20
        assert_eq!(bill.per_thali, 205);
        assert_eq!(bill.subtotal, 410);
        assert_eq!(bill.delivery_fee, 0);
        // 20.5 rounds up
        assert_eq!(bill.tax, 21);
        assert_eq!(bill.total, 431);
    }

    #[test]
    fn test_free_delivery_threshold_is_inclusive() {
        let config = PricingConfig { base_price: 100, ..PricingConfig::default() };
        let bill = price(&draft_with_quantity(2), &config);
        assert_eq!(bill.subtotal, 200);
        assert_eq!(bill.delivery_fee, 0);
    }

    #[test]
    fn test_largest_order_prices_without_overflow() {
        let mut draft = draft_with_quantity(crate::domain::MAX_QUANTITY);
        draft.set_base_option(BaseOption::RiceOnly);
        draft.change_extra_roti(5);
        draft.toggle_upgrade(Upgrade::PremiumProtein);
        draft.toggle_upgrade(Upgrade::ExtraSide);
        draft.toggle_upgrade(Upgrade::SaladAddons);

        let bill = price(&draft, &PricingConfig::default());
        // (120 + 25 + 65) * 50
        assert_eq!(bill.subtotal, 10_500);
        assert_eq!(bill.total, 10_500 + 525 - 525);
    }

    #[test]
    fn test_huge_rates_saturate() {
        let config = PricingConfig { base_price: u32::MAX, ..PricingConfig::default() };
        let bill = price(&draft_with_quantity(2), &config);
        assert_eq!(bill.subtotal, u32::MAX);
        assert_eq!(bill.delivery_fee, 0);
        assert_eq!(bill.tax, percent_of(u32::MAX, 5));
    }

    #[test]
    fn test_bulk_orders_never_cost_more_per_thali() {
        let config = PricingConfig::default();
        for extra in 0..=3 {
            let mut small = draft_with_quantity(2);
            small.change_extra_roti(extra);
            let mut bulk = small.clone();
            bulk.set_quantity(3).unwrap();

            let small_bill = price(&small, &config);
            let bulk_bill = price(&bulk, &config);
            assert!(bulk_bill.total * 2 <= small_bill.total * 3);
        }
    }
}
