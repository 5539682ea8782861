//! Text and links used to hand the confirmation code to the delivery partner.

use thiserror::Error;
use url::Url;
use crate::domain::Order;

const WHATSAPP_BASE: &str = "https://wa.me/";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Phone number must be digits only, got {0:?}")]
    InvalidPhone(String),
    #[error("Invalid handoff link: {0}")]
    Url(#[from] url::ParseError),
}

/// Chat link pre-filled with the order's OTP and id. `phone` is digits only,
/// including the country code.
pub fn whatsapp_link(phone: &str, order: &Order) -> Result<Url, ShareError> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ShareError::InvalidPhone(phone.to_string()));
    }
    let text = format!("Hi! My order OTP is: {}. Order ID: {}", order.confirmation_code, order.id);
    let mut url = Url::parse(WHATSAPP_BASE)?;
    url.set_path(phone);
    url.query_pairs_mut().append_pair("text", &text);
    Ok(url)
}

pub fn share_text(order: &Order) -> String {
    format!(
        "Order confirmed! OTP: {}. Estimated delivery: {}",
        order.confirmation_code,
        order.estimated_delivery_at.format("%H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::domain::{AddressKind, OrderDraft, OrderStatus, SavedAddress};

    fn order() -> Order {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 5, 0).unwrap();
        Order {
            id: "1714565100000-1".into(),
            items: OrderDraft::new(),
            address: SavedAddress {
                id: "address_1".into(),
                kind: AddressKind::Geolocation { latitude: 0.0, longitude: 0.0 },
            },
            total: 146,
            confirmation_code: "4821".into(),
            status: OrderStatus::Pending,
            created_at,
            estimated_delivery_at: created_at + chrono::Duration::minutes(40),
        }
    }

    #[test]
    fn test_whatsapp_link() {
        let link = whatsapp_link("919876543210", &order()).unwrap();
        assert_eq!(link.host_str(), Some("wa.me"));
        assert_eq!(link.path(), "/919876543210");

        let (key, text) = link.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(text, "Hi! My order OTP is: 4821. Order ID: 1714565100000-1");
        assert!(!link.as_str().contains(' '));
    }

    #[test]
    fn test_phone_must_be_digits() {
        for phone in ["//evil.example", "9198?text=hi", "+91 98765", ""] {
            assert!(
                matches!(whatsapp_link(phone, &order()), Err(ShareError::InvalidPhone(_))),
                "accepted {phone:?}"
            );
        }
    }

    #[test]
    fn test_share_text() {
        assert_eq!(share_text(&order()), "Order confirmed! OTP: 4821. Estimated delivery: 12:45");
    }
}
