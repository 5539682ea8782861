//! Simulated payment gateway. Every charge succeeds after a fixed delay.

use std::time::Duration;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Upi { vpa: String },
    Card { number: String, holder: String },
    #[allow(dead_code)]
    Wallet,
}

impl PaymentMethod {
    /// Display form with card numbers masked to the last four digits.
    pub fn describe(&self) -> String {
        match self {
            PaymentMethod::Upi { vpa } => format!("UPI {}", vpa),
            PaymentMethod::Card { number, .. } => {
                let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
                let last_four: String = digits[digits.len().saturating_sub(4)..].iter().collect();
                format!("Card ending {}", last_four)
            }
            PaymentMethod::Wallet => "Wallet".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub amount: u32,
    pub method: String,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MockGateway {
    delay: Duration,
}

impl MockGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[instrument(skip(self, method), fields(method = %method.describe()))]
    pub async fn charge(&self, amount: u32, method: &PaymentMethod) -> PaymentReceipt {
        tokio::time::sleep(self.delay).await;
        info!("Payment captured");
        PaymentReceipt {
            amount,
            method: method.describe(),
            paid_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_is_masked() {
        let card = PaymentMethod::Card { number: "4111 1111 1111 1234".into(), holder: "A".into() };
        assert_eq!(card.describe(), "Card ending 1234");
        let short = PaymentMethod::Card { number: "12".into(), holder: "A".into() };
        assert_eq!(short.describe(), "Card ending 12");
        assert_eq!(PaymentMethod::Wallet.describe(), "Wallet");
    }

    #[tokio::test]
    async fn test_charge_always_succeeds() {
        let gateway = MockGateway::new(Duration::from_millis(5));
        let receipt = gateway.charge(146, &PaymentMethod::Upi { vpa: "me@upi".into() }).await;
        assert_eq!(receipt.amount, 146);
        assert_eq!(receipt.method, "UPI me@upi");
    }
}
