use serde::{Deserialize, Serialize};

/// Where a saved address came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddressKind {
    Geolocation { latitude: f64, longitude: f64 },
    Manual {
        hostel: String,
        room: String,
        details: Option<String>,
    },
}

/// A delivery address the customer saved at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: String,
    pub kind: AddressKind,
}

impl SavedAddress {
    /// Short heading shown above the address.
    pub fn title(&self) -> &str {
        match &self.kind {
            AddressKind::Geolocation { .. } => "Current Location",
            AddressKind::Manual { hostel, .. } => hostel,
        }
    }

    /// Full printable address.
    pub fn label(&self) -> String {
        match &self.kind {
            AddressKind::Geolocation { latitude, longitude } => {
                format!("Current Location ({:.4}, {:.4})", latitude, longitude)
            }
            AddressKind::Manual { hostel, room, details } => {
                let line = format!("{}, Room {}", hostel, room);
                match details {
                    Some(details) => format!("{}\n{}", line, details),
                    None => line,
                }
            }
        }
    }
}
