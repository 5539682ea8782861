use crate::actor_framework::Entity;
use crate::domain::{AddressKind, SavedAddress};
use super::error::AddressError;

impl Entity for SavedAddress {
    type Id = String;
    type CreateParams = AddressKind;
    type Action = ();
    type ActionResult = ();
    type Error = AddressError;

    fn id(&self) -> &String { &self.id }

    /// Validates and stores an address.
    ///
    /// Manual entries are trimmed; an optional blank `details` is dropped.
    fn from_create_params(id: String, params: AddressKind) -> Result<Self, AddressError> {
        let kind = match params {
            AddressKind::Geolocation { latitude, longitude } => {
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(AddressError::InvalidCoordinates { latitude, longitude });
                }
                AddressKind::Geolocation { latitude, longitude }
            }
            AddressKind::Manual { hostel, room, details } => {
                let hostel = hostel.trim().to_string();
                let room = room.trim().to_string();
                if hostel.is_empty() || room.is_empty() {
                    return Err(AddressError::MissingDetails);
                }
                let details = details
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty());
                AddressKind::Manual { hostel, room, details }
            }
        };
        Ok(Self { id, kind })
    }

    /// Saved addresses are immutable.
    fn handle_action(&mut self, _action: ()) -> Result<(), AddressError> {
        Ok(())
    }
}
