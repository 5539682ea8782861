use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::address_actor::AddressError;
use crate::domain::{AddressKind, SavedAddress};

/// Client for the saved-address book.
#[derive(Clone)]
pub struct AddressClient {
    inner: ResourceClient<SavedAddress>,
}

impl_basic_client!(AddressClient, SavedAddress, AddressError, address, addresses);

impl AddressClient {
    #[instrument(skip(self))]
    pub async fn add_geolocation(&self, latitude: f64, longitude: f64) -> Result<SavedAddress, AddressError> {
        debug!("Sending request");
        let address = self.inner.create(AddressKind::Geolocation { latitude, longitude }).await?;
        info!(address_id = %address.id, "Location saved");
        Ok(address)
    }

    #[instrument(skip(self))]
    pub async fn add_manual(
        &self,
        hostel: String,
        room: String,
        details: Option<String>,
    ) -> Result<SavedAddress, AddressError> {
        debug!("Sending request");
        let address = self.inner.create(AddressKind::Manual { hostel, room, details }).await?;
        info!(address_id = %address.id, "Address saved");
        Ok(address)
    }
}
