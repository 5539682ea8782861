#[macro_use]
mod macros;
mod address_client;
mod order_client;

pub use address_client::AddressClient;
pub use order_client::OrderClient;
