pub mod dish;
pub mod draft;
pub mod order;
pub mod address;
pub mod user;

pub use dish::*;
pub use draft::*;
pub use order::*;
pub use address::*;
pub use user::*;
