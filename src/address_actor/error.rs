use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    #[error("Address not found: {0}")]
    NotFound(String),
    #[error("Please fill in hostel and room details")]
    MissingDetails,
    #[error("Invalid coordinates: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<AddressError>> for AddressError {
    fn from(err: FrameworkError<AddressError>) -> Self {
        match err {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => AddressError::NotFound(id),
            other => AddressError::ActorCommunicationError(other.to_string()),
        }
    }
}
