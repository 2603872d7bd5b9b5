//! Domain error types

use thiserror::Error;

/// Validation errors raised before any network request is dispatched.
///
/// Each variant corresponds to a missing precondition of one of the
/// session operations; none of them changes session state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please describe your vehicle first (e.g. \"2015 Honda Civic\")")]
    EmptyQuery,

    #[error("Please describe the problem you are seeing")]
    EmptyDescription,

    #[error("No image selected")]
    EmptyImage,

    #[error("Identify your vehicle before requesting a diagnosis")]
    NoVehicleIdentified,
}
