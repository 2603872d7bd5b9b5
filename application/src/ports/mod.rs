//! Ports (interfaces) for the application layer
//!
//! Ports define how the application layer talks to the outside world.
//! Adapters implementing them live in infrastructure (HTTP gateway) and
//! presentation (console presenter).

pub mod diagnostic_gateway;
pub mod presenter;
