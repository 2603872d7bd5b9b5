//! Loading indicator

mod indicator;

pub use indicator::LoadingIndicator;
