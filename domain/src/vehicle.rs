//! Vehicle identity value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identified vehicle: the make/model/year triple returned by the
/// identification endpoints.
///
/// A session holds at most one current `Vehicle`; it is overwritten by each
/// successful identification and cleared by a failed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Manufacturer, e.g. "Honda"
    pub make: String,
    /// Model name, e.g. "Civic"
    pub model: String,
    /// Model year, e.g. 2015
    pub year: u16,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: u16) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)
    }
}
