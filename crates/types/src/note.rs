use crate::geo::Point;
use serde::{Deserialize, Serialize};

/// A chat message pinned to a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNote {
    pub message: String,
    pub location: Point,
}

impl RouteNote {
    pub fn new(message: impl Into<String>, location: Point) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}
