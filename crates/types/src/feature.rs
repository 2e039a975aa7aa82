use crate::geo::Point;
use serde::{Deserialize, Serialize};

/// A named point of interest.
///
/// A feature with an empty name is how lookups say "nothing is here"; it is a
/// normal value, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub location: Point,
}

impl Feature {
    pub fn new(name: impl Into<String>, location: Point) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// The "no feature here" answer for `location`.
    pub fn unnamed(location: Point) -> Self {
        Self {
            name: String::new(),
            location,
        }
    }

    /// Whether this feature actually names something.
    #[inline]
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}
