use serde::{Deserialize, Serialize};

/// Trip statistics returned at the end of a recorded route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Number of points received on the stream
    pub point_count: i32,
    /// Number of received points that matched a named feature
    pub feature_count: i32,
    /// Sum of the legs between consecutive points, truncated to meters
    pub distance: i32,
    /// Whole seconds between the start and the end of the stream
    pub elapsed_time: i32,
}

impl std::fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} points, {} features, {} meters, {} seconds",
            self.point_count, self.feature_count, self.distance, self.elapsed_time
        )
    }
}
