//! Service core of the route guide: a read-only feature store, per-call route
//! aggregation, and a shared note log for chat.
//!
//! ## Components
//! - **Feature store**: exact point lookups and inclusive rectangle listings
//! - **Route aggregation**: point and feature counts, haversine distance, elapsed time
//! - **Note exchange**: scan-then-append under one lock, echoing earlier notes
//!   at the same location
//!
//! ```rust
//! use routeguide::{Feature, Point, Rectangle, RouteGuide, RouteNote};
//!
//! let guide = RouteGuide::builder()
//!     .features(vec![Feature::new("A", Point::new(10_000_000, 10_000_000))])
//!     .build()?;
//!
//! assert_eq!(guide.get_feature(&Point::new(0, 0)).name, "");
//!
//! let rect = Rectangle::new(Point::new(20_000_000, 20_000_000), Point::new(0, 0));
//! assert_eq!(guide.list_features(rect).len(), 1);
//!
//! let mut route = guide.route_recorder();
//! route.record(Point::new(10_000_000, 10_000_000));
//! assert_eq!(route.finish().feature_count, 1);
//!
//! guide.exchange_note(RouteNote::new("hello", Point::new(0, 0)));
//! let echoes = guide.exchange_note(RouteNote::new("again", Point::new(0, 0)));
//! assert_eq!(echoes[0].message, "hello");
//! # Ok::<(), routeguide::RouteGuideError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod db;
pub mod error;
pub mod storage;

pub use builder::RouteGuideBuilder;
pub use compute::RouteAggregator;
pub use config::Config;
pub use db::{FeatureStore, NoteExchange, RouteGuide};
pub use error::{Result, RouteGuideError};

pub use routeguide_types::{Feature, Point, Rectangle, RouteNote, RouteSummary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Config, Result, RouteGuide, RouteGuideBuilder, RouteGuideError};

    pub use crate::{FeatureStore, NoteExchange, RouteAggregator};

    pub use crate::{Feature, Point, Rectangle, RouteNote, RouteSummary};
}
