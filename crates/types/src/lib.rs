//! # routeguide-types
//!
//! Data types shared by the route guide server, client and wire codec.
//!
//! - **Coordinates**: [`geo::Point`], latitude/longitude in fixed-point degrees
//! - **Regions**: [`bbox::Rectangle`], normalized to min/max corners before use
//! - **Messages**: [`feature::Feature`], [`note::RouteNote`], [`stats::RouteSummary`]
//!
//! Coordinates are stored as degrees multiplied by 10,000,000 so that equality
//! and containment are exact integer comparisons. Conversions to floating-point
//! degrees only happen for distance math and display.
//!
//! ## Examples
//!
//! ```rust
//! use routeguide_types::bbox::Rectangle;
//! use routeguide_types::geo::Point;
//!
//! let rect = Rectangle::new(Point::new(420_000_000, -730_000_000), Point::new(400_000_000, -750_000_000));
//! assert!(rect.contains(&Point::new(409_146_138, -746_188_906)));
//!
//! let here = Point::new(409_146_138, -746_188_906);
//! assert_eq!(here.haversine_distance(&here), 0.0);
//! ```

pub mod bbox;
pub mod feature;
pub mod geo;
pub mod note;
pub mod stats;

pub use self::bbox::Rectangle;
pub use self::feature::Feature;
pub use self::geo::Point;
pub use self::note::RouteNote;
pub use self::stats::RouteSummary;
