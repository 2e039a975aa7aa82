//! Route guide client
//!
//! Async client for the route guide service.
//!
//! # Example
//!
//! ```ignore
//! use routeguide_client::RouteGuideClient;
//! use routeguide_types::Point;
//!
//! let mut client = RouteGuideClient::connect(addr).await?;
//! let feature = client.get_feature(Point::new(409_146_138, -746_188_906)).await?;
//! ```

pub mod transport;

pub use transport::rpc::{ClientError, Result, RouteGuideClient};
