//! Route guide server
//!
//! Serves the four route guide calls over a framed TCP protocol.
//!
//! # Calls
//!
//! - **GetFeature**: unary point lookup
//! - **ListFeatures**: server-streaming rectangle listing
//! - **RecordRoute**: client-streaming route summary
//! - **RouteChat**: bidirectional note exchange
//!
//! # Example
//!
//! ```ignore
//! use routeguide_server::run_server;
//!
//! run_server(listener, guide, shutdown).await?;
//! ```

pub mod handler;
pub mod protocol;
pub mod transport;

pub use handler::Handler;
pub use protocol::{CallError, GetFeature, ListFeatures, RecordRoute, RouteChat};

// Re-export default transport for convenience
pub use transport::rpc::run_server;
