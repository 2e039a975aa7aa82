//! Stateful computations driven by a single call.

pub mod route;

pub use route::RouteAggregator;
