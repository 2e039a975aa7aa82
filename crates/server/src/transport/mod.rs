//! Transport layer for the route guide server
//!
//! Available transports:
//! - `rpc` - framed bincode over TCP (default)

pub mod rpc;
