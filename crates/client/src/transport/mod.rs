//! Transport layer for the route guide client

pub mod rpc;
