//! Service capabilities, one trait per call shape.
//!
//! The transport turns frames into the plain values and streams these traits
//! take, so an implementation never sees the wire format.

use futures::Stream;
use routeguide_types::{Feature, Point, Rectangle, RouteNote, RouteSummary};
use std::future::Future;
use thiserror::Error;
use tokio::sync::mpsc;

/// Why a call ended without a result.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("Peer disconnected before the call finished")]
    Disconnected,
    #[error("Unexpected frame: {0}")]
    UnexpectedFrame(&'static str),
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Unary: one point in, one feature out.
pub trait GetFeature {
    fn get_feature(&self, point: Point) -> Feature;
}

/// Server streaming: one rectangle in, a finite stream of features out.
pub trait ListFeatures {
    type Features: Stream<Item = Feature> + Send + Unpin + 'static;

    fn list_features(&self, rect: Rectangle) -> Self::Features;
}

/// Client streaming: a stream of points in, one summary out.
///
/// An `Err` item means the stream was aborted; no summary is produced then.
pub trait RecordRoute {
    fn record_route<S>(
        &self,
        points: S,
    ) -> impl Future<Output = Result<RouteSummary, CallError>> + Send
    where
        S: Stream<Item = Result<Point, CallError>> + Send;
}

/// Bidirectional: notes in, echoes out on `echoes`, both progressing
/// independently until the inbound stream ends.
pub trait RouteChat {
    fn route_chat<S>(
        &self,
        notes: S,
        echoes: mpsc::Sender<RouteNote>,
    ) -> impl Future<Output = Result<(), CallError>> + Send
    where
        S: Stream<Item = Result<RouteNote, CallError>> + Send;
}
