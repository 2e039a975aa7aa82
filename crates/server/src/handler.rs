//! Handler implementation for the route guide service

use crate::protocol::{CallError, GetFeature, ListFeatures, RecordRoute, RouteChat};
use futures::stream::{self, Stream, StreamExt};
use routeguide::{Config, RouteGuide};
use routeguide_types::{Feature, Point, Rectangle, RouteNote, RouteSummary};
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Clone)]
pub struct Handler {
    guide: RouteGuide,
}

impl Handler {
    pub fn new(guide: RouteGuide) -> Self {
        Self { guide }
    }

    pub fn config(&self) -> &Config {
        self.guide.config()
    }
}

impl GetFeature for Handler {
    fn get_feature(&self, point: Point) -> Feature {
        self.guide.get_feature(&point)
    }
}

impl ListFeatures for Handler {
    type Features = stream::Iter<std::vec::IntoIter<Feature>>;

    fn list_features(&self, rect: Rectangle) -> Self::Features {
        let features = self.guide.list_features(rect);
        debug!("{} features inside {}", features.len(), rect);
        stream::iter(features)
    }
}

impl RecordRoute for Handler {
    async fn record_route<S>(&self, points: S) -> Result<RouteSummary, CallError>
    where
        S: Stream<Item = Result<Point, CallError>> + Send,
    {
        let mut route = self.guide.route_recorder();
        let mut points = std::pin::pin!(points);

        while let Some(point) = points.next().await {
            route.record(point?);
        }

        let summary = route.finish();
        debug!("Recorded route: {}", summary);
        Ok(summary)
    }
}

impl RouteChat for Handler {
    async fn route_chat<S>(
        &self,
        notes: S,
        echoes: mpsc::Sender<RouteNote>,
    ) -> Result<(), CallError>
    where
        S: Stream<Item = Result<RouteNote, CallError>> + Send,
    {
        let mut notes = std::pin::pin!(notes);

        while let Some(note) = notes.next().await {
            // The note is in the log before any echo is sent, so a failed send
            // below never loses it.
            for earlier in self.guide.exchange_note(note?) {
                echoes
                    .send(earlier)
                    .await
                    .map_err(|_| CallError::Disconnected)?;
            }
        }

        Ok(())
    }
}
