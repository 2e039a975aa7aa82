//! Framed TCP transport for the route guide client
//!
//! Calls run one at a time over a single connection, matching the server.

use futures::prelude::*;
use routeguide_rpc::{CallKind, ClientFrame, RpcClientCodec, ServerFrame, Status};
use routeguide_types::{Feature, Point, Rectangle, RouteNote, RouteSummary};
use std::net::SocketAddr;
use std::pin::pin;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),
    #[error("Transport error: {0}")]
    Transport(#[from] anyhow::Error),
    #[error("Server error: {0}")]
    Server(String),
    #[error("Protocol error: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

pub struct RouteGuideClient {
    framed: Framed<TcpStream, RpcClientCodec>,
}

impl RouteGuideClient {
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        let socket = TcpStream::connect(addr).await?;
        socket.set_nodelay(true)?;
        Ok(Self {
            framed: Framed::new(socket, RpcClientCodec::default()),
        })
    }

    /// Look up the feature at `point`. A miss comes back as an unnamed
    /// feature at the same location.
    pub async fn get_feature(&mut self, point: Point) -> Result<Feature> {
        self.framed
            .send(ClientFrame::Call(CallKind::GetFeature(point)))
            .await?;

        let feature = match next_frame(self.framed.next().await)? {
            ServerFrame::Feature(feature) => feature,
            other => return Err(unexpected(other)),
        };
        self.finish().await?;

        Ok(feature)
    }

    /// Every feature inside `rect`, in database order.
    pub async fn list_features(&mut self, rect: Rectangle) -> Result<Vec<Feature>> {
        self.framed
            .send(ClientFrame::Call(CallKind::ListFeatures(rect)))
            .await?;

        let mut features = Vec::new();
        loop {
            match next_frame(self.framed.next().await)? {
                ServerFrame::Feature(feature) => features.push(feature),
                ServerFrame::Status(status) => {
                    check_status(status)?;
                    return Ok(features);
                }
                other => return Err(unexpected(other)),
            }
        }
    }

    /// Stream `points` to the server and wait for the route summary.
    pub async fn record_route<S>(&mut self, points: S) -> Result<RouteSummary>
    where
        S: Stream<Item = Point>,
    {
        self.framed
            .send(ClientFrame::Call(CallKind::RecordRoute))
            .await?;

        let mut points = pin!(points);
        while let Some(point) = points.next().await {
            self.framed.send(ClientFrame::Point(point)).await?;
        }
        self.framed.send(ClientFrame::HalfClose).await?;

        let summary = match next_frame(self.framed.next().await)? {
            ServerFrame::Summary(summary) => summary,
            other => return Err(unexpected(other)),
        };
        self.finish().await?;

        Ok(summary)
    }

    /// Send `notes` while collecting the echoes the server streams back.
    ///
    /// Both directions run concurrently; echoes are returned in the order
    /// they arrived.
    pub async fn route_chat<S>(&mut self, notes: S) -> Result<Vec<RouteNote>>
    where
        S: Stream<Item = RouteNote>,
    {
        self.framed
            .send(ClientFrame::Call(CallKind::RouteChat))
            .await?;

        let (mut sink, mut frames) = (&mut self.framed).split();

        let writer = async {
            let mut notes = pin!(notes);
            while let Some(note) = notes.next().await {
                sink.send(ClientFrame::Note(note)).await?;
            }
            sink.send(ClientFrame::HalfClose).await?;
            Ok::<_, ClientError>(())
        };

        let reader = async {
            let mut echoes = Vec::new();
            loop {
                match next_frame(frames.next().await)? {
                    ServerFrame::Note(note) => echoes.push(note),
                    ServerFrame::Status(status) => {
                        check_status(status)?;
                        return Ok::<_, ClientError>(echoes);
                    }
                    other => return Err(unexpected(other)),
                }
            }
        };

        let ((), echoes) = futures::try_join!(writer, reader)?;
        Ok(echoes)
    }

    async fn finish(&mut self) -> Result<()> {
        match next_frame(self.framed.next().await)? {
            ServerFrame::Status(status) => check_status(status),
            other => Err(unexpected(other)),
        }
    }
}

fn next_frame(frame: Option<anyhow::Result<ServerFrame>>) -> Result<ServerFrame> {
    match frame {
        Some(frame) => Ok(frame?),
        None => Err(ClientError::Connection(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "server closed the connection",
        ))),
    }
}

fn check_status(status: Status) -> Result<()> {
    match status {
        Status::Ok => Ok(()),
        Status::Error(message) => Err(ClientError::Server(message)),
    }
}

fn unexpected(frame: ServerFrame) -> ClientError {
    match frame {
        ServerFrame::Status(Status::Error(message)) => ClientError::Server(message),
        other => ClientError::Protocol(format!("unexpected {:?} frame", other.tag())),
    }
}
