//! Framed TCP transport for the route guide server
//!
//! Each connection gets a reader loop, which decodes frames and dispatches
//! calls one after another, and a writer task that owns the socket's write
//! half. Everything the server sends goes through the writer's channel.

use futures::prelude::*;
use futures::stream::{SplitSink, SplitStream};
use routeguide::RouteGuide;
use routeguide_rpc::{CallKind, ClientFrame, RpcServerCodec, ServerFrame, Status};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::codec::Framed;
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::handler::Handler;
use crate::protocol::{CallError, GetFeature, ListFeatures, RecordRoute, RouteChat};

type FrameSink = SplitSink<Framed<TcpStream, RpcServerCodec>, ServerFrame>;
type FrameStream = SplitStream<Framed<TcpStream, RpcServerCodec>>;
type Outbound = mpsc::Sender<ServerFrame>;

/// Run the route guide server until `shutdown` resolves
///
/// Calls on one connection run one after another: while a stream call is
/// open, further calls from the same client wait for it to finish. Clients
/// that need concurrent calls open several connections.
pub async fn run_server(
    listener: tokio::net::TcpListener,
    guide: RouteGuide,
    mut shutdown: impl Future<Output = ()> + Unpin + Send + 'static,
) -> anyhow::Result<()> {
    let handler = Arc::new(Handler::new(guide));

    info!("RouteGuide RPC Server listening on {}", listener.local_addr()?);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((socket, peer)) => {
                        let handler = handler.clone();
                        let span = info_span!("connection", %peer);
                        tokio::spawn(
                            async move {
                                debug!("Connection opened");
                                match serve_connection(socket, &handler).await {
                                    Ok(()) => debug!("Connection closed"),
                                    Err(e) => warn!("Connection aborted: {}", e),
                                }
                            }
                            .instrument(span),
                        );
                    }
                    Err(e) => {
                        error!("Accept error: {}", e);
                    }
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received, stopping server...");
                break;
            }
        }
    }

    Ok(())
}

async fn serve_connection(socket: TcpStream, handler: &Handler) -> Result<(), CallError> {
    let codec = RpcServerCodec::new(handler.config().max_frame_size);
    let (sink, mut frames) = Framed::new(socket, codec).split();

    let (outbound, rx) = mpsc::channel(handler.config().chat_buffer);
    let writer = tokio::spawn(write_frames(sink, rx));

    let result = serve_calls(handler, &mut frames, &outbound).await;

    // Let the writer flush whatever is queued, including the last status.
    drop(outbound);
    if let Ok(Err(e)) = writer.await {
        debug!("Writer stopped: {}", e);
    }

    result
}

async fn write_frames(sink: FrameSink, rx: mpsc::Receiver<ServerFrame>) -> anyhow::Result<()> {
    ReceiverStream::new(rx)
        .map(Ok::<_, anyhow::Error>)
        .forward(sink)
        .await
}

async fn serve_calls(
    handler: &Handler,
    frames: &mut FrameStream,
    outbound: &Outbound,
) -> Result<(), CallError> {
    loop {
        let call = match frames.next().await {
            None => return Ok(()),
            Some(Ok(ClientFrame::Call(call))) => call,
            Some(Ok(_)) => {
                let reason = "expected a call to start";
                send(outbound, ServerFrame::Status(Status::Error(reason.into()))).await?;
                return Err(CallError::UnexpectedFrame(reason));
            }
            Some(Err(e)) => return Err(CallError::Transport(e.to_string())),
        };

        let method = call.method();
        debug!(method, "Call started");

        match dispatch(handler, call, frames, outbound).await {
            Ok(()) => {
                send(outbound, ServerFrame::Status(Status::Ok)).await?;
                debug!(method, "Call completed");
            }
            Err(CallError::UnexpectedFrame(reason)) => {
                send(outbound, ServerFrame::Status(Status::Error(reason.into()))).await?;
                return Err(CallError::UnexpectedFrame(reason));
            }
            Err(e) => return Err(e),
        }
    }
}

async fn dispatch(
    handler: &Handler,
    call: CallKind,
    frames: &mut FrameStream,
    outbound: &Outbound,
) -> Result<(), CallError> {
    match call {
        CallKind::GetFeature(point) => {
            let feature = handler.get_feature(point);
            send(outbound, ServerFrame::Feature(feature)).await
        }
        CallKind::ListFeatures(rect) => {
            let mut features = handler.list_features(rect);
            while let Some(feature) = features.next().await {
                send(outbound, ServerFrame::Feature(feature)).await?;
            }
            Ok(())
        }
        CallKind::RecordRoute => {
            let points = inbound(frames, |frame| match frame {
                ClientFrame::Point(point) => Some(point),
                _ => None,
            });
            let summary = handler.record_route(points).await?;
            send(outbound, ServerFrame::Summary(summary)).await
        }
        CallKind::RouteChat => {
            let (echo_tx, mut echo_rx) = mpsc::channel(handler.config().chat_buffer);

            // Outbound direction of the chat, running on its own task.
            let out = outbound.clone();
            let forwarder = tokio::spawn(async move {
                while let Some(note) = echo_rx.recv().await {
                    send(&out, ServerFrame::Note(note)).await?;
                }
                Ok::<_, CallError>(())
            });

            let notes = inbound(frames, |frame| match frame {
                ClientFrame::Note(note) => Some(note),
                _ => None,
            });
            let received = handler.route_chat(notes, echo_tx).await;

            let forwarded = forwarder
                .await
                .map_err(|e| CallError::Transport(e.to_string()))?;
            received?;
            forwarded
        }
    }
}

/// Items of a client stream, ending cleanly at the half-close.
///
/// EOF before the half-close, a decode failure or a frame `extract` rejects
/// each yield one error and end the stream.
fn inbound<T>(
    frames: &mut FrameStream,
    extract: fn(ClientFrame) -> Option<T>,
) -> impl Stream<Item = Result<T, CallError>> + Send + '_
where
    T: Send + 'static,
{
    stream::unfold(Some(frames), move |state| async move {
        let frames = state?;
        match frames.next().await {
            Some(Ok(ClientFrame::HalfClose)) => None,
            Some(Ok(frame)) => match extract(frame) {
                Some(item) => Some((Ok(item), Some(frames))),
                None => Some((
                    Err(CallError::UnexpectedFrame("frame does not belong to this stream")),
                    None,
                )),
            },
            Some(Err(e)) => Some((Err(CallError::Transport(e.to_string())), None)),
            None => Some((Err(CallError::Disconnected), None)),
        }
    })
}

async fn send(outbound: &Outbound, frame: ServerFrame) -> Result<(), CallError> {
    outbound
        .send(frame)
        .await
        .map_err(|_| CallError::Disconnected)
}
