//! Wire protocol for the route guide service.
//!
//! Every frame is a one-byte tag, a big-endian `u32` payload length and a
//! bincode payload. A call opens with [`ClientFrame::Call`]; streaming inputs
//! end with [`ClientFrame::HalfClose`]; the server ends every completed call
//! with [`ServerFrame::Status`].

use anyhow::Result;
use bytes::{Buf, BufMut, BytesMut};
use routeguide_types::{Feature, Point, Rectangle, RouteNote, RouteSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};

pub const MAX_FRAME_SIZE: usize = 10 * 1024 * 1024; // 10MB

const HEADER_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameTag {
    Call = 0x01,
    Message = 0x02,
    HalfClose = 0x03,
    Status = 0x04,
}

impl TryFrom<u8> for FrameTag {
    type Error = FrameError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0x01 => Ok(FrameTag::Call),
            0x02 => Ok(FrameTag::Message),
            0x03 => Ok(FrameTag::HalfClose),
            0x04 => Ok(FrameTag::Status),
            other => Err(FrameError::UnknownTag(other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Frame size {len} exceeds maximum {max}")]
    TooLarge { len: usize, max: usize },
    #[error("Unknown frame tag {0:#04x}")]
    UnknownTag(u8),
    #[error("Frame tag {tag:?} does not match its payload")]
    TagMismatch { tag: FrameTag },
}

/// The four call shapes, with the request of the shapes that take one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallKind {
    /// Unary point lookup
    GetFeature(Point),
    /// Server-streaming rectangle listing
    ListFeatures(Rectangle),
    /// Client-streaming route, points follow as [`ClientFrame::Point`]
    RecordRoute,
    /// Bidirectional chat, notes follow as [`ClientFrame::Note`]
    RouteChat,
}

impl CallKind {
    pub fn method(&self) -> &'static str {
        match self {
            CallKind::GetFeature(_) => "GetFeature",
            CallKind::ListFeatures(_) => "ListFeatures",
            CallKind::RecordRoute => "RecordRoute",
            CallKind::RouteChat => "RouteChat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientFrame {
    Call(CallKind),
    Point(Point),
    Note(RouteNote),
    HalfClose,
}

impl ClientFrame {
    pub fn tag(&self) -> FrameTag {
        match self {
            ClientFrame::Call(_) => FrameTag::Call,
            ClientFrame::Point(_) | ClientFrame::Note(_) => FrameTag::Message,
            ClientFrame::HalfClose => FrameTag::HalfClose,
        }
    }
}

/// Outcome of a call, always the last frame the server sends for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Error(String),
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerFrame {
    Feature(Feature),
    Summary(RouteSummary),
    Note(RouteNote),
    Status(Status),
}

impl ServerFrame {
    pub fn tag(&self) -> FrameTag {
        match self {
            ServerFrame::Feature(_) | ServerFrame::Summary(_) | ServerFrame::Note(_) => {
                FrameTag::Message
            }
            ServerFrame::Status(_) => FrameTag::Status,
        }
    }
}

fn decode_frame<T: DeserializeOwned>(
    src: &mut BytesMut,
    max_frame_size: usize,
) -> Result<Option<(FrameTag, T)>> {
    if src.len() < HEADER_LEN {
        return Ok(None);
    }

    let mut buf = std::io::Cursor::new(&src[..]);
    let tag = FrameTag::try_from(buf.get_u8())?;
    let len = buf.get_u32() as usize;

    if len > max_frame_size {
        return Err(FrameError::TooLarge {
            len,
            max: max_frame_size,
        }
        .into());
    }

    if src.len() < HEADER_LEN + len {
        src.reserve(HEADER_LEN + len - src.len());
        return Ok(None);
    }

    src.advance(HEADER_LEN);
    let payload = src.split_to(len);
    let item: T = bincode::deserialize(&payload)?;

    Ok(Some((tag, item)))
}

fn encode_frame<T: Serialize>(tag: FrameTag, item: &T, dst: &mut BytesMut) -> Result<()> {
    let serialized_payload = bincode::serialize(item)?;
    let len = u32::try_from(serialized_payload.len())?;

    dst.reserve(HEADER_LEN + serialized_payload.len());
    dst.put_u8(tag as u8);
    dst.put_u32(len);
    dst.put_slice(&serialized_payload);

    Ok(())
}

/// Server side: decodes [`ClientFrame`]s, encodes [`ServerFrame`]s.
#[derive(Debug, Clone, Copy)]
pub struct RpcServerCodec {
    max_frame_size: usize,
}

impl RpcServerCodec {
    pub fn new(max_frame_size: usize) -> Self {
        Self { max_frame_size }
    }
}

impl Default for RpcServerCodec {
    fn default() -> Self {
        Self::new(MAX_FRAME_SIZE)
    }
}

impl Decoder for RpcServerCodec {
    type Item = ClientFrame;
    type Error = anyhow::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match decode_frame::<ClientFrame>(src, self.max_frame_size)? {
            Some((tag, frame)) if frame.tag() == tag => Ok(Some(frame)),
            Some((tag, _)) => Err(FrameError::TagMismatch { tag }.into()),
            None => Ok(None),
        }
    }
}

impl Encoder<ServerFrame> for RpcServerCodec {
    type Error = anyhow::Error;

    fn encode(&mut self, item: ServerFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        encode_frame(item.tag(), &item, dst)
    }
}

/// Client side: decodes [`ServerFrame`]s, encodes [`ClientFrame`]s.
#[derive(Debug, Clone, Copy)]
pub struct RpcClientCodec {
    max_frame_size: usize,
}

impl RpcClientCodec {
    pub fn new(max_frame_size: usize) -> Self {
        Self { max_frame_size }
    }
}

impl Default for RpcClientCodec {
    fn default() -> Self {
        Self::new(MAX_FRAME_SIZE)
    }
}

impl Decoder for RpcClientCodec {
    type Item = ServerFrame;
    type Error = anyhow::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match decode_frame::<ServerFrame>(src, self.max_frame_size)? {
            Some((tag, frame)) if frame.tag() == tag => Ok(Some(frame)),
            Some((tag, _)) => Err(FrameError::TagMismatch { tag }.into()),
            None => Ok(None),
        }
    }
}

impl Encoder<ClientFrame> for RpcClientCodec {
    type Error = anyhow::Error;

    fn encode(&mut self, item: ClientFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        encode_frame(item.tag(), &item, dst)
    }
}
