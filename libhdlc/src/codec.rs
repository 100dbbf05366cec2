use bytes::{Bytes, BytesMut};

use super::{decoder, encoder, Config, Error, Frame};


#[derive(Debug)]
pub enum CodecError {
    Io(std::io::Error),
    Frame(Error),
}

impl From<std::io::Error> for CodecError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<Error> for CodecError {
    fn from(value: Error) -> Self {
        Self::Frame(value)
    }
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Io(e) => write!(f, "i/o error: {e}"),
            CodecError::Frame(e) => write!(f, "invalid frame: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io(e) => Some(e),
            CodecError::Frame(e) => Some(e),
        }
    }
}


/// HDLC frame codec with fixed address width and sequence modulo.
///
/// The codec itself is stateless and can be freely copied and shared
/// between threads.
///
/// As `tokio_util` decoder, it treats every source buffer as exactly one
/// frame. This matches packet-oriented transports such as
/// `tokio_util::udp::UdpFramed`, where each datagram carries a single frame.
/// Byte streams need a delimiting layer in front of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    config: Config,
}

impl Codec {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dissect(&self, raw: &[u8]) -> Result<Frame, Error> {
        decoder::decode(raw, &self.config)
    }

    pub fn dissect_bytes(&self, raw: Bytes) -> Result<Frame, Error> {
        decoder::decode_bytes(raw, &self.config)
    }

    pub fn encode(&self, frame: &Frame, dst: &mut BytesMut) -> Result<(), Error> {
        encoder::encode(dst, frame, &self.config)
    }

    pub fn encode_bytes(&self, frame: &Frame) -> Result<BytesMut, Error> {
        encoder::encode_bytes(frame, &self.config)
    }
}

impl tokio_util::codec::Encoder<&Frame> for Codec {
    type Error = CodecError;

    fn encode(&mut self, frame: &Frame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        encoder::encode(dst, frame, &self.config)?;
        Ok(())
    }
}

impl tokio_util::codec::Encoder<Frame> for Codec {
    type Error = CodecError;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        tokio_util::codec::Encoder::encode(self, &frame, dst)
    }
}

impl tokio_util::codec::Decoder for Codec {
    type Item = Frame;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let raw = src.split().freeze();

        match decoder::decode_bytes(raw, &self.config) {
            Ok(frame) => Ok(Some(frame)),
            Err(e) => {
                tracing::warn!("dropping invalid frame: {e}");
                Err(e.into())
            },
        }
    }
}
