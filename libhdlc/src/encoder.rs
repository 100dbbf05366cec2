//! Frame encoding.
//!
//! Produces the address, control, and information fields of a frame. Flags,
//! escaping, and checksum are left to the transport.

use bytes::{BufMut, BytesMut};

use crate::addr;
use crate::config::Config;
use crate::control;
use crate::error::Error;
use crate::frame::Frame;


struct Encoder<B: BufMut> {
    buf: B,
}

impl<B: BufMut> Encoder<B> {
    fn new(buf: B) -> Self {
        Self { buf }
    }

    fn put_slice(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.put_slice(bytes);
        self
    }
}

impl Encoder<&mut BytesMut> {
    fn reserve(&mut self, additional: usize) -> &mut Self {
        self.buf.reserve(additional);
        self
    }
}


/// Encode `frame` and append it to `buf`.
///
/// Validates the complete frame before writing, so `buf` is left untouched
/// on failure.
pub fn encode(buf: &mut BytesMut, frame: &Frame, config: &Config) -> Result<(), Error> {
    let ctrl = frame.control().ok_or(Error::EmptyFrame)?;

    let address = addr::encode(frame.address(), config.address)?;
    let ctrl = ctrl.encode(config.modulo)?;
    let payload = frame.payload().map(|p| &p[..]).unwrap_or_default();

    Encoder::new(buf)
        .reserve(addr::MAX_LEN + control::MAX_LEN + payload.len())
        .put_slice(&address)            // address
        .put_slice(&ctrl)               // control
        .put_slice(payload);            // information

    Ok(())
}

pub fn encode_bytes(frame: &Frame, config: &Config) -> Result<BytesMut, Error> {
    let mut buf = BytesMut::new();
    encode(&mut buf, frame, config)?;
    Ok(buf)
}
