//! Frame dissection.
//!
//! Input buffers are expected to contain exactly one frame with flags,
//! escaping, and checksum already removed.

use bytes::Bytes;

use crate::addr;
use crate::config::Config;
use crate::control::Control;
use crate::error::Error;
use crate::frame::Frame;


/// Dissect a single frame from `src`.
///
/// An empty buffer yields an empty frame.
pub fn decode(src: &[u8], config: &Config) -> Result<Frame, Error> {
    decode_bytes(Bytes::copy_from_slice(src), config)
}

/// Dissect a single frame from `src` without copying the payload.
pub fn decode_bytes(src: Bytes, config: &Config) -> Result<Frame, Error> {
    if src.is_empty() {
        return Ok(Frame::empty());
    }

    let result = dissect(src, config);

    match &result {
        Ok(frame) => tracing::trace!("received frame: {frame}"),
        Err(e) => tracing::debug!("failed to dissect frame: {e}"),
    }

    result
}

fn dissect(mut src: Bytes, config: &Config) -> Result<Frame, Error> {
    // decode address
    let (address, n) = addr::decode(&src, config.address)?;

    // decode control field
    let (control, m) = Control::decode(&src[n..], config.modulo)?;

    // remaining data
    let data = src.split_off(n + m);

    let payload = if control.kind().has_payload() {
        Some(data)
    } else if data.is_empty() {
        None
    } else {
        return Err(Error::UnexpectedPayload);
    };

    Frame::new(address, control, payload)
}
