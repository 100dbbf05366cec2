//! High-level Data Link Control (HDLC, ISO/IEC 13239) frame codec.
//!
//! Dissects the address, control, and information fields of a single frame
//! into a [`Frame`] and encodes frames back into their octet representation.
//! The frame is expected to be delimited and checked already: flags, byte
//! or bit stuffing, and the frame check sequence are handled by the
//! transport.
//!
//! ```
//! use hdlc::{Codec, Config, FrameKind, SupervisoryKind};
//!
//! let codec = Codec::new(Config::default());
//!
//! let frame = codec.dissect(&[0x30, 0x21]).unwrap();
//! assert_eq!(frame.kind(), FrameKind::Supervisory(SupervisoryKind::ReceiveReady));
//! assert_eq!(frame.nr(), Some(1));
//!
//! let raw = codec.encode_bytes(&frame).unwrap();
//! assert_eq!(raw[..], [0x30, 0x21]);
//! ```

pub mod addr;
pub mod codec;
pub mod config;
pub mod control;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod kind;

pub use codec::{Codec, CodecError};
pub use config::{AddressWidth, Config, Modulo};
pub use control::Control;
pub use error::{Error, Field};
pub use frame::Frame;
pub use kind::{FrameKind, SupervisoryKind, UnnumberedKind};
