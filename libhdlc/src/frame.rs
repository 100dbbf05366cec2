//! In-memory representation of a single HDLC frame.

use bytes::Bytes;

use crate::config::Modulo;
use crate::control::Control;
use crate::error::{Error, Field};
use crate::kind::{FrameKind, SupervisoryKind, UnnumberedKind};


/// Largest sequence number representable in any mode.
const SEQ_MAX: u8 = 127;


/// A single HDLC frame: address, control field, and optional payload.
///
/// Field presence follows the frame kind: N(S) exists only for I-frames, N(R)
/// for I- and S-frames, and the payload for I-frames and the unnumbered kinds
/// defining an information field. Setters reject values the current kind
/// does not define.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    address: u32,
    pf: bool,
    body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Body {
    #[default]
    Unset,
    Information {
        ns: u8,
        nr: u8,
        payload: Bytes,
    },
    Supervisory {
        kind: SupervisoryKind,
        nr: u8,
    },
    Unnumbered {
        kind: UnnumberedKind,
        // present iff kind.has_payload()
        payload: Option<Bytes>,
    },
}

impl Frame {
    /// Create an empty frame without kind.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a frame from a decoded control field.
    ///
    /// The payload must be given exactly if the frame kind defines an
    /// information field. A missing or superfluous payload is reported as
    /// invalid payload field. Sequence numbers are subject to the same range
    /// check as in [`Frame::set_ns`] and [`Frame::set_nr`].
    pub fn new(address: u32, control: Control, payload: Option<Bytes>) -> Result<Self, Error> {
        let kind = control.kind();

        if let Some(ns) = control.ns() {
            check_seq(ns)?;
        }
        if let Some(nr) = control.nr() {
            check_seq(nr)?;
        }

        let body = match (control, payload) {
            (Control::Information { ns, nr, .. }, Some(payload)) => {
                Body::Information { ns, nr, payload }
            },
            (Control::Supervisory { kind, nr, .. }, None) => {
                Body::Supervisory { kind, nr }
            },
            (Control::Unnumbered { kind, .. }, payload) if kind.has_payload() == payload.is_some() => {
                Body::Unnumbered { kind, payload }
            },
            _ => {
                return Err(Error::InvalidFieldForFrameKind { field: Field::Payload, kind });
            },
        };

        Ok(Self { address, pf: control.pf(), body })
    }

    pub fn information(address: u32, ns: u8, nr: u8, payload: impl Into<Bytes>) -> Result<Self, Error> {
        check_seq(ns)?;
        check_seq(nr)?;

        Ok(Self {
            address,
            pf: false,
            body: Body::Information { ns, nr, payload: payload.into() },
        })
    }

    pub fn supervisory(address: u32, kind: SupervisoryKind, nr: u8) -> Result<Self, Error> {
        check_seq(nr)?;

        Ok(Self {
            address,
            pf: false,
            body: Body::Supervisory { kind, nr },
        })
    }

    /// Create an unnumbered frame. Kinds with information field start out
    /// with an empty payload.
    pub fn unnumbered(address: u32, kind: UnnumberedKind) -> Self {
        let payload = kind.has_payload().then(Bytes::new);

        Self {
            address,
            pf: false,
            body: Body::Unnumbered { kind, payload },
        }
    }

    pub fn with_pf(self, pf: bool) -> Self {
        Self { pf, ..self }
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn kind(&self) -> FrameKind {
        match &self.body {
            Body::Unset => FrameKind::Unset,
            Body::Information { .. } => FrameKind::Information,
            Body::Supervisory { kind, .. } => FrameKind::Supervisory(*kind),
            Body::Unnumbered { kind, .. } => FrameKind::Unnumbered(*kind),
        }
    }

    /// Control field of this frame, `None` if the frame has no kind.
    pub fn control(&self) -> Option<Control> {
        let pf = self.pf;

        match &self.body {
            Body::Unset => None,
            Body::Information { ns, nr, .. } => Some(Control::Information { ns: *ns, nr: *nr, pf }),
            Body::Supervisory { kind, nr } => Some(Control::Supervisory { kind: *kind, nr: *nr, pf }),
            Body::Unnumbered { kind, .. } => Some(Control::Unnumbered { kind: *kind, pf }),
        }
    }

    pub fn payload(&self) -> Option<&Bytes> {
        match &self.body {
            Body::Information { payload, .. } => Some(payload),
            Body::Unnumbered { payload, .. } => payload.as_ref(),
            Body::Unset | Body::Supervisory { .. } => None,
        }
    }

    /// Receive sequence number N(R).
    pub fn nr(&self) -> Option<u8> {
        match &self.body {
            Body::Information { nr, .. } | Body::Supervisory { nr, .. } => Some(*nr),
            Body::Unset | Body::Unnumbered { .. } => None,
        }
    }

    /// Send sequence number N(S).
    pub fn ns(&self) -> Option<u8> {
        match &self.body {
            Body::Information { ns, .. } => Some(*ns),
            _ => None,
        }
    }

    pub fn has_payload(&self) -> bool {
        self.payload().is_some()
    }

    /// Whether this frame has never been populated with a frame kind.
    ///
    /// Only the kind counts: setting address or P/F alone leaves the frame
    /// empty, and resetting the kind to [`FrameKind::Unset`] makes it empty
    /// again.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, Body::Unset)
    }

    pub fn is_iframe(&self) -> bool {
        matches!(self.body, Body::Information { .. })
    }

    pub fn is_sframe(&self) -> bool {
        matches!(self.body, Body::Supervisory { .. })
    }

    pub fn is_uframe(&self) -> bool {
        matches!(self.body, Body::Unnumbered { .. })
    }

    /// Poll/final bit.
    pub fn is_pf(&self) -> bool {
        self.pf
    }

    pub fn set_address(&mut self, address: u32) {
        self.address = address;
    }

    pub fn set_pf(&mut self, pf: bool) {
        self.pf = pf;
    }

    /// Change the frame kind.
    ///
    /// Sequence numbers and the payload are kept if the new kind defines them
    /// as well.
    /// Fields the new kind defines but the old one did not are reset to zero
    /// or an empty payload, respectively.
    pub fn set_kind(&mut self, kind: FrameKind) {
        let body = std::mem::take(&mut self.body);

        let (ns, nr, payload) = match body {
            Body::Unset => (None, None, None),
            Body::Information { ns, nr, payload } => (Some(ns), Some(nr), Some(payload)),
            Body::Supervisory { nr, .. } => (None, Some(nr), None),
            Body::Unnumbered { payload, .. } => (None, None, payload),
        };

        self.body = match kind {
            FrameKind::Unset => Body::Unset,
            FrameKind::Information => Body::Information {
                ns: ns.unwrap_or(0),
                nr: nr.unwrap_or(0),
                payload: payload.unwrap_or_default(),
            },
            FrameKind::Supervisory(kind) => Body::Supervisory {
                kind,
                nr: nr.unwrap_or(0),
            },
            FrameKind::Unnumbered(kind) => Body::Unnumbered {
                kind,
                payload: kind.has_payload().then(|| payload.unwrap_or_default()),
            },
        };
    }

    pub fn set_payload(&mut self, data: impl Into<Bytes>) -> Result<(), Error> {
        let kind = self.kind();

        match &mut self.body {
            Body::Information { payload, .. } => *payload = data.into(),
            Body::Unnumbered { payload: Some(payload), .. } => *payload = data.into(),
            _ => return Err(Error::InvalidFieldForFrameKind { field: Field::Payload, kind }),
        }

        Ok(())
    }

    /// Set the receive sequence number N(R).
    ///
    /// Values up to 127 are accepted; whether the value fits the configured
    /// modulo is checked when encoding.
    pub fn set_nr(&mut self, value: u8) -> Result<(), Error> {
        let kind = self.kind();

        match &mut self.body {
            Body::Information { nr, .. } | Body::Supervisory { nr, .. } => {
                check_seq(value)?;
                *nr = value;
                Ok(())
            },
            _ => Err(Error::InvalidFieldForFrameKind { field: Field::ReceiveSequence, kind }),
        }
    }

    /// Set the send sequence number N(S).
    ///
    /// Values up to 127 are accepted; whether the value fits the configured
    /// modulo is checked when encoding.
    pub fn set_ns(&mut self, value: u8) -> Result<(), Error> {
        let kind = self.kind();

        match &mut self.body {
            Body::Information { ns, .. } => {
                check_seq(value)?;
                *ns = value;
                Ok(())
            },
            _ => Err(Error::InvalidFieldForFrameKind { field: Field::SendSequence, kind }),
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", FrameKind::Unset);
        }

        write!(f, "{} addr={:#04x}", self.kind(), self.address)?;

        if let Some(ns) = self.ns() {
            write!(f, " ns={ns}")?;
        }

        if let Some(nr) = self.nr() {
            write!(f, " nr={nr}")?;
        }

        write!(f, " pf={}", self.pf as u8)?;

        if let Some(payload) = self.payload() {
            write!(f, " len={}", payload.len())?;
        }

        Ok(())
    }
}


fn check_seq(value: u8) -> Result<(), Error> {
    if value <= SEQ_MAX {
        Ok(())
    } else {
        Err(Error::SequenceOutOfRange { value, modulo: Modulo::Extended })
    }
}
