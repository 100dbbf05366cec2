//! Control field encoding and decoding.
//!
//! Bit numbering starts at the least significant bit of each octet, i.e.,
//! bit 0 is transmitted first.
//!
//! ```text
//!                 basic (modulo 8)        extended (modulo 128)
//!                 7 6 5 4 3 2 1 0         octet 1          octet 2
//! I-frame:        N(R)  P N(S)  0         N(S)         0   N(R)         P
//! S-frame:        N(R)  P S S 0 1         0 0 0 0 S S 0 1  N(R)         P
//! U-frame:        M M M P M M 1 1         (always a single octet)
//! ```

use arrayvec::ArrayVec;

use crate::config::Modulo;
use crate::error::{Error, Field};
use crate::kind::{FrameKind, SupervisoryKind, UnnumberedKind};


/// Maximum number of octets in the control field.
pub const MAX_LEN: usize = 2;

/// Encoded control field.
pub type Octets = ArrayVec<u8, MAX_LEN>;


mod bits {
    pub const FORMAT_I_MASK: u8 = 0b01;
    pub const FORMAT_I: u8 = 0b00;

    pub const FORMAT_MASK: u8 = 0b11;
    pub const FORMAT_S: u8 = 0b01;
    pub const FORMAT_U: u8 = 0b11;

    pub const PF: u8 = 0x10;
    pub const PF_EXT: u8 = 0x01;

    pub const S_KIND_SHIFT: u32 = 2;
    pub const S_RESERVED_EXT: u8 = 0xF0;

    pub const U_MOD_LO: u8 = 0b0000_1100;
    pub const U_MOD_HI: u8 = 0b1110_0000;
}


/// Decoded control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Information { ns: u8, nr: u8, pf: bool },
    Supervisory { kind: SupervisoryKind, nr: u8, pf: bool },
    Unnumbered { kind: UnnumberedKind, pf: bool },
}

impl Control {
    /// Assemble a control field from a frame kind and its optional sub-fields.
    ///
    /// Fails if a sub-field required by the kind is missing or if a sub-field
    /// not defined for the kind is given.
    pub fn from_parts(kind: FrameKind, ns: Option<u8>, nr: Option<u8>, pf: bool) -> Result<Self, Error> {
        let invalid = |field| Error::InvalidFieldForFrameKind { field, kind };

        match (kind, ns, nr) {
            (FrameKind::Unset, _, _) => Err(Error::EmptyFrame),

            (FrameKind::Information, Some(ns), Some(nr)) => {
                Ok(Control::Information { ns, nr, pf })
            },
            (FrameKind::Information, None, _) => Err(invalid(Field::SendSequence)),
            (FrameKind::Information, _, None) => Err(invalid(Field::ReceiveSequence)),

            (FrameKind::Supervisory(_), Some(_), _) => Err(invalid(Field::SendSequence)),
            (FrameKind::Supervisory(_), None, None) => Err(invalid(Field::ReceiveSequence)),
            (FrameKind::Supervisory(kind), None, Some(nr)) => {
                Ok(Control::Supervisory { kind, nr, pf })
            },

            (FrameKind::Unnumbered(_), Some(_), _) => Err(invalid(Field::SendSequence)),
            (FrameKind::Unnumbered(_), None, Some(_)) => Err(invalid(Field::ReceiveSequence)),
            (FrameKind::Unnumbered(kind), None, None) => {
                Ok(Control::Unnumbered { kind, pf })
            },
        }
    }

    pub fn kind(&self) -> FrameKind {
        match self {
            Control::Information { .. } => FrameKind::Information,
            Control::Supervisory { kind, .. } => FrameKind::Supervisory(*kind),
            Control::Unnumbered { kind, .. } => FrameKind::Unnumbered(*kind),
        }
    }

    pub fn ns(&self) -> Option<u8> {
        match self {
            Control::Information { ns, .. } => Some(*ns),
            _ => None,
        }
    }

    pub fn nr(&self) -> Option<u8> {
        match self {
            Control::Information { nr, .. } => Some(*nr),
            Control::Supervisory { nr, .. } => Some(*nr),
            Control::Unnumbered { .. } => None,
        }
    }

    pub fn pf(&self) -> bool {
        match self {
            Control::Information { pf, .. } => *pf,
            Control::Supervisory { pf, .. } => *pf,
            Control::Unnumbered { pf, .. } => *pf,
        }
    }

    /// Number of octets this control field occupies.
    pub fn encoded_len(&self, modulo: Modulo) -> usize {
        match self {
            Control::Unnumbered { .. } => 1,
            _ => modulo.control_len(),
        }
    }

    /// Decode the control field at the start of `src`.
    ///
    /// Returns the control field and the number of octets consumed.
    pub fn decode(src: &[u8], modulo: Modulo) -> Result<(Self, usize), Error> {
        let first = *src.first().ok_or(Error::TruncatedControlField)?;

        if first & bits::FORMAT_I_MASK == bits::FORMAT_I {
            return match modulo {
                Modulo::Basic => {
                    let ns = (first >> 1) & 0x07;
                    let nr = first >> 5;
                    let pf = first & bits::PF != 0;

                    Ok((Control::Information { ns, nr, pf }, 1))
                },
                Modulo::Extended => {
                    let second = *src.get(1).ok_or(Error::TruncatedControlField)?;

                    let ns = first >> 1;
                    let nr = second >> 1;
                    let pf = second & bits::PF_EXT != 0;

                    Ok((Control::Information { ns, nr, pf }, 2))
                },
            };
        }

        match first & bits::FORMAT_MASK {
            bits::FORMAT_S => {
                let kind = SupervisoryKind::try_from((first >> bits::S_KIND_SHIFT) & 0b11)
                    .map_err(|_| Error::UnrecognizedControlField(first))?;

                match modulo {
                    Modulo::Basic => {
                        let nr = first >> 5;
                        let pf = first & bits::PF != 0;

                        Ok((Control::Supervisory { kind, nr, pf }, 1))
                    },
                    Modulo::Extended => {
                        if first & bits::S_RESERVED_EXT != 0 {
                            return Err(Error::UnrecognizedControlField(first));
                        }

                        let second = *src.get(1).ok_or(Error::TruncatedControlField)?;

                        let nr = second >> 1;
                        let pf = second & bits::PF_EXT != 0;

                        Ok((Control::Supervisory { kind, nr, pf }, 2))
                    },
                }
            },
            _ => {
                let kind = UnnumberedKind::try_from(modifier(first))
                    .map_err(|_| Error::UnrecognizedControlField(first))?;

                let pf = first & bits::PF != 0;

                Ok((Control::Unnumbered { kind, pf }, 1))
            },
        }
    }

    /// Encode this control field.
    ///
    /// Fails if a sequence number does not fit the modulo.
    pub fn encode(&self, modulo: Modulo) -> Result<Octets, Error> {
        let mut octets = Octets::new();

        match (*self, modulo) {
            (Control::Information { ns, nr, pf }, Modulo::Basic) => {
                check_seq(ns, modulo)?;
                check_seq(nr, modulo)?;

                octets.push(bits::FORMAT_I | (ns << 1) | pf_bit(pf) | (nr << 5));
            },
            (Control::Information { ns, nr, pf }, Modulo::Extended) => {
                check_seq(ns, modulo)?;
                check_seq(nr, modulo)?;

                octets.push(bits::FORMAT_I | (ns << 1));
                octets.push((nr << 1) | if pf { bits::PF_EXT } else { 0 });
            },
            (Control::Supervisory { kind, nr, pf }, Modulo::Basic) => {
                check_seq(nr, modulo)?;

                let kind: u8 = kind.into();
                octets.push(bits::FORMAT_S | (kind << bits::S_KIND_SHIFT) | pf_bit(pf) | (nr << 5));
            },
            (Control::Supervisory { kind, nr, pf }, Modulo::Extended) => {
                check_seq(nr, modulo)?;

                let kind: u8 = kind.into();
                octets.push(bits::FORMAT_S | (kind << bits::S_KIND_SHIFT));
                octets.push((nr << 1) | if pf { bits::PF_EXT } else { 0 });
            },
            (Control::Unnumbered { kind, pf }, _) => {
                let m: u8 = kind.into();
                octets.push(bits::FORMAT_U | ((m & 0b11) << 2) | pf_bit(pf) | ((m >> 2) << 5));
            },
        }

        Ok(octets)
    }
}


/// Extract the 5-bit unnumbered modifier from a U-frame control octet.
fn modifier(ctrl: u8) -> u8 {
    ((ctrl & bits::U_MOD_LO) >> 2) | ((ctrl & bits::U_MOD_HI) >> 3)
}

fn pf_bit(pf: bool) -> u8 {
    if pf { bits::PF } else { 0 }
}

fn check_seq(value: u8, modulo: Modulo) -> Result<(), Error> {
    if modulo.contains(value) {
        Ok(())
    } else {
        Err(Error::SequenceOutOfRange { value, modulo })
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn dec(src: &[u8]) -> Result<(Control, usize), Error> {
        Control::decode(src, Modulo::Basic)
    }

    fn dec_ext(src: &[u8]) -> Result<(Control, usize), Error> {
        Control::decode(src, Modulo::Extended)
    }

    #[test]
    fn test_decode_information() {
        assert_eq!(dec(&[0x00]), Ok((Control::Information { ns: 0, nr: 0, pf: false }, 1)));

        // N(R)=5, P, N(S)=3
        assert_eq!(dec(&[0b1011_0110]), Ok((Control::Information { ns: 3, nr: 5, pf: true }, 1)));
        assert_eq!(dec(&[0xFE]), Ok((Control::Information { ns: 7, nr: 7, pf: true }, 1)));

        // trailing data is not part of the control field
        assert_eq!(dec(&[0x00, 0xFF]), Ok((Control::Information { ns: 0, nr: 0, pf: false }, 1)));
    }

    #[test]
    fn test_decode_supervisory() {
        let rr = SupervisoryKind::ReceiveReady;

        assert_eq!(dec(&[0x01]), Ok((Control::Supervisory { kind: rr, nr: 0, pf: false }, 1)));
        assert_eq!(dec(&[0x11]), Ok((Control::Supervisory { kind: rr, nr: 0, pf: true }, 1)));
        assert_eq!(dec(&[0b1000_0001]), Ok((Control::Supervisory { kind: rr, nr: 4, pf: false }, 1)));

        let kinds = [
            (0x01, SupervisoryKind::ReceiveReady),
            (0x05, SupervisoryKind::Reject),
            (0x09, SupervisoryKind::ReceiveNotReady),
            (0x0D, SupervisoryKind::SelectiveReject),
        ];

        for (ctrl, kind) in kinds {
            assert_eq!(dec(&[ctrl]), Ok((Control::Supervisory { kind, nr: 0, pf: false }, 1)));
        }
    }

    #[test]
    fn test_decode_unnumbered() {
        let table = [
            (0x03, UnnumberedKind::UnnumberedInformation),
            (0x07, UnnumberedKind::SetInitializationMode),
            (0x0F, UnnumberedKind::SetAsynchronousResponseMode),
            (0x23, UnnumberedKind::UnnumberedPoll),
            (0x2F, UnnumberedKind::SetAsynchronousBalancedMode),
            (0x43, UnnumberedKind::Disconnect),
            (0x63, UnnumberedKind::UnnumberedAcknowledge),
            (0x6F, UnnumberedKind::SetAsynchronousBalancedModeExtended),
            (0x83, UnnumberedKind::SetNormalResponseMode),
            (0x87, UnnumberedKind::CommandReject),
            (0xE3, UnnumberedKind::Test),
            (0xE7, UnnumberedKind::ExchangeIdentification),
        ];

        for (ctrl, kind) in table {
            assert_eq!(dec(&[ctrl]), Ok((Control::Unnumbered { kind, pf: false }, 1)));
            assert_eq!(dec(&[ctrl | 0x10]), Ok((Control::Unnumbered { kind, pf: true }, 1)));

            // U-frames use a single octet in extended mode as well
            assert_eq!(dec_ext(&[ctrl]), Ok((Control::Unnumbered { kind, pf: false }, 1)));
        }

        let sabm = UnnumberedKind::SetAsynchronousBalancedMode;
        assert_eq!(dec(&[0x3F]), Ok((Control::Unnumbered { kind: sabm, pf: true }, 1)));
    }

    #[test]
    fn test_decode_unrecognized() {
        assert_eq!(dec(&[0xFF]), Err(Error::UnrecognizedControlField(0xFF)));
        assert_eq!(dec(&[0xEF]), Err(Error::UnrecognizedControlField(0xEF)));
        assert_eq!(dec(&[0xAF]), Err(Error::UnrecognizedControlField(0xAF)));
        assert_eq!(dec(&[0x0B]), Err(Error::UnrecognizedControlField(0x0B)));
        assert_eq!(dec_ext(&[0x21, 0x00]), Err(Error::UnrecognizedControlField(0x21)));
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(dec(&[]), Err(Error::TruncatedControlField));
        assert_eq!(dec_ext(&[]), Err(Error::TruncatedControlField));
        assert_eq!(dec_ext(&[0x00]), Err(Error::TruncatedControlField));
        assert_eq!(dec_ext(&[0x01]), Err(Error::TruncatedControlField));
    }

    #[test]
    fn test_decode_extended() {
        // N(S)=100, N(R)=27, P
        assert_eq!(dec_ext(&[100 << 1, (27 << 1) | 1]),
            Ok((Control::Information { ns: 100, nr: 27, pf: true }, 2)));

        assert_eq!(dec_ext(&[0x09, 127 << 1]), Ok((Control::Supervisory {
            kind: SupervisoryKind::ReceiveNotReady,
            nr: 127,
            pf: false,
        }, 2)));
    }

    #[test]
    fn test_encode() {
        let c = Control::Information { ns: 3, nr: 5, pf: true };
        assert_eq!(c.encode(Modulo::Basic).unwrap()[..], [0b1011_0110]);
        assert_eq!(c.encode(Modulo::Extended).unwrap()[..], [0x06, 0x0B]);

        let c = Control::Supervisory { kind: SupervisoryKind::SelectiveReject, nr: 2, pf: false };
        assert_eq!(c.encode(Modulo::Basic).unwrap()[..], [0x4D]);
        assert_eq!(c.encode(Modulo::Extended).unwrap()[..], [0x0D, 0x04]);

        let c = Control::Unnumbered { kind: UnnumberedKind::SetAsynchronousBalancedMode, pf: true };
        assert_eq!(c.encode(Modulo::Basic).unwrap()[..], [0x3F]);
        assert_eq!(c.encode(Modulo::Extended).unwrap()[..], [0x3F]);
    }

    #[test]
    fn test_encode_out_of_range() {
        let c = Control::Information { ns: 8, nr: 0, pf: false };
        assert_eq!(c.encode(Modulo::Basic), Err(Error::SequenceOutOfRange { value: 8, modulo: Modulo::Basic }));
        assert!(c.encode(Modulo::Extended).is_ok());

        let c = Control::Supervisory { kind: SupervisoryKind::ReceiveReady, nr: 128, pf: false };
        assert_eq!(c.encode(Modulo::Extended), Err(Error::SequenceOutOfRange { value: 128, modulo: Modulo::Extended }));
    }

    #[test]
    fn test_roundtrip_octets() {
        for ctrl in 0..=u8::MAX {
            if let Ok((c, n)) = dec(&[ctrl]) {
                assert_eq!(n, 1);
                assert_eq!(c.encode(Modulo::Basic).unwrap()[..], [ctrl], "ctrl: {ctrl:#04x}");
            }
        }

        for first in 0..=u8::MAX {
            for second in [0x00, 0x01, 0x7E, 0xFF] {
                if let Ok((c, n)) = dec_ext(&[first, second]) {
                    assert_eq!(c.encode(Modulo::Extended).unwrap()[..], [first, second][..n]);
                }
            }
        }
    }

    #[test]
    fn test_from_parts() {
        let rr = FrameKind::Supervisory(SupervisoryKind::ReceiveReady);
        let ui = FrameKind::Unnumbered(UnnumberedKind::UnnumberedInformation);

        assert_eq!(Control::from_parts(FrameKind::Information, Some(1), Some(2), true),
            Ok(Control::Information { ns: 1, nr: 2, pf: true }));
        assert_eq!(Control::from_parts(FrameKind::Information, None, Some(2), false),
            Err(Error::InvalidFieldForFrameKind { field: Field::SendSequence, kind: FrameKind::Information }));
        assert_eq!(Control::from_parts(FrameKind::Information, Some(1), None, false),
            Err(Error::InvalidFieldForFrameKind { field: Field::ReceiveSequence, kind: FrameKind::Information }));

        assert_eq!(Control::from_parts(rr, None, Some(3), false),
            Ok(Control::Supervisory { kind: SupervisoryKind::ReceiveReady, nr: 3, pf: false }));
        assert_eq!(Control::from_parts(rr, Some(1), Some(3), false),
            Err(Error::InvalidFieldForFrameKind { field: Field::SendSequence, kind: rr }));
        assert_eq!(Control::from_parts(rr, None, None, false),
            Err(Error::InvalidFieldForFrameKind { field: Field::ReceiveSequence, kind: rr }));

        assert_eq!(Control::from_parts(ui, None, None, true),
            Ok(Control::Unnumbered { kind: UnnumberedKind::UnnumberedInformation, pf: true }));
        assert_eq!(Control::from_parts(ui, None, Some(0), false),
            Err(Error::InvalidFieldForFrameKind { field: Field::ReceiveSequence, kind: ui }));

        assert_eq!(Control::from_parts(FrameKind::Unset, None, None, false), Err(Error::EmptyFrame));
    }
}
