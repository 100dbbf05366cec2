//! Frame kinds and the bit patterns identifying them.

use num_enum::{IntoPrimitive, TryFromPrimitive};


/// Supervisory frame function, keyed by control field bits 2-3.
///
/// `0b01` is REJ and `0b10` is RNR. This is intentional and the reverse of
/// ISO/IEC 13239; do not swap them.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
pub enum SupervisoryKind {
    ReceiveReady = 0b00,
    Reject = 0b01,
    ReceiveNotReady = 0b10,
    SelectiveReject = 0b11,
}

impl SupervisoryKind {
    pub const ALL: [SupervisoryKind; 4] = [
        SupervisoryKind::ReceiveReady,
        SupervisoryKind::Reject,
        SupervisoryKind::ReceiveNotReady,
        SupervisoryKind::SelectiveReject,
    ];

    pub fn mnemonic(&self) -> &'static str {
        match self {
            SupervisoryKind::ReceiveReady => "RR",
            SupervisoryKind::Reject => "REJ",
            SupervisoryKind::ReceiveNotReady => "RNR",
            SupervisoryKind::SelectiveReject => "SREJ",
        }
    }
}


/// Unnumbered frame function, keyed by the 5-bit modifier.
///
/// The modifier is formed from control field bits 2-3 (low part) and bits
/// 5-7 (high part). The discriminants are the modifier values and serve as
/// lookup table in both directions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
pub enum UnnumberedKind {
    UnnumberedInformation = 0b00000,
    SetInitializationMode = 0b00001,
    SetAsynchronousResponseMode = 0b00011,
    UnnumberedPoll = 0b00100,
    SetAsynchronousBalancedMode = 0b00111,
    Disconnect = 0b01000,
    UnnumberedAcknowledge = 0b01100,
    SetAsynchronousBalancedModeExtended = 0b01111,
    SetNormalResponseMode = 0b10000,
    CommandReject = 0b10001,
    Test = 0b11100,
    ExchangeIdentification = 0b11101,
}

impl UnnumberedKind {
    pub const ALL: [UnnumberedKind; 12] = [
        UnnumberedKind::UnnumberedInformation,
        UnnumberedKind::SetInitializationMode,
        UnnumberedKind::SetAsynchronousResponseMode,
        UnnumberedKind::UnnumberedPoll,
        UnnumberedKind::SetAsynchronousBalancedMode,
        UnnumberedKind::Disconnect,
        UnnumberedKind::UnnumberedAcknowledge,
        UnnumberedKind::SetAsynchronousBalancedModeExtended,
        UnnumberedKind::SetNormalResponseMode,
        UnnumberedKind::CommandReject,
        UnnumberedKind::ExchangeIdentification,
        UnnumberedKind::Test,
    ];

    /// Whether frames of this kind carry an information field.
    pub fn has_payload(&self) -> bool {
        matches!(self,
            UnnumberedKind::UnnumberedInformation
            | UnnumberedKind::CommandReject
            | UnnumberedKind::ExchangeIdentification
            | UnnumberedKind::Test
        )
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            UnnumberedKind::UnnumberedInformation => "UI",
            UnnumberedKind::SetInitializationMode => "SIM",
            UnnumberedKind::SetAsynchronousResponseMode => "SARM",
            UnnumberedKind::UnnumberedPoll => "UP",
            UnnumberedKind::SetAsynchronousBalancedMode => "SABM",
            UnnumberedKind::Disconnect => "DISC",
            UnnumberedKind::UnnumberedAcknowledge => "UA",
            UnnumberedKind::SetAsynchronousBalancedModeExtended => "SABME",
            UnnumberedKind::SetNormalResponseMode => "SNRM",
            UnnumberedKind::CommandReject => "CMDR",
            UnnumberedKind::ExchangeIdentification => "XID",
            UnnumberedKind::Test => "TEST",
        }
    }
}


/// Kind of an HDLC frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameKind {
    /// Not classified (yet).
    #[default]
    Unset,
    Information,
    Supervisory(SupervisoryKind),
    Unnumbered(UnnumberedKind),
}

impl FrameKind {
    pub fn is_information(&self) -> bool {
        matches!(self, FrameKind::Information)
    }

    pub fn is_supervisory(&self) -> bool {
        matches!(self, FrameKind::Supervisory(_))
    }

    pub fn is_unnumbered(&self) -> bool {
        matches!(self, FrameKind::Unnumbered(_))
    }

    pub fn has_send_seq(&self) -> bool {
        self.is_information()
    }

    pub fn has_recv_seq(&self) -> bool {
        self.is_information() || self.is_supervisory()
    }

    pub fn has_payload(&self) -> bool {
        match self {
            FrameKind::Information => true,
            FrameKind::Unnumbered(kind) => kind.has_payload(),
            FrameKind::Supervisory(_) | FrameKind::Unset => false,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            FrameKind::Unset => "UNSET",
            FrameKind::Information => "I",
            FrameKind::Supervisory(kind) => kind.mnemonic(),
            FrameKind::Unnumbered(kind) => kind.mnemonic(),
        }
    }

    /// All classified frame kinds, i.e., everything except `Unset`.
    pub fn classified() -> impl Iterator<Item = FrameKind> {
        std::iter::once(FrameKind::Information)
            .chain(SupervisoryKind::ALL.into_iter().map(FrameKind::Supervisory))
            .chain(UnnumberedKind::ALL.into_iter().map(FrameKind::Unnumbered))
    }
}

impl From<SupervisoryKind> for FrameKind {
    fn from(kind: SupervisoryKind) -> Self {
        FrameKind::Supervisory(kind)
    }
}

impl From<UnnumberedKind> for FrameKind {
    fn from(kind: UnnumberedKind) -> Self {
        FrameKind::Unnumbered(kind)
    }
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
