use crate::config::Modulo;
use crate::kind::FrameKind;


/// Optional frame field, used to report which field did not fit the frame kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SendSequence,
    ReceiveSequence,
    Payload,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::SendSequence => "N(S)",
            Field::ReceiveSequence => "N(R)",
            Field::Payload => "payload",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    TruncatedAddress,
    TruncatedControlField,
    UnrecognizedControlField(u8),
    UnexpectedPayload,
    InvalidFieldForFrameKind { field: Field, kind: FrameKind },
    SequenceOutOfRange { value: u8, modulo: Modulo },
    AddressOutOfRange(u32),
    InvalidAddressWidth(u8),
    EmptyFrame,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TruncatedAddress => {
                write!(f, "frame too short for address field")
            },
            Error::TruncatedControlField => {
                write!(f, "frame too short for control field")
            },
            Error::UnrecognizedControlField(ctrl) => {
                write!(f, "unrecognized control field: {ctrl:#04x}")
            },
            Error::UnexpectedPayload => {
                write!(f, "unexpected data after control field")
            },
            Error::InvalidFieldForFrameKind { field, kind } => {
                write!(f, "field {field} is not valid for {kind} frames")
            },
            Error::SequenceOutOfRange { value, modulo } => {
                write!(f, "sequence number {value} out of range for modulo {}", modulo.value())
            },
            Error::AddressOutOfRange(address) => {
                write!(f, "address {address:#x} does not fit the address field")
            },
            Error::InvalidAddressWidth(n) => {
                write!(f, "invalid address field width: {n} octets")
            },
            Error::EmptyFrame => {
                write!(f, "cannot encode frame without frame kind")
            },
        }
    }
}

impl std::error::Error for Error {}
