//! Per-codec configuration: address field width and sequence number modulo.


/// Sequence numbering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modulo {
    /// Basic operation: 3-bit sequence numbers, single control octet.
    #[default]
    Basic,

    /// Extended operation: 7-bit sequence numbers, I- and S-frames carry a
    /// second control octet.
    Extended,
}

impl Modulo {
    pub fn value(&self) -> u8 {
        match self {
            Modulo::Basic => 8,
            Modulo::Extended => 128,
        }
    }

    pub fn contains(&self, seq: u8) -> bool {
        seq < self.value()
    }

    /// Number of control octets used by I- and S-frames.
    pub fn control_len(&self) -> usize {
        match self {
            Modulo::Basic => 1,
            Modulo::Extended => 2,
        }
    }
}


/// Layout of the address field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressWidth {
    /// Fixed number of octets (1 to 4), most significant octet first.
    /// Other widths are rejected with [`Error::InvalidAddressWidth`] when
    /// used; [`AddressWidth::fixed`] checks the range up front.
    ///
    /// [`Error::InvalidAddressWidth`]: crate::Error::InvalidAddressWidth
    Fixed(u8),

    /// Address extension: seven address bits per octet, bit 0 set on the
    /// last octet of the field.
    Extended,
}

impl AddressWidth {
    pub const MAX_FIXED: u8 = 4;

    pub fn fixed(octets: u8) -> Option<Self> {
        match octets {
            1..=Self::MAX_FIXED => Some(Self::Fixed(octets)),
            _ => None,
        }
    }

    /// Largest address value that fits the field.
    pub fn max_value(&self) -> u32 {
        match self {
            AddressWidth::Fixed(n) if *n >= Self::MAX_FIXED => u32::MAX,
            AddressWidth::Fixed(n) => ((1u64 << (*n as u32 * 8)) - 1) as u32,
            AddressWidth::Extended => u32::MAX,
        }
    }
}

impl Default for AddressWidth {
    fn default() -> Self {
        AddressWidth::Fixed(1)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Config {
    pub address: AddressWidth,
    pub modulo: Modulo,
}

impl Config {
    pub fn new(address: AddressWidth, modulo: Modulo) -> Self {
        Self { address, modulo }
    }

    pub fn with_address(self, address: AddressWidth) -> Self {
        Self { address, ..self }
    }

    pub fn with_modulo(self, modulo: Modulo) -> Self {
        Self { modulo, ..self }
    }
}
