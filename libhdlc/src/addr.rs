//! Address field encoding.
//!
//! The address field is either a fixed number of octets or uses the HDLC
//! address extension scheme, in which bit 0 of every octet marks the last
//! octet of the field and the remaining seven bits carry the address, least
//! significant group first.

use arrayvec::ArrayVec;

use crate::config::AddressWidth;
use crate::error::Error;


/// Maximum number of octets an address field can occupy.
pub const MAX_LEN: usize = ext_len(u32::MAX);


/// Encoded address field.
pub type Octets = ArrayVec<u8, MAX_LEN>;


/// Decode the address field at the start of `src`.
///
/// Returns the address and the number of octets consumed.
pub fn decode(src: &[u8], width: AddressWidth) -> Result<(u32, usize), Error> {
    match width {
        AddressWidth::Fixed(n) => decode_fixed(src, fixed_len(n)?),
        AddressWidth::Extended => decode_ext(src),
    }
}

/// Encode `address` for the given field layout.
pub fn encode(address: u32, width: AddressWidth) -> Result<Octets, Error> {
    let octets = match width {
        AddressWidth::Fixed(n) => {
            let n = fixed_len(n)?;

            if address > width.max_value() {
                return Err(Error::AddressOutOfRange(address));
            }

            address.to_be_bytes()[4 - n..].iter().copied().collect()
        },
        AddressWidth::Extended => Ext::new(address).collect(),
    };

    Ok(octets)
}

/// Number of octets `address` occupies in a field of the given layout.
pub fn encoded_len(address: u32, width: AddressWidth) -> Result<usize, Error> {
    match width {
        AddressWidth::Fixed(n) => fixed_len(n),
        AddressWidth::Extended => Ok(ext_len(address)),
    }
}


fn fixed_len(n: u8) -> Result<usize, Error> {
    match n {
        1..=AddressWidth::MAX_FIXED => Ok(n as usize),
        _ => Err(Error::InvalidAddressWidth(n)),
    }
}

fn decode_fixed(src: &[u8], n: usize) -> Result<(u32, usize), Error> {
    if src.len() < n {
        return Err(Error::TruncatedAddress);
    }

    let address = src[..n].iter()
        .fold(0u32, |acc, b| (acc << 8) | *b as u32);

    Ok((address, n))
}

fn decode_ext(src: &[u8]) -> Result<(u32, usize), Error> {
    let mut address = 0u64;

    for (i, b) in src.iter().copied().enumerate() {
        address |= ((b >> 1) as u64) << (i * 7);

        if address > u32::MAX as u64 {
            return Err(Error::AddressOutOfRange(u32::MAX));
        }

        if b & 0x01 == 0x01 {
            return Ok((address as u32, i + 1));
        }
    }

    Err(Error::TruncatedAddress)
}

const fn ext_len(address: u32) -> usize {
    if address == 0 {
        1
    } else {
        (u32::BITS - address.leading_zeros()).div_ceil(7) as usize
    }
}


struct Ext {
    rest: u32,
    done: bool,
}

impl Ext {
    fn new(address: u32) -> Self {
        Self { rest: address, done: false }
    }
}

impl Iterator for Ext {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }

        let b = ((self.rest & 0x7F) as u8) << 1;
        self.rest >>= 7;

        if self.rest == 0 {
            self.done = true;
            Some(b | 0x01)
        } else {
            Some(b)
        }
    }
}
