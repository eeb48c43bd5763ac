//! IPv4 address handling
//!
//! This module provides the 4-byte address value type fed to the
//! pseudo-header builder, including the dotted-quad parsing used for
//! capture address files.

use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};

/// IPv4 address (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Addr(pub [u8; 4]);

impl Ipv4Addr {
    pub const UNSPECIFIED: Ipv4Addr = Ipv4Addr([0, 0, 0, 0]);
    pub const BROADCAST: Ipv4Addr = Ipv4Addr([255, 255, 255, 255]);
    pub const LOOPBACK: Ipv4Addr = Ipv4Addr([127, 0, 0, 1]);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    /// Reads an address out of raw byte material, rejecting anything that
    /// is not exactly four octets.
    pub fn from_slice(bytes: &[u8]) -> ValidationResult<Self> {
        <[u8; 4]>::try_from(bytes).map(Self::from).map_err(|_| {
            ValidationError::MalformedAddress(format!("expected 4 bytes, got {}", bytes.len()))
        })
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl std::fmt::Display for Ipv4Addr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}.{}.{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl From<[u8; 4]> for Ipv4Addr {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Ipv4Addr {
    type Err = ValidationError;

    /// Parses a dotted quad like `192.168.1.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 4];
        let mut fields = s.split('.');
        for slot in octets.iter_mut() {
            let field = fields.next().ok_or_else(|| {
                ValidationError::MalformedAddress(format!("expected 4 octets in {:?}", s))
            })?;
            *slot = field.parse::<u8>().map_err(|_| {
                ValidationError::MalformedAddress(format!("bad octet {:?} in {:?}", field, s))
            })?;
        }
        if fields.next().is_some() {
            return Err(ValidationError::MalformedAddress(format!(
                "expected 4 octets in {:?}",
                s
            )));
        }
        Ok(Self(octets))
    }
}
