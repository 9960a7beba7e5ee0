// src/common/address.rs

use super::error::Bh1750Error;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit I2C address of a BH1750, selected by the level on its ADDR pin.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Bh1750Addr(u8);

impl Bh1750Addr {
    /// ADDR pin tied to GND.
    pub const ADDR_LOW: Bh1750Addr = Bh1750Addr(0x23);
    /// ADDR pin tied to VCC.
    pub const ADDR_HIGH: Bh1750Addr = Bh1750Addr(0x5C);

    /// Creates a new `Bh1750Addr` if the given value is one of the two strap addresses.
    /// Returns `Result<Self, Bh1750Error<()>>` because validation itself
    /// cannot cause a bus error.
    pub fn new(address: u8) -> Result<Self, Bh1750Error<()>> {
        if Self::is_valid_address(address) {
            Ok(Bh1750Addr(address))
        } else {
            Err(Bh1750Error::InvalidAddress(address))
        }
    }

    /// Picks the address from the ADDR pin level.
    #[inline]
    pub const fn from_addr_pin(high: bool) -> Self {
        if high {
            Self::ADDR_HIGH
        } else {
            Self::ADDR_LOW
        }
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_valid_address(address: u8) -> bool {
        matches!(address, 0x23 | 0x5C)
    }
}

impl Default for Bh1750Addr {
    fn default() -> Self {
        Self::ADDR_LOW
    }
}

impl TryFrom<u8> for Bh1750Addr {
    type Error = Bh1750Error<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Bh1750Addr> for u8 {
    fn from(value: Bh1750Addr) -> Self {
        value.0
    }
}

impl fmt::Display for Bh1750Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_valid_addresses() {
        assert_eq!(Bh1750Addr::new(0x23).unwrap(), Bh1750Addr::ADDR_LOW);
        assert_eq!(Bh1750Addr::new(0x5C).unwrap(), Bh1750Addr::ADDR_HIGH);
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(matches!(Bh1750Addr::new(0x00), Err(Bh1750Error::InvalidAddress(0x00))));
        assert!(matches!(Bh1750Addr::new(0x24), Err(Bh1750Error::InvalidAddress(0x24))));
        assert!(matches!(Bh1750Addr::new(0x7F), Err(Bh1750Error::InvalidAddress(0x7F))));
    }

    #[test]
    fn test_addr_pin_selection() {
        assert_eq!(Bh1750Addr::from_addr_pin(false).as_u8(), 0x23);
        assert_eq!(Bh1750Addr::from_addr_pin(true).as_u8(), 0x5C);
        assert_eq!(Bh1750Addr::default(), Bh1750Addr::ADDR_LOW);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Bh1750Addr::try_from(0x5C).unwrap(), Bh1750Addr::ADDR_HIGH);
        assert!(matches!(Bh1750Addr::try_from(0x44), Err(Bh1750Error::InvalidAddress(0x44))));
        assert_eq!(u8::from(Bh1750Addr::ADDR_LOW), 0x23);
        assert_eq!(format!("{}", Bh1750Addr::ADDR_HIGH), "0x5c");
    }
}
