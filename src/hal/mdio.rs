//! MDIO (Management Data Input/Output) bus abstraction
//!
//! The PHY driver never talks to hardware directly. Every register access
//! goes through an [`MdioBus`] implementation supplied by the MAC driver
//! (an SMI controller, a bit-banged MDIO, or a test mock).

use crate::error::Result;

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Number of Clause 22 registers per PHY
pub const PHY_REG_COUNT: usize = 32;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Reads and writes a 16-bit register at `reg_addr` on the PHY answering at
/// `phy_addr`. Implementations report transport failures through
/// [`IoError`](crate::IoError); a bus that cannot fail simply returns `Ok`.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    #[inline]
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    #[inline]
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

/// Pick the bus address to use for a PHY
///
/// Returns `configured` when it names a valid address (0-31), otherwise the
/// chip's compiled-in `default`.
#[inline]
pub const fn resolve_phy_address(configured: Option<u8>, default: u8) -> u8 {
    match configured {
        Some(addr) if addr <= MAX_PHY_ADDR => addr,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::test_utils::MockMdioBus;

    #[test]
    fn resolve_keeps_every_valid_address() {
        for addr in 0..=MAX_PHY_ADDR {
            assert_eq!(resolve_phy_address(Some(addr), 7), addr);
        }
    }

    #[test]
    fn resolve_falls_back_when_out_of_range() {
        for addr in [32u8, 33, 0x7F, 0xFF] {
            assert_eq!(resolve_phy_address(Some(addr), 1), 1);
        }
    }

    #[test]
    fn resolve_falls_back_when_unset() {
        assert_eq!(resolve_phy_address(None, 0), 0);
        assert_eq!(resolve_phy_address(None, 3), 3);
    }

    #[test]
    fn mutable_reference_forwards_to_bus() {
        fn poke<M: MdioBus>(mut bus: M) -> Result<u16> {
            bus.write(2, 18, 0x1234)?;
            bus.read(2, 17)
        }

        let mut mdio = MockMdioBus::new();
        mdio.set_register(2, 17, 0xBEEF);

        assert_eq!(poke(&mut mdio).unwrap(), 0xBEEF);
        assert_eq!(mdio.get_register(2, 18), Some(0x1234));
        assert_eq!(mdio.get_writes(), std::vec![(2, 18, 0x1234)]);
    }
}
