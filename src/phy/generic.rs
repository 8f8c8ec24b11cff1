//! Generic PHY Driver Trait
//!
//! This module defines the interface the host uses to drive any PHY, plus
//! helpers built on the IEEE 802.3 Clause 22 standard registers.

use crate::config::{Duplex, ResetPolicy, Speed};
use crate::error::{ConfigError, Result};
use crate::hal::ext_int::ExtInterrupt;
use crate::hal::mdio::MdioBus;
use crate::interface::{NetHost, NetInterface};

// =============================================================================
// Link Status
// =============================================================================

/// Negotiated link parameters
///
/// Only meaningful while the link is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 100 Mbps Full Duplex
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }

    /// 100 Mbps Half Duplex
    pub const fn fast_half() -> Self {
        Self::new(Speed::Mbps100, Duplex::Half)
    }

    /// 10 Mbps Full Duplex
    pub const fn slow_full() -> Self {
        Self::new(Speed::Mbps10, Duplex::Full)
    }

    /// 10 Mbps Half Duplex
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Operations the host network stack dispatches to a PHY driver
///
/// One implementation exists per chip. The host keeps the driver next to
/// its [`NetInterface`] and calls these from its timer and event contexts,
/// never concurrently for the same interface.
///
/// The trait is object safe, so a host can hold `&mut dyn PhyDriver<M, H, E>`
/// when the chip is selected at runtime.
pub trait PhyDriver<M: MdioBus, H: NetHost, E: ExtInterrupt> {
    /// Reset and configure the transceiver
    ///
    /// Sets the interface's pending-event flag so the host evaluates the
    /// link once the PHY is ready.
    fn init(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()>;

    /// Periodic timer hook
    ///
    /// Polls the link when no interrupt line is attached; no-op otherwise.
    fn tick(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()>;

    /// Unmask the PHY interrupt line, if any
    fn enable_irq(&mut self, iface: &mut NetInterface<M, H, E>);

    /// Mask the PHY interrupt line, if any
    fn disable_irq(&mut self, iface: &mut NetInterface<M, H, E>);

    /// Service a PHY interrupt
    fn event_handler(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()>;
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::internal::phy_regs::standard::{bmcr, bmsr, phy_reg};

    /// Read BMSR once and check the link status bit
    ///
    /// The bit latches low, so a single read may report a link failure that
    /// has already cleared.
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Read BMSR twice and report the current link status
    ///
    /// The first read returns (and releases) any latched failure; only the
    /// second reflects the instantaneous state.
    pub fn read_latched_link<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let _latched = mdio.read(phy_addr, phy_reg::BMSR)?;
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Perform soft reset via BMCR
    ///
    /// Writes the reset bit, then polls until the PHY clears it as dictated
    /// by `policy`.
    pub fn soft_reset<M: MdioBus>(mdio: &mut M, phy_addr: u8, policy: ResetPolicy) -> Result<()> {
        mdio.write(phy_addr, phy_reg::BMCR, bmcr::RESET)?;

        match policy {
            ResetPolicy::Bounded { max_attempts } => {
                for _ in 0..max_attempts {
                    if !reset_pending(mdio, phy_addr)? {
                        return Ok(());
                    }
                }

                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "PHY {} reset still pending after {} reads",
                    phy_addr,
                    max_attempts
                );

                Err(ConfigError::ResetFailed.into())
            }
            ResetPolicy::Unbounded => {
                while reset_pending(mdio, phy_addr)? {
                    core::hint::spin_loop();
                }
                Ok(())
            }
        }
    }

    fn reset_pending<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        Ok(mdio.read(phy_addr, phy_reg::BMCR)? & bmcr::RESET != 0)
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }
}
