//! Ethernet PHY Drivers
//!
//! This module provides the [`PhyDriver`] trait the host dispatches through
//! and the LAN8700 implementation.
//!
//! # Architecture
//!
//! The PHY layer is independent of the MAC implementation. It reaches the
//! chip only through the [`MdioBus`](crate::hal::MdioBus) owned by the
//! [`NetInterface`](crate::NetInterface), and reports back through the
//! interface's [`NetHost`](crate::NetHost) hooks. This allows:
//!
//! - Reuse across different MAC implementations
//! - Easy addition of new PHY drivers
//! - Testing with mock MDIO implementations
//!
//! # Supported PHY Chips
//!
//! - [`Lan8700`]: SMSC/Microchip LAN8700 / LAN8700i
//!
//! # Example
//!
//! ```ignore
//! use ph_lan8700::phy::{Lan8700, PhyDriver};
//!
//! let mut phy = Lan8700::new();
//! phy.init(&mut iface)?;
//! phy.enable_irq(&mut iface);
//!
//! // from the interrupt/event context
//! phy.event_handler(&mut iface)?;
//! ```

pub mod generic;
pub mod lan8700;

pub use generic::{LinkStatus, PhyDriver, ieee802_3};
pub use lan8700::{
    DEFAULT_PHY_ADDR, LAN8700_PHY_ID, LAN8700_PHY_ID_MASK, Lan8700, Lan8700WithReset,
    decode_speed_indication, scan_bus,
};

/// Register addresses and bit definitions, for diagnostics and custom setup
pub mod regs {
    pub use crate::internal::phy_regs::lan8700::{isr, pscsr, reg};
    pub use crate::internal::phy_regs::standard::{bmcr, bmsr, phy_reg};
}
