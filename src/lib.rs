//! LAN8700 Ethernet PHY Driver
//!
//! A `no_std`, `no_alloc` driver for the SMSC/Microchip LAN8700 10/100
//! Ethernet transceiver.
//!
//! The driver resets and configures the PHY over the MDIO management bus,
//! detects link changes by polling or by interrupt, decodes the negotiated
//! speed and duplex, and reports both to the host MAC driver and network
//! stack.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): The [`PhyDriver`] operations and the
//!    [`Lan8700`] implementation
//! 2. **Interface Layer** ([`interface`]): The per-transceiver
//!    [`NetInterface`] context and the [`NetHost`] hooks
//! 3. **HAL Layer** ([`hal`]): The MDIO bus and interrupt line the host
//!    supplies
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 22**: BMCR/BMSR/PHYIDR registers, MDIO addressing
//! - **LAN8700-specific**: Interrupt source/mask and special control/status
//!   registers
//!
//! # Features
//!
//! - `defmt`: Enable defmt logging and formatting for public types
//! - `critical-section`: Enable the ISR-safe [`SharedPhy`] wrapper
//!
//! # Example
//!
//! ```ignore
//! use ph_lan8700::{Lan8700, NetInterface, PhyConfig, PhyDriver};
//!
//! let mut iface = NetInterface::new(mdio, host)
//!     .with_phy_addr(0)
//!     .with_ext_int(phy_irq_line);
//!
//! let mut phy = Lan8700::with_config(PhyConfig::new().with_register_dump(true));
//! phy.init(&mut iface)?;
//! phy.enable_irq(&mut iface);
//!
//! // in the PHY interrupt handler
//! phy.event_handler(&mut iface)?;
//! if let Some(link) = iface.link_status() {
//!     // MAC has already been reprogrammed through NetHost::update_mac_config
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; Cargo.toml mirrors them for workspace tooling.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod error;
pub mod hal;
pub mod interface;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Duplex, PhyConfig, ResetPolicy, Speed};
pub use error::{ConfigError, Error, IoError, Result};
pub use hal::{ExtInterrupt, MdioBus, NoExtInterrupt};
pub use interface::{LinkState, NetHost, NetInterface};

// Re-export PHY types
pub use phy::{Lan8700, Lan8700WithReset, LinkStatus, PhyDriver};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::{CriticalSectionCell, SharedPhy};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::hal::mdio::{MAX_PHY_ADDR, MAX_REG_ADDR, PHY_REG_COUNT};
    pub use crate::internal::phy_regs::lan8700::DEFAULT_PHY_ADDR;
    pub use crate::internal::phy_regs::lan8700::phy_id::{
        ID as LAN8700_PHY_ID, MASK as LAN8700_PHY_ID_MASK,
    };
    pub use crate::internal::phy_regs::lan8700::timing::{
        RESET_MAX_ATTEMPTS, RESET_PULSE_US, RESET_RECOVERY_US,
    };
}
