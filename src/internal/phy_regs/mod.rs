//! PHY Register Definitions
//!
//! Register maps for the transceiver, accessed over the MDIO bus rather
//! than memory mapped.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers (0-15)
//! - [`lan8700`] - LAN8700 vendor-specific registers (16-31)

pub mod lan8700;
pub mod standard;
