//! Internal Implementation Details
//!
//! Register maps and constants that are not part of the public API.
//! Selected items are re-exported through [`crate::constants`] and
//! [`crate::phy`].
//!
//! # Contents
//!
//! - [`phy_regs`]: IEEE 802.3 and LAN8700 register definitions

pub(crate) mod phy_regs;
