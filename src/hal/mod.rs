//! Hardware Abstraction Layer
//!
//! The collaborators the PHY driver needs from the surrounding platform.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO/SMI bus for PHY register access
//! - [`ext_int`]: Optional interrupt line wired to the PHY's nINT pin
//!
//! # Delay Integration
//!
//! Types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod ext_int;
pub mod mdio;

// Re-export commonly used types
pub use ext_int::{ExtInterrupt, NoExtInterrupt};
pub use mdio::{MdioBus, resolve_phy_address};
