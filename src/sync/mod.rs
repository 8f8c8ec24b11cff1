//! Interrupt-safe sharing of a PHY driver
//!
//! The host's timer context and the PHY interrupt handler both need the
//! driver and its [`NetInterface`](crate::NetInterface). This module keeps
//! the pair in a `static` guarded by a critical section so the two contexts
//! can never run a driver operation at the same time.
//!
//! - [`CriticalSectionCell`] - ISR-safe interior mutability
//! - [`SharedPhy`] - Driver plus interface behind a critical section
//!
//! # Feature Flags
//!
//! Only compiled with the `critical-section` feature. The application must
//! link a `critical-section` implementation for its target.
//!
//! # Example
//!
//! ```ignore
//! use ph_lan8700::{Lan8700, NetInterface, SharedPhy};
//!
//! static PHY: SharedPhy<Lan8700, Mdio, Host> = SharedPhy::new();
//!
//! fn main() {
//!     PHY.install(Lan8700::new(), NetInterface::new(mdio, host));
//!     PHY.with(|phy, iface| phy.init(iface));
//!
//!     loop {
//!         PHY.tick();
//!     }
//! }
//!
//! #[interrupt]
//! fn PHY_IRQ() {
//!     PHY.handle_event();
//! }
//! ```

mod primitives;
mod shared;

pub use primitives::CriticalSectionCell;
pub use shared::SharedPhy;
