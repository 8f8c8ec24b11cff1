//! Driver configuration types
//!
//! Link parameters shared with the host MAC, plus the [`PhyConfig`] builder
//! controlling how the LAN8700 driver brings the transceiver up.

use crate::internal::phy_regs::lan8700::{isr, timing};

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
}

impl Speed {
    /// Link rate in megabits per second
    pub const fn as_mbps(self) -> u32 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// How long to wait for the self-clearing BMCR reset bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetPolicy {
    /// Poll BMCR at most `max_attempts` times, then fail with
    /// [`ConfigError::ResetFailed`](crate::ConfigError::ResetFailed)
    Bounded {
        /// Number of BMCR reads before giving up
        max_attempts: u32,
    },
    /// Spin until the PHY clears the bit, however long that takes
    ///
    /// A PHY that never answers hangs the caller.
    Unbounded,
}

impl Default for ResetPolicy {
    fn default() -> Self {
        ResetPolicy::Bounded {
            max_attempts: timing::RESET_MAX_ATTEMPTS,
        }
    }
}

/// LAN8700 bring-up configuration
///
/// # Example
///
/// ```ignore
/// let config = PhyConfig::new()
///     .with_reset_policy(ResetPolicy::Bounded { max_attempts: 500 })
///     .with_register_dump(true);
/// let mut phy = Lan8700::with_config(config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig {
    /// Soft reset wait strategy
    pub reset_policy: ResetPolicy,
    /// Read (and log) all 32 registers after reset
    pub dump_registers: bool,
    /// Value programmed into the Interrupt Mask Register
    pub interrupt_mask: u16,
}

impl PhyConfig {
    /// Default configuration: bounded reset, no dump, link-change interrupts
    pub const fn new() -> Self {
        Self {
            reset_policy: ResetPolicy::Bounded {
                max_attempts: timing::RESET_MAX_ATTEMPTS,
            },
            dump_registers: false,
            interrupt_mask: isr::LINK_EVENTS,
        }
    }

    /// Set the soft reset wait strategy
    #[must_use]
    pub const fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Enable or disable the post-reset register dump
    #[must_use]
    pub const fn with_register_dump(mut self, enabled: bool) -> Self {
        self.dump_registers = enabled;
        self
    }

    /// Override the Interrupt Mask Register value
    #[must_use]
    pub const fn with_interrupt_mask(mut self, mask: u16) -> Self {
        self.interrupt_mask = mask;
        self
    }
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self::new()
    }
}
