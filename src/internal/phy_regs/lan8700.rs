//! LAN8700 Vendor-Specific Register Definitions
//!
//! Register layout of the SMSC/Microchip LAN8700 10/100 Ethernet PHY.
//! Values must match the silicon bit-for-bit.
//!
//! # References
//!
//! - LAN8700/LAN8700i Datasheet
//! - IEEE 802.3 Ethernet Standard

#![allow(dead_code)]

/// PHY identifier constants
pub mod phy_id {
    /// LAN8700 PHY Identifier
    ///
    /// - PHYIDR1 (reg 2): 0x0007
    /// - PHYIDR2 (reg 3): 0xC0Cx (x = revision)
    pub const ID: u32 = 0x0007_C0C0;
    /// PHY ID mask (ignores revision bits)
    pub const MASK: u32 = 0xFFFF_FFF0;
}

/// Timing constants
pub mod timing {
    /// Default soft reset polling attempts
    pub const RESET_MAX_ATTEMPTS: u32 = 1000;
    /// Hardware reset pulse duration in microseconds (minimum 100µs per datasheet)
    pub const RESET_PULSE_US: u32 = 200;
    /// Hardware reset recovery time in microseconds (minimum 800µs per datasheet)
    pub const RESET_RECOVERY_US: u32 = 1000;
}

/// Address used when the interface has no valid PHY address configured
pub const DEFAULT_PHY_ADDR: u8 = 0;

/// LAN8700 vendor-specific register addresses
pub mod reg {
    /// Mode Control/Status Register
    pub const MCSR: u8 = 17;
    /// Special Modes Register
    pub const SMR: u8 = 18;
    /// Symbol Error Counter Register
    pub const SECR: u8 = 26;
    /// Special Control/Status Indication Register
    pub const SCSIR: u8 = 27;
    /// Interrupt Source Register
    pub const ISR: u8 = 29;
    /// Interrupt Mask Register
    pub const IMR: u8 = 30;
    /// PHY Special Control/Status Register
    pub const PSCSR: u8 = 31;
}

/// Interrupt Source Register (29) bits, cleared on read
///
/// The Interrupt Mask Register (30) uses the same bit positions.
pub mod isr {
    /// ENERGYON interrupt
    pub const ENERGYON: u16 = 1 << 7;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 6;
    /// Remote fault detected
    pub const REMOTE_FAULT: u16 = 1 << 5;
    /// Link down
    pub const LINK_DOWN: u16 = 1 << 4;
    /// Auto-negotiation LP acknowledge
    pub const AN_LP_ACK: u16 = 1 << 3;
    /// Parallel detection fault
    pub const PD_FAULT: u16 = 1 << 2;
    /// Auto-negotiation page received
    pub const AN_PAGE_RX: u16 = 1 << 1;
    /// Sources that signal a link state change
    pub const LINK_EVENTS: u16 = AN_COMPLETE | LINK_DOWN;
}

/// PHY Special Control/Status Register (31) bits
pub mod pscsr {
    /// AUTODONE - Auto-negotiation done (read-only)
    pub const AUTODONE: u16 = 1 << 12;
    /// HCDSPEED mask (bits 4:2) - Speed indication
    pub const HCDSPEED_MASK: u16 = 0x7 << 2;
    /// Speed: 10BASE-T Half Duplex
    pub const HCDSPEED_10HD: u16 = 0x1 << 2;
    /// Speed: 10BASE-T Full Duplex
    pub const HCDSPEED_10FD: u16 = 0x5 << 2;
    /// Speed: 100BASE-TX Half Duplex
    pub const HCDSPEED_100HD: u16 = 0x2 << 2;
    /// Speed: 100BASE-TX Full Duplex
    pub const HCDSPEED_100FD: u16 = 0x6 << 2;
}
