//! Testing utilities and mock implementations
//!
//! Mocks for every collaborator the PHY driver talks to, so the driver can
//! be exercised on the host without hardware.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::error::{IoError, Result};
use crate::hal::ext_int::ExtInterrupt;
use crate::hal::mdio::MdioBus;
use crate::interface::{LinkState, NetHost};
use crate::internal::phy_regs::lan8700::{pscsr, reg};
use crate::internal::phy_regs::standard::{bmcr, bmsr, phy_reg};
use crate::phy::generic::LinkStatus;

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Registers hold their last written value unless a self-clearing mask is
/// set for them. Scripted read sequences take priority over stored values,
/// which models latched and clear-on-read registers.
///
/// # Example
///
/// ```ignore
/// let mdio = MockMdioBus::new();
/// mdio.setup_lan8700(0);
/// mdio.queue_reads(0, phy_reg::BMSR, &[0x0000, bmsr::LINK_STATUS]);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Scripted values returned by upcoming reads
    read_queue: RefCell<HashMap<(u8, u8), VecDeque<u16>>>,
    /// Bits the PHY clears right after they are written
    self_clearing: RefCell<HashMap<(u8, u8), u16>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Record of reads: (phy_addr, reg_addr)
    read_log: RefCell<Vec<(u8, u8)>>,
    /// Error returned by every operation when set
    failure: Cell<Option<IoError>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Script the values returned by the next reads of a register
    pub fn queue_reads(&self, phy_addr: u8, reg_addr: u8, values: &[u16]) {
        self.read_queue
            .borrow_mut()
            .entry((phy_addr, reg_addr))
            .or_default()
            .extend(values.iter().copied());
    }

    /// Mark bits of a register as self-clearing on write
    pub fn set_self_clearing(&self, phy_addr: u8, reg_addr: u8, mask: u16) {
        self.self_clearing
            .borrow_mut()
            .insert((phy_addr, reg_addr), mask);
    }

    /// Make every subsequent operation fail
    pub fn fail_with(&self, error: IoError) {
        self.failure.set(Some(error));
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Number of reads of one register
    pub fn read_count(&self, phy_addr: u8, reg_addr: u8) -> usize {
        self.read_log
            .borrow()
            .iter()
            .filter(|&&entry| entry == (phy_addr, reg_addr))
            .count()
    }

    /// Setup for a LAN8700 PHY with default register values
    pub fn setup_lan8700(&self, phy_addr: u8) {
        // PHY ID registers (LAN8700, revision 1)
        self.set_register(phy_addr, phy_reg::PHYIDR1, 0x0007);
        self.set_register(phy_addr, phy_reg::PHYIDR2, 0xC0C1);

        // BMSR: basic capabilities, link down initially
        let bmsr_value = bmsr::TX_FD_CAPABLE
            | bmsr::TX_HD_CAPABLE
            | bmsr::T10_FD_CAPABLE
            | bmsr::T10_HD_CAPABLE
            | bmsr::AN_ABILITY
            | bmsr::EXT_CAPABLE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_value);

        // BMCR: auto-neg enabled, reset completes instantly
        self.set_register(phy_addr, phy_reg::BMCR, bmcr::AN_ENABLE);
        self.set_self_clearing(phy_addr, phy_reg::BMCR, bmcr::RESET);

        self.set_register(phy_addr, reg::ISR, 0x0000);
        self.set_register(phy_addr, reg::PSCSR, 0x0000);
    }

    /// Simulate auto-negotiation completing with the given HCDSPEED value
    pub fn simulate_link_up(&self, phy_addr: u8, hcdspeed: u16) {
        let mut bmsr_val = self.get_register(phy_addr, phy_reg::BMSR).unwrap_or(0);
        bmsr_val |= bmsr::LINK_STATUS | bmsr::AN_COMPLETE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_val);
        self.set_register(phy_addr, reg::PSCSR, pscsr::AUTODONE | hcdspeed);
    }

    /// Simulate link going down
    pub fn simulate_link_down(&self, phy_addr: u8) {
        let mut bmsr_val = self.get_register(phy_addr, phy_reg::BMSR).unwrap_or(0);
        bmsr_val &= !(bmsr::LINK_STATUS | bmsr::AN_COMPLETE);
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_val);
        self.set_register(phy_addr, reg::PSCSR, 0x0000);
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        if let Some(error) = self.failure.get() {
            return Err(error.into());
        }

        self.read_log.borrow_mut().push((phy_addr, reg_addr));

        let scripted = self
            .read_queue
            .borrow_mut()
            .get_mut(&(phy_addr, reg_addr))
            .and_then(VecDeque::pop_front);

        // Fall back to the register map (default 0 if not set)
        Ok(scripted.unwrap_or_else(|| self.get_register(phy_addr, reg_addr).unwrap_or(0)))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        if let Some(error) = self.failure.get() {
            return Err(error.into());
        }

        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        let clears = self
            .self_clearing
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0);
        self.set_register(phy_addr, reg_addr, value & !clears);

        Ok(())
    }
}

// =============================================================================
// Mock Host
// =============================================================================

/// One recorded call into the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    UpdateMacConfig(LinkStatus),
    LinkChange(LinkState),
    Signal,
}

/// Host hooks that record every call in order
#[derive(Debug, Default)]
pub struct MockHost {
    calls: Vec<HostCall>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call, in order
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.clone()
    }

    /// Link parameters passed to `update_mac_config`
    pub fn mac_updates(&self) -> Vec<LinkStatus> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::UpdateMacConfig(link) => Some(*link),
                _ => None,
            })
            .collect()
    }

    /// States passed to `notify_link_change`
    pub fn link_changes(&self) -> Vec<LinkState> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::LinkChange(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// Number of `signal_event` calls
    pub fn signals(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::Signal))
            .count()
    }
}

impl NetHost for MockHost {
    fn update_mac_config(&mut self, link: LinkStatus) {
        self.calls.push(HostCall::UpdateMacConfig(link));
    }

    fn notify_link_change(&mut self, state: LinkState) {
        self.calls.push(HostCall::LinkChange(state));
    }

    fn signal_event(&mut self) {
        self.calls.push(HostCall::Signal);
    }
}

// =============================================================================
// Mock Interrupt Line
// =============================================================================

/// Interrupt line that counts how it was driven
#[derive(Debug, Default)]
pub struct MockExtInt {
    init_count: usize,
    enable_count: usize,
    disable_count: usize,
    enabled: bool,
}

impl MockExtInt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_count(&self) -> usize {
        self.init_count
    }

    pub fn enable_count(&self) -> usize {
        self.enable_count
    }

    pub fn disable_count(&self) -> usize {
        self.disable_count
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl ExtInterrupt for MockExtInt {
    fn init(&mut self) {
        self.init_count += 1;
    }

    fn enable_irq(&mut self) {
        self.enable_count += 1;
        self.enabled = true;
    }

    fn disable_irq(&mut self) {
        self.disable_count += 1;
        self.enabled = false;
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: u64,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

// =============================================================================
// Mock Reset Pin
// =============================================================================

/// Output pin recording every level it was driven to
#[derive(Debug, Default)]
pub struct MockPin {
    /// Levels in order (`true` = high)
    transitions: Vec<bool>,
    /// Reject every write
    failing: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pin whose every write fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn transitions(&self) -> Vec<bool> {
        self.transitions.clone()
    }

    pub fn is_high(&self) -> bool {
        self.transitions.last().copied().unwrap_or(false)
    }

    fn drive(&mut self, high: bool) -> core::result::Result<(), ErrorKind> {
        if self.failing {
            return Err(ErrorKind::Other);
        }
        self.transitions.push(high);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.drive(true)
    }
}
