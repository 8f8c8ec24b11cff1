//! Network interface context
//!
//! [`NetInterface`] is the per-transceiver state the host network stack
//! owns: the register bus, the host hooks, the optional interrupt line, the
//! configured PHY address, and the link state the driver maintains on the
//! host's behalf.
//!
//! Drivers are stateless with respect to the link. Every [`PhyDriver`]
//! operation takes the interface by exclusive reference, so two contexts
//! can never mutate the same transceiver at once.
//!
//! [`PhyDriver`]: crate::phy::PhyDriver

use crate::config::{Duplex, Speed};
use crate::hal::ext_int::{ExtInterrupt, NoExtInterrupt};
use crate::phy::generic::LinkStatus;

// =============================================================================
// Link State
// =============================================================================

/// Link state as last observed by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Not evaluated since the interface was created or the PHY initialized
    #[default]
    Unknown,
    /// No link partner
    Down,
    /// Link established
    Up,
}

impl LinkState {
    /// Map the BMSR link status bit to a state
    pub const fn from_link_bit(up: bool) -> Self {
        if up { LinkState::Up } else { LinkState::Down }
    }

    /// Whether the link is up
    pub const fn is_up(self) -> bool {
        matches!(self, LinkState::Up)
    }
}

// =============================================================================
// Host Hooks
// =============================================================================

/// Callbacks into the host MAC driver and network stack
pub trait NetHost {
    /// Reprogram the MAC for the newly negotiated speed and duplex
    fn update_mac_config(&mut self, link: LinkStatus);

    /// Process a link state change
    fn notify_link_change(&mut self, state: LinkState);

    /// Wake the stack so it services the pending PHY event
    ///
    /// Called whenever the driver sets the pending-event flag.
    fn signal_event(&mut self) {}
}

impl<H: NetHost + ?Sized> NetHost for &mut H {
    fn update_mac_config(&mut self, link: LinkStatus) {
        (**self).update_mac_config(link);
    }

    fn notify_link_change(&mut self, state: LinkState) {
        (**self).notify_link_change(state);
    }

    fn signal_event(&mut self) {
        (**self).signal_event();
    }
}

// =============================================================================
// Network Interface
// =============================================================================

/// Per-transceiver context shared between the host and the PHY driver
///
/// # Example
///
/// ```ignore
/// let mut iface = NetInterface::new(mdio, host)
///     .with_phy_addr(1)
///     .with_ext_int(phy_irq_line);
///
/// let mut phy = Lan8700::new();
/// phy.init(&mut iface)?;
/// ```
#[derive(Debug)]
pub struct NetInterface<M, H, E = NoExtInterrupt> {
    mdio: M,
    host: H,
    ext_int: Option<E>,
    /// Configured PHY address; `None` or out of range selects the chip default
    phy_addr: Option<u8>,
    link_state: LinkState,
    speed: Speed,
    duplex: Duplex,
    /// Set by the driver, cleared by the host once consumed
    phy_event: bool,
}

impl<M, H> NetInterface<M, H, NoExtInterrupt> {
    /// Create a polled interface with no PHY address configured
    pub fn new(mdio: M, host: H) -> Self {
        Self {
            mdio,
            host,
            ext_int: None,
            phy_addr: None,
            link_state: LinkState::Unknown,
            speed: Speed::default(),
            duplex: Duplex::default(),
            phy_event: false,
        }
    }
}

impl<M, H, E> NetInterface<M, H, E> {
    /// Attach the interrupt line wired to the PHY's nINT pin
    ///
    /// Once attached the driver relies on interrupts and `tick` stops polling.
    pub fn with_ext_int<E2: ExtInterrupt>(self, line: E2) -> NetInterface<M, H, E2> {
        NetInterface {
            mdio: self.mdio,
            host: self.host,
            ext_int: Some(line),
            phy_addr: self.phy_addr,
            link_state: self.link_state,
            speed: self.speed,
            duplex: self.duplex,
            phy_event: self.phy_event,
        }
    }

    /// Configure the PHY bus address
    ///
    /// Values above 31 are accepted and make the driver use its default.
    #[must_use]
    pub fn with_phy_addr(mut self, addr: u8) -> Self {
        self.phy_addr = Some(addr);
        self
    }

    /// Configured PHY address, as given
    pub fn phy_addr(&self) -> Option<u8> {
        self.phy_addr
    }

    /// Shared access to the register bus
    pub fn mdio(&self) -> &M {
        &self.mdio
    }

    /// Exclusive access to the register bus
    pub fn mdio_mut(&mut self) -> &mut M {
        &mut self.mdio
    }

    /// Shared access to the host hooks
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host hooks
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Interrupt line, if one is attached
    pub fn ext_int_mut(&mut self) -> Option<&mut E> {
        self.ext_int.as_mut()
    }

    /// Whether an interrupt line is attached
    pub fn has_ext_int(&self) -> bool {
        self.ext_int.is_some()
    }

    /// Last observed link state
    pub fn link_state(&self) -> LinkState {
        self.link_state
    }

    /// Negotiated speed and duplex, only while the link is up
    pub fn link_status(&self) -> Option<LinkStatus> {
        self.link_state
            .is_up()
            .then(|| LinkStatus::new(self.speed, self.duplex))
    }

    /// Whether a PHY event is waiting for the host
    pub fn phy_event(&self) -> bool {
        self.phy_event
    }

    /// Consume the pending PHY event flag
    ///
    /// Returns whether the flag was set and clears it.
    pub fn take_phy_event(&mut self) -> bool {
        core::mem::take(&mut self.phy_event)
    }

    /// Tear the interface apart, returning its collaborators
    pub fn release(self) -> (M, H, Option<E>) {
        (self.mdio, self.host, self.ext_int)
    }

    pub(crate) fn set_link_state(&mut self, state: LinkState) {
        self.link_state = state;
    }

    pub(crate) fn set_negotiated(&mut self, link: LinkStatus) {
        self.speed = link.speed;
        self.duplex = link.duplex;
    }

    /// Speed/duplex as stored, regardless of link state
    pub(crate) fn negotiated(&self) -> LinkStatus {
        LinkStatus::new(self.speed, self.duplex)
    }
}

impl<M, H: NetHost, E> NetInterface<M, H, E> {
    /// Set the pending-event flag and wake the stack
    pub(crate) fn raise_phy_event(&mut self) {
        self.phy_event = true;
        self.host.signal_event();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockExtInt, MockHost, MockMdioBus};

    #[test]
    fn link_state_from_link_bit() {
        assert_eq!(LinkState::from_link_bit(true), LinkState::Up);
        assert_eq!(LinkState::from_link_bit(false), LinkState::Down);
        assert!(LinkState::Up.is_up());
        assert!(!LinkState::Down.is_up());
        assert!(!LinkState::Unknown.is_up());
    }

    #[test]
    fn new_interface_is_unknown_and_polled() {
        let iface = NetInterface::new(MockMdioBus::new(), MockHost::new());

        assert_eq!(iface.link_state(), LinkState::Unknown);
        assert!(iface.link_status().is_none());
        assert!(!iface.has_ext_int());
        assert!(!iface.phy_event());
        assert_eq!(iface.phy_addr(), None);
    }

    #[test]
    fn builder_keeps_address_across_ext_int() {
        let iface = NetInterface::new(MockMdioBus::new(), MockHost::new())
            .with_phy_addr(5)
            .with_ext_int(MockExtInt::new());

        assert_eq!(iface.phy_addr(), Some(5));
        assert!(iface.has_ext_int());
    }

    #[test]
    fn link_status_hidden_unless_up() {
        let mut iface = NetInterface::new(MockMdioBus::new(), MockHost::new());
        iface.set_negotiated(LinkStatus::slow_full());

        iface.set_link_state(LinkState::Down);
        assert!(iface.link_status().is_none());

        iface.set_link_state(LinkState::Up);
        assert_eq!(iface.link_status(), Some(LinkStatus::slow_full()));
    }

    #[test]
    fn raise_and_take_phy_event() {
        let mut iface = NetInterface::new(MockMdioBus::new(), MockHost::new());

        iface.raise_phy_event();
        assert!(iface.phy_event());
        assert_eq!(iface.host().signals(), 1);

        assert!(iface.take_phy_event());
        assert!(!iface.phy_event());
        assert!(!iface.take_phy_event());
    }

    #[test]
    fn release_returns_collaborators() {
        let iface = NetInterface::new(MockMdioBus::new(), MockHost::new())
            .with_ext_int(MockExtInt::new());
        let (_mdio, _host, line) = iface.release();
        assert!(line.is_some());
    }
}
