//! LAN8700 PHY Driver
//!
//! Driver for the SMSC/Microchip LAN8700 10/100 Ethernet PHY.
//!
//! # Link Detection
//!
//! The driver supports two ways of learning about link changes:
//!
//! - **Interrupt driven**: the PHY's nINT pin is wired to an MCU interrupt
//!   and the interface carries an [`ExtInterrupt`]. `init` unmasks the
//!   auto-negotiation-complete and link-down sources in the Interrupt Mask
//!   Register; the host calls `event_handler` when the line fires.
//! - **Polled**: with no interrupt line, `tick` reads BMSR on every call and
//!   acts on changes of the link status bit.
//!
//! # Latched Link Status
//!
//! BMSR's link status bit latches low: after a transient failure the first
//! read still reports the link down. The interrupt path therefore reads
//! BMSR twice and trusts only the second value.
//!
//! # Speed and Duplex
//!
//! After auto-negotiation the resolved mode is read from the HCDSPEED field
//! of the PHY Special Control/Status Register (31). An encoding outside the
//! four valid modes is logged and leaves the previous speed/duplex in place.
//!
//! # PHY Address
//!
//! The address comes from the interface. When it is unset or outside 0-31
//! the driver talks to [`DEFAULT_PHY_ADDR`].
//!
//! # Example
//!
//! ```ignore
//! use ph_lan8700::{Lan8700, NetInterface, PhyDriver};
//!
//! let mut iface = NetInterface::new(mdio, host).with_phy_addr(0);
//! let mut phy = Lan8700::new();
//! phy.init(&mut iface)?;
//!
//! loop {
//!     // every 100 ms or so
//!     phy.tick(&mut iface)?;
//!     if iface.take_phy_event() {
//!         if let Some(link) = iface.link_status() {
//!             // link is up at link.speed / link.duplex
//!         }
//!     }
//! }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::PhyConfig;
use crate::error::{ConfigError, Result};
use crate::hal::ext_int::ExtInterrupt;
use crate::hal::mdio::{MdioBus, PHY_REG_COUNT, resolve_phy_address};
use crate::interface::{LinkState, NetHost, NetInterface};
use crate::internal::phy_regs::lan8700::{isr, phy_id, pscsr, reg, timing};
use crate::internal::phy_regs::standard::{bmsr, phy_reg};

use super::generic::{LinkStatus, PhyDriver, ieee802_3};

pub use crate::internal::phy_regs::lan8700::DEFAULT_PHY_ADDR;

/// LAN8700 PHY Identifier (revision bits cleared)
pub const LAN8700_PHY_ID: u32 = phy_id::ID;
/// PHY ID mask (ignores revision bits)
pub const LAN8700_PHY_ID_MASK: u32 = phy_id::MASK;

// =============================================================================
// Speed/Duplex Decoder
// =============================================================================

/// Decode the HCDSPEED field of a PSCSR value
///
/// Returns `None` for the encodings that do not name a valid mode.
pub const fn decode_speed_indication(value: u16) -> Option<LinkStatus> {
    match value & pscsr::HCDSPEED_MASK {
        pscsr::HCDSPEED_10HD => Some(LinkStatus::slow_half()),
        pscsr::HCDSPEED_10FD => Some(LinkStatus::slow_full()),
        pscsr::HCDSPEED_100HD => Some(LinkStatus::fast_half()),
        pscsr::HCDSPEED_100FD => Some(LinkStatus::fast_full()),
        _ => None,
    }
}

// =============================================================================
// LAN8700 Driver (without reset pin)
// =============================================================================

/// LAN8700 PHY Driver
///
/// Holds only bring-up configuration. All link state lives in the
/// [`NetInterface`] passed to each call.
///
/// Use [`Lan8700WithReset`] if the nRST pin is wired to a GPIO.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lan8700 {
    config: PhyConfig,
}

impl Lan8700 {
    /// Create a driver with the default configuration
    pub const fn new() -> Self {
        Self::with_config(PhyConfig::new())
    }

    /// Create a driver with a custom configuration
    pub const fn with_config(config: PhyConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub const fn config(&self) -> &PhyConfig {
        &self.config
    }

    /// Bus address this driver uses for `iface`
    pub fn phy_addr<M, H, E>(&self, iface: &NetInterface<M, H, E>) -> u8 {
        resolve_phy_address(iface.phy_addr(), DEFAULT_PHY_ADDR)
    }

    /// Write a PHY register
    pub fn write_phy_reg<M: MdioBus, H, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
        reg_addr: u8,
        value: u16,
    ) -> Result<()> {
        let addr = self.phy_addr(iface);
        iface.mdio_mut().write(addr, reg_addr, value)
    }

    /// Read a PHY register
    pub fn read_phy_reg<M: MdioBus, H, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
        reg_addr: u8,
    ) -> Result<u16> {
        let addr = self.phy_addr(iface);
        iface.mdio_mut().read(addr, reg_addr)
    }

    /// Read every register, logging each at debug level
    pub fn dump_registers<M: MdioBus, H, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
    ) -> Result<[u16; PHY_REG_COUNT]> {
        let mut regs = [0u16; PHY_REG_COUNT];

        for (index, value) in regs.iter_mut().enumerate() {
            *value = self.read_phy_reg(iface, index as u8)?;

            #[cfg(feature = "defmt")]
            defmt::debug!("reg {}: {:#x}", index as u8, *value);
        }

        Ok(regs)
    }

    /// Verify this is a LAN8700 by reading the PHY ID
    pub fn verify_id<M: MdioBus, H, E>(&self, iface: &mut NetInterface<M, H, E>) -> Result<bool> {
        let addr = self.phy_addr(iface);
        let id = ieee802_3::read_phy_id(iface.mdio_mut(), addr)?;
        Ok((id & LAN8700_PHY_ID_MASK) == LAN8700_PHY_ID)
    }

    /// Get the revision number from PHY ID
    pub fn revision<M: MdioBus, H, E>(&self, iface: &mut NetInterface<M, H, E>) -> Result<u8> {
        let addr = self.phy_addr(iface);
        let id = ieee802_3::read_phy_id(iface.mdio_mut(), addr)?;
        Ok((id & 0x0F) as u8)
    }

    /// Read interrupt status (clears on read)
    pub fn read_interrupt_status<M: MdioBus, H, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
    ) -> Result<u16> {
        self.read_phy_reg(iface, reg::ISR)
    }

    /// Program the Interrupt Mask Register
    pub fn set_interrupt_mask<M: MdioBus, H, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
        mask: u16,
    ) -> Result<()> {
        self.write_phy_reg(iface, reg::IMR, mask)
    }

    /// Read symbol error counter
    pub fn symbol_error_count<M: MdioBus, H, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
    ) -> Result<u16> {
        self.read_phy_reg(iface, reg::SECR)
    }

    /// Read the resolved speed/duplex from PSCSR
    pub fn read_speed_indication<M: MdioBus, H, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
    ) -> Result<Option<LinkStatus>> {
        let value = self.read_phy_reg(iface, reg::PSCSR)?;
        Ok(decode_speed_indication(value))
    }

    /// Check whether the link is up right now
    ///
    /// Uses the latched double read and leaves the interface untouched.
    pub fn is_link_up<M: MdioBus, H, E>(&self, iface: &mut NetInterface<M, H, E>) -> Result<bool> {
        let addr = self.phy_addr(iface);
        ieee802_3::read_latched_link(iface.mdio_mut(), addr)
    }

    /// Query link and speed/duplex without touching the interface state
    ///
    /// Returns `None` while the link is down or the speed indication is not
    /// a valid mode.
    pub fn link_status<M: MdioBus, H, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
    ) -> Result<Option<LinkStatus>> {
        if !self.is_link_up(iface)? {
            return Ok(None);
        }
        self.read_speed_indication(iface)
    }

    /// Record a freshly observed link state and tell the host
    ///
    /// On link up the negotiated mode is decoded and the MAC is refreshed
    /// before the notification goes out.
    fn update_link<M: MdioBus, H: NetHost, E>(
        &self,
        iface: &mut NetInterface<M, H, E>,
        link_up: bool,
    ) -> Result<()> {
        if link_up {
            let value = self.read_phy_reg(iface, reg::PSCSR)?;

            match decode_speed_indication(value) {
                Some(link) => iface.set_negotiated(link),
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Invalid speed/duplex indication: {:#x}", value);
                }
            }

            iface.set_link_state(LinkState::Up);

            let link = iface.negotiated();

            #[cfg(feature = "defmt")]
            defmt::info!("Link up: {} Mbps, {}", link.speed.as_mbps(), link.duplex);

            iface.host_mut().update_mac_config(link);
        } else {
            iface.set_link_state(LinkState::Down);

            #[cfg(feature = "defmt")]
            defmt::info!("Link down");
        }

        let state = iface.link_state();
        iface.host_mut().notify_link_change(state);
        Ok(())
    }
}

impl<M: MdioBus, H: NetHost, E: ExtInterrupt> PhyDriver<M, H, E> for Lan8700 {
    fn init(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::info!("Initializing LAN8700...");

        if let Some(line) = iface.ext_int_mut() {
            line.init();
        }

        let addr = self.phy_addr(iface);
        ieee802_3::soft_reset(iface.mdio_mut(), addr, self.config.reset_policy)?;

        if self.config.dump_registers {
            self.dump_registers(iface)?;
        }

        self.set_interrupt_mask(iface, self.config.interrupt_mask)?;

        // Host evaluates the link once it services the event
        iface.set_link_state(LinkState::Unknown);
        iface.raise_phy_event();

        Ok(())
    }

    fn tick(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()> {
        if iface.has_ext_int() {
            return Ok(());
        }

        let value = self.read_phy_reg(iface, phy_reg::BMSR)?;
        let observed = LinkState::from_link_bit(value & bmsr::LINK_STATUS != 0);

        if observed != iface.link_state() {
            iface.raise_phy_event();
            self.update_link(iface, observed.is_up())?;
        }

        Ok(())
    }

    fn enable_irq(&mut self, iface: &mut NetInterface<M, H, E>) {
        if let Some(line) = iface.ext_int_mut() {
            line.enable_irq();
        }
    }

    fn disable_irq(&mut self, iface: &mut NetInterface<M, H, E>) {
        if let Some(line) = iface.ext_int_mut() {
            line.disable_irq();
        }
    }

    fn event_handler(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()> {
        // Reading ISR acknowledges the interrupt
        let status = self.read_interrupt_status(iface)?;

        if status & isr::LINK_EVENTS == 0 {
            return Ok(());
        }

        let link_up = self.is_link_up(iface)?;
        self.update_link(iface, link_up)
    }
}

// =============================================================================
// LAN8700 Driver (with reset pin)
// =============================================================================

/// LAN8700 PHY Driver with Hardware Reset Pin
///
/// Adds control of the active-low nRST pin through
/// `embedded_hal::digital::OutputPin`. All [`PhyDriver`] operations forward
/// to the inner [`Lan8700`].
///
/// # Example
///
/// ```ignore
/// let mut phy = Lan8700WithReset::new(Lan8700::new(), reset_pin);
/// phy.hardware_reset(&mut delay)?;
/// phy.init(&mut iface)?;
/// ```
#[derive(Debug)]
pub struct Lan8700WithReset<RST: OutputPin> {
    /// Inner PHY driver
    inner: Lan8700,
    /// Reset pin (active low)
    reset_pin: RST,
}

impl<RST: OutputPin> Lan8700WithReset<RST> {
    /// Wrap a driver with its reset pin
    ///
    /// The pin is driven high (inactive) immediately.
    pub fn new(inner: Lan8700, mut reset_pin: RST) -> Self {
        let _ = reset_pin.set_high();
        Self { inner, reset_pin }
    }

    /// Pulse nRST low, then wait for the PHY to recover
    ///
    /// # Timing
    /// - Reset pulse: 200µs (minimum 100µs per datasheet)
    /// - Recovery time: 1ms (minimum 800µs per datasheet)
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.assert_reset()?;
        delay.delay_us(timing::RESET_PULSE_US);

        self.deassert_reset()?;
        delay.delay_us(timing::RESET_RECOVERY_US);

        Ok(())
    }

    /// Hold the PHY in reset
    pub fn assert_reset(&mut self) -> Result<()> {
        self.reset_pin
            .set_low()
            .map_err(|_| ConfigError::GpioError)?;
        Ok(())
    }

    /// Release the PHY from reset
    ///
    /// Wait at least 800µs before accessing the PHY over MDIO.
    pub fn deassert_reset(&mut self) -> Result<()> {
        self.reset_pin
            .set_high()
            .map_err(|_| ConfigError::GpioError)?;
        Ok(())
    }

    /// The wrapped driver
    pub fn phy(&self) -> &Lan8700 {
        &self.inner
    }

    /// Consume the driver and return the reset pin
    pub fn into_reset_pin(self) -> RST {
        self.reset_pin
    }
}

impl<RST, M, H, E> PhyDriver<M, H, E> for Lan8700WithReset<RST>
where
    RST: OutputPin,
    M: MdioBus,
    H: NetHost,
    E: ExtInterrupt,
{
    fn init(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()> {
        self.inner.init(iface)
    }

    fn tick(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()> {
        self.inner.tick(iface)
    }

    fn enable_irq(&mut self, iface: &mut NetInterface<M, H, E>) {
        self.inner.enable_irq(iface);
    }

    fn disable_irq(&mut self, iface: &mut NetInterface<M, H, E>) {
        self.inner.disable_irq(iface);
    }

    fn event_handler(&mut self, iface: &mut NetInterface<M, H, E>) -> Result<()> {
        self.inner.event_handler(iface)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Scan the MDIO bus for LAN8700 PHYs
///
/// Returns an array indexed by address; `Some(addr)` where a LAN8700
/// answered. Addresses that fail to respond are skipped.
pub fn scan_bus<M: MdioBus>(mdio: &mut M) -> [Option<u8>; PHY_REG_COUNT] {
    let mut found = [None; PHY_REG_COUNT];

    for (addr, slot) in (0u8..).zip(found.iter_mut()) {
        let id = ieee802_3::read_phy_id(mdio, addr).unwrap_or(0);
        if (id & LAN8700_PHY_ID_MASK) == LAN8700_PHY_ID {
            *slot = Some(addr);
        }
    }

    found
}
