//! ISR-safe PHY wrapper using critical sections.

use super::primitives::CriticalSectionCell;
use crate::error::Result;
use crate::hal::ext_int::{ExtInterrupt, NoExtInterrupt};
use crate::hal::mdio::MdioBus;
use crate::interface::{LinkState, NetHost, NetInterface};
use crate::phy::generic::PhyDriver;

/// Driver and interface installed in a [`SharedPhy`]
type Slot<D, M, H, E> = Option<(D, NetInterface<M, H, E>)>;

/// ISR-safe PHY driver plus interface, suitable for a `static`.
///
/// Starts empty; the application installs the driver and interface once its
/// peripherals exist. Every operation runs inside `critical_section::with()`
/// and returns `None` while nothing is installed.
///
/// # Example
///
/// ```ignore
/// static PHY: SharedPhy<Lan8700, Mdio, Host, PhyIrq> = SharedPhy::new();
///
/// PHY.install(Lan8700::new(), iface);
/// PHY.with(|phy, iface| phy.enable_irq(iface));
/// ```
pub struct SharedPhy<D, M, H, E = NoExtInterrupt> {
    inner: CriticalSectionCell<Slot<D, M, H, E>>,
}

impl<D, M, H, E> SharedPhy<D, M, H, E> {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(None),
        }
    }

    /// Install a driver and its interface, returning whatever was there
    pub fn install(&self, driver: D, iface: NetInterface<M, H, E>) -> Slot<D, M, H, E> {
        self.inner.replace(Some((driver, iface)))
    }

    /// Remove the driver and interface
    pub fn take(&self) -> Slot<D, M, H, E> {
        self.inner.replace(None)
    }

    /// Whether a driver is installed
    pub fn is_installed(&self) -> bool {
        self.inner.with(|slot| slot.is_some())
    }

    /// Execute a closure with exclusive access to the driver and interface.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut D, &mut NetInterface<M, H, E>) -> R,
    {
        self.inner
            .with(|slot| slot.as_mut().map(|(driver, iface)| f(driver, iface)))
    }

    /// Like [`with`](Self::with), but `None` if the slot is already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut D, &mut NetInterface<M, H, E>) -> R,
    {
        self.inner
            .try_with(|slot| slot.as_mut().map(|(driver, iface)| f(driver, iface)))
            .flatten()
    }

    /// Last link state recorded on the interface
    pub fn link_state(&self) -> Option<LinkState> {
        self.with(|_, iface| iface.link_state())
    }
}

impl<D, M, H, E> SharedPhy<D, M, H, E>
where
    D: PhyDriver<M, H, E>,
    M: MdioBus,
    H: NetHost,
    E: ExtInterrupt,
{
    /// Run the driver's periodic hook
    pub fn tick(&self) -> Option<Result<()>> {
        self.with(|phy, iface| phy.tick(iface))
    }

    /// Service a PHY interrupt
    pub fn handle_event(&self) -> Option<Result<()>> {
        self.with(|phy, iface| phy.event_handler(iface))
    }
}

impl<D, M, H, E> Default for SharedPhy<D, M, H, E> {
    fn default() -> Self {
        Self::new()
    }
}
