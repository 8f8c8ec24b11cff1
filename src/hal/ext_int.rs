//! External interrupt line
//!
//! The LAN8700 signals link events on its nINT pin. When that pin is wired
//! to an MCU interrupt, the host supplies an [`ExtInterrupt`] implementation
//! and the driver stops polling. Without one the driver falls back to
//! periodic polling.
//!
//! Absence is expressed as `Option<E>` on the interface; [`NoExtInterrupt`]
//! is the type to name when no line exists at all.

/// Controller for the interrupt line carrying the PHY's nINT signal
pub trait ExtInterrupt {
    /// Configure the line (pin mode, edge, handler registration)
    fn init(&mut self);

    /// Unmask the line
    fn enable_irq(&mut self);

    /// Mask the line
    fn disable_irq(&mut self);
}

impl<E: ExtInterrupt + ?Sized> ExtInterrupt for &mut E {
    fn init(&mut self) {
        (**self).init();
    }

    fn enable_irq(&mut self) {
        (**self).enable_irq();
    }

    fn disable_irq(&mut self) {
        (**self).disable_irq();
    }
}

/// Uninhabited interrupt line for polled-only interfaces
///
/// No value of this type can exist, so an `Option<NoExtInterrupt>` is
/// always `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoExtInterrupt {}

impl ExtInterrupt for NoExtInterrupt {
    fn init(&mut self) {
        match *self {}
    }

    fn enable_irq(&mut self) {
        match *self {}
    }

    fn disable_irq(&mut self) {
        match *self {}
    }
}
