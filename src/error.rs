//! Error types for the LAN8700 PHY driver
//!
//! Errors are organized by domain:
//! - [`ConfigError`]: Bring-up failures (reset, reset pin)
//! - [`IoError`]: Register bus failures reported by the [`MdioBus`] transport
//!
//! The unified [`Error`] enum wraps both and is returned by every fallible
//! driver operation.
//!
//! An unrecognized speed indication is deliberately *not* an error: the
//! driver logs it and keeps the previous speed/duplex.
//!
//! [`MdioBus`]: crate::hal::mdio::MdioBus

// =============================================================================
// Configuration Errors
// =============================================================================

/// Bring-up errors
///
/// These errors occur while resetting or initializing the transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Soft reset did not self-clear within the configured attempts
    ResetFailed,
    /// Driving the hardware reset pin failed
    GpioError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::ResetFailed => "soft reset timed out",
            ConfigError::GpioError => "reset pin error",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Register bus errors
///
/// Produced by [`MdioBus`](crate::hal::mdio::MdioBus) implementations and
/// propagated unchanged by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Bus transaction timed out
    Timeout,
    /// PHY communication error (no response or bus fault)
    PhyError,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "bus transaction timed out",
            IoError::PhyError => "PHY communication error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match phy.init(&mut iface) {
///     Err(Error::Config(ConfigError::ResetFailed)) => { /* PHY not responding */ }
///     Err(Error::Io(IoError::Timeout)) => { /* MDIO stuck */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for PHY operations
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Unit Tests
// =============================================================================
