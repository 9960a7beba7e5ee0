// src/common/error.rs

use super::command::Command;

#[derive(Debug, thiserror::Error)]
pub enum Bh1750Error<E = ()>
where
    E: core::fmt::Debug, // Needed for the bus error in the format strings
{
    /// A command byte could not be written to the bus.
    /// No further transactions are issued after this.
    #[error("failed to write command {command:?}: {error:?}")]
    CommandWriteFailed { command: Command, error: E },

    /// The measurement read transaction failed at the bus layer.
    #[error("measurement read failed: {0:?}")]
    ReadFailed(E),

    /// Address is neither of the two strap-selectable BH1750 addresses.
    #[error("invalid BH1750 address: {0:#04x}")]
    InvalidAddress(u8),

    /// A continuous-mode read was requested while no continuous mode is active.
    #[error("no continuous measurement in progress")]
    NotMeasuring,
}

impl<E: core::fmt::Debug> Bh1750Error<E> {
    /// Returns the underlying bus error, if this error came from the bus.
    pub fn bus_error(&self) -> Option<&E> {
        match self {
            Bh1750Error::CommandWriteFailed { error, .. } => Some(error),
            Bh1750Error::ReadFailed(e) => Some(e),
            Bh1750Error::InvalidAddress(_) | Bh1750Error::NotMeasuring => None,
        }
    }
}
