//! BH1750 instruction set.
//!
//! Every instruction is a single opcode byte written to the device address.

use core::fmt;

/// Measurement resolution.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Resolution {
    /// 1 lx per count, 120 ms typical conversion.
    #[default]
    High,
    /// 0.5 lx per count, 120 ms typical conversion.
    High2,
    /// 4 lx per count, 16 ms typical conversion.
    Low,
}

/// A BH1750 instruction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// No active state.
    PowerDown,
    /// Waiting for a measurement command.
    PowerOn,
    /// Clears the data register. Not accepted in power-down.
    Reset,
    /// Measure continuously at the given resolution.
    Continuous(Resolution),
    /// Measure once at the given resolution, then power down.
    OneTime(Resolution),
}

impl Command {
    /// The one-shot high-resolution start command used by the read sequence.
    pub const ONE_TIME_HIGH_RES: Command = Command::OneTime(Resolution::High);

    /// Returns the opcode byte for this instruction.
    pub const fn opcode(&self) -> u8 {
        match self {
            Command::PowerDown => 0x00,
            Command::PowerOn => 0x01,
            Command::Reset => 0x07,
            Command::Continuous(Resolution::High) => 0x10,
            Command::Continuous(Resolution::High2) => 0x11,
            Command::Continuous(Resolution::Low) => 0x13,
            Command::OneTime(Resolution::High) => 0x20,
            Command::OneTime(Resolution::High2) => 0x21,
            Command::OneTime(Resolution::Low) => 0x23,
        }
    }

    /// Decodes an opcode byte, if it is a known instruction.
    pub const fn from_opcode(opcode: u8) -> Option<Command> {
        let cmd = match opcode {
            0x00 => Command::PowerDown,
            0x01 => Command::PowerOn,
            0x07 => Command::Reset,
            0x10 => Command::Continuous(Resolution::High),
            0x11 => Command::Continuous(Resolution::High2),
            0x13 => Command::Continuous(Resolution::Low),
            0x20 => Command::OneTime(Resolution::High),
            0x21 => Command::OneTime(Resolution::High2),
            0x23 => Command::OneTime(Resolution::Low),
            _ => return None,
        };
        Some(cmd)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({:#04x})", self, self.opcode())
    }
}
