// src/common/measurement.rs

use super::command::Resolution;
use core::fmt;

/// A raw BH1750 reading in device counts, tagged with the resolution that
/// produced it.
///
/// The device returns two bytes, most significant first. Converting counts to
/// lux is left to the caller; `lux` and `millilux` apply the datasheet's
/// typical 1.2 counts-per-lux factor, doubled in `Resolution::High2` where
/// one count is half a lux step.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct RawReading {
    raw: u16,
    resolution: Resolution,
}

impl RawReading {
    /// A high-resolution reading.
    pub const fn new(raw: u16) -> Self {
        Self::with_resolution(raw, Resolution::High)
    }

    pub const fn with_resolution(raw: u16, resolution: Resolution) -> Self {
        Self { raw, resolution }
    }

    /// Decodes the two bytes read from the device.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 2], resolution: Resolution) -> Self {
        Self::with_resolution(u16::from_be_bytes(bytes), resolution)
    }

    #[inline]
    pub const fn raw(&self) -> u16 {
        self.raw
    }

    #[inline]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Illuminance in lux.
    pub fn lux(&self) -> f32 {
        self.raw as f32 / (1.2 * Self::count_scale(self.resolution) as f32)
    }

    /// Illuminance in thousandths of a lux, integer-only.
    pub const fn millilux(&self) -> u32 {
        // raw * 1000 / (1.2 * scale), cannot overflow for a u16 input
        (self.raw as u32) * 5000 / (6 * Self::count_scale(self.resolution))
    }

    // Multiplier on the 1.2 counts-per-lux factor.
    const fn count_scale(resolution: Resolution) -> u32 {
        match resolution {
            Resolution::High | Resolution::Low => 1,
            Resolution::High2 => 2,
        }
    }
}

impl From<RawReading> for u16 {
    fn from(value: RawReading) -> Self {
        value.raw
    }
}

impl From<u16> for RawReading {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RawReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let milli = self.millilux();
        write!(f, "{}.{:03} lx", milli / 1000, milli % 1000)
    }
}
