// src/common/timing.rs

use super::command::Resolution;
use core::time::Duration;

// The device has no data-ready signal on the bus, so every settle interval
// below is waited out unconditionally before reading.

// === One-shot read sequence ===

/// Wait after the one-time high-resolution command before reading.
/// Typical conversion is 120 ms; 180 ms is the datasheet maximum.
pub const ONE_TIME_H_RES_SETTLE: Duration = Duration::from_millis(180);

// === Per-resolution conversion times ===

/// Maximum conversion time in the high-resolution modes.
pub const H_RES_CONVERSION_MAX: Duration = Duration::from_millis(180);
/// Maximum conversion time in the low-resolution mode.
pub const L_RES_CONVERSION_MAX: Duration = Duration::from_millis(24);

/// Settle interval to wait after starting a measurement at `resolution`.
pub const fn settle_time(resolution: Resolution) -> Duration {
    match resolution {
        Resolution::High | Resolution::High2 => H_RES_CONVERSION_MAX,
        Resolution::Low => L_RES_CONVERSION_MAX,
    }
}
