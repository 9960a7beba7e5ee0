// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod sensor;

// Re-export key types for convenience
pub use common::Bh1750Addr;
pub use common::Bh1750Error;
pub use sensor::{read_measurement, SyncSensor};

#[cfg(feature = "std")]
pub use sensor::SerializedBus;
