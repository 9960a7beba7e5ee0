// src/sensor/mod.rs

// Blocking read sequence and the driver built on it
pub mod sequencer;

// Whole-sequence serialization over a shared bus (needs std::sync::Mutex)
#[cfg(any(test, feature = "std"))]
pub mod shared;

// Asynchronous read sequence (feature-gated)
#[cfg(feature = "async")]
pub mod async_sensor;

// Transcript-recording bus and timer for the unit tests
#[cfg(test)]
mod mock;

// --- Public Re-exports ---
pub use sequencer::{read_measurement, SyncSensor};

#[cfg(any(test, feature = "std"))]
pub use shared::SerializedBus;

#[cfg(feature = "async")]
pub use async_sensor::read_measurement_async;
