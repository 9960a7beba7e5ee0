// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod error;
pub mod hal_traits;
pub mod measurement;
pub mod timing;

// --- Re-export key types/traits for easier access ---

// From address.rs
pub use address::Bh1750Addr;

// From command.rs
pub use command::{Command, Resolution};

// From error.rs
pub use error::Bh1750Error;

// From hal_traits.rs
pub use hal_traits::{Bh1750Bus, Bh1750Timer}; // Core sync traits

// From measurement.rs
pub use measurement::RawReading;

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// --- Feature-gated re-exports ---

// Native HAL adapters (from hal_traits.rs)
#[cfg(feature = "impl-native")]
pub use hal_traits::{HalBus, HalDelay};
