// src/sensor/shared.rs

use super::sequencer;
use crate::common::{
    address::Bh1750Addr,
    error::Bh1750Error,
    hal_traits::{Bh1750Bus, Bh1750Timer},
};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A bus shared between threads, locked for whole read sequences.
///
/// Per-transfer locking is not enough for the BH1750: another caller's
/// command landing during the settle wait corrupts the conversion. Every
/// method here holds the lock from the reset command through the final read.
#[derive(Debug)]
pub struct SerializedBus<B> {
    bus: Mutex<B>,
}

impl<B: Bh1750Bus> SerializedBus<B> {
    pub fn new(bus: B) -> Self {
        SerializedBus { bus: Mutex::new(bus) }
    }

    pub fn into_inner(self) -> B {
        self.bus.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the one-shot read sequence with exclusive access to the bus.
    pub fn read_measurement<T>(&self, timer: &mut T, address: Bh1750Addr) -> Result<u16, Bh1750Error<B::Error>>
    where
        T: Bh1750Timer + ?Sized,
    {
        let mut bus = self.lock();
        sequencer::read_measurement(&mut *bus, timer, address)
    }

    /// Runs `f` with exclusive access to the bus.
    pub fn with_bus<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        let mut bus = self.lock();
        f(&mut bus)
    }

    // A panic mid-sequence leaves the device mid-conversion at worst; the next
    // sequence starts with a reset, so the poisoned guard is still usable.
    fn lock(&self) -> MutexGuard<'_, B> {
        self.bus.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
