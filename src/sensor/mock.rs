// src/sensor/mock.rs

use crate::common::hal_traits::{Bh1750Bus, Bh1750Timer};
use core::cell::RefCell;
use heapless::Vec;

/// One observed bus or timer operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    /// Single-byte write: (address, opcode).
    Write(u8, u8),
    /// Blocking delay in milliseconds.
    Sleep(u32),
    /// Read transaction: (address, length).
    Read(u8, usize),
}

pub type Transcript = RefCell<Vec<Event, 32>>;

pub fn transcript() -> Transcript {
    RefCell::new(Vec::new())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockBusError(pub u8);

/// Bus that records every transfer and serves a fixed two-byte reading.
pub struct MockBus<'a> {
    log: &'a Transcript,
    pub read_data: [u8; 2],
    pub read_error: Option<MockBusError>,
    /// Fail the write carrying this opcode.
    pub fail_write: Option<(u8, MockBusError)>,
}

impl<'a> MockBus<'a> {
    pub fn new(log: &'a Transcript) -> Self {
        MockBus {
            log,
            read_data: [0, 0],
            read_error: None,
            fail_write: None,
        }
    }

    pub fn with_reading(log: &'a Transcript, read_data: [u8; 2]) -> Self {
        MockBus {
            read_data,
            ..Self::new(log)
        }
    }

    fn record(&self, event: Event) {
        self.log.borrow_mut().push(event).expect("transcript full");
    }
}

impl Bh1750Bus for MockBus<'_> {
    type Error = MockBusError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        assert_eq!(bytes.len(), 1, "BH1750 commands are a single byte");
        self.record(Event::Write(address, bytes[0]));
        match self.fail_write {
            Some((opcode, e)) if opcode == bytes[0] => Err(e),
            _ => Ok(()),
        }
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.record(Event::Read(address, buffer.len()));
        if let Some(e) = self.read_error {
            return Err(e);
        }
        buffer.copy_from_slice(&self.read_data[..buffer.len()]);
        Ok(())
    }
}

/// Timer that records delays instead of sleeping.
pub struct MockTimer<'a> {
    log: &'a Transcript,
}

impl<'a> MockTimer<'a> {
    pub fn new(log: &'a Transcript) -> Self {
        MockTimer { log }
    }
}

impl Bh1750Timer for MockTimer<'_> {
    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Sleep(ms)).expect("transcript full");
    }
}
