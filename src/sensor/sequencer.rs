// src/sensor/sequencer.rs

use crate::common::{
    address::Bh1750Addr,
    command::{Command, Resolution},
    error::Bh1750Error,
    hal_traits::{Bh1750Bus, Bh1750Timer},
    measurement::RawReading,
    timing,
};
use core::fmt::Debug;
use core::time::Duration;
use log::{debug, trace, warn};

/// Takes one high-resolution reading from the sensor at `address`.
///
/// Issues, in order: a soft reset, the one-time high-resolution start command,
/// a blocking 180 ms wait and a two-byte read. The two bytes are decoded most
/// significant first. Nothing is retried; the first failing step ends the call.
///
/// The bus is not locked. The caller must keep every other transaction off
/// `bus` until this returns, including during the settle wait: a command
/// slipped in after the start command corrupts the measurement. Wrap a shared
/// bus in `SerializedBus` (feature `std`) or an equivalent mutex around the
/// whole call.
pub fn read_measurement<B, T>(
    bus: &mut B,
    timer: &mut T,
    address: Bh1750Addr,
) -> Result<u16, Bh1750Error<B::Error>>
where
    B: Bh1750Bus + ?Sized,
    T: Bh1750Timer + ?Sized,
{
    start_one_time(bus, address, Resolution::High)?;
    finish_one_time(bus, timer, address, Resolution::High).map(|r| r.raw())
}

/// Reset, then start a one-time conversion at `resolution`.
fn start_one_time<B>(bus: &mut B, address: Bh1750Addr, resolution: Resolution) -> Result<(), Bh1750Error<B::Error>>
where
    B: Bh1750Bus + ?Sized,
{
    write_command(bus, address, Command::Reset)?;
    write_command(bus, address, Command::OneTime(resolution))
}

/// Wait out the conversion started by `start_one_time`, then read it.
fn finish_one_time<B, T>(
    bus: &mut B,
    timer: &mut T,
    address: Bh1750Addr,
    resolution: Resolution,
) -> Result<RawReading, Bh1750Error<B::Error>>
where
    B: Bh1750Bus + ?Sized,
    T: Bh1750Timer + ?Sized,
{
    settle(timer, timing::settle_time(resolution));
    read_raw(bus, address, resolution)
}

fn write_command<B>(bus: &mut B, address: Bh1750Addr, command: Command) -> Result<(), Bh1750Error<B::Error>>
where
    B: Bh1750Bus + ?Sized,
{
    trace_command(address, command);
    bus.write(address.as_u8(), &[command.opcode()])
        .map_err(|error| command_failed(address, command, error))
}

fn read_raw<B>(bus: &mut B, address: Bh1750Addr, resolution: Resolution) -> Result<RawReading, Bh1750Error<B::Error>>
where
    B: Bh1750Bus + ?Sized,
{
    let mut buf = [0u8; 2];
    bus.read(address.as_u8(), &mut buf).map_err(|e| read_failed(address, e))?;
    Ok(decode_reading(address, buf, resolution))
}

fn settle<T: Bh1750Timer + ?Sized>(timer: &mut T, duration: Duration) {
    trace!("bh1750: settle {} ms", duration.as_millis());
    timer.delay_ms(duration.as_millis() as u32);
}

// --- Step logging and decode, shared with the async sequence ---

pub(crate) fn trace_command(address: Bh1750Addr, command: Command) {
    trace!("bh1750 {}: write {}", address, command);
}

pub(crate) fn command_failed<E: Debug>(address: Bh1750Addr, command: Command, error: E) -> Bh1750Error<E> {
    warn!("bh1750 {}: write {} failed: {:?}", address, command, error);
    Bh1750Error::CommandWriteFailed { command, error }
}

pub(crate) fn read_failed<E: Debug>(address: Bh1750Addr, error: E) -> Bh1750Error<E> {
    warn!("bh1750 {}: read failed: {:?}", address, error);
    Bh1750Error::ReadFailed(error)
}

pub(crate) fn decode_reading(address: Bh1750Addr, buf: [u8; 2], resolution: Resolution) -> RawReading {
    let reading = RawReading::from_be_bytes(buf, resolution);
    debug!("bh1750 {}: raw {} {:?} ({})", address, reading.raw(), resolution, reading);
    reading
}

/// Blocking BH1750 driver over a bus and a delay provider.
///
/// `B` and `T` may be borrowed (`&mut bus`) to leave ownership with the caller.
#[derive(Debug)]
pub struct SyncSensor<B, T> {
    bus: B,
    timer: T,
    address: Bh1750Addr,
    continuous: Option<Resolution>,
}

impl<B, T> SyncSensor<B, T>
where
    B: Bh1750Bus,
    T: Bh1750Timer,
{
    pub fn new(bus: B, timer: T, address: Bh1750Addr) -> Self {
        SyncSensor {
            bus,
            timer,
            address,
            continuous: None,
        }
    }

    /// Gives back the bus and timer.
    pub fn release(self) -> (B, T) {
        (self.bus, self.timer)
    }

    pub fn address(&self) -> Bh1750Addr {
        self.address
    }

    /// Resolution of the running continuous measurement, if any.
    pub fn continuous_resolution(&self) -> Option<Resolution> {
        self.continuous
    }

    pub fn power_on(&mut self) -> Result<(), Bh1750Error<B::Error>> {
        write_command(&mut self.bus, self.address, Command::PowerOn)
    }

    /// Powers the device down, ending any continuous measurement.
    pub fn power_down(&mut self) -> Result<(), Bh1750Error<B::Error>> {
        write_command(&mut self.bus, self.address, Command::PowerDown)?;
        self.continuous = None;
        Ok(())
    }

    /// Clears the data register. The device ignores it while powered down.
    pub fn reset(&mut self) -> Result<(), Bh1750Error<B::Error>> {
        write_command(&mut self.bus, self.address, Command::Reset)
    }

    /// See [`read_measurement`].
    pub fn read_measurement(&mut self) -> Result<u16, Bh1750Error<B::Error>> {
        self.read_one_time(Resolution::High).map(|r| r.raw())
    }

    /// One-time reading at `resolution`. The device powers down afterwards.
    ///
    /// A continuous measurement stays recorded as active unless the one-time
    /// command was accepted.
    pub fn read_one_time(&mut self, resolution: Resolution) -> Result<RawReading, Bh1750Error<B::Error>> {
        start_one_time(&mut self.bus, self.address, resolution)?;
        self.continuous = None;
        finish_one_time(&mut self.bus, &mut self.timer, self.address, resolution)
    }

    /// Starts measuring continuously and waits for the first conversion.
    ///
    /// The previous mode stays recorded unless the continuous command was
    /// accepted.
    pub fn start_continuous(&mut self, resolution: Resolution) -> Result<(), Bh1750Error<B::Error>> {
        write_command(&mut self.bus, self.address, Command::PowerOn)?;
        write_command(&mut self.bus, self.address, Command::Reset)?;
        write_command(&mut self.bus, self.address, Command::Continuous(resolution))?;
        self.continuous = Some(resolution);
        settle(&mut self.timer, timing::settle_time(resolution));
        debug!("bh1750 {}: continuous {:?} started", self.address, resolution);
        Ok(())
    }

    /// Latest continuous-mode conversion.
    pub fn read_continuous(&mut self) -> Result<RawReading, Bh1750Error<B::Error>> {
        let resolution = self.continuous.ok_or(Bh1750Error::NotMeasuring)?;
        read_raw(&mut self.bus, self.address, resolution)
    }
}
