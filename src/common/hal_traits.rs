// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the blocking delay used to wait out a conversion.
///
/// Note: `HalDelay` adapts any `embedded_hal::delay::DelayNs` to this trait
/// when the `impl-native` feature is enabled.
pub trait Bh1750Timer {
    /// Block for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for blocking two-wire bus transfers.
///
/// Each call is one complete bus transaction (start, address, data, stop).
/// Implementations do not arbitrate between callers; whoever owns the handle
/// must keep other transactions off the bus for the duration of a sequence.
pub trait Bh1750Bus {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// Writes `bytes` to the device at 7-bit `address`.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Fills `buffer` with bytes read from the device at 7-bit `address`.
    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<B: Bh1750Bus + ?Sized> Bh1750Bus for &mut B {
    type Error = B::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        B::write(self, address, bytes)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        B::read(self, address, buffer)
    }
}

impl<T: Bh1750Timer + ?Sized> Bh1750Timer for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}

/// Adapts an `embedded_hal::i2c::I2c` bus.
///
/// Requires `embedded-hal` v1.0 traits.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct HalBus<I>(pub I);

#[cfg(feature = "impl-native")]
impl<I> HalBus<I> {
    pub fn new(i2c: I) -> Self {
        HalBus(i2c)
    }

    pub fn into_inner(self) -> I {
        self.0
    }
}

#[cfg(feature = "impl-native")]
impl<I: embedded_hal::i2c::I2c> Bh1750Bus for HalBus<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, bytes)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buffer)
    }
}

/// Adapts an `embedded_hal::delay::DelayNs` provider.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct HalDelay<D>(pub D);

#[cfg(feature = "impl-native")]
impl<D> HalDelay<D> {
    pub fn new(delay: D) -> Self {
        HalDelay(delay)
    }

    pub fn into_inner(self) -> D {
        self.0
    }
}

#[cfg(feature = "impl-native")]
impl<D: embedded_hal::delay::DelayNs> Bh1750Timer for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms)
    }
}

#[cfg(all(test, feature = "impl-native"))]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    #[derive(Default)]
    struct FakeI2c {
        writes: Vec<(u8, u8), 8>,
        reads: usize,
    }

    impl ErrorType for FakeI2c {
        type Error = ErrorKind;
    }

    impl embedded_hal::i2c::I2c for FakeI2c {
        fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        for b in bytes.iter() {
                            self.writes.push((address, *b)).map_err(|_| ErrorKind::Overrun)?;
                        }
                    }
                    Operation::Read(buf) => {
                        self.reads += 1;
                        buf.copy_from_slice(&[0xAB, 0xCD][..buf.len()]);
                    }
                }
            }
            Ok(())
        }
    }

    struct CountingDelay(u32);

    impl embedded_hal::delay::DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0 += ns;
        }
        fn delay_ms(&mut self, ms: u32) {
            self.0 += ms * 1_000_000;
        }
    }

    #[test]
    fn test_hal_bus_forwards_transfers() {
        let mut bus = HalBus::new(FakeI2c::default());
        bus.write(0x23, &[0x07]).unwrap();
        let mut buf = [0u8; 2];
        bus.read(0x23, &mut buf).unwrap();
        assert_eq!(buf, [0xAB, 0xCD]);
        let inner = bus.into_inner();
        assert_eq!(&inner.writes[..], &[(0x23, 0x07)]);
        assert_eq!(inner.reads, 1);
    }

    #[test]
    fn test_hal_delay_forwards_ms() {
        let mut delay = HalDelay::new(CountingDelay(0));
        delay.delay_ms(180);
        delay.delay_ms(24);
        assert_eq!(delay.into_inner().0, 204_000_000);
    }
}
