// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the binary register-addressed bus (I2C-style) the
/// sensor exposes alongside its serial interface.
///
/// A single call covers both directions of one bus transaction: `tx` is
/// clocked out to `dev_addr` first, then exactly `rx.len()` bytes are
/// clocked back in. An empty `rx` means a pure write.
pub trait PasGasBus {
    /// Associated error type for bus-level failures.
    type Error: Debug;

    /// Performs one write(-then-read) transaction with the device.
    fn transfer(&mut self, dev_addr: u8, tx: &[u8], rx: &mut [u8]) -> Result<(), Self::Error>;
}

/// Abstraction for the line-oriented ASCII serial transport.
///
/// Both operations transfer exact byte counts: the sensor's protocol has
/// fixed-length request and response lines, so a short read or write is a
/// transport failure, not a partial success.
pub trait PasGasSerial {
    /// Associated error type for serial-level failures.
    type Error: Debug;

    /// Writes all of `data` to the serial interface.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Reads exactly `data.len()` bytes from the serial interface.
    fn read(&mut self, data: &mut [u8]) -> Result<(), Self::Error>;
}

/// Blocking delay used for the inter-transaction settle time and the
/// post-reset boot wait.
pub trait PasGasTimer {
    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

#[cfg(feature = "embedded-hal")]
impl<T> PasGasBus for T
where
    T: embedded_hal::i2c::I2c,
{
    type Error = T::Error;

    fn transfer(&mut self, dev_addr: u8, tx: &[u8], rx: &mut [u8]) -> Result<(), Self::Error> {
        if rx.is_empty() {
            embedded_hal::i2c::I2c::write(self, dev_addr, tx)
        } else {
            embedded_hal::i2c::I2c::write_read(self, dev_addr, tx, rx)
        }
    }
}

#[cfg(feature = "embedded-hal")]
impl<T> PasGasTimer for T
where
    T: embedded_hal::delay::DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        embedded_hal::delay::DelayNs::delay_ms(self, ms);
    }
}
