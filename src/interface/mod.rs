// src/interface/mod.rs

// --- Declare the transport codec modules ---
pub mod i2c;
pub mod uart;

use core::fmt::Debug;

use crate::common::error::PasGasError;

// Re-export the two codecs
pub use i2c::I2cInterface;
pub use uart::UartInterface;

/// Register-level access over one of the two physical transports.
///
/// The codec is chosen once, when the device handle is constructed, by
/// picking the implementing type; there is no runtime transport switch.
/// Implementations encode a logical "read/write `data.len()` bytes
/// starting at `reg`" into the transport's wire format.
pub trait RegisterAccess {
    /// Error type of the underlying platform transport.
    type Error: Debug;

    /// Reads `data.len()` consecutive registers starting at `reg`.
    fn read_registers(
        &mut self,
        reg: u8,
        data: &mut [u8],
    ) -> Result<(), PasGasError<Self::Error>>;

    /// Writes `data` to consecutive registers starting at `reg`.
    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), PasGasError<Self::Error>>;
}
