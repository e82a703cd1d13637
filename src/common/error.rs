// src/common/error.rs

use core::fmt;

/// Sensor-side fault condition decoded from the status register during
/// initialization, in the order the hardware reports them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SensorFault {
    /// The serial communication interface received an invalid command (ICCERR).
    IccError,
    /// Supply voltage out of range (ORVS).
    OverVoltage,
    /// Die temperature out of range (ORTMP).
    OverTemperature,
    /// The sensor has not asserted its ready flag after reset.
    NotReady,
}

impl fmt::Display for SensorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorFault::IccError => write!(f, "invalid command communication error"),
            SensorFault::OverVoltage => write!(f, "supply voltage out of range"),
            SensorFault::OverTemperature => write!(f, "temperature out of range"),
            SensorFault::NotReady => write!(f, "sensor not ready"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PasGasError<E = ()>
where
    E: core::fmt::Debug, // Debug is all we can require of a HAL error in no_std
{
    /// Underlying transport error from the HAL implementation.
    #[error("transport error: {0:?}")]
    Io(E),

    /// Protocol-level communication failure: missing/incorrect serial
    /// acknowledgement, a non-hex response digit, or a scratch-pad
    /// read-back mismatch during the init self-test.
    #[error("communication error")]
    Comm,

    /// A result was requested before the sensor's data-ready flag was set.
    #[error("measurement result not ready")]
    NotReady,

    /// The sensor reported a fault condition during initialization.
    #[error("sensor fault: {0}")]
    Fault(SensorFault),

    /// Caller supplied a measurement rate outside the variant's supported
    /// range. Surfaced before any transport traffic is generated.
    #[error("measurement rate {0} s outside supported range")]
    InvalidMeasurementRate(u16),
}

// Allow mapping from the underlying HAL error so `?` works on raw
// transport results inside the codecs.
impl<E: core::fmt::Debug> From<E> for PasGasError<E> {
    fn from(e: E) -> Self {
        PasGasError::Io(e)
    }
}
