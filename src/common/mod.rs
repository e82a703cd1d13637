// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod extended;
pub mod hal_traits;
pub mod hex;
pub mod regs;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From error.rs
pub use error::{PasGasError, SensorFault};

// From hal_traits.rs
pub use hal_traits::{PasGasBus, PasGasSerial, PasGasTimer};

// From hex.rs
pub use hex::{decode_hex_digit, encode_hex_byte, join_u16, split_u16};

// From types.rs
pub use types::{
    BocConfig, Command, InterruptConfig, InterruptFunction, MeasurementConfig, MeasurementStatus,
    MeasurementStatusClear, OpMode, ProductId, PwmMode, SensorStatus, SensorStatusClear,
};

// From extended.rs
pub use extended::{
    AbocCycle, AlarmConfig, DenoiseConfig, GasConfig, GasSelection, HumidityControl, SelfTest,
    SelfTestClear,
};

// Register address constants stay behind `common::regs::*`.
