// src/lib.rs

#![cfg_attr(not(test), no_std)]

pub mod common;
pub mod device;
pub mod interface;

// Re-export key types for convenience
pub use common::PasGasError;
pub use common::{PasGasBus, PasGasSerial, PasGasTimer};
pub use device::{DeviceVariant, PasGas};
pub use interface::{I2cInterface, RegisterAccess, UartInterface};
