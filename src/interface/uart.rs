// src/interface/uart.rs

use core::fmt::Debug;

use crate::common::error::PasGasError;
use crate::common::hal_traits::PasGasSerial;
use crate::common::hex::{decode_hex_digit, encode_hex_byte};
use crate::common::regs;
use crate::common::types::Command;

use super::RegisterAccess;

/// First byte of a successful write response.
const ACK: u8 = 0x06;

/// Request line for a single-register read: `r,HH\n`.
const READ_REQUEST_LEN: usize = 5;
/// Request line for a single-register write: `w,HH,VV\n`.
const WRITE_REQUEST_LEN: usize = 8;
/// Response to a read request: two hex digits plus terminator.
const READ_RESPONSE_LEN: usize = 3;
/// Response to a write request: ACK plus terminator.
const WRITE_RESPONSE_LEN: usize = 2;

/// Line-oriented ASCII-hex codec.
///
/// The serial protocol addresses one register per line, so multi-byte
/// reads and writes are performed one register at a time with the
/// address incremented between transactions. The whole operation fails
/// at the first failing transaction; the caller must not assume partial
/// completion.
#[derive(Debug)]
pub struct UartInterface<S> {
    serial: S,
}

impl<S> UartInterface<S>
where
    S: PasGasSerial,
{
    pub fn new(serial: S) -> Self {
        UartInterface { serial }
    }

    /// Releases the underlying serial port.
    pub fn release(self) -> S {
        self.serial
    }

    fn read_one(&mut self, reg: u8) -> Result<u8, PasGasError<S::Error>> {
        let [hi, lo] = encode_hex_byte(reg);
        let request: [u8; READ_REQUEST_LEN] = [b'r', b',', hi, lo, b'\n'];
        self.serial.write(&request)?;

        let mut response = [0u8; READ_RESPONSE_LEN];
        self.serial.read(&mut response)?;

        match (decode_hex_digit(response[0]), decode_hex_digit(response[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(PasGasError::Comm),
        }
    }

    fn write_one(&mut self, reg: u8, value: u8) -> Result<(), PasGasError<S::Error>> {
        let [reg_hi, reg_lo] = encode_hex_byte(reg);
        let [val_hi, val_lo] = encode_hex_byte(value);
        let request: [u8; WRITE_REQUEST_LEN] =
            [b'w', b',', reg_hi, reg_lo, b',', val_hi, val_lo, b'\n'];
        self.serial.write(&request)?;

        let mut response = [0u8; WRITE_RESPONSE_LEN];
        let read_result = self.serial.read(&mut response);

        // A soft reset may take effect before the sensor replies, so the
        // response to that one write is ignored entirely.
        if reg == regs::SENS_RST && value == Command::SoftReset.value() {
            return Ok(());
        }

        read_result?;
        if response[0] == ACK {
            Ok(())
        } else {
            Err(PasGasError::Comm)
        }
    }
}

impl<S> RegisterAccess for UartInterface<S>
where
    S: PasGasSerial,
    S::Error: Debug,
{
    type Error = S::Error;

    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), PasGasError<S::Error>> {
        for (offset, byte) in data.iter_mut().enumerate() {
            *byte = self.read_one(reg.wrapping_add(offset as u8))?;
        }
        Ok(())
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), PasGasError<S::Error>> {
        for (offset, byte) in data.iter().enumerate() {
            self.write_one(reg.wrapping_add(offset as u8), *byte)?;
        }
        Ok(())
    }
}
