// src/device/mock.rs
//
// Shared test doubles for the device-layer tests: a register-backed
// transport with transaction logging and scripted responses, and a timer
// that records every requested delay.

use std::collections::VecDeque;
use std::vec::Vec;

use crate::common::error::PasGasError;
use crate::common::hal_traits::PasGasTimer;
use crate::interface::RegisterAccess;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct MockBusError;

/// One logged transport transaction.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Access {
    Read { reg: u8, len: usize },
    Write { reg: u8, data: Vec<u8> },
}

/// Register-file transport double.
///
/// Writes land in `regs` and reads come back out of it, so sequences that
/// read-modify-write behave like a real device. Single-byte reads can be
/// overridden per call through `read_script`, which lets a test feed a
/// register different values (or transport failures) on successive polls.
pub(crate) struct MockRegisterInterface {
    pub regs: [u8; 0x70],
    pub log: Vec<Access>,
    pub read_script: VecDeque<(u8, Result<u8, MockBusError>)>,
    pub fail_writes_to: Vec<u8>,
}

impl Default for MockRegisterInterface {
    fn default() -> Self {
        MockRegisterInterface {
            regs: [0; 0x70],
            log: Vec::new(),
            read_script: VecDeque::new(),
            fail_writes_to: Vec::new(),
        }
    }
}

impl RegisterAccess for MockRegisterInterface {
    type Error = MockBusError;

    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), PasGasError<MockBusError>> {
        self.log.push(Access::Read {
            reg,
            len: data.len(),
        });

        if data.len() == 1 {
            if let Some((scripted_reg, _)) = self.read_script.front() {
                if *scripted_reg == reg {
                    let (_, result) = self.read_script.pop_front().unwrap();
                    data[0] = result?;
                    return Ok(());
                }
            }
        }

        for (offset, byte) in data.iter_mut().enumerate() {
            *byte = self.regs[reg as usize + offset];
        }
        Ok(())
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), PasGasError<MockBusError>> {
        self.log.push(Access::Write {
            reg,
            data: data.to_vec(),
        });

        if self.fail_writes_to.contains(&reg) {
            return Err(PasGasError::Io(MockBusError));
        }

        for (offset, byte) in data.iter().enumerate() {
            self.regs[reg as usize + offset] = *byte;
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockTimer {
    pub delays: Vec<u32>,
}

impl PasGasTimer for MockTimer {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}
