// src/interface/i2c.rs

use arrayvec::ArrayVec;
use core::fmt::Debug;

use crate::common::error::PasGasError;
use crate::common::hal_traits::PasGasBus;
use crate::common::regs;

use super::RegisterAccess;

/// Register address byte plus up to 16 data bytes per write transaction.
const WRITE_FRAME_CAPACITY: usize = 17;

/// Binary register-addressed codec.
///
/// A write is a single transaction carrying `[reg][data...]`; a read
/// transmits `[reg]` and then clocks the requested bytes back. There is
/// no framing or acknowledgement beyond what the bus itself provides.
#[derive(Debug)]
pub struct I2cInterface<B> {
    bus: B,
}

impl<B> I2cInterface<B>
where
    B: PasGasBus,
{
    pub fn new(bus: B) -> Self {
        I2cInterface { bus }
    }

    /// Releases the underlying bus.
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B> RegisterAccess for I2cInterface<B>
where
    B: PasGasBus,
    B::Error: Debug,
{
    type Error = B::Error;

    fn read_registers(&mut self, reg: u8, data: &mut [u8]) -> Result<(), PasGasError<B::Error>> {
        self.bus.transfer(regs::I2C_ADDR, &[reg], data)?;
        Ok(())
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), PasGasError<B::Error>> {
        // Caller precondition, mirrors the sensor's 16-byte write limit.
        assert!(data.len() < WRITE_FRAME_CAPACITY);

        let mut frame = ArrayVec::<u8, WRITE_FRAME_CAPACITY>::new();
        frame.push(reg);
        frame.extend(data.iter().copied());

        self.bus.transfer(regs::I2C_ADDR, &frame, &mut [])?;
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct MockBusError;

    #[derive(Default)]
    struct MockBus {
        // (device address, tx bytes, rx length) per transaction
        transactions: std::vec::Vec<(u8, heapless::Vec<u8, 32>, usize)>,
        read_data: heapless::Vec<u8, 32>,
        fail: bool,
    }

    impl PasGasBus for MockBus {
        type Error = MockBusError;

        fn transfer(&mut self, dev_addr: u8, tx: &[u8], rx: &mut [u8]) -> Result<(), MockBusError> {
            self.transactions.push((
                dev_addr,
                heapless::Vec::from_slice(tx).unwrap(),
                rx.len(),
            ));
            if self.fail {
                return Err(MockBusError);
            }
            for (dst, src) in rx.iter_mut().zip(self.read_data.iter()) {
                *dst = *src;
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_prepends_register_address() {
        let mut iface = I2cInterface::new(MockBus::default());
        iface.write_registers(regs::MEAS_RATE_H, &[0x00, 0x3C]).unwrap();

        let (addr, tx, rx_len) = &iface.bus.transactions[0];
        assert_eq!(*addr, regs::I2C_ADDR);
        assert_eq!(tx.as_slice(), &[regs::MEAS_RATE_H, 0x00, 0x3C]);
        assert_eq!(*rx_len, 0);
    }

    #[test]
    fn test_read_transmits_register_then_receives() {
        let mut bus = MockBus::default();
        bus.read_data = heapless::Vec::from_slice(&[0x01, 0xF4]).unwrap();
        let mut iface = I2cInterface::new(bus);

        let mut data = [0u8; 2];
        iface.read_registers(regs::GASPPM_H, &mut data).unwrap();

        assert_eq!(data, [0x01, 0xF4]);
        let (addr, tx, rx_len) = &iface.bus.transactions[0];
        assert_eq!(*addr, regs::I2C_ADDR);
        assert_eq!(tx.as_slice(), &[regs::GASPPM_H]);
        assert_eq!(*rx_len, 2);
    }

    #[test]
    fn test_bus_failure_maps_to_io() {
        let mut iface = I2cInterface::new(MockBus {
            fail: true,
            ..Default::default()
        });
        let mut data = [0u8; 1];
        assert!(matches!(
            iface.read_registers(regs::SENS_STS, &mut data),
            Err(PasGasError::Io(MockBusError))
        ));
        assert!(matches!(
            iface.write_registers(regs::SCRATCH_PAD, &[0xA5]),
            Err(PasGasError::Io(MockBusError))
        ));
    }
}
