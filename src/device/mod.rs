// src/device/mod.rs
//
// Device handle and the sequences built on top of the register codecs:
// initialization, measurement control, and the compensation machinery in
// the submodules.

mod compensation;
mod extended;
pub mod variant;

#[cfg(test)]
pub(crate) mod mock;

use crate::common::error::{PasGasError, SensorFault};
use crate::common::hal_traits::PasGasTimer;
use crate::common::hex::{join_u16, split_u16};
use crate::common::regs;
use crate::common::types::{
    BocConfig, Command, InterruptConfig, MeasurementConfig, MeasurementStatus,
    MeasurementStatusClear, OpMode, ProductId, SensorStatus, SensorStatusClear,
};
use crate::interface::RegisterAccess;

pub use variant::DeviceVariant;

/// Settle time after every register transaction, in milliseconds.
const COMM_DELAY_MS: u32 = 5;
/// Sentinel written to the scratch pad for the init communication test.
const COMM_TEST_VAL: u8 = 0xA5;
/// Boot time after a soft reset, in milliseconds.
const SOFT_RESET_DELAY_MS: u32 = 2000;
/// Maximum measurement period in seconds, all families.
pub const MEAS_RATE_MAX: u16 = 4095;

/// Handle to one sensor over one transport.
///
/// `IF` is the transport codec ([`crate::interface::I2cInterface`] or
/// [`crate::interface::UartInterface`]); the choice is fixed at
/// construction. All register traffic goes through [`Self::set_reg`] /
/// [`Self::get_reg`], which pace transactions with the settle delay the
/// sensor needs between accesses.
pub struct PasGas<IF, T> {
    interface: IF,
    timer: T,
    variant: DeviceVariant,
}

impl<IF, T> PasGas<IF, T>
where
    IF: RegisterAccess,
    T: PasGasTimer,
{
    pub fn new(interface: IF, timer: T, variant: DeviceVariant) -> Self {
        PasGas {
            interface,
            timer,
            variant,
        }
    }

    pub fn variant(&self) -> DeviceVariant {
        self.variant
    }

    /// Releases the transport codec and the timer.
    pub fn release(self) -> (IF, T) {
        (self.interface, self.timer)
    }

    /// Writes registers, then waits out the settle delay.
    ///
    /// The delay is applied whether or not the transaction succeeded: a
    /// failed transaction may still have disturbed the sensor, and the
    /// next access must not follow too soon.
    pub(crate) fn set_reg(&mut self, reg: u8, data: &[u8]) -> Result<(), PasGasError<IF::Error>> {
        let result = self.interface.write_registers(reg, data);
        self.timer.delay_ms(COMM_DELAY_MS);
        result
    }

    /// Reads registers, then waits out the settle delay. Same pacing rule
    /// as [`Self::set_reg`].
    pub(crate) fn get_reg(
        &mut self,
        reg: u8,
        data: &mut [u8],
    ) -> Result<(), PasGasError<IF::Error>> {
        let result = self.interface.read_registers(reg, data);
        self.timer.delay_ms(COMM_DELAY_MS);
        result
    }

    pub(crate) fn read_byte(&mut self, reg: u8) -> Result<u8, PasGasError<IF::Error>> {
        let mut data = [0u8; 1];
        self.get_reg(reg, &mut data)?;
        Ok(data[0])
    }

    pub(crate) fn read_u16(&mut self, reg: u8) -> Result<u16, PasGasError<IF::Error>> {
        let mut data = [0u8; 2];
        self.get_reg(reg, &mut data)?;
        Ok(join_u16(data))
    }

    pub(crate) fn write_u16(&mut self, reg: u8, value: u16) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(reg, &split_u16(value))
    }

    /// Brings the sensor to a known-good state.
    ///
    /// Verifies the transport with a scratch-pad write/read-back, issues a
    /// soft reset, waits out the boot time, and checks the status
    /// register. A scratch-pad mismatch aborts before the reset is sent;
    /// faults latched in the status register are reported in the order
    /// the hardware prioritizes them.
    pub fn init(&mut self) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::SCRATCH_PAD, &[COMM_TEST_VAL])?;
        if self.read_byte(regs::SCRATCH_PAD)? != COMM_TEST_VAL {
            return Err(PasGasError::Comm);
        }

        let reset = self.set_reg(regs::SENS_RST, &[Command::SoftReset.value()]);
        // The sensor is unresponsive while rebooting regardless of how
        // the command round-trip went.
        self.timer.delay_ms(SOFT_RESET_DELAY_MS);
        reset?;

        let status = self.get_status()?;
        if status.icc_error {
            Err(PasGasError::Fault(SensorFault::IccError))
        } else if status.over_voltage {
            Err(PasGasError::Fault(SensorFault::OverVoltage))
        } else if status.over_temperature {
            Err(PasGasError::Fault(SensorFault::OverTemperature))
        } else if !status.ready {
            Err(PasGasError::Fault(SensorFault::NotReady))
        } else {
            Ok(())
        }
    }

    pub fn get_id(&mut self) -> Result<ProductId, PasGasError<IF::Error>> {
        Ok(ProductId::from_byte(self.read_byte(regs::PROD_ID)?))
    }

    pub fn get_status(&mut self) -> Result<SensorStatus, PasGasError<IF::Error>> {
        Ok(SensorStatus::from_byte(self.read_byte(regs::SENS_STS)?))
    }

    /// Clears the selected latched fault flags in the status register.
    pub fn clear_status(&mut self, clear: SensorStatusClear) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::SENS_STS, &[clear.to_byte()])
    }

    pub fn get_interrupt_config(&mut self) -> Result<InterruptConfig, PasGasError<IF::Error>> {
        Ok(InterruptConfig::from_byte(self.read_byte(regs::INT_CFG)?))
    }

    pub fn set_interrupt_config(
        &mut self,
        config: InterruptConfig,
    ) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::INT_CFG, &[config.to_byte()])
    }

    pub fn get_measurement_config(&mut self) -> Result<MeasurementConfig, PasGasError<IF::Error>> {
        Ok(MeasurementConfig::from_byte(self.read_byte(regs::MEAS_CFG)?))
    }

    pub fn set_measurement_config(
        &mut self,
        config: MeasurementConfig,
    ) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::MEAS_CFG, &[config.to_byte()])
    }

    /// Returns the latest gas concentration in ppm.
    ///
    /// Checks the data-ready flag first and returns
    /// [`PasGasError::NotReady`] without touching the result registers
    /// when no fresh value is available; reading them would return stale
    /// data and clear the flag.
    pub fn get_result(&mut self) -> Result<u16, PasGasError<IF::Error>> {
        let status = self.get_measurement_status()?;
        if !status.data_ready {
            return Err(PasGasError::NotReady);
        }
        self.read_u16(regs::GASPPM_H)
    }

    /// Sets the measurement period in seconds for continuous mode.
    ///
    /// The range depends on the variant; an out-of-range rate is rejected
    /// before any transport traffic is generated.
    pub fn set_measurement_rate(&mut self, rate: u16) -> Result<(), PasGasError<IF::Error>> {
        self.check_rate(rate)?;
        self.write_u16(regs::MEAS_RATE_H, rate)
    }

    pub fn get_measurement_rate(&mut self) -> Result<u16, PasGasError<IF::Error>> {
        self.read_u16(regs::MEAS_RATE_H)
    }

    pub fn get_measurement_status(&mut self) -> Result<MeasurementStatus, PasGasError<IF::Error>> {
        Ok(MeasurementStatus::from_byte(self.read_byte(regs::MEAS_STS)?))
    }

    /// Clears the latched alarm/interrupt flags.
    pub fn clear_measurement_status(
        &mut self,
        clear: MeasurementStatusClear,
    ) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::MEAS_STS, &[clear.to_byte()])
    }

    /// Sets the concentration alarm threshold in ppm.
    pub fn set_alarm_threshold(&mut self, ppm: u16) -> Result<(), PasGasError<IF::Error>> {
        self.write_u16(regs::ALARM_TH_H, ppm)
    }

    pub fn get_alarm_threshold(&mut self) -> Result<u16, PasGasError<IF::Error>> {
        self.read_u16(regs::ALARM_TH_H)
    }

    /// Sets the ambient pressure reference in hPa.
    pub fn set_pressure_compensation(&mut self, hpa: u16) -> Result<(), PasGasError<IF::Error>> {
        self.write_u16(regs::PRESS_REF_H, hpa)
    }

    pub fn get_pressure_compensation(&mut self) -> Result<u16, PasGasError<IF::Error>> {
        self.read_u16(regs::PRESS_REF_H)
    }

    /// Sets the known reference concentration in ppm used by forced
    /// compensation.
    pub fn set_offset_compensation(&mut self, ppm: u16) -> Result<(), PasGasError<IF::Error>> {
        self.write_u16(regs::CALIB_REF_H, ppm)
    }

    pub fn get_offset_compensation(&mut self) -> Result<u16, PasGasError<IF::Error>> {
        self.read_u16(regs::CALIB_REF_H)
    }

    pub fn set_scratch_pad(&mut self, value: u8) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::SCRATCH_PAD, &[value])
    }

    pub fn get_scratch_pad(&mut self) -> Result<u8, PasGasError<IF::Error>> {
        self.read_byte(regs::SCRATCH_PAD)
    }

    pub fn send_command(&mut self, command: Command) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::SENS_RST, &[command.value()])
    }

    /// Triggers one measurement with automatic background compensation.
    /// The sensor returns to idle by itself once the result is ready.
    pub fn start_single_measurement(&mut self) -> Result<(), PasGasError<IF::Error>> {
        let mut config = self.get_measurement_config()?;
        config.op_mode = OpMode::Idle;
        self.set_measurement_config(config)?;

        config.op_mode = OpMode::SingleShot;
        config.boc_cfg = BocConfig::Automatic;
        self.set_measurement_config(config)
    }

    /// Starts periodic measurements at `rate` seconds with automatic
    /// background compensation.
    pub fn start_continuous_measurement(&mut self, rate: u16) -> Result<(), PasGasError<IF::Error>> {
        self.check_rate(rate)?;

        let mut config = self.get_measurement_config()?;
        config.op_mode = OpMode::Idle;
        self.set_measurement_config(config)?;

        self.write_u16(regs::MEAS_RATE_H, rate)?;

        config.op_mode = OpMode::Continuous;
        config.boc_cfg = BocConfig::Automatic;
        self.set_measurement_config(config)
    }

    fn check_rate(&self, rate: u16) -> Result<(), PasGasError<IF::Error>> {
        if rate < self.variant.meas_rate_min() || rate > MEAS_RATE_MAX {
            return Err(PasGasError::InvalidMeasurementRate(rate));
        }
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::mock::{Access, MockBusError, MockRegisterInterface, MockTimer};
    use super::*;

    fn device(
        interface: MockRegisterInterface,
        variant: DeviceVariant,
    ) -> PasGas<MockRegisterInterface, MockTimer> {
        PasGas::new(interface, MockTimer::default(), variant)
    }

    #[test]
    fn test_init_success_transaction_order() {
        let mut interface = MockRegisterInterface::default();
        interface.regs[regs::SENS_STS as usize] = 0b1000_0000;
        let mut dev = device(interface, DeviceVariant::Co2);

        dev.init().unwrap();

        assert_eq!(
            dev.interface.log,
            vec![
                Access::Write {
                    reg: regs::SCRATCH_PAD,
                    data: vec![0xA5]
                },
                Access::Read {
                    reg: regs::SCRATCH_PAD,
                    len: 1
                },
                Access::Write {
                    reg: regs::SENS_RST,
                    data: vec![0xA3]
                },
                Access::Read {
                    reg: regs::SENS_STS,
                    len: 1
                },
            ]
        );
        // Settle delay after each of the four transactions, plus the boot
        // wait between the reset write and the status read.
        assert_eq!(dev.timer.delays, vec![5, 5, 5, 2000, 5]);
    }

    #[test]
    fn test_init_aborts_on_scratch_pad_mismatch() {
        let mut interface = MockRegisterInterface::default();
        interface.read_script.push_back((regs::SCRATCH_PAD, Ok(0x5A)));
        let mut dev = device(interface, DeviceVariant::Co2);

        assert!(matches!(dev.init(), Err(PasGasError::Comm)));
        // No reset was issued.
        assert!(!dev.interface.log.iter().any(|access| matches!(
            access,
            Access::Write {
                reg: regs::SENS_RST,
                ..
            }
        )));
    }

    #[test]
    fn test_init_fault_precedence() {
        // ICC error and not-ready at once: the ICC error wins.
        let mut interface = MockRegisterInterface::default();
        interface.regs[regs::SENS_STS as usize] = 0b0000_1000;
        let mut dev = device(interface, DeviceVariant::R290);
        assert!(matches!(
            dev.init(),
            Err(PasGasError::Fault(SensorFault::IccError))
        ));

        let mut interface = MockRegisterInterface::default();
        interface.regs[regs::SENS_STS as usize] = 0b0011_0000;
        let mut dev = device(interface, DeviceVariant::R290);
        assert!(matches!(
            dev.init(),
            Err(PasGasError::Fault(SensorFault::OverVoltage))
        ));

        let mut interface = MockRegisterInterface::default();
        interface.regs[regs::SENS_STS as usize] = 0b0000_0000;
        let mut dev = device(interface, DeviceVariant::R290);
        assert!(matches!(
            dev.init(),
            Err(PasGasError::Fault(SensorFault::NotReady))
        ));
    }

    #[test]
    fn test_get_result_short_circuits_when_not_ready() {
        let interface = MockRegisterInterface::default();
        let mut dev = device(interface, DeviceVariant::Co2);

        assert!(matches!(dev.get_result(), Err(PasGasError::NotReady)));
        // Only the status read happened; the concentration registers were
        // never touched.
        assert_eq!(
            dev.interface.log,
            vec![Access::Read {
                reg: regs::MEAS_STS,
                len: 1
            }]
        );
    }

    #[test]
    fn test_get_result_reads_concentration_when_ready() {
        let mut interface = MockRegisterInterface::default();
        interface.regs[regs::MEAS_STS as usize] = 0b0001_0000;
        interface.regs[regs::GASPPM_H as usize] = 0x01;
        interface.regs[regs::GASPPM_L as usize] = 0xF4;
        let mut dev = device(interface, DeviceVariant::Co2);

        assert_eq!(dev.get_result().unwrap(), 500);
    }

    #[test]
    fn test_out_of_range_rate_rejected_without_transport_traffic() {
        let mut dev = device(MockRegisterInterface::default(), DeviceVariant::Co2);
        assert!(matches!(
            dev.set_measurement_rate(4),
            Err(PasGasError::InvalidMeasurementRate(4))
        ));
        assert!(matches!(
            dev.set_measurement_rate(4096),
            Err(PasGasError::InvalidMeasurementRate(4096))
        ));
        assert!(matches!(
            dev.start_continuous_measurement(4),
            Err(PasGasError::InvalidMeasurementRate(4))
        ));
        assert!(dev.interface.log.is_empty());
        assert!(dev.timer.delays.is_empty());

        // The same rate is fine on the refrigerant families.
        let mut dev = device(MockRegisterInterface::default(), DeviceVariant::R290);
        dev.set_measurement_rate(4).unwrap();
        assert_eq!(
            dev.interface.log,
            vec![Access::Write {
                reg: regs::MEAS_RATE_H,
                data: vec![0x00, 0x04]
            }]
        );
    }

    #[test]
    fn test_settle_delay_applied_on_success_and_failure() {
        let mut dev = device(MockRegisterInterface::default(), DeviceVariant::Co2);
        dev.get_status().unwrap();
        assert_eq!(dev.timer.delays, vec![5]);

        let mut interface = MockRegisterInterface::default();
        interface
            .read_script
            .push_back((regs::SENS_STS, Err(MockBusError)));
        let mut dev = device(interface, DeviceVariant::Co2);
        assert!(matches!(dev.get_status(), Err(PasGasError::Io(MockBusError))));
        assert_eq!(dev.timer.delays, vec![5]);
    }

    #[test]
    fn test_start_continuous_measurement_sequence() {
        let mut interface = MockRegisterInterface::default();
        // Running continuously with automatic compensation already.
        interface.regs[regs::MEAS_CFG as usize] = 0b0000_0110;
        let mut dev = device(interface, DeviceVariant::Co2);

        dev.start_continuous_measurement(60).unwrap();

        assert_eq!(
            dev.interface.log,
            vec![
                Access::Read {
                    reg: regs::MEAS_CFG,
                    len: 1
                },
                Access::Write {
                    reg: regs::MEAS_CFG,
                    data: vec![0b0000_0100]
                },
                Access::Write {
                    reg: regs::MEAS_RATE_H,
                    data: vec![0x00, 0x3C]
                },
                Access::Write {
                    reg: regs::MEAS_CFG,
                    data: vec![0b0000_0110]
                },
            ]
        );
    }

    #[test]
    fn test_start_single_measurement_sequence() {
        let mut dev = device(MockRegisterInterface::default(), DeviceVariant::A2l);
        dev.start_single_measurement().unwrap();

        assert_eq!(
            dev.interface.log,
            vec![
                Access::Read {
                    reg: regs::MEAS_CFG,
                    len: 1
                },
                Access::Write {
                    reg: regs::MEAS_CFG,
                    data: vec![0b0000_0000]
                },
                Access::Write {
                    reg: regs::MEAS_CFG,
                    data: vec![0b0000_0101]
                },
            ]
        );
    }

    #[test]
    fn test_sixteen_bit_setters_write_big_endian() {
        let mut dev = device(MockRegisterInterface::default(), DeviceVariant::Co2);
        dev.set_alarm_threshold(1000).unwrap();
        dev.set_pressure_compensation(1013).unwrap();
        dev.set_offset_compensation(400).unwrap();

        assert_eq!(
            dev.interface.log,
            vec![
                Access::Write {
                    reg: regs::ALARM_TH_H,
                    data: vec![0x03, 0xE8]
                },
                Access::Write {
                    reg: regs::PRESS_REF_H,
                    data: vec![0x03, 0xF5]
                },
                Access::Write {
                    reg: regs::CALIB_REF_H,
                    data: vec![0x01, 0x90]
                },
            ]
        );

        assert_eq!(dev.get_alarm_threshold().unwrap(), 1000);
        assert_eq!(dev.get_pressure_compensation().unwrap(), 1013);
        assert_eq!(dev.get_offset_compensation().unwrap(), 400);
    }

    #[test]
    fn test_product_id_read() {
        let mut interface = MockRegisterInterface::default();
        interface.regs[regs::PROD_ID as usize] = 0b0110_0010;
        let mut dev = device(interface, DeviceVariant::Co2);

        let id = dev.get_id().unwrap();
        assert_eq!(id.product, 3);
        assert_eq!(id.revision, 2);
    }
}
