// src/device/extended.rs
//
// Operations on the extended register set (0x20-0x68) of the R290/A2L
// families.

use crate::common::error::PasGasError;
use crate::common::extended::{
    AbocCycle, AlarmConfig, DenoiseConfig, GasConfig, GasSelection, HumidityControl, SelfTest,
    SelfTestClear,
};
use crate::common::hal_traits::PasGasTimer;
use crate::common::hex::split_u16;
use crate::common::regs;
use crate::interface::RegisterAccess;

use super::PasGas;

impl<IF, T> PasGas<IF, T>
where
    IF: RegisterAccess,
    T: PasGasTimer,
{
    /// Selects which of the device's identifier slots [`Self::get_device_id`]
    /// reads from.
    pub fn set_device_index(&mut self, index: u8) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::DEV_ID_IDX, &[index])
    }

    pub fn get_device_index(&mut self) -> Result<u8, PasGasError<IF::Error>> {
        self.read_byte(regs::DEV_ID_IDX)
    }

    pub fn get_device_id(&mut self) -> Result<u8, PasGasError<IF::Error>> {
        self.read_byte(regs::DEV_ID)
    }

    /// Ages the automatic background compensation as if the sensor had
    /// already been running for the given number of hours.
    pub fn set_aboc_prefill(&mut self, hours: u8) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::ABOC_PREFILL, &[hours])
    }

    pub fn get_aboc_prefill(&mut self) -> Result<u8, PasGasError<IF::Error>> {
        self.read_byte(regs::ABOC_PREFILL)
    }

    pub fn get_alarm_config(&mut self) -> Result<AlarmConfig, PasGasError<IF::Error>> {
        Ok(AlarmConfig::from_byte(self.read_byte(regs::ALARM_CFG)?))
    }

    pub fn set_alarm_config(&mut self, config: AlarmConfig) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::ALARM_CFG, &[config.to_byte()])
    }

    pub fn get_aboc_cycle(&mut self) -> Result<AbocCycle, PasGasError<IF::Error>> {
        Ok(AbocCycle::from_byte(self.read_byte(regs::ABOC_CYCLE)?))
    }

    pub fn set_aboc_cycle(&mut self, cycle: AbocCycle) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::ABOC_CYCLE, &[cycle.to_byte()])
    }

    pub fn get_denoise_config(&mut self) -> Result<DenoiseConfig, PasGasError<IF::Error>> {
        Ok(DenoiseConfig::from_byte(self.read_byte(regs::DENOISE_CFG)?))
    }

    pub fn set_denoise_config(
        &mut self,
        config: DenoiseConfig,
    ) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::DENOISE_CFG, &[config.to_byte()])
    }

    pub fn get_self_test(&mut self) -> Result<SelfTest, PasGasError<IF::Error>> {
        Ok(SelfTest::from_byte(self.read_byte(regs::SELF_TEST)?))
    }

    /// Clears the selected latched self-test error flags.
    pub fn clear_self_test(&mut self, clear: SelfTestClear) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::SELF_TEST_CLR, &[clear.to_byte()])
    }

    pub fn get_gas_config(&mut self) -> Result<GasConfig, PasGasError<IF::Error>> {
        Ok(GasConfig::from_byte(self.read_byte(regs::GAS_CFG)?))
    }

    pub fn set_gas_config(&mut self, config: GasConfig) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::GAS_CFG, &[config.to_byte()])
    }

    /// The gas type currently selected for measurement.
    pub fn get_gas_selection(&mut self) -> Result<GasSelection, PasGasError<IF::Error>> {
        Ok(self.get_gas_config()?.gas_select)
    }

    /// Bitmap of the gas types this device can measure.
    pub fn get_available_gases(&mut self) -> Result<u8, PasGasError<IF::Error>> {
        Ok(self.get_gas_config()?.gas_available)
    }

    /// Sets the alarm hysteresis in ppm. The register pair holds 15 bits;
    /// the value is masked accordingly.
    pub fn set_alarm_hysteresis(&mut self, ppm: u16) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::ALARM_HYS_H, &split_u16(ppm & 0x7FFF))
    }

    pub fn get_alarm_hysteresis(&mut self) -> Result<u16, PasGasError<IF::Error>> {
        Ok(self.read_u16(regs::ALARM_HYS_H)? & 0x7FFF)
    }

    /// Sets the absolute humidity reference in g/m3, scaled by the
    /// device's fixed-point format. The register pair holds 10 bits.
    ///
    /// The pair is not burst-writable; each half is written in its own
    /// transaction, high byte first, and the low byte is not attempted
    /// when the high byte fails.
    pub fn set_absolute_humidity_ref(&mut self, value: u16) -> Result<(), PasGasError<IF::Error>> {
        let [high, low] = split_u16(value & 0x03FF);
        self.set_reg(regs::ABS_HUM_REF_H, &[high])?;
        self.set_reg(regs::ABS_HUM_REF_L, &[low])
    }

    pub fn get_absolute_humidity_ref(&mut self) -> Result<u16, PasGasError<IF::Error>> {
        let high = self.read_byte(regs::ABS_HUM_REF_H)?;
        let low = self.read_byte(regs::ABS_HUM_REF_L)?;
        Ok((((high & 0x03) as u16) << 8) | low as u16)
    }

    pub fn get_humidity_control(&mut self) -> Result<HumidityControl, PasGasError<IF::Error>> {
        Ok(HumidityControl::from_byte(self.read_byte(regs::HC_CTRL)?))
    }

    pub fn set_humidity_control(
        &mut self,
        control: HumidityControl,
    ) -> Result<(), PasGasError<IF::Error>> {
        self.set_reg(regs::HC_CTRL, &[control.to_byte()])
    }
}
