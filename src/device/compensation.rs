// src/device/compensation.rs

use crate::common::error::PasGasError;
use crate::common::hal_traits::PasGasTimer;
use crate::common::types::{BocConfig, Command, OpMode};
use crate::interface::RegisterAccess;

use super::PasGas;

impl<IF, T> PasGas<IF, T>
where
    IF: RegisterAccess,
    T: PasGasTimer,
{
    /// Runs the forced compensation sequence against a known reference
    /// concentration.
    ///
    /// The sensor is idled, reconfigured to the variant's compensation
    /// measurement rate, given the reference value, and set to measure
    /// continuously with forced compensation enabled. The sensor clears
    /// the forced flag by itself once it has computed the correction;
    /// this call blocks until that happens, then idles the sensor again.
    /// On the CO2 family the computed offset is additionally persisted to
    /// non-volatile memory, and a failure of that final command is
    /// reported.
    ///
    /// Expect the wait to span at least one full measurement period.
    pub fn perform_forced_compensation(
        &mut self,
        gas_ref: u16,
    ) -> Result<(), PasGasError<IF::Error>> {
        let mut config = self.get_measurement_config()?;
        if config.op_mode != OpMode::Idle {
            config.op_mode = OpMode::Idle;
            self.set_measurement_config(config)?;
        }

        let rate = self.variant.fcs_meas_rate();
        self.set_measurement_rate(rate)?;
        self.set_offset_compensation(gas_ref)?;

        config.op_mode = OpMode::Continuous;
        config.boc_cfg = BocConfig::Forced;
        self.set_measurement_config(config)?;

        // Re-read until the sensor reports the correction as done.
        // Transport hiccups during the wait are absorbed; every attempt
        // is paced by the settle delay.
        loop {
            match self.get_measurement_config() {
                Ok(current) if current.boc_cfg != BocConfig::Forced => {
                    config = current;
                    break;
                }
                _ => continue,
            }
        }

        config.op_mode = OpMode::Idle;
        self.set_measurement_config(config)?;

        if self.variant.persists_fcs_offset() {
            self.send_command(Command::SaveFcsCalibOffset)?;
        }
        Ok(())
    }
}
