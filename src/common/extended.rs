// src/common/extended.rs
//
// Typed views of the extended register set (0x20-0x68) found on the
// R290/A2L families. Same decode/encode discipline as the core registers.

/// Gas type selected for measurement, GAS_CFG bits 1:0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum GasSelection {
    #[default]
    Gas0,
    Gas1,
    Gas2,
    Gas3,
}

impl GasSelection {
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            1 => GasSelection::Gas1,
            2 => GasSelection::Gas2,
            3 => GasSelection::Gas3,
            _ => GasSelection::Gas0,
        }
    }

    pub(crate) fn bits(self) -> u8 {
        match self {
            GasSelection::Gas0 => 0,
            GasSelection::Gas1 => 1,
            GasSelection::Gas2 => 2,
            GasSelection::Gas3 => 3,
        }
    }
}

/// GAS_CFG register contents.
///
/// Bits 3:2 are reserved and must be written as zero; the encoder never
/// sets them, whatever the decoded source byte contained.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct GasConfig {
    /// GAS_SEL (bits 1:0): gas type to measure.
    pub gas_select: GasSelection,
    /// GAS_AVAIL (bits 7:4): bitmap of gas types this device supports.
    pub gas_available: u8,
}

impl GasConfig {
    pub fn from_byte(byte: u8) -> Self {
        GasConfig {
            gas_select: GasSelection::from_bits(byte),
            gas_available: byte >> 4,
        }
    }

    pub fn to_byte(self) -> u8 {
        self.gas_select.bits() | ((self.gas_available & 0x0F) << 4)
    }
}

/// ALARM_CFG register contents: alarm pin electrical configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct AlarmConfig {
    /// ALARM_POL (bits 1:0): pin drive configuration.
    pub polarity: u8,
}

impl AlarmConfig {
    pub fn from_byte(byte: u8) -> Self {
        AlarmConfig {
            polarity: byte & 0x03,
        }
    }

    pub fn to_byte(self) -> u8 {
        self.polarity & 0x03
    }
}

/// ABOC_CYCLE register contents.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct AbocCycle {
    /// Cycle length in days (bits 6:0).
    pub days: u8,
}

impl AbocCycle {
    pub fn from_byte(byte: u8) -> Self {
        AbocCycle { days: byte & 0x7F }
    }

    pub fn to_byte(self) -> u8 {
        self.days & 0x7F
    }
}

/// DENOISE_CFG register contents.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct DenoiseConfig {
    /// Output smoothing factor (bits 6:0).
    pub smoothing_factor: u8,
}

impl DenoiseConfig {
    pub fn from_byte(byte: u8) -> Self {
        DenoiseConfig {
            smoothing_factor: byte & 0x7F,
        }
    }

    pub fn to_byte(self) -> u8 {
        self.smoothing_factor & 0x7F
    }
}

/// SELF_TEST register contents (read view).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct SelfTest {
    /// VOLTAGE_ERR (bit 0).
    pub voltage_error: bool,
    /// TEMP_ERR (bit 1).
    pub temperature_error: bool,
    /// SIMIC_ERR (bit 2): photoacoustic cell fault.
    pub cell_error: bool,
    /// EMITTER_ERR (bit 3): infrared emitter fault.
    pub emitter_error: bool,
    /// ABOC_DRIFT_ERR (bit 4).
    pub aboc_drift_error: bool,
    /// LIFETIME_ERR (bit 5).
    pub lifetime_error: bool,
    /// REPLACE_S_EN (bit 7): the device recommends replacement.
    pub replace_sensor: bool,
}

impl SelfTest {
    pub fn from_byte(byte: u8) -> Self {
        SelfTest {
            voltage_error: byte & (1 << 0) != 0,
            temperature_error: byte & (1 << 1) != 0,
            cell_error: byte & (1 << 2) != 0,
            emitter_error: byte & (1 << 3) != 0,
            aboc_drift_error: byte & (1 << 4) != 0,
            lifetime_error: byte & (1 << 5) != 0,
            replace_sensor: byte & (1 << 7) != 0,
        }
    }
}

/// Write mask for SELF_TEST_CLR (bits 4:0).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct SelfTestClear {
    pub clear_voltage_error: bool,
    pub clear_temperature_error: bool,
    pub clear_cell_error: bool,
    pub clear_emitter_error: bool,
    pub clear_aboc_drift_error: bool,
}

impl SelfTestClear {
    pub fn to_byte(self) -> u8 {
        (self.clear_voltage_error as u8)
            | ((self.clear_temperature_error as u8) << 1)
            | ((self.clear_cell_error as u8) << 2)
            | ((self.clear_emitter_error as u8) << 3)
            | ((self.clear_aboc_drift_error as u8) << 4)
    }
}

/// HC_CTRL register contents: humidity compensation control and status.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct HumidityControl {
    /// HC_ENABLE (bit 0): compensation enabled.
    pub enabled: bool,
    /// HC_ERR_CLR (bit 1): write 1 to clear the out-of-range error.
    pub clear_error: bool,
    /// HUM_ERR (bit 2): humidity reference out of range.
    pub out_of_range: bool,
    /// HUM_STALE (bit 3): reference has not been refreshed recently.
    pub stale: bool,
    /// HUM_MIS_ABS (bit 4): no absolute humidity reference supplied.
    pub missing_reference: bool,
}

impl HumidityControl {
    pub fn from_byte(byte: u8) -> Self {
        HumidityControl {
            enabled: byte & (1 << 0) != 0,
            clear_error: byte & (1 << 1) != 0,
            out_of_range: byte & (1 << 2) != 0,
            stale: byte & (1 << 3) != 0,
            missing_reference: byte & (1 << 4) != 0,
        }
    }

    pub fn to_byte(self) -> u8 {
        (self.enabled as u8)
            | ((self.clear_error as u8) << 1)
            | ((self.out_of_range as u8) << 2)
            | ((self.stale as u8) << 3)
            | ((self.missing_reference as u8) << 4)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_config_forces_reserved_bits_to_zero() {
        // Decoding a byte with the reserved bits set must encode clean.
        let cfg = GasConfig::from_byte(0b1111_1111);
        assert_eq!(cfg.gas_select, GasSelection::Gas3);
        assert_eq!(cfg.gas_available, 0x0F);
        assert_eq!(cfg.to_byte(), 0b1111_0011);
    }

    #[test]
    fn test_gas_config_round_trip() {
        let cfg = GasConfig {
            gas_select: GasSelection::Gas2,
            gas_available: 0b0101,
        };
        assert_eq!(GasConfig::from_byte(cfg.to_byte()), cfg);
    }

    #[test]
    fn test_seven_bit_registers_mask_high_bit() {
        assert_eq!(AbocCycle { days: 0xFF }.to_byte(), 0x7F);
        assert_eq!(DenoiseConfig { smoothing_factor: 0x80 }.to_byte(), 0x00);
        assert_eq!(AbocCycle::from_byte(0x85).days, 0x05);
    }

    #[test]
    fn test_self_test_decoding() {
        let st = SelfTest::from_byte(0b1010_0101);
        assert!(st.voltage_error);
        assert!(st.cell_error);
        assert!(st.lifetime_error);
        assert!(st.replace_sensor);
        assert!(!st.temperature_error);
        assert!(!st.emitter_error);

        let clr = SelfTestClear {
            clear_voltage_error: true,
            clear_aboc_drift_error: true,
            ..Default::default()
        };
        assert_eq!(clr.to_byte(), 0b0001_0001);
    }

    #[test]
    fn test_humidity_control_round_trip() {
        let hc = HumidityControl {
            enabled: true,
            clear_error: false,
            out_of_range: true,
            stale: false,
            missing_reference: true,
        };
        assert_eq!(hc.to_byte(), 0b0001_0101);
        assert_eq!(HumidityControl::from_byte(hc.to_byte()), hc);
    }
}
