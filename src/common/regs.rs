// src/common/regs.rs
//
// Register address map. Addresses 0x00-0x10 are common to every family;
// 0x20-0x68 exist on the families with the extended register set.

/// I2C device address shared by all sensor families.
pub const I2C_ADDR: u8 = 0x28;

// === Common core (0x00 - 0x10) ===

/// PROD_ID: product and revision identifier.
pub const PROD_ID: u8 = 0x00;
/// SENS_STS: sensor status flags.
pub const SENS_STS: u8 = 0x01;
/// MEAS_RATE_H: measurement rate, high byte.
pub const MEAS_RATE_H: u8 = 0x02;
/// MEAS_RATE_L: measurement rate, low byte.
pub const MEAS_RATE_L: u8 = 0x03;
/// MEAS_CFG: measurement configuration.
pub const MEAS_CFG: u8 = 0x04;
/// GASPPM_H: gas concentration result, high byte.
pub const GASPPM_H: u8 = 0x05;
/// GASPPM_L: gas concentration result, low byte.
pub const GASPPM_L: u8 = 0x06;
/// MEAS_STS: measurement status flags.
pub const MEAS_STS: u8 = 0x07;
/// INT_CFG: interrupt pin configuration.
pub const INT_CFG: u8 = 0x08;
/// ALARM_TH_H: alarm threshold, high byte.
pub const ALARM_TH_H: u8 = 0x09;
/// ALARM_TH_L: alarm threshold, low byte.
pub const ALARM_TH_L: u8 = 0x0A;
/// PRESS_REF_H: pressure compensation reference, high byte.
pub const PRESS_REF_H: u8 = 0x0B;
/// PRESS_REF_L: pressure compensation reference, low byte.
pub const PRESS_REF_L: u8 = 0x0C;
/// CALIB_REF_H: calibration/offset reference, high byte.
pub const CALIB_REF_H: u8 = 0x0D;
/// CALIB_REF_L: calibration/offset reference, low byte.
pub const CALIB_REF_L: u8 = 0x0E;
/// SCRATCH_PAD: no functional effect, used for communication self-tests.
pub const SCRATCH_PAD: u8 = 0x0F;
/// SENS_RST: command register (soft reset and friends).
pub const SENS_RST: u8 = 0x10;

// === Extended register set (0x20 - 0x68) ===

/// CFG_SAVE: persist configuration to non-volatile memory.
pub const CFG_SAVE: u8 = 0x20;
/// DEV_ID_IDX: selects which device ID byte DEV_ID exposes.
pub const DEV_ID_IDX: u8 = 0x22;
/// DEV_ID: device ID byte selected by DEV_ID_IDX.
pub const DEV_ID: u8 = 0x23;
/// ABOC_PREFILL: hours of ABOC history to prefill.
pub const ABOC_PREFILL: u8 = 0x5D;
/// GAS_CFG: gas type selection and availability.
pub const GAS_CFG: u8 = 0x5E;
/// ALARM_CFG: alarm pin electrical configuration.
pub const ALARM_CFG: u8 = 0x5F;
/// SELF_TEST: self-test fault flags.
pub const SELF_TEST: u8 = 0x60;
/// DENOISE_CFG: output smoothing factor.
pub const DENOISE_CFG: u8 = 0x61;
/// ABOC_CYCLE: ABOC cycle length in days.
pub const ABOC_CYCLE: u8 = 0x62;
/// SELF_TEST_CLR: self-test fault clear mask.
pub const SELF_TEST_CLR: u8 = 0x63;
/// ALARM_HYS_H: alarm hysteresis, high byte (7 valid bits).
pub const ALARM_HYS_H: u8 = 0x64;
/// ALARM_HYS_L: alarm hysteresis, low byte.
pub const ALARM_HYS_L: u8 = 0x65;
/// ABS_HUM_REF_H: absolute humidity reference, high byte (2 valid bits).
pub const ABS_HUM_REF_H: u8 = 0x66;
/// ABS_HUM_REF_L: absolute humidity reference, low byte.
pub const ABS_HUM_REF_L: u8 = 0x67;
/// HC_CTRL: humidity compensation control and status.
pub const HC_CTRL: u8 = 0x68;
