// src/common/types.rs
//
// Typed views of the common core registers (0x00-0x10). Each register is
// a small struct/enum pair with an exact byte (de)serialization; the
// device layer never does raw mask arithmetic on register bytes.

/// Operating mode field of MEAS_CFG (bits 1:0).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum OpMode {
    /// No measurements; configuration registers are writable.
    #[default]
    Idle,
    /// One measurement, then the sensor returns to idle on its own.
    SingleShot,
    /// Periodic measurements at the configured measurement rate.
    Continuous,
}

impl OpMode {
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            1 => OpMode::SingleShot,
            2 => OpMode::Continuous,
            _ => OpMode::Idle,
        }
    }

    pub(crate) fn bits(self) -> u8 {
        match self {
            OpMode::Idle => 0,
            OpMode::SingleShot => 1,
            OpMode::Continuous => 2,
        }
    }
}

/// Background offset compensation field of MEAS_CFG (bits 3:2).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum BocConfig {
    /// No background compensation.
    #[default]
    Disabled,
    /// Periodic automatic self-zeroing (ABOC).
    Automatic,
    /// One-shot forced compensation against a known reference. The sensor
    /// clears this field itself once the correction completes.
    Forced,
}

impl BocConfig {
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            1 => BocConfig::Automatic,
            2 => BocConfig::Forced,
            _ => BocConfig::Disabled,
        }
    }

    pub(crate) fn bits(self) -> u8 {
        match self {
            BocConfig::Disabled => 0,
            BocConfig::Automatic => 1,
            BocConfig::Forced => 2,
        }
    }
}

/// PWM output mode field of MEAS_CFG (bit 4). Only the CO2 family routes
/// these bits anywhere; on the other families they read as zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum PwmMode {
    #[default]
    SinglePulse,
    PulseTrain,
}

/// MEAS_CFG register contents.
///
/// The PWM fields are opaque to the core sequences but are always carried
/// through decode/encode, so a read-modify-write of the mode bits never
/// disturbs them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct MeasurementConfig {
    pub op_mode: OpMode,
    pub boc_cfg: BocConfig,
    pub pwm_mode: PwmMode,
    pub pwm_output_enabled: bool,
}

impl MeasurementConfig {
    pub fn from_byte(byte: u8) -> Self {
        MeasurementConfig {
            op_mode: OpMode::from_bits(byte),
            boc_cfg: BocConfig::from_bits(byte >> 2),
            pwm_mode: if byte & (1 << 4) != 0 {
                PwmMode::PulseTrain
            } else {
                PwmMode::SinglePulse
            },
            pwm_output_enabled: byte & (1 << 5) != 0,
        }
    }

    pub fn to_byte(self) -> u8 {
        self.op_mode.bits()
            | (self.boc_cfg.bits() << 2)
            | (((self.pwm_mode == PwmMode::PulseTrain) as u8) << 4)
            | ((self.pwm_output_enabled as u8) << 5)
    }
}

/// SENS_STS register contents (read view).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct SensorStatus {
    /// ICCERR (bit 3): the serial interface received an invalid command.
    pub icc_error: bool,
    /// ORVS (bit 4): supply voltage out of range.
    pub over_voltage: bool,
    /// ORTMP (bit 5): temperature out of range.
    pub over_temperature: bool,
    /// PWM_DIS_ST (bit 6): level of the PWM_DIS pin. CO2 family only.
    pub pwm_pin_disabled: bool,
    /// SEN_RDY (bit 7): sensor finished booting and accepts commands.
    pub ready: bool,
}

impl SensorStatus {
    pub fn from_byte(byte: u8) -> Self {
        SensorStatus {
            icc_error: byte & (1 << 3) != 0,
            over_voltage: byte & (1 << 4) != 0,
            over_temperature: byte & (1 << 5) != 0,
            pwm_pin_disabled: byte & (1 << 6) != 0,
            ready: byte & (1 << 7) != 0,
        }
    }
}

/// Write mask for SENS_STS: clears latched fault flags (bits 2:0).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct SensorStatusClear {
    pub clear_icc_error: bool,
    pub clear_over_voltage: bool,
    pub clear_over_temperature: bool,
}

impl SensorStatusClear {
    pub fn to_byte(self) -> u8 {
        (self.clear_icc_error as u8)
            | ((self.clear_over_voltage as u8) << 1)
            | ((self.clear_over_temperature as u8) << 2)
    }
}

/// MEAS_STS register contents (read view).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct MeasurementStatus {
    /// ALARM (bit 2): concentration crossed the alarm threshold.
    pub alarm: bool,
    /// INT_STS (bit 3): interrupt pin is asserted.
    pub interrupt_active: bool,
    /// DRDY (bit 4): a new measurement result is available.
    pub data_ready: bool,
}

impl MeasurementStatus {
    pub fn from_byte(byte: u8) -> Self {
        MeasurementStatus {
            alarm: byte & (1 << 2) != 0,
            interrupt_active: byte & (1 << 3) != 0,
            data_ready: byte & (1 << 4) != 0,
        }
    }
}

/// Write mask for MEAS_STS: clears the latched alarm/interrupt flags.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct MeasurementStatusClear {
    pub clear_alarm: bool,
    pub clear_interrupt: bool,
}

impl MeasurementStatusClear {
    pub fn to_byte(self) -> u8 {
        (self.clear_alarm as u8) | ((self.clear_interrupt as u8) << 1)
    }
}

/// Event routed to the interrupt pin, INT_CFG bits 3:1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum InterruptFunction {
    /// Pin inactive.
    #[default]
    None,
    /// Asserted on an alarm threshold crossing.
    Alarm,
    /// Asserted when a new result is ready.
    DataReady,
    /// Asserted while a measurement is in progress.
    Busy,
    /// Asserted shortly before a measurement starts.
    EarlyMeasurement,
}

impl InterruptFunction {
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            1 => InterruptFunction::Alarm,
            2 => InterruptFunction::DataReady,
            3 => InterruptFunction::Busy,
            4 => InterruptFunction::EarlyMeasurement,
            _ => InterruptFunction::None,
        }
    }

    pub(crate) fn bits(self) -> u8 {
        match self {
            InterruptFunction::None => 0,
            InterruptFunction::Alarm => 1,
            InterruptFunction::DataReady => 2,
            InterruptFunction::Busy => 3,
            InterruptFunction::EarlyMeasurement => 4,
        }
    }
}

/// INT_CFG register contents.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct InterruptConfig {
    /// ALARM_TYP (bit 0): alarm on an upward (true) or downward (false)
    /// threshold crossing.
    pub alarm_on_rising: bool,
    /// INT_FUNC (bits 3:1): which event drives the pin.
    pub function: InterruptFunction,
    /// INT_TYP (bit 4): pin drives high (true) or low (false) when active.
    pub active_high: bool,
}

impl InterruptConfig {
    pub fn from_byte(byte: u8) -> Self {
        InterruptConfig {
            alarm_on_rising: byte & 0x01 != 0,
            function: InterruptFunction::from_bits(byte >> 1),
            active_high: byte & (1 << 4) != 0,
        }
    }

    pub fn to_byte(self) -> u8 {
        (self.alarm_on_rising as u8) | (self.function.bits() << 1) | ((self.active_high as u8) << 4)
    }
}

/// PROD_ID register contents: product (bits 7:5) and revision (bits 4:0).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ProductId {
    pub product: u8,
    pub revision: u8,
}

impl ProductId {
    pub fn from_byte(byte: u8) -> Self {
        ProductId {
            product: byte >> 5,
            revision: byte & 0x1F,
        }
    }
}

/// Commands accepted by the SENS_RST register.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Command {
    /// Soft-reset the sensor.
    SoftReset = 0xA3,
    /// Discard the accumulated ABOC context.
    ResetAboc = 0xBC,
    /// Persist the forced-compensation offset to non-volatile memory.
    SaveFcsCalibOffset = 0xCF,
    /// Discard the forced-compensation correction factor.
    ResetForcedCalib = 0xFC,
}

impl Command {
    pub fn value(self) -> u8 {
        self as u8
    }
}
