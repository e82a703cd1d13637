// src/device/variant.rs

/// The sensor families this driver supports.
///
/// The families share the register map and transports but differ in
/// measurement-rate limits and in whether a forced compensation offset
/// must be explicitly persisted afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DeviceVariant {
    /// CO2 concentration sensor.
    Co2,
    /// R290 (propane) refrigerant leak sensor.
    R290,
    /// A2L refrigerant leak sensor.
    A2l,
}

impl DeviceVariant {
    /// Minimum accepted measurement period in seconds.
    pub fn meas_rate_min(self) -> u16 {
        match self {
            DeviceVariant::Co2 => 5,
            DeviceVariant::R290 | DeviceVariant::A2l => 3,
        }
    }

    /// Measurement period in seconds used during forced compensation.
    pub fn fcs_meas_rate(self) -> u16 {
        match self {
            DeviceVariant::Co2 => 10,
            DeviceVariant::R290 | DeviceVariant::A2l => 3,
        }
    }

    /// Whether the computed forced-compensation offset must be saved to
    /// non-volatile memory with an explicit command once the sequence
    /// completes.
    pub fn persists_fcs_offset(self) -> bool {
        matches!(self, DeviceVariant::Co2)
    }
}
