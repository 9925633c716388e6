use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for required fields the note does not supply.
pub const UNKNOWN: &str = "Unknown";

/// Equipment categories an order can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "CPAP")]
    Cpap,
    #[serde(rename = "Oxygen Tank")]
    OxygenTank,
    Wheelchair,
    Unknown,
}

impl DeviceType {
    pub const ALL: [DeviceType; 4] = [
        DeviceType::Cpap,
        DeviceType::OxygenTank,
        DeviceType::Wheelchair,
        DeviceType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Cpap => "CPAP",
            DeviceType::OxygenTank => "Oxygen Tank",
            DeviceType::Wheelchair => "Wheelchair",
            DeviceType::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured DME order sent to the ordering API.
///
/// Field order is the wire order. `liters` and `usage` are left out of the
/// serialized object entirely when they could not be derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub device: DeviceType,
    pub ordering_provider: String,
    pub diagnosis: String,
    pub patient_name: String,
    pub dob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}
