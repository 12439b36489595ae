//! Vehicle classification.

use serde::{Deserialize, Serialize};

/// Vehicle class, mapped to toll-provider vehicle codes.
///
/// The vocabulary is fixed to the two classes this deployment supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    #[default]
    Car,
    Motorcycle,
}

impl VehicleClass {
    /// The toll provider's code for this class.
    pub fn provider_code(&self) -> &'static str {
        match self {
            VehicleClass::Car => "2AxlesAuto",
            VehicleClass::Motorcycle => "Motorcycle",
        }
    }

    /// Reverse lookup from a provider code.
    pub fn from_provider_code(code: &str) -> Option<Self> {
        match code {
            "2AxlesAuto" => Some(VehicleClass::Car),
            "Motorcycle" => Some(VehicleClass::Motorcycle),
            _ => None,
        }
    }
}
