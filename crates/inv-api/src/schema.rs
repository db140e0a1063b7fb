use inv_core::analysis::AnalysisKind;
use inv_devices::DeviceParameters;
use serde::{Deserialize, Serialize};

/// Slider state sent by the front end. Missing fields take the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamsRequest {
    #[serde(alias = "vdd")]
    pub supply_voltage: Option<f64>,
    #[serde(alias = "wp")]
    pub p_width: Option<f64>,
    #[serde(alias = "wn")]
    pub n_width: Option<f64>,
    #[serde(alias = "length")]
    pub channel_length: Option<f64>,
}

impl ParamsRequest {
    pub fn to_params(&self) -> DeviceParameters {
        let defaults = DeviceParameters::default();
        DeviceParameters {
            supply_voltage: self.supply_voltage.unwrap_or(defaults.supply_voltage),
            p_width: self.p_width.unwrap_or(defaults.p_width),
            n_width: self.n_width.unwrap_or(defaults.n_width),
            channel_length: self.channel_length.unwrap_or(defaults.channel_length),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeckRequest {
    #[serde(default)]
    pub analysis: Option<AnalysisKind>,
    #[serde(flatten)]
    pub params: ParamsRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckDeckRequest {
    pub deck: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}
