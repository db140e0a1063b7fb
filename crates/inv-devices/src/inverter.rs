//! Inverter-level parameters
//!
//! The four scalar inputs every model in the lab is driven from.

use serde::{Deserialize, Serialize};

use crate::mosfet::{MosType, MosfetSizing};

/// Supply voltage and transistor sizing of a CMOS inverter.
///
/// All values are expected to be positive. The models that consume this
/// struct do not check that; callers validate before invoking them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceParameters {
    /// Supply voltage VDD [V]
    pub supply_voltage: f64,
    /// PMOS channel width [um]
    pub p_width: f64,
    /// NMOS channel width [um]
    pub n_width: f64,
    /// Channel length shared by both devices [um]
    pub channel_length: f64,
}

impl Default for DeviceParameters {
    fn default() -> Self {
        Self {
            supply_voltage: 5.0,
            p_width: 2.0,
            n_width: 1.0,
            channel_length: 0.18,
        }
    }
}

impl DeviceParameters {
    pub fn new(supply_voltage: f64, p_width: f64, n_width: f64, channel_length: f64) -> Self {
        Self {
            supply_voltage,
            p_width,
            n_width,
            channel_length,
        }
    }

    /// Wp/Wn ratio. The canonical symmetric inverter sits at 2.
    pub fn width_ratio(&self) -> f64 {
        self.p_width / self.n_width
    }

    pub fn pmos(&self) -> MosfetSizing {
        MosfetSizing::new(MosType::Pmos, self.p_width, self.channel_length)
    }

    pub fn nmos(&self) -> MosfetSizing {
        MosfetSizing::new(MosType::Nmos, self.n_width, self.channel_length)
    }
}
