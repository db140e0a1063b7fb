use inv_devices::DeviceParameters;
use serde::{Deserialize, Serialize};

/// Wp/Wn ratio at which the inverter switches at exactly VDD/2.
pub const CANONICAL_RATIO: f64 = 2.0;
/// Fraction of VDD the switching point moves per unit of ln(ratio offset).
pub const THRESHOLD_SHIFT: f64 = 0.05;
pub const VIL_FRACTION: f64 = 0.7;
pub const VIH_FRACTION: f64 = 1.3;
/// Fixed output low level [V]
pub const VOL: f64 = 0.1;
/// Distance of the output high level below VDD [V]
pub const VOH_HEADROOM: f64 = 0.1;

/// DC operating points of the inverter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResult {
    /// VM [V]
    pub switching_threshold: f64,
    pub v_il: f64,
    pub v_ih: f64,
    pub v_ol: f64,
    pub v_oh: f64,
    /// NML = VIL - VOL
    pub low_noise_margin: f64,
    /// NMH = VOH - VIH
    pub high_noise_margin: f64,
}

/// Switching threshold for a given supply and Wp/Wn ratio.
///
/// A PMOS wider than the 2:1 canonical sizing pulls VM up, a narrower one
/// pulls it down, both through a logarithmic correction.
pub fn switching_threshold(supply_voltage: f64, ratio: f64) -> f64 {
    if ratio > CANONICAL_RATIO {
        supply_voltage * (0.5 + THRESHOLD_SHIFT * (ratio / CANONICAL_RATIO).ln())
    } else if ratio < CANONICAL_RATIO {
        supply_voltage * (0.5 - THRESHOLD_SHIFT * (CANONICAL_RATIO / ratio).ln())
    } else {
        supply_voltage / 2.0
    }
}

/// `params.n_width` must be non-zero; see [`crate::params::validate`].
pub fn evaluate_threshold(params: &DeviceParameters) -> ThresholdResult {
    let vm = switching_threshold(params.supply_voltage, params.width_ratio());
    let v_il = VIL_FRACTION * vm;
    let v_ih = VIH_FRACTION * vm;
    let v_ol = VOL;
    let v_oh = params.supply_voltage - VOH_HEADROOM;

    ThresholdResult {
        switching_threshold: vm,
        v_il,
        v_ih,
        v_ol,
        v_oh,
        low_noise_margin: v_il - v_ol,
        high_noise_margin: v_oh - v_ih,
    }
}
