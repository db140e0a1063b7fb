use serde::{Deserialize, Serialize};

use crate::threshold::CANONICAL_RATIO;

/// Propagation delay of both edges at the canonical 2:1 sizing [ns]
pub const BASE_DELAY: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayResult {
    /// tPLH [ns]
    pub rise_delay: f64,
    /// tPHL [ns]
    pub fall_delay: f64,
}

impl DelayResult {
    pub fn average(&self) -> f64 {
        (self.rise_delay + self.fall_delay) / 2.0
    }
}

/// Rise/fall delays from the Wp/Wn ratio.
///
/// Moving away from 2:1 scales one edge up and the other down by the same
/// factor, so `rise_delay * fall_delay` stays at `BASE_DELAY^2`.
pub fn evaluate_delay(p_width: f64, n_width: f64) -> DelayResult {
    let ratio = p_width / n_width;
    if ratio > CANONICAL_RATIO {
        let scale = ratio / CANONICAL_RATIO;
        DelayResult {
            rise_delay: BASE_DELAY / scale,
            fall_delay: BASE_DELAY * scale,
        }
    } else if ratio < CANONICAL_RATIO {
        let scale = CANONICAL_RATIO / ratio;
        DelayResult {
            rise_delay: BASE_DELAY * scale,
            fall_delay: BASE_DELAY / scale,
        }
    } else {
        DelayResult {
            rise_delay: BASE_DELAY,
            fall_delay: BASE_DELAY,
        }
    }
}
