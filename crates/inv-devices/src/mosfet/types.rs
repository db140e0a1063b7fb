//! MOSFET type definitions
//!
//! Polarity and geometry of the two inverter transistors.

use serde::{Deserialize, Serialize};

/// MOSFET device type (NMOS or PMOS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MosType {
    Nmos,
    Pmos,
}

impl MosType {
    /// Model name as it appears in a deck (`NMOS` / `PMOS`).
    pub fn model_name(&self) -> &'static str {
        match self {
            MosType::Nmos => "NMOS",
            MosType::Pmos => "PMOS",
        }
    }
}

/// Channel geometry of a single transistor.
///
/// Widths and lengths are in micrometres, matching the `W=..u L=..u`
/// parameters written into the deck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MosfetSizing {
    pub mos_type: MosType,
    /// Channel width [um]
    pub width: f64,
    /// Channel length [um]
    pub length: f64,
}

impl MosfetSizing {
    pub fn new(mos_type: MosType, width: f64, length: f64) -> Self {
        Self {
            mos_type,
            width,
            length,
        }
    }

    /// W/L aspect ratio.
    pub fn w_over_l(&self) -> f64 {
        self.width / self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn w_over_l_divides_width_by_length() {
        let sizing = MosfetSizing::new(MosType::Pmos, 0.36, 0.18);
        assert!((sizing.w_over_l() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn model_names_are_upper_case() {
        assert_eq!(MosType::Nmos.model_name(), "NMOS");
        assert_eq!(MosType::Pmos.model_name(), "PMOS");
    }
}
