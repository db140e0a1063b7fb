//! Level-3 MOSFET model cards
//!
//! The lab never evaluates these parameters; they are carried only so the
//! generated deck is a complete, simulator-ready netlist.

use serde::{Deserialize, Serialize};

use super::types::MosType;

/// Gate oxide thickness shared by both default cards [m]
pub const DEFAULT_TOX: f64 = 3.5e-9;
/// Body effect coefficient shared by both default cards [V^0.5]
pub const DEFAULT_GAMMA: f64 = 0.2;
/// Surface potential shared by both default cards [V]
pub const DEFAULT_PHI: f64 = 0.6;

/// A `.MODEL` card for one device polarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCard {
    /// Model name referenced by the transistor statement
    pub name: String,
    /// Device type written after the name
    pub mos_type: MosType,
    /// Model level (always 3 for the lab cards)
    pub level: u32,
    /// Gate oxide thickness [m]
    pub tox: f64,
    /// Zero-bias threshold voltage [V], negative for PMOS
    pub vto: f64,
    /// Body effect coefficient [V^0.5]
    pub gamma: f64,
    /// Surface potential [V]
    pub phi: f64,
}

impl ModelCard {
    pub fn nmos_default() -> Self {
        Self {
            name: MosType::Nmos.model_name().to_string(),
            mos_type: MosType::Nmos,
            level: 3,
            tox: DEFAULT_TOX,
            vto: 0.5,
            gamma: DEFAULT_GAMMA,
            phi: DEFAULT_PHI,
        }
    }

    pub fn pmos_default() -> Self {
        Self {
            name: MosType::Pmos.model_name().to_string(),
            mos_type: MosType::Pmos,
            level: 3,
            tox: DEFAULT_TOX,
            vto: -0.5,
            gamma: DEFAULT_GAMMA,
            phi: DEFAULT_PHI,
        }
    }

    pub fn default_for(mos_type: MosType) -> Self {
        match mos_type {
            MosType::Nmos => Self::nmos_default(),
            MosType::Pmos => Self::pmos_default(),
        }
    }

    /// Render the card as a single `.MODEL` line.
    pub fn to_spice(&self) -> String {
        format!(
            ".MODEL {} {} (LEVEL={} TOX={:E} VTO={} GAMMA={} PHI={})",
            self.name,
            self.mos_type.model_name(),
            self.level,
            self.tox,
            self.vto,
            self.gamma,
            self.phi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nmos_card_renders_level3_line() {
        assert_eq!(
            ModelCard::nmos_default().to_spice(),
            ".MODEL NMOS NMOS (LEVEL=3 TOX=3.5E-9 VTO=0.5 GAMMA=0.2 PHI=0.6)"
        );
    }

    #[test]
    fn pmos_card_has_negative_threshold() {
        let card = ModelCard::default_for(MosType::Pmos);
        assert_eq!(card.mos_type, MosType::Pmos);
        assert!(card.vto < 0.0);
        assert_eq!(
            card.to_spice(),
            ".MODEL PMOS PMOS (LEVEL=3 TOX=3.5E-9 VTO=-0.5 GAMMA=0.2 PHI=0.6)"
        );
    }
}
