//! SPICE decks describing the inverter under test.

use std::fmt::Write as _;

use inv_devices::{DeviceParameters, ModelCard, MosType, MosfetSizing};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisKind;
use crate::curve::{INPUT_HALF_PERIOD, TRAN_STEP, TRAN_STOP, VTC_STEP};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDeck {
    pub analysis: AnalysisKind,
    pub deck: String,
}

pub fn generate_deck(kind: AnalysisKind, params: &DeviceParameters) -> GeneratedDeck {
    let deck = match kind {
        AnalysisKind::Dc => dc_deck(params),
        AnalysisKind::Tran => tran_deck(params),
    };
    GeneratedDeck {
        analysis: kind,
        deck,
    }
}

/// Deck sweeping VIN from 0 to VDD.
pub fn dc_deck(params: &DeviceParameters) -> String {
    let vdd = params.supply_voltage;
    let mut out = String::new();
    out.push_str("* CMOS Inverter SPICE Netlist\n\n");
    push_supply(&mut out, vdd);
    out.push_str("* Input Voltage Source (for DC sweep)\n");
    out.push_str("VIN in 0 DC 0V\n\n");
    push_devices(&mut out, params);
    out.push_str("* Analysis Commands\n");
    let _ = writeln!(out, ".DC VIN 0 {} {}", vdd, VTC_STEP);
    out.push_str(".PRINT DC V(in) V(out)\n\n");
    out.push_str(".END");
    out
}

/// Deck driving VIN with the 40 ns square pulse.
pub fn tran_deck(params: &DeviceParameters) -> String {
    let vdd = params.supply_voltage;
    let mut out = String::new();
    out.push_str("* CMOS Inverter SPICE Netlist - Transient Analysis\n\n");
    push_supply(&mut out, vdd);
    out.push_str("* Input Voltage Source (pulse)\n");
    let _ = writeln!(
        out,
        "VIN in 0 PULSE(0 {} 0ns 1ns 1ns {}ns {}ns)\n",
        vdd,
        INPUT_HALF_PERIOD,
        2.0 * INPUT_HALF_PERIOD
    );
    push_devices(&mut out, params);
    out.push_str("* Analysis Commands\n");
    let _ = writeln!(out, ".TRAN {}ns {}ns", TRAN_STEP, TRAN_STOP);
    out.push_str(".PRINT TRAN V(in) V(out)\n\n");
    out.push_str(".END");
    out
}

fn push_supply(out: &mut String, vdd: f64) {
    out.push_str("* Power Supply\n");
    let _ = writeln!(out, "VDD vdd 0 DC {}V\n", vdd);
}

fn push_devices(out: &mut String, params: &DeviceParameters) {
    out.push_str("* PMOS Transistor\n");
    let _ = writeln!(out, "{}\n", mosfet_line("M1", "vdd", &params.pmos()));
    out.push_str("* NMOS Transistor\n");
    let _ = writeln!(out, "{}\n", mosfet_line("M2", "0", &params.nmos()));
    out.push_str("* MOSFET Model Parameters\n");
    let _ = writeln!(out, "{}", ModelCard::default_for(MosType::Nmos).to_spice());
    let _ = writeln!(out, "{}\n", ModelCard::default_for(MosType::Pmos).to_spice());
}

/// `name out in rail rail MODEL W=..u L=..u`; source and bulk share the rail.
fn mosfet_line(name: &str, rail: &str, sizing: &MosfetSizing) -> String {
    format!(
        "{} out in {} {} {} W={}u L={}u",
        name,
        rail,
        rail,
        sizing.mos_type.model_name(),
        sizing.width,
        sizing.length
    )
}
