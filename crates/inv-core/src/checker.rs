//! Rule-based feedback on decks, parameters and results.
//!
//! Every checker is an ordered table of independent [`Rule`]s. A rule
//! inspects its input and either passes or returns the message to report;
//! the overall status ratchets to the most severe failing rule.

use inv_devices::DeviceParameters;
use serde::{Deserialize, Serialize};

use crate::netlist::{parse_deck, parse_number_with_suffix, Deck, DeckLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub status: Status,
    pub messages: Vec<String>,
}

impl Feedback {
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|message| message.contains(needle))
    }
}

pub struct Rule<T: ?Sized> {
    pub name: &'static str,
    pub severity: Status,
    pub check: fn(&T) -> Option<&'static str>,
}

pub fn evaluate<T: ?Sized>(rules: &[Rule<T>], input: &T, success_message: &str) -> Feedback {
    let mut status = Status::Success;
    let mut messages = Vec::new();

    for rule in rules {
        if let Some(message) = (rule.check)(input) {
            tracing::trace!(rule = rule.name, "rule failed");
            status = status.max(rule.severity);
            messages.push(message.to_string());
        }
    }

    if messages.is_empty() {
        messages.push(success_message.to_string());
    }
    Feedback { status, messages }
}

// ---------------------------------------------------------------------------
// Deck

pub const DECK_OK: &str = "SPICE code is valid and contains all required components.";

pub const MISSING_VDD: &str = "Error: Missing or incorrect VDD power supply definition";
pub const VDD_NOT_NUMBER: &str = "Error: VDD value must be a valid number";
pub const VDD_NOT_POSITIVE: &str = "Error: VDD value must be a positive number";
pub const MISSING_VIN: &str = "Error: Missing or incorrect input voltage source (VIN)";
pub const MISSING_PMOS: &str = "Error: Missing or incorrect PMOS transistor (M1) definition";
pub const PMOS_MISSING_WL: &str = "Error: PMOS transistor must have W and L parameters";
pub const MISSING_NMOS: &str = "Error: Missing or incorrect NMOS transistor (M2) definition";
pub const NMOS_MISSING_WL: &str = "Error: NMOS transistor must have W and L parameters";
pub const MISSING_NMOS_MODEL: &str = "Error: Missing NMOS model definition";
pub const MISSING_PMOS_MODEL: &str = "Error: Missing PMOS model definition";
pub const MISSING_ANALYSIS: &str = "Error: Missing analysis command (.DC or .TRAN)";
pub const MISSING_PRINT: &str = "Error: Missing .PRINT command for output variables";
pub const MISSING_END: &str = "Error: Missing .END statement";

pub static DECK_RULES: &[Rule<Deck>] = &[
    Rule {
        name: "power-supply",
        severity: Status::Error,
        check: check_supply,
    },
    Rule {
        name: "input-source",
        severity: Status::Error,
        check: check_input_source,
    },
    Rule {
        name: "pmos-device",
        severity: Status::Error,
        check: check_pmos,
    },
    Rule {
        name: "nmos-device",
        severity: Status::Error,
        check: check_nmos,
    },
    Rule {
        name: "nmos-model",
        severity: Status::Error,
        check: check_nmos_model,
    },
    Rule {
        name: "pmos-model",
        severity: Status::Error,
        check: check_pmos_model,
    },
    Rule {
        name: "analysis",
        severity: Status::Error,
        check: check_analysis,
    },
    Rule {
        name: "print",
        severity: Status::Error,
        check: check_print,
    },
    Rule {
        name: "end",
        severity: Status::Error,
        check: check_end,
    },
];

pub fn check_deck(text: &str) -> Feedback {
    let deck = parse_deck(text);
    let feedback = evaluate(DECK_RULES, &deck, DECK_OK);
    tracing::debug!(status = ?feedback.status, findings = feedback.messages.len(), "deck checked");
    feedback
}

fn check_supply(deck: &Deck) -> Option<&'static str> {
    let Some(line) = deck.find_with_tokens(&["VDD", "DC"]) else {
        return Some(MISSING_VDD);
    };
    match line.token_after("DC").and_then(parse_plain_number) {
        None => Some(VDD_NOT_NUMBER),
        Some(value) if value <= 0.0 => Some(VDD_NOT_POSITIVE),
        Some(_) => None,
    }
}

/// Number with an optional trailing `V`. Scale suffixes are not accepted
/// on the supply value.
fn parse_plain_number(token: &str) -> Option<f64> {
    let stripped = token.strip_suffix(['V', 'v']).unwrap_or(token);
    stripped.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn check_input_source(deck: &Deck) -> Option<&'static str> {
    match deck.find_with_tokens(&["VIN", "DC"]) {
        Some(_) => None,
        None => Some(MISSING_VIN),
    }
}

fn has_width_and_length(line: &DeckLine) -> bool {
    let numeric = |key: &str| {
        line.param(key)
            .and_then(|value| parse_number_with_suffix(&value))
            .is_some()
    };
    numeric("W") && numeric("L")
}

fn check_pmos(deck: &Deck) -> Option<&'static str> {
    match deck.find_with_tokens(&["M1", "PMOS"]) {
        None => Some(MISSING_PMOS),
        Some(line) if !has_width_and_length(line) => Some(PMOS_MISSING_WL),
        Some(_) => None,
    }
}

fn check_nmos(deck: &Deck) -> Option<&'static str> {
    match deck.find_with_tokens(&["M2", "NMOS"]) {
        None => Some(MISSING_NMOS),
        Some(line) if !has_width_and_length(line) => Some(NMOS_MISSING_WL),
        Some(_) => None,
    }
}

fn check_nmos_model(deck: &Deck) -> Option<&'static str> {
    (!deck.has_sequence(&[".MODEL", "NMOS", "NMOS"])).then_some(MISSING_NMOS_MODEL)
}

fn check_pmos_model(deck: &Deck) -> Option<&'static str> {
    (!deck.has_sequence(&[".MODEL", "PMOS", "PMOS"])).then_some(MISSING_PMOS_MODEL)
}

fn check_analysis(deck: &Deck) -> Option<&'static str> {
    let has_dc = deck.has_sequence(&[".DC", "VIN"]);
    let has_tran = deck
        .statements()
        .any(|line| line.token_after(".TRAN").is_some());
    (!has_dc && !has_tran).then_some(MISSING_ANALYSIS)
}

fn check_print(deck: &Deck) -> Option<&'static str> {
    let has_print =
        deck.has_sequence(&[".PRINT", "DC"]) || deck.has_sequence(&[".PRINT", "TRAN"]);
    (!has_print).then_some(MISSING_PRINT)
}

fn check_end(deck: &Deck) -> Option<&'static str> {
    match deck.last_line() {
        Some(line) if line.text.ends_with(".END") => None,
        _ => Some(MISSING_END),
    }
}

// ---------------------------------------------------------------------------
// Parameters

pub const PARAMS_OK: &str = "Parameters are within recommended ranges.";

pub const VDD_TOO_LOW: &str = "Warning: VDD below 1.8V may cause unreliable operation";
pub const VDD_TOO_HIGH: &str = "Warning: VDD above 3.3V may exceed transistor ratings";
pub const PMOS_WL_SMALL: &str = "PMOS W/L ratio is too small, may cause slow rise time";
pub const NMOS_WL_SMALL: &str = "NMOS W/L ratio is too small, may cause slow fall time";
pub const RATIO_ASYMMETRIC: &str =
    "PMOS/NMOS width ratio should be around 2:1 for symmetrical operation";
pub const LENGTH_TOO_SHORT: &str =
    "Warning: Channel length below 0.18µm may cause short-channel effects";

pub const VDD_MIN: f64 = 1.8;
pub const VDD_MAX: f64 = 3.3;
pub const PMOS_MIN_WL: f64 = 2.0;
pub const NMOS_MIN_WL: f64 = 1.0;
pub const RATIO_MIN: f64 = 1.5;
pub const RATIO_MAX: f64 = 2.5;
/// Shortest channel before short-channel effects dominate [um]
pub const MIN_LENGTH: f64 = 0.18;

pub static PARAMETER_RULES: &[Rule<DeviceParameters>] = &[
    Rule {
        name: "supply-range",
        severity: Status::Warning,
        check: |p| {
            if p.supply_voltage < VDD_MIN {
                Some(VDD_TOO_LOW)
            } else if p.supply_voltage > VDD_MAX {
                Some(VDD_TOO_HIGH)
            } else {
                None
            }
        },
    },
    Rule {
        name: "pmos-aspect",
        severity: Status::Warning,
        check: |p| (p.pmos().w_over_l() < PMOS_MIN_WL).then_some(PMOS_WL_SMALL),
    },
    Rule {
        name: "nmos-aspect",
        severity: Status::Warning,
        check: |p| (p.nmos().w_over_l() < NMOS_MIN_WL).then_some(NMOS_WL_SMALL),
    },
    Rule {
        name: "width-symmetry",
        severity: Status::Warning,
        check: |p| ratio_out_of_band(p).then_some(RATIO_ASYMMETRIC),
    },
    Rule {
        name: "channel-length",
        severity: Status::Warning,
        check: |p| (p.channel_length < MIN_LENGTH).then_some(LENGTH_TOO_SHORT),
    },
];

pub fn check_parameters(params: &DeviceParameters) -> Feedback {
    evaluate(PARAMETER_RULES, params, PARAMS_OK)
}

fn ratio_out_of_band(params: &DeviceParameters) -> bool {
    let ratio = params.width_ratio();
    ratio < RATIO_MIN || ratio > RATIO_MAX
}

// ---------------------------------------------------------------------------
// Results

pub const RESULTS_OK: &str = "Results show good performance characteristics.";

pub const VTC_ASYMMETRIC: &str = "The VTC curve shows asymmetry due to non-optimal Wp/Wn ratio";
pub const SLOW_RISE: &str = "Rise time is slow due to small PMOS width";
pub const SLOW_FALL: &str = "Fall time is slow due to small NMOS width";

/// Narrowest PMOS that still gives an acceptable rise time [um]
pub const PMOS_MIN_WIDTH: f64 = 1.5;
/// Narrowest NMOS that still gives an acceptable fall time [um]
pub const NMOS_MIN_WIDTH: f64 = 0.8;

pub static RESULT_RULES: &[Rule<DeviceParameters>] = &[
    Rule {
        name: "vtc-symmetry",
        severity: Status::Warning,
        check: |p| ratio_out_of_band(p).then_some(VTC_ASYMMETRIC),
    },
    Rule {
        name: "rise-time",
        severity: Status::Warning,
        check: |p| (p.p_width < PMOS_MIN_WIDTH).then_some(SLOW_RISE),
    },
    Rule {
        name: "fall-time",
        severity: Status::Warning,
        check: |p| (p.n_width < NMOS_MIN_WIDTH).then_some(SLOW_FALL),
    },
];

pub fn check_results(params: &DeviceParameters) -> Feedback {
    evaluate(RESULT_RULES, params, RESULTS_OK)
}
