use std::fmt;
use std::str::FromStr;

use inv_devices::DeviceParameters;
use serde::{Deserialize, Serialize};

use crate::curve::{transient_points, vtc_marker, vtc_points, PlotLayout, Series};
use crate::delay::{evaluate_delay, DelayResult};
use crate::error::{Error, Result};
use crate::threshold::{evaluate_threshold, ThresholdResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Dc,
    Tran,
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisKind::Dc => f.write_str("dc"),
            AnalysisKind::Tran => f.write_str("tran"),
        }
    }
}

impl FromStr for AnalysisKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dc" => Ok(AnalysisKind::Dc),
            "tran" | "transient" => Ok(AnalysisKind::Tran),
            _ => Err(Error::UnknownAnalysis(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisPlan {
    pub kind: AnalysisKind,
    pub params: DeviceParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcReport {
    pub params: DeviceParameters,
    pub threshold: ThresholdResult,
    /// VTC line followed by the VM marker
    pub series: Vec<Series>,
    pub layout: PlotLayout,
}

impl DcReport {
    pub fn vtc(&self) -> Result<&Series> {
        self.series.first().ok_or(Error::MissingSeries("VTC"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranReport {
    pub params: DeviceParameters,
    pub delays: DelayResult,
    pub average_delay: f64,
    /// Input followed by output waveform
    pub series: Vec<Series>,
    pub layout: PlotLayout,
}

impl TranReport {
    pub fn input(&self) -> Result<&Series> {
        self.series.first().ok_or(Error::MissingSeries("Input"))
    }

    pub fn output(&self) -> Result<&Series> {
        self.series.get(1).ok_or(Error::MissingSeries("Output"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "analysis", rename_all = "lowercase")]
pub enum AnalysisReport {
    Dc(DcReport),
    Tran(TranReport),
}

pub fn run(plan: &AnalysisPlan) -> AnalysisReport {
    match plan.kind {
        AnalysisKind::Dc => AnalysisReport::Dc(run_dc(&plan.params)),
        AnalysisKind::Tran => AnalysisReport::Tran(run_tran(&plan.params)),
    }
}

pub fn run_dc(params: &DeviceParameters) -> DcReport {
    let _span = tracing::info_span!("dc_analysis").entered();
    let threshold = evaluate_threshold(params);
    let vdd = params.supply_voltage;
    let vm = threshold.switching_threshold;
    tracing::debug!(vdd, ratio = params.width_ratio(), vm, "switching threshold");

    let series = vec![
        Series::lines("VTC", "blue", vtc_points(vdd, vm)),
        Series::markers("VM", "red", vec![vtc_marker(vdd, vm)]),
    ];
    tracing::info!(points = series[0].len(), "dc curve generated");

    DcReport {
        params: *params,
        threshold,
        series,
        layout: PlotLayout::vtc(vdd),
    }
}

pub fn run_tran(params: &DeviceParameters) -> TranReport {
    let _span = tracing::info_span!("tran_analysis").entered();
    let delays = evaluate_delay(params.p_width, params.n_width);
    tracing::debug!(
        rise = delays.rise_delay,
        fall = delays.fall_delay,
        "propagation delays"
    );

    let curves = transient_points(params.supply_voltage);
    let series = vec![
        Series::lines("Input", "blue", curves.input),
        Series::lines("Output", "red", curves.output),
    ];
    tracing::info!(points = series[0].len(), "transient curves generated");

    TranReport {
        params: *params,
        delays,
        average_delay: delays.average(),
        series,
        layout: PlotLayout::transient(params.supply_voltage),
    }
}
