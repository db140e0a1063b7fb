//! Sampled curves for the plotting front end.
//!
//! Both curves are closed-form shapes, not solved waveforms. Each call
//! materialises the full point list.

use serde::{Deserialize, Serialize};

pub const VTC_STEP: f64 = 0.01;
/// Half-width of the band around VM where the logistic transition is drawn [V]
pub const VTC_TRANSITION_BAND: f64 = 0.8;
pub const VTC_STEEPNESS: f64 = 5.0;

pub const TRAN_STOP: f64 = 100.0;
pub const TRAN_STEP: f64 = 0.1;
/// Input square wave: period 40 ns, 50% duty.
pub const INPUT_HALF_PERIOD: f64 = 20.0;
/// Output hold after the input falls, before the output starts rising [ns]
pub const RISE_HOLD: f64 = 2.0;
/// Output hold after the input rises, before the output starts falling [ns]
pub const FALL_HOLD: f64 = 1.5;
pub const RAMP_DURATION: f64 = 3.0;
/// Plot window of the transient view [ns]
pub const TRAN_VIEW_STOP: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMode {
    Lines,
    Markers,
}

/// A labelled point sequence, one trace in the rendered plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub mode: SeriesMode,
    pub color: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn lines(name: &str, color: &str, points: Vec<Point>) -> Self {
        Self {
            name: name.to_string(),
            mode: SeriesMode::Lines,
            color: color.to_string(),
            points,
        }
    }

    pub fn markers(name: &str, color: &str, points: Vec<Point>) -> Self {
        Self {
            name: name.to_string(),
            mode: SeriesMode::Markers,
            color: color.to_string(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub range: [f64; 2],
}

/// Declarative layout handed to the renderer alongside the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl PlotLayout {
    pub fn vtc(supply_voltage: f64) -> Self {
        Self {
            title: "Voltage Transfer Characteristic (VTC)".to_string(),
            x_axis: Axis {
                title: "Input Voltage (V)".to_string(),
                range: [0.0, supply_voltage],
            },
            y_axis: Axis {
                title: "Output Voltage (V)".to_string(),
                range: [0.0, supply_voltage],
            },
        }
    }

    pub fn transient(supply_voltage: f64) -> Self {
        Self {
            title: "Transient Response".to_string(),
            x_axis: Axis {
                title: "Time (ns)".to_string(),
                range: [0.0, TRAN_VIEW_STOP],
            },
            y_axis: Axis {
                title: "Voltage (V)".to_string(),
                range: [0.0, supply_voltage],
            },
        }
    }
}

/// Number of samples on `[0, stop]` with spacing `step`, endpoint included
/// when `stop` is a multiple of `step`.
fn sample_count(stop: f64, step: f64) -> usize {
    let steps = (stop / step + 1e-9).floor();
    if steps.is_finite() && steps > 0.0 {
        steps as usize + 1
    } else {
        1
    }
}

/// Output voltage of the approximated VTC at input `x`.
pub fn vtc_value(x: f64, supply_voltage: f64, switching_threshold: f64) -> f64 {
    if x < switching_threshold - VTC_TRANSITION_BAND {
        supply_voltage
    } else if x > switching_threshold + VTC_TRANSITION_BAND {
        0.0
    } else {
        supply_voltage / (1.0 + (VTC_STEEPNESS * (x - switching_threshold)).exp())
    }
}

pub fn vtc_points(supply_voltage: f64, switching_threshold: f64) -> Vec<Point> {
    (0..sample_count(supply_voltage, VTC_STEP))
        .map(|i| {
            let x = i as f64 * VTC_STEP;
            Point {
                x,
                y: vtc_value(x, supply_voltage, switching_threshold),
            }
        })
        .collect()
}

/// The single (VM, VDD/2) marker drawn over the VTC.
pub fn vtc_marker(supply_voltage: f64, switching_threshold: f64) -> Point {
    Point {
        x: switching_threshold,
        y: supply_voltage / 2.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransientCurves {
    pub input: Vec<Point>,
    pub output: Vec<Point>,
}

/// Square-wave input and the inverted, lagged output.
///
/// The hold and ramp times are fixed and do not follow
/// [`crate::delay::evaluate_delay`].
pub fn transient_points(supply_voltage: f64) -> TransientCurves {
    let count = sample_count(TRAN_STOP, TRAN_STEP);
    let half_period_steps = (INPUT_HALF_PERIOD / TRAN_STEP).round() as usize;

    let mut input = Vec::with_capacity(count);
    let mut output: Vec<Point> = Vec::with_capacity(count);
    let mut last_high: Option<bool> = None;
    let mut transition_time = -100.0;

    for i in 0..count {
        let t = i as f64 * TRAN_STEP;
        let high = (i / half_period_steps) % 2 == 1;
        let vin = if high { supply_voltage } else { 0.0 };

        match last_high {
            Some(prev) if prev != high => {
                transition_time = t;
                last_high = Some(high);
            }
            None => last_high = Some(high),
            _ => {}
        }

        let vout = if high {
            let start = transition_time + FALL_HOLD;
            if t < start {
                output.last().map(|p| p.y).unwrap_or(supply_voltage)
            } else if t < start + RAMP_DURATION {
                supply_voltage * (1.0 - (t - start) / RAMP_DURATION)
            } else {
                0.0
            }
        } else {
            let start = transition_time + RISE_HOLD;
            if t < start {
                output.last().map(|p| p.y).unwrap_or(0.0)
            } else if t < start + RAMP_DURATION {
                supply_voltage * (t - start) / RAMP_DURATION
            } else {
                supply_voltage
            }
        };

        input.push(Point { x: t, y: vin });
        output.push(Point { x: t, y: vout });
    }

    TransientCurves { input, output }
}
