//! Terminal formatting of reports and feedback.

use inv_core::analysis::{DcReport, TranReport};
use inv_core::checker::{Feedback, Status};

pub fn print_dc_report(report: &DcReport) {
    let p = &report.params;
    let t = &report.threshold;
    println!(
        "dc analysis: VDD={} Wp={}u Wn={}u L={}u (Wp/Wn={:.2})",
        p.supply_voltage,
        p.p_width,
        p.n_width,
        p.channel_length,
        p.width_ratio()
    );
    print_row("Switching Threshold (VM)", t.switching_threshold, "V");
    print_row("Low Input Voltage (VIL)", t.v_il, "V");
    print_row("High Input Voltage (VIH)", t.v_ih, "V");
    print_row("Low Output Voltage (VOL)", t.v_ol, "V");
    print_row("High Output Voltage (VOH)", t.v_oh, "V");
    print_row("Low Noise Margin (NML)", t.low_noise_margin, "V");
    print_row("High Noise Margin (NMH)", t.high_noise_margin, "V");
    println!("VTC: {} points", report.vtc().map_or(0, |s| s.len()));
}

pub fn print_tran_report(report: &TranReport) {
    let p = &report.params;
    println!(
        "tran analysis: VDD={} Wp={}u Wn={}u (Wp/Wn={:.2})",
        p.supply_voltage,
        p.p_width,
        p.n_width,
        p.width_ratio()
    );
    print_row("Low-to-High Propagation Delay (tPLH)", report.delays.rise_delay, "ns");
    print_row("High-to-Low Propagation Delay (tPHL)", report.delays.fall_delay, "ns");
    print_row("Average Propagation Delay (tP)", report.average_delay, "ns");
    println!("waveform: {} points", report.output().map_or(0, |s| s.len()));
}

fn print_row(label: &str, value: f64, unit: &str) {
    println!("  {:<38} {:>8.2} {}", label, value, unit);
}

pub fn print_feedback(title: &str, feedback: &Feedback) {
    let status = match feedback.status {
        Status::Success => "success",
        Status::Warning => "warning",
        Status::Error => "error",
    };
    println!("{}: {}", title, status);
    for message in &feedback.messages {
        println!("  - {}", message);
    }
}
