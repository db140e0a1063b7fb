use inv_core::analysis::{run, run_dc, run_tran, AnalysisKind, AnalysisPlan, AnalysisReport};
use inv_core::curve::SeriesMode;
use inv_core::output::{write_dc_csv, write_tran_csv};
use inv_core::psf::write_psf_tran;
use inv_core::{DeviceParameters, Error};

#[test]
fn dc_report_bundles_threshold_and_curves() {
    let params = DeviceParameters::new(3.3, 2.0, 1.0, 0.18);
    let report = run_dc(&params);
    assert!((report.threshold.switching_threshold - 1.65).abs() < 1e-12);
    assert_eq!(report.series.len(), 2);
    assert_eq!(report.vtc().unwrap().name, "VTC");
    assert_eq!(report.vtc().unwrap().mode, SeriesMode::Lines);
    assert_eq!(report.series[1].mode, SeriesMode::Markers);
    assert_eq!(report.series[1].points.len(), 1);
    assert_eq!(report.layout.x_axis.range, [0.0, 3.3]);
}

#[test]
fn tran_report_bundles_delays_and_waveforms() {
    let report = run_tran(&DeviceParameters::new(5.0, 4.0, 1.0, 0.18));
    assert!((report.delays.fall_delay - 4.0).abs() < 1e-12);
    assert!((report.average_delay - 2.5).abs() < 1e-12);
    assert_eq!(report.input().unwrap().name, "Input");
    assert_eq!(report.output().unwrap().name, "Output");
    assert_eq!(report.input().unwrap().len(), report.output().unwrap().len());
}

#[test]
fn plan_dispatches_on_kind() {
    let plan = AnalysisPlan {
        kind: AnalysisKind::Tran,
        params: DeviceParameters::default(),
    };
    assert!(matches!(run(&plan), AnalysisReport::Tran(_)));
    let plan = AnalysisPlan {
        kind: AnalysisKind::Dc,
        ..plan
    };
    assert!(matches!(run(&plan), AnalysisReport::Dc(_)));
}

#[test]
fn analysis_kind_parses_from_cli_text() {
    assert_eq!("DC".parse::<AnalysisKind>().unwrap(), AnalysisKind::Dc);
    assert_eq!("transient".parse::<AnalysisKind>().unwrap(), AnalysisKind::Tran);
    assert!("ac".parse::<AnalysisKind>().is_err());
    assert_eq!(AnalysisKind::Tran.to_string(), "tran");
}

#[test]
fn report_serializes_with_analysis_tag() {
    let report = run(&AnalysisPlan {
        kind: AnalysisKind::Dc,
        params: DeviceParameters::default(),
    });
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["analysis"], "dc");
    assert_eq!(json["threshold"]["switching_threshold"], 2.5);
    assert_eq!(json["series"][1]["mode"], "markers");
}

#[test]
fn truncated_report_reports_missing_series() {
    let mut tran = run_tran(&DeviceParameters::default());
    tran.series.truncate(1);
    assert!(tran.input().is_ok());
    assert!(matches!(tran.output(), Err(Error::MissingSeries("Output"))));
    let mut buf = Vec::new();
    assert!(matches!(
        write_tran_csv(&tran, &mut buf),
        Err(Error::MissingSeries(_))
    ));
    assert!(matches!(
        write_psf_tran(&tran, &mut buf, 6),
        Err(Error::MissingSeries(_))
    ));

    let mut dc = run_dc(&DeviceParameters::default());
    dc.series.clear();
    assert!(matches!(dc.vtc(), Err(Error::MissingSeries("VTC"))));
    assert!(write_dc_csv(&dc, &mut buf).is_err());
}
