use inv_core::analysis::{run_dc, run_tran};
use inv_core::output::{write_dc_csv, write_series_csv, write_tran_csv};
use inv_core::psf::{validate_precision, write_psf_dc, write_psf_tran};
use inv_core::{DeviceParameters, Error};

#[test]
fn psf_dc_output_format() {
    let report = run_dc(&DeviceParameters::default());
    let mut buf = Vec::new();
    write_psf_dc(&report, &mut buf, 6).unwrap();
    let content = String::from_utf8(buf).unwrap();

    assert!(content.starts_with("PSF_TEXT\n"));
    assert!(content.contains("[DC Analysis]"));
    assert!(content.contains("points = 501"));
    assert!(content.contains("[Signals]\n- V(in)\n- V(out)\n"));
    assert!(content.contains("[Data]\n0.000000e0 5.000000e0\n"));
    let data_rows = content
        .lines()
        .skip_while(|line| *line != "[Data]")
        .skip(1)
        .count();
    assert_eq!(data_rows, 501);
}

#[test]
fn psf_tran_output_format() {
    let report = run_tran(&DeviceParameters::default());
    let mut buf = Vec::new();
    write_psf_tran(&report, &mut buf, 3).unwrap();
    let content = String::from_utf8(buf).unwrap();

    assert!(content.contains("[Transient Analysis]"));
    assert!(content.contains("points = 1001"));
    assert!(content.contains("- time\n- V(in)\n- V(out)\n"));
    assert!(content.contains("[Data]\n0.000e0 0.000e0 5.000e0\n"));
}

#[test]
fn precision_is_bounded() {
    assert!(validate_precision(1).is_ok());
    assert!(validate_precision(15).is_ok());
    assert!(matches!(validate_precision(0), Err(Error::InvalidPrecision(0))));
    let report = run_dc(&DeviceParameters::default());
    let mut buf = Vec::new();
    assert!(write_psf_dc(&report, &mut buf, 16).is_err());
    assert!(buf.is_empty());
}

#[test]
fn precision_counts_digits_after_the_point() {
    let report = run_dc(&DeviceParameters::default());
    let mut buf = Vec::new();
    write_psf_dc(&report, &mut buf, 1).unwrap();
    let content = String::from_utf8(buf).unwrap();
    assert!(content.contains("[Data]\n0.0e0 5.0e0\n"));
}

#[test]
fn csv_has_header_and_rows() {
    let report = run_tran(&DeviceParameters::default());
    let mut buf = Vec::new();
    write_tran_csv(&report, &mut buf).unwrap();
    let content = String::from_utf8(buf).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("time,Input,Output"));
    assert_eq!(lines.next(), Some("0,0,5"));
    assert_eq!(content.lines().count(), 1002);

    let dc = run_dc(&DeviceParameters::default());
    let mut buf = Vec::new();
    write_dc_csv(&dc, &mut buf).unwrap();
    assert!(String::from_utf8(buf).unwrap().starts_with("vin,VTC\n0,5\n"));
}

#[test]
fn csv_rejects_mismatched_series() {
    let dc = run_dc(&DeviceParameters::default());
    let mut buf = Vec::new();
    // the VM marker has a single point
    let result = write_series_csv("vin", &[&dc.series[0], &dc.series[1]], &mut buf);
    assert!(matches!(
        result,
        Err(Error::SeriesLengthMismatch {
            expected: 501,
            actual: 1
        })
    ));
}
