use std::io::Write;

use crate::analysis::{AnalysisKind, DcReport, TranReport};
use crate::curve::Series;
use crate::error::{Error, Result};

/// Precision counts digits after the decimal point of the mantissa, so
/// precision 6 prints values like `2.500000e0`.
pub fn validate_precision(precision: usize) -> Result<usize> {
    if (1..=15).contains(&precision) {
        Ok(precision)
    } else {
        Err(Error::InvalidPrecision(precision))
    }
}

/// Write sampled signals sharing one sweep axis as PSF text.
///
/// The x values of the first signal are the sweep column; every other
/// signal must have the same number of points.
pub fn write_psf_signals<W: Write>(
    writer: &mut W,
    analysis: AnalysisKind,
    sweep_name: &str,
    signals: &[(&str, &Series)],
    precision: usize,
) -> Result<()> {
    let precision = validate_precision(precision)?;
    let points = signals.first().map(|(_, s)| s.len()).unwrap_or(0);
    for (_, series) in signals {
        if series.len() != points {
            return Err(Error::SeriesLengthMismatch {
                expected: points,
                actual: series.len(),
            });
        }
    }

    writeln!(writer, "PSF_TEXT")?;
    match analysis {
        AnalysisKind::Dc => writeln!(writer, "[DC Analysis]")?,
        AnalysisKind::Tran => writeln!(writer, "[Transient Analysis]")?,
    }
    writeln!(writer, "sweep = {}", sweep_name)?;
    writeln!(writer, "points = {}", points)?;
    writeln!(writer, "[Signals]")?;
    writeln!(writer, "- {}", sweep_name)?;
    for (name, _) in signals {
        writeln!(writer, "- {}", name)?;
    }
    writeln!(writer, "[Data]")?;
    for i in 0..points {
        let x = signals[0].1.points[i].x;
        write!(writer, "{:.*e}", precision, x)?;
        for (_, series) in signals {
            write!(writer, " {:.*e}", precision, series.points[i].y)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_psf_dc<W: Write>(report: &DcReport, writer: &mut W, precision: usize) -> Result<()> {
    write_psf_signals(
        writer,
        AnalysisKind::Dc,
        "V(in)",
        &[("V(out)", report.vtc()?)],
        precision,
    )
}

pub fn write_psf_tran<W: Write>(
    report: &TranReport,
    writer: &mut W,
    precision: usize,
) -> Result<()> {
    write_psf_signals(
        writer,
        AnalysisKind::Tran,
        "time",
        &[("V(in)", report.input()?), ("V(out)", report.output()?)],
        precision,
    )
}
