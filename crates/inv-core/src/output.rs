//! Curve output formatting (CSV).

use std::io::Write;

use crate::analysis::{DcReport, TranReport};
use crate::curve::Series;
use crate::error::{Error, Result};

/// Write series that share an x axis as CSV.
///
/// Format:
/// ```csv
/// time,Input,Output
/// 0,0,5
/// 0.1,0,5
/// ```
pub fn write_series_csv<W: Write>(x_label: &str, series: &[&Series], writer: &mut W) -> Result<()> {
    let rows = series.first().map(|s| s.len()).unwrap_or(0);
    for s in series {
        if s.len() != rows {
            return Err(Error::SeriesLengthMismatch {
                expected: rows,
                actual: s.len(),
            });
        }
    }

    write!(writer, "{}", x_label)?;
    for s in series {
        write!(writer, ",{}", s.name)?;
    }
    writeln!(writer)?;

    for i in 0..rows {
        write!(writer, "{}", series[0].points[i].x)?;
        for s in series {
            write!(writer, ",{}", s.points[i].y)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_dc_csv<W: Write>(report: &DcReport, writer: &mut W) -> Result<()> {
    write_series_csv("vin", &[report.vtc()?], writer)
}

pub fn write_tran_csv<W: Write>(report: &TranReport, writer: &mut W) -> Result<()> {
    write_series_csv("time", &[report.input()?, report.output()?], writer)
}
