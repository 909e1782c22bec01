//! Tab-delimited spoligotyping report.
//!
//! ```text
//! Sample	SpacerCount	Binary	Octal	Hexadecimal	Spoligotype
//! S1	0:12:40:...	011...	377...	3F-...	SB0145
//! ```
//!
//! Spacer counts are joined with `:` in canonical spacer order. The
//! `Hexadecimal` column is present only when the run includes hex codes.

use std::path::{Path, PathBuf};

use crate::pipeline::SpoligotypeReport;
use crate::utils::validation::validate_filename;

/// Suffix of per-sample report files
pub const REPORT_SUFFIX: &str = "_spoligotyping.txt";

/// Report header line, without trailing newline
#[must_use]
pub fn header(include_hex: bool) -> String {
    if include_hex {
        "Sample\tSpacerCount\tBinary\tOctal\tHexadecimal\tSpoligotype".to_string()
    } else {
        "Sample\tSpacerCount\tBinary\tOctal\tSpoligotype".to_string()
    }
}

/// One report data line, without trailing newline
#[must_use]
pub fn row(report: &SpoligotypeReport) -> String {
    let counts = report
        .spacer_counts
        .counts()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(":");

    let mut fields = vec![
        report.sample.clone(),
        counts,
        report.binary.to_string(),
        report.octal.to_string(),
    ];
    if let Some(hex) = &report.hexadecimal {
        fields.push(hex.to_string());
    }
    fields.push(report.spoligotype_label.clone());

    fields.join("\t")
}

/// Write `<dir>/<sample>_spoligotyping.txt`, returning its path
///
/// # Errors
///
/// Returns an `InvalidInput` IO error if the sample name is not a safe file
/// name, or any IO error from writing the file.
pub fn write_report(dir: &Path, report: &SpoligotypeReport) -> std::io::Result<PathBuf> {
    validate_filename(&report.sample)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let path = dir.join(format!("{}{REPORT_SUFFIX}", report.sample));
    let content = format!(
        "{}\n{}\n",
        header(report.hexadecimal.is_some()),
        row(report)
    );
    std::fs::write(&path, content)?;
    Ok(path)
}
