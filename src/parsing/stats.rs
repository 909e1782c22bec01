//! Parser for BBTools (`seal.sh` / `bbduk.sh`) `stats=` output.
//!
//! ```text
//! #File	SRR16058435_R1.fastq.gz
//! #Total	822714
//! #Matched	799	0.09712%
//! #Name	Reads	ReadsPct
//! spacer25	62	0.00754%
//! spacer02	48	0.00583%
//! ```
//!
//! Header lines start with `#`. Data rows are tab-separated with the reference
//! name in column 1 and the read count in column 2. Spacers with no hits may be
//! omitted entirely.

use std::path::Path;

use crate::parsing::ParseError;

/// Parse a stats file into `(name, reads)` pairs in file order
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_stats_file(path: &Path) -> Result<Vec<(String, u64)>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_stats_text(&content)
}

/// Parse stats text into `(name, reads)` pairs in file order
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a data row has fewer than 2 fields or
/// a read count that is not a non-negative integer.
pub fn parse_stats_text(text: &str) -> Result<Vec<(String, u64)>, ParseError> {
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_num = i + 1;
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        let reads: u64 = fields[1].trim().parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid read count on line {}: '{}'",
                line_num, fields[1]
            ))
        })?;

        rows.push((fields[0].trim().to_string(), reads));
    }

    Ok(rows)
}
