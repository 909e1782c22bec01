//! Reader for spacer panel FASTA files using noodles.
//!
//! Only record names are used; they identify the spacers the external counter
//! was run against. Plain and gzip/bgzip compressed files are supported.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::core::spacer::SPACER_COUNT;
use crate::parsing::ParseError;

/// Upper bound on records read from a spacer FASTA
const MAX_SPACER_RECORDS: usize = SPACER_COUNT * 100;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read spacer names (record names, without description) from a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// a record is malformed, `ParseError::InvalidFormat` if there are no records, or
/// `ParseError::TooManyRecords` if the file is far larger than a spacer panel.
pub fn read_spacer_names(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let mut reader = fasta::io::Reader::new(BufReader::new(GzDecoder::new(file)));
        read_names(&mut reader)
    } else {
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        read_names(&mut reader)
    }
}

fn read_names<R: BufRead>(reader: &mut fasta::io::Reader<R>) -> Result<Vec<String>, ParseError> {
    let mut names = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if names.len() >= MAX_SPACER_RECORDS {
            return Err(ParseError::TooManyRecords(names.len()));
        }

        names.push(String::from_utf8_lossy(record.name()).to_string());
    }

    if names.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in spacer FASTA file".to_string(),
        ));
    }

    Ok(names)
}
