//! Parsers for the files that surround the spoligotyping pipeline.
//!
//! - **Counter stats files**: per-spacer read counts written by BBTools `seal.sh`/`bbduk.sh`
//! - **Spacer FASTA files**: the spacer panel the counter was run against
//!
//! ## Example
//!
//! ```rust,no_run
//! use spoligotyper::parsing::stats::parse_stats_file;
//! use std::path::Path;
//!
//! let rows = parse_stats_file(Path::new("sample_stats.tsv")).unwrap();
//! for (spacer, reads) in rows {
//!     println!("{spacer}\t{reads}");
//! }
//! ```

use thiserror::Error;

pub mod fasta;
pub mod stats;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed")]
    TooManyRecords(usize),
}
