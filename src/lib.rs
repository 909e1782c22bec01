//! # spoligotyper
//!
//! In-silico spoligotyping for Mycobacterium tuberculosis complex isolates.
//!
//! Spoligotyping classifies isolates by which of 43 short "spacer" sequences
//! in the direct repeat locus are present. Given per-spacer read counts from
//! whole-genome sequencing data, `spoligotyper`:
//!
//! 1. Calls each spacer present or absent against a detection threshold
//! 2. Encodes the pattern as a 43-character binary code
//! 3. Renders the code as 15 octal digits and as six hexadecimal fields
//! 4. Looks the binary code up in a spoligotype database to report an SB identifier
//!
//! Counting reads against the spacer sequences is left to an external tool
//! (e.g. BBTools `seal.sh`); this crate consumes its stats output.
//!
//! ## Example
//!
//! ```rust
//! use spoligotyper::{SpacerCountMap, Spoligotyper, SpoligotypeDb, TypingConfig};
//!
//! let db = SpoligotypeDb::from_text(&format!("SB0145 SB0145 {}\n", "1".repeat(43))).unwrap();
//! let counts = SpacerCountMap::from_counts(vec![25; 43]).unwrap();
//!
//! let report = Spoligotyper::new(&db, TypingConfig::default()).type_counts("S1", counts);
//! assert_eq!(report.octal.as_str(), "777777777777771");
//! assert_eq!(report.spoligotype_label, "SB0145");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Spacer panel, binary codes, binarization, and octal/hex encoding
//! - [`catalog`]: Spoligotype database loading and indexing
//! - [`matching`]: Binary code → spoligotype resolution
//! - [`counting`]: The spacer counting contract and a stats-file counter
//! - [`parsing`]: Parsers for counter stats files and spacer FASTA files
//! - [`pipeline`]: Per-sample pipeline and run configuration
//! - [`report`]: Tab-delimited report files
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod counting;
pub mod matching;
pub mod parsing;
pub mod pipeline;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::SpoligotypeDb;
pub use crate::core::binarize::{binarize, ThresholdPolicy};
pub use crate::core::code::{BinaryCode, HexCode, OctalCode};
pub use crate::core::encoding::{to_hex, to_octal};
pub use crate::core::spacer::{SpacerCountMap, SPACER_NAMES};
pub use crate::core::types::{MissReporting, Spoligotype};
pub use matching::resolver::resolve;
pub use pipeline::{SpoligotypeReport, Spoligotyper, TypingConfig};
