//! Spoligotype reference database.
//!
//! The database is a plain-text table mapping 43-bit binary codes to
//! spoligotype identifiers (SB codes), one entry per line:
//!
//! ```text
//! SB0145 SB0145 1111111111111111111111111111111111111111111
//! SB0120 SB0120 1101111101111110111111111111111111111100000
//! ```
//!
//! Only the second (identifier) and third (binary code) fields are used.
//!
//! ## Example
//!
//! ```rust,no_run
//! use spoligotyper::SpoligotypeDb;
//! use std::path::Path;
//!
//! let db = SpoligotypeDb::load_from_file(Path::new("spoligotype_db.txt")).unwrap();
//! println!("{} entries, {} distinct codes", db.len(), db.distinct_codes());
//! ```

pub mod store;
