//! Spoligotype resolution against the reference database.
//!
//! Matching is an exact lookup of the 43-bit binary code. All mismatch
//! tolerance happens upstream, when reads are counted against the spacers.
//!
//! | Outcome                     | Reported as                                  |
//! |-----------------------------|----------------------------------------------|
//! | Code in database            | Identifier of the last entry with that code  |
//! | All-zero code, not in DB    | `spoligo not found, binary all zeros, ...`   |
//! | Any other code, not in DB   | `Not Found`                                  |
//!
//! ## Example
//!
//! ```rust
//! use spoligotyper::matching::resolver::resolve;
//! use spoligotyper::{BinaryCode, Spoligotype, SpoligotypeDb};
//!
//! let ones = "1".repeat(43);
//! let db = SpoligotypeDb::from_text(&format!("SB0145 SB0145 {ones}\n")).unwrap();
//! let code = BinaryCode::new(ones).unwrap();
//!
//! assert_eq!(resolve(&code, &db), Spoligotype::Known("SB0145".to_string()));
//! ```

pub mod resolver;
