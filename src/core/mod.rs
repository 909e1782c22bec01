//! Core data types and transformations for spoligotyping.
//!
//! - [`spacer`]: The canonical 43-spacer panel and [`SpacerCountMap`]
//! - [`binarize`]: Threshold-based presence calling, producing a [`BinaryCode`]
//! - [`encoding`]: Octal and hexadecimal renderings of a [`BinaryCode`]
//! - [`types`]: [`Spoligotype`] lookup outcomes and how misses are reported
//!
//! ## Code Layout
//!
//! Every derived string is positional over the canonical spacer order:
//!
//! | Code   | Length | Grouping                                  |
//! |--------|--------|-------------------------------------------|
//! | Binary | 43     | one character per spacer                  |
//! | Octal  | 15     | 3-bit groups, final group is spacer 43    |
//! | Hex    | 17     | 6 fields of widths 7,7,7,7,8,7 bits       |
//!
//! [`SpacerCountMap`]: spacer::SpacerCountMap
//! [`BinaryCode`]: code::BinaryCode
//! [`Spoligotype`]: types::Spoligotype

pub mod binarize;
pub mod code;
pub mod encoding;
pub mod spacer;
pub mod types;
