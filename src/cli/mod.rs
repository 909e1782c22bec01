//! Command-line interface for spoligotyper.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **type**: Spoligotype samples from spacer count stats files
//! - **encode**: Convert a binary code to octal and hexadecimal
//! - **database**: Summarize a spoligotype database or look up an identifier
//!
//! ## Usage
//!
//! ```text
//! # Type one sample from a seal.sh stats file
//! spoligotyper type S1_stats.tsv --database spoligotype_db.txt
//!
//! # Several samples, writing <sample>_spoligotyping.txt reports
//! spoligotyper type out/*_stats.tsv --database spoligotype_db.txt --output results/
//!
//! # JSON output for scripting
//! spoligotyper --format json type S1_stats.tsv --database spoligotype_db.txt
//!
//! # Encode a binary code
//! spoligotyper encode 1101111101111110111111111111111111111100000
//! ```

use clap::{Parser, Subcommand};

use crate::core::binarize::ThresholdPolicy;

pub mod database;
pub mod encode;
pub mod typing;

#[derive(Parser)]
#[command(name = "spoligotyper")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "In-silico spoligotyping of Mycobacterium tuberculosis complex isolates")]
#[command(
    long_about = "spoligotyper calls the presence or absence of the 43 standard spacers from read counts, encodes the pattern as binary, octal and hexadecimal codes, and looks the binary code up in a spoligotype database to report an SB identifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spoligotype samples from spacer count stats files
    #[command(name = "type")]
    Type(typing::TypeArgs),

    /// Convert a 43-bit binary code to octal and hexadecimal
    Encode(encode::EncodeArgs),

    /// Inspect a spoligotype database
    Database(database::DatabaseArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Threshold comparison as spelled on the command line
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ThresholdPolicyArg {
    /// Present when count > threshold
    #[default]
    GreaterThan,
    /// Present when count >= threshold
    AtLeast,
}

impl From<ThresholdPolicyArg> for ThresholdPolicy {
    fn from(arg: ThresholdPolicyArg) -> Self {
        match arg {
            ThresholdPolicyArg::GreaterThan => Self::GreaterThan,
            ThresholdPolicyArg::AtLeast => Self::AtLeast,
        }
    }
}
