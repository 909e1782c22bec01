//! Spacer counting contract.
//!
//! Reads are matched against the 43 spacer sequences by an external tool
//! (k-mer matching with at most one mismatch, reverse complements included).
//! This crate only consumes the result: a [`SpacerCounter`] turns one sample's
//! counting output into a validated [`SpacerCountMap`].
//!
//! Counting is a blocking call. No timeout or retry is applied here; a failure
//! is a hard failure for that sample.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::spacer::SpacerCountMap;
use crate::parsing::stats::parse_stats_file;
use crate::parsing::ParseError;
use crate::utils::validation::ValidationError;

/// Failure of the external counting step for one sample
#[derive(Error, Debug)]
pub enum CountError {
    #[error("Spacer counting failed for sample '{sample}': {message}")]
    ToolFailed { sample: String, message: String },

    #[error("Unreadable counting output for sample '{sample}': {source}")]
    Unparseable {
        sample: String,
        #[source]
        source: ParseError,
    },

    #[error("Invalid counting output for sample '{sample}': {source}")]
    Invalid {
        sample: String,
        #[source]
        source: ValidationError,
    },
}

/// One sample to be typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleInput {
    /// Sample name used in reports
    pub name: String,

    /// Counter-specific input (for [`StatsFileCounter`], the stats file)
    pub source: PathBuf,
}

impl SampleInput {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Name a sample after its stats file: `S1_stats.tsv` becomes `S1`.
    #[must_use]
    pub fn from_stats_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let name = stem
            .strip_suffix("_stats")
            .filter(|s| !s.is_empty())
            .map_or_else(|| stem.clone(), str::to_string);
        Self::new(name, path)
    }
}

/// Produces per-spacer counts for a sample
pub trait SpacerCounter {
    /// Count spacer occurrences for one sample.
    ///
    /// # Errors
    ///
    /// Returns a `CountError` if the counts cannot be produced or are invalid.
    fn count_spacers(&self, sample: &SampleInput) -> Result<SpacerCountMap, CountError>;
}

/// Reads counts from a BBTools stats file left by a previous counting run.
///
/// Spacers missing from the file are counted as zero; unknown or repeated
/// spacer names fail the sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsFileCounter;

impl SpacerCounter for StatsFileCounter {
    fn count_spacers(&self, sample: &SampleInput) -> Result<SpacerCountMap, CountError> {
        debug!(
            "Reading spacer counts for {} from {}",
            sample.name,
            sample.source.display()
        );

        if !sample.source.exists() {
            return Err(CountError::ToolFailed {
                sample: sample.name.clone(),
                message: format!("stats file {} not found", sample.source.display()),
            });
        }

        let rows = parse_stats_file(&sample.source).map_err(|source| CountError::Unparseable {
            sample: sample.name.clone(),
            source,
        })?;

        SpacerCountMap::zero_filled(rows).map_err(|source| CountError::Invalid {
            sample: sample.name.clone(),
            source,
        })
    }
}
