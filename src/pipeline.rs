//! Per-sample spoligotyping pipeline.
//!
//! counts → [`binarize`] → [`to_octal`] / [`to_hex`] → [`resolve`]
//!
//! Each stage feeds only the next one, so the pipeline is a plain sequence of
//! pure transformations. Only the binarizer depends on the threshold settings.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::store::SpoligotypeDb;
use crate::core::binarize::{binarize, ThresholdPolicy, DEFAULT_THRESHOLD};
use crate::core::code::{BinaryCode, HexCode, OctalCode};
use crate::core::encoding::{to_hex, to_octal};
use crate::core::spacer::{SpacerCountMap, SPACER_PANEL_VERSION};
use crate::core::types::{MissReporting, Spoligotype};
use crate::counting::{CountError, SampleInput, SpacerCounter};
use crate::matching::resolver::resolve;
use crate::utils::time::format_elapsed;

/// Settings for one typing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    /// Detection threshold applied to each spacer count
    pub threshold: u64,
    /// Comparison used against `threshold`
    pub policy: ThresholdPolicy,
    /// Whether reports carry the hexadecimal code
    pub include_hex: bool,
    /// Whether the all-zeros miss gets its own label
    pub miss_reporting: MissReporting,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            policy: ThresholdPolicy::default(),
            include_hex: true,
            miss_reporting: MissReporting::default(),
        }
    }
}

/// Everything the report assembler needs for one sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpoligotypeReport {
    pub sample: String,

    /// Version of the canonical spacer order the counts and code follow
    pub spacer_panel_version: &'static str,

    /// Counts in canonical spacer order
    pub spacer_counts: SpacerCountMap,

    pub binary: BinaryCode,
    pub octal: OctalCode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hexadecimal: Option<HexCode>,

    #[serde(skip)]
    pub spoligotype: Spoligotype,

    /// Rendered spoligotype, with misses labelled per [`MissReporting`]
    #[serde(rename = "spoligotype")]
    pub spoligotype_label: String,
}

/// Runs the pipeline against one database with fixed settings
pub struct Spoligotyper<'a> {
    db: &'a SpoligotypeDb,
    config: TypingConfig,
}

impl<'a> Spoligotyper<'a> {
    #[must_use]
    pub fn new(db: &'a SpoligotypeDb, config: TypingConfig) -> Self {
        Self { db, config }
    }

    #[must_use]
    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    /// Type a sample from counts already in hand
    #[must_use]
    pub fn type_counts(&self, sample: &str, counts: SpacerCountMap) -> SpoligotypeReport {
        let binary = binarize(&counts, self.config.threshold, self.config.policy);
        debug!(
            "{sample}: {} of 43 spacers present (count {} {})",
            binary.present_count(),
            self.config.policy,
            self.config.threshold
        );

        let octal = to_octal(&binary);
        let hexadecimal = self.config.include_hex.then(|| to_hex(&binary));

        let spoligotype = resolve(&binary, self.db);
        match &spoligotype {
            Spoligotype::AllZeros => warn!(
                "{sample}: no spacer detected (total spacer reads: {}); check coverage and species",
                counts.total()
            ),
            Spoligotype::NotFound => debug!("{sample}: binary code {binary} not in database"),
            Spoligotype::Known(_) => {}
        }

        SpoligotypeReport {
            sample: sample.to_string(),
            spacer_panel_version: SPACER_PANEL_VERSION,
            spacer_counts: counts,
            spoligotype_label: spoligotype.label(self.config.miss_reporting).to_string(),
            binary,
            octal,
            hexadecimal,
            spoligotype,
        }
    }

    /// Count spacers with `counter`, then type the sample
    ///
    /// # Errors
    ///
    /// Returns the counter's `CountError`; nothing after counting can fail.
    pub fn type_sample<C: SpacerCounter + ?Sized>(
        &self,
        counter: &C,
        sample: &SampleInput,
    ) -> Result<SpoligotypeReport, CountError> {
        let start = Instant::now();
        let counts = counter.count_spacers(sample)?;
        let report = self.type_counts(&sample.name, counts);
        info!(
            "{}: {} ({})",
            sample.name,
            report.spoligotype_label,
            format_elapsed(start.elapsed())
        );
        Ok(report)
    }
}
