use serde::Serialize;
use tracing::debug;

use crate::utils::validation::ValidationError;

/// Number of spacers in the standard spoligotyping panel
pub const SPACER_COUNT: usize = 43;

/// Version of the canonical spacer panel below.
/// Bump this if the list ever changes, since every derived code depends on it.
pub const SPACER_PANEL_VERSION: &str = "1";

/// Canonical spacer names, in the order that gives every derived code its
/// positional meaning. Lexicographic order; zero-padding makes it numeric too.
pub const SPACER_NAMES: [&str; SPACER_COUNT] = [
    "spacer01", "spacer02", "spacer03", "spacer04", "spacer05", "spacer06", "spacer07",
    "spacer08", "spacer09", "spacer10", "spacer11", "spacer12", "spacer13", "spacer14",
    "spacer15", "spacer16", "spacer17", "spacer18", "spacer19", "spacer20", "spacer21",
    "spacer22", "spacer23", "spacer24", "spacer25", "spacer26", "spacer27", "spacer28",
    "spacer29", "spacer30", "spacer31", "spacer32", "spacer33", "spacer34", "spacer35",
    "spacer36", "spacer37", "spacer38", "spacer39", "spacer40", "spacer41", "spacer42",
    "spacer43",
];

/// Position of a spacer in the canonical panel
#[must_use]
pub fn spacer_index(name: &str) -> Option<usize> {
    SPACER_NAMES.binary_search(&name).ok()
}

/// Verify that a set of spacer names (e.g. the headers of a spacer FASTA) is
/// exactly the canonical panel. Order is not significant.
///
/// # Errors
///
/// Returns `ValidationError::UnknownSpacer`, `ValidationError::DuplicateSpacer`,
/// or `ValidationError::WrongSpacerCount` if any spacer is missing.
pub fn validate_panel<S: AsRef<str>>(names: &[S]) -> Result<(), ValidationError> {
    let mut seen = [false; SPACER_COUNT];

    for name in names {
        let name = name.as_ref();
        let index =
            spacer_index(name).ok_or_else(|| ValidationError::UnknownSpacer(name.to_string()))?;
        if std::mem::replace(&mut seen[index], true) {
            return Err(ValidationError::DuplicateSpacer(name.to_string()));
        }
    }

    let found = seen.iter().filter(|s| **s).count();
    if found == SPACER_COUNT {
        Ok(())
    } else {
        Err(ValidationError::WrongSpacerCount {
            expected: SPACER_COUNT,
            found,
        })
    }
}

/// Occurrence counts for all 43 spacers, stored in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpacerCountMap {
    counts: Vec<u64>,
}

impl SpacerCountMap {
    /// Build from positional counts already in canonical order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WrongSpacerCount` unless exactly 43 counts are given.
    pub fn from_counts(counts: Vec<u64>) -> Result<Self, ValidationError> {
        if counts.len() != SPACER_COUNT {
            return Err(ValidationError::WrongSpacerCount {
                expected: SPACER_COUNT,
                found: counts.len(),
            });
        }
        Ok(Self { counts })
    }

    /// Build from `(name, count)` pairs in any order. Every spacer must be present.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownSpacer` or `ValidationError::DuplicateSpacer`
    /// for bad names, and `ValidationError::WrongSpacerCount` if any spacer is missing.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let slots = collect_slots(pairs)?;
        let found = slots.iter().filter(|s| s.is_some()).count();
        if found != SPACER_COUNT {
            return Err(ValidationError::WrongSpacerCount {
                expected: SPACER_COUNT,
                found,
            });
        }
        Ok(Self {
            counts: slots.into_iter().map(Option::unwrap_or_default).collect(),
        })
    }

    /// Build from `(name, count)` pairs, treating spacers absent from the
    /// counting output as zero. Unknown and duplicate names are still rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownSpacer` or `ValidationError::DuplicateSpacer`.
    pub fn zero_filled<I, S>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let slots = collect_slots(pairs)?;
        let missing = slots.iter().filter(|s| s.is_none()).count();
        if missing > 0 {
            debug!("Zero-filled {missing} spacers absent from counting output");
        }
        Ok(Self {
            counts: slots.into_iter().map(Option::unwrap_or_default).collect(),
        })
    }

    /// Counts in canonical spacer order
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Count for a named spacer
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u64> {
        spacer_index(name).map(|i| self.counts[i])
    }

    /// Iterate `(name, count)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        SPACER_NAMES.iter().copied().zip(self.counts.iter().copied())
    }

    /// Total occurrences across all spacers
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

fn collect_slots<I, S>(pairs: I) -> Result<Vec<Option<u64>>, ValidationError>
where
    I: IntoIterator<Item = (S, u64)>,
    S: AsRef<str>,
{
    let mut slots = vec![None; SPACER_COUNT];
    for (name, count) in pairs {
        let name = name.as_ref();
        let index =
            spacer_index(name).ok_or_else(|| ValidationError::UnknownSpacer(name.to_string()))?;
        if slots[index].replace(count).is_some() {
            return Err(ValidationError::DuplicateSpacer(name.to_string()));
        }
    }
    Ok(slots)
}
