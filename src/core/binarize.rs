use serde::{Deserialize, Serialize};

use crate::core::code::BinaryCode;
use crate::core::spacer::SpacerCountMap;

/// Default detection threshold. With [`ThresholdPolicy::GreaterThan`] a spacer
/// needs at least 5 supporting reads to be called present.
pub const DEFAULT_THRESHOLD: u64 = 4;

/// How a spacer count is compared against the detection threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdPolicy {
    /// Present when `count > threshold`
    #[default]
    GreaterThan,
    /// Present when `count >= threshold`
    AtLeast,
}

impl ThresholdPolicy {
    #[must_use]
    pub fn is_present(self, count: u64, threshold: u64) -> bool {
        match self {
            Self::GreaterThan => count > threshold,
            Self::AtLeast => count >= threshold,
        }
    }
}

impl std::fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GreaterThan => write!(f, ">"),
            Self::AtLeast => write!(f, ">="),
        }
    }
}

/// Convert spacer counts into the 43-bit presence code.
///
/// Character `i` depends only on the count of the `i`-th canonical spacer and
/// the threshold. The count map is validated on construction, so this cannot fail.
#[must_use]
pub fn binarize(counts: &SpacerCountMap, threshold: u64, policy: ThresholdPolicy) -> BinaryCode {
    BinaryCode::from_presence(
        counts
            .counts()
            .iter()
            .map(|&count| policy.is_present(count, threshold)),
    )
}
