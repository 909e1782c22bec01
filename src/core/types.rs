use serde::{Deserialize, Serialize};

/// Label reported when a code matches no database entry
pub const NOT_FOUND_LABEL: &str = "Not Found";

/// Label reported when no spacer was detected at all. This usually points at a
/// data problem (wrong organism, low coverage) rather than a novel pattern.
pub const ALL_ZEROS_LABEL: &str = "spoligo not found, binary all zeros, see spoligo file";

/// Outcome of a database lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Spoligotype {
    /// Identifier of the matching database entry (e.g. `SB0145`)
    Known(String),
    /// Code is all zeros and not in the database
    AllZeros,
    /// Code is not in the database
    NotFound,
}

impl Spoligotype {
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Database identifier, if the lookup succeeded
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Known(id) => Some(id.as_str()),
            Self::AllZeros | Self::NotFound => None,
        }
    }

    /// Text to report for this outcome
    #[must_use]
    pub fn label(&self, reporting: MissReporting) -> &str {
        match (self, reporting) {
            (Self::Known(id), _) => id.as_str(),
            (Self::AllZeros, MissReporting::Distinguished) => ALL_ZEROS_LABEL,
            (Self::AllZeros | Self::NotFound, _) => NOT_FOUND_LABEL,
        }
    }
}

impl std::fmt::Display for Spoligotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(MissReporting::Distinguished))
    }
}

/// Whether the all-zeros miss is reported separately from an ordinary miss
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReporting {
    /// Report [`ALL_ZEROS_LABEL`] for an all-zero code
    #[default]
    Distinguished,
    /// Report [`NOT_FOUND_LABEL`] for every miss
    Unified,
}
