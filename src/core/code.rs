use serde::Serialize;
use std::str::FromStr;

use crate::utils::validation::{check_binary_code, ValidationError};

/// A 43-character presence/absence string over {'0','1'}, one character per
/// spacer in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BinaryCode(String);

impl BinaryCode {
    /// Validate and wrap a binary code.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WrongCodeLength` or `ValidationError::InvalidCodeCharacter`.
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        check_binary_code(&s)?;
        Ok(Self(s))
    }

    /// Build from presence flags already known to be 43 long
    pub(crate) fn from_presence(flags: impl Iterator<Item = bool>) -> Self {
        Self(flags.map(|present| if present { '1' } else { '0' }).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bits as 0/1 values
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// True when no spacer was detected
    #[must_use]
    pub fn is_all_zeros(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// Number of spacers called present
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.0.bytes().filter(|b| *b == b'1').count()
    }
}

impl FromStr for BinaryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for BinaryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 15-digit octal rendering of a [`BinaryCode`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OctalCode(pub(crate) String);

impl OctalCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OctalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hyphen-joined hexadecimal rendering of a [`BinaryCode`], e.g. `7F-7F-7F-7F-FF-7F`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HexCode(pub(crate) String);

impl HexCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
