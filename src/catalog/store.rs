use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::code::BinaryCode;
use crate::utils::validation::{check_entry_limit, ValidationError};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to read spoligotype database: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Line {line}: expected at least 3 whitespace-separated fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("Line {line}: invalid binary code: {source}")]
    InvalidCode {
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Too many database entries: {0} exceeds maximum allowed")]
    TooManyEntries(usize),

    #[error("Spoligotype database contains no entries")]
    Empty,
}

/// One line of the spoligotype database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseEntry {
    /// Spoligotype identifier (e.g. `SB0145`)
    pub identifier: String,

    /// Presence/absence pattern for this spoligotype
    pub binary: BinaryCode,

    /// 1-based line number in the source file (0 when added programmatically)
    pub line: usize,
}

/// Reference table of known binary code → spoligotype identifier mappings.
///
/// Entries keep file order. When two entries share a binary code the later one
/// wins the lookup, matching a plain map rebuilt line by line.
#[derive(Debug, Default)]
pub struct SpoligotypeDb {
    /// All entries in file order, including superseded duplicates
    entries: Vec<DatabaseEntry>,

    /// Index: binary code -> index of the winning entry
    binary_to_entry: HashMap<BinaryCode, usize>,

    /// Number of entries shadowed by a later entry with the same code
    superseded: usize,
}

impl SpoligotypeDb {
    /// Create an empty database
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a database from a whitespace-delimited text file
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ReadError` if the file cannot be read, or any
    /// error from [`SpoligotypeDb::from_text`].
    pub fn load_from_file(path: &Path) -> Result<Self, DatabaseError> {
        let content = std::fs::read_to_string(path)?;
        let db = Self::from_text(&content)?;
        debug!(
            "Loaded {} spoligotype entries from {}",
            db.len(),
            path.display()
        );
        Ok(db)
    }

    /// Parse database text. Each non-empty line holds at least three
    /// whitespace-separated fields: field 2 is the identifier and field 3 the
    /// 43-character binary code. Lines starting with `#` are comments.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::MissingFields` or `DatabaseError::InvalidCode` with
    /// the offending line number, `DatabaseError::TooManyEntries` if the limit is
    /// exceeded, or `DatabaseError::Empty` if no entries are found.
    pub fn from_text(text: &str) -> Result<Self, DatabaseError> {
        let mut db = Self::new();

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Line numbers in errors are 1-based for user friendliness
            let line_num = i + 1;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 {
                return Err(DatabaseError::MissingFields {
                    line: line_num,
                    found: fields.len(),
                });
            }

            let binary = BinaryCode::new(fields[2]).map_err(|source| DatabaseError::InvalidCode {
                line: line_num,
                source,
            })?;

            if check_entry_limit(db.entries.len()).is_some() {
                return Err(DatabaseError::TooManyEntries(db.entries.len()));
            }

            db.add_entry(DatabaseEntry {
                identifier: fields[1].to_string(),
                binary,
                line: line_num,
            });
        }

        if db.is_empty() {
            return Err(DatabaseError::Empty);
        }

        if db.superseded > 0 {
            warn!(
                "{} database entries share a binary code with a later entry and will never match",
                db.superseded
            );
        }

        Ok(db)
    }

    /// Add an entry. A later entry with the same binary code replaces the
    /// earlier one in lookups.
    pub fn add_entry(&mut self, entry: DatabaseEntry) {
        let index = self.entries.len();

        if let Some(previous) = self.binary_to_entry.insert(entry.binary.clone(), index) {
            self.superseded += 1;
            debug!(
                "{} replaces {} for binary code {}",
                entry.identifier, self.entries[previous].identifier, entry.binary
            );
        }

        self.entries.push(entry);
    }

    /// All entries in file order, including superseded duplicates
    #[must_use]
    pub fn entries(&self) -> &[DatabaseEntry] {
        &self.entries
    }

    /// Entry whose binary code matches exactly
    #[must_use]
    pub fn get(&self, code: &BinaryCode) -> Option<&DatabaseEntry> {
        self.binary_to_entry
            .get(code)
            .map(|&idx| &self.entries[idx])
    }

    /// All entries carrying an identifier, in file order
    #[must_use]
    pub fn find_by_identifier(&self, identifier: &str) -> Vec<&DatabaseEntry> {
        self.entries
            .iter()
            .filter(|e| e.identifier == identifier)
            .collect()
    }

    /// Number of entries shadowed by a later duplicate binary code
    #[must_use]
    pub fn superseded(&self) -> usize {
        self.superseded
    }

    /// Number of distinct binary codes
    #[must_use]
    pub fn distinct_codes(&self) -> usize {
        self.binary_to_entry.len()
    }

    /// Number of entries in the database
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the database is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
