//! Commonality corpus
//!
//! Holds the known-weak MPINs, bucketed by length, and answers exact
//! membership queries against them.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::MPIN_LENGTHS;

/// Environment variable overriding the corpus location.
pub const COMMON_PINS_PATH_ENV: &str = "MPIN_COMMON_PINS_PATH";

const DEFAULT_COMMON_PINS_PATH: &str = "./assets/common-pins.txt";

const BUILTIN_CORPUS: &str = include_str!("../assets/common-pins.txt");

#[derive(Error, Debug)]
pub enum CommonPinsError {
    #[error("Common PIN file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common PIN file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common PIN file is empty")]
    EmptyFile,
    #[error("Invalid entry on line {line}: {value:?}")]
    InvalidEntry { line: usize, value: String },
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `MPIN_COMMON_PINS_PATH`
/// 2. Default path `./assets/common-pins.txt`
pub fn common_pins_path() -> PathBuf {
    std::env::var(COMMON_PINS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_COMMON_PINS_PATH))
}

/// Known-weak MPINs keyed by length.
///
/// Built once and shared by reference; lookups never mutate it, so one
/// instance can serve any number of concurrent classifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPinSet {
    by_length: HashMap<usize, HashSet<String>>,
}

impl CommonPinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from literal PINs. Entries are stored verbatim.
    pub fn from_pins<I, S>(pins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for pin in pins {
            set.insert(pin);
        }
        set
    }

    /// The corpus compiled into the crate from `assets/common-pins.txt`.
    ///
    /// # Panics
    ///
    /// Panics if the shipped asset is malformed. An empty fallback would
    /// silently rate every MPIN as not commonly used.
    pub fn builtin() -> Self {
        parse_corpus(BUILTIN_CORPUS).expect("assets/common-pins.txt is a valid corpus")
    }

    /// Loads the corpus from the path given by [`common_pins_path`].
    ///
    /// # Errors
    ///
    /// See [`CommonPinSet::from_path`].
    pub fn from_env() -> Result<Self, CommonPinsError> {
        Self::from_path(common_pins_path())
    }

    /// Loads the corpus from a specific file.
    ///
    /// One PIN per line. Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    /// - An entry is not 4 or 6 ASCII digits
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonPinsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common PIN corpus load FAILED: FileNotFound {:?}", path);
            return Err(CommonPinsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let set = parse_corpus(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Common PIN corpus loaded: {} entries from {:?}", set.len(), path);

        Ok(set)
    }

    pub fn insert<S: Into<String>>(&mut self, pin: S) -> bool {
        let pin = pin.into();
        self.by_length.entry(pin.len()).or_default().insert(pin)
    }

    /// Exact membership within the bucket of `pin`'s own length.
    pub fn contains(&self, pin: &str) -> bool {
        self.by_length
            .get(&pin.len())
            .is_some_and(|bucket| bucket.contains(pin))
    }

    /// Entries of one length, if any were loaded.
    pub fn of_length(&self, len: usize) -> Option<&HashSet<String>> {
        self.by_length.get(&len)
    }

    pub fn len(&self) -> usize {
        self.by_length.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Checks whether `pin` is a known-weak MPIN.
///
/// No normalization: `"01234"` never matches `"1234"`.
pub fn is_commonly_used(pin: &str, common: &CommonPinSet) -> bool {
    common.contains(pin)
}

fn parse_corpus(content: &str) -> Result<CommonPinSet, CommonPinsError> {
    let mut set = CommonPinSet::new();

    for (idx, raw) in content.lines().enumerate() {
        let entry = raw.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        let valid = MPIN_LENGTHS.contains(&entry.len()) && entry.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(CommonPinsError::InvalidEntry {
                line: idx + 1,
                value: entry.to_string(),
            });
        }
        set.insert(entry);
    }

    if set.is_empty() {
        return Err(CommonPinsError::EmptyFile);
    }
    Ok(set)
}
