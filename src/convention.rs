//! The output-file naming convention of the simulator.
//!
//! A run seeded with `42` writes `w-42.xml` (run info), a
//! `w-species-42-t<step>.xml` snapshot at every power-of-two step, and
//! `w-network-42.graphml` (the spatial network it ran on). Collection only
//! relies on the prefix length, the category marker and the extension, so
//! folders written with a different stem can still be scanned by
//! overriding the defaults.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScanError;

static SPECIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^species-(?<seed>\d+)-t(?<step>\d+)$").unwrap());
static NETWORK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^network-(?<seed>\d+)\.graphml$").unwrap());

/// Naming convention for run files.
///
/// Positions are counted in characters, the way the file names were meant
/// to be read, not in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convention {
    /// Characters before the seed field.
    pub prefix_len: usize,
    /// Category marker right after the prefix on non-info files.
    pub marker: char,
    /// Extension of run files, without the dot.
    pub extension: String,
}

impl Default for Convention {
    /// The convention the simulator writes with: `w-` stem, `s` marking
    /// the species snapshots, `.xml` run files.
    fn default() -> Self {
        Self {
            prefix_len: 2,
            marker: 's',
            extension: "xml".to_owned(),
        }
    }
}

impl Convention {
    /// True when `name` is a run-file name: it ends in the extension and
    /// has at least one character before it.
    pub fn matches_extension(&self, name: &str) -> bool {
        self.stem_of(name).is_some_and(|stem| !stem.is_empty())
    }

    /// True when the category marker sits right after the prefix.
    pub fn is_marked(&self, name: &str) -> bool {
        name.chars().nth(self.prefix_len) == Some(self.marker)
    }

    /// Seed field of a run-file name: everything between the prefix and
    /// the extension.
    pub fn seed_field<'a>(&self, name: &'a str) -> Result<&'a str, ScanError> {
        self.stem_of(name)
            .and_then(|stem| self.after_prefix(stem))
            .ok_or_else(|| ScanError::NoSeedField {
                file: name.to_owned(),
            })
    }

    /// Seed encoded in an unmarked run-file name.
    pub fn seed_of(&self, name: &str) -> Result<u64, ScanError> {
        let field = self.seed_field(name)?;
        field.parse().map_err(|source| ScanError::BadSeed {
            file: name.to_owned(),
            field: field.to_owned(),
            source,
        })
    }

    /// Extension suffix with the dot, as written in file names.
    pub(crate) fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    fn stem_of<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_suffix(self.extension.as_str())?.strip_suffix('.')
    }

    fn after_prefix<'a>(&self, s: &'a str) -> Option<&'a str> {
        if self.prefix_len == 0 {
            return Some(s);
        }
        s.char_indices()
            .nth(self.prefix_len)
            .map(|(offset, _)| &s[offset..])
    }
}

/// One recognized output file of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunFile {
    /// The run's main info file, `w-<seed>.xml`.
    Info { seed: u64 },
    /// An extant-species snapshot, `w-species-<seed>-t<step>.xml`.
    Species { seed: u64, step: u64 },
    /// The spatial network the run used, `w-network-<seed>.graphml`.
    Network { seed: u64 },
}

impl RunFile {
    /// Classify one directory-entry name under `convention`.
    ///
    /// Classification is total: anything that is not one of the three
    /// output shapes is `None`, it never fails.
    pub fn classify(name: &str, convention: &Convention) -> Option<Self> {
        let rest = convention.after_prefix(name)?;
        if let Some(caps) = NETWORK.captures(rest) {
            let seed = caps["seed"].parse().ok()?;
            return Some(Self::Network { seed });
        }
        let field = convention.seed_field(name).ok()?;
        if let Some(caps) = SPECIES.captures(field) {
            let seed = caps["seed"].parse().ok()?;
            let step = caps["step"].parse().ok()?;
            return Some(Self::Species { seed, step });
        }
        if field.starts_with(convention.marker) {
            return None;
        }
        let seed = field.parse().ok()?;
        Some(Self::Info { seed })
    }
}
