use crate::{Error, Result};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Ordered disambiguation letters appended to Swift-BAT names
pub const SUFFIX_ALPHABET: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

static NO_SUFFIXES: BTreeSet<char> = BTreeSet::new();

/// First letter of [`SUFFIX_ALPHABET`] not in `used`
pub fn next_suffix(base: &str, used: &BTreeSet<char>) -> Result<char> {
    SUFFIX_ALPHABET
        .iter()
        .copied()
        .find(|letter| !used.contains(letter))
        .ok_or_else(|| Error::SuffixExhausted(base.to_string()))
}

/// Event identifier split into its base and optional disambiguation letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    base: String,
    suffix: Option<char>,
}

impl ResolvedName {
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            base: name.into(),
            suffix: None,
        }
    }

    pub fn suffixed(base: impl Into<String>, suffix: char) -> Self {
        Self {
            base: base.into(),
            suffix: Some(suffix),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn suffix(&self) -> Option<char> {
        self.suffix
    }

    pub fn full(&self) -> String {
        match self.suffix {
            Some(letter) => format!("{}{}", self.base, letter),
            None => self.base.clone(),
        }
    }
}

/// Outcome of resolving one packet's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    Named(ResolvedName),
    /// Event is deliberately left out of the table
    Skip { reason: String },
}

/// Names handed out during one extraction run
///
/// Owned by the extractor and updated only after a record is inserted, so a
/// packet that fails later in processing never consumes a letter.
#[derive(Debug, Default, Clone)]
pub struct AssignedNames {
    names: HashSet<String>,
    suffixes: HashMap<String, BTreeSet<char>>,
}

impl AssignedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn used_suffixes(&self, base: &str) -> &BTreeSet<char> {
        self.suffixes.get(base).unwrap_or(&NO_SUFFIXES)
    }

    pub fn next_suffix(&self, base: &str) -> Result<char> {
        next_suffix(base, self.used_suffixes(base))
    }

    pub fn record(&mut self, name: &ResolvedName) {
        if let Some(letter) = name.suffix {
            self.suffixes
                .entry(name.base.clone())
                .or_default()
                .insert(letter);
        }
        self.names.insert(name.full());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_suffix_starts_at_a() {
        assert_eq!(next_suffix("GRB210911", &BTreeSet::new()).unwrap(), 'A');
    }

    #[test]
    fn test_next_suffix_fills_gaps() {
        let used: BTreeSet<char> = ['A', 'C'].into_iter().collect();
        assert_eq!(next_suffix("GRB210911", &used).unwrap(), 'B');
    }

    #[test]
    fn test_next_suffix_exhausted() {
        let used: BTreeSet<char> = SUFFIX_ALPHABET.into_iter().collect();
        let err = next_suffix("GRB210911", &used).unwrap_err();
        assert!(matches!(err, Error::SuffixExhausted(ref base) if base == "GRB210911"));
    }

    #[test]
    fn test_suffixes_are_tracked_per_base() {
        let mut assigned = AssignedNames::new();
        assigned.record(&ResolvedName::suffixed("GRB210911", 'A'));
        assigned.record(&ResolvedName::suffixed("GRB210911", 'B'));
        assigned.record(&ResolvedName::suffixed("GRB210912", 'A'));

        assert_eq!(assigned.next_suffix("GRB210911").unwrap(), 'C');
        assert_eq!(assigned.next_suffix("GRB210912").unwrap(), 'B');
        assert_eq!(assigned.next_suffix("GRB210913").unwrap(), 'A');
        assert!(assigned.contains("GRB210911B"));
        assert_eq!(assigned.len(), 3);
    }

    #[test]
    fn test_plain_names_do_not_reserve_letters() {
        let mut assigned = AssignedNames::new();
        assigned.record(&ResolvedName::plain("FermiGBM-652928000"));
        assert!(assigned.used_suffixes("FermiGBM-652928000").is_empty());
        assert!(assigned.contains("FermiGBM-652928000"));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(ResolvedName::suffixed("GRB210911A", 'A').full(), "GRB210911AA");
        assert_eq!(ResolvedName::plain("ASASSN-21abc").full(), "ASASSN-21abc");
    }
}
