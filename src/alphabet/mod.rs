//! The Hebrew letter-value table.
//!
//! An [`Alphabet`] is an immutable map from a single letter to its numeric
//! value and display name. The default table is embedded at compile time;
//! custom tables are parsed from TOML and validated before use.

mod config;

pub use config::{parse_alphabet_toml, AlphabetConfigError};

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const DEFAULT_TOML: &str = include_str!("default_alphabet.toml");

/// Value and display metadata for a single letter.
#[derive(Debug, Clone)]
pub struct LetterEntry {
    pub value: u32,
    pub name: String,
    /// Base letter when this entry is a word-final variant.
    pub final_of: Option<char>,
}

/// Immutable letter-to-value table. Constructed once, never mutated.
#[derive(Debug, Clone)]
pub struct Alphabet {
    entries: BTreeMap<char, LetterEntry>,
    /// Letters in traditional order: ascending value, base before final.
    order: Vec<char>,
}

impl Alphabet {
    pub(crate) fn from_entries(entries: BTreeMap<char, LetterEntry>) -> Self {
        let mut order: Vec<char> = entries.keys().copied().collect();
        order.sort_by_key(|c| {
            let e = &entries[c];
            (e.value, e.final_of.is_some())
        });
        Self { entries, order }
    }

    /// The standard 22+5-letter table, built once from the embedded TOML.
    pub fn standard() -> &'static Alphabet {
        static INSTANCE: OnceLock<Alphabet> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            parse_alphabet_toml(DEFAULT_TOML).expect("embedded alphabet TOML must be valid")
        })
    }

    pub fn contains(&self, letter: char) -> bool {
        self.entries.contains_key(&letter)
    }

    pub fn value(&self, letter: char) -> Option<u32> {
        self.entries.get(&letter).map(|e| e.value)
    }

    pub fn name(&self, letter: char) -> Option<&str> {
        self.entries.get(&letter).map(|e| e.name.as_str())
    }

    /// Base letter of a word-final variant; `None` for base letters.
    pub fn base_of(&self, letter: char) -> Option<char> {
        self.entries.get(&letter).and_then(|e| e.final_of)
    }

    pub(crate) fn get(&self, letter: char) -> Option<&LetterEntry> {
        self.entries.get(&letter)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in traditional order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &LetterEntry)> {
        self.order.iter().map(move |c| (*c, &self.entries[c]))
    }
}
