use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Alphabet, LetterEntry};

#[derive(Deserialize)]
struct AlphabetConfig {
    letters: BTreeMap<String, LetterSpec>,
}

#[derive(Deserialize)]
struct LetterSpec {
    value: u32,
    name: String,
    final_of: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlphabetConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[letters] table is empty")]
    Empty,
    #[error("must be exactly one character: {0}")]
    NotSingleChar(String),
    #[error("zero value for letter: {0}")]
    ZeroValue(char),
    #[error("empty name for letter: {0}")]
    EmptyName(char),
    #[error("final form {letter} references unknown base letter {base}")]
    UnknownBase { letter: char, base: char },
    #[error("base {base} of final form {letter} is itself a final form")]
    FinalBase { letter: char, base: char },
    #[error("final form {letter} has value {value} but base {base} has value {base_value}")]
    ValueMismatch {
        letter: char,
        value: u32,
        base: char,
        base_value: u32,
    },
}

/// Parse TOML text into a validated [`Alphabet`].
pub fn parse_alphabet_toml(toml_str: &str) -> Result<Alphabet, AlphabetConfigError> {
    let config: AlphabetConfig =
        toml::from_str(toml_str).map_err(|e| AlphabetConfigError::Parse(e.to_string()))?;

    if config.letters.is_empty() {
        return Err(AlphabetConfigError::Empty);
    }

    let mut entries = BTreeMap::new();
    for (key, spec) in config.letters {
        let letter = single_char(&key)?;
        if spec.value == 0 {
            return Err(AlphabetConfigError::ZeroValue(letter));
        }
        if spec.name.is_empty() {
            return Err(AlphabetConfigError::EmptyName(letter));
        }
        let final_of = spec.final_of.as_deref().map(single_char).transpose()?;
        entries.insert(
            letter,
            LetterEntry {
                value: spec.value,
                name: spec.name,
                final_of,
            },
        );
    }

    // Final forms must point at a base letter carrying the same value.
    for (&letter, entry) in &entries {
        if let Some(base) = entry.final_of {
            let base_entry = entries
                .get(&base)
                .ok_or(AlphabetConfigError::UnknownBase { letter, base })?;
            if base_entry.final_of.is_some() {
                return Err(AlphabetConfigError::FinalBase { letter, base });
            }
            if base_entry.value != entry.value {
                return Err(AlphabetConfigError::ValueMismatch {
                    letter,
                    value: entry.value,
                    base,
                    base_value: base_entry.value,
                });
            }
        }
    }

    Ok(Alphabet::from_entries(entries))
}

fn single_char(s: &str) -> Result<char, AlphabetConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(AlphabetConfigError::NotSingleChar(s.to_string())),
    }
}
