//! The gematria encoding itself.
//!
//! [`encode`] filters the input down to letters present in the table,
//! preserving order, then sums their values. Spaces, punctuation and
//! foreign characters are dropped silently; an input with nothing left
//! after filtering is an error, so a zero total never masquerades as a
//! valid result.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::alphabet::Alphabet;

/// One letter's contribution to the total, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterValue {
    pub letter: char,
    pub name: String,
    pub value: u32,
}

/// Result of encoding one string. A pure value: computed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingResult {
    /// The raw input, unmodified.
    pub text: String,
    /// Recognized letters only, original order preserved.
    pub filtered: String,
    pub total: u64,
    pub letter_count: usize,
    pub breakdown: Vec<LetterValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("no text provided")]
    EmptyInput,
    #[error("no Hebrew letters found in text")]
    NoRecognizedLetters,
}

/// Encode `text` against `alphabet`.
///
/// Pure function of its arguments: identical input always yields an
/// identical result.
pub fn encode(alphabet: &Alphabet, text: &str) -> Result<EncodingResult, EncodeError> {
    if text.is_empty() {
        return Err(EncodeError::EmptyInput);
    }
    let char_count = text.chars().count();
    let _span = debug_span!("encode", char_count).entered();

    let mut filtered = String::new();
    let mut breakdown = Vec::new();
    let mut total: u64 = 0;
    for c in text.chars() {
        if let Some(entry) = alphabet.get(c) {
            filtered.push(c);
            total += u64::from(entry.value);
            breakdown.push(LetterValue {
                letter: c,
                name: entry.name.clone(),
                value: entry.value,
            });
        }
    }

    if breakdown.is_empty() {
        return Err(EncodeError::NoRecognizedLetters);
    }
    debug!(total, letters = breakdown.len(), "encoded");

    Ok(EncodingResult {
        text: text.to_string(),
        filtered,
        total,
        letter_count: breakdown.len(),
        breakdown,
    })
}
