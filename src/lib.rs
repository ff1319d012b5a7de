//! Hebrew gematria encoding engine.
//!
//! Maps each letter of the Hebrew alphabet to its traditional numeric value
//! and sums over a string, producing a total plus a letter-by-letter
//! breakdown. Final-form letters (ך ם ן ף ץ) carry the same value as their
//! base letters.

pub mod alphabet;
pub mod encode;
pub mod format;
pub mod trace_init;

pub use alphabet::Alphabet;
pub use encode::{encode, EncodeError, EncodingResult, LetterValue};
pub use format::{encode_and_format, format_detailed, format_simple};

#[cfg(test)]
mod tests;
