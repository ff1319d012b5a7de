//! Human-readable rendering of an [`EncodingResult`].

use unicode_width::UnicodeWidthStr;

use crate::alphabet::Alphabet;
use crate::encode::{encode, EncodeError, EncodingResult};

/// Multi-line rendering: header plus one aligned line per letter.
pub fn format_detailed(result: &EncodingResult) -> String {
    let name_w = result
        .breakdown
        .iter()
        .map(|lv| lv.name.width())
        .max()
        .unwrap_or(0);
    let value_w = result
        .breakdown
        .iter()
        .map(|lv| lv.value.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    out.push_str(&format!("Gematria of: {}\n", result.text));
    out.push_str(&format!("Total value: {}\n", result.total));
    out.push_str(&format!("Letters: {}\n\n", result.letter_count));
    for lv in &result.breakdown {
        // Pad by display width, not byte length; letter names are ASCII
        // today but a custom table need not be.
        let pad = " ".repeat(name_w - lv.name.width());
        out.push_str(&format!(
            "  {}  {}{}  {:>value_w$}\n",
            lv.letter, lv.name, pad, lv.value
        ));
    }
    out
}

/// Single-sentence rendering of the total.
pub fn format_simple(result: &EncodingResult) -> String {
    format!(
        "The gematria value of '{}' is {}",
        result.text, result.total
    )
}

/// Encode `text` and render it in one step. The contract exposed to
/// tool-routing callers: they relay the returned string (or the error's
/// `Display` text) verbatim.
pub fn encode_and_format(
    alphabet: &Alphabet,
    text: &str,
    detailed: bool,
) -> Result<String, EncodeError> {
    let result = encode(alphabet, text)?;
    Ok(if detailed {
        format_detailed(&result)
    } else {
        format_simple(&result)
    })
}
