//! Kana script classification and remapping.
//!
//! Hiragana and katakana are parallel blocks with a fixed one-to-one
//! code-point offset between corresponding characters, so switching the
//! output script is a per-character shift rather than a second table.

/// Boundaries of the hiragana block. The full block includes a few
/// unassigned code points (U+3040, U+3097-3098), but those never come out
/// of the converter, so the simpler block-level check is used.
const HIRAGANA_FIRST: char = '\u{3040}';
const HIRAGANA_LAST: char = '\u{309F}';

/// Distance from a hiragana code point to its katakana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Check the full hiragana block (U+3040..=U+309F).
pub fn is_hiragana(c: char) -> bool {
    (HIRAGANA_FIRST..=HIRAGANA_LAST).contains(&c)
}

/// Check the full katakana block (U+30A0..=U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Shift every hiragana code point to its katakana counterpart.
/// All other characters pass through unchanged.
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
