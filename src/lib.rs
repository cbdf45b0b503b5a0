//! Romaji-to-kana transliteration engine.
//!
//! Converts Latin phonetic input into hiragana (optionally katakana) as it is
//! typed, using longest-match decoding over a prefix tree plus context rules
//! for the moraic nasal (ん) and geminate consonants (っ). Input that is not
//! recognizable romaji passes through untouched, so the engine is safe to run
//! on every text change.

pub mod romaji;
pub mod script;
pub mod trace_init;

pub use romaji::{RomajiConfigError, RomajiConverter};
