//! Romaji-to-kana conversion engine.
//!
//! Uses a trie-based lookup table to convert ASCII romaji into hiragana,
//! handling sokuon (っ), hatsuon (ん), and yōon (きゃ).

mod config;
mod convert;
mod table;
mod trie;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::RomajiConverter;
pub use table::default_toml;
pub use trie::RomajiTrie;
