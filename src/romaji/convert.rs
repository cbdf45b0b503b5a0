use tracing::{debug, debug_span};

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::table::DEFAULT_TOML;
use super::trie::RomajiTrie;
use crate::script::hiragana_to_katakana;

/// Moraic nasal ん, emitted by the trailing-`n` rule.
const HATSUON: char = 'ん';
/// Small っ marking a geminate consonant.
const SOKUON: char = 'っ';

/// Romaji-to-kana converter.
///
/// Owns the mapping trie. Build one during startup and share it by
/// reference; nothing mutates it after construction. Conversion never
/// fails: anything that is not recognizable romaji is copied through
/// unchanged so the caller can keep editing it.
#[derive(Debug)]
pub struct RomajiConverter {
    trie: RomajiTrie,
}

impl RomajiConverter {
    /// Build a converter from the embedded default table.
    pub fn new() -> Self {
        Self::from_toml(DEFAULT_TOML).expect("embedded romaji table must be valid")
    }

    /// Build a converter from a custom TOML table
    /// (a `[mappings]` table of romaji = kana pairs).
    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let mappings = parse_romaji_toml(toml_str)?;
        let trie =
            RomajiTrie::from_mappings(mappings.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        debug!(mappings = mappings.len(), "built romaji trie");
        Ok(Self { trie })
    }

    /// Convert romaji in `text` to hiragana, leaving everything else as-is.
    ///
    /// With `full_text` false the input is still being typed: a trailing `n`
    /// stays unresolved, since the next keystroke may extend it into にゃ
    /// or な. With `full_text` true the caller has committed the text and a
    /// trailing `n` becomes ん.
    pub fn convert(&self, text: &str, full_text: bool) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());

        let mut i = 0;
        while i < chars.len() {
            if let Some((kana, consumed)) = self.trie.longest_match(&chars[i..]) {
                out.push_str(kana);
                i += consumed;
                continue;
            }

            let cur = chars[i];
            let next = chars.get(i + 1).copied();
            if cur == 'n' && next.map_or(full_text, |n| n != 'y') {
                // Hatsuon: `n` before anything but `y`, or at the end of
                // committed text.
                out.push(HATSUON);
            } else if matches!(cur, 'c' | 'p' | 's' | 't' | 'k') && next == Some(cur) {
                // Sokuon: the first of a doubled consonant becomes っ; the
                // second is rescanned as the start of the next syllable.
                out.push(SOKUON);
            } else {
                out.push(cur);
            }
            i += 1;
        }

        out
    }

    /// Convert `text` and return it in the requested output script.
    ///
    /// The single entry point for callers: `full_text` marks committed
    /// input (e.g. the user pressed enter), `katakana` selects the output
    /// script.
    pub fn romaji_to_kana(&self, text: &str, full_text: bool, katakana: bool) -> String {
        let _span = debug_span!("romaji_to_kana", len = text.len(), full_text).entered();
        let kana = self.convert(text, full_text);
        if katakana {
            hiragana_to_katakana(&kana)
        } else {
            kana
        }
    }
}

impl Default for RomajiConverter {
    fn default() -> Self {
        Self::new()
    }
}
