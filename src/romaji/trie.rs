use std::array;

use super::config::RomajiConfigError;

/// One child slot per letter of the romaji alphabet (`a`..=`z`).
const ALPHABET: usize = 26;

#[derive(Debug)]
struct Node {
    children: [Option<Box<Node>>; ALPHABET],
    kana: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: array::from_fn(|_| None),
            kana: None,
        }
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(|c| c.is_some())
    }
}

/// Prefix tree over lowercase-ASCII romaji sequences.
///
/// Built once from the mapping table and never mutated afterward, so it can
/// be shared across threads without locking. The table keeps every key
/// either a complete syllable or a proper prefix of one, never both, so a
/// downward walk can stop at the first terminal it reaches: no longer match
/// can exist below it.
#[derive(Debug)]
pub struct RomajiTrie {
    root: Node,
}

impl RomajiTrie {
    /// Build a trie from `(romaji, kana)` pairs.
    ///
    /// Rejects keys outside `[a-z]`, keys that extend or are extended by an
    /// existing key, and duplicates. These are data bugs in the mapping
    /// table, never runtime conditions.
    pub fn from_mappings<'a, I>(mappings: I) -> Result<Self, RomajiConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut trie = RomajiTrie { root: Node::new() };
        for (romaji, kana) in mappings {
            trie.insert(romaji, kana)?;
        }
        Ok(trie)
    }

    fn insert(&mut self, romaji: &str, kana: &str) -> Result<(), RomajiConfigError> {
        if romaji.is_empty() {
            return Err(RomajiConfigError::InvalidKey(romaji.to_string()));
        }

        let mut node = &mut self.root;
        for b in romaji.bytes() {
            if !b.is_ascii_lowercase() {
                return Err(RomajiConfigError::InvalidKey(romaji.to_string()));
            }
            if node.kana.is_some() {
                return Err(RomajiConfigError::ShadowedKey(romaji.to_string()));
            }
            node = node.children[(b - b'a') as usize].get_or_insert_with(|| Box::new(Node::new()));
        }

        if node.kana.is_some() {
            return Err(RomajiConfigError::Duplicate(romaji.to_string()));
        }
        if node.has_children() {
            return Err(RomajiConfigError::PrefixKey(romaji.to_string()));
        }
        node.kana = Some(kana.to_string());
        Ok(())
    }

    /// Longest-match lookup at the start of `chars`.
    ///
    /// Walks child links until a non-letter, a missing child, or a terminal.
    /// Returns the terminal's kana and the number of code points consumed,
    /// or `None` when the walk ends without reaching one.
    pub fn longest_match(&self, chars: &[char]) -> Option<(&str, usize)> {
        let mut node = &self.root;
        for (i, &ch) in chars.iter().enumerate() {
            if !ch.is_ascii_lowercase() {
                return None;
            }
            node = node.children[(ch as u8 - b'a') as usize].as_deref()?;
            if let Some(kana) = node.kana.as_deref() {
                return Some((kana, i + 1));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::parse_romaji_toml;
    use super::super::table::DEFAULT_TOML;
    use super::*;

    fn default_trie() -> RomajiTrie {
        let map = parse_romaji_toml(DEFAULT_TOML).unwrap();
        RomajiTrie::from_mappings(map.iter().map(|(k, v)| (k.as_str(), v.as_str()))).unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn match_vowel() {
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("a")), Some(("あ", 1)));
    }

    #[test]
    fn match_ka() {
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("ka")), Some(("か", 2)));
    }

    #[test]
    fn match_stops_at_first_terminal() {
        // Only "ka" is consumed even when more syllables follow.
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("kana")), Some(("か", 2)));
    }

    #[test]
    fn match_youon_kya() {
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("kya")), Some(("きゃ", 3)));
    }

    #[test]
    fn match_irregular_spellings() {
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("shi")), Some(("し", 3)));
        assert_eq!(trie.longest_match(&chars("si")), Some(("し", 2)));
        assert_eq!(trie.longest_match(&chars("tsu")), Some(("つ", 3)));
        assert_eq!(trie.longest_match(&chars("tu")), Some(("つ", 2)));
    }

    #[test]
    fn match_nn() {
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("nn")), Some(("ん", 2)));
    }

    #[test]
    fn no_match_on_bare_consonant() {
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("k")), None);
        assert_eq!(trie.longest_match(&chars("n")), None);
        assert_eq!(trie.longest_match(&chars("sh")), None);
    }

    #[test]
    fn no_match_on_unmapped_letter() {
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("xya")), None);
        assert_eq!(trie.longest_match(&chars("q")), None);
    }

    #[test]
    fn no_match_on_non_letter() {
        let trie = default_trie();
        assert_eq!(trie.longest_match(&chars("KA")), None);
        assert_eq!(trie.longest_match(&chars("1a")), None);
        assert_eq!(trie.longest_match(&chars("あ")), None);
        assert_eq!(trie.longest_match(&[]), None);
    }

    #[test]
    fn all_default_mappings_reachable() {
        let trie = default_trie();
        let map = parse_romaji_toml(DEFAULT_TOML).unwrap();
        for (romaji, kana) in &map {
            let input = chars(romaji);
            match trie.longest_match(&input) {
                Some((k, consumed)) => {
                    assert_eq!(k, kana, "mapping mismatch for romaji={romaji}");
                    assert_eq!(consumed, input.len(), "short match for romaji={romaji}");
                }
                None => panic!("no match for {romaji}"),
            }
        }
    }

    #[test]
    fn reject_key_extending_complete_key() {
        let err = RomajiTrie::from_mappings([("n", "ん"), ("na", "な")]).unwrap_err();
        assert!(matches!(err, RomajiConfigError::ShadowedKey(k) if k == "na"));
    }

    #[test]
    fn reject_key_prefixing_longer_key() {
        let err = RomajiTrie::from_mappings([("na", "な"), ("n", "ん")]).unwrap_err();
        assert!(matches!(err, RomajiConfigError::PrefixKey(k) if k == "n"));
    }

    #[test]
    fn reject_duplicate_key() {
        let err = RomajiTrie::from_mappings([("ka", "か"), ("ka", "カ")]).unwrap_err();
        assert!(matches!(err, RomajiConfigError::Duplicate(k) if k == "ka"));
    }

    #[test]
    fn reject_invalid_key() {
        let err = RomajiTrie::from_mappings([("k-a", "か")]).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(_)));

        let err = RomajiTrie::from_mappings([("", "か")]).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(_)));
    }
}
