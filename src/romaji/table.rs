/// Default romaji → hiragana table, embedded at compile time.
/// `build.rs` checks that the file is well-formed TOML; the key and value
/// rules are enforced by `parse_romaji_toml` when a converter is built.
pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

/// Returns the embedded default mapping table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
