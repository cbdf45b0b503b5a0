fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/romaji/default_table.toml",
        include_str!("src/romaji/default_table.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
