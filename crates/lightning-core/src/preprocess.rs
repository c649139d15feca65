use unicode_normalization::UnicodeNormalization;

/// Canonical dictionary key for a raw spreadsheet word: trimmed, NFKC, lower-cased.
pub fn normalize_word(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    text.nfkc().collect::<String>().trim().to_lowercase()
}
