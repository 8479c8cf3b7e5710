/// Lookup key for a word or prefix as typed or read from a line.
pub fn normalize_key(raw: &str) -> &str {
    raw.trim()
}

/// The word a source line contributes, or `None` for blank lines.
pub fn word_from_line(line: &str) -> Option<&str> {
    let word = normalize_key(line);
    if word.is_empty() {
        return None;
    }
    Some(word)
}

pub fn parse_choice(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

pub fn suggestion_lines(suggestions: &[String]) -> Vec<String> {
    suggestions
        .iter()
        .map(|suggestion| format!("   • {}", suggestion))
        .collect()
}
