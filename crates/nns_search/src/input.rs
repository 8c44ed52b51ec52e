/// Splits free-text entity input: one entity per line, trimmed, blank
/// lines dropped. Duplicates are kept, submission order is preserved.
pub fn parse_entities(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a comma-separated keyword list, trimming entries and dropping
/// empty ones.
pub fn parse_extra_keywords(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}
