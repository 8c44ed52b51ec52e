/// Built-in negative-context search terms. Four families are covered:
/// fraud/scam wording, legal and financial distress, reputational damage,
/// and business closure. User-supplied terms are appended after these.
pub const DEFAULT_NEGATIVE_KEYWORDS: &[&str] = &[
    // fraud / scam
    "scam",
    "fraud",
    "fraudulent",
    "ripoff",
    "stole",
    // legal / financial distress
    "lawsuit",
    "court filing",
    "bankruptcy",
    "chapter 11",
    "fine",
    "penalty",
    // reputational
    "complaint",
    "bad review",
    "negative review",
    "bbb f rating",
    // closure / abandonment
    "closed",
    "shut down",
    "out of business",
    "not answering",
];

/// Composes the keyword set for a run: built-ins first, then any extra
/// user terms in the order given. No deduplication or normalization is
/// applied, matching is left entirely to the search provider.
pub fn negative_keywords(extra: &[String]) -> Vec<String> {
    DEFAULT_NEGATIVE_KEYWORDS
        .iter()
        .map(|kw| kw.to_string())
        .chain(extra.iter().cloned())
        .collect()
}
