/// Builds the search query for one entity: the entity is double-quoted to
/// force exact-phrase matching and the keywords are OR-joined alongside it.
///
/// Keywords pass through verbatim, punctuation included. A double quote
/// inside `entity` is not escaped; the resulting query is malformed and the
/// provider rejects it, which the pipeline reports as a per-entity failure.
pub fn build_query(entity: &str, keywords: &[String]) -> String {
    let kws = keywords.join(" OR ");
    format!("\"{}\" AND ({})", entity, kws)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_entity_is_quoted_for_exact_match() {
        let query = build_query("Acme LLC", &kws(&["fraud"]));
        assert!(query.starts_with("\"Acme LLC\""));
    }

    #[test]
    fn test_keywords_or_joined_in_order() {
        let query = build_query("a@x.com", &kws(&["scam", "lawsuit", "bad review"]));
        assert_eq!(query, "\"a@x.com\" AND (scam OR lawsuit OR bad review)");
    }

    #[test]
    fn test_single_keyword_has_no_or() {
        let query = build_query("Acme", &kws(&["fraud"]));
        assert_eq!(query, "\"Acme\" AND (fraud)");
    }

    #[test]
    fn test_embedded_quote_passes_through_unescaped() {
        // Accepted edge case: the query comes out malformed and the
        // provider-side error is contained per entity.
        let query = build_query("Acme \"The Best\" LLC", &kws(&["fraud"]));
        assert_eq!(query, "\"Acme \"The Best\" LLC\" AND (fraud)");
    }
}
