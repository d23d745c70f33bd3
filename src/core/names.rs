//! Free-text name normalisation shared by the resolver and the record store.

/// Trim, collapse runs of whitespace to one space, and lower-case.
pub fn normalize_query(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Split a full name on its first whitespace into (first, last).
///
/// Everything after the first token is the surname, so suffixes and
/// multi-word surnames stay intact ("gary payton ii" -> ("gary", "payton ii")).
/// Returns `None` for a single token.
pub fn split_full_name(text: &str) -> Option<(String, String)> {
    let normalized = normalize_query(text);
    let (first, last) = normalized.split_once(' ')?;
    Some((first.to_string(), last.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  LeBron   James "), "lebron james");
        assert_eq!(normalize_query("Lakers"), "lakers");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_split_two_tokens() {
        assert_eq!(
            split_full_name("LeBron James"),
            Some(("lebron".to_string(), "james".to_string()))
        );
    }

    #[test]
    fn test_split_keeps_suffix() {
        assert_eq!(
            split_full_name("Gary Payton II"),
            Some(("gary".to_string(), "payton ii".to_string()))
        );
        assert_eq!(
            split_full_name("nick van exel"),
            Some(("nick".to_string(), "van exel".to_string()))
        );
    }

    #[test]
    fn test_split_single_token() {
        assert_eq!(split_full_name("nene"), None);
        assert_eq!(split_full_name(""), None);
    }
}
