pub const DEFAULT_TAG: &str = "general";

const TAG_KEYWORDS: [(&str, &[&str]); 6] = [
    ("urgent", &["urgent", "asap", "immediately", "critical"]),
    ("login", &["login", "sign in", "authentication", "password"]),
    ("billing", &["billing", "payment", "invoice", "charge"]),
    ("bug", &["bug", "error", "crash", "broken", "not working"]),
    ("feature", &["feature", "request", "enhancement", "improvement"]),
    ("integration", &["api", "integration", "webhook", "sync"]),
];

/// Derive tags from the ticket text. Each tag group is checked on its own, so
/// several tags can match; with no match the result is the single default tag.
pub fn extract_tags(subject: &str, description: &str) -> Vec<String> {
    let text = format!("{subject} {description}").to_lowercase();

    let tags: Vec<String> = TAG_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(tag, _)| tag.to_string())
        .collect();

    if tags.is_empty() {
        vec![DEFAULT_TAG.to_string()]
    } else {
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_matching_group() {
        let tags = extract_tags("Urgent", "there is a bug in checkout");
        assert_eq!(tags, vec!["urgent", "bug"]);
    }

    #[test]
    fn matches_multi_word_synonyms_across_subject_and_description() {
        let tags = extract_tags("Cannot sign in", "sync is not working either");
        assert_eq!(tags, vec!["login", "bug", "integration"]);
    }

    #[test]
    fn synonyms_do_not_duplicate_a_tag() {
        let tags = extract_tags("payment failed", "invoice charge billing");
        assert_eq!(tags, vec!["billing"]);
    }

    #[test]
    fn falls_back_to_default_tag() {
        assert_eq!(extract_tags("Hello", "Just saying thanks"), vec![DEFAULT_TAG]);
    }
}
