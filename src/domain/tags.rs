//! Hashtag extraction from entry text

use regex::Regex;
use std::sync::OnceLock;

/// Regex for matching hashtags: #word, #word-with-dashes, CJK included
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#([\w-]+)").unwrap())
}

/// Extract hashtags from free text, keeping the leading `#`, original case,
/// and first-seen order; duplicates are dropped.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for cap in tag_regex().captures_iter(text) {
        let tag = format!("#{}", &cap[1]);
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}
