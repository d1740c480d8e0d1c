//! Interest tag normalization and editing.

use serde::{Deserialize, Serialize};
use starmate_model::InterestsInput;

/// Trim every tag, drop empty ones and keep the first occurrence of each.
pub fn normalize_tags<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tags = InterestTags::new();
    let mut skipped = 0usize;
    for tag in raw {
        if !tags.add(tag) {
            skipped += 1;
        }
    }
    if skipped > 0 {
        tracing::trace!(skipped, kept = tags.len(), "dropped empty or duplicate tags");
    }
    tags.into_vec()
}

/// Normalize the interests field of a profile form.
pub fn normalize_interests(input: &InterestsInput) -> Vec<String> {
    normalize_tags(input.raw_tags())
}

/// Ordered, duplicate-free list of interest tags, edited one tag at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestTags {
    tags: Vec<String>,
}

impl InterestTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing tags, normalizing them on the way in.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        Self {
            tags: normalize_tags(tags.iter().map(AsRef::as_ref)),
        }
    }

    /// Add a tag. Returns false when the trimmed tag is empty or present.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove a tag by exact match. Returns false when it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| existing != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

impl From<InterestTags> for InterestsInput {
    fn from(tags: InterestTags) -> Self {
        InterestsInput::List(tags.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_comma_separated() {
        let input = InterestsInput::from(" music, music ,art");
        assert_eq!(normalize_interests(&input), vec!["music", "art"]);
    }

    #[test]
    fn test_normalize_drops_empty_tags() {
        let input = InterestsInput::from(",, ,");
        assert!(normalize_interests(&input).is_empty());

        let input = InterestsInput::List(vec![" ".to_string(), "Art".to_string()]);
        assert_eq!(normalize_interests(&input), vec!["Art"]);
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        let input = InterestsInput::from("Art, art");
        assert_eq!(normalize_interests(&input), vec!["Art", "art"]);
    }

    #[test]
    fn test_add_and_remove() {
        let mut tags = InterestTags::from_tags(&["music"]);
        assert!(tags.add(" cooking "));
        assert!(!tags.add("music"));
        assert!(!tags.add("   "));
        assert_eq!(tags.as_slice(), ["music", "cooking"]);

        assert!(tags.remove("music"));
        assert!(!tags.remove("music"));
        assert_eq!(tags.as_slice(), ["cooking"]);
    }
}
