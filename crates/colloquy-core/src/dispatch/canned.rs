//! Fixed catalog of canned replies for responders without a model.

use rand::Rng;

/// Replies served by `none`-kind responders. Fixed, non-empty, and each
/// entry within the 128-character message bound.
const DEFAULT_REPLIES: &[&str] = &[
    "Tell me more about that.",
    "Interesting. What happened next?",
    "I see. How does that make you feel?",
    "Good point. Can you give an example?",
    "Let's stay on that thought for a moment.",
    "That sounds important. Why do you think so?",
    "Noted. What would you like to talk about now?",
];

/// A fixed, non-empty catalog of canned reply strings.
pub struct CannedCatalog {
    replies: Vec<String>,
}

impl CannedCatalog {
    /// Build a catalog from custom replies.
    ///
    /// # Panics
    ///
    /// Panics when `replies` is empty; the local strategy has no other
    /// source of text.
    pub fn new(replies: Vec<String>) -> Self {
        assert!(!replies.is_empty(), "canned catalog must not be empty");
        Self { replies }
    }

    /// Pick one entry uniformly at random.
    pub fn pick(&self) -> &str {
        let idx = rand::thread_rng().gen_range(0..self.replies.len());
        &self.replies[idx]
    }

    /// All entries, for membership checks.
    pub fn entries(&self) -> &[String] {
        &self.replies
    }
}

impl Default for CannedCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colloquy_types::conversation::normalize_content;

    #[test]
    fn test_default_catalog_within_bounds() {
        let catalog = CannedCatalog::default();
        assert!(!catalog.entries().is_empty());
        for entry in catalog.entries() {
            assert_eq!(normalize_content(entry).unwrap(), *entry);
        }
    }

    #[test]
    fn test_pick_draws_from_catalog() {
        let catalog = CannedCatalog::default();
        for _ in 0..50 {
            let picked = catalog.pick().to_string();
            assert!(catalog.entries().contains(&picked));
        }
    }

    #[test]
    fn test_single_entry_catalog() {
        let catalog = CannedCatalog::new(vec!["hi".to_string()]);
        assert_eq!(catalog.pick(), "hi");
    }

    #[test]
    #[should_panic(expected = "canned catalog must not be empty")]
    fn test_empty_catalog_panics() {
        CannedCatalog::new(Vec::new());
    }
}
