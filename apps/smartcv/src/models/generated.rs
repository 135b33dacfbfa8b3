//! Model-generated CV content, keyed by the dynamic section identifiers
//! that were configured at generation time. Produced fresh per request,
//! consumed once by the renderer, never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sections::{SectionKind, SectionRegistry};

/// Structured content recovered from the model's reply: one free-text
/// profile paragraph plus an ordered item list per list-kind identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub profile: String,
    pub lists: BTreeMap<String, Vec<String>>,
}

impl GeneratedContent {
    /// One empty slot per registry entry: an empty profile string and an
    /// empty item list for every list-kind identifier.
    pub fn empty_for(registry: &SectionRegistry) -> Self {
        let mut content = GeneratedContent::default();
        for spec in registry.iter() {
            if spec.kind == SectionKind::List {
                content.lists.insert(spec.identifier.clone(), Vec::new());
            }
        }
        content
    }

    /// Items for a list section; missing and never-generated are the same.
    pub fn items(&self, identifier: &str) -> &[String] {
        self.lists
            .get(identifier)
            .map(|items| items.as_slice())
            .unwrap_or(&[])
    }

    /// True when nothing usable was recovered from the reply.
    pub fn is_empty(&self) -> bool {
        self.profile.is_empty() && self.lists.values().all(|items| items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_for_creates_one_slot_per_list_section() {
        let mut registry = SectionRegistry::new();
        registry.insert("Key Skills").unwrap();
        registry.insert("Interests").unwrap();

        let content = GeneratedContent::empty_for(&registry);
        assert!(content.profile.is_empty());
        assert_eq!(content.lists.len(), 2);
        assert!(content.lists.contains_key("key_skills"));
        assert!(content.lists.contains_key("interests"));
        assert!(content.is_empty());
    }

    #[test]
    fn test_items_treats_missing_as_empty() {
        let content = GeneratedContent::default();
        assert!(content.items("never_generated").is_empty());
    }

    #[test]
    fn test_is_empty_false_once_anything_recovered() {
        let mut content = GeneratedContent::default();
        content
            .lists
            .insert("skills".to_string(), vec!["Rust".to_string()]);
        assert!(!content.is_empty());
    }
}
