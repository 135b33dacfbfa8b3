//! Section registry: the user-configurable mapping from section identifier
//! to display name, plus the fixed structured-section key set and the
//! section-order sync used before reordering and rendering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Identifier of the single free-text summary section.
pub const PROFILE_KEY: &str = "profile";

/// Sections filled from user-entered data, never generated by the model.
pub const STRUCTURED_KEYS: [&str; 4] = ["experiences", "education", "certifications", "languages"];

/// Default display name for the profile section.
pub const DEFAULT_PROFILE_NAME: &str = "Profile Summary";

/// How a section's content is shaped: one free-text paragraph, or an
/// ordered list of bullet items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Profile,
    List,
}

/// One configured section: stable identifier, user-chosen display name, kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub identifier: String,
    pub display_name: String,
    pub kind: SectionKind,
}

/// Derives the stable identifier for a display name: trim, lower-case,
/// collapse each whitespace run to a single `_`, drop everything outside
/// `[a-z0-9_]`. Deterministic; two display names that collide after
/// derivation overwrite each other in the registry (last write wins).
pub fn derive_identifier(display_name: &str) -> String {
    let lowered = display_name.trim().to_lowercase();
    let mut identifier = String::with_capacity(lowered.len());
    let mut pending_underscore = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            pending_underscore = true;
            continue;
        }
        if pending_underscore {
            identifier.push('_');
            pending_underscore = false;
        }
        if matches!(ch, 'a'..='z' | '0'..='9' | '_') {
            identifier.push(ch);
        }
    }
    identifier
}

/// Insertion-ordered mapping of identifier to [`SectionSpec`].
///
/// Always contains `profile`. Iteration order is the order entries were
/// first inserted; the response parser's first-match rule and the prompt's
/// instruction numbering both depend on it being stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionRegistry {
    specs: Vec<SectionSpec>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRegistry {
    /// A registry containing only the profile section under its default name.
    pub fn new() -> Self {
        Self::with_profile_name(DEFAULT_PROFILE_NAME)
    }

    pub fn with_profile_name(display_name: &str) -> Self {
        let name = if display_name.trim().is_empty() {
            DEFAULT_PROFILE_NAME
        } else {
            display_name
        };
        SectionRegistry {
            specs: vec![SectionSpec {
                identifier: PROFILE_KEY.to_string(),
                display_name: name.to_string(),
                kind: SectionKind::Profile,
            }],
        }
    }

    /// Rebuilds a registry from persisted specs, restoring the invariants a
    /// hand-edited settings file may have broken: a profile entry always
    /// exists and every other entry is list-kind.
    pub fn from_specs(specs: Vec<SectionSpec>) -> Self {
        let mut registry = match specs.iter().find(|s| s.identifier == PROFILE_KEY) {
            Some(profile) => Self::with_profile_name(&profile.display_name),
            None => Self::new(),
        };
        for spec in specs {
            if spec.identifier != PROFILE_KEY {
                registry.insert(&spec.display_name);
            }
        }
        registry
    }

    /// Adds a list section named `display_name`, deriving its identifier.
    /// If the derived identifier already exists the display name is
    /// overwritten in place (last write wins, position kept). Returns the
    /// identifier, or `None` when the name derives to nothing usable.
    pub fn insert(&mut self, display_name: &str) -> Option<String> {
        let display_name = display_name.trim();
        let identifier = derive_identifier(display_name);
        if identifier.is_empty() {
            return None;
        }
        if let Some(existing) = self.specs.iter_mut().find(|s| s.identifier == identifier) {
            existing.display_name = display_name.to_string();
        } else {
            self.specs.push(SectionSpec {
                identifier: identifier.clone(),
                display_name: display_name.to_string(),
                kind: SectionKind::List,
            });
        }
        Some(identifier)
    }

    /// Renames the profile section, keeping its fixed identifier.
    pub fn rename_profile(&mut self, display_name: &str) {
        let name = if display_name.trim().is_empty() {
            DEFAULT_PROFILE_NAME
        } else {
            display_name.trim()
        };
        if let Some(profile) = self.specs.iter_mut().find(|s| s.identifier == PROFILE_KEY) {
            profile.display_name = name.to_string();
        }
    }

    /// Removes a dynamic section. The profile section cannot be removed.
    pub fn remove(&mut self, identifier: &str) -> bool {
        if identifier == PROFILE_KEY {
            return false;
        }
        let before = self.specs.len();
        self.specs.retain(|s| s.identifier != identifier);
        self.specs.len() != before
    }

    pub fn get(&self, identifier: &str) -> Option<&SectionSpec> {
        self.specs.iter().find(|s| s.identifier == identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    pub fn display_name(&self, identifier: &str) -> Option<&str> {
        self.get(identifier).map(|s| s.display_name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionSpec> {
        self.specs.iter()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Display name used for a structured section absent from the registry.
pub fn structured_display_name(identifier: &str) -> Option<&'static str> {
    match identifier {
        "experiences" => Some("Experience"),
        "education" => Some("Education"),
        "certifications" => Some("Certifications"),
        "languages" => Some("Languages"),
        _ => None,
    }
}

/// Reconciles a stored section order with the identifiers that currently
/// exist (dynamic registry entries plus the structured sections).
///
/// Stale identifiers are dropped, survivors keep their relative order, and
/// missing identifiers are appended: registry iteration order first, then
/// the structured keys. Duplicates in the stored order are collapsed to
/// their first occurrence, so the operation is idempotent even on input
/// that violates the exactly-once invariant.
pub fn sync_section_order(order: &[String], registry: &SectionRegistry) -> Vec<String> {
    let known: HashSet<&str> = registry
        .identifiers()
        .chain(STRUCTURED_KEYS.iter().copied())
        .collect();

    let mut synced: Vec<String> = Vec::with_capacity(known.len());
    for key in order {
        if known.contains(key.as_str()) && !synced.iter().any(|k| k == key) {
            synced.push(key.clone());
        }
    }
    for key in registry
        .identifiers()
        .chain(STRUCTURED_KEYS.iter().copied())
    {
        if !synced.iter().any(|k| k == key) {
            synced.push(key.to_string());
        }
    }
    synced
}

/// The order used when nothing has been stored yet.
pub fn default_section_order() -> Vec<String> {
    [
        "profile",
        "experiences",
        "skills",
        "interests",
        "education",
        "certifications",
        "languages",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}
