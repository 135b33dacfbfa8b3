//! Response Parser: recovers structured section content from the model's
//! free-text reply.

use crate::models::GeneratedContent;
use crate::sections::{SectionKind, SectionRegistry};

/// Parses a model reply into [`GeneratedContent`].
///
/// A lookup of lower-cased `### {display name}` prefixes is built from the
/// registry; the reply is scanned line by line. A line whose lower-cased,
/// trimmed form starts with a known heading switches the current section
/// (first match in registry iteration order wins, so a display name that is
/// a prefix of another heading line can claim it; this mirrors the
/// documented matching rule rather than second-guessing it). Under the
/// profile section, plain lines are space-joined and unrecognized `###`
/// headings are ignored; under a list section only `-`/`*` bullets are
/// accepted, with one leading marker stripped. Text before the first
/// recognized heading is discarded.
///
/// This function never fails: the worst malformed input yields all-empty
/// content, which the renderer simply omits.
pub fn parse_response(raw_text: &str, sections: &SectionRegistry) -> GeneratedContent {
    let mut content = GeneratedContent::empty_for(sections);

    // (lower-cased heading prefix, identifier, kind), in registry order.
    let headings: Vec<(String, &str, SectionKind)> = sections
        .iter()
        .map(|spec| {
            (
                format!("### {}", spec.display_name).to_lowercase(),
                spec.identifier.as_str(),
                spec.kind,
            )
        })
        .collect();

    let mut current: Option<(&str, SectionKind)> = None;

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line_lower = line.to_lowercase();
        if let Some(&(_, identifier, kind)) = headings
            .iter()
            .find(|(heading, _, _)| line_lower.starts_with(heading.as_str()))
        {
            current = Some((identifier, kind));
            continue;
        }

        match current {
            Some((_, SectionKind::Profile)) => {
                // Headings the registry does not know about must not leak
                // into the summary text.
                if !line.starts_with("###") {
                    content.profile.push_str(line);
                    content.profile.push(' ');
                }
            }
            Some((identifier, SectionKind::List)) => {
                if let Some(item) = line
                    .strip_prefix('-')
                    .or_else(|| line.strip_prefix('*'))
                    .map(str::trim)
                {
                    if let Some(items) = content.lists.get_mut(identifier) {
                        items.push(item.to_string());
                    }
                }
            }
            None => {} // before the first recognized heading
        }
    }

    content.profile = content.profile.trim().to_string();
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionRegistry;

    fn registry() -> SectionRegistry {
        let mut registry = SectionRegistry::with_profile_name("Profile Summary");
        registry.insert("Key Skills").unwrap();
        registry.insert("Interests").unwrap();
        registry
    }

    #[test]
    fn test_well_formed_reply_recovers_every_section() {
        let reply = "### Profile Summary\n\
                     A seasoned engineer with a decade of systems work.\n\
                     Comfortable across the stack.\n\n\
                     ### Key Skills\n\
                     - Rust\n\
                     - Distributed systems\n\n\
                     ### Interests\n\
                     - Open source\n";
        let content = parse_response(reply, &registry());
        assert_eq!(
            content.profile,
            "A seasoned engineer with a decade of systems work. Comfortable across the stack."
        );
        assert_eq!(content.items("key_skills"), ["Rust", "Distributed systems"]);
        assert_eq!(content.items("interests"), ["Open source"]);
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        for heading in ["### PROFILE SUMMARY", "### profile summary", "### Profile Summary"] {
            let reply = format!("{heading}\nSteady output either way.");
            let content = parse_response(&reply, &registry());
            assert_eq!(content.profile, "Steady output either way.", "{heading}");
        }
    }

    #[test]
    fn test_heading_matches_by_prefix_with_trailing_text() {
        let reply = "### Key Skills (tailored)\n- Rust\n";
        let content = parse_response(reply, &registry());
        assert_eq!(content.items("key_skills"), ["Rust"]);
    }

    #[test]
    fn test_first_registry_match_wins_for_prefix_overlap() {
        // "Key Skills" precedes "Key Skills And Tools" in the registry, so
        // the longer heading is claimed by the shorter prefix.
        let mut registry = SectionRegistry::new();
        registry.insert("Key Skills").unwrap();
        registry.insert("Key Skills And Tools").unwrap();
        let reply = "### Key Skills And Tools\n- Git\n";
        let content = parse_response(reply, &registry);
        assert_eq!(content.items("key_skills"), ["Git"]);
        assert!(content.items("key_skills_and_tools").is_empty());
    }

    #[test]
    fn test_bullet_markers_and_padding_are_stripped() {
        let reply = "### Key Skills\n- Python\n* Go\n  -  Rust  \n";
        let content = parse_response(reply, &registry());
        assert_eq!(content.items("key_skills"), ["Python", "Go", "Rust"]);
    }

    #[test]
    fn test_non_bullet_lines_in_list_sections_are_dropped() {
        let reply = "### Key Skills\nHere are the skills you asked for:\n- Rust\n";
        let content = parse_response(reply, &registry());
        assert_eq!(content.items("key_skills"), ["Rust"]);
    }

    #[test]
    fn test_text_before_first_heading_is_discarded() {
        let reply = "Sure! Here is your CV content.\n\n### Profile Summary\nThe real text.";
        let content = parse_response(reply, &registry());
        assert_eq!(content.profile, "The real text.");
    }

    #[test]
    fn test_unknown_heading_does_not_leak_into_profile() {
        let reply = "### Profile Summary\nFirst sentence.\n### Unknown Section\nSecond sentence.";
        let content = parse_response(reply, &registry());
        // The unknown heading line is ignored, but the profile stays the
        // active section, so prose after it still accumulates.
        assert_eq!(content.profile, "First sentence. Second sentence.");
    }

    #[test]
    fn test_missing_section_keeps_empty_slot() {
        let reply = "### Profile Summary\nOnly a summary this time.";
        let content = parse_response(reply, &registry());
        assert!(content.items("key_skills").is_empty());
        assert!(content.items("interests").is_empty());
    }

    #[test]
    fn test_garbage_input_degrades_to_empty_content() {
        let content = parse_response("complete nonsense\nwith - dashes\n*** stars", &registry());
        assert!(content.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_content() {
        let content = parse_response("", &registry());
        assert!(content.is_empty());
        assert_eq!(content.lists.len(), 2);
    }
}
