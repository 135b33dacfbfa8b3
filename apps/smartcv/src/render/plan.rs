//! Section plan: the style-independent half of rendering.
//!
//! `build_plan` walks the section order, applies each section's guard, and
//! produces an ordered list of sections with their textual content fully
//! resolved. Both document styles paint from this one plan, so section
//! selection, ordering, and text are identical across styles by
//! construction; only typography differs downstream.

use serde::{Deserialize, Serialize};

use crate::models::{GeneratedContent, Proficiency, UserRecord};
use crate::sections::{structured_display_name, SectionRegistry, PROFILE_KEY};

/// Header data shared by both styles. Contact parts are kept in the fixed
/// preference order (location, phone, email, linkedin); the painter joins
/// them with its own separator glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderPlan {
    pub name: String,
    pub title: Option<String>,
    pub contact_parts: Vec<String>,
}

/// One piece of section body content, textual only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyBlock {
    /// Free-text paragraph (profile summary).
    Paragraph(String),
    /// One work-history entry.
    ExperienceEntry {
        position: String,
        company: String,
        location: String,
        duration: String,
        details: Vec<String>,
    },
    /// Degree line plus university line.
    EducationEntry { degree: String, university: String },
    /// Certification name plus issuing authority, one line.
    CertificationEntry { name: String, authority: String },
    /// Language name plus canonical proficiency, one line.
    LanguageEntry {
        name: String,
        proficiency: Proficiency,
    },
    /// Bulleted items of a dynamic section.
    BulletList(Vec<String>),
}

/// A section that passed its guard, ready to paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSection {
    pub identifier: String,
    pub heading: String,
    pub blocks: Vec<BodyBlock>,
}

/// The full style-independent document: header plus ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub header: HeaderPlan,
    pub sections: Vec<PlannedSection>,
}

/// Builds the document plan from user data, generated content, the section
/// registry, and the section order. Sections whose guard fails are skipped
/// entirely; they emit nothing, not even a heading.
pub fn build_plan(
    user: &UserRecord,
    generated: &GeneratedContent,
    sections: &SectionRegistry,
    order: &[String],
) -> DocumentPlan {
    let mut contact_parts = Vec::new();
    for field in [&user.location, &user.phone, &user.email, &user.linkedin] {
        if !field.trim().is_empty() {
            contact_parts.push(field.trim().to_string());
        }
    }

    let header = HeaderPlan {
        name: user.name.trim().to_string(),
        title: match user.title.trim() {
            "" => None,
            title => Some(title.to_string()),
        },
        contact_parts,
    };

    let mut planned: Vec<PlannedSection> = Vec::new();
    for identifier in order {
        if let Some(section) = plan_section(identifier, user, generated, sections) {
            planned.push(section);
        }
    }

    DocumentPlan {
        header,
        sections: planned,
    }
}

fn plan_section(
    identifier: &str,
    user: &UserRecord,
    generated: &GeneratedContent,
    sections: &SectionRegistry,
) -> Option<PlannedSection> {
    let section = |heading: &str, blocks: Vec<BodyBlock>| PlannedSection {
        identifier: identifier.to_string(),
        heading: heading.to_string(),
        blocks,
    };

    match identifier {
        PROFILE_KEY => {
            if generated.profile.is_empty() {
                return None;
            }
            let heading = sections
                .display_name(PROFILE_KEY)
                .unwrap_or(crate::sections::DEFAULT_PROFILE_NAME);
            Some(section(
                heading,
                vec![BodyBlock::Paragraph(generated.profile.clone())],
            ))
        }
        "experiences" => {
            if user.experiences.is_empty() {
                return None;
            }
            let blocks = user
                .experiences
                .iter()
                .map(|exp| BodyBlock::ExperienceEntry {
                    position: exp.position.clone(),
                    company: exp.company.clone(),
                    location: exp.location.clone(),
                    duration: exp.duration.clone(),
                    details: exp.details.clone(),
                })
                .collect();
            Some(section(resolved_heading(identifier, sections), blocks))
        }
        "education" => {
            if user.degree.trim().is_empty() {
                return None;
            }
            Some(section(
                resolved_heading(identifier, sections),
                vec![BodyBlock::EducationEntry {
                    degree: user.degree.clone(),
                    university: user.university.clone(),
                }],
            ))
        }
        "certifications" => {
            if user.certifications.is_empty() {
                return None;
            }
            let blocks = user
                .certifications
                .iter()
                .map(|cert| BodyBlock::CertificationEntry {
                    name: cert.name.clone(),
                    authority: cert.authority.clone(),
                })
                .collect();
            Some(section(resolved_heading(identifier, sections), blocks))
        }
        "languages" => {
            if user.languages.is_empty() {
                return None;
            }
            let blocks = user
                .languages
                .iter()
                .map(|lang| BodyBlock::LanguageEntry {
                    name: lang.name.clone(),
                    proficiency: lang.proficiency,
                })
                .collect();
            Some(section(resolved_heading(identifier, sections), blocks))
        }
        dynamic => {
            // Only identifiers known to the registry render; items must be
            // present and non-empty, otherwise the section is omitted.
            let heading = sections.display_name(dynamic)?;
            let items = generated.items(dynamic);
            if items.is_empty() {
                return None;
            }
            Some(section(heading, vec![BodyBlock::BulletList(items.to_vec())]))
        }
    }
}

/// Structured sections take their display name from the registry when a
/// same-named dynamic entry exists, and fall back to the fixed default.
fn resolved_heading<'a>(identifier: &'a str, sections: &'a SectionRegistry) -> &'a str {
    sections
        .display_name(identifier)
        .or_else(|| structured_display_name(identifier))
        .unwrap_or(identifier)
}

impl DocumentPlan {
    /// The typography-free view of the document: header lines, then for
    /// each section its heading and one line per textual content line.
    /// Two plans that print identically here render the same content in
    /// every style.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let mut push = |line: &str| {
            out.push_str(line);
            out.push('\n');
        };

        push(&self.header.name);
        if let Some(title) = &self.header.title {
            push(title);
        }
        push(&self.header.contact_parts.join(" / "));

        for section in &self.sections {
            push("");
            push(&format!("[{}] {}", section.identifier, section.heading));
            for block in &section.blocks {
                match block {
                    BodyBlock::Paragraph(text) => push(text),
                    BodyBlock::ExperienceEntry {
                        position,
                        company,
                        location,
                        duration,
                        details,
                    } => {
                        push(&format!("{position} | {company}"));
                        if !location.is_empty() || !duration.is_empty() {
                            push(&format!("{location}\t{duration}"));
                        }
                        for detail in details {
                            push(&format!("- {detail}"));
                        }
                    }
                    BodyBlock::EducationEntry { degree, university } => {
                        push(degree);
                        push(university);
                    }
                    BodyBlock::CertificationEntry { name, authority } => {
                        push(&format!("{name} - {authority}"));
                    }
                    BodyBlock::LanguageEntry { name, proficiency } => {
                        push(&format!("{name}: {proficiency}"));
                    }
                    BodyBlock::BulletList(items) => {
                        for item in items {
                            push(&format!("- {item}"));
                        }
                    }
                }
            }
        }
        out
    }

    /// Identifier sequence of the sections that will actually render.
    pub fn identifiers(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.identifier.as_str()).collect()
    }
}
