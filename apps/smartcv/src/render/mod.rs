//! Document rendering: one shared section plan, two typographic styles.

pub mod modern;
pub mod plan;
pub mod professional;

pub use plan::{build_plan, BodyBlock, DocumentPlan, HeaderPlan, PlannedSection};

use std::path::Path;
use std::str::FromStr;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, Start,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::{GeneratedContent, UserRecord};
use crate::sections::SectionRegistry;

/// The two document styles. Both make identical section selection and
/// content decisions; they differ in typography only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Template {
    #[default]
    Modern,
    Professional,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Professional => "professional",
        }
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Template::Modern),
            "professional" => Ok(Template::Professional),
            other => Err(format!("unknown template '{other}'")),
        }
    }
}

/// Renders the merged document to `.docx` bytes.
pub fn render_document(
    user: &UserRecord,
    generated: &GeneratedContent,
    sections: &SectionRegistry,
    order: &[String],
    template: Template,
) -> Result<Vec<u8>, AppError> {
    let plan = build_plan(user, generated, sections, order);
    render_plan(&plan, template)
}

/// Renders an already-built plan under the chosen style.
pub fn render_plan(plan: &DocumentPlan, template: Template) -> Result<Vec<u8>, AppError> {
    let docx = match template {
        Template::Modern => modern::paint(plan),
        Template::Professional => professional::paint(plan),
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| AppError::Document(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Renders and writes the document to `path`. An unwritable destination
/// fails with the underlying I/O cause; partial files are not cleaned up.
pub fn write_document(
    path: &Path,
    user: &UserRecord,
    generated: &GeneratedContent,
    sections: &SectionRegistry,
    order: &[String],
    template: Template,
) -> Result<(), AppError> {
    let bytes = render_document(user, generated, sections, order, template)?;
    std::fs::write(path, &bytes)?;
    info!(
        "Wrote {} byte {} document to {}",
        bytes.len(),
        template.as_str(),
        path.display()
    );
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Shared docx building blocks for the two painters
// ────────────────────────────────────────────────────────────────────────────

pub(crate) const BULLET_NUMBERING_ID: usize = 1;

/// Registers the bullet list numbering both painters use.
pub(crate) fn with_bullet_numbering(docx: Docx) -> Docx {
    docx.add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        ),
    ))
    .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
}

/// One bulleted item paragraph.
pub(crate) fn bullet_paragraph(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
}

pub(crate) fn text_run(text: &str) -> Run {
    Run::new().add_text(text)
}

pub(crate) fn bold_run(text: &str) -> Run {
    Run::new().add_text(text).bold()
}

pub(crate) fn italic_run(text: &str) -> Run {
    Run::new().add_text(text).italic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Experience, Language, Proficiency};
    use crate::sections::{default_section_order, sync_section_order};

    fn fixtures() -> (UserRecord, GeneratedContent, SectionRegistry, Vec<String>) {
        let mut sections = SectionRegistry::with_profile_name("Professional Summary");
        sections.insert("Skills").unwrap();

        let user = UserRecord {
            name: "Dana Vega".to_string(),
            title: "Systems Engineer".to_string(),
            email: "dana@example.test".to_string(),
            location: "Lisbon".to_string(),
            degree: "MSc Software Engineering".to_string(),
            university: "Instituto Superior".to_string(),
            experiences: vec![Experience {
                position: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                duration: "2020 - 2024".to_string(),
                location: "Remote".to_string(),
                details: vec!["Shipped the billing pipeline".to_string()],
            }],
            languages: vec![Language {
                name: "Portuguese".to_string(),
                proficiency: Proficiency::Native,
            }],
            ..UserRecord::default()
        };

        let mut generated = GeneratedContent::empty_for(&sections);
        generated.profile = "Engineer who ships.".to_string();
        generated
            .lists
            .insert("skills".to_string(), vec!["Rust".to_string(), "SQL".to_string()]);

        let order = sync_section_order(&default_section_order(), &sections);
        (user, generated, sections, order)
    }

    #[test]
    fn test_template_from_name() {
        assert_eq!("modern".parse::<Template>().unwrap(), Template::Modern);
        assert_eq!(
            " Professional ".parse::<Template>().unwrap(),
            Template::Professional
        );
        assert!("fancy".parse::<Template>().is_err());
    }

    #[test]
    fn test_both_templates_produce_zip_archives() {
        let (user, generated, sections, order) = fixtures();
        for template in [Template::Modern, Template::Professional] {
            let bytes = render_document(&user, &generated, &sections, &order, template).unwrap();
            // .docx is a zip container; check the local-file magic.
            assert!(bytes.len() > 4, "{template:?}");
            assert_eq!(&bytes[..2], b"PK", "{template:?}");
        }
    }

    #[test]
    fn test_templates_share_one_plan() {
        let (user, generated, sections, order) = fixtures();
        let plan = build_plan(&user, &generated, &sections, &order);
        // Section selection, ordering, and text are decided before any
        // style is chosen; both templates paint this same plan.
        let again = build_plan(&user, &generated, &sections, &order);
        assert_eq!(plan, again);
        assert_eq!(plan.to_plain_text(), again.to_plain_text());
        assert!(render_plan(&plan, Template::Modern).is_ok());
        assert!(render_plan(&plan, Template::Professional).is_ok());
    }

    #[test]
    fn test_write_document_creates_file() {
        let (user, generated, sections, order) = fixtures();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        write_document(&path, &user, &generated, &sections, &order, Template::Modern).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_write_document_surfaces_io_cause() {
        let (user, generated, sections, order) = fixtures();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("cv.docx");
        let err = write_document(&path, &user, &generated, &sections, &order, Template::Modern)
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
