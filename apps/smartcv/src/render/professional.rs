//! Professional style: 22pt name, `|`-separated contact line, bold
//! upper-cased section headings ruled underneath, plain bulleted lists
//! throughout.

use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts};

use crate::render::plan::{BodyBlock, DocumentPlan};
use crate::render::{bold_run, bullet_paragraph, italic_run, text_run, with_bullet_numbering};

const HEADER_DIVIDER: &str = "_________________________________________________________________";
const CONTACT_SEPARATOR: &str = " | ";

/// Paints the shared plan in the professional style.
pub(crate) fn paint(plan: &DocumentPlan) -> Docx {
    let mut docx = with_bullet_numbering(
        Docx::new()
            // 0.75" margins, in twips
            .page_margin(PageMargin::new().top(1080).bottom(1080).left(1080).right(1080))
            .default_fonts(RunFonts::new().ascii("Calibri").hi_ansi("Calibri"))
            .default_size(22),
    );

    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(bold_run(&plan.header.name).size(44)),
    );
    if let Some(title) = &plan.header.title {
        docx = docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(text_run(title).size(26)),
        );
    }
    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(text_run(&plan.header.contact_parts.join(CONTACT_SEPARATOR))),
    );
    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(text_run(HEADER_DIVIDER)),
    );

    for (index, section) in plan.sections.iter().enumerate() {
        if index > 0 {
            docx = docx.add_paragraph(Paragraph::new());
        }
        docx = docx.add_paragraph(
            Paragraph::new().add_run(
                bold_run(&section.heading.to_uppercase())
                    .size(24)
                    .underline("single"),
            ),
        );
        for block in &section.blocks {
            docx = paint_block(docx, block);
        }
    }

    docx
}

fn paint_block(mut docx: Docx, block: &BodyBlock) -> Docx {
    match block {
        BodyBlock::Paragraph(text) => docx.add_paragraph(Paragraph::new().add_run(text_run(text))),
        BodyBlock::ExperienceEntry {
            position,
            company,
            location,
            duration,
            details,
        } => {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .add_run(bold_run(position))
                    .add_run(text_run(&format!(" | {company}"))),
            );
            if !location.is_empty() || !duration.is_empty() {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(text_run(location))
                        .add_run(Run::new().add_tab())
                        .add_run(italic_run(duration)),
                );
            }
            for detail in details {
                docx = docx.add_paragraph(bullet_paragraph(detail));
            }
            docx
        }
        BodyBlock::EducationEntry { degree, university } => docx
            .add_paragraph(Paragraph::new().add_run(bold_run(degree)))
            .add_paragraph(Paragraph::new().add_run(text_run(university))),
        BodyBlock::CertificationEntry { name, authority } => docx.add_paragraph(
            Paragraph::new()
                .add_run(bold_run(name))
                .add_run(text_run(&format!(" - {authority}"))),
        ),
        BodyBlock::LanguageEntry { name, proficiency } => docx.add_paragraph(
            Paragraph::new()
                .add_run(bold_run(&format!("{name}: ")))
                .add_run(text_run(proficiency.as_str())),
        ),
        BodyBlock::BulletList(items) => {
            for item in items {
                docx = docx.add_paragraph(bullet_paragraph(item));
            }
            docx
        }
    }
}
