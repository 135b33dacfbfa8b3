//! Modern style: centered 26pt name, `♦`-separated contact line, section
//! headings centered in a three-column table flanked by ruled lines, and a
//! two-column table for the skills section.

use docx_rs::{
    AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts, Table, TableCell, TableRow,
};

use crate::render::plan::{BodyBlock, DocumentPlan};
use crate::render::{bold_run, bullet_paragraph, italic_run, text_run, with_bullet_numbering};

const HEADING_RULE: &str = "__________________________________";
const HEADER_DIVIDER: &str = "_________________________________________________________________";
const CONTACT_SEPARATOR: &str = "  \u{2666}  ";
const HEADING_CELL_WIDTH: usize = 3600; // 2.5"
const SKILLS_CELL_WIDTH: usize = 5400; // 3.75"

/// Paints the shared plan in the modern style.
pub(crate) fn paint(plan: &DocumentPlan) -> Docx {
    let mut docx = with_bullet_numbering(
        Docx::new()
            // 0.7" margins, in twips
            .page_margin(PageMargin::new().top(1008).bottom(1008).left(1008).right(1008))
            .default_fonts(RunFonts::new().ascii("Calibri").hi_ansi("Calibri"))
            .default_size(21),
    );

    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(bold_run(&plan.header.name).size(52)),
    );
    if let Some(title) = &plan.header.title {
        docx = docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(text_run(title).size(28)),
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
        docx = docx.add_table(heading_table(&section.heading));
        for block in &section.blocks {
            docx = paint_block(docx, &section.identifier, block);
        }
    }

    docx
}

/// Section heading centered between two ruled lines, as a three-column
/// table. Column widths come from the table grid.
fn heading_table(heading: &str) -> Table {
    Table::new(vec![TableRow::new(vec![
        TableCell::new().add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Right)
                .add_run(text_run(HEADING_RULE)),
        ),
        TableCell::new().add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(bold_run(&heading.to_uppercase()).size(24)),
        ),
        TableCell::new().add_paragraph(Paragraph::new().add_run(text_run(HEADING_RULE))),
    ])])
    .set_grid(vec![
        HEADING_CELL_WIDTH,
        HEADING_CELL_WIDTH,
        HEADING_CELL_WIDTH,
    ])
}

fn paint_block(mut docx: Docx, identifier: &str, block: &BodyBlock) -> Docx {
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
                    .add_run(italic_run(&format!(" | {company}"))),
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
            // The skills section paints as a two-column table pairing
            // consecutive items; same data, different arrangement.
            if identifier == "skills" {
                docx.add_table(skills_table(items))
            } else {
                for item in items {
                    docx = docx.add_paragraph(bullet_paragraph(item));
                }
                docx
            }
        }
    }
}

fn skills_table(items: &[String]) -> Table {
    let rows = items
        .chunks(2)
        .map(|pair| {
            let right = match pair.get(1) {
                Some(item) => skill_cell(item),
                None => TableCell::new().add_paragraph(Paragraph::new()),
            };
            TableRow::new(vec![skill_cell(&pair[0]), right])
        })
        .collect();
    Table::new(rows).set_grid(vec![SKILLS_CELL_WIDTH, SKILLS_CELL_WIDTH])
}

fn skill_cell(item: &str) -> TableCell {
    TableCell::new()
        .add_paragraph(Paragraph::new().add_run(text_run(&format!("\u{2022}  {item}"))))
}
