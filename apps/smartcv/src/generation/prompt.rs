//! Prompt Builder: turns the job description, the exclusion word list, and
//! the configured dynamic sections into one instruction document for the
//! model.

use std::fmt::Write;

use crate::generation::prompts::{
    EXAMPLE_LIST_BODY, EXAMPLE_PROFILE_BODY, FORMAT_DIRECTIVE, NO_EXCLUDED_TERMS, PROMPT_PREAMBLE,
};
use crate::sections::{SectionKind, SectionRegistry};

/// Builds the generation prompt.
///
/// One numbered instruction per registry entry, in registry iteration
/// order: the profile entry asks for a 2-3 sentence summary tailored to the
/// job description, every other entry for a bulleted list. Each section is
/// requested under the heading `### {display name}`, and a worked example
/// block shows the expected shape for both kinds.
///
/// A registry without a profile entry is a programming error, not a
/// runtime condition to recover from.
pub fn build_prompt(
    job_description: &str,
    excluded_terms: &[String],
    sections: &SectionRegistry,
) -> String {
    debug_assert!(
        sections.contains(crate::sections::PROFILE_KEY),
        "section registry must always contain the profile entry"
    );

    let mut instructions = String::new();
    let mut format_examples: Vec<String> = Vec::with_capacity(sections.len());

    for (index, spec) in sections.iter().enumerate() {
        let number = index + 1;
        match spec.kind {
            SectionKind::Profile => {
                let _ = writeln!(
                    instructions,
                    "{number}. **Generate a {name}:** Write a 2-3 sentence professional summary \
                     for the top of the CV, tailored to this job.",
                    name = spec.display_name
                );
                format_examples.push(format!(
                    "### {}\n{}",
                    spec.display_name, EXAMPLE_PROFILE_BODY
                ));
            }
            SectionKind::List => {
                let _ = writeln!(
                    instructions,
                    "{number}. **Generate {name}:** Create a bulleted list of essential items \
                     for this section (like skills, interests, etc.) based on the job description.",
                    name = spec.display_name
                );
                format_examples.push(format!("### {}\n{}", spec.display_name, EXAMPLE_LIST_BODY));
            }
        }
    }

    let excluded = if excluded_terms.is_empty() {
        NO_EXCLUDED_TERMS.to_string()
    } else {
        excluded_terms.join(", ")
    };

    format!(
        "{preamble}\n\n\
         **Job Description:**\n\
         ---\n\
         {job_description}\n\
         ---\n\n\
         **Instructions:**\n\
         {instructions}\
         - **DO NOT use the following words in your response:** {excluded}\n\
         {format_directive}\n\n\
         **Example Output Format:**\n\
         {examples}\n",
        preamble = PROMPT_PREAMBLE,
        format_directive = FORMAT_DIRECTIVE,
        examples = format_examples.join("\n\n"),
    )
}
