// Constant prompt fragments for CV content generation. The per-section
// instruction lines are assembled at call time from the section registry.

/// Opening line framing the assistant's task.
pub const PROMPT_PREAMBLE: &str = "You are an expert CV and resume assistant. Your task is to \
analyze the provided job description and generate relevant, concise, and ATS-friendly content \
for a CV.";

/// Formatting directive. The parser matches headings case-insensitively by
/// prefix, but the heading text itself must be the exact display name, so
/// the model is never invited to paraphrase headings.
pub const FORMAT_DIRECTIVE: &str = "- **Format your entire response clearly** with headings for \
each section using \"###\" followed by the exact section name provided in the instructions. Do \
not add any extra text before or after the content.";

/// Marker emitted when the excluded-terms list is empty.
pub const NO_EXCLUDED_TERMS: &str = "None";

/// Body of the worked profile-style example.
pub const EXAMPLE_PROFILE_BODY: &str = "A results-oriented professional with experience in...";

/// Body of the worked list-style example.
pub const EXAMPLE_LIST_BODY: &str = "- Item A\n- Item B";
