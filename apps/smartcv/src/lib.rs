//! SmartCV: turns a job description plus user-entered career data into a
//! tailored `.docx` curriculum vitae, with the narrative sections written
//! by a chat-completions model.
//!
//! The flow is: configure sections ([`sections::SectionRegistry`]) → build
//! the instruction prompt ([`generation::build_prompt`]) → call the model
//! ([`llm_client::ChatClient`]) → recover structured content
//! ([`generation::parse_response`]) → merge with user data into an ordered
//! section plan and paint it in one of two styles ([`render`]).

pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod render;
pub mod sections;
pub mod storage;

pub use config::{Config, Provider};
pub use errors::AppError;
pub use generation::pipeline::GenerationRequest;
pub use generation::{build_prompt, generate_content, parse_response, spawn_generation, validate_request};
pub use llm_client::{ChatClient, ChatCompleter, LlmError};
pub use models::{GeneratedContent, UserRecord};
pub use render::{build_plan, render_document, write_document, Template};
pub use sections::{derive_identifier, sync_section_order, SectionKind, SectionRegistry, SectionSpec};
pub use storage::{SettingsFile, SettingsStore};
