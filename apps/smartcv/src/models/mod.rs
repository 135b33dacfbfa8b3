pub mod generated;
pub mod user;

pub use generated::GeneratedContent;
pub use user::{Certification, Experience, Language, Proficiency, UserRecord};
