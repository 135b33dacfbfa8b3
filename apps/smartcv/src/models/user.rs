//! User-entered CV data. Accumulated by the caller across sessions; the
//! generation and render pipeline treats it as an immutable input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language proficiency, stored in its canonical form regardless of the
/// caller's display locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Native,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Native => "Native",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Beginner" => Ok(Proficiency::Beginner),
            "Intermediate" => Ok(Proficiency::Intermediate),
            "Advanced" => Ok(Proficiency::Advanced),
            "Native" => Ok(Proficiency::Native),
            other => Err(format!("unknown proficiency '{other}'")),
        }
    }
}

/// One work-history entry. `location` may be empty; `details` are the
/// bullet lines rendered under the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub authority: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: Proficiency,
}

/// Everything the user typed in. Empty strings mean "not provided"; the
/// renderer's guards treat empty and absent identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub languages: Vec<Language>,
}
