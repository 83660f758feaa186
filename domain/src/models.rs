use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder candidate profile produced by the mock resume loader.
/// Never mutated after creation; dropped on session reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: String,
}

impl Profile {
    /// Skill at `index`, or an empty string when the profile lists fewer.
    pub fn skill(&self, index: usize) -> &str {
        self.skills.get(index).map(String::as_str).unwrap_or("")
    }

    /// Job title of the most recent experience entry ("<role> at <company>").
    pub fn latest_role(&self) -> &str {
        self.experience
            .first()
            .and_then(|entry| entry.split(" at ").next())
            .unwrap_or("developer")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Technical,
    Behavioral,
    Hr,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Technical => write!(f, "technical"),
            QuestionKind::Behavioral => write!(f, "behavioral"),
            QuestionKind::Hr => write!(f, "hr"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Mixed,
    Technical,
    Behavioral,
    Hr,
}

impl InterviewType {
    pub const ALL: [InterviewType; 4] = [
        InterviewType::Mixed,
        InterviewType::Technical,
        InterviewType::Behavioral,
        InterviewType::Hr,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterviewType::Mixed => "Mixed (Technical + Behavioral + HR)",
            InterviewType::Technical => "Technical Only",
            InterviewType::Behavioral => "Behavioral Only",
            InterviewType::Hr => "HR Only",
        }
    }

    /// The question kind this type filters on; `None` means no filter.
    pub fn kind_filter(&self) -> Option<QuestionKind> {
        match self {
            InterviewType::Mixed => None,
            InterviewType::Technical => Some(QuestionKind::Technical),
            InterviewType::Behavioral => Some(QuestionKind::Behavioral),
            InterviewType::Hr => Some(QuestionKind::Hr),
        }
    }
}

impl FromStr for InterviewType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mixed" => Ok(InterviewType::Mixed),
            "technical" => Ok(InterviewType::Technical),
            "behavioral" => Ok(InterviewType::Behavioral),
            "hr" => Ok(InterviewType::Hr),
            other => Err(anyhow::anyhow!(
                "unknown interview type '{}' (expected mixed, technical, behavioral or hr)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior Level",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entry" => Ok(ExperienceLevel::Entry),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            other => Err(anyhow::anyhow!(
                "unknown experience level '{}' (expected entry, mid or senior)",
                other
            )),
        }
    }
}

/// Interview parameters chosen in the config stage.
///
/// `experience_level` is stored and shown in the summary header but does
/// not influence question selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InterviewConfig {
    pub interview_type: InterviewType,
    pub experience_level: ExperienceLevel,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            interview_type: InterviewType::Mixed,
            experience_level: ExperienceLevel::Mid,
        }
    }
}

/// A single scripted question. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub kind: QuestionKind,
    pub category: String,
}
