//! Catalog data models: degree levels, majors, programs and career profiles.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Degree level shared by programs, pathway requests and cost inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    Associate,
    Bachelor,
}

impl DegreeLevel {
    /// Length of the degree in academic years.
    pub fn years(&self) -> u32 {
        match self {
            Self::Associate => 2,
            Self::Bachelor => 4,
        }
    }

    /// Human-readable name, e.g. "Associate's".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Associate => "Associate's",
            Self::Bachelor => "Bachelor's",
        }
    }
}

impl Default for DegreeLevel {
    fn default() -> Self {
        Self::Associate
    }
}

impl std::fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Associate => write!(f, "associate"),
            Self::Bachelor => write!(f, "bachelor"),
        }
    }
}

impl std::str::FromStr for DegreeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "associate" => Ok(Self::Associate),
            "bachelor" => Ok(Self::Bachelor),
            other => Err(format!("unknown degree level '{other}'")),
        }
    }
}

/// How demanding a program is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Entry Level")]
    EntryLevel,
    Moderate,
    Challenging,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::EntryLevel => "Entry Level",
            Self::Moderate => "Moderate",
            Self::Challenging => "Challenging",
            Self::Advanced => "Advanced",
        };
        write!(f, "{s}")
    }
}

/// A specific degree offering within a major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Unique within the owning major only.
    pub id: String,
    pub name: String,
    pub base_type: DegreeLevel,
    pub has_certification: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_name: Option<String>,
    pub duration: String,
    pub cost: Decimal,
    pub avg_salary: Decimal,
    pub job_growth: String,
    pub difficulty: Difficulty,
    pub top_skills: Vec<String>,
    pub career_paths: Vec<String>,
    /// Style token consumed by the presentation shell.
    pub color: String,
}

/// A truncated list plus how many items were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

fn preview(items: &[String], limit: usize) -> Preview<'_> {
    let end = items.len().min(limit);
    Preview {
        shown: &items[..end],
        hidden: items.len() - end,
    }
}

impl Program {
    pub fn top_skills_preview(&self, limit: usize) -> Preview<'_> {
        preview(&self.top_skills, limit)
    }

    pub fn career_paths_preview(&self, limit: usize) -> Preview<'_> {
        preview(&self.career_paths, limit)
    }
}

/// A field of study with a list of comparable programs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_provider: Option<String>,
    pub programs: Vec<Program>,
}

impl Major {
    /// Find a program of this major by id.
    pub fn program(&self, id: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }
}

/// Salary outlook for a career, used by the financial planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerProfile {
    pub title: String,
    pub avg_starting_salary: Decimal,
    pub avg_mid_career_salary: Decimal,
    pub years_to_mid_career: u32,
}
