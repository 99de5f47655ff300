//! Pathway request/response types and the fixed fallback roadmaps.

use serde::{Deserialize, Serialize};

use crate::catalog::DegreeLevel;
use crate::error::PathwayError;

/// A validated request for a generated pathway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayRequest {
    career: String,
    degree_level: DegreeLevel,
}

impl PathwayRequest {
    /// Trim the career and reject it if nothing is left.
    pub fn new(career: &str, degree_level: DegreeLevel) -> Result<Self, PathwayError> {
        let career = career.trim();
        if career.is_empty() {
            return Err(PathwayError::EmptyCareer);
        }
        Ok(Self {
            career: career.to_string(),
            degree_level,
        })
    }

    pub fn career(&self) -> &str {
        &self.career
    }

    pub fn degree_level(&self) -> DegreeLevel {
        self.degree_level
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatesSection {
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub key_courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BachelorsSection {
    #[serde(default)]
    pub universities: Vec<String>,
    #[serde(default)]
    pub articulation_agreements: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub key_courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MastersSection {
    #[serde(default)]
    pub universities: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub required: bool,
}

/// A certification or exam milestone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub timing: String,
}

/// A generated pathway. Every section is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associates: Option<AssociatesSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bachelors: Option<BachelorsSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masters: Option<MastersSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Credential>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exams: Option<Vec<Credential>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internships: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_pathways: Option<Vec<String>>,
}

impl PathwayResult {
    /// The masters section, only when it is required.
    pub fn visible_masters(&self) -> Option<&MastersSection> {
        self.masters.as_ref().filter(|m| m.required)
    }

    /// Certifications worth rendering; entries without a name are skipped.
    pub fn certifications(&self) -> impl Iterator<Item = &Credential> {
        named(self.certifications.as_deref())
    }

    /// Exams worth rendering; entries without a name are skipped.
    pub fn exams(&self) -> impl Iterator<Item = &Credential> {
        named(self.exams.as_deref())
    }

    pub fn internships(&self) -> &[String] {
        self.internships.as_deref().unwrap_or_default()
    }

    /// Whether the certifications & exams block has anything to show.
    pub fn has_credentials(&self) -> bool {
        self.certifications().next().is_some() || self.exams().next().is_some()
    }

    /// True when no renderable section is present.
    pub fn is_empty(&self) -> bool {
        self.associates.is_none()
            && self.bachelors.is_none()
            && self.visible_masters().is_none()
            && !self.has_credentials()
            && self.internships().is_empty()
    }

    /// Pathway the generation service returns when the model call fails.
    pub fn server_fallback(career: &str, degree_level: DegreeLevel) -> Self {
        Self {
            career: Some(career.to_string()),
            degree_level: Some(degree_level.to_string()),
            associates: Some(AssociatesSection {
                programs: vec!["Associate Program".to_string()],
                duration: "2 years".to_string(),
                key_courses: vec!["Core courses".to_string()],
            }),
            bachelors: Some(BachelorsSection {
                universities: vec!["Transfer to 4-year university".to_string()],
                articulation_agreements: Vec::new(),
                duration: "2 years (after AA)".to_string(),
                key_courses: vec!["Advanced courses".to_string()],
            }),
            masters: None,
            certifications: Some(Vec::new()),
            exams: Some(Vec::new()),
            internships: Some(Vec::new()),
            alternative_pathways: Some(Vec::new()),
        }
    }
}

fn named(list: Option<&[Credential]>) -> impl Iterator<Item = &Credential> {
    list.unwrap_or_default()
        .iter()
        .filter(|c| !c.name.trim().is_empty())
}

/// Body returned by the pathway endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayResponse {
    #[serde(default)]
    pub pathway: Option<PathwayResult>,
    #[serde(default)]
    pub cached: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
}

/// One stage of the fixed roadmap shown when no pathway is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapStage {
    pub period: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

/// Foundation, specialization and launch stages. Same for every career.
pub const FALLBACK_ROADMAP: [RoadmapStage; 3] = [
    RoadmapStage {
        period: "Year 1-2",
        title: "Foundation Building",
        description: "Core coursework and fundamental skills",
        items: &[
            "Introduction to Computer Science",
            "Data Structures",
            "Web Development Basics",
        ],
    },
    RoadmapStage {
        period: "Year 3-4",
        title: "Specialization",
        description: "Advanced topics and practical experience",
        items: &[
            "Advanced Algorithms",
            "Cloud Computing (AWS)",
            "Software Engineering",
        ],
    },
    RoadmapStage {
        period: "Post-Graduation",
        title: "Career Launch",
        description: "Entry-level positions and growth",
        items: &["AWS Solutions Architect", "DevOps Engineer", "Cloud Consultant"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_and_rejects_empty() {
        let req = PathwayRequest::new("  Data Scientist \n", DegreeLevel::Bachelor).unwrap();
        assert_eq!(req.career(), "Data Scientist");
        assert_eq!(
            PathwayRequest::new("   ", DegreeLevel::Associate).unwrap_err(),
            PathwayError::EmptyCareer
        );
    }

    #[test]
    fn request_wire_format() {
        let req = PathwayRequest::new("Web Developer", DegreeLevel::Associate).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"career": "Web Developer", "degreeLevel": "associate"})
        );
    }

    #[test]
    fn partial_payload_parses() {
        let json = r#"{
            "bachelors": {"universities": ["FIU", "UCF"], "duration": "2 years (after AA)"},
            "masters": {"universities": ["UF"], "duration": "2 years", "required": false},
            "exams": [{"name": "FE Exam", "required": true, "timing": "After BS"}]
        }"#;
        let result: PathwayResult = serde_json::from_str(json).unwrap();
        assert!(result.associates.is_none());
        let bachelors = result.bachelors.as_ref().unwrap();
        assert_eq!(bachelors.universities, ["FIU", "UCF"]);
        assert!(bachelors.articulation_agreements.is_empty());
        assert!(result.visible_masters().is_none());
        assert!(result.has_credentials());
        assert!(result.internships().is_empty());
        assert!(!result.is_empty());
    }

    #[test]
    fn unnamed_credentials_do_not_fail_the_payload() {
        let json = r#"{"pathway": {
            "associates": {"programs": ["A.S. Nursing"]},
            "certifications": [{"required": true, "timing": "After BS"}, {"name": "NCLEX-RN"}],
            "exams": [{"name": "  "}]
        }}"#;
        let response: PathwayResponse = serde_json::from_str(json).unwrap();
        let pathway = response.pathway.unwrap();
        let names: Vec<_> = pathway.certifications().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["NCLEX-RN"]);
        assert_eq!(pathway.exams().count(), 0);
        assert!(pathway.has_credentials());
    }

    #[test]
    fn empty_object_is_empty_pathway() {
        let result: PathwayResult = serde_json::from_str("{}").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn required_masters_is_visible() {
        let result = PathwayResult {
            masters: Some(MastersSection {
                universities: vec!["FIU".into()],
                duration: "2 years".into(),
                required: true,
            }),
            ..Default::default()
        };
        assert!(result.visible_masters().is_some());
    }

    #[test]
    fn response_without_pathway_parses() {
        let response: PathwayResponse = serde_json::from_str(r#"{"cached": false}"#).unwrap();
        assert!(response.pathway.is_none());
    }

    #[test]
    fn server_fallback_shape() {
        let fallback = PathwayResult::server_fallback("Nurse", DegreeLevel::Associate);
        assert_eq!(fallback.career.as_deref(), Some("Nurse"));
        assert_eq!(fallback.degree_level.as_deref(), Some("associate"));
        assert_eq!(fallback.associates.unwrap().duration, "2 years");
        assert!(!fallback.certifications.unwrap_or_default().iter().any(|c| c.required));
    }

    #[test]
    fn fallback_roadmap_has_three_stages() {
        let titles: Vec<_> = FALLBACK_ROADMAP.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Foundation Building", "Specialization", "Career Launch"]);
    }
}
