//! Static reference data: majors with comparable programs, and career
//! salary profiles.
//!
//! Both lists are validated once and shared read-only for the lifetime of
//! the process.

mod careers;
mod majors;
pub mod model;

use std::collections::HashSet;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::error::CatalogError;

pub use model::{CareerProfile, DegreeLevel, Difficulty, Major, Preview, Program};

/// Major the comparison tool opens on when none is requested.
pub const DEFAULT_MAJOR_ID: &str = "computer-science";

static BUILTIN_PROGRAMS: LazyLock<ProgramCatalog> = LazyLock::new(|| {
    ProgramCatalog::new(majors::builtin_majors()).expect("built-in major catalog is valid")
});

static BUILTIN_CAREERS: LazyLock<CareerCatalog> = LazyLock::new(|| {
    CareerCatalog::new(careers::builtin_careers()).expect("built-in career catalog is valid")
});

/// Validated list of majors.
#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    majors: Vec<Major>,
}

impl ProgramCatalog {
    /// Build a catalog, rejecting duplicate major ids and duplicate program
    /// ids within a major.
    pub fn new(majors: Vec<Major>) -> Result<Self, CatalogError> {
        if majors.is_empty() {
            return Err(CatalogError::Empty { kind: "major" });
        }

        let mut major_ids = HashSet::new();
        for major in &majors {
            if !major_ids.insert(major.id.as_str()) {
                return Err(CatalogError::DuplicateMajor {
                    id: major.id.clone(),
                });
            }
            let mut program_ids = HashSet::new();
            for program in &major.programs {
                if !program_ids.insert(program.id.as_str()) {
                    return Err(CatalogError::DuplicateProgram {
                        major: major.id.clone(),
                        id: program.id.clone(),
                    });
                }
            }
        }

        Ok(Self { majors })
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static ProgramCatalog {
        &BUILTIN_PROGRAMS
    }

    pub fn majors(&self) -> &[Major] {
        &self.majors
    }

    pub fn major(&self, id: &str) -> Option<&Major> {
        self.majors.iter().find(|m| m.id == id)
    }

    /// Look up a major, falling back to the first one for unknown ids.
    pub fn major_or_first(&self, id: &str) -> &Major {
        self.major(id).unwrap_or(&self.majors[0])
    }
}

/// Validated list of career salary profiles.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<CareerProfile>,
}

impl CareerCatalog {
    /// Build a catalog, rejecting profiles without a positive starting
    /// salary so the financial model never divides by zero.
    pub fn new(careers: Vec<CareerProfile>) -> Result<Self, CatalogError> {
        if careers.is_empty() {
            return Err(CatalogError::Empty { kind: "career" });
        }
        if let Some(bad) = careers.iter().find(|c| c.avg_starting_salary <= Decimal::ZERO) {
            return Err(CatalogError::NonPositiveSalary {
                title: bad.title.clone(),
            });
        }
        Ok(Self { careers })
    }

    pub fn builtin() -> &'static CareerCatalog {
        &BUILTIN_CAREERS
    }

    pub fn careers(&self) -> &[CareerProfile] {
        &self.careers
    }

    pub fn default_career(&self) -> &CareerProfile {
        &self.careers[0]
    }

    pub fn find(&self, title: &str) -> Option<&CareerProfile> {
        self.careers.iter().find(|c| c.title == title)
    }

    /// Look up a career by title, falling back to the default profile.
    pub fn find_or_default(&self, title: &str) -> &CareerProfile {
        self.find(title).unwrap_or_else(|| self.default_career())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn program(id: &str) -> Program {
        Program {
            id: id.to_string(),
            name: id.to_string(),
            base_type: DegreeLevel::Associate,
            has_certification: false,
            certification_name: None,
            duration: "2 years".to_string(),
            cost: dec!(8000),
            avg_salary: dec!(50000),
            job_growth: "+10%".to_string(),
            difficulty: Difficulty::Moderate,
            top_skills: vec![],
            career_paths: vec![],
            color: "from-cyan-400 to-cyan-600".to_string(),
        }
    }

    fn major(id: &str, programs: Vec<Program>) -> Major {
        Major {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: "💻".to_string(),
            certification_provider: None,
            programs,
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = ProgramCatalog::builtin();
        assert!(catalog.major(DEFAULT_MAJOR_ID).is_some());
        for major in catalog.majors() {
            assert!(!major.programs.is_empty(), "{} has no programs", major.id);
        }
    }

    #[test]
    fn rejects_duplicate_program_within_major() {
        let err = ProgramCatalog::new(vec![major("cs", vec![program("a"), program("a")])])
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateProgram {
                major: "cs".into(),
                id: "a".into()
            }
        );
    }

    #[test]
    fn same_program_id_allowed_across_majors() {
        let catalog = ProgramCatalog::new(vec![
            major("cs", vec![program("associate")]),
            major("it", vec![program("associate")]),
        ]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn rejects_duplicate_major() {
        let err = ProgramCatalog::new(vec![major("cs", vec![]), major("cs", vec![])]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateMajor { id: "cs".into() });
    }

    #[test]
    fn unknown_major_falls_back_to_first() {
        let catalog = ProgramCatalog::builtin();
        assert_eq!(catalog.major_or_first("basket-weaving").id, catalog.majors()[0].id);
    }

    #[test]
    fn career_catalog_rejects_zero_salary() {
        let err = CareerCatalog::new(vec![CareerProfile {
            title: "Volunteer".into(),
            avg_starting_salary: Decimal::ZERO,
            avg_mid_career_salary: dec!(1),
            years_to_mid_career: 1,
        }])
        .unwrap_err();
        assert!(matches!(err, CatalogError::NonPositiveSalary { .. }));
    }

    #[test]
    fn builtin_careers_default_and_lookup() {
        let careers = CareerCatalog::builtin();
        assert_eq!(careers.careers().len(), 7);
        assert_eq!(careers.default_career().title, "Software Developer");
        assert_eq!(careers.find_or_default("Cloud Engineer").avg_starting_salary, dec!(75000));
        assert_eq!(careers.find_or_default("Astronaut").title, "Software Developer");
    }
}
