use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::model::{DegreeLevel, Difficulty, Major, Program};

struct ProgramSpec<'a> {
    id: &'a str,
    name: &'a str,
    base_type: DegreeLevel,
    certification: Option<&'a str>,
    cost: Decimal,
    avg_salary: Decimal,
    job_growth: &'a str,
    difficulty: Difficulty,
    top_skills: &'a [&'a str],
    career_paths: &'a [&'a str],
    color: &'a str,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ProgramSpec<'_> {
    fn build(self) -> Program {
        let duration = match (self.base_type, self.certification.is_some()) {
            (DegreeLevel::Associate, false) => "2 years",
            (DegreeLevel::Associate, true) => "2 years + cert prep",
            (DegreeLevel::Bachelor, false) => "4 years",
            (DegreeLevel::Bachelor, true) => "4 years + cert prep",
        };
        Program {
            id: self.id.to_string(),
            name: self.name.to_string(),
            base_type: self.base_type,
            has_certification: self.certification.is_some(),
            certification_name: self.certification.map(str::to_string),
            duration: duration.to_string(),
            cost: self.cost,
            avg_salary: self.avg_salary,
            job_growth: self.job_growth.to_string(),
            difficulty: self.difficulty,
            top_skills: strings(self.top_skills),
            career_paths: strings(self.career_paths),
            color: self.color.to_string(),
        }
    }
}

fn computer_science() -> Major {
    Major {
        id: "computer-science".to_string(),
        name: "Computer Science".to_string(),
        description: "Software development, algorithms and cloud computing".to_string(),
        icon: "💻".to_string(),
        certification_provider: Some("AWS".to_string()),
        programs: vec![
            ProgramSpec {
                id: "associate",
                name: "A.S. Computer Programming",
                base_type: DegreeLevel::Associate,
                certification: None,
                cost: dec!(8000),
                avg_salary: dec!(55000),
                job_growth: "+15%",
                difficulty: Difficulty::EntryLevel,
                top_skills: &["Python", "Java", "SQL", "Git"],
                career_paths: &["Junior Developer", "QA Tester", "IT Support"],
                color: "from-cyan-400 to-cyan-600",
            }
            .build(),
            ProgramSpec {
                id: "associate-cert",
                name: "A.S. Computer Programming + AWS Cloud Practitioner",
                base_type: DegreeLevel::Associate,
                certification: Some("AWS Certified Cloud Practitioner"),
                cost: dec!(8300),
                avg_salary: dec!(65000),
                job_growth: "+22%",
                difficulty: Difficulty::Moderate,
                top_skills: &["Python", "AWS Fundamentals", "Linux", "SQL", "Networking"],
                career_paths: &["Cloud Support Associate", "Junior Developer", "DevOps Intern"],
                color: "from-cyan-500 to-teal-600",
            }
            .build(),
            ProgramSpec {
                id: "bachelor",
                name: "B.S. Computer Science",
                base_type: DegreeLevel::Bachelor,
                certification: None,
                cost: dec!(24000),
                avg_salary: dec!(75000),
                job_growth: "+25%",
                difficulty: Difficulty::Challenging,
                top_skills: &["Algorithms", "Data Structures", "Systems Design", "Java"],
                career_paths: &["Software Engineer", "Backend Developer", "Data Engineer"],
                color: "from-teal-400 to-teal-600",
            }
            .build(),
            ProgramSpec {
                id: "bachelor-cert",
                name: "B.S. Computer Science + AWS Solutions Architect",
                base_type: DegreeLevel::Bachelor,
                certification: Some("AWS Certified Solutions Architect - Associate"),
                cost: dec!(24300),
                avg_salary: dec!(92000),
                job_growth: "+30%",
                difficulty: Difficulty::Advanced,
                top_skills: &[
                    "Cloud Architecture",
                    "Algorithms",
                    "Infrastructure as Code",
                    "Security",
                    "Distributed Systems",
                ],
                career_paths: &["Cloud Engineer", "Solutions Architect", "Site Reliability Engineer"],
                color: "from-orange-400 to-orange-600",
            }
            .build(),
        ],
    }
}

fn cybersecurity() -> Major {
    Major {
        id: "cybersecurity".to_string(),
        name: "Cybersecurity".to_string(),
        description: "Network defense, incident response and risk management".to_string(),
        icon: "🛡️".to_string(),
        certification_provider: Some("CompTIA".to_string()),
        programs: vec![
            ProgramSpec {
                id: "associate",
                name: "A.S. Cybersecurity",
                base_type: DegreeLevel::Associate,
                certification: None,
                cost: dec!(8000),
                avg_salary: dec!(52000),
                job_growth: "+18%",
                difficulty: Difficulty::Moderate,
                top_skills: &["Networking", "Linux", "Firewalls"],
                career_paths: &["Security Technician", "Help Desk Analyst"],
                color: "from-cyan-400 to-cyan-600",
            }
            .build(),
            ProgramSpec {
                id: "associate-cert",
                name: "A.S. Cybersecurity + Security+",
                base_type: DegreeLevel::Associate,
                certification: Some("CompTIA Security+"),
                cost: dec!(8400),
                avg_salary: dec!(62000),
                job_growth: "+28%",
                difficulty: Difficulty::Moderate,
                top_skills: &["Threat Analysis", "Networking", "Linux", "SIEM Tools"],
                career_paths: &["SOC Analyst I", "Security Technician", "Network Administrator"],
                color: "from-cyan-500 to-teal-600",
            }
            .build(),
            ProgramSpec {
                id: "bachelor",
                name: "B.S. Cybersecurity",
                base_type: DegreeLevel::Bachelor,
                certification: None,
                cost: dec!(24000),
                avg_salary: dec!(78000),
                job_growth: "+32%",
                difficulty: Difficulty::Challenging,
                top_skills: &["Risk Management", "Cryptography", "Incident Response", "Python"],
                career_paths: &["Security Analyst", "Penetration Tester", "GRC Analyst"],
                color: "from-teal-400 to-teal-600",
            }
            .build(),
            ProgramSpec {
                id: "bachelor-cert",
                name: "B.S. Cybersecurity + CySA+",
                base_type: DegreeLevel::Bachelor,
                certification: Some("CompTIA CySA+"),
                cost: dec!(24400),
                avg_salary: dec!(88000),
                job_growth: "+35%",
                difficulty: Difficulty::Advanced,
                top_skills: &[
                    "Threat Hunting",
                    "Incident Response",
                    "Cryptography",
                    "Cloud Security",
                ],
                career_paths: &["Cybersecurity Analyst", "Incident Responder", "Security Engineer"],
                color: "from-orange-400 to-orange-600",
            }
            .build(),
        ],
    }
}

fn data_analytics() -> Major {
    Major {
        id: "data-analytics".to_string(),
        name: "Data Analytics".to_string(),
        description: "Statistics, visualization and data-driven decision making".to_string(),
        icon: "📊".to_string(),
        certification_provider: None,
        programs: vec![
            ProgramSpec {
                id: "associate",
                name: "A.S. Data Analytics",
                base_type: DegreeLevel::Associate,
                certification: None,
                cost: dec!(8000),
                avg_salary: dec!(50000),
                job_growth: "+20%",
                difficulty: Difficulty::EntryLevel,
                top_skills: &["Excel", "SQL", "Tableau"],
                career_paths: &["Data Technician", "Reporting Analyst"],
                color: "from-cyan-400 to-cyan-600",
            }
            .build(),
            ProgramSpec {
                id: "bachelor",
                name: "B.S. Data Analytics",
                base_type: DegreeLevel::Bachelor,
                certification: None,
                cost: dec!(24000),
                avg_salary: dec!(68000),
                job_growth: "+26%",
                difficulty: Difficulty::Challenging,
                top_skills: &["Statistics", "Python", "SQL", "Machine Learning", "Visualization"],
                career_paths: &["Data Analyst", "Business Intelligence Analyst", "Data Scientist"],
                color: "from-teal-400 to-teal-600",
            }
            .build(),
        ],
    }
}

pub(super) fn builtin_majors() -> Vec<Major> {
    vec![computer_science(), cybersecurity(), data_analytics()]
}
