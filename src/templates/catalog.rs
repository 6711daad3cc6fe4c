//! Job roles and skills known to the assistant

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobRole {
    SoftwareEngineer,
    DataScientist,
    CloudArchitect,
    FullStackDeveloper,
    /// Any label outside the known roles, carried through verbatim
    Other(String),
}

pub static KNOWN_JOB_ROLES: [JobRole; 4] = [
    JobRole::SoftwareEngineer,
    JobRole::DataScientist,
    JobRole::CloudArchitect,
    JobRole::FullStackDeveloper,
];

/// Skills offered as a primary skill choice
pub static PRIMARY_SKILLS: [Skill; 3] = [Skill::Python, Skill::Java, Skill::JavaScript];

impl JobRole {
    /// Never fails: unknown labels, including padded ones, become `JobRole::Other` verbatim.
    pub fn parse(label: &str) -> Self {
        match label {
            "Software Engineer" => JobRole::SoftwareEngineer,
            "Data Scientist" => JobRole::DataScientist,
            "Cloud Architect" => JobRole::CloudArchitect,
            "Full Stack Developer" => JobRole::FullStackDeveloper,
            _ => JobRole::Other(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            JobRole::SoftwareEngineer => "Software Engineer",
            JobRole::DataScientist => "Data Scientist",
            JobRole::CloudArchitect => "Cloud Architect",
            JobRole::FullStackDeveloper => "Full Stack Developer",
            JobRole::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, JobRole::Other(_))
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for JobRole {
    fn from(label: String) -> Self {
        JobRole::parse(&label)
    }
}

impl From<JobRole> for String {
    fn from(role: JobRole) -> Self {
        role.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Skill {
    Python,
    Java,
    JavaScript,
    Other(String),
}

impl Skill {
    pub fn parse(label: &str) -> Self {
        match label {
            "Python" => Skill::Python,
            "Java" => Skill::Java,
            "JavaScript" => Skill::JavaScript,
            _ => Skill::Other(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Skill::Python => "Python",
            Skill::Java => "Java",
            Skill::JavaScript => "JavaScript",
            Skill::Other(label) => label,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Skill {
    fn from(label: String) -> Self {
        Skill::parse(&label)
    }
}

impl From<Skill> for String {
    fn from(skill: Skill) -> Self {
        skill.label().to_string()
    }
}

/// Grouping of skills shown by `templates list`
#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        name: "programming",
        skills: &["Python", "Java", "JavaScript"],
    },
    SkillCategory {
        name: "frameworks",
        skills: &["React", "Django", "Spring"],
    },
    SkillCategory {
        name: "cloud",
        skills: &["AWS", "Azure", "GCP"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_role_round_trips_known_labels() {
        for role in KNOWN_JOB_ROLES.iter() {
            assert_eq!(&JobRole::parse(role.label()), role);
            assert!(role.is_known());
        }
    }

    #[test]
    fn test_unknown_job_role_passes_through() {
        let role = JobRole::parse("Quantum Engineer");
        assert_eq!(role, JobRole::Other("Quantum Engineer".to_string()));
        assert_eq!(role.to_string(), "Quantum Engineer");
        assert!(!role.is_known());
    }

    #[test]
    fn test_skill_parsing() {
        assert_eq!(Skill::parse("JavaScript"), Skill::JavaScript);
        assert_eq!(Skill::parse("AWS").label(), "AWS");
        assert_eq!(Skill::parse("").label(), "");
    }

    #[test]
    fn test_padded_labels_are_kept_verbatim() {
        let role = JobRole::parse(" Software Engineer");
        assert_eq!(role, JobRole::Other(" Software Engineer".to_string()));
        assert_eq!(role.label(), " Software Engineer");
        assert_eq!(Skill::parse("Python ").label(), "Python ");
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&JobRole::FullStackDeveloper).unwrap();
        assert_eq!(json, "\"Full Stack Developer\"");

        let skill: Skill = serde_json::from_str("\"Rust\"").unwrap();
        assert_eq!(skill, Skill::Other("Rust".to_string()));
    }
}
