//! Sample resumes and interview responses used to prefill assessment inputs
//!
//! Lookups are keyed by label strings rather than the parsed enums so that any
//! user-supplied label can be looked up; a miss yields a fixed fallback text.

use crate::templates::catalog::{JobRole, Skill, SkillCategory, KNOWN_JOB_ROLES, PRIMARY_SKILLS, SKILL_CATEGORIES};
use log::warn;
use std::collections::HashMap;

pub const RESUME_FALLBACK: &str = "No resume template available";
pub const INTERVIEW_RESPONSE_FALLBACK: &str = "Generic interview response about technical expertise";

const SOFTWARE_ENGINEER_RESUME: &str = "\
John Doe
Senior Software Developer

Professional Summary:
- 5+ years of experience in full-stack development
- Expert in Python, JavaScript, and React
- Strong background in building scalable web applications

Technical Skills:
- Programming Languages: Python, JavaScript, TypeScript
- Frameworks: React, Django, Express.js
- Databases: PostgreSQL, MongoDB
- Cloud: AWS, Docker, Kubernetes";

const DATA_SCIENTIST_RESUME: &str = "\
Jane Smith
Data Science Professional

Professional Summary:
- 4+ years of experience in machine learning and data analysis
- Expertise in Python, statistical modeling, and AI
- Proven track record of delivering actionable insights

Technical Skills:
- Programming Languages: Python, R
- Data Tools: Pandas, NumPy, Scikit-learn
- Machine Learning: TensorFlow, PyTorch
- Cloud: GCP, Azure Machine Learning";

const CLOUD_ARCHITECT_RESUME: &str = "\
Michael Johnson
Cloud Solutions Architect

Professional Summary:
- 6+ years of cloud infrastructure design
- Expert in multi-cloud strategies and migration
- Strong background in enterprise cloud solutions

Technical Skills:
- Cloud Platforms: AWS, Azure, GCP
- Infrastructure as Code: Terraform, CloudFormation
- Containerization: Kubernetes, Docker
- Networking: SDN, Cloud Security";

const FULL_STACK_DEVELOPER_RESUME: &str = "\
Sarah Williams
Full Stack Web Developer

Professional Summary:
- 4+ years of full-stack development experience
- Proficient in modern web technologies
- Strong focus on responsive and efficient web applications

Technical Skills:
- Frontend: React, Vue.js, HTML5, CSS3
- Backend: Node.js, Django, Express
- Databases: MySQL, MongoDB
- Cloud: Heroku, AWS";

const PYTHON_SOFTWARE_ENGINEER_RESPONSE: &str = "\
As a Python developer, I approach complex problems by first breaking them down into smaller, manageable components. \
In my previous role, I developed a microservices architecture using Django and Flask, which improved our application's \
scalability and reduced deployment time by 40%. I'm particularly passionate about writing clean, maintainable code \
and using design patterns like dependency injection to create more modular software solutions.";

const JAVA_SOFTWARE_ENGINEER_RESPONSE: &str = "\
My approach to Java development focuses on creating robust, efficient solutions. In my last project, I implemented \
a high-performance caching mechanism using Spring Boot that reduced database query times by 60%. I'm experienced \
in implementing microservices, using design patterns, and ensuring code quality through comprehensive unit and \
integration testing.";

const PYTHON_DATA_SCIENTIST_RESPONSE: &str = "\
As a data scientist, I leverage Python's powerful libraries to derive meaningful insights. In my recent project, \
I developed a machine learning model using TensorFlow and Scikit-learn that predicted customer churn with 85% accuracy. \
I'm skilled in data preprocessing, feature engineering, and translating complex statistical models into actionable \
business recommendations.";

const AWS_CLOUD_ARCHITECT_RESPONSE: &str = "\
My cloud architecture strategy revolves around creating scalable, secure, and cost-effective solutions. I've \
successfully migrated monolithic applications to microservices on AWS, utilizing services like ECS, Lambda, and \
API Gateway. My approach involves comprehensive cost analysis, performance optimization, and implementing \
robust security measures using IAM and network segmentation.";

/// Immutable lookup tables built once and shared for the life of the process
pub struct TemplateRepository {
    resumes: HashMap<&'static str, &'static str>,
    /// skill -> job role -> response
    responses: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl TemplateRepository {
    pub fn new() -> Self {
        let resumes = HashMap::from([
            ("Software Engineer", SOFTWARE_ENGINEER_RESUME),
            ("Data Scientist", DATA_SCIENTIST_RESUME),
            ("Cloud Architect", CLOUD_ARCHITECT_RESUME),
            ("Full Stack Developer", FULL_STACK_DEVELOPER_RESUME),
        ]);

        let mut responses: HashMap<&'static str, HashMap<&'static str, &'static str>> = HashMap::new();
        for (skill, role, response) in [
            ("Python", "Software Engineer", PYTHON_SOFTWARE_ENGINEER_RESPONSE),
            ("Java", "Software Engineer", JAVA_SOFTWARE_ENGINEER_RESPONSE),
            ("Python", "Data Scientist", PYTHON_DATA_SCIENTIST_RESPONSE),
            ("AWS", "Cloud Architect", AWS_CLOUD_ARCHITECT_RESPONSE),
        ] {
            responses.entry(skill).or_default().insert(role, response);
        }

        Self { resumes, responses }
    }

    /// Sample resume for a job role label, or `RESUME_FALLBACK`.
    pub fn sample_resume(&self, job_role: &str) -> &'static str {
        match self.resumes.get(job_role) {
            Some(resume) => *resume,
            None => {
                warn!("No resume template for job role '{}'", job_role);
                RESUME_FALLBACK
            }
        }
    }

    /// Sample interview answer for a (skill, job role) pair, or `INTERVIEW_RESPONSE_FALLBACK`.
    pub fn sample_interview_response(&self, skill: &str, job_role: &str) -> &'static str {
        match self.responses.get(skill).and_then(|roles| roles.get(job_role)) {
            Some(response) => *response,
            None => {
                warn!("No interview response template for ({}, {})", skill, job_role);
                INTERVIEW_RESPONSE_FALLBACK
            }
        }
    }

    pub fn job_roles(&self) -> &'static [JobRole] {
        &KNOWN_JOB_ROLES
    }

    pub fn primary_skills(&self) -> &'static [Skill] {
        &PRIMARY_SKILLS
    }

    pub fn skill_categories(&self) -> &'static [SkillCategory] {
        &SKILL_CATEGORIES
    }

    pub fn resume_count(&self) -> usize {
        self.resumes.len()
    }

    pub fn response_count(&self) -> usize {
        self.responses.values().map(HashMap::len).sum()
    }
}

impl Default for TemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}
