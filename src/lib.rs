//! Recruitment assistant library
//!
//! Produces synthetic candidate assessments: a sampled skills match score and
//! a sampled interview score, combined into a weighted final score.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;
pub mod templates;

pub use config::Config;
pub use error::{RecruitAssistError, Result};
pub use scoring::assessor::{AssessmentInput, Assessor, FinalReport};

/// Assess a candidate from raw labels and return the report text.
///
/// Unknown job roles and skills are accepted and echoed into the report.
/// Each call draws from the calling thread's own generator.
pub fn assemble_report(resume_text: &str, job_role: &str, interview_response: &str, primary_skill: &str) -> String {
    let input = AssessmentInput::from_labels(resume_text, job_role, interview_response, primary_skill);
    let report = Assessor::standard().assess(&input, &mut rand::rng());
    output::report::render_report(&report)
}
