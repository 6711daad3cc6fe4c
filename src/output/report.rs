//! Plain-text rendering of assessment results

use crate::scoring::assessor::FinalReport;
use crate::scoring::interview::InterviewResult;
use crate::scoring::skill_matcher::SkillMatchResult;

pub const REPORT_TITLE: &str = "🤖 AI Recruitment System Report 🤖";
pub const FINAL_SCORE_LABEL: &str = "Final Weighted Score:";

pub fn render_skill_fragment(result: &SkillMatchResult) -> String {
    format!(
        "Job Role: {}\n\
         Match Score: {:.2}%\n\
         \n\
         Analysis:\n\
         - Technical Skills Alignment: {:.1}/10\n\
         - Problem-Solving Potential: {:.1}/10\n\
         - Communication Skills: {:.1}/10",
        result.job_role,
        result.match_score_percent,
        result.technical_alignment,
        result.problem_solving,
        result.communication,
    )
}

pub fn render_interview_fragment(result: &InterviewResult) -> String {
    format!(
        "Skill Assessed: {}\n\
         \n\
         Interview Performance:\n\
         - Technical Depth: {:.1}/10\n\
         - Communication: {:.1}/10\n\
         - Problem-Solving: {:.1}/10\n\
         \n\
         Overall Score: {:.1}/10\n\
         \n\
         Recommendation: {}",
        result.skill,
        result.technical_depth,
        result.communication,
        result.problem_solving,
        result.overall_score,
        result.recommendation,
    )
}

// The "/100" suffix is kept even though the score is not on a 0-100 scale.
pub fn render_final_score_line(report: &FinalReport) -> String {
    format!("{} {:.2}/100", FINAL_SCORE_LABEL, report.final_weighted_score)
}

/// Full report text as shown to the user
pub fn render_report(report: &FinalReport) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n{}\n",
        REPORT_TITLE,
        render_skill_fragment(&report.skill_match),
        render_interview_fragment(&report.interview),
        render_final_score_line(report),
    )
}

/// Pulls the number after `Final Weighted Score:` back out of rendered text.
pub fn parse_final_score(text: &str) -> Option<f64> {
    let re = regex::Regex::new(r"Final Weighted Score:\s*(-?[0-9]+(?:\.[0-9]+)?)").ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}
