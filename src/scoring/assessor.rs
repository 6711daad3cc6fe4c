//! Combines skill matching and interview simulation into one final report

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::scoring::interview::{InterviewResult, InterviewSimulator, RecommendationThresholds};
use crate::scoring::skill_matcher::{SkillMatchResult, SkillMatcher};
use crate::scoring::source::{ScoreRange, ScoreSource};
use crate::templates::catalog::{JobRole, Skill};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// The four values a candidate assessment is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub resume_text: String,
    pub job_role: JobRole,
    pub interview_response: String,
    pub primary_skill: Skill,
}

impl AssessmentInput {
    /// Labels are parsed leniently; unknown ones are kept as-is.
    pub fn from_labels(resume_text: &str, job_role: &str, interview_response: &str, primary_skill: &str) -> Self {
        Self {
            resume_text: resume_text.to_string(),
            job_role: JobRole::parse(job_role),
            interview_response: interview_response.to_string(),
            primary_skill: Skill::parse(primary_skill),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub match_weight: f64,
    pub interview_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            match_weight: 0.4,
            interview_weight: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalReport {
    pub skill_match: SkillMatchResult,
    pub interview: InterviewResult,

    /// Weighted sum of the match percentage and the out-of-10 interview score.
    /// Labelled "/100" when rendered although it is not on that scale.
    pub final_weighted_score: f64,
    pub weights: ScoreWeights,
    pub generated_at: DateTime<Utc>,
}

pub fn final_weighted_score(match_score_percent: f64, overall_score: f64, weights: &ScoreWeights) -> f64 {
    match_score_percent * weights.match_weight + overall_score * weights.interview_weight
}

/// Runs a full assessment; holds no per-request state and can be shared.
pub struct Assessor {
    skill_matcher: SkillMatcher,
    interview_simulator: InterviewSimulator,
    weights: ScoreWeights,
}

impl Assessor {
    /// Built-in ranges, thresholds and 40/60 weighting
    pub fn standard() -> Self {
        Self {
            skill_matcher: SkillMatcher::new(ScoreRange::MATCH_PERCENT, ScoreRange::SUB_SCORE),
            interview_simulator: InterviewSimulator::new(ScoreRange::SUB_SCORE, RecommendationThresholds::default()),
            weights: ScoreWeights::default(),
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            skill_matcher: SkillMatcher::new(config.match_score_range, config.sub_score_range),
            interview_simulator: InterviewSimulator::new(config.sub_score_range, config.thresholds()?),
            weights: ScoreWeights {
                match_weight: config.match_weight,
                interview_weight: config.interview_weight,
            },
        })
    }

    pub fn assess<S>(&self, input: &AssessmentInput, source: &mut S) -> FinalReport
    where
        S: ScoreSource + ?Sized,
    {
        info!(
            "Assessing candidate for '{}' with primary skill '{}'",
            input.job_role, input.primary_skill
        );

        // Matcher draws before the simulator; seeded runs depend on this order.
        let skill_match = self
            .skill_matcher
            .match_skills(&input.resume_text, &input.job_role, source);
        let interview = self
            .interview_simulator
            .simulate(&input.interview_response, &input.primary_skill, source);

        let final_weighted_score = final_weighted_score(
            skill_match.match_score_percent,
            interview.overall_score,
            &self.weights,
        );
        debug!(
            "Match {:.2}% + interview {:.2}/10 -> final {:.2}",
            skill_match.match_score_percent, interview.overall_score, final_weighted_score
        );

        FinalReport {
            skill_match,
            interview,
            final_weighted_score,
            weights: self.weights,
            generated_at: Utc::now(),
        }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}
