//! Interview simulation and hiring recommendation

use crate::error::{RecruitAssistError, Result};
use crate::scoring::source::{ScoreRange, ScoreSource};
use crate::templates::catalog::Skill;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Hire,
    SecondInterview,
    NotRecommended,
}

impl Recommendation {
    /// Both thresholds are inclusive lower bounds.
    pub fn classify(overall_score: f64, thresholds: &RecommendationThresholds) -> Self {
        if overall_score >= thresholds.hire {
            Recommendation::Hire
        } else if overall_score >= thresholds.second_interview {
            Recommendation::SecondInterview
        } else {
            Recommendation::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Hire => "Hire",
            Recommendation::SecondInterview => "Second Interview",
            Recommendation::NotRecommended => "Not Recommended",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub hire: f64,
    pub second_interview: f64,
}

impl RecommendationThresholds {
    pub fn new(hire: f64, second_interview: f64) -> Result<Self> {
        if !hire.is_finite() || !second_interview.is_finite() {
            return Err(RecruitAssistError::Configuration(
                "Recommendation thresholds must be finite".to_string(),
            ));
        }
        if second_interview > hire {
            return Err(RecruitAssistError::Configuration(format!(
                "Second interview threshold ({}) exceeds hire threshold ({})",
                second_interview, hire
            )));
        }
        Ok(Self {
            hire,
            second_interview,
        })
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            hire: 8.0,
            second_interview: 7.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewResult {
    pub skill: Skill,
    pub technical_depth: f64,
    pub communication: f64,
    pub problem_solving: f64,

    /// Mean of the three sub-scores, unrounded
    pub overall_score: f64,
    pub recommendation: Recommendation,
}

pub struct InterviewSimulator {
    sub_score_range: ScoreRange,
    thresholds: RecommendationThresholds,
}

impl InterviewSimulator {
    pub fn new(sub_score_range: ScoreRange, thresholds: RecommendationThresholds) -> Self {
        Self {
            sub_score_range,
            thresholds,
        }
    }

    pub fn simulate<S>(&self, candidate_response: &str, skill: &Skill, source: &mut S) -> InterviewResult
    where
        S: ScoreSource + ?Sized,
    {
        debug!(
            "Simulating interview for '{}' ({} characters of response)",
            skill,
            candidate_response.len()
        );

        let technical_depth = source.next_in_range(self.sub_score_range);
        let communication = source.next_in_range(self.sub_score_range);
        let problem_solving = source.next_in_range(self.sub_score_range);

        let overall_score = (technical_depth + communication + problem_solving) / 3.0;
        let recommendation = Recommendation::classify(overall_score, &self.thresholds);

        debug!("Interview overall {:.3} -> {}", overall_score, recommendation);

        InterviewResult {
            skill: skill.clone(),
            technical_depth,
            communication,
            problem_solving,
            overall_score,
            recommendation,
        }
    }

    pub fn thresholds(&self) -> &RecommendationThresholds {
        &self.thresholds
    }
}
