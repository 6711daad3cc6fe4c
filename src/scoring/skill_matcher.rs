//! Resume-to-role skill matching

use crate::scoring::source::{ScoreRange, ScoreSource};
use crate::templates::catalog::JobRole;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub job_role: JobRole,

    /// Nominal resume-to-role fit, as a percentage
    pub match_score_percent: f64,

    /// Sub-scores out of 10
    pub technical_alignment: f64,
    pub problem_solving: f64,
    pub communication: f64,
}

pub struct SkillMatcher {
    match_range: ScoreRange,
    sub_score_range: ScoreRange,
}

impl SkillMatcher {
    pub fn new(match_range: ScoreRange, sub_score_range: ScoreRange) -> Self {
        Self {
            match_range,
            sub_score_range,
        }
    }

    /// Scores are sampled, not derived from `resume_text`.
    pub fn match_skills<S>(&self, resume_text: &str, job_role: &JobRole, source: &mut S) -> SkillMatchResult
    where
        S: ScoreSource + ?Sized,
    {
        debug!(
            "Matching {} characters of resume text against '{}'",
            resume_text.len(),
            job_role
        );

        let match_score_percent = source.next_in_range(self.match_range);
        let technical_alignment = source.next_in_range(self.sub_score_range);
        let problem_solving = source.next_in_range(self.sub_score_range);
        let communication = source.next_in_range(self.sub_score_range);

        SkillMatchResult {
            job_role: job_role.clone(),
            match_score_percent,
            technical_alignment,
            problem_solving,
            communication,
        }
    }

    pub fn match_range(&self) -> ScoreRange {
        self.match_range
    }

    pub fn sub_score_range(&self) -> ScoreRange {
        self.sub_score_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::source::seeded_source;
    use crate::scoring::source::testing::ScriptedSource;

    fn default_matcher() -> SkillMatcher {
        SkillMatcher::new(
            ScoreRange::new(70.0, 95.0).unwrap(),
            ScoreRange::new(7.0, 9.5).unwrap(),
        )
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let matcher = default_matcher();
        let mut rng = seeded_source(2024);

        for _ in 0..1000 {
            let result = matcher.match_skills("", &JobRole::DataScientist, &mut rng);
            assert!((70.0..=95.0).contains(&result.match_score_percent));
            assert!((7.0..=9.5).contains(&result.technical_alignment));
            assert!((7.0..=9.5).contains(&result.problem_solving));
            assert!((7.0..=9.5).contains(&result.communication));
        }
    }

    #[test]
    fn test_draw_order() {
        let matcher = default_matcher();
        let mut source = ScriptedSource::new(&[88.0, 7.1, 8.2, 9.3]);

        let result = matcher.match_skills("resume", &JobRole::CloudArchitect, &mut source);
        assert_eq!(result.match_score_percent, 88.0);
        assert_eq!(result.technical_alignment, 7.1);
        assert_eq!(result.problem_solving, 8.2);
        assert_eq!(result.communication, 9.3);
    }

    #[test]
    fn test_unknown_role_is_carried_through() {
        let matcher = default_matcher();
        let mut rng = seeded_source(3);
        let role = JobRole::parse("Quantum Engineer");

        let result = matcher.match_skills("anything", &role, &mut rng);
        assert_eq!(result.job_role.label(), "Quantum Engineer");
    }
}
