//! Configuration management for the recruitment assistant

use crate::error::{RecruitAssistError, Result};
use crate::scoring::interview::RecommendationThresholds;
use crate::scoring::source::ScoreRange;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub match_weight: f64,
    pub interview_weight: f64,
    pub hire_threshold: f64,
    pub second_interview_threshold: f64,
    pub match_score_range: ScoreRange,
    pub sub_score_range: ScoreRange,
}

/// Inputs used when the caller leaves them out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub job_role: String,
    pub skill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_weight: 0.4,
            interview_weight: 0.6,
            hire_threshold: 8.0,
            second_interview_threshold: 7.0,
            match_score_range: ScoreRange::MATCH_PERCENT,
            sub_score_range: ScoreRange::SUB_SCORE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            defaults: DefaultsConfig {
                job_role: "Software Engineer".to_string(),
                skill: "Python".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        self.match_score_range.validate()?;
        self.sub_score_range.validate()?;

        for (name, weight) in [
            ("match_weight", self.match_weight),
            ("interview_weight", self.interview_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RecruitAssistError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        self.thresholds().map(|_| ())
    }

    pub fn thresholds(&self) -> Result<RecommendationThresholds> {
        RecommendationThresholds::new(self.hire_threshold, self.second_interview_threshold)
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<Config>(&content)
                .map_err(|e| RecruitAssistError::Configuration(format!("Failed to parse config: {}", e)))?
        } else {
            info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| RecruitAssistError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("recruit-assist")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.match_weight, 0.4);
        assert_eq!(config.scoring.interview_weight, 0.6);
        assert_eq!(config.defaults.job_role, "Software Engineer");
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.defaults.skill, "Python");

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.scoring.match_score_range, config.scoring.match_score_range);
    }

    #[test]
    fn test_inverted_range_in_file_fails_fast() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let broken = content.replacen("low = 70.0", "low = 99.0", 1);
        assert_ne!(content, broken);
        std::fs::write(&path, broken).unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(RecruitAssistError::Configuration(_))));

        config.scoring.match_weight = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(RecruitAssistError::Configuration(_))
        ));
    }
}
