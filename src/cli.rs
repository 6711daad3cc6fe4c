//! CLI interface for the recruitment assistant

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "recruit-assist")]
#[command(about = "AI recruitment assistant: synthetic candidate assessment reports")]
#[command(long_about = "Score a candidate's resume against a job role and simulate an interview assessment, then combine both into a weighted report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess a candidate and print the report
    Assess {
        /// Path to resume file (TXT, MD, PDF); defaults to the sample resume for the role
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Target job role, e.g. "Software Engineer"
        #[arg(short, long)]
        job_role: Option<String>,

        /// Path to the candidate's interview response (TXT, MD, PDF)
        #[arg(short = 'R', long)]
        response: Option<PathBuf>,

        /// Primary skill: Python, Java or JavaScript
        #[arg(short, long)]
        skill: Option<String>,

        /// Seed the score generator for a reproducible report
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Browse the sample resumes and interview responses
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List known job roles and skill categories
    List,

    /// Print the sample resume for a job role
    Resume {
        /// Job role label
        job_role: String,
    },

    /// Print the sample interview response for a skill and job role
    Response {
        /// Skill label
        skill: String,

        /// Job role label
        job_role: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
