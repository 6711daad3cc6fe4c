//! recruit-assist: synthetic candidate assessment from the command line

use clap::Parser;
use log::{debug, error, info};
use recruit_assist::cli::{self, Cli, Commands, ConfigAction, TemplateAction};
use recruit_assist::input::loader;
use recruit_assist::output::formatter::{save_report_to_file, ReportGenerator};
use recruit_assist::scoring::source::seeded_source;
use recruit_assist::templates::repository::TemplateRepository;
use recruit_assist::{AssessmentInput, Assessor, Config, RecruitAssistError, Result};
use std::path::{Path, PathBuf};
use std::process;

const INPUT_EXTENSIONS: [&str; 4] = ["txt", "md", "markdown", "pdf"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    let templates = TemplateRepository::new();

    match command {
        Commands::Assess {
            resume,
            job_role,
            response,
            skill,
            seed,
            output,
            save,
        } => {
            let job_role = job_role.unwrap_or_else(|| config.defaults.job_role.clone());
            let skill = skill.unwrap_or_else(|| config.defaults.skill.clone());

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(RecruitAssistError::InvalidInput)?,
                None => config.output.format,
            };

            let resume_text = match resume {
                Some(path) => load_input(&path, "Resume").await?,
                None => {
                    info!("No resume given, using the sample for '{}'", job_role);
                    templates.sample_resume(&job_role).to_string()
                }
            };

            let response_text = match response {
                Some(path) => load_input(&path, "Interview response").await?,
                None => {
                    info!("No interview response given, using the sample for ({}, {})", skill, job_role);
                    templates.sample_interview_response(&skill, &job_role).to_string()
                }
            };

            let assessor = Assessor::from_config(&config.scoring)?;
            let input = AssessmentInput::from_labels(&resume_text, &job_role, &response_text, &skill);

            let report = match seed {
                Some(seed) => {
                    debug!("Using seeded score generator ({})", seed);
                    assessor.assess(&input, &mut seeded_source(seed))
                }
                None => assessor.assess(&input, &mut rand::rng()),
            };

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, config.output.pretty_json, true, true);
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Templates { action } => match action {
            TemplateAction::List => {
                println!("💼 Job Roles:");
                for role in templates.job_roles() {
                    println!("  • {}", role);
                }

                println!("\n🧠 Skills:");
                for category in templates.skill_categories() {
                    println!("  • {}: {}", category.name, category.skills.join(", "));
                }

                println!(
                    "\n📄 {} sample resumes, {} sample interview responses",
                    templates.resume_count(),
                    templates.response_count()
                );
            }

            TemplateAction::Resume { job_role } => {
                println!("{}", templates.sample_resume(&job_role));
            }

            TemplateAction::Response { skill, job_role } => {
                println!("{}", templates.sample_interview_response(&skill, &job_role));
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Match Score Range: {}", config.scoring.match_score_range);
                println!("Sub-score Range: {}", config.scoring.sub_score_range);
                println!("\nScoring Weights:");
                println!("  Skill Match: {:.1}%", config.scoring.match_weight * 100.0);
                println!("  Interview: {:.1}%", config.scoring.interview_weight * 100.0);
                println!("\nRecommendation Thresholds:");
                println!("  Hire: >= {:.1}", config.scoring.hire_threshold);
                println!("  Second Interview: >= {:.1}", config.scoring.second_interview_threshold);
                println!("\nDefaults: {} / {}", config.defaults.job_role, config.defaults.skill);
                println!("Output: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

async fn load_input(path: &Path, what: &str) -> Result<String> {
    cli::validate_file_extension(path, &INPUT_EXTENSIONS)
        .map_err(|e| RecruitAssistError::InvalidInput(format!("{} file: {}", what, e)))?;

    let text = loader::load_text(path).await?;
    debug!("{} text: {} characters", what, text.len());
    Ok(text)
}
