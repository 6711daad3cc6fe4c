//! Output formatters for assessment reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{
    render_final_score_line, render_interview_fragment, render_report, render_skill_fragment, REPORT_TITLE,
};
use crate::scoring::assessor::FinalReport;
use crate::scoring::interview::Recommendation;
use askama::Template;
use colored::{Color, Colorize};
use log::info;
use std::path::Path;

/// Trait for formatting assessment reports
pub trait OutputFormatter {
    fn format_report(&self, report: &FinalReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Plain report text, optionally highlighted for terminals
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>AI Recruitment Assessment</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            color: #333;
            max-width: 760px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; }
        table { border-collapse: collapse; width: 100%; margin: 10px 0; }
        td, th { border-bottom: 1px solid #e9ecef; padding: 6px 10px; text-align: left; }
        .badge { padding: 4px 12px; border-radius: 14px; color: white; font-weight: bold; }
        .badge-hire { background: #28a745; }
        .badge-second { background: #ffc107; color: #000; }
        .badge-reject { background: #dc3545; }
        .final { font-size: 1.3em; margin-top: 25px; }
    </style>
    {% endif %}
</head>
<body>
<div class="container">
    <h1>{{ title }}</h1>
    <p>Generated: {{ generated_at }}</p>

    <h2>Skill Match</h2>
    <p><strong>Job Role:</strong> {{ job_role }} | <strong>Match Score:</strong> {{ match_score }}%</p>
    <table>
        <tr><th>Analysis</th><th>Score</th></tr>
        <tr><td>Technical Skills Alignment</td><td>{{ technical_alignment }}/10</td></tr>
        <tr><td>Problem-Solving Potential</td><td>{{ match_problem_solving }}/10</td></tr>
        <tr><td>Communication Skills</td><td>{{ match_communication }}/10</td></tr>
    </table>

    <h2>Interview</h2>
    <p><strong>Skill Assessed:</strong> {{ skill }}</p>
    <table>
        <tr><th>Interview Performance</th><th>Score</th></tr>
        <tr><td>Technical Depth</td><td>{{ technical_depth }}/10</td></tr>
        <tr><td>Communication</td><td>{{ interview_communication }}/10</td></tr>
        <tr><td>Problem-Solving</td><td>{{ interview_problem_solving }}/10</td></tr>
        <tr><td><strong>Overall Score</strong></td><td><strong>{{ overall_score }}/10</strong></td></tr>
    </table>
    <p><strong>Recommendation:</strong> <span class="badge {{ badge_class }}">{{ recommendation }}</span></p>

    <p class="final"><strong>{{ final_score_line }}</strong></p>
</div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    title: String,
    generated_at: String,
    job_role: String,
    match_score: String,
    technical_alignment: String,
    match_problem_solving: String,
    match_communication: String,
    skill: String,
    technical_depth: String,
    interview_communication: String,
    interview_problem_solving: String,
    overall_score: String,
    recommendation: String,
    badge_class: String,
    final_score_line: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn recommendation_color(recommendation: Recommendation) -> Color {
        match recommendation {
            Recommendation::Hire => Color::Green,
            Recommendation::SecondInterview => Color::Yellow,
            Recommendation::NotRecommended => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &FinalReport) -> Result<String> {
        if !self.use_colors {
            return Ok(render_report(report));
        }

        let recommendation = report.interview.recommendation;
        let recommendation_line = format!("Recommendation: {}", recommendation);
        let interview = render_interview_fragment(&report.interview).replace(
            &recommendation_line,
            &self.colorize(&recommendation_line, Self::recommendation_color(recommendation)),
        );

        Ok(format!(
            "{}\n\n{}\n\n{}\n\n{}\n",
            self.colorize(REPORT_TITLE, Color::Blue),
            render_skill_fragment(&report.skill_match),
            interview,
            self.colorize(&render_final_score_line(report), Color::Cyan),
        ))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &FinalReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn recommendation_badge(recommendation: Recommendation) -> &'static str {
        match recommendation {
            Recommendation::Hire => "🟢",
            Recommendation::SecondInterview => "🟡",
            Recommendation::NotRecommended => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &FinalReport) -> Result<String> {
        let skill_match = &report.skill_match;
        let interview = &report.interview;
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", REPORT_TITLE));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Weights:** match {:.0}% / interview {:.0}%\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.weights.match_weight * 100.0,
                report.weights.interview_weight * 100.0
            ));
        }

        output.push_str("## Skill Match\n\n");
        output.push_str(&format!("**Job Role:** {}\n\n", skill_match.job_role));
        output.push_str(&format!("**Match Score:** {:.2}%\n\n", skill_match.match_score_percent));
        output.push_str("| Analysis | Score |\n");
        output.push_str("|----------|-------|\n");
        output.push_str(&format!("| Technical Skills Alignment | {:.1}/10 |\n", skill_match.technical_alignment));
        output.push_str(&format!("| Problem-Solving Potential | {:.1}/10 |\n", skill_match.problem_solving));
        output.push_str(&format!("| Communication Skills | {:.1}/10 |\n\n", skill_match.communication));

        output.push_str("## Interview\n\n");
        output.push_str(&format!("**Skill Assessed:** {}\n\n", interview.skill));
        output.push_str("| Interview Performance | Score |\n");
        output.push_str("|-----------------------|-------|\n");
        output.push_str(&format!("| Technical Depth | {:.1}/10 |\n", interview.technical_depth));
        output.push_str(&format!("| Communication | {:.1}/10 |\n", interview.communication));
        output.push_str(&format!("| Problem-Solving | {:.1}/10 |\n", interview.problem_solving));
        output.push_str(&format!("| **Overall Score** | **{:.1}/10** |\n\n", interview.overall_score));
        output.push_str(&format!(
            "**Recommendation:** {} {}\n\n",
            Self::recommendation_badge(interview.recommendation),
            interview.recommendation
        ));

        output.push_str(&format!("## {}\n", render_final_score_line(report)));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &FinalReport) -> HtmlTemplate {
        let skill_match = &report.skill_match;
        let interview = &report.interview;

        let badge_class = match interview.recommendation {
            Recommendation::Hire => "badge-hire",
            Recommendation::SecondInterview => "badge-second",
            Recommendation::NotRecommended => "badge-reject",
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            title: REPORT_TITLE.to_string(),
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            job_role: skill_match.job_role.to_string(),
            match_score: format!("{:.2}", skill_match.match_score_percent),
            technical_alignment: format!("{:.1}", skill_match.technical_alignment),
            match_problem_solving: format!("{:.1}", skill_match.problem_solving),
            match_communication: format!("{:.1}", skill_match.communication),
            skill: interview.skill.to_string(),
            technical_depth: format!("{:.1}", interview.technical_depth),
            interview_communication: format!("{:.1}", interview.communication),
            interview_problem_solving: format!("{:.1}", interview.problem_solving),
            overall_score: format!("{:.1}", interview.overall_score),
            recommendation: interview.recommendation.to_string(),
            badge_class: badge_class.to_string(),
            final_score_line: render_final_score_line(report),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &FinalReport) -> Result<String> {
        let template_data = self.create_template_data(report);
        Ok(template_data.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &FinalReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    info!("Saved report to {}", file_path.display());
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, job_role: &str, timestamp: bool) -> String {
    let base_name: String = job_role
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let base_name = if base_name.is_empty() { "candidate".to_string() } else { base_name };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_assessment{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_assessment{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_assessment{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_assessment{}.html", base_name, timestamp_suffix),
    }
}
