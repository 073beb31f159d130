//! Output formatters: console, JSON and markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AnalysisReport, ProfileReport};
use crate::processing::keyword_matcher::MatchBand;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering reports in one output format
pub trait OutputFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String>;
    fn format_profile(&self, report: &ProfileReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown; profiles render as an editable resume draft
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for a requested [`OutputFormat`]
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            70..=100 => Color::Green,
            50..=69 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_keyword_list(&self, title: &str, keywords: &[String], color: Color) -> String {
        if keywords.is_empty() {
            return String::new();
        }

        let mut output = self.format_header(title, 3);
        let chips: Vec<String> = keywords.iter().map(|k| self.colorize(k, color)).collect();
        output.push_str(&format!("  {}\n", chips.join(", ")));
        output
    }

    fn format_field(&self, label: &str, value: &str) -> String {
        let shown = if value.is_empty() {
            self.colorize("(not found)", Color::BrightBlack)
        } else {
            value.to_string()
        };
        format!("{:<11} {}\n", format!("{}:", label), shown)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME MATCH ANALYSIS", 1));
        output.push_str(&format!("Resume: {}\n", report.resume_source));
        output.push_str(&format!("Job description: {}\n", report.job_source));

        output.push_str(&self.format_header("Score", 2));
        let score = format!("{}%", result.score);
        let score = if self.use_colors {
            score.color(Self::score_color(result.score)).bold().to_string()
        } else {
            score
        };
        output.push_str(&format!("ATS Score: {} [{}]\n", score, result.band));
        output.push_str(&format!("{}\n", result.summary));

        output.push_str(&self.format_keyword_list("Matched Keywords", &result.matched_keywords, Color::Green));
        output.push_str(&self.format_keyword_list("Missing Keywords", &result.missing_keywords, Color::Red));

        if self.detailed && !result.weaknesses.is_empty() {
            output.push_str(&self.format_header("Weaknesses", 3));
            for weakness in &result.weaknesses {
                output.push_str(&format!("  • {}\n", self.colorize(weakness, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("Improvement Tips", 2));
        for (i, tip) in result.improvement_tips.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, tip));
        }

        if self.detailed {
            output.push_str(&format!(
                "\nGenerated: {}\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        Ok(output)
    }

    fn format_profile(&self, report: &ProfileReport) -> Result<String> {
        let profile = &report.profile;
        let mut output = String::new();

        output.push_str(&self.format_header("EXTRACTED PROFILE", 1));
        output.push_str(&format!("Source: {}\n", report.source));
        output.push_str(&self.colorize(
            "Suggestions only: review every field before saving.\n",
            Color::Cyan,
        ));

        output.push_str(&self.format_header("Contact", 2));
        output.push_str(&self.format_field("Name", &profile.name));
        output.push_str(&self.format_field("Email", &profile.email));
        output.push_str(&self.format_field("Phone", &profile.phone));
        output.push_str(&self.format_field("LinkedIn", &profile.linkedin));
        output.push_str(&self.format_field("GitHub", &profile.github));
        output.push_str(&self.format_field("Portfolio", &profile.portfolio));
        output.push_str(&self.format_field("Skills", &profile.skills_line()));

        for (title, body) in [
            ("Bio", &profile.bio),
            ("Experience", &profile.experience),
            ("Education", &profile.education),
        ] {
            output.push_str(&self.format_header(title, 2));
            if body.is_empty() {
                output.push_str(&format!("{}\n", self.colorize("(not found)", Color::BrightBlack)));
            } else if self.detailed {
                output.push_str(&format!("{}\n", body));
            } else {
                output.push_str(&format!("{}\n", truncate_text(body, 300)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_profile(&self, report: &ProfileReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn band_label(band: MatchBand) -> &'static str {
        match band {
            MatchBand::Strong => "🟢 Strong",
            MatchBand::Moderate => "🟡 Moderate",
            MatchBand::Weak => "🔴 Weak",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_analysis(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut md = String::new();

        md.push_str("# Resume Match Report\n\n");
        if self.include_metadata {
            md.push_str(&format!("- **Resume:** {}\n", report.resume_source));
            md.push_str(&format!("- **Job description:** {}\n", report.job_source));
            md.push_str(&format!(
                "- **Generated:** {}\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        md.push_str(&format!(
            "## ATS Score: {}% ({})\n\n{}\n\n",
            result.score,
            Self::band_label(result.band),
            result.summary
        ));

        md.push_str("## Matched Keywords\n\n");
        if result.matched_keywords.is_empty() {
            md.push_str("_None_\n\n");
        } else {
            let chips: Vec<String> = result.matched_keywords.iter().map(|k| format!("`{}`", k)).collect();
            md.push_str(&format!("{}\n\n", chips.join(" ")));
        }

        md.push_str("## Missing Keywords\n\n");
        if result.missing_keywords.is_empty() {
            md.push_str("_None_\n\n");
        } else {
            let chips: Vec<String> = result.missing_keywords.iter().map(|k| format!("`{}`", k)).collect();
            md.push_str(&format!("{}\n\n", chips.join(" ")));
        }

        md.push_str("## Improvement Tips\n\n");
        for tip in &result.improvement_tips {
            md.push_str(&format!("- {}\n", tip));
        }

        Ok(md)
    }

    fn format_profile(&self, report: &ProfileReport) -> Result<String> {
        let profile = &report.profile;
        let mut md = String::new();

        let name = if profile.name.is_empty() { "Your Name" } else { &profile.name };
        md.push_str(&format!("# {}\n\n", name));

        let contacts = profile.contact_items();
        if !contacts.is_empty() {
            md.push_str(&format!("{}\n\n", contacts.join(" | ")));
        }

        for (title, body) in [
            ("Summary", profile.bio.as_str()),
            ("Experience", profile.experience.as_str()),
            ("Education", profile.education.as_str()),
        ] {
            if !body.is_empty() {
                md.push_str(&format!("## {}\n\n{}\n\n", title, body));
            }
        }

        if !profile.skills.is_empty() {
            md.push_str(&format!("## Skills\n\n{}\n\n", profile.skills_line()));
        }

        if self.include_metadata {
            md.push_str(&format!(
                "---\n\n_Draft generated from {} on {}. Review before use._\n",
                report.source,
                report.generated_at.format("%Y-%m-%d")
            ));
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_analysis(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_analysis(report)
    }

    pub fn generate_profile(&self, report: &ProfileReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_profile(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(true, false)
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, source_name: &str, kind: &str) -> String {
    let base_name = Path::new(source_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    format!("{}_{}.{}", base_name, kind, extension)
}

/// Truncate text at a word boundary, appending an ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(idx, _)| idx);
    let truncated = &text[..cut];
    let end = truncated.rfind(' ').unwrap_or(cut);
    format!("{}...", &text[..end])
}
