//! Output formatters: console, JSON, Markdown and HTML renditions of a report

use crate::config::OutputFormat;
use crate::error::{Result, SkillGapError};
use crate::output::render::{Badge, IndicatorKind, Presence, ProgressIndicator, ResultView, SkillGroup};
use crate::output::report::AnalysisReport;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with bars drawn from block characters
pub struct ConsoleFormatter {
    use_colors: bool,
    bar_width: usize,
}

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
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Skill Gap Analysis</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f8f9fa; color: #333; max-width: 720px; margin: 0 auto; padding: 20px; }
        .result-card { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .metric-item { margin: 16px 0; }
        .metric-header { display: flex; justify-content: space-between; font-weight: 600; }
        .progress-bar-container { background: #e9ecef; border-radius: 6px; height: 12px; overflow: hidden; }
        .progress-bar { height: 100%; }
        .match-bar { background: #28a745; }
        .similarity-bar { background: #17a2b8; }
        .badges { display: flex; flex-wrap: wrap; gap: 8px; }
        .badge { padding: 4px 10px; border-radius: 12px; font-size: 0.9em; }
        .badge.present { background: #d4edda; color: #155724; }
        .badge.missing { background: #f8d7da; color: #721c24; }
        .badge.empty { background: #e9ecef; color: #6c757d; }
        .metadata { margin-top: 24px; font-size: 0.85em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="result-card">
        <div class="result-header">
            <h3>Analysis Results</h3>
            <p>Here is how the resume aligns with the target role: <strong>{{ role }}</strong>.</p>
        </div>
        <div class="metrics-section">
            {% for bar in bars %}
            <div class="metric-item">
                <div class="metric-header">
                    <span class="metric-label">{{ bar.label }}</span>
                    <span class="metric-value">{{ bar.value }}%</span>
                </div>
                <div class="progress-bar-container">
                    <div class="progress-bar {{ bar.kind }}-bar" style="width: {{ bar.width }}%"></div>
                </div>
            </div>
            {% endfor %}
        </div>
        <div class="skills-section">
            {% for group in groups %}
            <div class="skill-group">
                <h4>{{ group.title }}</h4>
                <div class="badges">
                    {% for badge in group.badges %}
                    <span class="badge {{ badge.class }}">{% if !badge.icon.is_empty() %}<span class="badge-icon">{{ badge.icon }}</span>{% endif %}{{ badge.text }}</span>
                    {% endfor %}
                </div>
            </div>
            {% endfor %}
        </div>
        <div class="metadata">Resume: {{ resume_file }} | Generated: {{ generated_at }}</div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    role: String,
    resume_file: String,
    generated_at: String,
    bars: Vec<HtmlBar>,
    groups: Vec<HtmlGroup>,
}

struct HtmlBar {
    label: String,
    kind: String,
    value: String,
    width: String,
}

struct HtmlGroup {
    title: String,
    badges: Vec<HtmlBadge>,
}

struct HtmlBadge {
    class: String,
    icon: String,
    text: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, bar_width: usize) -> Self {
        Self {
            use_colors,
            bar_width: bar_width.max(1),
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_bar(&self, indicator: &ProgressIndicator) -> String {
        let filled = indicator.filled_cells(self.bar_width);
        let empty = self.bar_width - filled;
        let color = match indicator.kind {
            IndicatorKind::Match => Color::Green,
            IndicatorKind::Similarity => Color::Cyan,
        };

        format!(
            "{:<14} [{}{}] {}%\n",
            indicator.label,
            self.colorize(&"█".repeat(filled), color),
            "░".repeat(empty),
            indicator.display_value()
        )
    }

    fn format_badge(&self, badge: &Badge) -> String {
        match badge {
            Badge::Skill { name, presence } => {
                let color = match presence {
                    Presence::Present => Color::Green,
                    Presence::Missing => Color::Red,
                };
                format!("  {} {}\n", self.colorize(presence.marker(), color), name)
            }
            Badge::Placeholder { text } => {
                format!("  {}\n", self.colorize(text, Color::BrightBlack))
            }
        }
    }

    fn format_group(&self, group: &SkillGroup) -> String {
        let mut output = self.format_header(group.title, 2);
        for badge in &group.badges {
            output.push_str(&self.format_badge(badge));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let view = report.view();
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME SKILL GAP ANALYSIS", 1));
        output.push_str(&format!(
            "Role: {} | Resume: {}\n",
            self.colorize(report.role.as_str(), Color::Cyan),
            report.resume_file
        ));
        output.push_str(&format!("Generated: {}\n", report.generated_at_display()));

        output.push_str(&self.format_header("Scores", 2));
        for indicator in &view.indicators {
            output.push_str(&self.format_bar(indicator));
        }

        for group in &view.groups {
            output.push_str(&self.format_group(group));
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
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_badge(badge: &Badge) -> String {
        match badge.marker() {
            Some(marker) => format!("- {} {}\n", marker, badge.text()),
            None => format!("- _{}_\n", badge.text()),
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let view: ResultView = report.view();
        let mut output = String::from("# Resume Skill Gap Analysis\n\n");

        output.push_str(&format!("**Target role:** {}\n\n", report.role));
        output.push_str("| Metric | Score |\n|---|---|\n");
        for indicator in &view.indicators {
            output.push_str(&format!(
                "| {} | {}% |\n",
                indicator.label,
                indicator.display_value()
            ));
        }
        output.push('\n');

        for group in &view.groups {
            output.push_str(&format!("## {}\n\n", group.title));
            for badge in &group.badges {
                output.push_str(&Self::markdown_badge(badge));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "_Resume: {} | Backend: {} | Generated: {}_\n",
                report.resume_file,
                report.backend_url,
                report.generated_at_display()
            ));
        }

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

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let view = report.view();

        let bars = view
            .indicators
            .iter()
            .map(|indicator| HtmlBar {
                label: indicator.label.to_string(),
                kind: match indicator.kind {
                    IndicatorKind::Match => "match".to_string(),
                    IndicatorKind::Similarity => "similarity".to_string(),
                },
                value: indicator.display_value(),
                width: crate::output::render::format_percentage(indicator.width_percent),
            })
            .collect();

        let groups = view
            .groups
            .iter()
            .map(|group| HtmlGroup {
                title: group.title.to_string(),
                badges: group
                    .badges
                    .iter()
                    .map(|badge| HtmlBadge {
                        class: match badge {
                            Badge::Skill { presence: Presence::Present, .. } => "present".to_string(),
                            Badge::Skill { presence: Presence::Missing, .. } => "missing".to_string(),
                            Badge::Placeholder { .. } => "empty".to_string(),
                        },
                        icon: badge.marker().unwrap_or_default().to_string(),
                        text: badge.text().to_string(),
                    })
                    .collect(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            role: report.role.to_string(),
            resume_file: report.resume_file.clone(),
            generated_at: report.generated_at_display(),
            bars,
            groups,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| SkillGapError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, DEFAULT_BAR_WIDTH)
    }

    pub fn with_options(use_colors: bool, bar_width: usize) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, bar_width),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
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
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console => format!("{}_skill_gap.txt", base_name),
        OutputFormat::Json => format!("{}_skill_gap.json", base_name),
        OutputFormat::Markdown => format!("{}_skill_gap.md", base_name),
        OutputFormat::Html => format!("{}_skill_gap.html", base_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResult, Role};

    fn report(present: &[&str], missing: &[&str]) -> AnalysisReport {
        AnalysisReport::new(
            Role::BackendDeveloper,
            "jane_doe.pdf",
            "http://localhost:8080",
            AnalysisResult {
                skill_match_percentage: 80.0,
                similarity_score: 65.0,
                present_skills: present.iter().map(|s| s.to_string()).collect(),
                missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    #[test]
    fn test_console_output_draws_proportional_bars() {
        let output = ConsoleFormatter::new(false, 20)
            .format_report(&report(&["Python"], &["Docker"]))
            .unwrap();

        assert!(output.contains(&format!("[{}{}] 80%", "█".repeat(16), "░".repeat(4))));
        assert!(output.contains(&format!("[{}{}] 65%", "█".repeat(13), "░".repeat(7))));
        assert!(output.contains("✓ Python"));
        assert!(output.contains("✗ Docker"));
    }

    #[test]
    fn test_console_output_shows_placeholders() {
        let output = ConsoleFormatter::new(false, 10)
            .format_report(&report(&[], &[]))
            .unwrap();

        assert_eq!(output.matches("None detected").count(), 1);
        assert_eq!(output.matches("None missing").count(), 1);
        assert!(!output.contains('✓'));
    }

    #[test]
    fn test_json_output_contains_raw_result() {
        let output = JsonFormatter::new(false)
            .format_report(&report(&["Python"], &["Docker"]))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["role"], "Backend Developer");
        assert_eq!(value["result"]["skill_match_percentage"], 80.0);
        assert_eq!(value["result"]["missing_skills"][0], "Docker");
    }

    #[test]
    fn test_markdown_output_lists_skills() {
        let output = MarkdownFormatter::new(false)
            .format_report(&report(&["Python"], &[]))
            .unwrap();

        assert!(output.contains("| Skill Match | 80% |"));
        assert!(output.contains("- ✓ Python"));
        assert!(output.contains("- _None missing_"));
        assert!(!output.contains("Backend: "));
    }

    #[test]
    fn test_html_bar_width_matches_percentage() {
        let output = HtmlFormatter::new(false)
            .format_report(&report(&["Python"], &["Docker"]))
            .unwrap();

        assert!(output.contains("style=\"width: 80%\""));
        assert!(output.contains("style=\"width: 65%\""));
        assert!(output.contains("badge present"));
        assert!(output.contains("badge missing"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_html_escapes_skill_names() {
        let output = HtmlFormatter::new(true)
            .format_report(&report(&["<script>"], &[]))
            .unwrap();
        assert!(!output.contains("<script>"));
        assert!(output.contains("None missing"));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, 10);
        let r = report(&["Python"], &["Docker"]);

        let md = generator.generate_report(&r, &OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# Resume Skill Gap Analysis"));
        assert_eq!(
            generator.console_formatter.supports_format(),
            OutputFormat::Console
        );
    }

    #[test]
    fn test_suggest_filename_uses_resume_stem() {
        assert_eq!(
            suggest_filename(&OutputFormat::Html, "/tmp/jane_doe.pdf"),
            "jane_doe_skill_gap.html"
        );
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");

        save_report_to_file("# hi", &path).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "# hi");
    }
}
