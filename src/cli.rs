//! CLI interface for the skill gap analyzer

use crate::analysis::Role;
use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skill-gap")]
#[command(about = "Resume skill gap analyzer")]
#[command(long_about = "Upload a resume to the analysis backend and show how well it matches a target job role")]
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
    /// Analyze a resume against a target role
    Analyze {
        /// Path to resume file (PDF)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target role, e.g. "Backend Developer" or "data-scientist"
        #[arg(short = 'R', long)]
        role: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Analysis backend base URL
        #[arg(short, long)]
        backend_url: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List the target roles the backend understands
    Roles,

    /// Check that the analysis backend is reachable
    Health {
        /// Analysis backend base URL
        #[arg(short, long)]
        backend_url: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "backend.base_url")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

pub fn parse_role(role: &str) -> Result<Role, String> {
    role.parse()
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from([
            "skill-gap", "analyze", "--resume", "cv.pdf", "--role", "fullstack", "-o", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { resume, role, output, no_color, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(parse_role(&role.unwrap()).unwrap(), Role::FullStackDeveloper);
                assert_eq!(parse_output_format(&output.unwrap()).unwrap(), OutputFormat::Json);
                assert!(!no_color);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_parse_output_format_rejects_pdf() {
        assert!(parse_output_format("pdf").is_err());
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.pdf"), &["pdf"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }
}
