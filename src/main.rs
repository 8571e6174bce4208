//! Skill gap analyzer: upload a resume and show how it matches a target role

use anyhow::{anyhow, Context};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use skill_gap::analysis::{RequestState, Role};
use skill_gap::cli::{self, Cli, Commands, ConfigAction};
use skill_gap::client::HttpBackend;
use skill_gap::config::Config;
use skill_gap::controller::UploadController;
use skill_gap::error::SkillGapError;
use skill_gap::input::ResumeFile;
use skill_gap::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use skill_gap::output::report::AnalysisReport;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
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

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            resume,
            role,
            output,
            save,
            backend_url,
            no_color,
        } => {
            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| SkillGapError::InvalidInput(format!("Resume file: {}", e)))?;

            let role = match role {
                Some(r) => cli::parse_role(&r).map_err(SkillGapError::InvalidInput)?,
                None => config.defaults.role,
            };

            let output_format = match output {
                Some(o) => cli::parse_output_format(&o).map_err(SkillGapError::InvalidInput)?,
                None => config.output.format,
            };

            config.apply_backend_url_override(backend_url);
            let use_colors = config.output.color_output && !no_color;

            analyze(&config, resume, role, output_format, save, use_colors).await
        }

        Commands::Roles => {
            println!("Available target roles:");
            for role in Role::ALL {
                let marker = if role == config.defaults.role { " (default)" } else { "" };
                println!("  • {} [{}]{}", role, role.slug(), marker);
            }
            Ok(())
        }

        Commands::Health { backend_url } => {
            config.apply_backend_url_override(backend_url);
            let backend = HttpBackend::new(config.backend.base_url.clone(), config.backend.timeout_secs)?;

            let reply = backend
                .health()
                .await
                .with_context(|| format!("Backend at {} is not healthy", backend.base_url()))?;
            println!("✅ {} responded: {}", backend.base_url(), reply.trim());
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).context("Failed to render configuration")?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset to defaults: {}", config_path.display());
                Ok(())
            }
            ConfigAction::Set { key, value } => {
                // Reload without env overrides leaking into the saved file
                let mut stored: Config = toml::from_str(
                    &std::fs::read_to_string(config_path)
                        .with_context(|| format!("Failed to read {}", config_path.display()))?,
                )
                .context("Failed to parse configuration")?;
                stored.set_value(&key, &value)?;
                stored.save_to(config_path)?;
                println!("✅ {} = {}", key, value);
                Ok(())
            }
        },
    }
}

async fn analyze(
    config: &Config,
    resume: PathBuf,
    role: Role,
    output_format: skill_gap::config::OutputFormat,
    save: Option<PathBuf>,
    use_colors: bool,
) -> anyhow::Result<()> {
    info!("Starting skill gap analysis");

    let backend = HttpBackend::new(config.backend.base_url.clone(), config.backend.timeout_secs)?;
    let backend_url = backend.base_url().to_string();
    let mut controller = UploadController::new(backend).with_role(role);

    let file = ResumeFile::load(&resume).await?;
    let file_name = file.file_name.clone();
    controller.select_file(file);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Analyzing {} for {}...", file_name, role));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let state = controller.submit().await.clone();
    spinner.finish_and_clear();

    let result = match state {
        RequestState::Success(result) => result,
        RequestState::Error(message) => return Err(anyhow!(message)),
        other => return Err(anyhow!("Analysis ended in unexpected state: {}", other.label())),
    };

    let report = AnalysisReport::new(role, file_name, backend_url, result);
    let generator = ReportGenerator::with_options(use_colors && save.is_none(), config.output.bar_width);
    let content = generator.generate_report(&report, &output_format)?;

    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(&output_format, &report.resume_file))
            } else {
                path
            };
            save_report_to_file(&content, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
