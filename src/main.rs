//! Resume parser: heuristic resume parsing and ATS completeness scoring

mod cli;
mod config;
mod error;
mod input;
mod output;
mod parsing;
mod pipeline;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeParserError};
use input::mime::MimeType;
use input::source::DocumentSource;
use input::text_extractor::{DefaultDecoders, TextExtractor};
use log::error;
use output::formatter::{format_failure, ConsoleFormatter, JsonFormatter, OutputFormatter};
use pipeline::collaborators::{NullHistory, NullStore};
use pipeline::orchestrator::ParseOrchestrator;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            input,
            mime,
            resume_id,
            output,
            detailed,
        } => {
            let output_format = cli::parse_output_format(&output)
                .map_err(ResumeParserError::InvalidInput)?;

            let source = DocumentSource::parse(&input);
            let mime = match mime {
                Some(declared) => MimeType::from_declared(&declared)?,
                None => {
                    let ext = source.extension().ok_or_else(|| {
                        ResumeParserError::InvalidInput(format!(
                            "Cannot infer type of '{}'; pass --mime",
                            input
                        ))
                    })?;
                    MimeType::from_extension(&ext)?
                }
            };

            let orchestrator = ParseOrchestrator::new(
                TextExtractor::new(DefaultDecoders, config.runtime.environment),
                NullStore,
                NullHistory,
            );

            match orchestrator.parse(&resume_id, &source, mime).await {
                Ok(success) => {
                    let rendered = match output_format {
                        OutputFormat::Console => ConsoleFormatter {
                            use_colors: config.output.color_output,
                            detailed: detailed || config.output.detailed,
                        }
                        .format_result(&success)?,
                        OutputFormat::Json => {
                            JsonFormatter { pretty: true }.format_result(&success)?
                        }
                    };
                    println!("{}", rendered);
                    Ok(())
                }
                Err(e) => {
                    println!("{}", format_failure(&e));
                    Err(e)
                }
            }
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let rendered = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeParserError::Configuration(format!(
                            "Failed to serialize config: {}",
                            e
                        ))
                    })?;
                    println!("{}", rendered);
                }
                ConfigAction::Reset => {
                    let defaults = Config::default();
                    defaults.save()?;
                    println!("Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}
