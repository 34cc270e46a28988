//! CLI interface for the resume parser

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "Heuristic resume parsing and ATS completeness scoring")]
#[command(
    long_about = "Extract contact info, experience, education, skills, and certifications from a resume (PDF, DOCX, TXT) and derive an ATS completeness score"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume document
    Parse {
        /// Path or URL of the resume (PDF, DOCX, TXT)
        input: String,

        /// Declared MIME type; inferred from the file extension when omitted
        #[arg(short, long)]
        mime: Option<String>,

        /// Identifier recorded with the parse attempt
        #[arg(short, long, default_value = "local")]
        resume_id: String,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Include a raw-text preview in console output
        #[arg(short, long)]
        detailed: bool,
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

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}
