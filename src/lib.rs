//! Resume parser library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod parsing;
pub mod pipeline;

pub use config::Config;
pub use error::{Result, ResumeParserError};
pub use parsing::model::ParsedResume;
pub use pipeline::orchestrator::{ParseOrchestrator, PARSER_VERSION};
