use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{ArgGroup, Parser};
use minigraph_config::{Config, ErrorMode, LogLevel, LogStyle};

#[derive(Debug, Parser)]
#[clap(group(ArgGroup::new("request").args(["query", "file", "demo"])))]
#[command(name = "minigraph", version)]
/// Resolves field-selection requests against an in-memory dataset.
///
/// The request is taken from --query, from --file, or from stdin when neither
/// is given. The JSON response is written to stdout, logs to stderr.
pub struct Args {
    /// The request to execute, e.g. '{ coffee(id: "coffee1") { name } }'
    #[arg(short, long)]
    pub query: Option<String>,
    /// Read the request from this file, `-` for stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Replay the built-in demonstration requests
    #[arg(long)]
    pub demo: bool,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "MINIGRAPH_CONFIG_PATH", default_value = "./minigraph.toml")]
    pub config: PathBuf,
    /// Dataset to seed the store with (TOML or JSON). Defaults to the built-in demo data.
    #[arg(long, short, env = "MINIGRAPH_DATASET_PATH")]
    pub dataset: Option<PathBuf>,
    /// Report every omitted field or alias in an `errors` array
    #[arg(long)]
    pub strict: bool,
    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,
    /// Set the logging level
    #[arg(long = "log", env = "MINIGRAPH_LOG")]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "MINIGRAPH_LOG_STYLE")]
    pub log_style: Option<LogStyle>,
}

impl Args {
    /// The configuration file, if it exists, with command line overrides applied.
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(&self.config)?.unwrap_or_default();

        if self.strict {
            config.engine.error_mode = ErrorMode::Strict;
        }

        if let Some(path) = &self.dataset {
            config.dataset.path = Some(path.clone());
        }

        if let Some(level) = self.log_level {
            config.log.level = level;
        }

        if let Some(style) = self.log_style {
            config.log.style = style;
        }

        Ok(config)
    }

    pub fn request(&self) -> anyhow::Result<String> {
        if let Some(query) = &self.query {
            return Ok(query.clone());
        }

        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => {
                std::fs::read_to_string(path).with_context(|| format!("could not read request from {}", path.display()))
            }
            _ => {
                let mut request = String::new();
                io::stdin()
                    .read_to_string(&mut request)
                    .context("could not read request from stdin")?;

                Ok(request)
            }
        }
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
