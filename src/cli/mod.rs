//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod interactive;
pub mod project;
pub mod search;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fetch::http::HttpSuggestionService;
use crate::render::{available_formats, get_formatter, PageFormatter};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Location suggestion search with a projected result map
#[derive(Parser)]
#[command(name = "suggest-map")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one search and print the rendered page
    Search(search::SearchArgs),

    /// Drive the widget with events read from stdin
    Interactive(interactive::InteractiveArgs),

    /// Convert between map coordinates and page pixels
    Project(project::ProjectArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Options shared by commands that talk to the suggestion service
#[derive(Args)]
pub struct ServiceArgs {
    /// Suggestion service base URL (overrides config)
    #[arg(long)]
    pub url: Option<String>,

    /// Page output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

impl ServiceArgs {
    /// HTTP backend for the configured or overridden service
    pub fn service(&self, config: &Config) -> Result<HttpSuggestionService> {
        let base_url = self.url.as_deref().unwrap_or(&config.service.base_url);
        HttpSuggestionService::with_path(base_url, config.service.path.as_str())
    }

    /// Page formatter by name, falling back to the configured default
    pub fn formatter(&self, config: &Config) -> Result<Box<dyn PageFormatter>> {
        let name = self.format.as_deref().unwrap_or(&config.search.format);
        get_formatter(name).ok_or_else(|| {
            let known: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
            Error::InvalidInput(format!(
                "Unknown format: {} (available: {})",
                name,
                known.join(", ")
            ))
        })
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search(args) => search::run(args).await,
        Commands::Interactive(args) => interactive::run(args).await,
        Commands::Project(args) => project::run(args),
        Commands::Config(args) => config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_negative_longitude() {
        let cli = Cli::try_parse_from([
            "suggest-map", "search", "-q", "park", "--lat", "40.0", "--lng", "-73.9", "-f", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.q, "park");
                assert_eq!(args.lng.as_deref(), Some("-73.9"));
                assert_eq!(args.service.format.as_deref(), Some("json"));
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_unknown_format() {
        let args = ServiceArgs {
            url: None,
            format: Some("gpx".to_string()),
        };
        let err = args.formatter(&Config::default()).err().unwrap();
        assert!(err.to_string().contains("available: text, json"));
    }

    #[test]
    fn test_service_url_override() {
        let args = ServiceArgs {
            url: Some("http://geo.test".to_string()),
            format: None,
        };
        let service = args.service(&Config::default()).unwrap();
        assert_eq!(service.base_url(), "http://geo.test");
        assert_eq!(args.formatter(&Config::default()).unwrap().name(), "text");
    }
}
