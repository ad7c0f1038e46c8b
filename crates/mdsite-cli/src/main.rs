use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod config;
mod site;
mod template;

use config::SiteConfig;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from a tree of Markdown files")]
struct Cli {
    /// Prefix for root-relative links, e.g. "/repo/" when served from a subpath
    base_path: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of files copied verbatim into the output
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// HTML template file
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (deleted and recreated)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// CLI flags override the config file, which overrides defaults
    fn resolve(self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::default(),
        };

        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }

        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve()?;
    debug!(?config, "resolved configuration");
    site::build_site(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
