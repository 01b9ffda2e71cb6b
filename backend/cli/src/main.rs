mod config_cmd;
mod episode_cmd;
mod output;
mod resolve_cmd;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use podsite_config::{config_file_path, PodsiteConfig};
use podsite_youtube::{ThumbnailQuality, VideoReferenceResolver};

#[derive(Parser)]
#[command(name = "podsite")]
#[command(about = "Resolve episode video links into thumbnail and player URLs")]
#[command(version)]
struct Cli {
    /// Config file (default: $PODSITE_CONFIG or ./podsite.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the video id from a link and derive its URLs
    Resolve {
        url: String,
        /// Thumbnail tier: default, mq, hq, sd or maxres
        #[arg(short, long)]
        quality: Option<ThumbnailQuality>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Say why no id could be extracted
        #[arg(long)]
        explain: bool,
    },
    /// Show artwork and player choices for exported episode documents
    Episode {
        /// JSON file with one episode or an array; "-" reads stdin
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config {
        /// Write a default config file instead
        #[arg(long)]
        init: bool,
        /// Overwrite an existing file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

fn init_logging(config: &PodsiteConfig) {
    let settings = config.logging();
    logging::init_logger(
        settings.level.as_deref().unwrap_or("info"),
        settings.dir.as_deref().map(Path::new),
        settings.json.unwrap_or(false),
    );
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let path = config_file_path(cli.config.as_deref());
    let config = podsite_config::prepare(&path).await?;
    init_logging(&config);
    podsite_config::check(&config, &path)?;
    debug!(path = %path.display(), "Config ready");

    let resolver = config.resolver();

    match cli.command {
        Commands::Resolve {
            url,
            quality,
            json,
            explain,
        } => {
            let resolver = quality
                .map(VideoReferenceResolver::with_quality)
                .unwrap_or(resolver);
            if !resolve_cmd::run(&resolver, &url, json, explain)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Episode { file, json } => {
            episode_cmd::run(&resolver, &file, json).await?;
        }
        Commands::Config { init, force } => {
            config_cmd::run(&config, &path, init, force).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
