mod search;
mod verify;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "clipscout")]
#[command(about = "Short-video search and metadata normalization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search one platform, or every platform, for videos matching a keyword
    Search {
        keyword: String,
        /// Platform name (kuaishou, douyin, bilibili, youtube, xiaohongshu) or `all`
        #[arg(long, short, default_value = "all")]
        platform: String,
        /// Override `CLIPSCOUT_MAX_RESULTS` for this run
        #[arg(long)]
        max_results: Option<usize>,
        /// Print records as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether direct media URLs actually serve video
    Verify {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// List supported platform names
    Platforms,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = clipscout_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Search {
            keyword,
            platform,
            max_results,
            json,
        } => search::run_search(&config, &keyword, &platform, max_results, json).await?,
        Commands::Verify { urls } => verify::run_verify(&config, &urls).await?,
        Commands::Platforms => {
            for platform in clipscout_core::Platform::ALL {
                println!("{platform}");
            }
        }
    }

    Ok(())
}
