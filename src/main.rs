use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use yearnow::WorldClockClient;
use yearnow::config::{ClientConfig, ConfigLoader};

#[derive(Parser)]
#[command(
    name = "yearnow",
    about = "Print the current UTC year as reported by a world clock API"
)]
struct Cli {
    /// Config file (.yaml, .yml, .json, .toml or .ron).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured world clock endpoint.
    #[arg(long)]
    api_url: Option<String>,
}

fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut loader = ConfigLoader::default();

    let file_path = cli
        .config
        .clone()
        .or_else(|| ConfigLoader::default_config_path().filter(|path| path.exists()));
    if let Some(path) = file_path {
        loader = loader.with_file(path);
    }
    if let Some(api_url) = &cli.api_url {
        loader = loader.with_api_url(api_url);
    }

    loader.build().context("Could not load client config")
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yearnow=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!("Asking {} for the current year", config.api_url);

    let client = WorldClockClient::from_config(&config)?;
    let year = client.what_is_year_now()?;
    println!("{year}");
    Ok(())
}
