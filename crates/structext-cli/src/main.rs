mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::{io::Read, path::PathBuf};
use structext_config::Config;
use structext_engine::{ContentProfile, Extractor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain text without styling
    Plain,
    /// Debug dump of blocks and inline runs
    Debug,
    /// Interactive terminal view
    Tui,
}

/// Structure raw generated text into blocks and show them.
#[derive(Debug, Parser)]
#[command(name = "structext-cli", version, about)]
struct Cli {
    /// File to read; stdin when omitted
    input: Option<PathBuf>,

    /// Config file (defaults to $STRUCTEXT_CONFIG, then ~/.config/structext/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Print the content profile to stderr
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let extractor = Extractor::new(&config.heuristics).context("Invalid heuristics in config")?;

    let (title, text) = read_input(&cli)?;
    let blocks = extractor.extract(&text);
    log::debug!("extracted {} blocks from {title}", blocks.len());

    if cli.profile {
        let p = ContentProfile::of(&text);
        let dominant = p
            .dominant()
            .map_or("none".to_string(), |k| format!("{k:?}").to_lowercase());
        eprintln!(
            "profile: marketing={} educational={} narrative={} instructional={} dominant={dominant}",
            p.marketing, p.educational, p.narrative, p.instructional
        );
    }

    match cli.format {
        Format::Plain => println!("{}", render::plain::render(&blocks)),
        Format::Debug => print!("{}", render::debug_dump(&blocks)),
        Format::Tui => render::tui::run(&title, &blocks)?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = Config::resolve_path(cli.config.as_deref());
    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Config path: {}", config_path.display());
            Ok(config)
        }
        None if cli.config.is_some() => {
            bail!("Config file '{}' does not exist", config_path.display())
        }
        None => Ok(Config::default()),
    }
}

fn read_input(cli: &Cli) -> Result<(String, String)> {
    match &cli.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(("stdin".to_string(), text))
        }
    }
}
