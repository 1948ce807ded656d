use anyhow::Context;
use clap::Parser;
use gcodeview::{import_file, init_logging, render_json, Config, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::info;

/// Print the normalized 2D display path of a G-Code program as JSON
#[derive(Parser, Debug)]
#[command(name = "gcodeview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// G-Code file to import
    file: PathBuf,

    /// Configuration file (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print compact JSON regardless of the configured output style
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging()?;
    info!("gcodeview {} (built {})", VERSION, BUILD_DATE);

    let config = Config::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    let import = import_file(&cli.file, &config)?;

    let pretty = config.output.pretty && !cli.compact;
    println!("{}", render_json(&import, pretty)?);

    Ok(())
}
