use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tgmd::config::Config;
use tgmd::Converter;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "tgmd", about = "tgmd: convert Markdown to Telegram HTML markup")]
struct Cli {
    /// Input file(s) or directory; reads stdin when omitted or a lone `-`
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(base: &str, verbosity: u8) {
    let level = match verbosity {
        0 => base,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::discover(&std::env::current_dir()?)?,
    };
    Ok(config)
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("cannot read stdin")?;
    Ok(text)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    init_logging(&config.log_level, cli.verbose);

    let result = if tgmd::reads_stdin(&cli.inputs) {
        Converter::new().convert(&read_stdin()?)
    } else {
        tgmd::convert_files(&cli.inputs, &config).context("cannot convert input files")?
    };

    if let Some(ref output_path) = cli.output {
        fs::write(output_path, format!("{}\n", result))
            .with_context(|| format!("cannot write {}", output_path.display()))?;
        info!(
            bytes = result.len(),
            "converted to {}",
            output_path.display()
        );
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
