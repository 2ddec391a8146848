// src/bin/caesar.rs
//! Caesar cipher CLI — one-shot text/file transforms and directory batches

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use caesar_tool::config::{self, Config};
use caesar_tool::{export_manifest, transform, transform_dir, Mode, Shift};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "caesar", version, about = "Caesar cipher encrypt/decrypt tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rotate letters forward by the shift
    Encrypt(TextArgs),
    /// Rotate letters back by the shift
    Decrypt(TextArgs),
    /// Transform every matching file under a directory
    Batch {
        dir: PathBuf,
        #[arg(long, value_enum)]
        mode: Option<Mode>,
        #[arg(short, long, help = "Shift between 1 and 25")]
        shift: Option<Shift>,
        #[arg(long, help = "Manifest path (defaults to DIR/<manifest_name>)")]
        manifest: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Text to transform; reads --input or stdin when omitted
    text: Option<String>,
    #[arg(short, long, help = "Shift between 1 and 25")]
    shift: Option<Shift>,
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let conf = config::load().with_context(|| match config::config_path() {
        Some(path) => format!("Failed to load config {}", path.display()),
        None => "Failed to load built-in config".to_owned(),
    })?;

    match cli.command {
        Commands::Encrypt(args) => run_text(args, Mode::Encrypt, conf),
        Commands::Decrypt(args) => run_text(args, Mode::Decrypt, conf),
        Commands::Batch {
            dir,
            mode,
            shift,
            manifest,
        } => run_batch(dir, mode, shift, manifest, conf),
    }
}

fn run_text(args: TextArgs, mode: Mode, conf: &Config) -> Result<()> {
    let shift = args.shift.unwrap_or(conf.cipher.default_shift);

    let text = match (args.text, &args.input) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let result = transform(&text, shift.into(), mode);

    match args.output {
        Some(path) => {
            std::fs::write(&path, &result)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("{mode} (shift {shift}) → {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            if !result.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}

fn run_batch(
    dir: PathBuf,
    mode: Option<Mode>,
    shift: Option<Shift>,
    manifest: Option<PathBuf>,
    conf: &Config,
) -> Result<()> {
    let mut options = conf.batch_options();
    if let Some(mode) = mode {
        options.mode = mode;
    }
    if let Some(shift) = shift {
        options.shift = shift;
    }

    let report = transform_dir(&dir, &options)
        .with_context(|| format!("Batch over {} failed", dir.display()))?;

    let manifest = manifest.unwrap_or_else(|| dir.join(&conf.batch.manifest_name));
    export_manifest(&manifest, &report)
        .with_context(|| format!("Failed to write manifest {}", manifest.display()))?;

    println!("\n=== BATCH COMPLETE ===");
    println!("Processed: {}", report.files.len());
    println!("Failed: {}", report.failed);
    println!("Skipped: {}", report.skipped);
    println!("Manifest: {}", manifest.display());
    if report.failed > 0 {
        warn!("{} file(s) could not be transformed", report.failed);
    }

    Ok(())
}
