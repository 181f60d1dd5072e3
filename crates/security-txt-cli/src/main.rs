use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use security_txt::{
    emit_files, generate, validate_config, SecurityTxtConfig, CONFIG_FILE_NAME,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write security.txt to the public directory
    Generate {
        /// Output directory for the generated files
        #[arg(short, long, default_value = "public")]
        out: PathBuf,
    },
    /// Print the formatted document to stdout
    Show,
    /// Run pre-flight validation against the configuration
    Check,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = SecurityTxtConfig::load(&cli.config)
        .with_context(|| format!("unable to load configuration: {}", cli.config.display()))?;

    match cli.command {
        Command::Generate { out } => handle_generate(&config, out),
        Command::Show => handle_show(&config),
        Command::Check => Ok(handle_check(&config)),
    }
}

fn handle_generate(config: &SecurityTxtConfig, out: PathBuf) -> Result<ExitCode> {
    let has_contact = config
        .contact
        .as_ref()
        .is_some_and(|contact| !contact.values().is_empty());
    if !has_contact {
        bail!("security.txt requires at least one contact field");
    }

    if config.expires.is_none() {
        eprintln!("⚠️  security.txt should include an expires field (RFC 9116 recommendation)");
    }

    let outcome = emit_files(config, &out)?;
    for path in &outcome.written {
        println!("✅ security.txt written to {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_show(config: &SecurityTxtConfig) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(generate(config).as_bytes())
        .context("Failed to write document to stdout")?;
    handle.flush().context("Failed to flush stdout")?;
    Ok(ExitCode::SUCCESS)
}

fn handle_check(config: &SecurityTxtConfig) -> ExitCode {
    let report = validate_config(config);

    for error in &report.errors {
        eprintln!("❌ {error}");
    }
    for warning in &report.warnings {
        eprintln!("⚠️  {warning}");
    }

    if report.is_valid() {
        println!("✅ configuration is valid");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
