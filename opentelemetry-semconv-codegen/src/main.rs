//! `semconv-codegen` renders a semantic convention registry snapshot into
//! metric constants, or checks that previously generated files are current.
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use opentelemetry_semconv_codegen::{CodegenConfig, Generator, OutputConfig, Target};
use tracing_subscriber::EnvFilter;

/// Semantic convention metric catalog generator
#[derive(Parser, Debug)]
#[command(name = "semconv-codegen")]
#[command(version, about = "Generates metric constants from a semantic convention registry")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate the configured outputs
    Generate(RunArgs),
    /// Exit with a non-zero status when an output is missing or out of date
    Check(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Registry snapshot (file or directory), overrides the configuration
    #[arg(short, long)]
    registry: Option<PathBuf>,

    /// Output flavor for --output
    #[arg(short, long, requires = "output", value_parser = parse_target)]
    target: Option<Target>,

    /// Single output file, replaces the configured outputs
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cargo feature gating non-stable metrics in Rust output
    #[arg(long, conflicts_with = "no_feature_gate")]
    experimental_feature: Option<String>,

    /// Do not gate non-stable metrics behind a cargo feature
    #[arg(long)]
    no_feature_gate: bool,
}

fn parse_target(name: &str) -> Result<Target, String> {
    Target::from_name(name).map_err(|e| e.to_string())
}

impl RunArgs {
    fn into_config(self) -> Result<CodegenConfig> {
        let mut config = match &self.config {
            Some(path) => CodegenConfig::from_yaml_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => CodegenConfig::default(),
        }
        .with_env_overrides();

        if let Some(registry) = self.registry {
            config.registry = registry;
        }
        if let Some(path) = self.output {
            config.outputs = vec![OutputConfig {
                target: self.target.unwrap_or(Target::Rust),
                path,
            }];
        }
        if self.no_feature_gate {
            config.experimental_feature = None;
        } else if let Some(feature) = self.experimental_feature {
            config.experimental_feature = Some(feature);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Generate(args) => {
            let generator = Generator::new(args.into_config()?);
            let report = generator.generate().context("generation failed")?;
            println!(
                "{} metrics, {} file(s) written, {} unchanged",
                report.metrics,
                report.written.len(),
                report.unchanged.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => {
            let generator = Generator::new(args.into_config()?);
            let stale = generator.check().context("check failed")?;
            if stale.is_empty() {
                println!("all outputs are up to date");
                Ok(ExitCode::SUCCESS)
            } else {
                for path in &stale {
                    println!("out of date: {}", path.display());
                }
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
