use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use modmap::core::{GraphBuilder, GraphConfig};
use modmap::formatters::{JsonGraphFormatter, SummaryFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "modmap",
    version = "0.1.0",
    author = "modmap developers",
    about = "Module dependency graph extractor for JavaScript projects"
)]
struct Cli {
    /// Project root to analyze
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "MODMAP.json")]
    output: PathBuf,

    /// Specifier alias as a NAME=PATH pair, e.g. --alias @app=src (repeatable)
    #[arg(short, long, value_name = "NAME=PATH")]
    alias: Vec<String>,

    /// Output format: json-compact, summary
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::JsonCompact)]
    format: OutputFormat,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    JsonCompact,
    Summary,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::JsonCompact => "json-compact",
            OutputFormat::Summary => "summary",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        alias,
        format,
    } = cli;

    let start_time = Instant::now();

    let mut config = GraphConfig::new(&input);
    for pair in &alias {
        let (prefix, target) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("invalid alias '{pair}', expected NAME=PATH"))?;
        config = config.alias(prefix, target);
    }

    println!("MODMAP - JavaScript module graph");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());
    println!("Format: {}", format.as_str());
    if !alias.is_empty() {
        println!("Aliases: {:?}", alias);
    }

    let builder = GraphBuilder::new(config)?;

    let build_start = Instant::now();
    let report = builder.build();
    println!("Build completed in {:.2}s", build_start.elapsed().as_secs_f64());
    println!(
        "Modules: {} ({} errors, {} warnings)",
        report.graph.len(),
        report.errors.len(),
        report.warnings.len()
    );

    for warning in &report.warnings {
        eprintln!("Warning: {warning}");
    }
    for error in &report.errors {
        eprintln!("Warning: {error}");
    }

    match format {
        OutputFormat::JsonCompact => {
            JsonGraphFormatter::new().format_to_file(&report, &output)?;
        }
        OutputFormat::Summary => {
            SummaryFormatter::new().format_to_file(&report, &output)?;
        }
    }

    println!("Graph written to {}", output.display());
    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
