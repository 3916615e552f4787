use anyhow::Context;
use citecheck::cli::output::Output;
use citecheck::cli::Cli;
use citecheck::report::BatchReport;
use citecheck::types::CitationStyle;
use citecheck::utils::CitecheckConfig;
use clap::Parser;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "citecheck=debug" } else { "citecheck=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let style: CitationStyle = match cli.style.parse() {
        Ok(style) => style,
        Err(e) => {
            output.error(&e.to_string());
            std::process::exit(2);
        }
    };

    let mut config = CitecheckConfig::load(&cli.config)?;
    if let Some(timeout) = cli.timeout {
        config.verifier.timeout_secs = timeout;
    }

    let text = read_input(&cli)?;
    let mut pipeline = config.pipeline();
    if cli.no_verify {
        pipeline = pipeline.without_url_verification();
    }
    let scored = pipeline.process_text(&text, style).await?;
    let report = BatchReport::from_scored(scored, style);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output.report(&report);
    }

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if cli.input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read citations from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(&cli.input)
            .with_context(|| format!("Failed to read {}", cli.input.display()))
    }
}
