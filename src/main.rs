//! `nutriscan` — look up packaged-food nutrition data and Nutri-Score
//! breakdowns from Open Food Facts.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the layered config ([`config::load_config`]).
//! 3. `fetch`: query the product endpoint ([`api::off`]), flatten the
//!    payload into tables ([`table`]), and render the requested report
//!    ([`report`], or pretty JSON inline).
//! 4. `count`: send an image to the vision model ([`api::vision`]) and
//!    print how many of the named object it sees.
//! 5. Exit `0`, or `1` when the barcode is unknown.

mod api;
mod cli;
mod config;
mod models;
mod report;
mod table;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, Command, ReportFormat};
use config::{load_config, Config};
use table::build_report;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Fetch {
            barcode,
            report,
            xlsx,
            quiet,
        } => fetch(&config, &barcode, report, xlsx, quiet).await,
        Command::Count { image, label } => count(&config, &image, &label).await,
    }
}

async fn fetch(
    config: &Config,
    barcode: &str,
    report_format: ReportFormat,
    xlsx: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let client = http_client(config)?;

    let pb = if quiet {
        None
    } else {
        Some(spinner(&format!("Fetching product {}", barcode))?)
    };

    let fetched = api::off::fetch_product(&client, &config.api, barcode).await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let product = match fetched? {
        Some(product) => product,
        None => {
            eprintln!("{} Product {} not found", "✗".red(), barcode);
            std::process::exit(1);
        }
    };

    let product_report = build_report(barcode, &product)?;

    // --xlsx implies the xlsx report format, like --report xlsx
    let format = match &xlsx {
        Some(_) => ReportFormat::Xlsx,
        None => report_format,
    };
    let xlsx_path = xlsx.unwrap_or_else(|| config.export.xlsx_path.clone());

    match format {
        ReportFormat::Terminal => report::terminal::render(&product_report, quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&product_report)?),
        ReportFormat::Xlsx => report::xlsx::render(&product_report, &xlsx_path)?,
    }

    Ok(())
}

async fn count(config: &Config, image: &Path, label: &str) -> Result<()> {
    let client = http_client(config)?;

    let pb = spinner(&format!("Analyzing {}", image.display()))?;
    let counted = api::vision::count_objects(&client, &config.vision, image, label).await;
    pb.finish_and_clear();

    let counted = counted?;
    println!(
        " {} {} {} found in {}",
        "→".cyan(),
        counted,
        label,
        image.display()
    );

    Ok(())
}

fn http_client(config: &Config) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.api.user_agent)
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()?;

    Ok(client)
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    Ok(pb)
}
