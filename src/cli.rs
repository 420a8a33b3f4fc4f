use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "nutriscan",
    about = "Fetch packaged-food nutrition data and Nutri-Score breakdowns from Open Food Facts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.nutriscan/config.toml, fallback ~/.config/nutriscan/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a product by barcode and render its nutrition tables
    Fetch {
        /// Product barcode (EAN/UPC), e.g. 0011110119681
        barcode: String,

        /// Report format
        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        report: ReportFormat,

        /// Xlsx output path; use without value to default to nutrition_report.xlsx
        #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "nutrition_report.xlsx")]
        xlsx: Option<PathBuf>,

        /// Only print the product name and grade
        #[arg(short, long)]
        quiet: bool,
    },

    /// Count objects in an image with a generative vision model
    Count {
        /// Image to analyze
        image: PathBuf,

        /// What to count in the image
        #[arg(long, default_value = "item", value_name = "NAME")]
        label: String,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Xlsx,
}
