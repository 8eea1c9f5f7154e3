//! Token Dash CLI
//!
//! Filters a token P/L% snapshot and renders summary statistics,
//! performer rankings and a bar chart.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use token_dash::assets::IconResolver;
use token_dash::chart::ChartConfig;
use token_dash::commands::{
    display_schema, display_version, execute_query, execute_show, validate_args,
    validate_dataset_file, QueryArgs, ShowArgs,
};
use token_dash::utils::config::{DEFAULT_CHART_WIDTH, DEFAULT_ICON_DIR, DEFAULT_TOP_N};

/// Token Dash - token performance dashboard
#[derive(Parser, Debug)]
#[command(name = "token-dash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter the dataset and print the dashboard
    Show {
        /// Dataset file (.toml or .json); bundled sample if omitted
        #[arg(short, long, env = "TOKEN_DASH_DATASET")]
        dataset: Option<PathBuf>,

        /// Lower P/L% bound (defaults to dataset minimum)
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,

        /// Upper P/L% bound (defaults to dataset maximum)
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,

        /// Comma-separated tokens to keep (all if omitted)
        #[arg(short, long, value_delimiter = ',')]
        tokens: Vec<String>,

        /// Number of top/bottom performers
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Output path for JSON report
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Output path for SVG bar chart
        #[arg(short, long)]
        chart: Option<PathBuf>,

        /// Directory holding <token>.png icons for the chart
        /// (bare `--icons` uses token_images/)
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_ICON_DIR)]
        icons: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
        width: usize,

        /// Max rows in the terminal bar chart
        #[arg(long, default_value = "50")]
        max_bars: usize,
    },

    /// Answer a JSON filter request with a JSON response
    Query {
        /// Dataset file (.toml or .json); bundled sample if omitted
        #[arg(short, long, env = "TOKEN_DASH_DATASET")]
        dataset: Option<PathBuf>,

        /// Request JSON file (stdin if omitted)
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Response JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a dataset file
    Validate {
        /// Path to dataset file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Show {
            dataset,
            min,
            max,
            tokens,
            top,
            json,
            chart,
            icons,
            title,
            width,
            max_bars,
        } => {
            let mut chart_config = ChartConfig::new().with_width(width);
            if let Some(title) = title {
                chart_config = chart_config.with_title(title);
            }
            if let Some(dir) = icons {
                chart_config = chart_config.with_icons(IconResolver::new(dir));
            }

            let args = ShowArgs {
                dataset,
                min_pl: min,
                max_pl: max,
                tokens,
                top_n: top,
                output_json: json,
                output_svg: chart,
                chart_config,
                max_bars,
            };

            // Validate args first
            validate_args(&args)?;

            execute_show(args)?;
        }

        Commands::Query {
            dataset,
            request,
            output,
        } => {
            execute_query(QueryArgs {
                dataset,
                request,
                output,
            })?;
        }

        Commands::Validate { file } => {
            validate_dataset_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
