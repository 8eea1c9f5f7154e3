//! Show command implementation.
//!
//! The show command:
//! 1. Loads the dataset
//! 2. Builds filter parameters
//! 3. Filters and aggregates
//! 4. Prints the terminal summary
//! 5. Writes the optional JSON report and SVG chart

use super::models::ShowArgs;
use super::utils::load_or_sample;
use crate::chart::{generate_bar_chart, generate_text_summary};
use crate::dashboard::{Dashboard, Snapshot};
use crate::filter::{normalize_token, FilterParams};
use crate::output::{write_report, write_svg, Report};
use crate::utils::config::{MAX_CHART_WIDTH, MAX_TOP_N, MIN_CHART_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the show command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The evaluated snapshot, after everything has been printed and written
///
/// # Errors
/// * Dataset loading failures
/// * File write errors
pub fn execute_show(args: ShowArgs) -> Result<Snapshot> {
    info!("Step 1/4: Loading dataset...");
    let dataset = load_or_sample(args.dataset.as_deref())?;
    let dashboard = Dashboard::new(dataset).with_top_n(args.top_n);

    info!("Step 2/4: Applying filters...");
    let params = build_params(&dashboard, &args);
    debug!(
        "Filters: [{}, {}], {} tokens selected",
        params.min_pl,
        params.max_pl,
        params.selected_tokens.len()
    );
    let snapshot = dashboard.evaluate(&params);

    info!("Step 3/4: Rendering summary...");
    println!("\n{}", "=".repeat(60));
    println!("TOKEN PERFORMANCE DASHBOARD");
    println!("{}", "=".repeat(60));
    println!("{}", generate_text_summary(&snapshot, args.max_bars));
    println!("{}", "=".repeat(60));

    info!("Step 4/4: Writing output files...");
    if let Some(json_path) = &args.output_json {
        let report = Report::new(dashboard.dataset().len(), &params, snapshot.clone());
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if let Some(svg_path) = &args.output_svg {
        let svg = generate_bar_chart(&snapshot.view, Some(&args.chart_config));
        write_svg(&svg, svg_path).context("Failed to write SVG chart")?;
        info!("✓ Chart written to: {}", svg_path.display());
    }

    Ok(snapshot)
}

/// Start from the dashboard defaults and apply CLI overrides
///
/// **Private** - internal helper for execute_show
fn build_params(dashboard: &Dashboard, args: &ShowArgs) -> FilterParams {
    let mut params = dashboard.default_params();

    if let Some(min) = args.min_pl {
        params.min_pl = min;
    }
    if let Some(max) = args.max_pl {
        params.max_pl = max;
    }

    if !args.tokens.is_empty() {
        params = params.with_tokens(args.tokens.iter().map(|t| normalize_token(t)));
        dashboard.warn_unknown_tokens(&params);
    }

    params
}

/// Validate show arguments
///
/// **Public** - can be called before execute_show for early validation
pub fn validate_args(args: &ShowArgs) -> Result<()> {
    if args.min_pl.is_some_and(f64::is_nan) || args.max_pl.is_some_and(f64::is_nan) {
        anyhow::bail!("P/L% bounds must be numbers");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    if args.max_bars == 0 {
        anyhow::bail!("max_bars must be greater than 0");
    }

    let width = args.chart_config.width;
    if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&width) {
        anyhow::bail!(
            "chart width must be between {} and {} pixels",
            MIN_CHART_WIDTH,
            MAX_CHART_WIDTH
        );
    }

    if args.tokens.iter().any(|t| t.trim().is_empty()) {
        anyhow::bail!("Token symbols cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_dataset;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&ShowArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_top_zero() {
        let args = ShowArgs {
            top_n: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_too_large() {
        let args = ShowArgs {
            top_n: 1000,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_nan_bound() {
        let args = ShowArgs {
            min_pl: Some(f64::NAN),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_narrow_chart() {
        let mut args = ShowArgs::default();
        args.chart_config.width = 10;
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_blank_token() {
        let args = ShowArgs {
            tokens: vec!["RENDER".to_string(), " ".to_string()],
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_build_params_overrides() {
        let dashboard = Dashboard::new(sample_dataset());
        let args = ShowArgs {
            min_pl: Some(20.0),
            tokens: vec!["render".to_string(), " icx ".to_string()],
            ..Default::default()
        };

        let params = build_params(&dashboard, &args);

        assert_eq!(params.min_pl, 20.0);
        assert_eq!(params.max_pl, 69.42);
        assert!(params.selected_tokens.contains("RENDER"));
        assert!(params.selected_tokens.contains("ICX"));
        assert_eq!(params.selected_tokens.len(), 2);
    }

    #[test]
    fn test_execute_show_writes_outputs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let json_path = temp_dir.path().join("report.json");
        let svg_path = temp_dir.path().join("chart.svg");

        let args = ShowArgs {
            min_pl: Some(50.0),
            max_pl: Some(70.0),
            output_json: Some(json_path.clone()),
            output_svg: Some(svg_path.clone()),
            ..Default::default()
        };

        let snapshot = execute_show(args).unwrap();

        assert_eq!(snapshot.stats.count, 11);
        assert_eq!(snapshot.view.records()[0].token, "IOST");
        assert!(json_path.exists());
        assert!(svg_path.exists());
    }
}
