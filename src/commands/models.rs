use crate::chart::ChartConfig;
use crate::utils::config::DEFAULT_TOP_N;
use std::path::PathBuf;

/// Arguments for the show command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ShowArgs {
    /// Dataset file (None = bundled sample)
    pub dataset: Option<PathBuf>,

    /// Lower P/L% bound (None = dataset minimum)
    pub min_pl: Option<f64>,

    /// Upper P/L% bound (None = dataset maximum)
    pub max_pl: Option<f64>,

    /// Selected tokens (empty = all)
    pub tokens: Vec<String>,

    /// Number of top/bottom performers
    pub top_n: usize,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart configuration
    pub chart_config: ChartConfig,

    /// Max rows of the terminal bar chart
    pub max_bars: usize,
}

impl Default for ShowArgs {
    fn default() -> Self {
        Self {
            dataset: None,
            min_pl: None,
            max_pl: None,
            tokens: Vec::new(),
            top_n: DEFAULT_TOP_N,
            output_json: None,
            output_svg: None,
            chart_config: ChartConfig::default(),
            max_bars: 50,
        }
    }
}

/// Arguments for the query command
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    /// Dataset file (None = bundled sample)
    pub dataset: Option<PathBuf>,

    /// Request JSON file (None = stdin)
    pub request: Option<PathBuf>,

    /// Response JSON file (None = stdout)
    pub output: Option<PathBuf>,
}
