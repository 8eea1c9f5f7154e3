//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of records shown in the top/bottom performer tables
pub const DEFAULT_TOP_N: usize = 5;
pub const MAX_TOP_N: usize = 100;

/// Directory searched for `<token>.png` icons
pub const DEFAULT_ICON_DIR: &str = "token_images";
pub const ICON_EXTENSION: &str = "png";
pub const ICON_MIME_TYPE: &str = "image/png";

// Chart geometry (pixels)
pub const DEFAULT_CHART_WIDTH: usize = 1200;
pub const CHART_HEIGHT: usize = 500;
pub const MIN_CHART_WIDTH: usize = 300;
pub const MAX_CHART_WIDTH: usize = 10_000;

// Dark theme palette
pub const BACKGROUND_COLOR: &str = "#0E1117";
pub const BAR_COLOR: &str = "#00CA8E";
pub const TEXT_COLOR: &str = "#FAFAFA";
pub const GRID_COLOR: &str = "#1F2937";

pub const CHART_TITLE: &str = "Token Performance (P/L%)";
