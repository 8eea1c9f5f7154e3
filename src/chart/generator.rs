//! SVG horizontal bar chart generation.
//!
//! One bar per record in view order, lowest value at the bottom, with a
//! `xx.xx%` label outside each bar. Bars grow from a zero axis so negative
//! P/L% extends to the left.

use crate::assets::IconResolver;
use crate::dataset::Record;
use crate::filter::FilteredView;
use crate::utils::config::{
    BACKGROUND_COLOR, BAR_COLOR, CHART_HEIGHT, CHART_TITLE, DEFAULT_CHART_WIDTH, GRID_COLOR,
    TEXT_COLOR,
};
use log::{debug, info};
use std::fmt::Write;

const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 110.0;
const MARGIN_RIGHT: f64 = 80.0;
const MIN_ROW_HEIGHT: f64 = 18.0;
const ICON_SIZE: f64 = 16.0;
// Approximate advance of one glyph of the 11px value labels
const LABEL_CHAR_WIDTH: f64 = 6.5;
const LABEL_OFFSET: f64 = 4.0;
const GRID_LINES: usize = 5;

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub icons: Option<IconResolver>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            width: DEFAULT_CHART_WIDTH,
            icons: None,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_icons(mut self, icons: IconResolver) -> Self {
        self.icons = Some(icons);
        self
    }
}

/// Maps P/L% values onto the horizontal pixel range of the plot
struct XScale {
    lo: f64,
    hi: f64,
    left: f64,
    width: f64,
}

impl XScale {
    fn for_records(records: &[Record], left: f64, width: f64) -> Self {
        let (min, max) = records.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), r| {
            (lo.min(r.pl_percent), hi.max(r.pl_percent))
        });
        let hi = if max - min <= f64::EPSILON { min + 1.0 } else { max };
        Self {
            lo: min,
            hi,
            left,
            width,
        }
    }

    fn x(&self, value: f64) -> f64 {
        self.left + (value - self.lo) / (self.hi - self.lo) * self.width
    }
}

/// Label text drawn next to a bar
fn value_label(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Left edge of the plot area
///
/// Value labels of negative bars sit left of the bar end, so the plot is
/// shifted right by the widest such label to keep them clear of the token
/// names.
fn plot_left(records: &[Record]) -> f64 {
    let gutter = records
        .iter()
        .filter(|r| r.pl_percent < 0.0)
        .map(|r| value_label(r.pl_percent).len())
        .max()
        .map_or(0.0, |chars| chars as f64 * LABEL_CHAR_WIDTH + 2.0 * LABEL_OFFSET);
    MARGIN_LEFT + gutter
}

/// Generate an SVG bar chart from a filtered view
///
/// Never fails: an empty view renders the frame with a note.
pub fn generate_bar_chart(view: &FilteredView, config: Option<&ChartConfig>) -> String {
    let config = config.cloned().unwrap_or_default();
    info!("Generating bar chart with {} bars", view.len());

    let width = config.width as f64;
    let rows = view.len().max(1) as f64;
    let height = (CHART_HEIGHT as f64).max(MARGIN_TOP + MARGIN_BOTTOM + rows * MIN_ROW_HEIGHT);
    let left = plot_left(view.records());
    let plot_width = (width - left - MARGIN_RIGHT).max(1.0);
    let plot_bottom = height - MARGIN_BOTTOM;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    svg.push_str(r#"<style>.bar:hover { opacity: 0.85; cursor: pointer; } text { font-family: sans-serif; }</style>"#);
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        width, height, BACKGROUND_COLOR
    );
    let _ = write!(
        svg,
        r#"<text x="{}" y="28" font-size="16" text-anchor="middle" font-weight="bold" fill="{}">{}</text>"#,
        width / 2.0,
        TEXT_COLOR,
        escape_xml(&config.title)
    );

    if view.is_empty() {
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" font-size="14" text-anchor="middle" fill="{}">No tokens match the current filters</text>"#,
            width / 2.0,
            height / 2.0,
            TEXT_COLOR
        );
        svg.push_str("</svg>");
        return svg;
    }

    let scale = XScale::for_records(view.records(), left, plot_width);
    render_grid(&mut svg, &scale, plot_bottom);
    render_bars(&mut svg, view.records(), &scale, plot_bottom, config.icons.as_ref());

    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-size="12" text-anchor="middle" fill="{}">P/L%</text>"#,
        left + plot_width / 2.0,
        height - 8.0,
        TEXT_COLOR
    );

    svg.push_str("</svg>");

    info!("Bar chart generated successfully ({} bytes)", svg.len());
    svg
}

fn render_grid(out: &mut String, scale: &XScale, plot_bottom: f64) {
    let step = (scale.hi - scale.lo) / GRID_LINES as f64;

    for i in 0..=GRID_LINES {
        let value = scale.lo + step * i as f64;
        let x = scale.x(value);
        let _ = write!(
            out,
            r#"<line x1="{x:.2}" y1="{}" x2="{x:.2}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            MARGIN_TOP,
            plot_bottom,
            GRID_COLOR,
            x = x
        );
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{}" font-size="11" text-anchor="middle" fill="{}">{:.0}</text>"#,
            x,
            plot_bottom + 16.0,
            TEXT_COLOR,
            value
        );
    }

    // zero axis
    let zero = scale.x(0.0);
    let _ = write!(
        out,
        r#"<line x1="{z:.2}" y1="{}" x2="{z:.2}" y2="{}" stroke="{}" stroke-width="2"/>"#,
        MARGIN_TOP,
        plot_bottom,
        GRID_COLOR,
        z = zero
    );
}

fn render_bars(
    out: &mut String,
    records: &[Record],
    scale: &XScale,
    plot_bottom: f64,
    icons: Option<&IconResolver>,
) {
    let row_height = (plot_bottom - MARGIN_TOP) / records.len() as f64;
    let bar_height = row_height * 0.7;
    let zero = scale.x(0.0);

    // First record is the lowest value and sits at the bottom
    for (i, record) in records.iter().enumerate() {
        let row_top = plot_bottom - (i as f64 + 1.0) * row_height;
        let bar_y = row_top + (row_height - bar_height) / 2.0;
        let text_y = row_top + row_height / 2.0 + 4.0;
        let value_x = scale.x(record.pl_percent);
        let token = escape_xml(&record.token);
        let label = value_label(record.pl_percent);

        let _ = write!(
            out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="bar"><title>{} ({})</title></rect>"#,
            zero.min(value_x),
            bar_y,
            (value_x - zero).abs(),
            bar_height,
            BAR_COLOR,
            token,
            label
        );

        let (label_x, anchor) = if record.pl_percent < 0.0 {
            (value_x - LABEL_OFFSET, "end")
        } else {
            (value_x + LABEL_OFFSET, "start")
        };
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="{}" fill="{}">{}</text>"#,
            label_x, text_y, anchor, TEXT_COLOR, label
        );

        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="end" fill="{}">{}</text>"#,
            MARGIN_LEFT - 8.0,
            text_y,
            TEXT_COLOR,
            token
        );

        if let Some(uri) = icons.and_then(|resolver| resolver.data_uri(&record.token)) {
            debug!("Embedding icon for {}", record.token);
            let _ = write!(
                out,
                r#"<image href="{}" x="4" y="{:.2}" width="{}" height="{}"/>"#,
                uri,
                row_top + (row_height - ICON_SIZE) / 2.0,
                ICON_SIZE,
                ICON_SIZE
            );
        }
    }
}

/// Escape text for use inside SVG elements and attributes
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
