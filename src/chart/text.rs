//! Terminal summary rendering.

use crate::aggregator::StatsSummary;
use crate::dashboard::Snapshot;
use crate::dataset::Record;
use colored::Colorize;

const BAR_WIDTH: usize = 40;

/// Format a statistic with two decimals, `n/a` when undefined
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => "n/a".to_string(),
    }
}

fn colorize_percent(text: String, value: Option<f64>) -> String {
    match value {
        Some(v) if v < 0.0 => text.red().to_string(),
        Some(_) => text.green().to_string(),
        None => text.dimmed().to_string(),
    }
}

/// Create a text summary: metrics, performer tables and a bar chart
///
/// `max_bars` caps the number of chart rows (highest values first).
pub fn generate_text_summary(snapshot: &Snapshot, max_bars: usize) -> String {
    let mut lines = Vec::new();

    push_metrics(&mut lines, &snapshot.stats);
    lines.push(String::new());
    push_ranking(&mut lines, "🏆 TOP PERFORMERS", &snapshot.stats.top_n);
    lines.push(String::new());
    push_ranking(&mut lines, "📉 BOTTOM PERFORMERS", &snapshot.stats.bottom_n);
    lines.push(String::new());
    push_bars(&mut lines, snapshot.view.records(), max_bars);

    lines.join("\n")
}

fn push_metrics(lines: &mut Vec<String>, stats: &StatsSummary) {
    lines.push(format!("  {}", "📊 SUMMARY STATISTICS".bold()));
    lines.push("  ┏━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━┓".to_string());

    let rows = [
        ("Average P/L%", stats.mean),
        ("Median P/L%", stats.median),
        ("Min P/L%", stats.min),
        ("Max P/L%", stats.max),
    ];
    for (label, value) in rows {
        let cell = colorize_percent(format!("{:>10}", format_percent(value)), value);
        lines.push(format!("  ┃ {:<14} ┃ {} ┃", label, cell));
    }
    lines.push(format!("  ┃ {:<14} ┃ {:>10} ┃", "# of Tokens", stats.count));
    lines.push("  ┗━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━┛".to_string());
}

fn push_ranking(lines: &mut Vec<String>, title: &str, records: &[Record]) {
    lines.push(format!("  {}", title.bold()));
    lines.push("  ┏━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━┓".to_string());
    lines.push(format!("  ┃ {:<14} ┃ {:>10} ┃", "Token", "P/L%"));
    lines.push("  ┣━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━┫".to_string());

    if records.is_empty() {
        lines.push(format!("  ┃ {:<14} ┃ {:>10} ┃", "(none)", ""));
    }
    for record in records {
        let value = Some(record.pl_percent);
        let cell = colorize_percent(format!("{:>10}", format_percent(value)), value);
        lines.push(format!("  ┃ {:<14} ┃ {} ┃", record.token, cell));
    }
    lines.push("  ┗━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━┛".to_string());
}

fn push_bars(lines: &mut Vec<String>, records: &[Record], max_bars: usize) {
    lines.push(format!("  {}", "📈 TOKEN PERFORMANCE (P/L%)".bold()));

    if records.is_empty() {
        lines.push("  No tokens match the current filters".dimmed().to_string());
        return;
    }

    let scale = records
        .iter()
        .map(|r| r.pl_percent.abs())
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON);

    // View is ascending; the chart reads top-down from the highest value
    for record in records.iter().rev().take(max_bars) {
        let len = ((record.pl_percent.abs() / scale) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(len);
        let bar = if record.pl_percent < 0.0 {
            bar.red()
        } else {
            bar.green()
        };
        lines.push(format!(
            "  {:<8} {}{} {:.2}%",
            record.token,
            bar,
            " ".repeat(BAR_WIDTH - len.min(BAR_WIDTH)),
            record.pl_percent
        ));
    }

    if records.len() > max_bars {
        lines.push(String::new());
        lines.push(format!("   (Showing top {} of {} tokens)", max_bars, records.len()));
    }
}
