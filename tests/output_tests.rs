use std::io::Write;
use token_dash::chart::{generate_bar_chart, generate_text_summary, ChartConfig};
use token_dash::assets::IconResolver;
use token_dash::dashboard::Dashboard;
use token_dash::dataset::{load_dataset, sample_dataset};
use token_dash::output::{read_report, read_request, write_report, write_svg, Report};

#[test]
fn test_report_round_trip_through_disk() {
    let dashboard = Dashboard::new(sample_dataset());
    let params = dashboard.default_params().with_tokens(["BCH", "SC"]);
    let snapshot = dashboard.evaluate(&params);
    let report = Report::new(dashboard.dataset().len(), &params, snapshot.clone());

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("report.json");
    write_report(&report, &path).unwrap();

    let loaded = read_report(&path).unwrap();
    assert_eq!(loaded.snapshot.view.len(), snapshot.view.len());
    assert_eq!(loaded.snapshot.stats.top_n[0].token, "BCH");
    assert_eq!(loaded.dataset_size, 25);
    assert_eq!(loaded.filters.tokens, vec!["BCH".to_string(), "SC".to_string()]);
}

#[test]
fn test_query_request_drives_dashboard() {
    let request = read_request(r#"{"min_pl": 59, "max_pl": 60}"#.as_bytes()).unwrap();
    let snapshot = Dashboard::new(sample_dataset()).evaluate(&request.to_params());

    let tokens: Vec<&str> = snapshot.view.iter().map(|r| r.token.as_str()).collect();
    assert_eq!(tokens, vec!["ETC", "XVG", "GTC"]);
}

#[test]
fn test_chart_written_for_loaded_dataset() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"tokens": [{{"token": "UP", "pl_percent": 12.0}}, {{"token": "DOWN", "pl_percent": -8.5}}]}}"#
    )
    .unwrap();

    let dashboard = Dashboard::new(load_dataset(file.path()).unwrap());
    let snapshot = dashboard.evaluate(&dashboard.default_params());

    let svg = generate_bar_chart(&snapshot.view, Some(&ChartConfig::new().with_width(640)));
    let temp_dir = tempfile::tempdir().unwrap();
    let svg_path = temp_dir.path().join("chart.svg");
    write_svg(&svg, &svg_path).unwrap();

    let written = std::fs::read_to_string(svg_path).unwrap();
    assert!(written.contains("-8.50%"));
    assert!(written.contains("12.00%"));

    let text = generate_text_summary(&snapshot, 10);
    assert!(text.contains("DOWN"));
    assert!(text.contains("1.75%"));
}

#[test]
fn test_chart_icons_survive_writing_to_another_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let icon_dir = temp_dir.path().join("token_images");
    std::fs::create_dir(&icon_dir).unwrap();
    std::fs::write(icon_dir.join("render.png"), [0x89, b'P', b'N', b'G']).unwrap();

    let dashboard = Dashboard::new(sample_dataset());
    let snapshot = dashboard.evaluate(&dashboard.default_params().with_tokens(["RENDER", "SC"]));
    let config = ChartConfig::new().with_icons(IconResolver::new(&icon_dir));
    let svg = generate_bar_chart(&snapshot.view, Some(&config));

    let svg_path = temp_dir.path().join("reports/nested/chart.svg");
    write_svg(&svg, &svg_path).unwrap();

    let written = std::fs::read_to_string(&svg_path).unwrap();
    assert_eq!(written.matches("<image").count(), 1);
    assert!(written.contains(r#"<image href="data:image/png;base64,iVBORw==""#));
    assert!(!written.contains("token_images"));
}
