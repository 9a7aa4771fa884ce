use date_range_rs::RangeError;
use date_range_rs::api::{AxisBounds, ChartPresentationConfig, TitleAlign};

#[test]
fn partial_json_fills_defaults() {
    let config = ChartPresentationConfig::from_json_str(r#"{"title": "Articles"}"#)
        .expect("partial config");

    assert_eq!(config.title, "Articles");
    assert!(config.stacked);
    assert_eq!(config.bar_top_radius, 100.0);
    assert_eq!(config.axis_color, "black");
    assert_eq!(config.axis_border_width, 2.0);
    assert_eq!(config.axis_bounds, AxisBounds::Data);
    assert_eq!(config.bar_bottom_radius, 0.0);
    assert!(config.show_title);
    assert_eq!(config.title_align, TitleAlign::Start);
    let keys: Vec<&str> = config.series.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["count_positive", "count_todo", "count_negative"]);
}

#[test]
fn config_survives_json_round_trip() {
    let config = ChartPresentationConfig::default().with_title("Daily counts");
    let json = config.to_json_pretty().expect("serialize");

    let parsed = ChartPresentationConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn invalid_config_is_rejected_on_load() {
    let err = ChartPresentationConfig::from_json_str(
        r##"{"series": [{"key": "", "label": "x", "background": "#fff", "border": "#fff"}]}"##,
    )
    .expect_err("empty key must fail");
    assert!(matches!(err, RangeError::InvalidData(ref msg) if msg.contains("series key")));

    let err = ChartPresentationConfig::from_json_str(r#"{"axis_color": "rgb(0,0,0)"}"#)
        .expect_err("unsupported color syntax must fail");
    assert!(format!("{err}").contains("axis color"));

    let err = ChartPresentationConfig::from_json_str("{not json")
        .expect_err("malformed json must fail");
    assert!(format!("{err}").contains("failed to parse presentation config"));
}

#[test]
fn axis_and_title_options_use_lowercase_names() {
    let config = ChartPresentationConfig::from_json_str(
        r#"{"axis_bounds": "ticks", "title_align": "center", "show_title": false, "bar_bottom_radius": 4}"#,
    )
    .expect("config with layout options");

    assert_eq!(config.axis_bounds, AxisBounds::Ticks);
    assert_eq!(config.title_align, TitleAlign::Center);
    assert!(!config.show_title);
    assert_eq!(config.bar_bottom_radius, 4.0);

    let json = ChartPresentationConfig::default()
        .to_json_pretty()
        .expect("serialize");
    assert!(json.contains("\"axis_bounds\": \"data\""));
    assert!(json.contains("\"title_align\": \"start\""));
}
