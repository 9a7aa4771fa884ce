use date_range_rs::RangeSelector;
use date_range_rs::api::{RANGE_SNAPSHOT_JSON_SCHEMA_V1, RangeSnapshot};
use date_range_rs::core::DataRow;

fn selector() -> RangeSelector {
    let rows: Vec<DataRow> = (0..6)
        .map(|i| DataRow::new(format!("2024-05-{:02}", i + 1)))
        .collect();
    let mut selector = RangeSelector::with_dataset(rows);
    selector.set_selection(4, 2);
    selector
}

#[test]
fn snapshot_reflects_current_selection() {
    let snapshot = selector().snapshot();

    assert_eq!(snapshot.dataset_len, 6);
    assert_eq!(snapshot.selected_len, 3);
    assert_eq!(snapshot.state.index_range(), (2, 4));
    assert_eq!(snapshot.state.start_date.as_deref(), Some("2024-05-03"));
    assert_eq!(snapshot.state.end_date.as_deref(), Some("2024-05-05"));
}

#[test]
fn contract_v1_wraps_snapshot_with_schema_version() {
    let snapshot = selector().snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], RANGE_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(value["snapshot"]["state"]["start_index"], 2);

    let parsed = RangeSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);
}

#[test]
fn compat_parser_accepts_bare_snapshot() {
    let snapshot = selector().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("serialize bare");

    let parsed = RangeSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let snapshot = selector().snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 7");

    let err = RangeSnapshot::from_json_compat_str(&json).expect_err("v7 must fail");
    assert!(format!("{err}").contains("unsupported range snapshot schema version: 7"));
}

#[test]
fn empty_selector_snapshot_has_undefined_labels() {
    let empty: RangeSelector = RangeSelector::new();
    let json = serde_json::to_string(&empty.snapshot()).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert!(value["state"]["start_date"].is_null());
    assert!(value["state"]["end_date"].is_null());
    assert_eq!(value["selected_len"], 0);
}

#[test]
fn compat_parser_rejects_inconsistent_snapshots() {
    let cases = [
        // reversed, labelled and oversized on an empty dataset
        r#"{"state":{"start_index":9,"end_index":2,"start_date":null,"end_date":"x"},"dataset_len":0,"selected_len":42}"#,
        // start after end
        r#"{"state":{"start_index":3,"end_index":1,"start_date":"a","end_date":"b"},"dataset_len":5,"selected_len":3}"#,
        // end past the last row
        r#"{"state":{"start_index":0,"end_index":5,"start_date":"a","end_date":"b"},"dataset_len":5,"selected_len":6}"#,
        // selected_len disagrees with the span
        r#"{"state":{"start_index":1,"end_index":3,"start_date":"a","end_date":"b"},"dataset_len":5,"selected_len":2}"#,
        // missing label on a non-empty dataset
        r#"{"state":{"start_index":1,"end_index":3,"start_date":"a","end_date":null},"dataset_len":5,"selected_len":3}"#,
    ];

    for input in cases {
        let err = RangeSnapshot::from_json_compat_str(input).expect_err("inconsistent snapshot");
        assert!(
            matches!(err, date_range_rs::RangeError::InvalidData(_)),
            "unexpected error for {input}: {err}"
        );
    }
}

#[test]
fn compat_parser_validates_contract_payloads_too() {
    let mut snapshot = selector().snapshot();
    snapshot.selected_len = 99;
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");

    let err = RangeSnapshot::from_json_compat_str(&json).expect_err("bad span must fail");
    assert!(format!("{err}").contains("does not match index span"));
}

#[test]
fn empty_selector_snapshot_round_trips() {
    let empty: RangeSelector = RangeSelector::new();
    let snapshot = empty.snapshot();
    snapshot.validate().expect("empty snapshot is consistent");

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let parsed = RangeSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}
