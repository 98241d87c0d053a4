use serde_json::{json, Value};
use tickplot_core::{
    parse_chart_json, ChartConfig, CoreError, DatasetError, Envelope, EnvelopeMeta, RenderFrame,
    SCHEMA_VERSION,
};

fn chart_document(timestamps: &[i64], closes: &[Value], volumes: &[Value]) -> String {
    json!({
        "chart": {
            "result": [{
                "meta": {"symbol": "AAPL", "currency": "USD"},
                "timestamp": timestamps,
                "indicators": {"quote": [{
                    "open": closes,
                    "high": closes,
                    "low": closes,
                    "close": closes,
                    "volume": volumes
                }]}
            }],
            "error": null
        }
    })
    .to_string()
}

#[test]
fn dataset_records_follow_timestamp_order() {
    let body = chart_document(
        &[1_519_914_600, 1_520_001_000, 1_520_260_200],
        &[json!(103.456), json!(null), json!(106.0)],
        &[json!(500_000), json!(400_000), json!(null)],
    );

    let records = parse_chart_json(&body).expect("valid dataset");

    assert_eq!(records.len(), 3, "one raw record per timestamp");
    assert!(records.windows(2).all(|pair| pair[0].date < pair[1].date));
    assert_eq!(records[1].close, None);
    assert_eq!(records[2].volume, None);
}

#[test]
fn unknown_fields_are_ignored() {
    let body = json!({
        "chart": {
            "result": [{
                "meta": {"regularMarketPrice": 1.0},
                "timestamp": [1_519_914_600],
                "events": {},
                "indicators": {
                    "quote": [{"close": [1.0], "open": [1.0], "high": [1.0], "low": [1.0]}],
                    "adjclose": [{"adjclose": [1.0]}]
                }
            }]
        }
    })
    .to_string();

    let records = parse_chart_json(&body).expect("valid dataset");
    assert_eq!(records.len(), 1);
}

#[test]
fn negative_volume_reads_as_missing() {
    let body = chart_document(&[1_519_914_600], &[json!(1.0)], &[json!(-5)]);

    let records = parse_chart_json(&body).expect("valid dataset");

    assert_eq!(records[0].volume, None);
}

#[test]
fn malformed_documents_are_rejected() {
    for body in ["", "not json", "{\"chart\": 5}", "{\"result\": []}"] {
        let err = parse_chart_json(body).expect_err("must fail");
        assert!(
            matches!(err, DatasetError::Malformed(_)),
            "body {body:?} gave {err:?}"
        );
    }
}

#[test]
fn out_of_range_timestamp_is_a_validation_error() {
    let body = chart_document(&[i64::MAX], &[json!(1.0)], &[json!(1)]);

    let err = parse_chart_json(&body).expect_err("must fail");

    assert!(matches!(err, DatasetError::Timestamp(_)));
}

#[test]
fn rendered_frame_wraps_in_envelope() {
    let body = chart_document(
        &[1_519_914_600, 1_520_001_000],
        &[json!(10.0), json!(12.0)],
        &[json!(100), json!(200)],
    );
    let frame = RenderFrame::from_chart_json(&body, &ChartConfig::default()).expect("renders");

    let meta = EnvelopeMeta::new("req-0123456789", SCHEMA_VERSION).expect("valid meta");
    let envelope = Envelope::new(meta, frame).expect("valid envelope");
    let value = serde_json::to_value(&envelope).expect("serializes");

    assert_eq!(value["meta"]["schema_version"], SCHEMA_VERSION);
    assert!(value["meta"].get("warnings").is_none());
    assert_eq!(value["data"]["series"]["records"][0]["date"], "2018-03-01T14:30:00Z");
    assert_eq!(value["data"]["volume_bars"][1]["tone"], "up");
}

#[test]
fn upstream_error_surfaces_through_render() {
    let body = json!({"chart": {"result": null, "error": {"code": "Not Found"}}}).to_string();

    let err = RenderFrame::from_chart_json(&body, &ChartConfig::default()).expect_err("must fail");

    assert!(matches!(
        err,
        CoreError::Dataset(DatasetError::Upstream { ref message }) if message == "Not Found"
    ));
}

#[test]
fn envelope_rejects_short_request_ids_and_bad_versions() {
    assert!(EnvelopeMeta::new("short", SCHEMA_VERSION).is_err());
    assert!(EnvelopeMeta::new("req-0123456789", "1.0").is_err());
    assert!(EnvelopeMeta::new("req-0123456789", "v2.10.3").is_ok());
}
