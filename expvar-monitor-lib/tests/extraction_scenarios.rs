//! End-to-end extraction against a document captured from a real expvar handler.

use expvar_monitor_lib::commands::Config;
use expvar_monitor_lib::extract::{DataPoint, DataPointValue, extract};
use expvar_monitor_lib::selectors::MetricKind;
use serde_json::Value;
use std::fs;

const FIXTURE_PATH: &str = "tests/fixtures/debug_vars.json";

fn document() -> Value {
    let text = fs::read_to_string(FIXTURE_PATH).expect("Failed to read fixture file");
    serde_json::from_str(&text).expect("Fixture should be valid JSON")
}

fn find<'a>(points: &'a [DataPoint], name: &str) -> &'a DataPoint {
    points
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("no data point named {name}"))
}

#[test]
fn test_builtin_catalog_over_real_document() {
    let config = Config::default();
    let extraction = extract(&document(), &config.effective_catalog());

    assert!(extraction.errors.is_empty(), "{:?}", extraction.errors);
    assert_eq!(extraction.data_points.len(), 28);

    let heap = find(&extraction.data_points, "memstats_heap_alloc");
    assert_eq!(heap.kind, MetricKind::Gauge);
    assert_eq!(heap.value, DataPointValue::UInt(2_105_376));

    let gc = find(&extraction.data_points, "memstats_num_gc");
    assert_eq!(gc.kind, MetricKind::Cumulative);
    assert_eq!(gc.value, DataPointValue::UInt(42));

    assert_eq!(find(&extraction.data_points, "memstats_pause_ns_0").value, DataPointValue::UInt(61_250));
    assert_eq!(find(&extraction.data_points, "memstats_enable_gc").value, DataPointValue::UInt(1));
    assert!(matches!(
        find(&extraction.data_points, "memstats_gccpu_fraction").value,
        DataPointValue::Float(_)
    ));

    // optional built-ins stay off without the wildcard
    assert!(extraction.data_points.iter().all(|p| p.name != "memstats_heap_sys"));
}

#[test]
fn test_enhanced_catalog_over_real_document() {
    let config = Config {
        extra_metrics: vec!["*".to_string()],
        ..Config::default()
    };
    let extraction = extract(&document(), &config.effective_catalog());

    assert!(extraction.errors.is_empty(), "{:?}", extraction.errors);
    assert_eq!(extraction.data_points.len(), 34);
    assert_eq!(find(&extraction.data_points, "memstats_heap_sys").value, DataPointValue::UInt(7_700_480));
    assert_eq!(find(&extraction.data_points, "memstats_debug_gc").value, DataPointValue::UInt(0));
    assert_eq!(find(&extraction.data_points, "memstats_by_size_0_size").value, DataPointValue::UInt(0));
}

#[test]
fn test_user_selectors_with_dimensions() {
    let config = Config::parse(
        r#"
host = "localhost"
port = 6060

[[metrics]]
json_path = "http.requests"
type = "cumulative"

[[metrics.dimensions]]
name = "service"
value = "inventory"

[[metrics]]
name = "queue_depth"
json_path = "queues.orders.depth"
type = "gauge"

[[metrics.dimensions]]
name = "queue"
json_path = "queues.orders"

[[metrics.dimensions]]
name = "source"
json_path = "queues"

[[metrics]]
json_path = "http.version"
type = "gauge"

[[metrics]]
json_path = "http.missing"
type = "gauge"
"#,
    )
    .expect("configuration should be valid");

    let extraction = extract(&document(), &config.effective_catalog());

    let requests = find(&extraction.data_points, "http_requests");
    assert_eq!(requests.kind, MetricKind::Cumulative);
    assert_eq!(requests.value, DataPointValue::UInt(15_322));
    assert_eq!(requests.dimensions["service"], "inventory");

    let depth = find(&extraction.data_points, "queue_depth");
    assert_eq!(depth.value, DataPointValue::UInt(17));
    assert!(depth.dimensions["queue"].contains("\"depth\":17"));
    assert!(depth.dimensions.contains_key("source"));

    // user selectors come first, in declaration order
    assert_eq!(extraction.data_points[0].name, "http_requests");
    assert_eq!(extraction.data_points[1].name, "queue_depth");

    // the string value is the only failure; the absent path is silent
    assert_eq!(extraction.errors.len(), 1);
    assert!(extraction.errors[0].to_string().contains("http.version"));
    assert!(extraction.data_points.iter().all(|p| p.name != "http_missing"));
}

#[test]
fn test_same_catalog_across_documents() {
    let config = Config::parse(
        r#"
host = "localhost"
port = 6060

[[metrics]]
json_path = "http.in_flight"
type = "gauge"
"#,
    )
    .expect("configuration should be valid");
    let catalog = config.effective_catalog();

    let first = extract(&document(), &catalog);
    let second = extract(&serde_json::json!({"http": {"in_flight": 9}}), &catalog);

    assert_eq!(find(&first.data_points, "http_in_flight").value, DataPointValue::UInt(3));
    assert_eq!(second.data_points.len(), 1);
    assert_eq!(second.data_points[0].value, DataPointValue::UInt(9));
}
