//! Integration tests for the public normalization API.

use std::io::Write;
use std::sync::{Arc, Mutex};

use overlay_utils::{
    normalize_apis, normalize_style, CollectingDiagnostics, Normalizer, OverlaySlot,
    StyleRejection,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

#[test]
fn test_documented_style_examples() {
    assert_eq!(normalize_style(&json!("--a: 1; --b:2")), "--a:1;--b:2");
    assert_eq!(normalize_style(&json!("color: red; --a:1")), "--a:1");
    assert_eq!(
        normalize_style(&json!({ "--x": "10px", "color": "blue", "--y": 5 })),
        "--x:10px"
    );
    assert_eq!(normalize_style(&json!(null)), "");
    assert_eq!(normalize_style(&json!(42)), "");
    assert_eq!(normalize_style(&json!("")), "");
    assert_eq!(normalize_style(&json!({})), "");
}

#[test]
fn test_documented_api_examples() {
    assert_eq!(
        Value::Object(normalize_apis(&json!({ "foo": 1, "style": "--a:1" }))),
        json!({ "foo": 1, "style": "--a:1" })
    );
    assert_eq!(
        Value::Object(normalize_apis(&json!({ "style": "" }))),
        json!({ "style": "" })
    );
    assert_eq!(Value::Object(normalize_apis(&json!(null))), json!({}));
    assert_eq!(Value::Object(normalize_apis(&json!({ "a": 1 }))), json!({ "a": 1 }));
}

#[test]
fn test_rejections_name_each_dropped_property() {
    let mut normalizer = Normalizer::new().with_diagnostics(CollectingDiagnostics::new());
    normalizer.normalize_style(&json!({ "--x": "10px", "color": "blue", "--y": 5 }));

    let rejections = normalizer.into_diagnostics().take();
    assert_eq!(
        rejections,
        vec![
            StyleRejection::NotCustomProperty {
                property: "color".to_string()
            },
            StyleRejection::NonStringValue {
                property: "--y".to_string()
            },
        ]
    );
}

#[test]
fn test_slots_work_as_map_keys_beside_strings() {
    let mut statics: std::collections::HashMap<OverlaySlot, Value> = Default::default();
    statics.insert(OverlaySlot::Parent, json!("base-overlay"));
    statics.insert(OverlaySlot::Properties, json!(["label", "size"]));
    statics.insert(OverlaySlot::RequiredProperties, json!(["label"]));

    assert_eq!(statics.len(), 3);
    assert_eq!(statics[&OverlaySlot::Properties], json!(["label", "size"]));
    assert!(!statics.contains_key(&OverlaySlot::Secure));
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_default_sink_logs_warning_through_tracing() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, || {
        normalize_style(&json!("color: red; --a: 1"))
    });
    assert_eq!(out, "--a:1");

    let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("WARN"));
    assert!(logged.contains("invalid 'color' set"));
}

fn custom_properties() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("--[a-z][a-z0-9-]{0,8}", "[a-z0-9#.()%]{1,8}"), 0..8).prop_map(
        |pairs| {
            let mut seen = std::collections::HashSet::new();
            pairs
                .into_iter()
                .filter(|(name, _)| seen.insert(name.clone()))
                .collect()
        },
    )
}

fn parse_declarations(text: &str) -> Vec<(String, String)> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

proptest! {
    #[test]
    fn prop_custom_property_mapping_round_trips(pairs in custom_properties()) {
        let map: Map<String, Value> = pairs
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        let mut normalizer = Normalizer::new().with_diagnostics(CollectingDiagnostics::new());
        let out = normalizer.normalize_style(&Value::Object(map));

        prop_assert_eq!(parse_declarations(&out), pairs);
        prop_assert!(normalizer.diagnostics().is_empty());
    }

    #[test]
    fn prop_normalized_text_is_a_fixed_point(pairs in custom_properties()) {
        let text: String = pairs
            .iter()
            .map(|(name, value)| format!("{name} : {value}"))
            .collect::<Vec<_>>()
            .join("; ");

        let once = normalize_style(&json!(text));
        let twice = normalize_style(&json!(once.clone()));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_output_only_has_custom_properties(text in "[a-z: ;-]{0,40}") {
        let out = normalize_style(&json!(text));
        for (name, _) in parse_declarations(&out) {
            prop_assert!(name.starts_with("--"));
        }
    }
}
