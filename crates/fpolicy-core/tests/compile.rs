#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use fpolicy_core::{compile, compile_features, Dialect, FeatureMap};
use serde_json::json;

fn features(entries: &[(&str, &[&str])]) -> FeatureMap {
    entries
        .iter()
        .map(|(k, vals)| (k.to_string(), vals.iter().map(|v| v.to_string()).collect()))
        .collect()
}

#[test]
fn multiple_features() {
    let map = features(&[
        ("fullscreen", &[]),
        ("geolocation", &["self", "\"https://example.com\""]),
        ("vibrate", &["*"]),
    ]);
    let compiled = compile(Dialect::Permissions, &map).expect("must compile");

    assert_eq!(compiled.header_name(), "Permissions-Policy");
    assert_eq!(
        compiled.value(),
        "fullscreen=(), geolocation=(self \"https://example.com\"), vibrate=(*)"
    );
    assert_eq!(compiled.to_string(), compiled.value());
}

#[test]
fn entries_follow_insertion_order() {
    let forward = features(&[("camera", &[]), ("microphone", &["self"])]);
    let backward = features(&[("microphone", &["self"]), ("camera", &[])]);

    assert_eq!(
        compile(Dialect::Permissions, &forward).unwrap().value(),
        "camera=(), microphone=(self)"
    );
    assert_eq!(
        compile(Dialect::Permissions, &backward).unwrap().value(),
        "microphone=(self), camera=()"
    );
}

#[test]
fn compiling_twice_is_deterministic() {
    let map = features(&[
        ("geolocation", &["self", "\"https://a.example\"", "\"https://b.example\""]),
        ("unoptimizedImages", &["none"]),
    ]);
    let a = compile(Dialect::Permissions, &map).unwrap();
    let b = compile(Dialect::Permissions, &map).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_map_is_rejected() {
    let err = compile(Dialect::Permissions, &FeatureMap::new()).unwrap_err();
    assert_eq!(err.code().as_str(), "NO_FEATURES");

    let err = compile(Dialect::Feature, &FeatureMap::new()).unwrap_err();
    assert_eq!(err.code().as_str(), "NO_FEATURES");
}

#[test]
fn typed_and_dynamic_inputs_agree() {
    let map = features(&[("syncXhr", &["'self'"]), ("usb", &["'none'"])]);
    let typed = compile(Dialect::Feature, &map).unwrap();
    let dynamic = compile_features(
        Dialect::Feature,
        &json!({ "syncXhr": ["'self'"], "usb": ["'none'"] }),
    )
    .unwrap();

    assert_eq!(typed, dynamic);
    assert_eq!(typed.dialect(), Dialect::Feature);
    assert_eq!(typed.header_name(), "Feature-Policy");
    assert_eq!(typed.into_value(), "sync-xhr 'self';usb 'none'");
}

#[test]
fn errors_name_the_offender() {
    let map = features(&[("vibrate", &["\"example.com\"", "\"example.com\""])]);
    let err = compile(Dialect::Permissions, &map).unwrap_err();
    assert!(err.to_string().contains("\"vibrate\""), "{err}");

    let map = features(&[("vibrate", &["*", "\"example.com\""])]);
    let err = compile(Dialect::Permissions, &map).unwrap_err();
    assert_eq!(err.code().as_str(), "EXCLUSIVE_VALUE_MIXED");
    assert!(err.to_string().contains('*'), "{err}");

    let map = features(&[("topics", &["'none'"])]);
    let err = compile(Dialect::Feature, &map).unwrap_err();
    assert!(err.to_string().contains("\"topics\""), "{err}");
}

#[test]
fn keyword_messages() {
    let err = compile(Dialect::Permissions, &features(&[("vibrate", &["'self'"])])).unwrap_err();
    assert_eq!(err.to_string(), "self must not be quoted");

    let err = compile(Dialect::Feature, &features(&[("vibrate", &["self"])])).unwrap_err();
    assert_eq!(err.to_string(), "'self' must be quoted");
}

#[test]
fn wildcard_is_reported_before_none() {
    let err = compile(Dialect::Permissions, &features(&[("vibrate", &["none", "*"])])).unwrap_err();
    assert_eq!(err.code().as_str(), "EXCLUSIVE_VALUE_MIXED");
    assert_eq!(
        err.to_string(),
        "the value of the \"vibrate\" feature cannot contain * and other values"
    );

    let err = compile(Dialect::Feature, &features(&[("vibrate", &["'none'", "*"])])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the value of the \"vibrate\" feature cannot contain * and other values"
    );

    let err = compile(Dialect::Feature, &features(&[("vibrate", &["'none'", "'self'"])])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the value of the \"vibrate\" feature cannot contain 'none' and other values"
    );
}

#[test]
fn empty_legacy_list_is_written_as_none() {
    let map = features(&[("fullscreen", &[]), ("camera", &["'self'"])]);
    let compiled = compile(Dialect::Feature, &map).unwrap();
    assert_eq!(compiled.value(), "fullscreen 'none';camera 'self'");
}
