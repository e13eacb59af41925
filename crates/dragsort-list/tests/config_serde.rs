#![cfg(feature = "serde")]

use dragsort_list::{
    AutoScrollConfig, ExternalUpdatePolicy, HapticIntensity, ListConfig, ReorderFailurePolicy,
    SettleMotion,
};

#[test]
fn empty_object_yields_defaults() {
    let config: ListConfig = serde_json::from_str("{}").expect("parse");
    assert_eq!(config, ListConfig::default());
}

#[test]
fn partial_config_keeps_other_defaults() {
    let json = r#"{
        "item_height": 64.0,
        "auto_scroll": { "step": 20.0 },
        "motion": { "spring": { "stiffness": 300.0, "damping": 30.0 } },
        "reorder_failure": "rollback",
        "external_update": "defer"
    }"#;
    let config: ListConfig = serde_json::from_str(json).expect("parse");
    assert_eq!(config.item_height, 64.0);
    assert_eq!(config.top_inset, 100.0);
    assert_eq!(
        config.auto_scroll,
        AutoScrollConfig {
            step: 20.0,
            ..AutoScrollConfig::default()
        }
    );
    assert_eq!(
        config.motion,
        SettleMotion::Spring {
            stiffness: 300.0,
            damping: 30.0
        }
    );
    assert_eq!(config.reorder_failure, ReorderFailurePolicy::Rollback);
    assert_eq!(config.external_update, ExternalUpdatePolicy::Defer);
}

#[test]
fn motion_variants_use_snake_case() {
    let instant: SettleMotion = serde_json::from_str(r#""instant""#).expect("parse");
    assert_eq!(instant, SettleMotion::Instant);
    let timing: SettleMotion =
        serde_json::from_str(r#"{ "timing": { "duration_ms": 120 } }"#).expect("parse");
    assert_eq!(timing, SettleMotion::Timing { duration_ms: 120 });
}

#[test]
fn config_survives_serialization() {
    let config = ListConfig::default()
        .with_item_height(72.0)
        .with_motion(SettleMotion::Instant);
    let json = serde_json::to_string(&config).expect("serialize");
    let back: ListConfig = serde_json::from_str(&json).expect("parse");
    assert_eq!(back, config);
}

#[test]
fn haptic_intensity_names() {
    assert_eq!(
        serde_json::to_string(&HapticIntensity::Medium).expect("serialize"),
        r#""medium""#
    );
}
