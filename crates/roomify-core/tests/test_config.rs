use std::time::Duration;

use roomify_core::config::{ProgressConfig, UploadConfig};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_upload_config_defaults() {
    let c = UploadConfig::default();
    assert_eq!(c.max_file_size, 10 * 1024 * 1024);
    assert_eq!(c.completion_delay(), Duration::from_millis(600));
    assert_eq!(c.handoff_namespace, "roomify_image");
    assert_eq!(c.progress.step, 10);
    assert_eq!(c.progress.interval(), Duration::from_millis(100));
    assert!(c.validate().is_ok());
}

#[test]
fn test_ticks_to_full() {
    let ticks = |step| ProgressConfig {
        step,
        interval_ms: 100,
    }
    .ticks_to_full();
    assert_eq!(ticks(10), 10);
    assert_eq!(ticks(30), 4);
    assert_eq!(ticks(100), 1);
    assert_eq!(ticks(7), 15);
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

#[test]
fn test_empty_document_gives_defaults() {
    let c: UploadConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(c, UploadConfig::default());
}

#[test]
fn test_partial_document_overrides_only_given_fields() {
    let c: UploadConfig = serde_json::from_str(
        r#"{ "completion_delay_ms": 250, "progress": { "step": 25, "interval_ms": 40 } }"#,
    )
    .unwrap();
    assert_eq!(c.completion_delay_ms, 250);
    assert_eq!(c.progress.step, 25);
    assert_eq!(c.progress.interval_ms, 40);
    assert_eq!(c.max_file_size, UploadConfig::default().max_file_size);
}

#[test]
fn test_serialize_roundtrip_preserves_values() {
    let c = UploadConfig {
        max_file_size: 1234,
        handoff_namespace: "plans".into(),
        ..Default::default()
    };
    let json = serde_json::to_string(&c).unwrap();
    let back: UploadConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_zero_step_rejected() {
    let mut c = UploadConfig::default();
    c.progress.step = 0;
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("progress.step"), "got: {err}");
}

#[test]
fn test_step_above_hundred_rejected() {
    let mut c = UploadConfig::default();
    c.progress.step = 101;
    assert!(c.validate().is_err());
}

#[test]
fn test_zero_interval_rejected() {
    let mut c = UploadConfig::default();
    c.progress.interval_ms = 0;
    assert!(c.validate().is_err());
}

#[test]
fn test_empty_namespace_rejected() {
    let c = UploadConfig {
        handoff_namespace: String::new(),
        ..Default::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn test_namespace_with_path_separator_rejected() {
    for bad in ["../escape", "plans/2024", "plans\\2024", ".hidden"] {
        let c = UploadConfig {
            handoff_namespace: bad.into(),
            ..Default::default()
        };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("handoff_namespace"), "{bad}: {err}");
    }
}

#[test]
fn test_namespace_with_dashes_and_underscores_accepted() {
    let c = UploadConfig {
        handoff_namespace: "roomify-plans_v2".into(),
        ..Default::default()
    };
    assert!(c.validate().is_ok());
}
