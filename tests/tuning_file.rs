#![cfg(feature = "serde")]

use std::io::Write;

use boing::tuning::{SegmentSpec, Tuning, TuningError};

#[test]
fn loads_overrides_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
master_volume = 0.5
floor = 600.0

[prepare]
begin = 0.0
end = 0.3
duration = 0.25
"#
    )
    .unwrap();

    let tuning = Tuning::load(file.path()).unwrap();

    assert_eq!(tuning.master_volume, 0.5);
    assert_eq!(tuning.floor, 600.0);
    assert_eq!(tuning.prepare, SegmentSpec::new(0.0, 0.3, 0.25));
    assert_eq!(tuning.gravity, Tuning::default().gravity);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = Tuning::load(&path).unwrap_err();

    assert!(matches!(err, TuningError::Io { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn invalid_segment_is_rejected() {
    let err = Tuning::from_toml_str(
        r#"
[attack]
begin = 0.2
end = -0.2
duration = -0.1
"#,
    )
    .unwrap_err();

    assert!(matches!(err, TuningError::Anim(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Tuning::from_toml_str("gravity = \"lots\"").unwrap_err();
    assert!(matches!(err, TuningError::Parse(_)));
}
