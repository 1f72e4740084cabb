use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SketchError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SketchError::decode("x").to_string().contains("decode error:"));
    assert!(SketchError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn invalid_input_kind_reports_channel_count() {
    let err = SketchError::invalid_input_kind(4);
    assert!(matches!(err, SketchError::InvalidInputKind { channels: 4 }));
    assert_eq!(
        err.to_string(),
        "invalid input kind: expected 3 channels, got 4"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SketchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
