use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SplayError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SplayError::invalid_topology("x")
            .to_string()
            .contains("invalid topology:")
    );
    assert!(
        SplayError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SplayError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SplayError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: SplayError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, SplayError::Serde(_)));
}
