use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ContribError::dependency_unavailable("x")
            .to_string()
            .contains("dependency unavailable:")
    );
    assert!(
        ContribError::invalid_mapping("x")
            .to_string()
            .contains("invalid mapping:")
    );
    assert!(
        ContribError::consumer("x")
            .to_string()
            .contains("consumer error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ContribError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
