use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert_eq!(
        SpritePackError::no_sources("assets/buddy-intro-*.png").to_string(),
        "no files matching assets/buddy-intro-*.png"
    );
    assert!(
        SpritePackError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn io_error_names_the_path() {
    let err = SpritePackError::io(
        "assets/out.png",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    let msg = err.to_string();
    assert!(msg.contains("assets/out.png"));
    assert!(msg.contains("denied"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpritePackError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
