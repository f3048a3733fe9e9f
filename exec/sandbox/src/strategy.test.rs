use super::*;

#[test]
fn none_is_always_available() {
    assert!(SandboxStrategy::None.is_available());
}

#[test]
fn select_strategy_never_panics_and_returns_a_variant() {
    let picked = select_strategy();
    assert!(picked.is_available());
}

#[test]
fn validating_none_always_succeeds() {
    assert_eq!(validate_requested(SandboxStrategy::None).unwrap(), SandboxStrategy::None);
}

#[test]
fn validating_an_unavailable_strategy_fails() {
    let bogus = if cfg!(target_os = "linux") {
        SandboxStrategy::SandboxExec
    } else {
        SandboxStrategy::Bwrap
    };
    assert!(validate_requested(bogus).is_err());
}

#[test]
fn as_str_matches_the_binary_name() {
    assert_eq!(SandboxStrategy::Bwrap.as_str(), "bwrap");
    assert_eq!(SandboxStrategy::Unshare.as_str(), "unshare");
    assert_eq!(SandboxStrategy::SandboxExec.as_str(), "sandbox-exec");
    assert_eq!(SandboxStrategy::None.as_str(), "none");
}
