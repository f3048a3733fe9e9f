use super::*;
use crate::config::SandboxConfig;
use crate::config::SandboxMode;

fn strict_checker(allowed: &Path) -> PermissionChecker {
    PermissionChecker::new(SandboxConfig {
        mode: SandboxMode::Strict,
        allowed_paths: vec![allowed.to_path_buf()],
        denied_paths: vec![],
        allow_network: false,
    })
}

#[test]
fn a_nul_byte_is_rejected() {
    let mut checker = strict_checker(Path::new("/tmp"));
    let mut once = OneTimeAllows::new();
    let err = resolve_safe_path(&mut checker, &mut once, "/tmp/a\0b", false, |_| Recovery::Deny);
    assert!(err.is_err());
}

#[test]
fn an_existing_allowed_path_resolves() {
    let dir = std::env::temp_dir();
    let mut checker = strict_checker(&dir);
    let mut once = OneTimeAllows::new();
    let resolved = resolve_safe_path(&mut checker, &mut once, dir.to_str().unwrap(), false, |_| Recovery::Deny).unwrap();
    assert_eq!(resolved, std::fs::canonicalize(&dir).unwrap());
}

#[test]
fn a_not_yet_existing_write_target_resolves_against_its_existing_ancestor() {
    let dir = std::env::temp_dir();
    let mut checker = strict_checker(&dir);
    let mut once = OneTimeAllows::new();
    let target = dir.join("does-not-exist-yet.txt");
    let resolved = resolve_safe_path(&mut checker, &mut once, target.to_str().unwrap(), true, |_| Recovery::Deny).unwrap();
    assert_eq!(resolved.file_name().unwrap(), "does-not-exist-yet.txt");
    assert_eq!(resolved.parent().unwrap(), std::fs::canonicalize(&dir).unwrap());
}

#[test]
fn denial_can_be_recovered_once_without_changing_standing_policy() {
    let mut checker = strict_checker(Path::new("/nowhere"));
    let mut once = OneTimeAllows::new();
    let dir = std::env::temp_dir();

    let resolved = resolve_safe_path(&mut checker, &mut once, dir.to_str().unwrap(), false, |_| Recovery::AllowOnce).unwrap();
    assert_eq!(resolved, std::fs::canonicalize(&dir).unwrap());
    assert!(!checker.is_allowed_path(&resolved));
}

#[test]
fn denial_can_be_recovered_permanently() {
    let mut checker = strict_checker(Path::new("/nowhere"));
    let mut once = OneTimeAllows::new();
    let dir = std::env::temp_dir();

    resolve_safe_path(&mut checker, &mut once, dir.to_str().unwrap(), false, |_| Recovery::AllowAlways).unwrap();
    let resolved = std::fs::canonicalize(&dir).unwrap();
    assert!(checker.is_allowed_path(&resolved));
}

#[test]
fn a_denied_path_with_no_recovery_stays_denied() {
    let mut checker = strict_checker(Path::new("/nowhere"));
    let mut once = OneTimeAllows::new();
    let dir = std::env::temp_dir();

    let err = resolve_safe_path(&mut checker, &mut once, dir.to_str().unwrap(), false, |_| Recovery::Deny);
    assert!(err.is_err());
}
