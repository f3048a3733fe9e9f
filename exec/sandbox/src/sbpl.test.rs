use super::*;
use std::path::PathBuf;

use crate::mounts::MountEntry;

#[test]
fn none_mode_allows_everything() {
    let profile = generate_profile(&SandboxConfig::default(), "/tmp/ws", &MountList::new());
    assert!(profile.contains("(allow file-read*)"));
    assert!(profile.contains("(allow file-write*)"));
    assert!(profile.contains("(allow network*)"));
}

#[test]
fn read_only_denies_writes() {
    let config = SandboxConfig {
        mode: SandboxMode::ReadOnly,
        ..SandboxConfig::default()
    };
    let profile = generate_profile(&config, "/tmp/ws", &MountList::new());
    assert!(profile.contains("(allow file-read*)"));
    assert!(!profile.contains("(allow file-write*)"));
}

#[test]
fn strict_mode_scopes_reads_to_the_workspace_and_allowed_paths() {
    let config = SandboxConfig {
        mode: SandboxMode::Strict,
        allowed_paths: vec![PathBuf::from("/home/user/project")],
        denied_paths: vec![PathBuf::from("/home/user/project/.env")],
        allow_network: false,
    };
    let profile = generate_profile(&config, "/tmp/ws", &MountList::new());
    assert!(profile.contains("(allow file-read* (subpath \"/tmp/ws\"))"));
    assert!(profile.contains("(allow file-write* (subpath \"/home/user/project\"))"));
    assert!(profile.contains("(deny file-read* (subpath \"/home/user/project/.env\"))"));
    assert!(profile.contains("(deny network*)"));
}

#[test]
fn sensitive_system_directories_are_always_denied() {
    let profile = generate_profile(&SandboxConfig::default(), "/tmp/ws", &MountList::new());
    for path in ["/Users", "/private/var/root", "/Volumes", "/Network", "/Library/Keychains", "/private/var/db/dslocal"] {
        assert!(profile.contains(&format!("(deny file-read* (subpath \"{path}\"))")), "missing deny for {path}");
    }
}

#[test]
fn a_read_only_mount_is_re_allowed_for_reads_but_not_writes() {
    let mut mounts = MountList::new();
    mounts.add_mount(MountEntry {
        host_path: PathBuf::from("/tmp/data"),
        sandbox_path: None,
        mode: MountMode::ReadOnly,
    });
    let profile = generate_profile(&SandboxConfig::default(), "/tmp/ws", &mounts);
    assert!(profile.contains("(allow file-read* (subpath \"/tmp/data\"))"));
    assert!(!profile.contains("(allow file-write* (subpath \"/tmp/data\"))"));
}

#[test]
fn a_read_write_mount_is_re_allowed_for_both() {
    let mut mounts = MountList::new();
    mounts.add("/tmp/out", MountMode::ReadWrite);
    let profile = generate_profile(&SandboxConfig::default(), "/tmp/ws", &mounts);
    assert!(profile.contains("(allow file-read* (subpath \"/tmp/out\"))"));
    assert!(profile.contains("(allow file-write* (subpath \"/tmp/out\"))"));
}

#[test]
fn writes_are_scoped_to_workspace_mounts_and_scratch_paths() {
    let profile = generate_profile(&SandboxConfig::default(), "/tmp/ws", &MountList::new());
    assert!(profile.contains("(allow file-write* (subpath \"/tmp/ws\"))"));
    assert!(profile.contains("(allow file-write* (subpath \"/tmp\"))"));
    assert!(profile.contains("(allow file-write* (subpath \"/private/tmp\"))"));
    assert!(profile.contains("(allow file-write* (subpath \"/dev\"))"));
}

#[test]
fn network_allowed_when_configured() {
    let config = SandboxConfig {
        mode: SandboxMode::Strict,
        allow_network: true,
        ..SandboxConfig::default()
    };
    let profile = generate_profile(&config, "/tmp/ws", &MountList::new());
    assert!(profile.contains("(allow network*)"));
}

#[test]
fn quoting_escapes_embedded_quotes() {
    let quoted = sbpl_quote("a\"b");
    assert_eq!(quoted, "\"a\\\"b\"");
}
