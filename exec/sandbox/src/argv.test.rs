use super::*;
use std::path::PathBuf;

use crate::mounts::MountEntry;

#[test]
fn bwrap_binds_the_workspace_and_execs_the_command() {
    let mounts = MountList::new();
    let argv = build_bwrap_argv(&PathBuf::from("/tmp/ws"), &mounts, false, &["echo".into(), "hi".into()]);
    assert!(argv.contains(&"--unshare-all".to_string()));
    assert!(!argv.contains(&"--share-net".to_string()));
    assert!(argv.windows(3).any(|w| w == ["--bind", "/tmp/ws", "/tmp/ws"]));
    let split = argv.iter().position(|a| a == "--").unwrap();
    assert_eq!(&argv[split + 1..], &["echo", "hi"]);
}

#[test]
fn bwrap_shares_net_when_network_is_allowed() {
    let mounts = MountList::new();
    let argv = build_bwrap_argv(&PathBuf::from("/tmp/ws"), &mounts, true, &["true".into()]);
    assert!(argv.contains(&"--share-net".to_string()));
}

#[test]
fn bwrap_ro_binds_the_base_system_paths() {
    let mounts = MountList::new();
    let argv = build_bwrap_argv(&PathBuf::from("/tmp/ws"), &mounts, false, &["true".into()]);
    for path in ["/usr", "/lib", "/lib64", "/bin", "/sbin", "/etc"] {
        assert!(argv.windows(3).any(|w| w == ["--ro-bind", path, path]), "missing ro-bind for {path}");
    }
    assert!(argv.windows(2).any(|w| w == ["--tmpfs", "/tmp"]));
    assert!(argv.contains(&"--new-session".to_string()));
    assert!(argv.contains(&"--die-with-parent".to_string()));
}

#[test]
fn bwrap_adds_ro_and_rw_binds_from_the_mount_list() {
    let mut mounts = MountList::new();
    mounts.add("/usr/lib", MountMode::ReadOnly);
    mounts.add("/tmp/out", MountMode::ReadWrite);
    let argv = build_bwrap_argv(&PathBuf::from("/tmp/ws"), &mounts, false, &["true".into()]);
    assert!(argv.windows(3).any(|w| w == ["--ro-bind", "/usr/lib", "/usr/lib"]));
    assert!(argv.windows(3).any(|w| w == ["--bind", "/tmp/out", "/tmp/out"]));
}

#[test]
fn bwrap_remaps_a_mount_to_its_sandbox_path() {
    let mut mounts = MountList::new();
    mounts.add_mount(MountEntry {
        host_path: PathBuf::from("/tmp/data"),
        sandbox_path: Some(PathBuf::from("/mnt/data")),
        mode: MountMode::ReadOnly,
    });
    let argv = build_bwrap_argv(&PathBuf::from("/tmp/ws"), &mounts, false, &["true".into()]);
    assert!(argv.windows(3).any(|w| w == ["--ro-bind", "/tmp/data", "/mnt/data"]));
}

#[test]
fn unshare_isolates_net_unless_allowed() {
    let argv = build_unshare_argv(false, &["true".into()]);
    assert!(argv.contains(&"--net".to_string()));
    let argv_allowed = build_unshare_argv(true, &["true".into()]);
    assert!(!argv_allowed.contains(&"--net".to_string()));
}

#[test]
fn unshare_maps_a_root_user_in_the_new_user_namespace() {
    let argv = build_unshare_argv(false, &["true".into()]);
    assert!(argv.contains(&"--mount".to_string()));
    assert!(argv.contains(&"--user".to_string()));
    assert!(argv.contains(&"--map-root-user".to_string()));
}
