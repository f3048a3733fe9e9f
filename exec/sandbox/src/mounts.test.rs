use super::*;

#[test]
fn adding_the_same_path_twice_upgrades_to_read_write() {
    let mut mounts = MountList::new();
    mounts.add("/tmp/work", MountMode::ReadOnly);
    mounts.add("/tmp/work", MountMode::ReadWrite);

    assert_eq!(mounts.len(), 1);
    assert_eq!(mounts.iter().next().unwrap().mode, MountMode::ReadWrite);
}

#[test]
fn a_child_path_already_covered_read_write_is_dropped() {
    let mut mounts = MountList::new();
    mounts.add("/tmp/work", MountMode::ReadWrite);
    mounts.add("/tmp/work/sub", MountMode::ReadOnly);

    assert_eq!(mounts.len(), 1);
    assert!(mounts.contains(Path::new("/tmp/work")));
}

#[test]
fn a_parent_mount_replaces_redundant_children() {
    let mut mounts = MountList::new();
    mounts.add("/tmp/work/sub", MountMode::ReadWrite);
    mounts.add("/tmp/work", MountMode::ReadWrite);

    assert_eq!(mounts.len(), 1);
    assert!(mounts.contains(Path::new("/tmp/work")));
}

#[test]
fn unrelated_paths_both_stay() {
    let mut mounts = MountList::new();
    mounts.add("/tmp/a", MountMode::ReadOnly);
    mounts.add("/tmp/b", MountMode::ReadWrite);

    assert_eq!(mounts.len(), 2);
}

#[test]
fn add_mount_remaps_the_sandbox_visible_path() {
    let mut mounts = MountList::new();
    mounts.add_mount(MountEntry {
        host_path: PathBuf::from("/tmp/data"),
        sandbox_path: Some(PathBuf::from("/mnt/data")),
        mode: MountMode::ReadOnly,
    });

    let entry = mounts.iter().next().unwrap();
    assert_eq!(entry.sandbox_path(), Path::new("/mnt/data"));
}

#[test]
fn remove_drops_a_mount_by_host_path() {
    let mut mounts = MountList::new();
    mounts.add("/tmp/work", MountMode::ReadWrite);

    assert!(mounts.remove(Path::new("/tmp/work")));
    assert!(mounts.is_empty());
    assert!(!mounts.remove(Path::new("/tmp/work")));
}
