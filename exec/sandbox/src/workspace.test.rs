use super::*;

#[test]
fn create_makes_a_mode_0700_directory() {
    let base = std::env::temp_dir().join(format!("agentick-sandbox-test-{}", std::process::id()));
    let ws = Workspace::create(&base).unwrap();
    assert!(ws.root().is_dir());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(ws.root()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700);
    }
}

#[test]
fn destroy_is_idempotent() {
    let base = std::env::temp_dir().join(format!("agentick-sandbox-test-idem-{}", std::process::id()));
    let mut ws = Workspace::create(&base).unwrap();
    ws.destroy().unwrap();
    ws.destroy().unwrap();
    assert!(!base.exists());
}

#[test]
fn drop_removes_an_owned_workspace() {
    let base = std::env::temp_dir().join(format!("agentick-sandbox-test-drop-{}", std::process::id()));
    {
        let _ws = Workspace::create(&base).unwrap();
        assert!(base.exists());
    }
    assert!(!base.exists());
}

#[test]
fn attach_does_not_remove_on_drop() {
    let base = std::env::temp_dir().join(format!("agentick-sandbox-test-attach-{}", std::process::id()));
    std::fs::create_dir_all(&base).unwrap();
    {
        let _ws = Workspace::attach(base.clone());
    }
    assert!(base.exists());
    std::fs::remove_dir_all(&base).unwrap();
}
