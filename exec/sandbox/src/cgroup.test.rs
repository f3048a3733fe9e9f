use super::*;

#[test]
fn create_returns_none_when_cgroups_v2_is_unavailable() {
    // This environment may or may not have cgroup v2 mounted; either
    // outcome is acceptable, but it must never error.
    let result = Cgroup::create("test-unavailable-probe", &CgroupLimits::default());
    assert!(result.is_ok());
}

#[test]
fn destroy_on_a_missing_cgroup_is_a_no_op() {
    let cgroup = Cgroup {
        path: PathBuf::from("/sys/fs/cgroup/agentick-sandbox/does-not-exist"),
    };
    assert!(cgroup.destroy().is_ok());
}

#[test]
fn limits_default_to_unset() {
    let limits = CgroupLimits::default();
    assert!(limits.memory_max.is_none());
    assert!(limits.cpu_max.is_none());
    assert!(limits.pids_max.is_none());
}
