//! Builds the wrapper argv for `bwrap`/`unshare` from a [`MountList`]
//! (§4.5).

use std::path::Path;

use crate::mounts::MountList;
use crate::mounts::MountMode;

/// Base system paths bind-mounted read-only into every bwrap sandbox so the
/// child has a working userland despite `--unshare-all` + no shared root.
const BWRAP_RO_SYSTEM_PATHS: &[&str] = &["/usr", "/lib", "/lib64", "/bin", "/sbin", "/etc"];

/// Builds `bwrap` arguments that confine the child to `workspace_root`
/// plus whatever is listed in `mounts`, then execs `command` (§4.5).
pub fn build_bwrap_argv(workspace_root: &Path, mounts: &MountList, allow_network: bool, command: &[String]) -> Vec<String> {
    let mut argv = vec!["--unshare-all".to_string()];

    if allow_network {
        argv.push("--share-net".to_string());
    }

    for path in BWRAP_RO_SYSTEM_PATHS {
        argv.push("--ro-bind".to_string());
        argv.push((*path).to_string());
        argv.push((*path).to_string());
    }

    argv.push("--proc".to_string());
    argv.push("/proc".to_string());
    argv.push("--dev".to_string());
    argv.push("/dev".to_string());
    argv.push("--tmpfs".to_string());
    argv.push("/tmp".to_string());

    argv.push("--bind".to_string());
    argv.push(workspace_root.display().to_string());
    argv.push(workspace_root.display().to_string());

    for entry in mounts.iter() {
        let flag = match entry.mode {
            MountMode::ReadOnly => "--ro-bind",
            MountMode::ReadWrite => "--bind",
        };
        argv.push(flag.to_string());
        argv.push(entry.host_path.display().to_string());
        argv.push(entry.sandbox_path().display().to_string());
    }

    argv.push("--die-with-parent".to_string());
    argv.push("--new-session".to_string());
    argv.push("--chdir".to_string());
    argv.push(workspace_root.display().to_string());

    argv.push("--".to_string());
    argv.extend(command.iter().cloned());
    argv
}

/// Builds `unshare` arguments. Weaker than bwrap: no bind-mount
/// confinement, just namespace isolation plus a mapped-root user namespace
/// (§4.5).
pub fn build_unshare_argv(allow_network: bool, command: &[String]) -> Vec<String> {
    let mut argv = vec!["--mount".to_string(), "--pid".to_string(), "--fork".to_string()];

    if !allow_network {
        argv.push("--net".to_string());
    }

    argv.push("--user".to_string());
    argv.push("--map-root-user".to_string());

    argv.push("--".to_string());
    argv.extend(command.iter().cloned());
    argv
}

#[cfg(test)]
#[path = "argv.test.rs"]
mod tests;
