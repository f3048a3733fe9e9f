//! Seatbelt Profile Language (SBPL) generation for macOS `sandbox-exec`
//! (§4.5).

use crate::config::SandboxConfig;
use crate::config::SandboxMode;
use crate::mounts::MountList;
use crate::mounts::MountMode;

/// Directories denied outright regardless of `config.allowed_paths`, even in
/// broad-allow read mode (§4.5).
const SBPL_DENIED_SYSTEM_PATHS: &[&str] = &[
    "/Users",
    "/private/var/root",
    "/Volumes",
    "/Network",
    "/Library/Keychains",
    "/private/var/db/dslocal",
];

/// Renders an SBPL profile enforcing `config` against a process confined to
/// `workspace_root`, with `mounts` re-allowed on top of the deny list
/// (§4.5: allow broadly, deny sensitive system directories, re-allow the
/// workspace and each mount subpath for reads, then scope writes to the
/// workspace, each read-write mount, and the tmp/dev scratch paths).
pub fn generate_profile(config: &SandboxConfig, workspace_root: &str, mounts: &MountList) -> String {
    let mut profile = String::new();
    profile.push_str("(version 1)\n");
    profile.push_str("(deny default)\n");
    profile.push_str("(allow process-fork)\n");
    profile.push_str("(allow process-exec)\n");
    profile.push_str("(allow signal)\n");
    profile.push_str("(allow sysctl-read)\n");

    if matches!(config.mode, SandboxMode::None) {
        profile.push_str("(allow file-read*)\n");
        profile.push_str("(allow file-write*)\n");
        profile.push_str("(allow network*)\n");
        return profile;
    }

    profile.push_str("(allow file-read*)\n");

    for denied in SBPL_DENIED_SYSTEM_PATHS {
        profile.push_str(&format!("(deny file-read* (subpath {}))\n", sbpl_quote(denied)));
    }
    for denied in &config.denied_paths {
        let path = sbpl_quote(&denied.display().to_string());
        profile.push_str(&format!("(deny file-read* (subpath {path}))\n"));
    }

    let workspace_path = sbpl_quote(workspace_root);
    profile.push_str(&format!("(allow file-read* (subpath {workspace_path}))\n"));

    for entry in mounts.iter() {
        let path = sbpl_quote(&entry.sandbox_path().display().to_string());
        profile.push_str(&format!("(allow file-read* (subpath {path}))\n"));
    }

    for allowed in &config.allowed_paths {
        let path = sbpl_quote(&allowed.display().to_string());
        profile.push_str(&format!("(allow file-read* (subpath {path}))\n"));
    }

    let writes_allowed = !matches!(config.mode, SandboxMode::ReadOnly);
    if writes_allowed {
        profile.push_str(&format!("(allow file-write* (subpath {workspace_path}))\n"));
        for entry in mounts.iter() {
            if entry.mode == MountMode::ReadWrite {
                let path = sbpl_quote(&entry.sandbox_path().display().to_string());
                profile.push_str(&format!("(allow file-write* (subpath {path}))\n"));
            }
        }
        for allowed in &config.allowed_paths {
            let path = sbpl_quote(&allowed.display().to_string());
            profile.push_str(&format!("(allow file-write* (subpath {path}))\n"));
        }
        profile.push_str("(allow file-write* (subpath \"/tmp\"))\n");
        profile.push_str("(allow file-write* (subpath \"/private/tmp\"))\n");
        profile.push_str("(allow file-write* (subpath \"/dev\"))\n");
    }

    if config.allow_network {
        profile.push_str("(allow network*)\n");
    } else {
        profile.push_str("(deny network*)\n");
    }

    profile
}

fn sbpl_quote(raw: &str) -> String {
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
#[path = "sbpl.test.rs"]
mod tests;
