//! cgroups v2 resource limits (Linux-only, best-effort). §4.5 names
//! `memory.max`, `cpu.max`, and `pids.max`; enforcement is advisory on
//! any host without a writable cgroup v2 hierarchy (containers, CI,
//! unprivileged sandboxes) rather than a hard failure.

use std::path::Path;
use std::path::PathBuf;

use crate::error::Result;
use crate::error::sandbox_error::CgroupErrorSnafu;

const CGROUP_ROOT: &str = "/sys/fs/cgroup";

#[derive(Debug, Clone, Default)]
pub struct CgroupLimits {
    /// Memory ceiling in bytes.
    pub memory_max: Option<u64>,
    /// CPU quota as `(quota_us, period_us)`, mirroring `cpu.max`'s own format.
    pub cpu_max: Option<(u64, u64)>,
    /// Maximum number of processes/threads.
    pub pids_max: Option<u64>,
}

/// A cgroup v2 leaf created for one sandboxed process tree. `destroy` is
/// idempotent and safe to call after the cgroup has already emptied out.
#[derive(Debug)]
pub struct Cgroup {
    path: PathBuf,
}

impl Cgroup {
    /// Creates `{CGROUP_ROOT}/agentick-sandbox/{name}` and applies `limits`.
    /// Returns `Ok(None)` rather than an error when cgroups v2 isn't
    /// available (e.g. no permission, not mounted) — callers fall back to
    /// running without resource limits.
    pub fn create(name: &str, limits: &CgroupLimits) -> Result<Option<Self>> {
        let root = Path::new(CGROUP_ROOT);
        if !root.join("cgroup.controllers").exists() {
            return Ok(None);
        }

        let path = root.join("agentick-sandbox").join(name);
        if std::fs::create_dir_all(&path).is_err() {
            return Ok(None);
        }

        let cgroup = Self { path };
        cgroup.apply(limits)?;
        Ok(Some(cgroup))
    }

    fn apply(&self, limits: &CgroupLimits) -> Result<()> {
        if let Some(max) = limits.memory_max {
            self.write("memory.max", &max.to_string())?;
        }
        if let Some((quota, period)) = limits.cpu_max {
            self.write("cpu.max", &format!("{quota} {period}"))?;
        }
        if let Some(max) = limits.pids_max {
            self.write("pids.max", &max.to_string())?;
        }
        Ok(())
    }

    fn write(&self, file: &str, value: &str) -> Result<()> {
        std::fs::write(self.path.join(file), value).context_cgroup(file)
    }

    /// Adds a process to this cgroup by writing its pid to `cgroup.procs`.
    pub fn add_process(&self, pid: u32) -> Result<()> {
        self.write("cgroup.procs", &pid.to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the cgroup directory. Fails silently (returns `Ok`) if it's
    /// already gone or if the kernel still reports it non-empty — best
    /// effort, not a hard guarantee.
    pub fn destroy(&self) -> Result<()> {
        match std::fs::remove_dir(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(_) => Ok(()),
        }
    }
}

trait CgroupWriteExt<T> {
    fn context_cgroup(self, file: &str) -> Result<T>;
}

impl<T> CgroupWriteExt<T> for std::result::Result<T, std::io::Error> {
    fn context_cgroup(self, file: &str) -> Result<T> {
        self.map_err(|e| {
            CgroupErrorSnafu {
                message: format!("failed to write {file}: {e}"),
            }
            .build()
        })
    }
}

#[cfg(test)]
#[path = "cgroup.test.rs"]
mod tests;
