//! Ties strategy selection, workspace isolation, path resolution, argv
//! construction, cgroups, and process supervision into one entry point
//! for running a command under the sandbox (§4.5).

use std::time::Duration;

use tracing::debug;
use tracing::warn;

use crate::argv::build_bwrap_argv;
use crate::argv::build_unshare_argv;
use crate::cgroup::Cgroup;
use crate::cgroup::CgroupLimits;
use crate::checker::PermissionChecker;
use crate::config::SandboxConfig;
use crate::env::build_sandboxed_env;
use crate::error::Result;
use crate::error::sandbox_error::EditMismatchSnafu;
use crate::error::sandbox_error::FileOperationFailedSnafu;
use crate::error::sandbox_error::NoStrategyAvailableSnafu;
use crate::mounts::MountList;
use crate::path::OneTimeAllows;
use crate::path::Recovery;
use crate::path::resolve_safe_path;
use crate::process::SandboxedOutput;
use crate::process::run_sandboxed;
use crate::sbpl::generate_profile;
use crate::strategy::SandboxStrategy;
use crate::strategy::select_strategy;
use crate::strategy::validate_requested;
use crate::workspace::Workspace;
use snafu::ResultExt;

/// A single string replacement within an `edit_file` call (§6 `editFile`'s
/// `edits[]`, grounded on the builtin Edit tool's `old_string`/`new_string`
/// shape but without its fuzzy-match fallbacks — the sandbox handle only
/// does exact matching).
#[derive(Debug, Clone)]
pub struct FileEdit {
    pub old_string: String,
    pub new_string: String,
    pub replace_all: bool,
}

/// A ready-to-use sandbox: a workspace, a selected strategy, and the
/// permission policy commands run under run through.
pub struct Kernel {
    config: SandboxConfig,
    checker: PermissionChecker,
    strategy: SandboxStrategy,
    workspace: Workspace,
    mounts: MountList,
    cgroup_limits: CgroupLimits,
    one_time: OneTimeAllows,
}

/// Builder for [`Kernel`], mirroring the workspace's `XBuilder` convention.
pub struct KernelBuilder {
    config: SandboxConfig,
    strategy_override: Option<SandboxStrategy>,
    mounts: MountList,
    cgroup_limits: CgroupLimits,
}

impl KernelBuilder {
    pub fn new(config: SandboxConfig) -> Self {
        Self {
            config,
            strategy_override: None,
            mounts: MountList::new(),
            cgroup_limits: CgroupLimits::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: SandboxStrategy) -> Self {
        self.strategy_override = Some(strategy);
        self
    }

    pub fn with_mounts(mut self, mounts: MountList) -> Self {
        self.mounts = mounts;
        self
    }

    pub fn with_cgroup_limits(mut self, limits: CgroupLimits) -> Self {
        self.cgroup_limits = limits;
        self
    }

    pub fn build(self, workspace_base: &std::path::Path) -> Result<Kernel> {
        let strategy = match self.strategy_override {
            Some(requested) => validate_requested(requested)?,
            None => select_strategy(),
        };

        if strategy == SandboxStrategy::None && !matches!(self.config.mode, crate::config::SandboxMode::None) {
            debug!(mode = ?self.config.mode, "no process-isolation strategy available; falling back to permission-checker-only enforcement");
        }

        let workspace = Workspace::create(workspace_base)?;
        let checker = PermissionChecker::new(self.config.clone());

        Ok(Kernel {
            config: self.config,
            checker,
            strategy,
            workspace,
            mounts: self.mounts,
            cgroup_limits: self.cgroup_limits,
            one_time: OneTimeAllows::new(),
        })
    }
}

impl Kernel {
    pub fn strategy(&self) -> SandboxStrategy {
        self.strategy
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn checker(&mut self) -> &mut PermissionChecker {
        &mut self.checker
    }

    /// Adds a mount (§6 `addMount`), consolidating against existing entries.
    pub fn add_mount(&mut self, entry: crate::mounts::MountEntry) {
        self.mounts.add_mount(entry);
    }

    /// Removes the mount at `host_path`, if any (§6 `removeMount`).
    pub fn remove_mount(&mut self, host_path: &std::path::Path) -> bool {
        self.mounts.remove(host_path)
    }

    /// Lists the current mounts (§6 `listMounts`).
    pub fn list_mounts(&self) -> impl Iterator<Item = &crate::mounts::MountEntry> {
        self.mounts.iter()
    }

    /// Reads a file's contents, resolving `path` through [`resolve_safe_path`]
    /// first (§6 `readFile`).
    pub async fn read_file(&mut self, path: &str) -> Result<String> {
        let resolved = resolve_safe_path(&mut self.checker, &mut self.one_time, path, false, |_| Recovery::Deny)?;
        tokio::fs::read_to_string(&resolved).await.context(FileOperationFailedSnafu {
            message: format!("failed to read {}", resolved.display()),
        })
    }

    /// Writes `content` to a file, resolving `path` through
    /// [`resolve_safe_path`] first, then writing via a temp file + rename so
    /// a crash mid-write never leaves a partially-written file in place
    /// (§6 `writeFile`).
    pub async fn write_file(&mut self, path: &str, content: &str) -> Result<()> {
        let resolved = resolve_safe_path(&mut self.checker, &mut self.one_time, path, true, |_| Recovery::Deny)?;
        write_atomic(&resolved, content).await
    }

    /// Applies a sequence of exact-match string replacements to a file,
    /// resolving `path` through [`resolve_safe_path`] first (§6 `editFile`).
    /// An empty `old_string` creates the file (only valid when it does not
    /// already exist, or is still empty); every other edit requires
    /// `old_string != new_string` and a unique match unless `replace_all`.
    pub async fn edit_file(&mut self, path: &str, edits: &[FileEdit]) -> Result<()> {
        let resolved = resolve_safe_path(&mut self.checker, &mut self.one_time, path, true, |_| Recovery::Deny)?;

        let mut content = match tokio::fs::read_to_string(&resolved).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return FileOperationFailedSnafu {
                    message: format!("failed to read {}: {e}", resolved.display()),
                }
                .fail();
            }
        };

        for edit in edits {
            if edit.old_string == edit.new_string {
                return EditMismatchSnafu {
                    message: "old_string and new_string must differ",
                }
                .fail();
            }

            if edit.old_string.is_empty() {
                if !content.is_empty() {
                    return EditMismatchSnafu {
                        message: format!("{} already has content; old_string must not be empty", resolved.display()),
                    }
                    .fail();
                }
                content = edit.new_string.clone();
                continue;
            }

            let count = content.matches(edit.old_string.as_str()).count();
            if count == 0 {
                return EditMismatchSnafu {
                    message: format!("old_string not found in {}", resolved.display()),
                }
                .fail();
            }
            if count > 1 && !edit.replace_all {
                return EditMismatchSnafu {
                    message: format!(
                        "old_string matches {count} locations in {}; set replace_all or add more context",
                        resolved.display()
                    ),
                }
                .fail();
            }

            content = if edit.replace_all {
                content.replace(edit.old_string.as_str(), edit.new_string.as_str())
            } else {
                content.replacen(edit.old_string.as_str(), edit.new_string.as_str(), 1)
            };
        }

        write_atomic(&resolved, &content).await
    }

    /// Runs `command` under the selected strategy, enforcing `timeout` and
    /// this kernel's resource limits. Network access and mount policy come
    /// from the kernel's `SandboxConfig`. `on_output`, if given, is called
    /// with each chunk of stdout/stderr as it streams in (§6 `exec`'s
    /// `onOutput`). A timed-out command is reported as `Ok` with exit code
    /// 124, not as an error.
    pub async fn run(
        &self,
        command: &[String],
        timeout: Duration,
        on_output: Option<crate::process::OutputCallback>,
    ) -> Result<SandboxedOutput> {
        let argv = match self.strategy {
            SandboxStrategy::Bwrap => build_bwrap_argv(self.workspace.root(), &self.mounts, self.config.allow_network, command),
            SandboxStrategy::Unshare => build_unshare_argv(self.config.allow_network, command),
            SandboxStrategy::SandboxExec => self.sandbox_exec_argv(command)?,
            SandboxStrategy::None => command.to_vec(),
        };

        let env = build_sandboxed_env(std::env::vars());
        let cgroup = match Cgroup::create("kernel-run", &self.cgroup_limits) {
            Ok(cgroup) => cgroup,
            Err(e) => {
                warn!(error = %e, "failed to create cgroup, continuing without resource limits");
                None
            }
        };

        let result = run_sandboxed(&argv, &env, self.workspace.root(), timeout, cgroup.as_ref(), on_output).await;

        if let Some(cgroup) = &cgroup {
            let _ = cgroup.destroy();
        }

        result
    }

    fn sandbox_exec_argv(&self, command: &[String]) -> Result<Vec<String>> {
        if command.is_empty() {
            return NoStrategyAvailableSnafu.fail();
        }
        let profile = generate_profile(&self.config, &self.workspace.root().display().to_string(), &self.mounts);
        let mut argv = vec!["sandbox-exec".to_string(), "-p".to_string(), profile];
        argv.extend(command.iter().cloned());
        Ok(argv)
    }
}

/// Writes `content` to `dest` via a sibling temp file + rename, so readers
/// never observe a partially-written file.
async fn write_atomic(dest: &std::path::Path, content: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await.context(FileOperationFailedSnafu {
            message: format!("failed to create directory {}", parent.display()),
        })?;
    }

    let tmp = dest.with_extension(format!("{}.sandboxtmp", std::process::id()));
    tokio::fs::write(&tmp, content).await.context(FileOperationFailedSnafu {
        message: format!("failed to write {}", tmp.display()),
    })?;
    tokio::fs::rename(&tmp, dest).await.context(FileOperationFailedSnafu {
        message: format!("failed to rename {} to {}", tmp.display(), dest.display()),
    })
}

#[cfg(test)]
#[path = "kernel.test.rs"]
mod tests;
