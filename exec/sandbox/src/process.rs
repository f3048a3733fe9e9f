//! Process supervision for sandboxed commands (§4.5): spawns the wrapper
//! argv built by [`crate::argv`], enforces a timeout with a
//! SIGTERM → 5s grace → SIGKILL escalation, and caps captured output at
//! 10 MiB while still draining the child's pipes so it never blocks on a
//! full buffer.
//!
//! Timeout handling follows the same `tokio::time::timeout` shape as
//! `agentick_shell::executor::ShellExecutor::execute`; this module adds
//! the signal escalation and output-streaming pieces that plain command
//! execution doesn't need.

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use tokio::io::AsyncReadExt;
use tokio::process::Child;
use tokio::process::Command;

use crate::error::Result;
use crate::error::sandbox_error::SpawnFailedSnafu;

/// Output is capped at 10 MiB; anything beyond that is dropped but still
/// read off the pipe so the child doesn't stall on a full buffer.
pub const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Appended to a stream's captured output once it has been truncated at
/// [`MAX_OUTPUT_BYTES`] (§4.5, §8 "truncation suffix").
const TRUNCATION_SUFFIX: &str = "\n[sandbox: output truncated at 10MB]";

const KILL_GRACE: Duration = Duration::from_secs(5);

/// Which pipe a chunk passed to `on_output` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Streaming output callback for [`run_sandboxed`] (§6 `exec`'s `onOutput`).
pub type OutputCallback = Arc<dyn Fn(OutputStream, &[u8]) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct SandboxedOutput {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub stdout_truncated: bool,
    pub stderr_truncated: bool,
    pub duration_ms: u64,
}

/// Runs `argv[0]` with `argv[1..]` under `envs`, in `cwd`, capped at
/// `timeout`. On timeout the child is sent SIGTERM, given `KILL_GRACE` to
/// exit, then SIGKILL'd; a timeout is reported as a normal result (exit
/// code 124, a message appended to `stderr`), not an error, since the
/// caller asked for a time-bounded command and got exactly that. If
/// `cgroup` is given, the child is joined to it immediately after spawn,
/// before it has a chance to fork descendants outside the limit. `on_output`,
/// if given, is invoked with each chunk as it's read off either pipe.
pub async fn run_sandboxed(
    argv: &[String],
    envs: &std::collections::HashMap<String, String>,
    cwd: &std::path::Path,
    timeout: Duration,
    cgroup: Option<&crate::cgroup::Cgroup>,
    on_output: Option<OutputCallback>,
) -> Result<SandboxedOutput> {
    let (program, rest) = argv.split_first().ok_or_else(|| {
        SpawnFailedSnafu {
            message: "empty argv",
        }
        .build()
    })?;

    let start = Instant::now();

    let mut command = Command::new(program);
    command
        .args(rest)
        .current_dir(cwd)
        .env_clear()
        .envs(envs)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command.spawn().map_err(|e| {
        SpawnFailedSnafu {
            message: format!("{}: {e}", program.to_string_lossy().into_owned()),
        }
        .build()
    })?;

    if let (Some(cgroup), Some(pid)) = (cgroup, child.id()) {
        let _ = cgroup.add_process(pid);
    }

    let mut stdout_pipe = child.stdout.take().expect("stdout piped");
    let mut stderr_pipe = child.stderr.take().expect("stderr piped");

    let stdout_cb = on_output.clone();
    let stderr_cb = on_output;
    let stdout_task = tokio::spawn(async move { drain_capped(&mut stdout_pipe, OutputStream::Stdout, stdout_cb).await });
    let stderr_task = tokio::spawn(async move { drain_capped(&mut stderr_pipe, OutputStream::Stderr, stderr_cb).await });

    let wait_result = tokio::time::timeout(timeout, child.wait()).await;

    let exit_code = match wait_result {
        Ok(status) => status
            .map_err(|e| {
                SpawnFailedSnafu {
                    message: format!("failed to wait for child: {e}"),
                }
                .build()
            })?
            .code()
            .unwrap_or(-1),
        Err(_) => {
            escalate_kill(&mut child).await;
            let (stdout, stdout_truncated) = stdout_task.await.unwrap_or_default();
            let (mut stderr, stderr_truncated) = stderr_task.await.unwrap_or_default();
            stderr.extend_from_slice(format!("\n[sandbox: command timed out after {}s]", timeout.as_secs()).as_bytes());
            return Ok(SandboxedOutput {
                exit_code: 124,
                stdout,
                stderr,
                stdout_truncated,
                stderr_truncated,
                duration_ms: start.elapsed().as_millis() as u64,
            });
        }
    };

    let (stdout, stdout_truncated) = stdout_task.await.unwrap_or_default();
    let (stderr, stderr_truncated) = stderr_task.await.unwrap_or_default();

    Ok(SandboxedOutput {
        exit_code,
        stdout,
        stderr,
        stdout_truncated,
        stderr_truncated,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Reads `pipe` to completion, keeping at most [`MAX_OUTPUT_BYTES`] and
/// discarding the rest so the child never blocks on a full pipe buffer.
/// Every chunk read is handed to `on_output`, capped or not. A truncated
/// stream gets [`TRUNCATION_SUFFIX`] appended so a reader of the captured
/// bytes alone can tell it's incomplete.
async fn drain_capped(pipe: &mut (impl tokio::io::AsyncRead + Unpin), stream: OutputStream, on_output: Option<OutputCallback>) -> (Vec<u8>, bool) {
    let mut kept = Vec::new();
    let mut truncated = false;
    let mut buf = [0u8; 8192];

    loop {
        match pipe.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                if let Some(cb) = &on_output {
                    cb(stream, &buf[..n]);
                }
                if kept.len() < MAX_OUTPUT_BYTES {
                    let room = MAX_OUTPUT_BYTES - kept.len();
                    let take = room.min(n);
                    kept.extend_from_slice(&buf[..take]);
                    if take < n {
                        truncated = true;
                    }
                } else {
                    truncated = true;
                }
            }
            Err(_) => break,
        }
    }

    if truncated {
        kept.extend_from_slice(TRUNCATION_SUFFIX.as_bytes());
    }

    (kept, truncated)
}

#[cfg(unix)]
async fn escalate_kill(child: &mut Child) {
    if let Some(pid) = child.id() {
        unsafe {
            libc::kill(pid as i32, libc::SIGTERM);
        }
        if tokio::time::timeout(KILL_GRACE, child.wait()).await.is_err() {
            unsafe {
                libc::kill(pid as i32, libc::SIGKILL);
            }
            let _ = child.wait().await;
        }
    } else {
        let _ = child.start_kill();
    }
}

#[cfg(not(unix))]
async fn escalate_kill(child: &mut Child) {
    let _ = child.start_kill();
    let _ = child.wait().await;
}

#[cfg(test)]
#[path = "process.test.rs"]
mod tests;
