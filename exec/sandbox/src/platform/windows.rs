//! Windows sandbox enforcement.
//!
//! No bwrap/unshare/seatbelt equivalent is wired up on Windows; the
//! strategy selector falls back to [`crate::strategy::SandboxStrategy::None`]
//! on this platform (§4.5).

use crate::config::SandboxConfig;
use crate::error::Result;

use super::SandboxPlatform;

pub struct WindowsSandbox;

impl SandboxPlatform for WindowsSandbox {
    fn available(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn apply(&self, _config: &SandboxConfig) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "windows.test.rs"]
mod tests;
