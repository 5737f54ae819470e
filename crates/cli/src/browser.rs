// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opening URLs in the host's default browser.
//!
//! Each supported platform maps to a fixed opener utility:
//! - Linux: `xdg-open <url>`
//! - Windows: `rundll32 url.dll,FileProtocolHandler <url>`
//! - macOS: `open <url>`
//!
//! The opener is spawned fire-and-forget: its exit status and output are
//! never observed, so a browser that fails after launch goes unnoticed.

use std::fmt;
use std::process::{Command, Stdio};

use crate::env;
use crate::error::{Error, Result};

/// Host operating system, as far as browser launching is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
    /// Any OS without a known opener; carries the raw identifier.
    Other(String),
}

impl Platform {
    /// Maps an OS identifier (as in `std::env::consts::OS`) to a platform.
    ///
    /// `darwin` is accepted as an alias for `macos`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            "macos" | "darwin" => Platform::MacOs,
            other => Platform::Other(other.to_string()),
        }
    }

    /// The platform of the running host, honoring `PORTICO_PLATFORM`.
    pub fn current() -> Self {
        match env::platform_override() {
            Some(os) => Platform::from_os(&os),
            None => Platform::from_os(std::env::consts::OS),
        }
    }

    /// Opener program and the arguments preceding the URL.
    pub fn opener(&self) -> Option<(&'static str, &'static [&'static str])> {
        match self {
            Platform::Linux => Some(("xdg-open", &[])),
            Platform::Windows => Some(("rundll32", &["url.dll,FileProtocolHandler"])),
            Platform::MacOs => Some(("open", &[])),
            Platform::Other(_) => None,
        }
    }

    /// Builds the opener command with `url` as its final argument.
    ///
    /// The URL is passed through unvalidated.
    pub fn command(&self, url: &str) -> Result<Command> {
        let (program, args) = self
            .opener()
            .ok_or_else(|| Error::UnsupportedPlatform(self.to_string()))?;
        let mut cmd = Command::new(program);
        cmd.args(args).arg(url);
        Ok(cmd)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "linux"),
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Other(os) => write!(f, "{}", os),
        }
    }
}

/// Something that can show a URL to the user.
pub trait BrowserLauncher {
    /// Starts opening `url`. Returns once the request is handed off.
    fn open(&self, url: &str) -> Result<()>;
}

impl<T: BrowserLauncher + ?Sized> BrowserLauncher for &T {
    fn open(&self, url: &str) -> Result<()> {
        (**self).open(url)
    }
}

/// Launches the platform's opener utility as a detached child process.
#[derive(Debug, Clone)]
pub struct SystemBrowser {
    platform: Platform,
}

impl SystemBrowser {
    pub fn new(platform: Platform) -> Self {
        SystemBrowser { platform }
    }

    #[cfg(test)]
    pub(crate) fn platform(&self) -> &Platform {
        &self.platform
    }
}

impl Default for SystemBrowser {
    fn default() -> Self {
        SystemBrowser::new(Platform::current())
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let cmd = self.platform.command(url)?;
        spawn_detached(cmd)
    }
}

/// Spawns `cmd` with null stdio and returns without waiting.
///
/// The child handle is dropped immediately; the OS reaps the process.
pub(crate) fn spawn_detached(mut cmd: Command) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| Error::LaunchFailed {
            program: program.clone(),
            source,
        })?;
    tracing::debug!("spawned {} (pid {})", program, child.id());
    drop(child);
    Ok(())
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
