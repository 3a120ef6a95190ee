// SPDX-License-Identifier: MPL-2.0
//! Desktop link opener backed by the platform's URL handler.

use crate::application::port::{validate_url, LinkOpener};
use crate::error::{Error, Result};
use std::process::Command;

/// Opens links with `xdg-open`, `open`, or the Windows URL protocol handler
/// depending on the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(url: &str) -> Command {
        platform_command(std::env::consts::OS, url)
    }
}

/// Builds the opener invocation for `os`.
///
/// The URL is always a single argv entry and never passes through a shell,
/// so `&`, `|` or `%` in query strings reach the handler untouched.
fn platform_command(os: &str, url: &str) -> Command {
    let mut command = match os {
        "windows" => {
            let mut command = Command::new("rundll32");
            command.arg("url.dll,FileProtocolHandler");
            command
        }
        "macos" => Command::new("open"),
        _ => Command::new("xdg-open"),
    };
    command.arg(url);
    command
}

impl LinkOpener for SystemLauncher {
    fn open(&self, url: &str) -> Result<()> {
        validate_url(url)?;

        let mut command = Self::command(url);
        log::debug!("Opening {} with {:?}", url, command.get_program());

        let status = command.status().map_err(|e| {
            Error::Launch(format!("Failed to run {:?}: {}", command.get_program(), e))
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::Launch(format!(
                "{:?} exited with {}",
                command.get_program(),
                status
            )))
        }
    }
}
