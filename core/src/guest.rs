use std::process::{Command, Output, Stdio};

use tracing::debug;
use wslhost_common::{config::Config, error::SyncError, guest::GuestIpResolver};

/// Asks the guest for its address by running a command (`wsl hostname -I` by default).
///
/// Blocks until the command exits. There is no timeout.
pub struct WslCommand {
    program: String,
    args: Vec<String>,
}

impl WslCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.guest_program.clone(), config.guest_args.clone())
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<&str>>()
            .join(" ")
    }

    fn run(&self) -> Result<Output, SyncError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SyncError::GuestSpawn {
                command: self.command_line(),
                source,
            })
    }
}

impl GuestIpResolver for WslCommand {
    fn resolve_ip(&self) -> Result<String, SyncError> {
        let output = self.run()?;

        if !output.status.success() {
            return Err(SyncError::GuestExit {
                command: self.command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let ip = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("{} => {ip:?}", self.command_line());

        if ip.is_empty() {
            return Err(SyncError::GuestNoAddress {
                command: self.command_line(),
            });
        }
        Ok(ip)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
