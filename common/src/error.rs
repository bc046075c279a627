//! Failure kinds for a sync run.
//!
//! Every variant is fatal to the run. A missing domain file is not an error at
//! all and never reaches this type.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("failed to read domain file {path}")]
    DomainFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch guest query `{command}`")]
    GuestSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("guest query `{command}` exited with {status}: {stderr}")]
    GuestExit {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("guest query `{command}` printed no address")]
    GuestNoAddress { command: String },

    #[error("failed to open hosts file {path}")]
    HostsAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read hosts file {path} line by line")]
    HostsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write hosts file {path}")]
    HostsWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SyncError {
    /// True when the hosts file has been (or may have been) modified.
    pub fn touched_hosts(&self) -> bool {
        matches!(self, SyncError::HostsWrite { .. })
    }
}
