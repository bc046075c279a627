//! Domain Source Resolver.
//!
//! Domains come from two places: the command-line arguments and an optional
//! sidecar file that sits next to the executable.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use wslhost_common::{config::Config, domain::DomainSet, error::SyncError};

/// Directory that holds the running executable.
///
/// Falls back to the directory of `argv[0]`, then to the working directory.
pub fn exe_dir() -> PathBuf {
    let exe = env::current_exe()
        .ok()
        .or_else(|| env::args_os().next().map(PathBuf::from));

    exe.as_deref()
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Where the sidecar domain file is expected for this executable.
pub fn sidecar_path(config: &Config, exe_dir: &Path) -> PathBuf {
    exe_dir.join(&config.domain_file_name)
}

/// Reads the sidecar file. `Ok(None)` means the file does not exist.
pub fn read_domain_file(path: &Path) -> Result<Option<String>, SyncError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no domain file at {}", path.display());
            Ok(None)
        }
        Err(source) => Err(SyncError::DomainFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Merges the domains given on the command line with the domain file at `domain_file`.
pub fn resolve_domains<I, S>(args: I, domain_file: &Path) -> Result<DomainSet, SyncError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut domains: DomainSet = args.into_iter().collect();

    if let Some(content) = read_domain_file(domain_file)? {
        domains.merge_lines(&content);
    }

    Ok(domains)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
