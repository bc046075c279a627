use std::env;
use std::path::PathBuf;

pub const HOSTS_PATH: &str = "C:/Windows/System32/drivers/etc/hosts";
pub const DOMAIN_FILE_NAME: &str = "wsl_domain.conf";
pub const LOG_FILE_NAME: &str = "wsl-host-set.log";

pub const HOSTS_ENV: &str = "WSL_HOST_SET_HOSTS";
pub const DOMAIN_FILE_ENV: &str = "WSL_HOST_SET_DOMAIN_FILE";
pub const LOG_ENV: &str = "WSL_HOST_SET_LOG";

#[derive(Debug, Clone)]
pub struct Config {
    /// Hosts file that is read and then overwritten in full.
    pub hosts_path: PathBuf,
    /// Name of the sidecar domain list, looked up next to the executable.
    pub domain_file_name: String,
    /// Append-mode log file, relative to the working directory unless absolute.
    pub log_path: PathBuf,
    /// Program that prints the guest address(es) on stdout.
    pub guest_program: String,
    pub guest_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts_path: PathBuf::from(HOSTS_PATH),
            domain_file_name: DOMAIN_FILE_NAME.to_string(),
            log_path: PathBuf::from(LOG_FILE_NAME),
            guest_program: "wsl".to_string(),
            guest_args: vec!["hostname".to_string(), "-I".to_string()],
        }
    }
}

impl Config {
    /// Defaults, with explicit overrides taken from the environment.
    ///
    /// Arguments are reserved for domain names, so paths can only be moved here.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(HOSTS_ENV) {
            self.hosts_path = PathBuf::from(path);
        }
        if let Some(name) = get(DOMAIN_FILE_ENV) {
            self.domain_file_name = name;
        }
        if let Some(path) = get(LOG_ENV) {
            self.log_path = PathBuf::from(path);
        }
        self
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
