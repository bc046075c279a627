use tracing::info;
use wslhost_common::{
    config::Config, domain::DomainSet, error::SyncError, guest::GuestIpResolver,
    hosts::HostsStore,
};

use crate::{guest::WslCommand, hosts};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The domain set was empty. Nothing was queried, read or written.
    NothingToDo,
    /// The hosts file was rewritten with `entries` fresh lines.
    Updated { ip: String, entries: usize },
}

pub struct SyncService {
    guest: Box<dyn GuestIpResolver>,
    store: Box<dyn HostsStore>,
}

impl SyncService {
    pub fn new(guest: Box<dyn GuestIpResolver>, store: Box<dyn HostsStore>) -> Self {
        Self { guest, store }
    }

    /// Wires the real `wsl` command and the configured hosts file.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(WslCommand::from_config(config)),
            Box::new(hosts::HostsFile::new(config.hosts_path.clone())),
        )
    }

    /// Points every domain at the current guest address.
    ///
    /// The address is resolved before the hosts file is opened, so a failed
    /// query leaves the file untouched.
    pub fn sync(&self, domains: &DomainSet) -> Result<SyncOutcome, SyncError> {
        if domains.is_empty() {
            return Ok(SyncOutcome::NothingToDo);
        }
        info!("adding {} ({})", domains, domains.len());

        let ip = self.guest.resolve_ip()?;
        info!("wsl ip => {ip}");

        let original = self.store.read_clean(domains)?;
        info!(
            "\n--------- original ---------\n{}\n----------------------------",
            String::from_utf8_lossy(&original)
        );

        let updated = hosts::append_entries(&original, domains, &ip);
        info!(
            "\n----------- new ------------\n{}\n----------------------------",
            String::from_utf8_lossy(&updated)
        );

        self.store.write(&updated)?;

        Ok(SyncOutcome::Updated {
            ip,
            entries: domains.len(),
        })
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
