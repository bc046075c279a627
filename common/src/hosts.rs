use crate::domain::DomainSet;
use crate::error::SyncError;

/// Access to the hosts file that the sync run rewrites.
pub trait HostsStore {
    /// Reads the file and drops every line that belongs to `domains`.
    ///
    /// Content is raw bytes. Kept lines are not required to be UTF-8.
    fn read_clean(&self, domains: &DomainSet) -> Result<Vec<u8>, SyncError>;
    /// Replaces the whole file with `content`.
    fn write(&self, content: &[u8]) -> Result<(), SyncError>;
}
