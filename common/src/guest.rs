use crate::error::SyncError;

/// Source of the WSL guest address.
pub trait GuestIpResolver {
    /// Returns the trimmed address text. It may hold several space-separated addresses.
    fn resolve_ip(&self) -> Result<String, SyncError>;
}
