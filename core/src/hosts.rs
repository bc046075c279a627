//! # Hosts File Reconciler
//!
//! Removes every line that belongs to a target domain and appends one fresh
//! `<ip> <domain>` entry per domain.
//!
//! A line belongs to a domain when its trimmed, lowercased text *ends with*
//! that domain. The test is a plain suffix match and is not anchored to a
//! label boundary. `127.0.0.1 sub.example.com` is dropped for `example.com`,
//! and so is `127.0.0.1 notexample.com`. Existing setups rely on this, so the
//! over-match is kept.
//!
//! Content is handled as raw bytes. Hosts files on localized Windows installs
//! often carry comments in the ANSI code page, and kept lines are written back
//! exactly as they were read.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use wslhost_common::{domain::DomainSet, error::SyncError, hosts::HostsStore};

/// Whether `line` is an entry for any of `domains`.
///
/// Bytes that are not UTF-8 never match a domain, so they are compared lossily.
pub fn is_domain_line(line: &[u8], domains: &DomainSet) -> bool {
    let line = String::from_utf8_lossy(line).trim().to_lowercase();
    domains.iter().any(|domain| line.ends_with(domain))
}

/// Copies every line that does not belong to `domains`, byte for byte and `\n`-terminated.
///
/// `\r\n` endings are normalized to `\n`.
pub fn clean<R: BufRead>(mut reader: R, domains: &DomainSet) -> io::Result<Vec<u8>> {
    let mut content = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let text = strip_line_ending(&line);
        if !is_domain_line(text, domains) {
            content.extend_from_slice(text);
            content.push(b'\n');
        }
    }
    Ok(content)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Appends one `<ip> <domain>` line per domain to already cleaned content.
pub fn append_entries(clean: &[u8], domains: &DomainSet, ip: &str) -> Vec<u8> {
    let mut content = Vec::with_capacity(clean.len() + domains.len() * (ip.len() + 32));
    content.extend_from_slice(clean);
    for domain in domains {
        content.extend_from_slice(ip.as_bytes());
        content.push(b' ');
        content.extend_from_slice(domain.as_bytes());
        content.push(b'\n');
    }
    content
}

/// Full reconciliation of in-memory hosts content, the same path a sync run takes.
pub fn reconcile(content: &[u8], domains: &DomainSet, ip: &str) -> Vec<u8> {
    // Reading from a slice cannot fail.
    let cleaned = clean(content, domains).unwrap_or_default();
    append_entries(&cleaned, domains, ip)
}

/// The hosts file on disk.
///
/// Reads and writes are independent steps with no lock in between. A change
/// made by another process after [`HostsStore::read_clean`] is overwritten.
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn access_error(&self, source: io::Error) -> SyncError {
        SyncError::HostsAccess {
            path: self.path.clone(),
            source,
        }
    }
}

impl HostsStore for HostsFile {
    fn read_clean(&self, domains: &DomainSet) -> Result<Vec<u8>, SyncError> {
        let file = File::open(&self.path).map_err(|e| self.access_error(e))?;

        clean(BufReader::new(file), domains).map_err(|source| SyncError::HostsRead {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, content: &[u8]) -> Result<(), SyncError> {
        // Truncates in place. No backup, no rename, and the file is never created.
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| self.access_error(e))?;

        file.write_all(content)
            .and_then(|_| file.flush())
            .map_err(|source| SyncError::HostsWrite {
                path: self.path.clone(),
                source,
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
