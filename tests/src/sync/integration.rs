use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wslhost_common::{config::Config, domain::DomainSet, error::SyncError};
use wslhost_core::{
    guest::WslCommand,
    hosts::HostsFile,
    sources,
    sync::{SyncOutcome, SyncService},
};

use super::fakes::{FixedGuest, UnreachableGuest};

const HOSTS: &str = "\
# managed by hand\r
127.0.0.1 localhost\r
192.168.1.1 old.example.com\r
172.20.0.9 api.local.dev\r
";

struct Sandbox {
    dir: TempDir,
    cfg: Config,
}

impl Sandbox {
    fn new(hosts: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let hosts_path = dir.path().join("hosts");
        fs::write(&hosts_path, hosts).expect("seed hosts");

        let cfg = Config {
            hosts_path,
            log_path: dir.path().join("wsl-host-set.log"),
            ..Config::default()
        };
        Self { dir, cfg }
    }

    fn domain_file(&self) -> PathBuf {
        sources::sidecar_path(&self.cfg, self.dir.path())
    }

    fn hosts(&self) -> String {
        fs::read_to_string(&self.cfg.hosts_path).expect("read hosts")
    }

    fn service(&self, guest: impl wslhost_common::guest::GuestIpResolver + 'static) -> SyncService {
        SyncService::new(Box::new(guest), Box::new(HostsFile::new(&self.cfg.hosts_path)))
    }
}

fn resolve(args: &[&str], domain_file: &Path) -> DomainSet {
    sources::resolve_domains(args, domain_file).expect("resolve domains")
}

#[test]
fn domains_from_file_and_args_end_up_in_hosts() -> anyhow::Result<()> {
    let sandbox = Sandbox::new(HOSTS);
    fs::write(sandbox.domain_file(), "  Example.COM  \n\napi.local.dev\n")?;

    let domains = resolve(&["EXAMPLE.com", "web.local"], &sandbox.domain_file());
    assert_eq!(domains.len(), 3);

    let outcome = sandbox.service(FixedGuest::new("10.0.0.5")).sync(&domains)?;
    assert_eq!(
        outcome,
        SyncOutcome::Updated {
            ip: "10.0.0.5".to_string(),
            entries: 3
        }
    );

    assert_eq!(
        sandbox.hosts(),
        "# managed by hand\n\
         127.0.0.1 localhost\n\
         10.0.0.5 api.local.dev\n\
         10.0.0.5 example.com\n\
         10.0.0.5 web.local\n"
    );
    Ok(())
}

#[test]
fn second_run_with_new_ip_leaves_one_entry_per_domain() -> anyhow::Result<()> {
    let sandbox = Sandbox::new(HOSTS);
    let domains = resolve(&["api.local.dev", "example.com"], &sandbox.domain_file());

    sandbox.service(FixedGuest::new("172.20.1.5")).sync(&domains)?;
    sandbox.service(FixedGuest::new("172.20.7.7")).sync(&domains)?;
    let after_second = sandbox.hosts();
    sandbox.service(FixedGuest::new("172.20.7.7")).sync(&domains)?;

    assert_eq!(sandbox.hosts(), after_second);
    for domain in domains.iter() {
        let entries: Vec<&str> = after_second
            .lines()
            .filter(|l| l.to_lowercase().ends_with(domain))
            .collect();
        assert_eq!(entries, vec![format!("172.20.7.7 {domain}")]);
    }
    assert!(!after_second.contains("172.20.1.5"));
    Ok(())
}

#[test]
fn ansi_comment_in_hosts_is_copied_through() -> anyhow::Result<()> {
    let sandbox = Sandbox::new("");
    // "本地" in GBK, as saved by a localized Notepad.
    fs::write(
        &sandbox.cfg.hosts_path,
        b"# \xb1\xbe\xb5\xd8\r\n127.0.0.1 localhost\r\n192.168.1.1 old.example.com\r\n",
    )?;
    let domains = resolve(&["example.com"], &sandbox.domain_file());

    sandbox.service(FixedGuest::new("10.0.0.5")).sync(&domains)?;

    assert_eq!(
        fs::read(&sandbox.cfg.hosts_path)?,
        b"# \xb1\xbe\xb5\xd8\n127.0.0.1 localhost\n10.0.0.5 example.com\n"
    );
    Ok(())
}

#[test]
fn no_domains_means_no_query_and_no_write() -> anyhow::Result<()> {
    let sandbox = Sandbox::new(HOSTS);
    let domains = resolve(&[], &sandbox.domain_file());
    assert!(domains.is_empty());

    let guest = FixedGuest::new("10.0.0.5");
    let outcome = sandbox.service(guest.clone()).sync(&domains)?;

    assert_eq!(outcome, SyncOutcome::NothingToDo);
    assert_eq!(guest.calls.get(), 0);
    assert_eq!(sandbox.hosts(), HOSTS);
    Ok(())
}

#[test]
fn failed_guest_query_leaves_hosts_untouched() {
    let sandbox = Sandbox::new(HOSTS);
    let domains = resolve(&["example.com"], &sandbox.domain_file());

    let err = sandbox.service(UnreachableGuest).sync(&domains).unwrap_err();

    assert!(matches!(err, SyncError::GuestSpawn { .. }));
    assert!(!err.touched_hosts());
    assert_eq!(sandbox.hosts(), HOSTS);
}

#[cfg(unix)]
#[test]
fn non_zero_guest_exit_leaves_hosts_untouched() {
    let sandbox = Sandbox::new(HOSTS);
    let domains = resolve(&["example.com"], &sandbox.domain_file());
    let guest = WslCommand::new("sh", vec!["-c".to_string(), "exit 1".to_string()]);

    let err = sandbox.service(guest).sync(&domains).unwrap_err();

    assert!(matches!(err, SyncError::GuestExit { .. }));
    assert_eq!(sandbox.hosts(), HOSTS);
}

#[test]
fn missing_hosts_file_is_reported_after_the_query() {
    let sandbox = Sandbox::new(HOSTS);
    fs::remove_file(&sandbox.cfg.hosts_path).expect("remove hosts");
    let domains = resolve(&["example.com"], &sandbox.domain_file());

    let guest = FixedGuest::new("10.0.0.5");
    let err = sandbox.service(guest.clone()).sync(&domains).unwrap_err();

    assert!(matches!(err, SyncError::HostsAccess { .. }));
    assert_eq!(guest.calls.get(), 1);
    assert!(!sandbox.cfg.hosts_path.exists());
}

#[test]
fn unreadable_domain_file_is_fatal() {
    let sandbox = Sandbox::new(HOSTS);
    fs::create_dir(sandbox.domain_file()).expect("dir in place of file");

    let err = sources::resolve_domains(["example.com"], &sandbox.domain_file()).unwrap_err();
    assert!(matches!(err, SyncError::DomainFile { .. }));
}

#[test]
fn from_config_targets_configured_hosts_file() -> anyhow::Result<()> {
    let sandbox = Sandbox::new(HOSTS);
    let cfg = Config {
        guest_program: "wsl-host-set-no-such-program".to_string(),
        guest_args: Vec::new(),
        ..sandbox.cfg.clone()
    };
    let domains = resolve(&["example.com"], &sandbox.domain_file());

    let err = SyncService::from_config(&cfg).sync(&domains).unwrap_err();

    assert!(matches!(err, SyncError::GuestSpawn { .. }));
    assert_eq!(sandbox.hosts(), HOSTS);
    Ok(())
}
