mod commands;
mod terminal;

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info, warn};
use wslhost_common::{config::Config, error::SyncError};
use wslhost_core::{
    sources,
    sync::{SyncOutcome, SyncService},
};

use commands::CommandLine;
use terminal::{logging, print};

fn main() -> ExitCode {
    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let cfg = Config::from_env();

    if commands::wants_help(&args) {
        print!("{}", commands::usage(&cfg.domain_file_name));
        return ExitCode::SUCCESS;
    }

    let commands = CommandLine::parse_args(args);
    logging::init_logging(&cfg.log_path);

    match run(commands, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            if e.downcast_ref::<SyncError>().is_some_and(SyncError::touched_hosts) {
                warn!("{} may now be incomplete", cfg.hosts_path.display());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(commands: CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let domain_file = sources::sidecar_path(cfg, &sources::exe_dir());
    let domains = sources::resolve_domains(&commands.domains, &domain_file)?;
    if domains.is_empty() {
        return Ok(());
    }

    print::header("syncing wsl hosts");
    let outcome = SyncService::from_config(cfg)
        .sync(&domains)
        .with_context(|| format!("syncing {}", cfg.hosts_path.display()))?;

    if let SyncOutcome::Updated { ip, entries } = outcome {
        info!("{entries} entries now point at {ip}");
    }
    print::end_of_program();
    Ok(())
}
