use clap::{CommandFactory, Parser};

/// Arguments that print usage instead of being taken as domains.
const HELP_ARGS: &[&str] = &["help", "--help", "-help", "--h", "-h"];

#[derive(Parser, Debug)]
#[command(name = "wsl-host-set")]
#[command(about = "Points hosts-file entries at the current WSL guest address.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CommandLine {
    /// Domains to map to the WSL guest, added to those in the domain file
    #[arg(value_name = "DOMAIN", allow_hyphen_values = true, trailing_var_arg = true)]
    pub domains: Vec<String>,
}

impl CommandLine {
    /// Every argument after the program path is a domain, a bare `--` included.
    ///
    /// The clap definition only renders usage. Its parser treats `--` as an escape.
    pub fn parse_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            domains: args.into_iter().skip(1).collect(),
        }
    }
}

pub fn is_help_arg(arg: &str) -> bool {
    HELP_ARGS.iter().any(|help| help.eq_ignore_ascii_case(arg))
}

/// True if any argument after the program path asks for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| is_help_arg(arg))
}

pub fn usage(domain_file_name: &str) -> String {
    let notes = format!(
        "Domains can be given in two ways:\n\n  \
         1. One per line in {domain_file_name}, next to the executable.\n     \
         The file is read on every run. Blank lines are ignored.\n\n  \
         2. As arguments, for example:\n     \
         wsl-host-set.exe local-website.com api.local.dev\n\n\
         Both sources are merged. Any existing hosts line ending with one of the\n\
         domains is replaced by `<wsl ip> <domain>`."
    );

    CommandLine::command()
        .after_long_help(notes)
        .render_long_help()
        .to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
