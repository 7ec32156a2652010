pub mod add;
pub mod hash;
pub mod knock;
pub mod list;
pub mod menu;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use knockr_common::config::Config;
use knockr_common::error::StoreError;
use knockr_common::store;
use knockr_common::target::{Port, Protocol, Target};

#[derive(Parser)]
#[command(name = "knockr", version)]
#[command(about = "A secret port knocker.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Saved target file [default: ~/.secrets/spknock-targets.conf]
    #[arg(long, global = true, env = "KNOCKR_STORE")]
    pub store: Option<PathBuf>,

    /// Reject port entries whose protocol is neither 'tcp' nor 'udp'
    #[arg(long, global = true)]
    pub strict: bool,

    /// Ask for the passphrase once per knock sequence instead of per UDP port
    #[arg(long, global = true)]
    pub cache_secret: bool,

    /// Hide the banner and section headers
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default)
    #[command(alias = "m")]
    Menu,
    /// Save a new target, interactively when no arguments are given
    #[command(alias = "a")]
    Add {
        host: Option<String>,
        /// Ports to knock on, in order (e.g. 7000/udp 22/tcp 8080)
        #[arg(requires = "host", value_parser = parse_port_arg)]
        ports: Vec<Port>,
    },
    /// Show the saved targets
    #[command(alias = "l")]
    List,
    /// Knock on a saved target, by menu index or host
    #[command(alias = "k")]
    Knock { target: String },
    /// Print the SHA256 hash of a passphrase
    #[command(alias = "h")]
    Hash,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses `<number>[/<proto>]` for the command line, where typos are errors.
fn parse_port_arg(s: &str) -> Result<Port, String> {
    let (number, protocol) = match s.split_once('/') {
        Some((number, proto)) => (number, proto.to_ascii_lowercase().parse::<Protocol>()?),
        None => (s, Protocol::default()),
    };

    let number: u16 = number
        .parse()
        .map_err(|_| format!("invalid port number: {number}"))?;

    Port::new(number, protocol).map_err(|e| e.to_string())
}

/// Loads the saved targets. A store that does not exist yet holds none.
pub fn load_targets(cfg: &Config) -> anyhow::Result<Option<Vec<Target>>> {
    match store::load_targets(&cfg.store_path, cfg.parse_mode) {
        Ok(targets) => Ok(Some(targets)),
        Err(StoreError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e).context("loading saved targets"),
    }
}
