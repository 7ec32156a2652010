mod bootstrap;
mod commands;
mod terminal;

use commands::{CommandLine, Commands, add, hash, knock, list, menu};
use knockr_common::config::{Config, SecretPolicy};
use knockr_common::store::ParseMode;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        store_path: bootstrap::store_path(commands.store)?,
        parse_mode: if commands.strict {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        },
        secret_policy: if commands.cache_secret {
            SecretPolicy::Cached
        } else {
            SecretPolicy::PerPort
        },
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    print::initialize(cfg.quiet);
    print::banner(cfg.no_banner);

    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::menu(&cfg),
        Commands::Add { host, ports } => {
            print::header("add new target");
            add::add(host, ports, &cfg)
        }
        Commands::List => {
            print::header("saved targets");
            list::list(&cfg)
        }
        Commands::Knock { target } => {
            print::header("knocking");
            knock::knock(&target, &cfg)
        }
        Commands::Hash => {
            print::header("generate sha256 hash");
            hash::hash()
        }
    }
}
