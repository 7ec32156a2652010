use anyhow::Context;
use knockr_common::config::{Config, SecretPolicy};
use knockr_common::target::{self, Target};
use knockr_core::knocker::Knocker;
use knockr_core::secret::CachedSecret;
use tracing::info;

use crate::commands::load_targets;
use crate::terminal::input::TerminalSecret;

/// Knocks on a saved target picked by 1-based index or by host name.
pub fn knock(selector: &str, cfg: &Config) -> anyhow::Result<()> {
    let targets: Vec<Target> = load_targets(cfg)?.unwrap_or_default();

    let chosen: Option<&Target> = match selector.parse::<usize>() {
        Ok(index) => target::select(&targets, index),
        Err(_) => target::find_by_host(&targets, selector),
    };

    let Some(chosen) = chosen else {
        anyhow::bail!(
            "no saved target matches '{selector}' in {}",
            cfg.store_path.display()
        );
    };

    run_sequence(chosen, cfg)
}

/// Runs the knock sequence with the configured passphrase policy.
pub fn run_sequence(target: &Target, cfg: &Config) -> anyhow::Result<()> {
    info!("Knocking on {} ({} ports)", target.host(), target.ports().len());

    match cfg.secret_policy {
        SecretPolicy::PerPort => Knocker::new(TerminalSecret).knock(target),
        SecretPolicy::Cached => Knocker::new(CachedSecret::new(TerminalSecret)).knock(target),
    }
    .with_context(|| format!("knock sequence against {} aborted", target.host()))?;

    info!("Port knock sequence completed.");
    Ok(())
}
