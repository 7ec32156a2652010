use colored::*;
use knockr_common::config::Config;
use knockr_common::target::{Protocol, Target};
use tracing::warn;

use crate::commands::load_targets;
use crate::kprint;
use crate::terminal::{colors, print};

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    let targets: Vec<Target> = load_targets(cfg)?.unwrap_or_default();

    if targets.is_empty() {
        warn!("No saved targets in {}", cfg.store_path.display());
        return Ok(());
    }

    for (idx, target) in targets.iter().enumerate() {
        print::tree_head(idx + 1, target.host());
        print::as_tree_one_level(port_details(target));
        if idx + 1 != targets.len() {
            kprint!();
        }
    }
    Ok(())
}

fn port_details(target: &Target) -> Vec<(String, ColoredString)> {
    if target.ports().is_empty() {
        return vec![("Ports".to_string(), "none".dimmed())];
    }

    target
        .ports()
        .iter()
        .enumerate()
        .map(|(idx, port)| {
            let color = match port.protocol() {
                Protocol::Udp => colors::UDP,
                Protocol::Tcp => colors::TCP,
            };
            (format!("Knock {}", idx + 1), port.to_string().color(color))
        })
        .collect()
}
