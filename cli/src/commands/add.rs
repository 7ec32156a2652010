use anyhow::{Context, ensure};
use colored::*;
use knockr_common::config::Config;
use knockr_common::store;
use knockr_common::target::{Port, Protocol, Target};
use tracing::info;

use crate::terminal::{colors, input, print};

pub fn add(host: Option<String>, ports: Vec<Port>, cfg: &Config) -> anyhow::Result<()> {
    let target: Target = match host {
        Some(host) => {
            ensure!(!ports.is_empty(), "at least one port is needed to knock on {host}");
            Target::new(host, ports)?
        }
        None => prompt_target()?,
    };

    save(&target, cfg)
}

/// Walks the user through host, knock count and each port.
pub fn prompt_target() -> anyhow::Result<Target> {
    let host: String = input::input_host(" Hostname or IP     : ")?;
    let count: u8 = input::input_count(" Knock count (1-9)  : ")?;

    let mut ports: Vec<Port> = Vec::with_capacity(count as usize);
    for index in 1..=count {
        let number: u16 = input::input_port(&format!(" Port number {index}      : "))?;
        let protocol: Protocol = input::input_protocol(" Protocol (tcp/udp) : ")?;
        ports.push(Port::new(number, protocol)?);
    }

    Ok(Target::new(host, ports)?)
}

/// Appends the target to the store and reports where it went.
pub fn save(target: &Target, cfg: &Config) -> anyhow::Result<()> {
    store::save_target(&cfg.store_path, target)
        .with_context(|| format!("saving {} to the target store", target.host()))?;

    let path: String = cfg.store_path.display().to_string();
    info!(
        "Target {} added and saved to file: {}",
        target.host().color(colors::PRIMARY),
        path.color(colors::ACCENT)
    );
    print::print_status(target.to_string());
    Ok(())
}
