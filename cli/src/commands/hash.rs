use colored::*;
use knockr_core::digest::passphrase_digest;

use crate::terminal::{colors, input, print};

pub fn hash() -> anyhow::Result<()> {
    let secret: String = input::input_secret(" Enter passphrase: ")?;
    let digest: String = passphrase_digest(&secret);
    print::print_status(format!("Hash: {}", digest.color(colors::ACCENT)));
    Ok(())
}
