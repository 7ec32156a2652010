use std::path::PathBuf;

use crate::store::ParseMode;

/// How UDP knocks obtain their passphrase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SecretPolicy {
    /// Ask again for every UDP port in the sequence.
    #[default]
    PerPort,
    /// Ask once per knock sequence and reuse the answer.
    Cached,
}

pub struct Config {
    /// Location of the persisted target file.
    pub store_path: PathBuf,
    pub parse_mode: ParseMode,
    pub secret_policy: SecretPolicy,
    /// Suppresses the banner and section headers when above zero.
    pub quiet: u8,
    pub no_banner: bool,
}
