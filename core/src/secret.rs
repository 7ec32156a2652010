//! Passphrase sources for UDP knocks.
//!
//! The [`Knocker`](crate::knocker::Knocker) asks its provider once for every
//! UDP port it knocks on. Whether that means prompting the user again is up to
//! the provider: [`CachedSecret`] is the only strategy here that reuses an
//! answer, and it has to be chosen explicitly.

use std::io;

use knockr_common::target::Port;

/// Supplies the shared secret for a single UDP knock.
pub trait SecretProvider {
    fn secret(&mut self, host: &str, port: &Port) -> io::Result<String>;
}

impl<F> SecretProvider for F
where
    F: FnMut(&str, &Port) -> io::Result<String>,
{
    fn secret(&mut self, host: &str, port: &Port) -> io::Result<String> {
        self(host, port)
    }
}

/// Always answers with the same preconfigured secret.
#[derive(Clone)]
pub struct FixedSecret {
    secret: String,
}

impl FixedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl SecretProvider for FixedSecret {
    fn secret(&mut self, _host: &str, _port: &Port) -> io::Result<String> {
        Ok(self.secret.clone())
    }
}

/// Asks the inner provider once and reuses the answer for later ports.
pub struct CachedSecret<P> {
    inner: P,
    cached: Option<String>,
}

impl<P: SecretProvider> CachedSecret<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cached: None,
        }
    }

    /// Forgets the cached answer so the next knock asks again.
    pub fn clear(&mut self) {
        self.cached = None;
    }
}

impl<P: SecretProvider> SecretProvider for CachedSecret<P> {
    fn secret(&mut self, host: &str, port: &Port) -> io::Result<String> {
        if let Some(secret) = &self.cached {
            return Ok(secret.clone());
        }
        let secret: String = self.inner.secret(host, port)?;
        self.cached = Some(secret.clone());
        Ok(secret)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
