//! The knock sequence runner.
//!
//! A [`Knocker`] walks a target's ports strictly in stored order, one at a
//! time, on the calling thread:
//! * **udp**: asks the [`SecretProvider`] for a passphrase, hashes it with
//!   [`passphrase_digest`] and sends the hex digest as one datagram.
//! * **tcp**: attempts a connection bounded by the TCP timeout and closes it.
//!
//! The first error aborts the rest of the sequence. Ports already knocked are
//! not undone.

use std::net::SocketAddr;
use std::time::Duration;

use knockr_common::target::{Port, Protocol, Target};
use tracing::info;

use crate::digest::passphrase_digest;
use crate::error::KnockError;
use crate::network::{self, tcp, udp};
use crate::secret::SecretProvider;

pub struct Knocker<S> {
    secrets: S,
    tcp_timeout: Duration,
}

impl<S: SecretProvider> Knocker<S> {
    pub fn new(secrets: S) -> Self {
        Self {
            secrets,
            tcp_timeout: tcp::CONNECT_TIMEOUT,
        }
    }

    pub fn with_tcp_timeout(mut self, tcp_timeout: Duration) -> Self {
        self.tcp_timeout = tcp_timeout;
        self
    }

    pub fn secrets(&self) -> &S {
        &self.secrets
    }

    pub fn into_secrets(self) -> S {
        self.secrets
    }

    /// Performs the full knock sequence for `target`.
    pub fn knock(&mut self, target: &Target) -> Result<(), KnockError> {
        for port in target.ports() {
            self.knock_port(target.host(), port)?;
        }
        Ok(())
    }

    fn knock_port(&mut self, host: &str, port: &Port) -> Result<(), KnockError> {
        match port.protocol() {
            Protocol::Udp => {
                let secret: String = self
                    .secrets
                    .secret(host, port)
                    .map_err(|source| KnockError::Secret { source })?;
                let digest: String = passphrase_digest(&secret);

                let addr: SocketAddr = network::resolve(host, port.number())?;
                udp::knock(addr, digest.as_bytes())?;
            }
            Protocol::Tcp => {
                let addr: SocketAddr = network::resolve(host, port.number())?;
                tcp::knock(addr, self.tcp_timeout);
            }
        }

        info!("Knocked on {host} {port}");
        Ok(())
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
