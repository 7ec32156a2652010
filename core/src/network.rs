//! Knock primitives.
//!
//! Both knocks are fire-and-forget: nothing is read back from the host.

pub mod tcp;
pub mod udp;

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::KnockError;

/// Resolves `host:port`, preferring an IPv4 address when the name has both.
pub fn resolve(host: &str, port: u16) -> Result<SocketAddr, KnockError> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|source| KnockError::Resolve {
            host: host.to_string(),
            port,
            source,
        })?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| KnockError::NoAddress {
            host: host.to_string(),
            port,
        })
}
