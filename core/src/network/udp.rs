use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

use tracing::debug;

use crate::error::KnockError;

/// Sends `payload` to `addr` as a single datagram. No reply is awaited.
pub fn knock(addr: SocketAddr, payload: &[u8]) -> Result<(), KnockError> {
    let local: IpAddr = match addr {
        SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
    };

    let socket: UdpSocket = UdpSocket::bind(SocketAddr::new(local, 0))
        .map_err(|source| KnockError::Socket { addr, source })?;

    let sent: usize = socket
        .send_to(payload, addr)
        .map_err(|source| KnockError::Send { addr, source })?;

    debug!("UDP knock on {addr} sent {sent} bytes");
    Ok(())
}
