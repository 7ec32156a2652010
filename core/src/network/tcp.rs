use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use tracing::debug;

/// Upper bound for a single TCP knock.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(250);

/// Sends a SYN to `addr` by attempting a connection, then closes the socket.
///
/// Whatever the attempt ends with (accepted, refused, timed out, rejected
/// locally) the knock counts as done. Only the outcome is logged.
pub fn knock(addr: SocketAddr, connect_timeout: Duration) {
    match TcpStream::connect_timeout(&addr, connect_timeout) {
        Ok(stream) => {
            debug!("TCP knock on {addr} was accepted, closing");
            drop(stream);
        }
        Err(e) => debug!("TCP knock on {addr} ended with: {e}"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::udp;
    use std::net::{IpAddr, Ipv4Addr, TcpListener, UdpSocket};
    use std::time::Instant;

    #[test]
    fn knock_reaches_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        knock(addr, CONNECT_TIMEOUT);

        let (_stream, peer) = listener.accept().unwrap();
        assert!(peer.ip().is_loopback());
    }

    #[test]
    fn closed_port_is_not_an_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let started = Instant::now();
        knock(addr, CONNECT_TIMEOUT);
        assert!(started.elapsed() < CONNECT_TIMEOUT + Duration::from_millis(250));
    }

    #[test]
    #[ignore]
    fn blackholed_host_times_out_quietly() {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 1)), 443);

        let started = Instant::now();
        knock(addr, CONNECT_TIMEOUT);
        assert!(started.elapsed() < CONNECT_TIMEOUT + Duration::from_millis(250));
    }

    #[test]
    fn locally_rejected_connect_does_not_stop_later_knocks() {
        // Link-local without a scope id is refused by the OS before any SYN.
        let unroutable: SocketAddr = "[fe80::1]:80".parse().unwrap();
        knock(unroutable, CONNECT_TIMEOUT);

        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        udp::knock(receiver.local_addr().unwrap(), b"after").unwrap();

        let mut buf = [0u8; 16];
        let (len, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"after");
    }
}
