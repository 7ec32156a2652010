//! Helpers shared by the integration tests.

use std::io;
use std::net::{TcpListener, UdpSocket};
use std::path::PathBuf;
use std::time::Duration;

use knockr_common::target::Port;
use knockr_core::secret::SecretProvider;

/// A store path under the temp dir that no other test uses.
pub fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("knockr_it_{}.conf", rand::random::<u64>()))
}

/// Removes the store file when dropped.
pub struct StoreFile(pub PathBuf);

impl StoreFile {
    pub fn new() -> Self {
        Self(temp_store_path())
    }
}

impl Drop for StoreFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Answers with a fixed passphrase and remembers which ports asked.
pub struct RecordingSecret {
    pub passphrase: String,
    pub asked: Vec<Port>,
}

impl RecordingSecret {
    pub fn new(passphrase: &str) -> Self {
        Self {
            passphrase: passphrase.to_string(),
            asked: Vec::new(),
        }
    }
}

impl SecretProvider for RecordingSecret {
    fn secret(&mut self, _host: &str, port: &Port) -> io::Result<String> {
        self.asked.push(*port);
        Ok(self.passphrase.clone())
    }
}

/// A bound loopback UDP socket and its port.
pub fn udp_listener() -> (UdpSocket, u16) {
    let socket = UdpSocket::bind("127.0.0.1:0").expect("bind udp");
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .expect("set read timeout");
    let port = socket.local_addr().expect("local addr").port();
    (socket, port)
}

/// A loopback TCP port with nothing listening on it.
pub fn closed_tcp_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind tcp");
    listener.local_addr().expect("local addr").port()
}
