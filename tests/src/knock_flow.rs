//! End-to-end: targets go through the store and are knocked over loopback.

use std::fs;
use std::time::{Duration, Instant};

use knockr_common::store::{self, ParseMode};
use knockr_common::target::{Port, Protocol, Target};
use knockr_core::knocker::Knocker;
use knockr_core::network::tcp::CONNECT_TIMEOUT;
use knockr_integration_tests::{RecordingSecret, StoreFile, closed_tcp_port, udp_listener};
use sha2::{Digest, Sha256};

fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

#[test]
fn saved_udp_target_sends_hashed_passphrase() {
    let store_file = StoreFile::new();
    let (receiver, port) = udp_listener();

    let target = Target::new("127.0.0.1", vec![Port::udp(port).unwrap()]).unwrap();
    store::save_target(&store_file.0, &target).unwrap();

    let loaded = store::load_targets(&store_file.0, ParseMode::Permissive).unwrap();
    assert_eq!(loaded, vec![target]);

    let mut knocker = Knocker::new(RecordingSecret::new("open sesame"));
    knocker.knock(&loaded[0]).unwrap();

    assert_eq!(knocker.secrets().asked, vec![Port::udp(port).unwrap()]);

    let mut buf = [0u8; 128];
    let (len, _) = receiver.recv_from(&mut buf).unwrap();
    let payload = std::str::from_utf8(&buf[..len]).unwrap();
    assert_eq!(payload.len(), 64);
    assert_eq!(payload, sha256_hex("open sesame"));
}

#[test]
fn tcp_only_target_finishes_quietly() {
    let target = Target::new(
        "127.0.0.1",
        vec![Port::tcp(closed_tcp_port()).unwrap(), Port::tcp(closed_tcp_port()).unwrap()],
    )
    .unwrap();

    let mut knocker = Knocker::new(RecordingSecret::new("unused"));
    let started = Instant::now();
    knocker.knock(&target).unwrap();

    assert!(started.elapsed() < 2 * CONNECT_TIMEOUT + Duration::from_millis(500));
    assert!(knocker.secrets().asked.is_empty());
}

#[test]
fn mixed_sequence_prompts_per_udp_port() {
    let (first, first_port) = udp_listener();
    let (second, second_port) = udp_listener();
    let store_file = StoreFile::new();
    fs::write(
        &store_file.0,
        format!(
            "# firewall\n127.0.0.1: {first_port}/udp, {}, {second_port}/udp\n",
            closed_tcp_port()
        ),
    )
    .unwrap();

    let targets = store::load_targets(&store_file.0, ParseMode::Permissive).unwrap();
    assert_eq!(targets.len(), 1);
    let protocols: Vec<Protocol> = targets[0].ports().iter().map(Port::protocol).collect();
    assert_eq!(protocols, vec![Protocol::Udp, Protocol::Tcp, Protocol::Udp]);

    let mut knocker = Knocker::new(RecordingSecret::new("pw"));
    knocker.knock(&targets[0]).unwrap();
    assert_eq!(knocker.secrets().asked.len(), 2);

    let mut buf = [0u8; 128];
    for socket in [&first, &second] {
        let (len, _) = socket.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], sha256_hex("pw").as_bytes());
    }
}

#[test]
fn append_only_store_keeps_earlier_lines() {
    let store_file = StoreFile::new();
    let first = Target::new("alpha.lan", vec![Port::tcp(22).unwrap()]).unwrap();
    let second = Target::new("beta.lan", vec![Port::udp(9000).unwrap()]).unwrap();

    store::save_target(&store_file.0, &first).unwrap();
    let after_first = fs::read_to_string(&store_file.0).unwrap();

    store::save_target(&store_file.0, &second).unwrap();
    let after_second = fs::read_to_string(&store_file.0).unwrap();

    assert!(after_second.starts_with(&after_first));
    assert_eq!(after_second, "alpha.lan:22/tcp\nbeta.lan:9000/udp\n");
}

#[test]
fn strict_mode_drops_typoed_protocols() {
    let store_file = StoreFile::new();
    fs::write(&store_file.0, "fw.lan:8080/ucp,9000/udp\n").unwrap();

    let permissive = store::load_targets(&store_file.0, ParseMode::Permissive).unwrap();
    assert_eq!(
        permissive[0].ports(),
        &[Port::tcp(8080).unwrap(), Port::udp(9000).unwrap()]
    );

    let strict = store::load_targets(&store_file.0, ParseMode::Strict).unwrap();
    assert_eq!(strict[0].ports(), &[Port::udp(9000).unwrap()]);
}
