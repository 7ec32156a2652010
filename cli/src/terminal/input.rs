//! Validated terminal prompts.
//!
//! Every prompt loops until the answer is valid. End of input is returned as
//! `UnexpectedEof` so callers can leave cleanly.

use std::io::{self, BufRead};

use console::Term;
use knockr_common::target::{Port, Protocol};
use knockr_core::secret::SecretProvider;
use tracing::warn;

/// Prompts for the passphrase of every UDP knock, without echo.
pub struct TerminalSecret;

impl SecretProvider for TerminalSecret {
    fn secret(&mut self, _host: &str, port: &Port) -> io::Result<String> {
        input_secret(&format!(" Enter passphrase ({port}): "))
    }
}

pub fn read_line(label: &str) -> io::Result<String> {
    let term = Term::stdout();
    term.write_str(label)?;
    if term.is_term() {
        return term.read_line();
    }
    read_piped_line()
}

pub fn input_secret(label: &str) -> io::Result<String> {
    let term = Term::stdout();
    term.write_str(label)?;
    if term.is_term() {
        return term.read_secure_line();
    }
    read_piped_line()
}

fn read_piped_line() -> io::Result<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn input_host(label: &str) -> io::Result<String> {
    loop {
        let value: String = read_line(label)?.trim().to_string();
        match parse_host(&value) {
            Some(host) => return Ok(host),
            None => warn!("Enter a hostname or an IPv4 address."),
        }
    }
}

pub fn input_port(label: &str) -> io::Result<u16> {
    loop {
        match parse_port_number(read_line(label)?.trim()) {
            Some(port) => return Ok(port),
            None => warn!("Enter a port number between 1-65535."),
        }
    }
}

pub fn input_protocol(label: &str) -> io::Result<Protocol> {
    loop {
        match read_line(label)?.trim().to_lowercase().parse::<Protocol>() {
            Ok(protocol) => return Ok(protocol),
            Err(_) => warn!("Enter layer 4 protocol to use: 'tcp' or 'udp'."),
        }
    }
}

pub fn input_count(label: &str) -> io::Result<u8> {
    loop {
        match parse_count(read_line(label)?.trim()) {
            Some(count) => return Ok(count),
            None => warn!("Enter number of ports to knock on (1-9)."),
        }
    }
}

pub fn pause() -> io::Result<()> {
    read_line("Press <Enter> to continue...").map(|_| ())
}

/// Hosts need more than one character.
fn parse_host(value: &str) -> Option<String> {
    (value.chars().count() > 1).then(|| value.to_string())
}

fn parse_port_number(value: &str) -> Option<u16> {
    value.parse::<u16>().ok().filter(|port| *port > 0)
}

fn parse_count(value: &str) -> Option<u8> {
    value.parse::<u8>().ok().filter(|count| (1..10).contains(count))
}
