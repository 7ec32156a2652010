//! # Target Store
//!
//! Reads and appends the flat target file. One target per line:
//!
//! ```text
//! # comment
//! host.example.com:123/udp,234/udp,345/tcp
//! 10.0.0.7:22
//! ```
//!
//! Whitespace anywhere in a line is ignored. A port without `/proto` is
//! knocked over TCP. The file is only ever appended to.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

use tracing::{debug, error};

use crate::error::{PortError, StoreError};
use crate::target::{Port, Protocol, Target};

/// How unrecognised protocol tokens are treated while parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Anything other than the exact token `udp` becomes TCP.
    #[default]
    Permissive,
    /// Only `tcp` and `udp` are accepted; other tokens reject the entry.
    Strict,
}

/// Result of parsing one non-comment line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLine {
    /// The line with all whitespace removed.
    pub line: String,
    pub target: Target,
    /// Entries that were dropped, in the order they appeared.
    pub rejected: Vec<PortError>,
}

/// Parses a single line of the store.
///
/// Returns `Ok(None)` for blank and `#` comment lines.
pub fn parse_line(input: &str, mode: ParseMode) -> Result<Option<ParsedLine>, StoreError> {
    let line: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split(':').collect();
    let [host, ports] = parts.as_slice() else {
        return Err(StoreError::MalformedLine { line });
    };

    let mut port_list: Vec<Port> = Vec::new();
    let mut rejected: Vec<PortError> = Vec::new();

    for item in ports.split(',') {
        match parse_port(item, mode) {
            Ok(port) => port_list.push(port),
            Err(e) => rejected.push(e),
        }
    }

    let Ok(target) = Target::new(*host, port_list) else {
        return Err(StoreError::MalformedLine { line });
    };

    Ok(Some(ParsedLine {
        line,
        target,
        rejected,
    }))
}

/// Parses one `<number>[/<proto>]` entry.
fn parse_port(item: &str, mode: ParseMode) -> Result<Port, PortError> {
    let (number_token, proto_token) = match item.split_once('/') {
        Some((number, proto)) => (number, Some(proto)),
        None => (item, None),
    };

    let invalid_number = || PortError::InvalidNumber {
        token: number_token.to_string(),
    };

    let number: u16 = number_token
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0 && *n < 65536)
        .and_then(|n| u16::try_from(n).ok())
        .ok_or_else(invalid_number)?;

    let protocol: Protocol = match (mode, proto_token) {
        (_, None) => Protocol::default(),
        (ParseMode::Permissive, Some("udp")) => Protocol::Udp,
        (ParseMode::Permissive, Some(_)) => Protocol::Tcp,
        (ParseMode::Strict, Some(proto)) => {
            proto.parse().map_err(|_| PortError::UnknownProtocol {
                token: proto.to_string(),
            })?
        }
    };

    Port::new(number, protocol).map_err(|_| invalid_number())
}

/// Loads every target from the store, in file order.
///
/// Malformed lines and rejected port entries are reported with `error!`
/// and skipped. A missing file is [`StoreError::NotFound`].
pub fn load_targets(path: &Path, mode: ParseMode) -> Result<Vec<Target>, StoreError> {
    let file: File = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StoreError::NotFound {
            path: path.to_path_buf(),
        },
        _ => StoreError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut targets: Vec<Target> = Vec::new();

    for line in BufReader::new(file).lines() {
        let line: String = line.map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match parse_line(&line, mode) {
            Ok(Some(parsed)) => {
                for rejected in &parsed.rejected {
                    error!("Parse error: {rejected} in line '{}'.", parsed.line);
                }
                targets.push(parsed.target);
            }
            Ok(None) => {}
            Err(e) => error!("Parse error: {e}."),
        }
    }

    debug!("Loaded {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

/// Appends a target to the store, creating the file if needed.
pub fn save_target(path: &Path, target: &Target) -> Result<(), StoreError> {
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;

    writeln!(file, "{target}").map_err(io_err)?;
    debug!("Appended {target} to {}", path.display());
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
