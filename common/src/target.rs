//! # Knock Target Model
//!
//! A [`Target`] is a host plus the ordered list of [`Port`]s to knock on.
//!
//! Text forms:
//! * **Port**: `<number>/<proto>` (e.g., `7000/udp`).
//! * **Target**: `<host>:<port>,<port>,...` (e.g., `example.com:80/tcp,7000/udp`).

use std::fmt;
use std::str::FromStr;

use crate::error::TargetError;

/// Layer 4 protocol used for a single knock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Used whenever the protocol is left out of the textual form.
    #[default]
    Tcp,
    Udp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    /// Exact match on `tcp` or `udp`. Case folding is left to the caller.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            _ => Err(format!("invalid protocol: {s}")),
        }
    }
}

/// A single port to be knocked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Port {
    number: u16,
    protocol: Protocol,
}

impl Port {
    pub fn new(number: u16, protocol: Protocol) -> Result<Self, TargetError> {
        if number == 0 {
            return Err(TargetError::PortZero);
        }
        Ok(Self { number, protocol })
    }

    pub fn tcp(number: u16) -> Result<Self, TargetError> {
        Self::new(number, Protocol::Tcp)
    }

    pub fn udp(number: u16) -> Result<Self, TargetError> {
        Self::new(number, Protocol::Udp)
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.number, self.protocol)
    }
}

/// A host and the ports to be knocked on, in knock order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    host: String,
    ports: Vec<Port>,
}

impl Target {
    pub fn new(host: impl Into<String>, ports: Vec<Port>) -> Result<Self, TargetError> {
        let host: String = host.into();
        if host.is_empty() {
            return Err(TargetError::EmptyHost);
        }
        Ok(Self { host, ports })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }
}

/// Renders the store line, without the trailing newline.
impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.host)?;
        for (idx, port) in self.ports.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{port}")?;
        }
        Ok(())
    }
}

/// Picks a target by its 1-based menu index.
pub fn select(targets: &[Target], index: usize) -> Option<&Target> {
    index.checked_sub(1).and_then(|idx| targets.get(idx))
}

/// Picks the first target whose host matches exactly.
pub fn find_by_host<'a>(targets: &'a [Target], host: &str) -> Option<&'a Target> {
    targets.iter().find(|target| target.host == host)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
