//! # knockr core
//!
//! Executes knock sequences against a [`Target`](knockr_common::target::Target).
//!
//! * [`knocker`]: walks the port list in order and dispatches each knock.
//! * [`network`]: the UDP and TCP knock primitives.
//! * [`secret`]: where UDP passphrases come from.
//! * [`digest`]: the passphrase hash put on the wire.

pub mod digest;
pub mod error;
pub mod knocker;
pub mod network;
pub mod secret;
