//! # knockr common
//!
//! Shared building blocks for the knocker:
//! * [`target`]: the `Target`/`Port`/`Protocol` model.
//! * [`store`]: parsing and appending the persisted target file.
//! * [`config`]: runtime options assembled by the CLI.
//! * [`error`]: typed errors for the above.

pub mod config;
pub mod error;
pub mod store;
pub mod target;
