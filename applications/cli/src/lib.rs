//! Medialib programs
//!
//! Two straight-line programs over `medialib-core`:
//! - `showcase`: describe/play each item, `Playable` controls, a user's
//!   playlist, then shallow and deep playlist copies
//! - `search`: list a library, sort it by duration, then look up one title
//!   read from input
//!
//! Both write to any `io::Write` so tests can capture the output.

pub mod config;
pub mod error;
pub mod search;
pub mod showcase;

pub use error::{CliError, Result};
