//! # netrc
//!
//! A library for reading, writing, and manipulating `.netrc` credential
//! files: whitespace-delimited `machine`/`login`/`password`/`account`/
//! `macdef` tokens, one credential record per `machine` entry, with `#`
//! comments allowed anywhere on a line.
//!
//! The parts with real design weight are the comment sidecar and the escape
//! decoder. Comments are not part of the token grammar, so they are stripped
//! before tokenization and spliced back into rendered output at their
//! original line and column; a read-then-write cycle without edits
//! reproduces the file byte for byte, and appending new records keeps every
//! existing comment in place. `\xHH` escapes are decoded as token values are
//! assigned and are not re-encoded on write.
//!
//! ```no_run
//! use netrc::{MachineOptions, Netrc};
//!
//! # fn main() -> netrc::Result<()> {
//! let mut netrc = Netrc::new(); // backed by ~/.netrc
//!
//! if netrc.has_host("api.example.com")? {
//!   let machine = netrc.host("api.example.com")?;
//!   println!("login: {}", machine.login.as_deref().unwrap_or(""));
//! }
//!
//! netrc.add_host(
//!   "new.example.com",
//!   MachineOptions {
//!     login: Some("alice".to_string()),
//!     password: Some("p@ss".to_string()),
//!     ..MachineOptions::default()
//!   },
//! )?;
//! netrc.write()?;
//! # Ok(())
//! # }
//! ```

pub mod comments;
pub mod error;
pub mod escape;
pub mod machine;
mod netrc;
pub mod parser;

// Re-export the main types for callers
pub use comments::CommentTable;
pub use error::{NetrcError, Result};
pub use machine::{Machine, MachineOptions};
pub use crate::netrc::{Netrc, default_netrc_path};
