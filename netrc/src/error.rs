//! # Error Types
//!
//! Errors surfaced while reading, querying, or writing a `.netrc` file.
//! Malformed file content is never an error: stray tokens and incomplete
//! escape sequences degrade silently during parsing.

use thiserror::Error;

/// Errors raised by [`Netrc`](crate::Netrc) operations.
///
/// Every variant carries the hostname and/or file path involved so callers
/// can produce an actionable message without extra bookkeeping.
#[derive(Debug, Error)]
pub enum NetrcError {
  /// The requested machine is not present in the file.
  #[error("machine {hostname} not found in {path}")]
  MachineNotFound { hostname: String, path: String },

  /// A machine with this hostname already exists. Entries are never
  /// silently overwritten.
  #[error("machine {hostname} already exists in {path}")]
  MachineExists { hostname: String, path: String },

  /// An I/O failure other than a missing file, which is treated as empty
  /// input instead. The underlying error is preserved along with its OS
  /// error code.
  #[error("failed to access {path}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },
}

impl NetrcError {
  /// The OS error code of the underlying failure, for I/O errors that
  /// carried one.
  pub fn os_error(&self) -> Option<i32> {
    match self {
      Self::Io { source, .. } => source.raw_os_error(),
      _ => None,
    }
  }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetrcError>;
