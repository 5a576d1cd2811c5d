//! # Machine Records
//!
//! Model for a single `machine` block parsed from a `.netrc` file, plus the
//! field bundle used when adding a new entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One `machine` entry and its associated fields.
///
/// The four recognized field keywords get dedicated slots and a fixed place
/// in formatted output; anything else the file assigns lands in [`extra`]
/// and is preserved in memory but never emitted.
///
/// [`extra`]: Machine::extra
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Machine {
  /// Zero-based position among all records in file order. Fixes output
  /// ordering and never changes after creation.
  pub index: usize,

  /// The hostname following the `machine` keyword. Only transiently absent
  /// while the parser is still collecting fields for the record; entries
  /// without a hostname are dropped before they reach the document.
  pub hostname: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub login: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub account: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub macdef: Option<String>,

  /// Unrecognized field keys, keyed by field name.
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub extra: BTreeMap<String, String>,
}

impl Machine {
  /// Create an empty record at the given sequence position.
  pub fn new(index: usize) -> Self {
    Self {
      index,
      ..Self::default()
    }
  }

  /// Assign a field by its `.netrc` keyword.
  ///
  /// `machine` sets the hostname, the four recognized field keywords go to
  /// their dedicated slots, and any other key is kept in [`extra`].
  ///
  /// [`extra`]: Machine::extra
  pub fn set_field(&mut self, key: &str, value: String) {
    match key {
      "machine" => self.hostname = Some(value),
      "login" => self.login = Some(value),
      "password" => self.password = Some(value),
      "account" => self.account = Some(value),
      "macdef" => self.macdef = Some(value),
      _ => {
        self.extra.insert(key.to_string(), value);
      }
    }
  }

  /// Read a field by its `.netrc` keyword, recognized or not.
  pub fn field(&self, key: &str) -> Option<&str> {
    match key {
      "machine" => self.hostname.as_deref(),
      "login" => self.login.as_deref(),
      "password" => self.password.as_deref(),
      "account" => self.account.as_deref(),
      "macdef" => self.macdef.as_deref(),
      _ => self.extra.get(key).map(String::as_str),
    }
  }

  /// Format this record as its `.netrc` block: a `machine` line followed by
  /// one indented line per present field, in the fixed order login,
  /// password, account, macdef.
  ///
  /// Absent and empty fields are omitted. Keys in [`extra`] are not
  /// emitted.
  ///
  /// [`extra`]: Machine::extra
  pub fn output(&self) -> String {
    let mut lines = vec![format!("machine {}", self.hostname.as_deref().unwrap_or_default())];

    let fields = [
      ("login", &self.login),
      ("password", &self.password),
      ("account", &self.account),
      ("macdef", &self.macdef),
    ];

    for (key, value) in fields {
      if let Some(value) = value
        && !value.is_empty()
      {
        lines.push(format!("  {key} {value}"));
      }
    }

    lines.join("\n")
  }
}

/// Fields to seed a new machine entry with.
///
/// Passed to [`Netrc::add_host`]; every provided field, including the
/// unrecognized keys in `extra`, is copied onto the created record.
///
/// [`Netrc::add_host`]: crate::Netrc::add_host
#[derive(Debug, Clone, Default)]
pub struct MachineOptions {
  pub login: Option<String>,
  pub password: Option<String>,
  pub account: Option<String>,
  pub macdef: Option<String>,
  pub extra: BTreeMap<String, String>,
}
