//! # Netrc Document
//!
//! Owns the hostname-to-machine mapping for one `.netrc` file and
//! coordinates comment stripping, tokenization, and serialization. The
//! mapping starts out absent and is populated lazily: query and mutation
//! operations read the backing file on first use, so callers can construct a
//! document cheaply and only pay for I/O when they touch it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

use directories::BaseDirs;
use tracing::debug;

use crate::comments::CommentTable;
use crate::error::{NetrcError, Result};
use crate::machine::{Machine, MachineOptions};
use crate::parser;

/// Returns the conventional `.netrc` path inside the given home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use netrc::default_netrc_path;
///
/// let path = default_netrc_path(Path::new("/home/alice"));
/// assert_eq!(path, Path::new("/home/alice/.netrc"));
/// ```
pub fn default_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// In-memory model of a `.netrc` file.
///
/// One owner loads, mutates, and renders the document in sequence; nothing
/// here is safe to share across threads without external serialization.
#[derive(Debug)]
pub struct Netrc {
  path: PathBuf,
  machines: Option<HashMap<String, Machine>>,
  comments: CommentTable,
}

impl Netrc {
  /// Create a document backed by the user's `~/.netrc`.
  ///
  /// Falls back to a bare `.netrc` in the current directory when no home
  /// directory can be determined.
  pub fn new() -> Self {
    let path = BaseDirs::new()
      .map(|dirs| default_netrc_path(dirs.home_dir()))
      .unwrap_or_else(|| PathBuf::from(".netrc"));
    Self::with_path(path)
  }

  /// Create a document backed by an explicit file path.
  pub fn with_path(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      machines: None,
      comments: CommentTable::default(),
    }
  }

  /// The file this document reads from and writes to.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Retarget the document at a different file.
  ///
  /// The in-memory mapping and comment table are left alone, so a loaded
  /// document can be written out somewhere else.
  pub fn set_path(&mut self, path: impl Into<PathBuf>) {
    self.path = path.into();
  }

  /// Whether a load has populated the mapping yet.
  pub fn is_loaded(&self) -> bool {
    self.machines.is_some()
  }

  /// Read the backing file and rebuild the mapping and comment table.
  ///
  /// A missing file is identical to empty input and yields an empty
  /// mapping. Any other failure, such as a permission error, surfaces as
  /// [`NetrcError::Io`] with the underlying error code preserved.
  pub fn read(&mut self) -> Result<()> {
    let data = match fs::read_to_string(&self.path) {
      Ok(data) => data,
      Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
      Err(err) => {
        return Err(NetrcError::Io {
          path: self.path.display().to_string(),
          source: err,
        });
      }
    };

    self.load(&data);
    Ok(())
  }

  /// Rebuild the document from raw file contents.
  ///
  /// Comments are stripped and remembered, the remainder is tokenized into
  /// machine records, and the mapping is reset before being repopulated. A
  /// record parsed after another with the same hostname replaces it; its
  /// earlier sequence position is simply left unused.
  pub fn load(&mut self, data: &str) {
    let (stripped, comments) = CommentTable::strip(data);
    self.comments = comments;

    let mut machines = HashMap::new();
    for machine in parser::parse(&stripped) {
      if let Some(hostname) = machine.hostname.clone() {
        machines.insert(hostname, machine);
      }
    }

    debug!(path = %self.path.display(), machines = machines.len(), "loaded netrc document");
    self.machines = Some(machines);
  }

  /// Look up a machine by hostname, reading the backing file first if the
  /// document has not been loaded yet.
  pub fn host(&mut self, hostname: &str) -> Result<&Machine> {
    let path = self.path.display().to_string();
    match self.machines()?.get(hostname) {
      Some(machine) => Ok(machine),
      None => Err(NetrcError::MachineNotFound {
        hostname: hostname.to_string(),
        path,
      }),
    }
  }

  /// Whether the file contains an entry for `hostname`.
  ///
  /// A missing entry is reported as `Ok(false)`, never as an error; only an
  /// I/O failure from the implicit load propagates.
  pub fn has_host(&mut self, hostname: &str) -> Result<bool> {
    Ok(self.machines()?.contains_key(hostname))
  }

  /// Add a machine entry, sequenced after all existing records.
  ///
  /// Every field provided in `options` is copied onto the new record,
  /// including unrecognized keys. Fails with [`NetrcError::MachineExists`]
  /// if the hostname is already present, leaving the mapping untouched.
  pub fn add_host(&mut self, hostname: &str, options: MachineOptions) -> Result<&Machine> {
    let path = self.path.display().to_string();
    let machines = self.machines()?;

    if machines.contains_key(hostname) {
      return Err(NetrcError::MachineExists {
        hostname: hostname.to_string(),
        path,
      });
    }

    let mut machine = Machine::new(machines.len());
    machine.hostname = Some(hostname.to_string());
    machine.login = options.login;
    machine.password = options.password;
    machine.account = options.account;
    machine.macdef = options.macdef;
    machine.extra = options.extra;

    debug!(hostname, index = machine.index, "added netrc machine");
    Ok(machines.entry(hostname.to_string()).or_insert(machine))
  }

  /// Serialize the document back to `.netrc` text, splicing in the comments
  /// captured by the most recent load.
  ///
  /// Records appear in sequence order, so appended records land after the
  /// original content and comments on earlier lines stay put. A document
  /// that was never loaded renders as empty text.
  pub fn render(&self) -> String {
    let records = self.machines.iter().flat_map(HashMap::values);
    self.comments.reinsert(&parser::serialize(records))
  }

  /// Render the document and write it to the backing file.
  ///
  /// There is no atomic-rename step; a failed write leaves the file
  /// however the filesystem left it.
  pub fn write(&self) -> Result<()> {
    let data = self.render();
    debug!(path = %self.path.display(), bytes = data.len(), "writing netrc document");
    fs::write(&self.path, data).map_err(|err| NetrcError::Io {
      path: self.path.display().to_string(),
      source: err,
    })
  }

  /// Hostnames currently in the mapping, in output order. Empty when the
  /// document has not been loaded.
  pub fn hostnames(&self) -> Vec<&str> {
    let mut machines: Vec<&Machine> = self.machines.iter().flat_map(HashMap::values).collect();
    machines.sort_by_key(|machine| machine.index);
    machines.iter().filter_map(|machine| machine.hostname.as_deref()).collect()
  }

  /// The loaded mapping, reading the backing file on first access.
  fn machines(&mut self) -> Result<&mut HashMap<String, Machine>> {
    if self.machines.is_none() {
      self.read()?;
    }
    Ok(self.machines.get_or_insert_with(HashMap::new))
  }
}

impl Default for Netrc {
  fn default() -> Self {
    Self::new()
  }
}
