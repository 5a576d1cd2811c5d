use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a `.netrc` file with the given content inside a fresh temporary
/// directory.
///
/// The returned [`TempDir`] keeps the directory alive; bind it even if the
/// test only needs the path.
pub fn create_test_netrc(content: &str) -> (TempDir, PathBuf) {
  let temp_dir = TempDir::new().expect("Failed to create temp directory");
  let netrc_path = temp_dir.path().join(".netrc");

  let mut file = fs::File::create(&netrc_path).expect("Failed to create test .netrc");
  file.write_all(content.as_bytes()).expect("Failed to write test .netrc");

  (temp_dir, netrc_path)
}

/// RAII guard for test `.netrc` files.
///
/// Creates a temporary `.netrc` with the given content, points the HOME
/// environment variable at the temporary directory so default-path lookups
/// resolve to the fixture, and restores the previous HOME when dropped.
pub struct NetrcGuard {
  temp_dir: TempDir,
  netrc_path: PathBuf,
  previous_home: Option<OsString>,
}

impl NetrcGuard {
  /// Create a new guard with the given `.netrc` content.
  pub fn new(content: &str) -> Self {
    let previous_home = std::env::var_os("HOME");

    let (temp_dir, netrc_path) = create_test_netrc(content);

    // SAFETY: tests that touch HOME run single-threaded with respect to
    // each other; the guard restores the variable on drop.
    unsafe {
      std::env::set_var("HOME", temp_dir.path());
    }

    Self {
      temp_dir,
      netrc_path,
      previous_home,
    }
  }

  /// Path to the fixture `.netrc` file.
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Path to the temporary directory acting as HOME.
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

impl Drop for NetrcGuard {
  fn drop(&mut self) {
    // SAFETY: see `NetrcGuard::new`.
    unsafe {
      match &self.previous_home {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
      }
    }
  }
}
