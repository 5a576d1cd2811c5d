//! Host lookup, insertion, and file-backed read/write scenarios.

use std::fs;

use netrc::{MachineOptions, Netrc, NetrcError, default_netrc_path};
use netrc_test_utils::{NetrcGuard, create_test_netrc};

const FIXTURE: &str = "\
machine code.example.com
  login alice@code.example.com
  password 86801bc8abbffd7fa4f203329ba55c4043f4db78
machine api.example.com
  login alice@api.example.com
  password 86802bc8abbffd7fa4f203329ba55c4043f4db78
machine git.example.com
  login alice@git.example.com
  password 86803bc8abbffd7fa4f203329ba55c4043f4db78";

#[test]
fn test_reads_machines_from_file() {
  let (_temp_dir, path) = create_test_netrc(FIXTURE);
  let mut netrc = Netrc::with_path(path);

  assert!(netrc.has_host("code.example.com").expect("read succeeds"));

  let machine = netrc.host("code.example.com").expect("host present");
  assert_eq!(machine.login.as_deref(), Some("alice@code.example.com"));
  assert_eq!(
    machine.password.as_deref(),
    Some("86801bc8abbffd7fa4f203329ba55c4043f4db78")
  );

  let machine = netrc.host("git.example.com").expect("host present");
  assert_eq!(machine.login.as_deref(), Some("alice@git.example.com"));
}

#[test]
fn test_host_miss_is_not_found() {
  let (_temp_dir, path) = create_test_netrc(FIXTURE);
  let mut netrc = Netrc::with_path(path);

  let err = netrc.host("blarg.com").expect_err("host absent");
  assert!(matches!(
    &err,
    NetrcError::MachineNotFound { hostname, .. } if hostname == "blarg.com"
  ));

  // The same miss through has_host is a plain false, not an error.
  assert!(!netrc.has_host("blarg.com").expect("read succeeds"));
}

#[test]
fn test_add_host_then_lookup() {
  let (_temp_dir, path) = create_test_netrc(FIXTURE);
  let mut netrc = Netrc::with_path(path);

  netrc
    .add_host(
      "new.example.com",
      MachineOptions {
        login: Some("alice@new.example.com".to_string()),
        password: Some("p@ssword".to_string()),
        ..MachineOptions::default()
      },
    )
    .expect("host added");

  let machine = netrc.host("new.example.com").expect("host present");
  assert_eq!(machine.login.as_deref(), Some("alice@new.example.com"));
  assert_eq!(machine.password.as_deref(), Some("p@ssword"));
}

#[test]
fn test_add_duplicate_host_is_rejected_and_mapping_unchanged() {
  let (_temp_dir, path) = create_test_netrc(FIXTURE);
  let mut netrc = Netrc::with_path(path);

  let err = netrc
    .add_host(
      "api.example.com",
      MachineOptions {
        login: Some("mallory".to_string()),
        ..MachineOptions::default()
      },
    )
    .expect_err("duplicate rejected");
  assert!(matches!(
    &err,
    NetrcError::MachineExists { hostname, .. } if hostname == "api.example.com"
  ));

  let machine = netrc.host("api.example.com").expect("host present");
  assert_eq!(machine.login.as_deref(), Some("alice@api.example.com"));
  assert_eq!(netrc.hostnames().len(), 3);
}

#[test]
fn test_missing_file_reads_as_empty() {
  let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
  let mut netrc = Netrc::with_path(temp_dir.path().join(".netrc-non-existing"));

  netrc.read().expect("missing file is empty input");
  assert!(netrc.hostnames().is_empty());
  assert!(!netrc.has_host("example.com").expect("still empty"));
}

#[test]
fn test_write_round_trips_through_another_file() {
  let (_temp_dir, input_path) = create_test_netrc(FIXTURE);
  let output_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
  let output_path = output_dir.path().join(".netrc-modified");

  let mut netrc = Netrc::with_path(&input_path);
  netrc.read().expect("read input");

  netrc.set_path(&output_path);
  netrc.write().expect("write output");

  assert_eq!(
    fs::read_to_string(&output_path).expect("read output"),
    fs::read_to_string(&input_path).expect("read input")
  );
}

#[test]
fn test_modify_and_write() {
  let (_temp_dir, input_path) = create_test_netrc(FIXTURE);
  let output_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
  let output_path = output_dir.path().join(".netrc-modified");

  let mut netrc = Netrc::with_path(&input_path);
  netrc
    .add_host(
      "new.example.com",
      MachineOptions {
        login: Some("alice@new.example.com".to_string()),
        password: Some("p@ssword".to_string()),
        ..MachineOptions::default()
      },
    )
    .expect("host added");

  netrc.set_path(&output_path);
  netrc.write().expect("write output");

  let expected = format!("{FIXTURE}\nmachine new.example.com\n  login alice@new.example.com\n  password p@ssword");
  assert_eq!(fs::read_to_string(&output_path).expect("read output"), expected);
}

#[test]
fn test_default_path_follows_home() {
  let guard = NetrcGuard::new(FIXTURE);

  let mut netrc = Netrc::new();
  assert_eq!(netrc.path(), default_netrc_path(guard.home_dir()));
  assert!(netrc.has_host("code.example.com").expect("fixture read"));
}
