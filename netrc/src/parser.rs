//! # Tokenizer and Serializer
//!
//! Turns comment-free `.netrc` text into ordered machine records and back.
//! The grammar is a flat alternation of field keys and values: a `machine`
//! key both finalizes the record being built and opens the next one, which
//! is what makes one credential record per `machine` entry fall out of a
//! single pass.

use crate::escape;
use crate::machine::Machine;

/// Parse comment-free text into machine records in file order.
///
/// Tokens are split on runs of space, tab, newline, and carriage return, so
/// single-line (`machine host login user`) and multi-line layouts parse the
/// same way. Every token in key position names the field the following token
/// is assigned to; values are escape-decoded as they are assigned. Records
/// are finalized when the next `machine` key or the end of input is reached,
/// and a record that never received a hostname is dropped. Value tokens seen
/// before the first `machine` key have no record to land on and are
/// discarded silently.
pub fn parse(data: &str) -> Vec<Machine> {
  let mut records = Vec::new();
  let mut current: Option<Machine> = None;
  let mut pending_key: Option<&str> = None;
  let mut index = 0;

  for token in data.split([' ', '\t', '\n', '\r']).filter(|token| !token.is_empty()) {
    match pending_key.take() {
      None => {
        pending_key = Some(token);
        if token == "machine" {
          if let Some(machine) = current.take() {
            finalize(machine, &mut records);
          }
          current = Some(Machine::new(index));
          index += 1;
        }
      }
      Some(key) => {
        if let Some(machine) = current.as_mut() {
          machine.set_field(key, escape::decode(token));
        }
      }
    }
  }

  if let Some(machine) = current.take() {
    finalize(machine, &mut records);
  }

  records
}

/// Keep a finished record only once its hostname is known; a dangling
/// `machine` key with no hostname token after it yields nothing.
fn finalize(machine: Machine, records: &mut Vec<Machine>) {
  if machine.hostname.is_some() {
    records.push(machine);
  }
}

/// Serialize records into comment-free `.netrc` text.
///
/// Records are emitted in ascending sequence order, one block per record,
/// joined by a single newline with no blank line between blocks and no
/// trailing newline.
pub fn serialize<'a, I>(records: I) -> String
where
  I: IntoIterator<Item = &'a Machine>,
{
  let mut ordered: Vec<&Machine> = records.into_iter().collect();
  ordered.sort_by_key(|machine| machine.index);

  let blocks: Vec<String> = ordered.iter().map(|machine| machine.output()).collect();
  blocks.join("\n")
}
