//! # Comment Preservation
//!
//! `#` comments are not part of the `.netrc` token grammar, yet an unedited
//! read-then-write cycle must reproduce the file byte for byte. The comment
//! table strips comments before tokenization, remembering the line and column
//! each one came from, and splices them back into the serialized output.
//!
//! Positions are keyed by line index, so append-only edits (new records add
//! new lines at the end) leave every existing comment in place. Edits that
//! change the line count of earlier records will shift comments; that is the
//! documented contract, not something the table tries to repair.

use std::collections::BTreeMap;

/// Comments captured during a load, keyed by pre-strip line index and then
/// by the column of the `#` that introduced them.
#[derive(Debug, Clone, Default)]
pub struct CommentTable {
  entries: BTreeMap<usize, BTreeMap<usize, String>>,
}

impl CommentTable {
  /// Strip `#` comments from `data`, recording each against its line and
  /// column.
  ///
  /// Only the first `#` on a line starts a comment; any further `#`
  /// characters belong to the stored comment text. The stored text runs to
  /// the end of the line, excluding the newline.
  pub fn strip(data: &str) -> (String, Self) {
    let mut table = Self::default();

    let lines: Vec<&str> = data
      .split('\n')
      .enumerate()
      .map(|(line_index, line)| match line.find('#') {
        Some(column) => {
          table
            .entries
            .entry(line_index)
            .or_default()
            .insert(column, line[column..].to_string());
          &line[..column]
        }
        None => line,
      })
      .collect();

    (lines.join("\n"), table)
  }

  /// Splice the recorded comments back into serialized output.
  ///
  /// Each comment is inserted (not overwritten) into the line of its
  /// recorded index at its recorded column, pushing existing content
  /// rightward. Entries whose line index falls beyond the current line count
  /// are dropped: an earlier edit removed the line they belonged to, and
  /// skipping them beats writing out of bounds.
  pub fn reinsert(&self, data: &str) -> String {
    let mut lines: Vec<String> = data.split('\n').map(str::to_string).collect();

    for (&line_index, columns) in &self.entries {
      let Some(line) = lines.get_mut(line_index) else {
        continue;
      };

      for (&column, comment) in columns {
        // Clamp to a char boundary; decoded escapes can leave the rebuilt
        // line shorter than the column recorded against the original.
        let mut at = column.min(line.len());
        while !line.is_char_boundary(at) {
          at -= 1;
        }
        line.insert_str(at, comment);
      }
    }

    lines.join("\n")
  }

  /// Whether any comments were captured.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
