//! Edit lists
//!
//! Rewrites are collected as byte-range replacements against the unmodified source
//! and applied in a single left-to-right pass, so no replacement can ever see the
//! output of another one.

use std::ops::Range;

/// A replacement of one byte range of the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte range in the original source
    pub range: Range<usize>,
    /// Text written in place of the range
    pub replacement: String,
}

impl Edit {
    /// Creates an edit replacing `range` with `replacement`
    pub fn replace(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Creates an edit deleting `range`
    pub fn delete(range: Range<usize>) -> Self {
        Self::replace(range, String::new())
    }
}

/// Applies edits to `source` in one pass
///
/// Edits are ordered by start offset (ties keep their insertion order). An edit
/// overlapping an earlier one is dropped with a warning and the text it covers is
/// left as the earlier edit produced it.
pub fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|edit| edit.range.start);

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in edits {
        if edit.range.start < cursor || edit.range.end > source.len() {
            tracing::warn!("Dropping overlapping edit at bytes {}..{}", edit.range.start, edit.range.end);
            continue;
        }
        output.push_str(&source[cursor..edit.range.start]);
        output.push_str(&edit.replacement);
        cursor = edit.range.end;
    }
    output.push_str(&source[cursor..]);

    output
}
