use std::ops::Range;

/// The kind of one contiguous difference between two token sequences.
///
/// `Equal` regions are never retained, so there is no variant for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Replace,
    Delete,
    Insert,
}

/// One contiguous difference between two token sequences.
///
/// `old` indexes into the original line's tokens and `new` into the updated
/// line's; both are half-open. A `Delete` has an empty `new` range, an
/// `Insert` has an empty `old` range and a `Replace` has both non-empty.
/// The token text itself is not stored; it is always sliced from the
/// tokenized lines when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOp {
    pub kind: EditKind,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl EditOp {
    /// Builds the operation for one run of differing tokens. Returns `None`
    /// when both ranges are empty.
    #[must_use]
    pub fn from_ranges(old: Range<usize>, new: Range<usize>) -> Option<Self> {
        let kind = match (old.is_empty(), new.is_empty()) {
            (false, false) => EditKind::Replace,
            (false, true) => EditKind::Delete,
            (true, false) => EditKind::Insert,
            (true, true) => return None,
        };

        Some(EditOp { kind, old, new })
    }
}
