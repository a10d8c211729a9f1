use std::ops::Range;

use super::edit_op::EditOp;

/// A run of one or more adjacent [`EditOp`]s reported as a single change.
///
/// Bounds are the union of the merged operations' ranges. Within one line,
/// blocks come out in strictly increasing `old.start` order and never
/// overlap on the old side. The covered token text is always sliced from
/// the tokenized lines over these final bounds; accumulating partial
/// slices while merging would double-count tokens already covered by an
/// earlier operation in the same block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffBlock {
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl From<&EditOp> for DiffBlock {
    fn from(op: &EditOp) -> Self {
        DiffBlock {
            old: op.old.clone(),
            new: op.new.clone(),
        }
    }
}

impl DiffBlock {
    /// Whether `op` is close enough to be folded into this block: at most
    /// one unchanged token may separate them, on both the old and the new
    /// side.
    fn absorbs(&self, op: &EditOp) -> bool {
        op.old.start <= self.old.end + 1 && op.new.start <= self.new.end + 1
    }

    fn extend(&mut self, op: &EditOp) {
        self.old.end = self.old.end.max(op.old.end);
        self.new.end = self.new.end.max(op.new.end);
    }
}

/// Coalesces an ordered sequence of edit operations into [`DiffBlock`]s
/// under the one-token-gap rule. An operation that is too far from the
/// current block closes it and starts a new one.
#[must_use]
pub fn merge_edit_ops(ops: &[EditOp]) -> Vec<DiffBlock> {
    let mut blocks: Vec<DiffBlock> = Vec::new();

    for op in ops {
        match blocks.last_mut() {
            Some(block) if block.absorbs(op) => block.extend(op),
            _ => blocks.push(DiffBlock::from(op)),
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::diffs::lcs;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    fn blocks_between(old: &str, new: &str) -> Vec<DiffBlock> {
        merge_edit_ops(&lcs::diff(&words(old), &words(new)))
    }

    #[test]
    fn test_no_ops() {
        assert_eq!(merge_edit_ops(&[]), vec![]);
    }

    #[test]
    fn test_single_op_passes_through() {
        assert_eq!(blocks_between("a b c", "a X c"), vec![DiffBlock {
            old: 1..2,
            new: 1..2,
        }]);
    }

    #[test]
    fn test_one_token_gap_merges() {
        assert_eq!(blocks_between("a b c d e", "a X c Y e"), vec![DiffBlock {
            old: 1..4,
            new: 1..4,
        }]);
    }

    #[test]
    fn test_two_token_gap_stays_separate() {
        assert_eq!(blocks_between("a b c d e f", "a X c d Y f"), vec![
            DiffBlock {
                old: 1..2,
                new: 1..2,
            },
            DiffBlock {
                old: 4..5,
                new: 4..5,
            },
        ]);
    }

    #[test]
    fn test_directly_adjacent_ops_merge() {
        // A delete right next to an insert, no gap at all.
        assert_eq!(blocks_between("a b c d", "a c X d"), vec![DiffBlock {
            old: 1..3,
            new: 1..3,
        }]);
    }

    #[test]
    fn test_bounds_never_shrink() {
        let ops = lcs::diff(&words("p q r s t"), &words("p A r B t"));
        let blocks = merge_edit_ops(&ops);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].old.end, 4);
        assert_eq!(blocks[0].new.end, 4);
    }
}
