//! LCS diff over token sequences.
//!
//! * time: `O(NM)`
//! * space: `O(NM)`
//!
//! Table construction follows the classic longest-common-subsequence
//! recurrence; the walk emits one [`EditOp`] per maximal run of differing
//! tokens, so adjacent delete and insert runs at the same boundary come out
//! as a single `Replace`, matching the opcode semantics of
//! sequence-matching differs.

use super::edit_op::EditOp;

/// Computes the minimal-edit alignment of two token sequences.
///
/// `Equal` regions are discarded; the retained operations are in
/// left-to-right order, non-overlapping, and deterministic: on an LCS-table
/// tie the old side is consumed first. Identical sequences produce an empty
/// result.
#[must_use]
pub fn diff(old: &[String], new: &[String]) -> Vec<EditOp> {
    let prefix_len = common_prefix_len(old, new);
    let suffix_len = common_suffix_len(&old[prefix_len..], &new[prefix_len..]);

    let old_middle = &old[prefix_len..old.len() - suffix_len];
    let new_middle = &new[prefix_len..new.len() - suffix_len];
    let table = LcsTable::new(old_middle, new_middle);

    let mut result = Vec::new();
    let mut old_idx = 0;
    let mut new_idx = 0;
    let mut run_start = (0, 0);

    while old_idx < old_middle.len() && new_idx < new_middle.len() {
        if old_middle[old_idx] == new_middle[new_idx] {
            result.extend(EditOp::from_ranges(
                prefix_len + run_start.0..prefix_len + old_idx,
                prefix_len + run_start.1..prefix_len + new_idx,
            ));
            old_idx += 1;
            new_idx += 1;
            run_start = (old_idx, new_idx);
        } else if table.get(old_idx + 1, new_idx) >= table.get(old_idx, new_idx + 1) {
            old_idx += 1;
        } else {
            new_idx += 1;
        }
    }

    // Whatever remains of either middle is part of the final run.
    result.extend(EditOp::from_ranges(
        prefix_len + run_start.0..prefix_len + old_middle.len(),
        prefix_len + run_start.1..prefix_len + new_middle.len(),
    ));

    result
}

fn common_prefix_len(old: &[String], new: &[String]) -> usize {
    old.iter().zip(new).take_while(|(a, b)| a == b).count()
}

fn common_suffix_len(old: &[String], new: &[String]) -> usize {
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// `table.get(i, j)` is the length of the longest common subsequence of
/// `old[i..]` and `new[j..]`, with one extra row and column of zeros so the
/// walk can look one past either end.
struct LcsTable {
    values: Vec<u32>,
    new_len: usize,
}

impl LcsTable {
    fn new(old: &[String], new: &[String]) -> Self {
        let mut table = LcsTable {
            values: vec![0; (old.len() + 1) * (new.len() + 1)],
            new_len: new.len(),
        };

        for old_idx in (0..old.len()).rev() {
            for new_idx in (0..new.len()).rev() {
                let value = if old[old_idx] == new[new_idx] {
                    table.get(old_idx + 1, new_idx + 1) + 1
                } else {
                    table
                        .get(old_idx + 1, new_idx)
                        .max(table.get(old_idx, new_idx + 1))
                };
                table.values[old_idx * (table.new_len + 1) + new_idx] = value;
            }
        }

        table
    }

    fn get(&self, old_idx: usize, new_idx: usize) -> u32 {
        self.values[old_idx * (self.new_len + 1) + new_idx]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::diffs::edit_op::EditKind;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn test_empty_sequences() {
        assert_eq!(diff(&[], &[]), vec![]);
    }

    #[test]
    fn test_identical_sequences() {
        let tokens = words("same on both sides");
        assert_eq!(diff(&tokens, &tokens), vec![]);
    }

    #[test]
    fn test_single_replacement() {
        let result = diff(&words("Hello world foo"), &words("Hello there foo"));
        assert_eq!(result, vec![EditOp {
            kind: EditKind::Replace,
            old: 1..2,
            new: 1..2,
        }]);
    }

    #[test]
    fn test_two_separated_replacements() {
        let result = diff(&words("a b c d e"), &words("a X c Y e"));
        assert_eq!(result, vec![
            EditOp {
                kind: EditKind::Replace,
                old: 1..2,
                new: 1..2,
            },
            EditOp {
                kind: EditKind::Replace,
                old: 3..4,
                new: 3..4,
            },
        ]);
    }

    #[test]
    fn test_insert_only() {
        let result = diff(&words("start end"), &words("start middle end"));
        assert_eq!(result, vec![EditOp {
            kind: EditKind::Insert,
            old: 1..1,
            new: 1..2,
        }]);
    }

    #[test]
    fn test_delete_only() {
        let result = diff(&words("keep drop keep"), &words("keep keep"));
        assert_eq!(result, vec![EditOp {
            kind: EditKind::Delete,
            old: 1..2,
            new: 1..1,
        }]);
    }

    #[test]
    fn test_insert_into_empty() {
        let result = diff(&[], &words("all new"));
        assert_eq!(result, vec![EditOp {
            kind: EditKind::Insert,
            old: 0..0,
            new: 0..2,
        }]);
    }

    #[test]
    fn test_delete_everything() {
        let result = diff(&words("all gone"), &[]);
        assert_eq!(result, vec![EditOp {
            kind: EditKind::Delete,
            old: 0..2,
            new: 0..0,
        }]);
    }

    #[test]
    fn test_uneven_replacement() {
        let result = diff(&words("the quick fox"), &words("the very quick brown fox"));
        assert_eq!(result, vec![
            EditOp {
                kind: EditKind::Insert,
                old: 1..1,
                new: 1..2,
            },
            EditOp {
                kind: EditKind::Insert,
                old: 2..2,
                new: 3..4,
            },
        ]);
    }

    #[test]
    fn test_deterministic() {
        let old = words("x a b a x");
        let new = words("y a a y");
        assert_eq!(diff(&old, &new), diff(&old, &new));
    }
}
