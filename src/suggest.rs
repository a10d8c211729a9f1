use tracing::{trace, warn};

use crate::{
    diffs::{
        lcs,
        merge::{DiffBlock, merge_edit_ops},
    },
    render::{Change, Comment, render_change, render_comment},
    tokenizer::{line_tokenizer::tokenize_lines, tokenized_line::TokenizedLine},
};

/// Given an `original` document and an `updated` version of it, return one
/// [`Comment`] per localized word-level change, in document order.
///
/// Both documents are normalized (inline markdown markers stripped, links
/// reduced to their text) and compared line by line: the nth non-blank line
/// of `original` against the nth non-blank line of `updated`. Within a line
/// pair, minimal word-level edits are computed and nearby edits are merged
/// when at most one unchanged word separates them. Each resulting change
/// carries an escaped anchor pattern, which locates the changed words plus
/// one word of context on each side in the original line, and a suggestion
/// string.
///
/// Lines that were inserted, deleted or reordered are not matched up; when
/// the documents have different numbers of non-blank lines, only the pairs
/// up to the shorter count are compared and the rest is ignored.
///
/// ```
/// use inline_suggest::diff_comments;
///
/// let comments = diff_comments("Hello world foo", "Hello there foo");
///
/// assert_eq!(comments.len(), 1);
/// assert_eq!(comments[0].pattern, "Hello world foo");
/// assert_eq!(comments[0].comment, "Consider changing 'world' to 'there'");
/// ```
#[must_use]
pub fn diff_comments(original: &str, updated: &str) -> Vec<Comment> {
    render_blocks(original, updated, render_comment)
}

/// Like [`diff_comments`], but returns display-oriented [`Change`]s with
/// the old and new words wrapped in emphasis markers and an arrow between
/// them.
///
/// ```
/// use inline_suggest::diff_changes;
///
/// let changes = diff_changes("Hello world foo", "Hello there foo");
///
/// assert_eq!(changes.len(), 1);
/// assert_eq!(changes[0].display, "Hello **world** → **there** foo");
/// ```
#[must_use]
pub fn diff_changes(original: &str, updated: &str) -> Vec<Change> {
    render_blocks(original, updated, render_change)
}

/// Runs the pipeline and renders every merged block with `render`, keeping
/// document order: line by line, and within a line by increasing start of
/// the old range.
fn render_blocks<T>(
    original: &str,
    updated: &str,
    render: fn(&DiffBlock, &TokenizedLine, &TokenizedLine) -> T,
) -> Vec<T> {
    let original_lines = tokenize_lines(original);
    let updated_lines = tokenize_lines(updated);

    if original_lines.len() != updated_lines.len() {
        warn!(
            original = original_lines.len(),
            updated = updated_lines.len(),
            "documents have different non-blank line counts; comparing only the shorter prefix"
        );
    }

    let mut result = Vec::new();

    for (line_index, (original_line, updated_line)) in
        original_lines.iter().zip(&updated_lines).enumerate()
    {
        let ops = lcs::diff(original_line.tokens(), updated_line.tokens());
        let blocks = merge_edit_ops(&ops);
        trace!(line_index, blocks = blocks.len(), "merged change blocks");

        result.extend(
            blocks
                .iter()
                .map(|block| render(block, original_line, updated_line)),
        );
    }

    result
}
