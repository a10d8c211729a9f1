#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{diffs::merge::DiffBlock, tokenizer::tokenized_line::TokenizedLine};

/// One reviewer suggestion: an anchor for locating the original text plus
/// the suggestion itself.
///
/// `pattern` is the escaped literal of the changed old tokens with one
/// unchanged context token on each side where available. The escaping
/// guarantees that a downstream consumer can compile it as a regex (or
/// unescape it) and match exactly the span that produced it, never
/// interpreting any of its characters as metacharacters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub pattern: String,
    pub comment: String,
}

/// A display-oriented rendering of one change, for human consumption.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// The replaced tokens of the original line, joined by single spaces.
    pub old: String,

    /// The replacement tokens of the updated line, joined by single spaces.
    pub new: String,

    /// The change with context, as `<left> **old** → **new** <right>`.
    pub display: String,
}

/// The single unchanged token on each side of a block's old range, where
/// the line has one.
fn context<'a>(block: &DiffBlock, old_line: &'a TokenizedLine) -> (Option<&'a str>, Option<&'a str>) {
    let left = block
        .old
        .start
        .checked_sub(1)
        .and_then(|index| old_line.get(index));
    let right = old_line.get(block.old.end);

    (left, right)
}

/// Renders one merged block into a [`Comment`].
#[must_use]
pub fn render_comment(
    block: &DiffBlock,
    old_line: &TokenizedLine,
    new_line: &TokenizedLine,
) -> Comment {
    let old = old_line.join_range(block.old.clone());
    let new = new_line.join_range(block.new.clone());
    let (left, right) = context(block, old_line);

    let mut pattern = String::new();
    if let Some(left) = left {
        pattern.push_str(left);
        pattern.push(' ');
    }
    pattern.push_str(&old);
    if let Some(right) = right {
        pattern.push(' ');
        pattern.push_str(right);
    }

    Comment {
        pattern: regex::escape(&pattern),
        comment: format!("Consider changing '{old}' to '{new}'"),
    }
}

/// Renders one merged block into a [`Change`].
#[must_use]
pub fn render_change(
    block: &DiffBlock,
    old_line: &TokenizedLine,
    new_line: &TokenizedLine,
) -> Change {
    let old = old_line.join_range(block.old.clone());
    let new = new_line.join_range(block.new.clone());
    let (left, right) = context(block, old_line);

    let mut display = String::new();
    if let Some(left) = left {
        display.push_str(left);
        display.push(' ');
    }
    display.push_str(&format!("**{old}** → **{new}**"));
    if let Some(right) = right {
        display.push(' ');
        display.push_str(right);
    }

    Change { old, new, display }
}
