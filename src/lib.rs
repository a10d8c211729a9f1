mod diffs;
mod normalize;
mod render;
mod suggest;
mod tokenizer;

pub use diffs::{
    edit_op::{EditKind, EditOp},
    merge::DiffBlock,
};
pub use normalize::normalize_markdown;
pub use render::{Change, Comment};
pub use suggest::{diff_changes, diff_comments};
pub use tokenizer::{line_tokenizer::tokenize_lines, tokenized_line::TokenizedLine};
