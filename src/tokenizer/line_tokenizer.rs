use super::tokenized_line::TokenizedLine;
use crate::normalize::normalize_markdown;

/// Splits a document into its non-blank lines, each normalized and reduced
/// to whitespace-delimited tokens.
///
/// Blank and whitespace-only lines are dropped before normalization and do
/// not occupy a position in the result. Lines that only become empty after
/// normalization (for example a `---` rule) are kept as empty token
/// sequences so that positions stay aligned with the raw document's
/// non-blank lines.
///
/// ## Example
///
/// ```not_rust
/// "# One\n\ntwo **words**\n" -> [["One"], ["two", "words"]]
/// ```
#[must_use]
pub fn tokenize_lines(document: &str) -> Vec<TokenizedLine> {
    document
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| TokenizedLine::from(normalize_markdown(line).as_str()))
        .collect()
}
