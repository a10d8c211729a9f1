use std::ops::Range;

/// One non-blank line of a document, reduced to its whitespace-delimited
/// tokens after markdown normalization.
///
/// Tokens are identified by their 0-based position within the line. A line
/// that consisted only of formatting markers (for example a `---` rule)
/// normalizes to an empty token sequence but still occupies its position
/// among the document's non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizedLine {
    tokens: Vec<String>,
}

/// Splits an already-normalized line on runs of whitespace.
impl From<&str> for TokenizedLine {
    fn from(line: &str) -> Self {
        TokenizedLine {
            tokens: line.split_whitespace().map(str::to_owned).collect(),
        }
    }
}

impl TokenizedLine {
    #[must_use]
    pub fn tokens(&self) -> &[String] { &self.tokens }

    #[must_use]
    pub fn len(&self) -> usize { self.tokens.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Joins the tokens in `range` with single spaces.
    #[must_use]
    pub fn join_range(&self, range: Range<usize>) -> String { self.tokens[range].join(" ") }
}
