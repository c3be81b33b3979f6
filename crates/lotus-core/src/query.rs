// ABOUTME: The boolean search query shared by the console panels.
// ABOUTME: Appends picked terms and splits the query into display tokens.

use std::fmt;

/// Words rendered muted in the header instead of highlighted as search terms.
const OPERATORS: &[&str] = &["and", "or", "not", "reset", "(", ")"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Operator,
    Term,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryToken<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// The single opaque query value every panel reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString(String);

impl QueryString {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn set(&mut self, query: impl Into<String>) {
        self.0 = query.into();
    }

    /// Append a term picked from the term browser, separated by a single space.
    pub fn append_term(&mut self, term: &str) {
        if self.is_empty() {
            self.0 = term.to_string();
        } else {
            self.0.push(' ');
            self.0.push_str(term);
        }
    }

    pub fn tokens(&self) -> Vec<QueryToken<'_>> {
        self.0
            .split_whitespace()
            .map(|text| {
                let kind = if OPERATORS.iter().any(|op| op.eq_ignore_ascii_case(text)) {
                    TokenKind::Operator
                } else {
                    TokenKind::Term
                };
                QueryToken { text, kind }
            })
            .collect()
    }

    /// Header text: the query itself, or a placeholder when nothing is entered.
    pub fn display(&self) -> &str {
        if self.0.trim().is_empty() {
            "(empty)"
        } else {
            &self.0
        }
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}
