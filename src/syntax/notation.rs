use std::fmt;

use crate::syntax::tokens::{SpannedTok, Token};

/// The result of a conversion: operands and operators in postfix or prefix order.
#[derive(Debug, Clone, PartialEq)]
pub struct Notation<'a> {
    tokens: Vec<SpannedTok<'a>>,
}

impl<'a> Notation<'a> {
    pub(crate) fn new(tokens: Vec<SpannedTok<'a>>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[SpannedTok<'a>] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token<'a>> + '_ {
        self.tokens.iter().map(|tok| &tok.elem)
    }

    /// Joins the tokens with `separator`. Multi-character operands are only
    /// unambiguous in the output when the separator is not empty.
    pub fn join(&self, separator: &str) -> String {
        self.iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Notation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tok in self.iter() {
            write!(f, "{}", tok)?;
        }
        Ok(())
    }
}
