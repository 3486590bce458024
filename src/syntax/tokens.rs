use std::fmt;

pub use crate::{
    errors::err::{Error, SpannedErr},
    source_pos::{Span, Spanned},
    syntax::operators::{Operator, OPERATOR_TABLE},
};

pub type SpannedTok<'a> = Spanned<Token<'a>>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token<'a> {
    Op(Operator),

    // Operands are never evaluated by the converter, so numbers stay as the text they were written as
    Num(&'a str),

    Ident(&'a str),

    Delimiter(Delimiter),
}

impl<'a> Token<'a> {
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Num(_) | Token::Ident(_))
    }

    /// The same token as seen in a right-to-left reading of the expression.
    pub fn mirrored(self) -> Self {
        match self {
            Token::Delimiter(d) => Token::Delimiter(d.mirrored()),
            tok => tok,
        }
    }
}

impl<'a> TryFrom<&'a str> for Token<'a> {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(match value {
            "(" => Token::Delimiter(Delimiter::LParen),
            ")" => Token::Delimiter(Delimiter::RParen),
            _ => match OPERATOR_TABLE.get(value) {
                Some(op) => Token::Op(*op),
                None => return Err(()),
            },
        })
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Op(op) => f.write_str(op.sym),
            Token::Num(s) | Token::Ident(s) => f.write_str(s),
            Token::Delimiter(d) => write!(f, "{}", d.as_char()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delimiter {
    LParen,
    RParen,
}

impl Delimiter {
    pub fn mirrored(self) -> Self {
        match self {
            Delimiter::LParen => Delimiter::RParen,
            Delimiter::RParen => Delimiter::LParen,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::LParen => '(',
            Delimiter::RParen => ')',
        }
    }
}
