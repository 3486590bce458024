use std::{iter::Peekable, str::CharIndices};

use crate::{
    errors::err::ConvertResult,
    syntax::tokens::{Error, Spanned, SpannedErr, SpannedTok, Token},
};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

macro_rules! many {
    ($name: ident, $predicate: expr, $token: path) => {
        pub fn $name(&mut self, start: usize) -> SpannedTok<'a> {
            while self.next_if($predicate).is_some() {}
            let span = start..self.offset();
            Spanned {
                elem: $token(&self.source[span.clone()]),
                span,
            }
        }
    };
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    pub fn tokenize(mut self) -> ConvertResult<Vec<SpannedTok<'a>>> {
        let mut tokens = vec![];
        while let Some((pos, char)) = self.next() {
            match char {
                c if c.is_whitespace() => (),
                c if c.is_ascii_digit() => tokens.push(self.num(pos)),
                c if c.is_alphanumeric() => tokens.push(self.ident(pos)),
                c => tokens.push(self.symbol(pos, c)?),
            }
        }
        tracing::trace!(count = tokens.len(), "tokenized expression");
        Ok(tokens)
    }

    fn symbol(&mut self, start: usize, c: char) -> ConvertResult<SpannedTok<'a>> {
        let span = start..start + c.len_utf8();
        match Token::try_from(&self.source[span.clone()]) {
            Ok(elem) => Ok(Spanned { elem, span }),
            Err(()) => Err(SpannedErr {
                elem: Error::UnknownSymbol(c),
                span,
            }
            .into()),
        }
    }

    many!(num, |c| c.is_ascii_digit(), Token::Num);
    many!(ident, |c| c.is_alphanumeric(), Token::Ident);

    pub fn next_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<(usize, char)> {
        if predicate(self.peek()?.1) {
            return self.next();
        }
        None
    }

    fn offset(&mut self) -> usize {
        let len = self.source.len();
        self.peek().map_or(len, |(pos, _)| *pos)
    }

    fn peek(&mut self) -> Option<&(usize, char)> {
        self.chars.peek()
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, char);
    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}
