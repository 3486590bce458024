//! Infix to postfix and prefix conversion.
//!
//! Both conversions run the same shunting-yard engine. Prefix conversion feeds it the token stream
//! read right to left with every parenthesis swapped, runs it with each operator's associativity
//! flipped, and reverses what comes out. Without the flip, `A-B-C` would come back as `-A-BC`
//! and `A^B^C` as `^^ABC`.

use crate::{
    errors::err::{ConvertResult, Error, ErrorInfo},
    source_pos::Span,
    syntax::{
        lexer::Lexer,
        notation::Notation,
        tokens::{Delimiter, Spanned, SpannedTok, Token},
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    /// Tokens in source order.
    Forward,
    /// Tokens in reverse source order, parentheses swapped.
    Mirrored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Expect {
    Operand,
    Operator,
}

pub fn infix_to_postfix(source: &str) -> ConvertResult<Notation<'_>> {
    let tokens = Lexer::new(source).tokenize()?;
    let output = ShuntingYard::new(Direction::Forward).run(tokens)?;
    let notation = Notation::new(output);
    tracing::debug!(source, postfix = %notation, "converted infix expression");
    Ok(notation)
}

pub fn infix_to_prefix(source: &str) -> ConvertResult<Notation<'_>> {
    let tokens = Lexer::new(source).tokenize()?;
    let mirrored = tokens.into_iter().rev().map(|Spanned { elem, span }| Spanned {
        elem: elem.mirrored(),
        span,
    });
    let mut output = ShuntingYard::new(Direction::Mirrored).run(mirrored)?;
    // the output never holds parentheses, so reversing it is all that is left to undo
    output.reverse();
    let notation = Notation::new(output);
    tracing::debug!(source, prefix = %notation, "converted infix expression");
    Ok(notation)
}

struct ShuntingYard<'a> {
    direction: Direction,
    output: Vec<SpannedTok<'a>>,
    stack: Vec<SpannedTok<'a>>,
    expect: Expect,
    last: Option<SpannedTok<'a>>,
}

impl<'a> ShuntingYard<'a> {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            output: vec![],
            stack: vec![],
            expect: Expect::Operand,
            last: None,
        }
    }

    fn run(
        mut self,
        tokens: impl IntoIterator<Item = SpannedTok<'a>>,
    ) -> ConvertResult<Vec<SpannedTok<'a>>> {
        for tok in tokens {
            self.push(tok.clone())?;
            self.last = Some(tok);
        }
        self.finish()
    }

    fn push(&mut self, tok: SpannedTok<'a>) -> ConvertResult<()> {
        match tok.elem {
            Token::Num(_) | Token::Ident(_) => {
                if self.expect == Expect::Operator {
                    return Err(ErrorInfo::new(
                        Error::MissingOperator(tok.elem.to_string()),
                        tok.span,
                    ));
                }
                self.output.push(tok);
                self.expect = Expect::Operator;
            }
            Token::Delimiter(Delimiter::LParen) => {
                if self.expect == Expect::Operator {
                    let paren = self.source_char(Delimiter::LParen);
                    return Err(ErrorInfo::new(
                        Error::MissingOperator(paren.to_string()),
                        tok.span,
                    ));
                }
                self.stack.push(tok);
            }
            Token::Delimiter(Delimiter::RParen) => {
                if self.expect == Expect::Operand {
                    return Err(self.missing_operand_before(tok));
                }
                self.close_group(tok)?;
            }
            Token::Op(op) => {
                if self.expect == Expect::Operand {
                    return Err(ErrorInfo::new(Error::TrailingOperator(op.sym), tok.span));
                }
                while let Some(Spanned {
                    elem: Token::Op(top),
                    ..
                }) = self.stack.last()
                {
                    if !top.has_bigger_prec(&op, self.direction) {
                        break;
                    }
                    self.pop_to_output();
                }
                self.stack.push(tok);
                self.expect = Expect::Operand;
            }
        }
        Ok(())
    }

    fn close_group(&mut self, rparen: SpannedTok<'a>) -> ConvertResult<()> {
        loop {
            match self.stack.pop() {
                Some(Spanned {
                    elem: Token::Delimiter(Delimiter::LParen),
                    ..
                }) => return Ok(()),
                Some(tok) => self.output.push(tok),
                None => return Err(self.unmatched(Delimiter::RParen, rparen.span)),
            }
        }
    }

    /// A `)` arrived while an operand was still owed.
    fn missing_operand_before(&self, rparen: SpannedTok<'a>) -> ErrorInfo {
        match &self.last {
            Some(Spanned {
                elem: Token::Op(op),
                span,
            }) => ErrorInfo::new(Error::TrailingOperator(op.sym), span.clone()),
            Some(Spanned {
                elem: Token::Delimiter(Delimiter::LParen),
                span,
            }) => ErrorInfo::new(Error::EmptyParentheses, covering(span, &rparen.span)),
            _ => self.unmatched(Delimiter::RParen, rparen.span),
        }
    }

    fn finish(mut self) -> ConvertResult<Vec<SpannedTok<'a>>> {
        match (&self.last, self.expect) {
            (None, _) => return Err(ErrorInfo::new(Error::EmptyExpression, 0..0)),
            (
                Some(Spanned {
                    elem: Token::Op(op),
                    span,
                }),
                Expect::Operand,
            ) => return Err(ErrorInfo::new(Error::TrailingOperator(op.sym), span.clone())),
            _ => (),
        }
        while let Some(tok) = self.stack.pop() {
            if let Token::Delimiter(d) = tok.elem {
                return Err(self.unmatched(d, tok.span));
            }
            self.output.push(tok);
        }
        Ok(self.output)
    }

    fn pop_to_output(&mut self) {
        if let Some(tok) = self.stack.pop() {
            self.output.push(tok);
        }
    }

    fn unmatched(&self, delimiter: Delimiter, span: Span) -> ErrorInfo {
        ErrorInfo::new(Error::UnmatchedParenthesis(self.source_char(delimiter)), span)
    }

    /// The parenthesis as it was written, whichever way the engine is reading.
    fn source_char(&self, delimiter: Delimiter) -> char {
        match self.direction {
            Direction::Forward => delimiter.as_char(),
            Direction::Mirrored => delimiter.mirrored().as_char(),
        }
    }
}

fn covering(a: &Span, b: &Span) -> Span {
    a.start.min(b.start)..a.end.max(b.end)
}
