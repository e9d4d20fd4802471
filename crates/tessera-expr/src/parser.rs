//! Recursive-descent parsing.
//!
//! One function per precedence level, loosest first. Binary levels
//! iterate, so only nesting constructs recurse; [`MAX_DEPTH`] bounds
//! that recursion and keeps adversarial inputs like a thousand open
//! parentheses from exhausting the stack.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::ParseError;
use crate::token::{tokenize, SpannedToken, Token};

/// Maximum nesting depth of parenthesized groups, brackets, calls,
/// and unary chains.
pub const MAX_DEPTH: usize = 256;

/// Maximum token count of one expression. Flat operator chains like
/// `1+1+1+...` nest no parentheses but still build a tree as deep as
/// the chain is long, and whoever walks that tree recurses per level.
pub const MAX_TOKENS: usize = 10_000;

/// Parses an expression string into an [`Expr`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the input does not lex, does not match
/// the grammar, nests deeper than [`MAX_DEPTH`], or has more than
/// [`MAX_TOKENS`] tokens.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::TooLong);
    }
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.parse_tuple()?;
    parser.expect_end()?;
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [SpannedToken],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn advance(&mut self) -> Option<&'a SpannedToken> {
        let spanned = self.tokens.get(self.pos);
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.pos < self.tokens.len() {
            Err(self.unexpected())
        } else {
            Ok(())
        }
    }

    fn unexpected(&self) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(s) => ParseError::UnexpectedToken {
                found: s.token.to_string(),
                at: s.at,
            },
            None => ParseError::UnexpectedEnd,
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            Err(ParseError::NestedTooDeep)
        } else {
            Ok(())
        }
    }

    /// `a, b, c` with an optional trailing comma. A single element
    /// without a comma is not a tuple.
    fn parse_tuple(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_not()?;
        if self.peek() != Some(&Token::Comma) {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.eat(&Token::Comma) {
            if self.at_tuple_end() {
                break;
            }
            items.push(self.parse_not()?);
        }
        Ok(Expr::Tuple(items))
    }

    fn at_tuple_end(&self) -> bool {
        matches!(self.peek(), None | Some(Token::RParen | Token::RBracket))
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;
        let expr = if self.eat(&Token::Not) {
            Expr::unary(UnaryOp::Not, self.parse_not()?)
        } else {
            self.parse_bit_or()?
        };
        self.depth -= 1;
        Ok(expr)
    }

    fn parse_bit_or(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_bit_xor()?;
        while self.eat(&Token::Pipe) {
            let rhs = self.parse_bit_xor()?;
            lhs = Expr::binary(BinaryOp::BitOr, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_bit_xor(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_bit_and()?;
        while self.eat(&Token::Caret) {
            let rhs = self.parse_bit_and()?;
            lhs = Expr::binary(BinaryOp::BitXor, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_bit_and(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_shift()?;
        while self.eat(&Token::Amp) {
            let rhs = self.parse_shift()?;
            lhs = Expr::binary(BinaryOp::BitAnd, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_shift(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_additive()?;
        loop {
            let op = match self.peek() {
                Some(Token::Shl) => BinaryOp::Shl,
                Some(Token::Shr) => BinaryOp::Shr,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::DoubleSlash) => BinaryOp::FloorDiv,
                Some(Token::Percent) => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;
        let op = match self.peek() {
            Some(Token::Minus) => Some(UnaryOp::Neg),
            Some(Token::Plus) => Some(UnaryOp::Pos),
            Some(Token::Tilde) => Some(UnaryOp::Invert),
            _ => None,
        };
        let expr = match op {
            Some(op) => {
                self.advance();
                Expr::unary(op, self.parse_unary()?)
            }
            None => self.parse_power()?,
        };
        self.depth -= 1;
        Ok(expr)
    }

    /// `**` is right-associative and its right side re-enters the
    /// unary level, so `-2**2` is `-(2**2)` while `2**-1` is legal.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_postfix()?;
        if self.eat(&Token::DoubleStar) {
            let exponent = self.parse_unary()?;
            Ok(Expr::binary(BinaryOp::Pow, base, exponent))
        } else {
            Ok(base)
        }
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.eat(&Token::Dot) {
                let name = match self.peek() {
                    Some(Token::Ident(name)) => name.clone(),
                    _ => return Err(self.unexpected()),
                };
                self.advance();
                expr = Expr::Attribute {
                    object: Box::new(expr),
                    name,
                };
            } else if self.eat(&Token::LParen) {
                let args = self.parse_call_args()?;
                expr = Expr::Call {
                    callee: Box::new(expr),
                    args,
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.eat(&Token::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_not()?);
            if self.eat(&Token::Comma) {
                if self.eat(&Token::RParen) {
                    break;
                }
            } else {
                self.expect(&Token::RParen)?;
                break;
            }
        }
        Ok(args)
    }

    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let mut items = Vec::new();
        if self.eat(&Token::RBracket) {
            return Ok(Expr::List(items));
        }
        loop {
            items.push(self.parse_not()?);
            if self.eat(&Token::Comma) {
                if self.eat(&Token::RBracket) {
                    break;
                }
            } else {
                self.expect(&Token::RBracket)?;
                break;
            }
        }
        Ok(Expr::List(items))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(spanned) = self.advance() else {
            return Err(ParseError::UnexpectedEnd);
        };
        match &spanned.token {
            Token::Number(n) => Ok(Expr::Literal(n.clone())),
            Token::Str(s) => Ok(Expr::Str(s.clone())),
            Token::True => Ok(Expr::Bool(true)),
            Token::False => Ok(Expr::Bool(false)),
            Token::NoneLit => Ok(Expr::NoneLit),
            Token::Ident(name) => Ok(Expr::Name(name.clone())),
            Token::LParen => {
                if self.eat(&Token::RParen) {
                    return Ok(Expr::Tuple(Vec::new()));
                }
                let inner = self.parse_tuple()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Token::LBracket => self.parse_list(),
            _ => Err(ParseError::UnexpectedToken {
                found: spanned.token.to_string(),
                at: spanned.at,
            }),
        }
    }
}
