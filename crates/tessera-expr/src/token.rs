//! Tokenization.
//!
//! The lexer walks the input string once, producing tokens tagged with
//! the byte offset where each starts. Numeric literals carry their
//! exact [`Number`] value: integers for plain and radix-prefixed
//! forms, rationals for anything with a decimal point or exponent.

use std::fmt;

use tessera_num::{Integer, Number, Rational};

use crate::error::ParseError;

/// A lexical token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A numeric literal with its exact value.
    Number(Number),
    /// A string literal, quotes stripped, escapes kept raw.
    Str(String),
    /// An identifier.
    Ident(String),
    /// Keyword `True`.
    True,
    /// Keyword `False`.
    False,
    /// Keyword `None`.
    NoneLit,
    /// Keyword `not`.
    Not,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `**`
    DoubleStar,
    /// `/`
    Slash,
    /// `//`
    DoubleSlash,
    /// `%`
    Percent,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&`
    Amp,
    /// `^`
    Caret,
    /// `|`
    Pipe,
    /// `~`
    Tilde,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `.`
    Dot,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "{n}"),
            Self::Str(s) => return write!(f, "'{s}'"),
            Self::Ident(name) => return f.write_str(name),
            Self::True => "True",
            Self::False => "False",
            Self::NoneLit => "None",
            Self::Not => "not",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::DoubleStar => "**",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Percent => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Amp => "&",
            Self::Caret => "^",
            Self::Pipe => "|",
            Self::Tilde => "~",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Dot => ".",
        };
        f.write_str(text)
    }
}

/// A token plus the byte offset where it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct SpannedToken {
    /// The token.
    pub token: Token,
    /// Byte offset of the token's first character.
    pub at: usize,
}

/// Tokenizes an expression string.
///
/// # Errors
///
/// Returns a [`ParseError`] for characters outside the grammar,
/// malformed numeric literals, and unterminated strings.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, ParseError> {
    let mut lexer = Lexer { src: input, pos: 0 };
    let mut out = Vec::new();
    while let Some(spanned) = lexer.next_token()? {
        out.push(spanned);
    }
    Ok(out)
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl Lexer<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut it = self.src[self.pos..].chars();
        it.next()?;
        it.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn next_token(&mut self) -> Result<Option<SpannedToken>, ParseError> {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
        let at = self.pos;
        let Some(c) = self.peek() else {
            return Ok(None);
        };
        let token = match c {
            '0'..='9' => self.lex_number(at)?,
            '.' => {
                if matches!(self.peek_next(), Some(d) if d.is_ascii_digit()) {
                    self.lex_number(at)?
                } else {
                    self.bump();
                    Token::Dot
                }
            }
            '\'' | '"' => {
                self.bump();
                self.lex_string(at, c)?
            }
            '_' => self.lex_ident(),
            c if c.is_ascii_alphabetic() => self.lex_ident(),
            '+' => {
                self.bump();
                Token::Plus
            }
            '-' => {
                self.bump();
                Token::Minus
            }
            '*' => {
                self.bump();
                if self.eat('*') {
                    Token::DoubleStar
                } else {
                    Token::Star
                }
            }
            '/' => {
                self.bump();
                if self.eat('/') {
                    Token::DoubleSlash
                } else {
                    Token::Slash
                }
            }
            '%' => {
                self.bump();
                Token::Percent
            }
            '<' => {
                self.bump();
                if self.eat('<') {
                    Token::Shl
                } else {
                    return Err(ParseError::UnexpectedChar { ch: '<', at });
                }
            }
            '>' => {
                self.bump();
                if self.eat('>') {
                    Token::Shr
                } else {
                    return Err(ParseError::UnexpectedChar { ch: '>', at });
                }
            }
            '&' => {
                self.bump();
                Token::Amp
            }
            '^' => {
                self.bump();
                Token::Caret
            }
            '|' => {
                self.bump();
                Token::Pipe
            }
            '~' => {
                self.bump();
                Token::Tilde
            }
            '(' => {
                self.bump();
                Token::LParen
            }
            ')' => {
                self.bump();
                Token::RParen
            }
            '[' => {
                self.bump();
                Token::LBracket
            }
            ']' => {
                self.bump();
                Token::RBracket
            }
            ',' => {
                self.bump();
                Token::Comma
            }
            other => return Err(ParseError::UnexpectedChar { ch: other, at }),
        };
        Ok(Some(SpannedToken { token, at }))
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c == '_' || c.is_ascii_alphanumeric()) {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "True" => Token::True,
            "False" => Token::False,
            "None" => Token::NoneLit,
            "not" => Token::Not,
            name => Token::Ident(name.to_owned()),
        }
    }

    fn lex_string(&mut self, at: usize, quote: char) -> Result<Token, ParseError> {
        let mut content = String::new();
        loop {
            match self.bump() {
                None => return Err(ParseError::UnterminatedString { at }),
                Some('\\') => match self.bump() {
                    None => return Err(ParseError::UnterminatedString { at }),
                    Some(escaped) => {
                        content.push('\\');
                        content.push(escaped);
                    }
                },
                Some(c) if c == quote => break,
                Some(c) => content.push(c),
            }
        }
        Ok(Token::Str(content))
    }

    fn lex_number(&mut self, at: usize) -> Result<Token, ParseError> {
        if self.peek() == Some('0') {
            let radix = match self.peek_next() {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.bump();
                self.bump();
                return self.lex_radix_digits(at, radix);
            }
        }

        let start = self.pos;
        let mut is_decimal = false;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        if self.peek() == Some('.') {
            is_decimal = true;
            self.bump();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            is_decimal = true;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            let exp_start = self.pos;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
            if self.pos == exp_start {
                return Err(ParseError::MalformedNumber { at });
            }
        }

        let text = &self.src[start..self.pos];
        if is_decimal {
            let value =
                Rational::from_decimal_str(text).ok_or(ParseError::MalformedNumber { at })?;
            Ok(Token::Number(Number::from(value)))
        } else {
            // Integer literals with leading zeros are ambiguous with
            // octal notation and are rejected; all-zero text is fine.
            if text.len() > 1 && text.starts_with('0') && text.bytes().any(|b| b != b'0') {
                return Err(ParseError::MalformedNumber { at });
            }
            let value =
                Integer::from_str_radix(text, 10).map_err(|_| ParseError::MalformedNumber { at })?;
            Ok(Token::Number(Number::from(value)))
        }
    }

    fn lex_radix_digits(&mut self, at: usize, radix: u32) -> Result<Token, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_digit(radix)) {
            self.bump();
        }
        let digits = &self.src[start..self.pos];
        if digits.is_empty() {
            return Err(ParseError::MalformedNumber { at });
        }
        let value =
            Integer::from_str_radix(digits, radix).map_err(|_| ParseError::MalformedNumber { at })?;
        Ok(Token::Number(Number::from(value)))
    }
}
