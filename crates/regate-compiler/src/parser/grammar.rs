//! Recursive-descent grammar.
//!
//! ```text
//! regex      := alternate EOF
//! alternate  := concat ('|' concat)*
//! concat     := quantified+
//! quantified := atom ('*' | '+' | '?')?
//! atom       := literal | '.' | class | '(' alternate ')'
//! class      := '[' '^'? item+ ']'
//! ```
//!
//! Outside a class, `[ \ ^ $ . | ? * + ( )` are syntax and every other
//! character is a literal. Inside a class only `]` (after the first item),
//! `-` between two endpoints, and escapes are special.

use regate_core::{ALPHABET_SIZE, CharSet, CodepointRange};

use super::ast::Ast;
use super::error::ParseError;
use super::lexer::{Token, TokenKind, lex, token_text};
use crate::{Error, Result};

/// Default maximum group nesting depth.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Parse a pattern with the default recursion limit.
pub fn parse(source: &str) -> Result<Ast> {
    Parser::new(source).parse()
}

/// Parser state: token stream with a cursor and group depth.
pub struct Parser<'s> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    recursion_limit: u32,
}

#[derive(Debug, Clone)]
enum ClassItem {
    Char(u32, usize),
    Dash(usize),
    Set(CharSet, usize),
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Maximum group nesting depth before parsing fails.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Ast> {
        let ast = self.alternate()?;
        match self.peek() {
            None => Ok(ast),
            Some(token) if token.kind == TokenKind::ParenClose => {
                Err(ParseError::new(token.span.start, "unbalanced parenthesis").into())
            }
            Some(token) => Err(ParseError::new(token.span.start, "unexpected trailing input").into()),
        }
    }

    fn alternate(&mut self) -> Result<Ast> {
        let mut items = vec![self.concat()?];
        while self.eat(TokenKind::Pipe) {
            items.push(self.concat()?);
        }
        Ok(Ast::alternate(items))
    }

    fn concat(&mut self) -> Result<Ast> {
        let mut items = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if matches!(kind, TokenKind::Pipe | TokenKind::ParenClose) {
                break;
            }
            items.push(self.quantified()?);
        }
        if items.is_empty() {
            return Err(ParseError::new(self.offset(), "expected an expression").into());
        }
        Ok(Ast::concat(items))
    }

    fn quantified(&mut self) -> Result<Ast> {
        let atom = self.atom()?;
        self.reject_repetition()?;

        let ast = match self.peek_kind() {
            Some(TokenKind::Star) => Ast::Star(Box::new(atom)),
            Some(TokenKind::Plus) => Ast::Plus(Box::new(atom)),
            Some(TokenKind::Question) => Ast::Maybe(Box::new(atom)),
            _ => return Ok(atom),
        };
        self.bump();

        match self.peek_kind() {
            Some(TokenKind::Question) => Err(Error::UnsupportedFeature {
                position: self.offset(),
                feature: "lazy quantifier",
            }),
            Some(TokenKind::Star | TokenKind::Plus) => {
                Err(ParseError::new(self.offset(), "multiple repeat").into())
            }
            _ => {
                self.reject_repetition()?;
                Ok(ast)
            }
        }
    }

    fn atom(&mut self) -> Result<Ast> {
        let Some(token) = self.peek().cloned() else {
            return Err(ParseError::new(self.offset(), "expected an expression").into());
        };
        let start = token.span.start;

        match token.kind {
            TokenKind::ParenOpen => self.group(start),
            TokenKind::BracketOpen => self.class(start),
            TokenKind::Dot => {
                self.bump();
                Ok(Ast::Set(CharSet::full()))
            }
            TokenKind::Caret | TokenKind::Dollar => Err(Error::UnsupportedFeature {
                position: start,
                feature: "anchor",
            }),
            TokenKind::Star | TokenKind::Plus | TokenKind::Question => {
                Err(ParseError::new(start, "nothing to repeat").into())
            }
            TokenKind::Pipe | TokenKind::ParenClose => {
                Err(ParseError::new(start, "expected an expression").into())
            }
            TokenKind::ClassEscape => {
                self.bump();
                Ok(Ast::Set(self.shorthand(&token)?))
            }
            _ => {
                self.bump();
                let cp = self.literal(&token)?;
                Ok(Ast::Set(CharSet::single(cp)?))
            }
        }
    }

    fn group(&mut self, open: usize) -> Result<Ast> {
        self.bump();
        if self.peek_kind() == Some(TokenKind::Question) {
            return Err(Error::UnsupportedFeature {
                position: self.offset(),
                feature: "group modifier",
            });
        }

        self.depth += 1;
        if self.depth > self.recursion_limit {
            return Err(ParseError::new(open, "pattern nested too deeply").into());
        }
        let inner = self.alternate()?;
        self.depth -= 1;

        if !self.eat(TokenKind::ParenClose) {
            return Err(ParseError::new(open, "unterminated group").into());
        }
        Ok(inner)
    }

    fn class(&mut self, open: usize) -> Result<Ast> {
        self.bump();
        let negated = self.eat(TokenKind::Caret);

        let mut items = Vec::new();
        loop {
            let Some(token) = self.peek().cloned() else {
                return Err(ParseError::new(open, "unterminated character class").into());
            };
            self.bump();

            let start = token.span.start;
            let item = match token.kind {
                TokenKind::BracketClose if !items.is_empty() => break,
                TokenKind::Dash => ClassItem::Dash(start),
                TokenKind::ClassEscape => ClassItem::Set(self.shorthand(&token)?, start),
                _ => ClassItem::Char(self.literal(&token)?, start),
            };
            items.push(item);
        }

        let mut ranges = Vec::new();
        let mut i = 0;
        while i < items.len() {
            let is_range = i + 2 < items.len() && matches!(items[i + 1], ClassItem::Dash(_));
            if is_range {
                let (lo, at) = endpoint(&items[i])?;
                let (hi, _) = endpoint(&items[i + 2])?;
                if lo > hi {
                    return Err(ParseError::new(at, "malformed range").into());
                }
                ranges.push(CodepointRange::inclusive(lo, hi)?);
                i += 3;
                continue;
            }
            match &items[i] {
                ClassItem::Char(cp, _) => ranges.push(CodepointRange::single(*cp)?),
                ClassItem::Dash(_) => ranges.push(CodepointRange::single('-' as u32)?),
                ClassItem::Set(set, _) => ranges.extend(set.iter()),
            }
            i += 1;
        }

        let set = CharSet::from_ranges(ranges);
        Ok(Ast::Set(if negated { set.complement() } else { set.minimize() }))
    }

    /// Code point denoted by a single-character or escape token.
    fn literal(&self, token: &Token) -> Result<u32> {
        let text = token_text(self.source, token);
        let start = token.span.start;
        let cp = match token.kind {
            TokenKind::HexEscape | TokenKind::UnicodeEscape => {
                let cp = u32::from_str_radix(&text[2..], 16)
                    .map_err(|_| ParseError::new(start, "invalid escape sequence"))?;
                if cp >= ALPHABET_SIZE {
                    return Err(ParseError::new(start, "code point out of range").into());
                }
                cp
            }
            TokenKind::Escape => match text[1..].chars().next() {
                Some('a') => 0x07,
                Some('b') => 0x08,
                Some('t') => 0x09,
                Some('n') => 0x0A,
                Some('v') => 0x0B,
                Some('f') => 0x0C,
                Some('r') => 0x0D,
                Some(c) => c as u32,
                None => return Err(ParseError::new(start, "incomplete escape sequence").into()),
            },
            TokenKind::Incomplete => {
                return Err(ParseError::new(start, "incomplete escape sequence").into());
            }
            _ => match text.chars().next() {
                Some(c) => c as u32,
                None => unreachable!("tokens are never empty"),
            },
        };
        Ok(cp)
    }

    fn shorthand(&self, token: &Token) -> Result<CharSet> {
        let ranges: &[(u32, u32)] = match token_text(self.source, token) {
            r"\d" => &[(0x30, 0x3A)],
            r"\w" => &[(0x30, 0x3A), (0x41, 0x5B), (0x5F, 0x60), (0x61, 0x7B)],
            r"\s" => &[(0x09, 0x0E), (0x20, 0x21)],
            _ => unreachable!("lexer only produces \\d, \\w and \\s as class escapes"),
        };
        Ok(CharSet::new(ranges.iter().copied())?)
    }

    /// `{m}`, `{m,}`, `{,n}` or `{m,n}` directly after an atom.
    fn reject_repetition(&self) -> Result<()> {
        let Some(token) = self.peek() else {
            return Ok(());
        };
        if token.kind == TokenKind::BraceOpen && is_repetition(&self.source[token.span.start..]) {
            return Err(Error::UnsupportedFeature {
                position: token.span.start,
                feature: "bounded repetition",
            });
        }
        Ok(())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.bump();
            return true;
        }
        false
    }

    /// Byte offset of the current token, or the end of the source.
    fn offset(&self) -> usize {
        self.peek().map_or(self.source.len(), |t| t.span.start)
    }
}

fn endpoint(item: &ClassItem) -> Result<(u32, usize)> {
    match item {
        ClassItem::Char(cp, at) => Ok((*cp, *at)),
        ClassItem::Dash(at) => Ok(('-' as u32, *at)),
        ClassItem::Set(_, at) => Err(ParseError::new(*at, "malformed range").into()),
    }
}

fn is_repetition(text: &str) -> bool {
    let Some((body, _)) = text.strip_prefix('{').and_then(|rest| rest.split_once('}')) else {
        return false;
    };
    let (lo, hi) = body.split_once(',').unwrap_or((body, ""));
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    !(lo.is_empty() && hi.is_empty()) && digits(lo) && digits(hi)
}
