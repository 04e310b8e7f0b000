//! Lexer for the pattern language.
//!
//! Produces span-based tokens without storing text. Every token is at most
//! one escape sequence or one character long, so the grammar can decide per
//! context (inside or outside a character class) whether a token is syntax or
//! a literal.
//!
//! A lone trailing backslash is the only input logos cannot match; it is
//! reported as an `Incomplete` token so the grammar can raise a positioned
//! error.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("^")]
    Caret,

    #[token("$")]
    Dollar,

    #[token(".")]
    Dot,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("-")]
    Dash,

    /// `\xHH`
    #[regex(r"\\x[0-9a-fA-F]{2}")]
    HexEscape,

    /// `\uHHHHHH`
    #[regex(r"\\u[0-9a-fA-F]{6}")]
    UnicodeEscape,

    /// `\d`, `\w`, `\s`
    #[regex(r"\\[dws]")]
    ClassEscape,

    /// Control escapes and escaped literals.
    #[regex(r"\\[^xudws]")]
    Escape,

    /// `\x` or `\u` without enough hex digits, or a trailing backslash.
    #[regex(r"\\[xu]")]
    Incomplete,

    /// Any other single character.
    #[regex(r"[^\\()\[\]{}^$.|*+?\-]")]
    Char,
}

impl TokenKind {
    /// Whether the token is an escape sequence.
    pub fn is_escape(self) -> bool {
        matches!(
            self,
            TokenKind::HexEscape
                | TokenKind::UnicodeEscape
                | TokenKind::ClassEscape
                | TokenKind::Escape
                | TokenKind::Incomplete
        )
    }
}

/// Zero-copy token: kind + byte span, text retrieved via [`token_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes a pattern into span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Incomplete);
        tokens.push(Token::new(kind, lexer.span()));
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.clone()]
}
