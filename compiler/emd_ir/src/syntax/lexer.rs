//! Tokenizer for tree notation.

use logos::Logos;

use crate::Span;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r";[^\n]*")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[regex(r"[A-Za-z_][A-Za-z0-9_?\-]*")]
    Name,
}

/// Token kinds seen by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    LParen,
    RParen,
    Comma,
    Name,
    /// A character no token starts with.
    Error,
}

impl TokenKind {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Name => "primitive name",
            TokenKind::Error => "invalid character",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span,
    pub text: &'src str,
}

/// Lex `source` into tokens. Comments and whitespace are dropped.
pub(crate) fn lex(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let kind = match result {
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::Comma) => TokenKind::Comma,
            Ok(RawToken::Name) => TokenKind::Name,
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token {
            kind,
            span: Span::from_range(logos.span()),
            text: logos.slice(),
        });
    }

    tokens
}
