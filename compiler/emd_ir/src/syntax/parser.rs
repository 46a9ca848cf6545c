//! Shift-reduce parser for tree notation.
//!
//! Open child lists are kept on an explicit stack instead of the call stack,
//! so nesting depth is limited only by memory.

use super::lexer::{lex, Token, TokenKind};
use crate::{ArityTable, BuildError, NodeId, Span, Tree, TreeBuilder};

/// Error produced while reading tree notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(String),

    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("expected exactly one tree, found {0}")]
    TreeCount(usize),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl ParseError {
    fn new(kind: impl Into<ParseErrorKind>, span: Span) -> Self {
        ParseError {
            kind: kind.into(),
            span,
        }
    }
}

/// Parse every top-level tree in `source`.
pub fn parse_trees(source: &str, arities: &dyn ArityTable) -> Result<Vec<Tree>, ParseError> {
    let mut parser = Parser::new(source);
    let mut trees = Vec::new();
    while parser.peek().is_some() {
        trees.push(parser.tree(arities)?);
    }
    Ok(trees)
}

/// Parse a source that holds exactly one tree.
pub fn parse_tree(source: &str, arities: &dyn ArityTable) -> Result<Tree, ParseError> {
    let mut trees = parse_trees(source, arities)?;
    match trees.len() {
        1 => Ok(trees.swap_remove(0)),
        n => Err(ParseError::new(
            ParseErrorKind::TreeCount(n),
            Span::from_range(0..source.len()),
        )),
    }
}

/// A node whose child list is still open.
struct Frame<'src> {
    name: &'src str,
    span: Span,
    children: Vec<NodeId>,
}

struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    end: Span,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Parser {
            tokens: lex(source),
            pos: 0,
            end: Span::point(Span::from_range(0..source.len()).end),
        }
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume the next token, failing at end of input or on a lex error.
    fn next(&mut self, expected: &'static str) -> Result<Token<'src>, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEof { expected },
                self.end,
            ));
        };
        if token.kind == TokenKind::Error {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedChar(token.text.to_owned()),
                token.span,
            ));
        }
        self.pos += 1;
        Ok(token)
    }

    fn name(&mut self) -> Result<Token<'src>, ParseError> {
        let expected = TokenKind::Name.describe();
        let token = self.next(expected)?;
        if token.kind == TokenKind::Name {
            Ok(token)
        } else {
            Err(unexpected(expected, token))
        }
    }

    /// Parse one tree, building it as each child list closes.
    fn tree(&mut self, arities: &dyn ArityTable) -> Result<Tree, ParseError> {
        let mut builder = TreeBuilder::new(arities);
        let mut open: Vec<Frame<'src>> = Vec::new();

        loop {
            let name = self.name()?;
            if self.peek().map(|t| t.kind) == Some(TokenKind::LParen) {
                self.pos += 1;
                open.push(Frame {
                    name: name.text,
                    span: name.span,
                    children: Vec::new(),
                });
                continue;
            }

            let mut done = builder
                .node(name.text, &[])
                .map_err(|e| ParseError::new(e, name.span))?;

            // Attach the finished node and close every list it completes.
            loop {
                let Some(mut frame) = open.pop() else {
                    return builder
                        .finish(done)
                        .map_err(|e| ParseError::new(e, name.span));
                };
                frame.children.push(done);

                let expected = "`,` or `)`";
                let token = self.next(expected)?;
                match token.kind {
                    TokenKind::Comma => {
                        open.push(frame);
                        break;
                    }
                    TokenKind::RParen => {
                        let span = frame.span.merge(token.span);
                        done = builder
                            .node(frame.name, &frame.children)
                            .map_err(|e| ParseError::new(e, span))?;
                    }
                    _ => return Err(unexpected(expected, token)),
                }
            }
        }
    }
}

fn unexpected(expected: &'static str, found: Token<'_>) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken {
            expected,
            found: found.text.to_owned(),
        },
        found.span,
    )
}
