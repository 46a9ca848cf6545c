//! Prefix notation for GP trees.
//!
//! ```text
//! ; closest unclaimed water patch to the farms
//! closest-water-patch(patches-with-water, farms)
//! ```
//!
//! A name followed by a parenthesized, comma-separated child list; terminals
//! are written as a bare name. Names follow NetLogo conventions, so `-` and
//! `?` are allowed after the first character. `;` comments run to the end of
//! the line. A source may hold any number of top-level trees.

mod lexer;
mod parser;

pub use parser::{parse_tree, parse_trees, ParseError, ParseErrorKind};
