//! The bracketed type-description grammar attached to every directive.
//!
//! ```text
//! type         := IDENT ('[' bracket_body ']')?
//! bracket_body := '...' | type
//! IDENT        := [A-Z][A-Z_]*
//! ```
//!
//! `PATH` is a single path, `PATH [...]` a repeated one, and
//! `PATH [ARGUMENT [...]]` a path followed by repeated arguments. Whitespace
//! is insignificant.
//!
//! - [`syntax_kind`]: Logos-derived token kinds.
//! - [`lexer`]: span-based tokens, unknown characters coalesced into `Garbage`.
//! - [`parser`]: recursive descent into [`TypeExpr`].
//!
//! The grammar checks shape only. Whether the tags in a chain make sense
//! together is decided by the taxonomy.

mod ast;
mod error;
pub mod lexer;
pub mod parser;
pub mod syntax_kind;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod lexer_tests;

pub use ast::TypeExpr;
pub use error::TypeExprError;
pub use lexer::{Token, lex, token_text};
pub use parser::{parse_prefix, parse_type_expr};
pub use syntax_kind::SyntaxKind;
