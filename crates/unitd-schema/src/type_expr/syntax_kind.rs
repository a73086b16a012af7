//! Token kinds of the type grammar.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum SyntaxKind {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    /// Repetition marker inside brackets: `PATH [...]`
    #[token("...")]
    Ellipsis,

    /// Type tag such as `PATH` or `SERVICE_RESTART`
    #[regex(r"[A-Z][A-Z_]*")]
    Ident,

    /// Run of characters the lexer does not recognize, coalesced by [`super::lex`].
    Garbage,
}

impl SyntaxKind {
    /// Human-readable name for error labels.
    pub fn describe(self) -> &'static str {
        match self {
            SyntaxKind::BracketOpen => "`[`",
            SyntaxKind::BracketClose => "`]`",
            SyntaxKind::Ellipsis => "`...`",
            SyntaxKind::Ident => "identifier",
            SyntaxKind::Garbage => "unexpected characters",
        }
    }
}
