use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// Failure to parse a type expression.
///
/// Every variant names the offending input; all but [`Empty`](Self::Empty)
/// also carry the byte offset where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeExprError {
    #[error("empty type expression {input:?}")]
    Empty { input: String },

    #[error("unexpected character {found:?} at offset {offset} in {input:?}")]
    UnexpectedCharacter {
        input: String,
        offset: usize,
        found: String,
    },

    #[error("expected identifier at offset {offset} in {input:?}")]
    ExpectedIdent { input: String, offset: usize },

    #[error("missing closing bracket at offset {offset} in {input:?}")]
    MissingCloseBracket { input: String, offset: usize },

    #[error("unexpected trailing input at offset {offset} in {input:?}")]
    TrailingTokens { input: String, offset: usize },
}

impl TypeExprError {
    pub fn input(&self) -> &str {
        match self {
            TypeExprError::Empty { input }
            | TypeExprError::UnexpectedCharacter { input, .. }
            | TypeExprError::ExpectedIdent { input, .. }
            | TypeExprError::MissingCloseBracket { input, .. }
            | TypeExprError::TrailingTokens { input, .. } => input,
        }
    }

    pub fn offset(&self) -> Option<usize> {
        match self {
            TypeExprError::Empty { .. } => None,
            TypeExprError::UnexpectedCharacter { offset, .. }
            | TypeExprError::ExpectedIdent { offset, .. }
            | TypeExprError::MissingCloseBracket { offset, .. }
            | TypeExprError::TrailingTokens { offset, .. } => Some(*offset),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TypeExprError::Empty { .. } => "empty type expression",
            TypeExprError::UnexpectedCharacter { .. } => "unexpected character",
            TypeExprError::ExpectedIdent { .. } => "expected identifier",
            TypeExprError::MissingCloseBracket { .. } => "missing `]`",
            TypeExprError::TrailingTokens { .. } => "unexpected trailing input",
        }
    }

    /// Renders the error as an annotated snippet of the input, pointing at the
    /// offset. Falls back to the plain message when there is nothing to point at.
    pub fn render_snippet(&self) -> String {
        let input = self.input();
        let Some(offset) = self.offset() else {
            return self.to_string();
        };

        let len = match self {
            TypeExprError::UnexpectedCharacter { found, .. } => found.len().max(1),
            _ => 1,
        };
        let start = offset.min(input.len());
        let range = start..(start + len).min(input.len());

        let snippet = Snippet::source(input)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(self.label()));
        let report = vec![
            Level::ERROR
                .primary_title("invalid type expression")
                .element(snippet),
        ];

        Renderer::plain().render(&report).to_string()
    }
}
