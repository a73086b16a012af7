use crate::taxonomy::TaxonomyError;
use crate::type_expr::TypeExprError;

#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    #[error("invalid directive record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid type for {identifier}: {source}")]
    TypeExpr {
        identifier: String,
        #[source]
        source: TypeExprError,
    },

    #[error("invalid type for {identifier}: {source}")]
    Taxonomy {
        identifier: String,
        #[source]
        source: TaxonomyError,
    },

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<DirectiveError>,
    },

    #[error("failed to read directives: {0}")]
    Io(#[from] std::io::Error),
}

impl DirectiveError {
    pub(super) fn at_line(self, line: usize) -> Self {
        DirectiveError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}
