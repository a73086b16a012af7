//! JSON-lines directive feed.

use std::io::BufRead;

use serde::Deserialize;

use crate::taxonomy::Taxonomy;
use crate::type_expr::parse_type_expr;

use super::error::DirectiveError;
use super::identifier::{Directive, DirectiveIdentifier};

#[derive(Debug, Deserialize)]
struct RawDirective {
    system: String,
    section: String,
    property: String,
    #[serde(rename = "type", default)]
    ty: Option<String>,
}

/// Decodes one feed record and resolves its type.
///
/// A record without a `type` field resolves to the untyped fallback. A
/// present but blank `type` is an empty type expression and fails.
pub fn decode_directive(record: &str, taxonomy: &Taxonomy) -> Result<Directive, DirectiveError> {
    let raw: RawDirective = serde_json::from_str(record)?;
    let identifier = DirectiveIdentifier::new(raw.section, raw.property);

    let expr = raw
        .ty
        .as_deref()
        .map(parse_type_expr)
        .transpose()
        .map_err(|source| DirectiveError::TypeExpr {
            identifier: identifier.to_string(),
            source,
        })?;

    let ty = taxonomy
        .resolve(expr.as_ref())
        .map_err(|source| DirectiveError::Taxonomy {
            identifier: identifier.to_string(),
            source,
        })?;

    Ok(Directive::new(identifier, ty, raw.system))
}

/// Reads every record of a feed. Blank lines are skipped; the first bad
/// record fails the whole read with its line number.
pub fn read_directives(
    reader: impl BufRead,
    taxonomy: &Taxonomy,
) -> Result<Vec<Directive>, DirectiveError> {
    let mut directives = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let directive = decode_directive(&line, taxonomy).map_err(|e| e.at_line(index + 1))?;
        directives.push(directive);
    }

    tracing::debug!(count = directives.len(), "read directive feed");
    Ok(directives)
}
