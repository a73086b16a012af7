//! The `load-fragment-gperf` registry.
//!
//! Lines look like
//!
//! ```text
//! Timer.OnCalendar,  config_parse_timer,  TIMER_CALENDAR,  0
//! ```
//!
//! Only the first two fields matter: the dotted identifier and the name of
//! the C parser, which hints at the value shape.

use std::io::BufRead;

use crate::taxonomy::Taxonomy;
use crate::type_expr::TypeExpr;

use super::error::DirectiveError;
use super::identifier::{Directive, DirectiveIdentifier};

/// System tag given to every registry directive.
pub const REGISTRY_SYSTEM: &str = "core";

/// Placeholder section used by templated registry entries.
const TEMPLATE_SECTION: &str = "{{type}}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRecord {
    pub identifier: DirectiveIdentifier,
    pub hint: String,
}

/// Parses one registry line.
///
/// Returns `None` for blank lines, `#` and `/*` comments, lines with fewer
/// than two fields and identifiers without a section.
pub fn parse_registry_line(line: &str) -> Option<RegistryRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with("/*") {
        return None;
    }

    let mut fields = line.split(',');
    let name = fields.next()?.trim();
    let hint = fields.next()?.trim();
    let (section, key) = name.split_once('.')?;

    Some(RegistryRecord {
        identifier: DirectiveIdentifier::new(section, key),
        hint: hint.to_string(),
    })
}

/// Maps a parser hint to the type expression it accepts.
pub fn hint_to_type(hint: &str) -> TypeExpr {
    match hint {
        "config_parse_bool" => TypeExpr::leaf("BOOLEAN"),

        "config_parse_int"
        | "config_parse_long"
        | "config_parse_unsigned"
        | "config_parse_sec"
        | "config_parse_sec_fix_0"
        | "config_parse_job_timeout_sec"
        | "config_parse_job_running_timeout_sec"
        | "config_parse_service_timeout"
        | "config_parse_service_timeout_abort"
        | "config_parse_service_timeout_failure_mode"
        | "config_parse_concurrency_max"
        | "config_parse_iec_size"
        | "config_parse_swap_priority"
        | "config_parse_ip_tos" => TypeExpr::leaf("INTEGER"),

        "config_parse_strv"
        | "config_parse_service_sockets"
        | "config_parse_exec"
        | "config_parse_exec_preserve_mode"
        | "config_parse_socket_service"
        | "config_parse_unit_mounts_for"
        | "config_parse_fdname"
        | "config_parse_timer" => TypeExpr::repeated("STRING"),

        // config_parse_string, the unit/path printf parsers, enum-like parsers
        // such as config_parse_service_type, and anything not listed.
        _ => TypeExpr::leaf("STRING"),
    }
}

/// Reads a registry, skipping templated entries.
pub fn read_registry(
    reader: impl BufRead,
    taxonomy: &Taxonomy,
) -> Result<Vec<Directive>, DirectiveError> {
    let mut directives = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(record) = parse_registry_line(&line) else {
            continue;
        };
        if record.identifier.section() == TEMPLATE_SECTION {
            tracing::debug!(
                line = index + 1,
                key = record.identifier.key(),
                "skipping template entry"
            );
            continue;
        }

        let expr = hint_to_type(&record.hint);
        let ty = taxonomy
            .resolve(Some(&expr))
            .map_err(|source| {
                DirectiveError::Taxonomy {
                    identifier: record.identifier.to_string(),
                    source,
                }
                .at_line(index + 1)
            })?;

        directives.push(Directive::new(record.identifier, ty, REGISTRY_SYSTEM));
    }

    tracing::debug!(count = directives.len(), "read registry");
    Ok(directives)
}
