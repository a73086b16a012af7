//! Directive model and the feeds that produce it.
//!
//! Directives arrive from two sources:
//! - [`registry`]: the `load-fragment-gperf` table, one `Section.Key, parser_hint, ...`
//!   line per option, typed through a fixed hint table.
//! - [`feed`]: JSON lines `{system, section, property, type}` whose type is a
//!   type expression resolved on the spot.
//!
//! Option descriptions come from the unit's documentation page ([`UnitPage`])
//! and are attached by [`merge_section`].

mod error;
mod feed;
mod identifier;
mod merge;
mod page;
mod registry;

#[cfg(test)]
mod identifier_tests;

pub use error::DirectiveError;
pub use feed::{decode_directive, read_directives};
pub use identifier::{Directive, DirectiveIdentifier};
pub use merge::{Descriptions, merge_section};
pub use page::{UnitPage, UnitSchema};
pub use registry::{
    REGISTRY_SYSTEM, RegistryRecord, hint_to_type, parse_registry_line, read_registry,
};
