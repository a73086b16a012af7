#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Schema side of unitd: from directive metadata to generated Rust types.
//!
//! - [`type_expr`] - the bracketed type grammar (`PATH [ARGUMENT [...]]`)
//! - [`taxonomy`] - type tags to Rust types and their imports
//! - [`directive`] - directive model, registry and JSON-lines feeds, merging
//! - [`typegen`] - Rust source generation for unit blocks
//!
//! # Example
//!
//! ```
//! use unitd_schema::directive::{UnitPage, read_directives};
//! use unitd_schema::taxonomy::Taxonomy;
//! use unitd_schema::typegen::{Config, Generator};
//!
//! let feed = r#"{"system":"core","section":"Timer","property":"Persistent","type":"BOOLEAN"}"#;
//! let directives = read_directives(feed.as_bytes(), Taxonomy::standard()).unwrap();
//!
//! let schema = UnitPage::new("systemd.timer").merge(&directives, "core");
//! let source = Generator::new(Config::new().header(false))
//!     .generate_unit(&schema)
//!     .unwrap();
//!
//! assert!(source.contains("pub struct TimerBlock {"));
//! assert!(source.contains("pub persistent: bool,"));
//! ```

pub mod directive;
pub mod taxonomy;
pub mod type_expr;
pub mod typegen;

#[cfg(test)]
mod taxonomy_tests;

pub use directive::{Directive, DirectiveError, DirectiveIdentifier, UnitPage, UnitSchema};
pub use taxonomy::{ResolvedType, Taxonomy, TaxonomyError};
pub use type_expr::{TypeExpr, TypeExprError, parse_type_expr};
pub use typegen::{Config, GenerateError, Generator, SchemaModule};
