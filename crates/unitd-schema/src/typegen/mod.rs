//! Rust schema generation.
//!
//! Turns merged directives into Rust source: one struct per `[Section]`
//! with serde attributes for the configuration front-end, a `UnitSection`
//! implementation carrying the verbatim systemd keys, and, for each unit
//! kind, an aggregate struct implementing `UnitCodec`.
//!
//! - [`Config`]: output knobs
//! - [`Generator`]: builds a [`SchemaModule`] and renders it
//! - [`ImportSet`]: `use` block collected from field dependencies

mod config;
mod emitter;
mod imports;
mod model;
mod render;

#[cfg(test)]
mod render_tests;

pub use config::Config;
pub use emitter::{GenerateError, Generator};
pub use imports::ImportSet;
pub use model::{AggregateDef, BlockDef, FieldDef, SchemaModule, UnsupportedField};
