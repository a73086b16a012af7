#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Systemd unit model and the codec that fills it from typed blocks.
//!
//! - [`unit`] - `Entry`, `SystemdUnit`, the builder and the text renderer
//! - [`codec`] - `UnitSection`/`UnitCodec` and the per-kind field encoding
//! - [`value`] - typed values (`Timespan`, `FileMode`, `Signal`, `UnitRef`)
//! - [`decode`] - serde adapters for values the front-end cannot read natively
//!
//! # Example
//!
//! ```
//! use unitd_unit::SystemdUnitBuilder;
//!
//! let unit = SystemdUnitBuilder::new()
//!     .add_entry("Unit", "Description", "Nightly backup")
//!     .add_entry("Timer", "OnCalendar", "daily")
//!     .build("backup.timer");
//!
//! assert_eq!(
//!     unit.render(),
//!     "[Unit]\nDescription=Nightly backup\n\n[Timer]\nOnCalendar=daily\n"
//! );
//! ```

pub mod codec;
pub mod decode;
pub mod unit;
pub mod value;

#[cfg(test)]
mod value_tests;

pub use codec::{
    EncodeError, Field, FieldKind, FieldValue, ToFieldValue, UnitCodec, UnitSection, UnitValue,
    encode_section, encode_unit, validate_unique_names,
};
pub use unit::{Entry, SystemdUnit, SystemdUnitBuilder};
pub use value::{FileMode, Signal, Timespan, UnitRef, ValueError};
