//! Section codec: typed blocks to ordered unit entries.
//!
//! Every generated block implements [`UnitSection`], listing its fields with
//! the verbatim systemd key and a [`FieldValue`] whose variant was fixed when
//! the schema was generated. Encoding dispatches on that variant:
//!
//! | value       | output                                          |
//! |-------------|-------------------------------------------------|
//! | string      | one entry when non-empty                        |
//! | boolean     | one `yes` entry when true                       |
//! | sequence    | one entry per element, all with the same key    |
//! | mapping     | one `k=v` entry per pair, sorted by `k`         |
//! | unsupported | [`EncodeError::UnsupportedKind`] unless zero    |
//!
//! Zero values (empty string, `false`, empty collections, zero numbers) are
//! never written.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Display;

use indexmap::IndexMap;

use crate::unit::{Entry, SystemdUnit, SystemdUnitBuilder};
use crate::value::{FileMode, Signal, Timespan, UnitRef};

/// Literal written for a true boolean.
pub const TRUE_LITERAL: &str = "yes";

/// Literal used for a false boolean nested inside a list element.
pub const FALSE_LITERAL: &str = "no";

/// Errors raised while encoding a unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("unsupported kind {kind} for field {field} in [{section}]")]
    UnsupportedKind {
        section: &'static str,
        field: &'static str,
        kind: &'static str,
    },

    #[error("duplicate unit {0:?} defined more than once")]
    DuplicateUnit(String),
}

/// Encoding category of a field, known at schema-generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Boolean,
    Sequence,
    Mapping,
    Unsupported,
}

/// A field's value, tagged by how it encodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    String(Cow<'a, str>),
    Boolean(bool),
    /// Elements already rendered to text, in order.
    Sequence(Vec<String>),
    /// Pairs with rendered values; the encoder sorts them by key.
    Mapping(Vec<(String, String)>),
    /// A value the unit format has no encoding for.
    Unsupported { kind: &'static str, zero: bool },
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::String(_) => FieldKind::String,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Sequence(_) => FieldKind::Sequence,
            FieldValue::Mapping(_) => FieldKind::Mapping,
            FieldValue::Unsupported { .. } => FieldKind::Unsupported,
        }
    }

    /// Whether this is the representation's zero value (never set).
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::String(s) => s.is_empty(),
            FieldValue::Boolean(b) => !b,
            FieldValue::Sequence(items) => items.is_empty(),
            FieldValue::Mapping(pairs) => pairs.is_empty(),
            FieldValue::Unsupported { zero, .. } => *zero,
        }
    }
}

/// One field of a block: Rust field name, systemd key, value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub key: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, key: &'static str, value: FieldValue<'a>) -> Self {
        Self { name, key, value }
    }
}

/// A block that maps onto one `[Section]` of a unit file.
pub trait UnitSection {
    /// Section header, e.g. `Timer`.
    fn section_name(&self) -> &'static str;

    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// A complete unit type: a named value made of sections.
pub trait UnitCodec {
    /// Unit file suffix, e.g. `timer`.
    const SUFFIX: &'static str;

    fn name(&self) -> &str;

    /// Sections in output order.
    fn sections(&self) -> Vec<&dyn UnitSection>;

    fn encode(&self) -> Result<SystemdUnit, EncodeError> {
        let filename = format!("{}.{}", self.name(), Self::SUFFIX);
        encode_unit(filename, &self.sections())
    }
}

/// Encode one block into its ordered entries.
pub fn encode_section(section: &dyn UnitSection) -> Result<Vec<Entry>, EncodeError> {
    let mut entries = Vec::new();

    for field in section.fields() {
        if field.value.is_zero() {
            continue;
        }

        match field.value {
            FieldValue::String(value) => entries.push(Entry::new(field.key, value)),
            FieldValue::Boolean(_) => entries.push(Entry::new(field.key, TRUE_LITERAL)),
            FieldValue::Sequence(items) => {
                entries.extend(items.into_iter().map(|item| Entry::new(field.key, item)));
            }
            FieldValue::Mapping(mut pairs) => {
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                entries.extend(
                    pairs
                        .into_iter()
                        .map(|(k, v)| Entry::new(field.key, format!("{k}={v}"))),
                );
            }
            FieldValue::Unsupported { kind, .. } => {
                return Err(EncodeError::UnsupportedKind {
                    section: section.section_name(),
                    field: field.name,
                    kind,
                });
            }
        }
    }

    Ok(entries)
}

/// Encode blocks into a unit named `filename`.
///
/// Blocks that produce no entries are left out, so an unset `[Install]`
/// does not leave an empty header behind.
pub fn encode_unit(
    filename: impl Into<String>,
    sections: &[&dyn UnitSection],
) -> Result<SystemdUnit, EncodeError> {
    let filename = filename.into();
    let mut builder = SystemdUnitBuilder::new();

    for section in sections {
        let entries = encode_section(*section)?;
        if entries.is_empty() {
            tracing::trace!(section = section.section_name(), "skipping empty section");
            continue;
        }
        builder = builder.add_entries(section.section_name(), entries);
    }

    tracing::debug!(filename = %filename, "encoded unit");
    Ok(builder.build(filename))
}

/// Reject unit collections where two units share a name.
pub fn validate_unique_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), EncodeError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(EncodeError::DuplicateUnit(name.to_string()));
        }
    }
    Ok(())
}

/// Text form of a value inside a sequence element or mapping value.
pub trait UnitValue {
    fn render(&self) -> String;
}

impl UnitValue for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl UnitValue for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl UnitValue for bool {
    fn render(&self) -> String {
        let literal = if *self { TRUE_LITERAL } else { FALSE_LITERAL };
        literal.to_string()
    }
}

/// A nested list renders as its elements joined by spaces, the way a
/// command line is written after `ExecStart=`.
impl<T: UnitValue> UnitValue for Vec<T> {
    fn render(&self) -> String {
        self.iter().map(UnitValue::render).collect::<Vec<_>>().join(" ")
    }
}

macro_rules! unit_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl UnitValue for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

unit_value_display!(i32, i64, u32, u64, Timespan, FileMode, Signal, UnitRef);

/// Conversion used by generated [`UnitSection`] implementations.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue<'_>;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::String(Cow::Borrowed(self.as_str()))
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Boolean(*self)
    }
}

impl<T: UnitValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.iter().map(UnitValue::render).collect())
    }
}

impl<K: Display, V: UnitValue> ToFieldValue for BTreeMap<K, V> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Mapping(map_pairs(self.iter()))
    }
}

impl<K: Display, V: UnitValue, S> ToFieldValue for HashMap<K, V, S> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Mapping(map_pairs(self.iter()))
    }
}

impl<K: Display, V: UnitValue, S> ToFieldValue for IndexMap<K, V, S> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Mapping(map_pairs(self.iter()))
    }
}

fn map_pairs<'m, K, V>(iter: impl Iterator<Item = (&'m K, &'m V)>) -> Vec<(String, String)>
where
    K: Display + 'm,
    V: UnitValue + 'm,
{
    iter.map(|(k, v)| (k.to_string(), v.render())).collect()
}

macro_rules! text_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue<'_> {
                    if self.is_zero() {
                        FieldValue::String(Cow::Borrowed(""))
                    } else {
                        FieldValue::String(Cow::Owned(self.to_string()))
                    }
                }
            }
        )*
    };
}

text_field_value!(Timespan, FileMode, Signal, UnitRef);

macro_rules! unsupported_field_value {
    ($($ty:ident),* $(,)?) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Unsupported {
                        kind: stringify!($ty),
                        zero: *self == 0,
                    }
                }
            }
        )*
    };
}

unsupported_field_value!(i32, i64, u32, u64);
