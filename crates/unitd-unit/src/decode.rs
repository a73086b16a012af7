//! Serde helpers for fields that the configuration front-end cannot decode
//! natively.
//!
//! Generated schemas mark such fields with
//! `#[serde(deserialize_with = "unitd_unit::decode::parsed")]`. The raw value is
//! read as a string, or a (nested) list of strings, and each leaf is parsed
//! with the target type's `FromStr`.

use serde::de::{Deserialize, Deserializer, Error as _};

use crate::value::{FileMode, Signal, Timespan, UnitRef, ValueError};

/// Untyped configuration value: a string or a list of values.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum Raw {
    Text(String),
    List(Vec<Raw>),
}

impl Raw {
    fn describe(&self) -> &'static str {
        match self {
            Raw::Text(_) => "a string",
            Raw::List(_) => "a list",
        }
    }
}

/// Types that can be built from a [`Raw`] value.
pub trait Parsed: Sized {
    fn from_raw(raw: Raw) -> Result<Self, ValueError>;
}

macro_rules! parsed_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Parsed for $ty {
                fn from_raw(raw: Raw) -> Result<Self, ValueError> {
                    match raw {
                        Raw::Text(text) => text.parse(),
                        other => Err(ValueError::Shape {
                            expected: "a string",
                            found: other.describe(),
                        }),
                    }
                }
            }
        )*
    };
}

parsed_from_str!(Timespan, FileMode, Signal, UnitRef);

impl<T: Parsed> Parsed for Vec<T> {
    fn from_raw(raw: Raw) -> Result<Self, ValueError> {
        match raw {
            Raw::List(items) => items.into_iter().map(T::from_raw).collect(),
            other => Err(ValueError::Shape {
                expected: "a list",
                found: other.describe(),
            }),
        }
    }
}

/// `deserialize_with` adapter for [`Parsed`] fields.
pub fn parsed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Parsed,
{
    let raw = Raw::deserialize(deserializer)?;
    T::from_raw(raw).map_err(D::Error::custom)
}
