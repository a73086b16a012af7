//! In-memory form of a generated module, built before any text is written.

use unitd_unit::FieldKind;

use super::imports::ImportSet;

/// One struct field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    /// Rust identifier, keyword-escaped (`r#type`)
    pub ident: String,
    /// snake_case name used by the configuration front-end
    pub config_name: String,
    /// Verbatim systemd key
    pub key: String,
    /// Rust type
    pub repr: String,
    pub kind: FieldKind,
    /// Decoded by serde directly; otherwise through the `parsed` adapter
    pub native: bool,
    /// Wrapped doc comment lines, `""` between paragraphs
    pub doc: Vec<String>,
}

/// A struct for one `[Section]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockDef {
    pub type_name: String,
    pub section: String,
    pub doc: Vec<String>,
    pub fields: Vec<FieldDef>,
}

/// The struct tying one unit kind's blocks together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateDef {
    pub type_name: String,
    /// Unit file suffix, e.g. `timer`
    pub suffix: String,
    pub doc: Vec<String>,
    /// Field name and block type of the kind-specific section, if any
    pub section: Option<(String, String)>,
}

/// A field whose kind the section codec rejects when set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedField {
    pub block: String,
    pub field: String,
    pub key: String,
    pub repr: String,
}

/// A complete generated module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaModule {
    /// Man page named in the header, `None` to omit it
    pub header: Option<String>,
    pub imports: ImportSet,
    pub unit_crate: String,
    pub blocks: Vec<BlockDef>,
    pub aggregate: Option<AggregateDef>,
}

impl SchemaModule {
    pub fn unsupported_fields(&self) -> Vec<UnsupportedField> {
        self.blocks
            .iter()
            .flat_map(|block| {
                block
                    .fields
                    .iter()
                    .filter(|f| f.kind == FieldKind::Unsupported)
                    .map(|f| UnsupportedField {
                        block: block.type_name.clone(),
                        field: f.config_name.clone(),
                        key: f.key.clone(),
                        repr: f.repr.clone(),
                    })
            })
            .collect()
    }
}
