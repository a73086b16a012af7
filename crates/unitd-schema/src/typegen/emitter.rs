//! Builds [`SchemaModule`]s from merged directives.

use std::collections::HashMap;

use unitd_core::{escape_ident, to_pascal_case, to_snake_case, wrap_comment};
use unitd_unit::FieldKind;

use crate::directive::{Descriptions, Directive, UnitSchema, merge_section};

use super::Config;
use super::imports::ImportSet;
use super::model::{AggregateDef, BlockDef, FieldDef, SchemaModule};

/// Path the taxonomy uses for value types; rewritten to [`Config::unit_crate`].
const DEFAULT_UNIT_CRATE: &str = "unitd_unit";

/// Man page describing the `[Unit]` and `[Install]` sections.
const COMMON_PAGE: &str = "systemd.unit";

const COMMON_SECTIONS: [&str; 2] = ["Unit", "Install"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("[{section}] keys {first} and {second} both map to field {field}")]
    DuplicateField {
        section: String,
        field: String,
        first: String,
        second: String,
    },

    #[error("unit name is empty")]
    EmptyUnitName,
}

/// Rust schema generator.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Source for the shared `UnitBlock` and `InstallBlock`.
    pub fn generate_common(
        &self,
        directives: &[Directive],
        descriptions: &Descriptions,
    ) -> Result<String, GenerateError> {
        Ok(self.module_for_common(directives, descriptions)?.render())
    }

    /// Source for one unit kind: its section block, if any, and the aggregate.
    pub fn generate_unit(&self, schema: &UnitSchema) -> Result<String, GenerateError> {
        Ok(self.module_for_unit(schema)?.render())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn module_for_common(
        &self,
        directives: &[Directive],
        descriptions: &Descriptions,
    ) -> Result<SchemaModule, GenerateError> {
        let mut imports = self.base_imports();
        let mut blocks = Vec::new();

        for section in COMMON_SECTIONS {
            let merged = merge_section(directives, section, &self.config.system, descriptions);
            blocks.push(self.block(section, Vec::new(), &merged, &mut imports)?);
        }

        Ok(self.module(COMMON_PAGE, imports, blocks, None))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(unit = %schema.name))]
    pub fn module_for_unit(&self, schema: &UnitSchema) -> Result<SchemaModule, GenerateError> {
        let name = schema.name.trim();
        if name.is_empty() {
            return Err(GenerateError::EmptyUnitName);
        }

        let pascal = to_pascal_case(name);
        let options: Vec<Directive> = schema
            .options
            .iter()
            .filter(|d| d.system().eq_ignore_ascii_case(&self.config.system))
            .cloned()
            .collect();

        let mut imports = ImportSet::new();
        imports.add("serde::Deserialize");
        imports.add(format!("{}::UnitCodec", self.config.unit_crate));
        imports.add(format!("{}::UnitSection", self.config.unit_crate));
        for block in COMMON_SECTIONS {
            imports.add(format!(
                "{}::{}Block",
                self.config.common_module,
                to_pascal_case(block)
            ));
        }

        let mut blocks = Vec::new();
        let aggregate_doc;
        let section;

        if options.is_empty() {
            aggregate_doc = self.unit_doc(
                &[
                    format!("{pascal} represents the {pascal} configuration file of a systemd unit."),
                    format!("A separate [{pascal}] section does not exist."),
                ],
                &schema.description,
            );
            section = None;
        } else {
            imports.merge(&self.base_imports());
            let doc = self.unit_doc(
                &[format!("{pascal}Block represents the [{pascal}] section of a systemd unit.")],
                &schema.description,
            );
            let block = self.block(&pascal, doc, &options, &mut imports)?;
            aggregate_doc = vec![format!("A complete `.{name}` unit.")];
            section = Some((escape_ident(&to_snake_case(&pascal)), block.type_name.clone()));
            blocks.push(block);
        }

        let aggregate = AggregateDef {
            type_name: escape_ident(&pascal),
            suffix: name.to_string(),
            doc: aggregate_doc,
            section,
        };

        let page = schema.title.trim();
        let page = if page.is_empty() {
            format!("systemd.{name}")
        } else {
            page.to_string()
        };

        Ok(self.module(&page, imports, blocks, Some(aggregate)))
    }

    fn module(
        &self,
        page: &str,
        imports: ImportSet,
        blocks: Vec<BlockDef>,
        aggregate: Option<AggregateDef>,
    ) -> SchemaModule {
        SchemaModule {
            header: self.config.header.then(|| page.to_string()),
            imports,
            unit_crate: self.config.unit_crate.clone(),
            blocks,
            aggregate,
        }
    }

    fn base_imports(&self) -> ImportSet {
        let krate = &self.config.unit_crate;
        [
            "serde::Deserialize".to_string(),
            format!("{krate}::Field"),
            format!("{krate}::ToFieldValue"),
            format!("{krate}::UnitSection"),
        ]
        .into_iter()
        .collect()
    }

    fn block(
        &self,
        section: &str,
        doc: Vec<String>,
        directives: &[Directive],
        imports: &mut ImportSet,
    ) -> Result<BlockDef, GenerateError> {
        let section = to_pascal_case(section);
        let type_name = format!("{section}Block");

        let mut sorted: Vec<&Directive> = directives.iter().collect();
        sorted.sort_by(|a, b| a.key().cmp(b.key()));

        let mut taken: HashMap<String, &str> = HashMap::new();
        let mut fields = Vec::with_capacity(sorted.len());

        for directive in sorted {
            let field = self.field(directive);

            if let Some(first) = taken.insert(field.ident.clone(), directive.key()) {
                return Err(GenerateError::DuplicateField {
                    section,
                    field: field.ident,
                    first: first.to_string(),
                    second: directive.key().to_string(),
                });
            }

            if field.kind == FieldKind::Unsupported {
                tracing::warn!(
                    block = %type_name,
                    key = %field.key,
                    repr = %field.repr,
                    "field type has no unit file encoding"
                );
            }

            imports.extend(directive.dependencies().iter().map(|d| self.dependency_path(d)));
            fields.push(field);
        }

        tracing::debug!(block = %type_name, fields = fields.len(), "built block");
        Ok(BlockDef {
            type_name,
            section,
            doc,
            fields,
        })
    }

    fn field(&self, directive: &Directive) -> FieldDef {
        let config_name = to_snake_case(directive.key());
        let ident: String = config_name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();

        FieldDef {
            ident: escape_ident(&ident),
            config_name,
            key: directive.key().to_string(),
            repr: directive.ty().repr(),
            kind: directive.ty().field_kind(),
            native: directive.is_native(),
            doc: self.doc_lines(directive.description()),
        }
    }

    fn dependency_path(&self, path: &str) -> String {
        match path.strip_prefix(DEFAULT_UNIT_CRATE) {
            Some(rest) if rest.starts_with("::") => format!("{}{rest}", self.config.unit_crate),
            _ => path.to_string(),
        }
    }

    /// Unit-level doc; nothing at all without a description.
    fn unit_doc(&self, intro: &[String], description: &str) -> Vec<String> {
        let body = self.doc_lines(description);
        if body.is_empty() {
            return Vec::new();
        }

        let mut lines = intro.to_vec();
        lines.push(String::new());
        lines.extend(body);
        lines
    }

    /// Wraps each paragraph of `text`, separating paragraphs with `""`.
    fn doc_lines(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split("\n\n") {
            let paragraph = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
            if paragraph.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.extend(wrap_comment(&paragraph, self.config.wrap_width));
        }
        lines
    }
}
