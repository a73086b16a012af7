//! Rust source rendering.

use super::model::{AggregateDef, BlockDef, SchemaModule};

const DERIVES: &str = "#[derive(Debug, Clone, Default, PartialEq, Deserialize)]\n";

impl SchemaModule {
    /// Renders the module as Rust source ending in exactly one newline.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(page) = &self.header {
            out.push_str(&format!(
                "// @generated from the {page} man page of systemd. Do not edit.\n\n"
            ));
        }

        if !self.imports.is_empty() {
            out.push_str(&self.imports.render());
            out.push('\n');
        }

        for block in &self.blocks {
            self.render_block(&mut out, block);
        }

        if let Some(aggregate) = &self.aggregate {
            render_aggregate(&mut out, aggregate);
        }

        out.truncate(out.trim_end().len());
        out.push('\n');
        out
    }

    fn render_block(&self, out: &mut String, block: &BlockDef) {
        render_doc(out, &block.doc, "");
        out.push_str(DERIVES);
        out.push_str(&format!("pub struct {} {{\n", block.type_name));
        for field in &block.fields {
            render_doc(out, &field.doc, "    ");
            if field.native {
                out.push_str(&format!(
                    "    #[serde(rename = {:?}, default)]\n",
                    field.config_name
                ));
            } else {
                out.push_str(&format!(
                    "    #[serde(rename = {:?}, default, deserialize_with = \"{}::decode::parsed\")]\n",
                    field.config_name, self.unit_crate
                ));
            }
            out.push_str(&format!("    pub {}: {},\n", field.ident, field.repr));
        }
        out.push_str("}\n\n");

        out.push_str(&format!("impl UnitSection for {} {{\n", block.type_name));
        out.push_str("    fn section_name(&self) -> &'static str {\n");
        out.push_str(&format!("        {:?}\n", block.section));
        out.push_str("    }\n\n");
        out.push_str("    fn fields(&self) -> Vec<Field<'_>> {\n");
        if block.fields.is_empty() {
            out.push_str("        Vec::new()\n");
        } else {
            out.push_str("        vec![\n");
            for field in &block.fields {
                out.push_str(&format!(
                    "            Field::new({:?}, {:?}, self.{}.to_field_value()),\n",
                    field.config_name, field.key, field.ident
                ));
            }
            out.push_str("        ]\n");
        }
        out.push_str("    }\n");
        out.push_str("}\n\n");
    }
}

fn render_aggregate(out: &mut String, aggregate: &AggregateDef) {
    let mut sections = vec![("unit", "UnitBlock")];
    if let Some((field, block)) = &aggregate.section {
        sections.push((field.as_str(), block.as_str()));
    }
    sections.push(("install", "InstallBlock"));

    render_doc(out, &aggregate.doc, "");
    out.push_str(DERIVES);
    out.push_str(&format!("pub struct {} {{\n", aggregate.type_name));
    out.push_str("    #[serde(rename = \"name\")]\n");
    out.push_str("    pub name: String,\n\n");
    for (field, block) in &sections {
        let config_name = field.trim_start_matches("r#");
        out.push_str(&format!("    #[serde(rename = {config_name:?}, default)]\n"));
        out.push_str(&format!("    pub {field}: {block},\n"));
    }
    out.push_str("}\n\n");

    let refs = sections
        .iter()
        .map(|(field, _)| format!("&self.{field}"))
        .collect::<Vec<_>>()
        .join(", ");

    out.push_str(&format!("impl UnitCodec for {} {{\n", aggregate.type_name));
    out.push_str(&format!(
        "    const SUFFIX: &'static str = {:?};\n\n",
        aggregate.suffix
    ));
    out.push_str("    fn name(&self) -> &str {\n");
    out.push_str("        &self.name\n");
    out.push_str("    }\n\n");
    out.push_str("    fn sections(&self) -> Vec<&dyn UnitSection> {\n");
    out.push_str(&format!("        vec![{refs}]\n"));
    out.push_str("    }\n");
    out.push_str("}\n\n");
}

fn render_doc(out: &mut String, lines: &[String], indent: &str) {
    for line in lines {
        if line.is_empty() {
            out.push_str(&format!("{indent}///\n"));
        } else {
            out.push_str(&format!("{indent}/// {line}\n"));
        }
    }
}
