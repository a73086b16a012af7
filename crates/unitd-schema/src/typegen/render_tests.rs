use unitd_unit::FieldKind;

use super::{AggregateDef, BlockDef, FieldDef, ImportSet, SchemaModule};

fn module(blocks: Vec<BlockDef>, aggregate: Option<AggregateDef>) -> SchemaModule {
    SchemaModule {
        header: None,
        imports: ImportSet::new(),
        unit_crate: "unitd_unit".into(),
        blocks,
        aggregate,
    }
}

fn field(key: &str, ident: &str, repr: &str, native: bool) -> FieldDef {
    FieldDef {
        ident: ident.into(),
        config_name: ident.trim_start_matches("r#").into(),
        key: key.into(),
        repr: repr.into(),
        kind: FieldKind::String,
        native,
        doc: Vec::new(),
    }
}

#[test]
fn ends_with_single_newline() {
    let source = module(Vec::new(), None).render();
    assert_eq!(source, "\n");

    let source = module(
        vec![BlockDef {
            type_name: "SliceBlock".into(),
            section: "Slice".into(),
            doc: Vec::new(),
            fields: Vec::new(),
        }],
        None,
    )
    .render();
    assert!(source.ends_with("}\n"));
    assert!(!source.ends_with("\n\n"));
}

#[test]
fn block_with_doc_paragraphs() {
    let mut slice = field("Slice", "slice", "String", true);
    slice.doc = vec!["First paragraph.".into(), String::new(), "Second.".into()];

    let source = module(
        vec![BlockDef {
            type_name: "ScopeBlock".into(),
            section: "Scope".into(),
            doc: vec!["Scope units.".into()],
            fields: vec![slice, field("OOMPolicy", "oom_policy", "Signal", false)],
        }],
        None,
    )
    .render();

    insta::assert_snapshot!(source, @r##"
    /// Scope units.
    #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
    pub struct ScopeBlock {
        /// First paragraph.
        ///
        /// Second.
        #[serde(rename = "slice", default)]
        pub slice: String,
        #[serde(rename = "oom_policy", default, deserialize_with = "unitd_unit::decode::parsed")]
        pub oom_policy: Signal,
    }

    impl UnitSection for ScopeBlock {
        fn section_name(&self) -> &'static str {
            "Scope"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("slice", "Slice", self.slice.to_field_value()),
                Field::new("oom_policy", "OOMPolicy", self.oom_policy.to_field_value()),
            ]
        }
    }
    "##);
}

#[test]
fn aggregate_lists_sections_in_unit_order() {
    let source = module(
        Vec::new(),
        Some(AggregateDef {
            type_name: "Socket".into(),
            suffix: "socket".into(),
            doc: Vec::new(),
            section: Some(("socket".into(), "SocketBlock".into())),
        }),
    )
    .render();

    assert!(source.contains("        vec![&self.unit, &self.socket, &self.install]\n"));
    assert!(source.contains("    #[serde(rename = \"socket\", default)]\n    pub socket: SocketBlock,\n"));
    assert!(source.contains("    const SUFFIX: &'static str = \"socket\";\n"));
}

#[test]
fn header_precedes_imports() {
    let mut imports = ImportSet::new();
    imports.add("serde::Deserialize");
    let source = SchemaModule {
        header: Some("systemd.slice".into()),
        imports,
        unit_crate: "unitd_unit".into(),
        blocks: Vec::new(),
        aggregate: None,
    }
    .render();

    assert_eq!(
        source,
        "// @generated from the systemd.slice man page of systemd. Do not edit.\n\nuse serde::Deserialize;\n"
    );
}
