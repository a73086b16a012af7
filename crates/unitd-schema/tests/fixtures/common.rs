// @generated from the systemd.unit man page of systemd. Do not edit.

use serde::Deserialize;
use unitd_unit::{Field, ToFieldValue, UnitSection};
use unitd_unit::value::UnitRef;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnitBlock {
    #[serde(rename = "after", default, deserialize_with = "unitd_unit::decode::parsed")]
    pub after: Vec<UnitRef>,
    #[serde(rename = "description", default)]
    pub description: String,
}

impl UnitSection for UnitBlock {
    fn section_name(&self) -> &'static str {
        "Unit"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("after", "After", self.after.to_field_value()),
            Field::new("description", "Description", self.description.to_field_value()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstallBlock {
    #[serde(rename = "wanted_by", default, deserialize_with = "unitd_unit::decode::parsed")]
    pub wanted_by: Vec<UnitRef>,
}

impl UnitSection for InstallBlock {
    fn section_name(&self) -> &'static str {
        "Install"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("wanted_by", "WantedBy", self.wanted_by.to_field_value()),
        ]
    }
}
