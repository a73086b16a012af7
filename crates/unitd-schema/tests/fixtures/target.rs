// @generated from the systemd.target man page of systemd. Do not edit.

use serde::Deserialize;
use super::common::{InstallBlock, UnitBlock};
use unitd_unit::{UnitCodec, UnitSection};

/// Target represents the Target configuration file of a systemd unit.
/// A separate [Target] section does not exist.
///
/// Target units group other units.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Target {
    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "unit", default)]
    pub unit: UnitBlock,
    #[serde(rename = "install", default)]
    pub install: InstallBlock,
}

impl UnitCodec for Target {
    const SUFFIX: &'static str = "target";

    fn name(&self) -> &str {
        &self.name
    }

    fn sections(&self) -> Vec<&dyn UnitSection> {
        vec![&self.unit, &self.install]
    }
}
