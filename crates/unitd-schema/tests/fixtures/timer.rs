// @generated from the systemd.timer man page of systemd. Do not edit.

use serde::Deserialize;
use super::common::{InstallBlock, UnitBlock};
use unitd_unit::{Field, ToFieldValue, UnitCodec, UnitSection};
use unitd_unit::value::{Timespan, UnitRef};

/// TimerBlock represents the [Timer] section of a systemd unit.
///
/// Timer units activate other units.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimerBlock {
    #[serde(rename = "accuracy_sec", default, deserialize_with = "unitd_unit::decode::parsed")]
    pub accuracy_sec: Timespan,
    #[serde(rename = "on_calendar", default)]
    pub on_calendar: Vec<String>,
    #[serde(rename = "persistent", default)]
    pub persistent: bool,
    #[serde(rename = "randomized_delay_sec", default)]
    pub randomized_delay_sec: i32,
    #[serde(rename = "unit", default, deserialize_with = "unitd_unit::decode::parsed")]
    pub unit: UnitRef,
}

impl UnitSection for TimerBlock {
    fn section_name(&self) -> &'static str {
        "Timer"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("accuracy_sec", "AccuracySec", self.accuracy_sec.to_field_value()),
            Field::new("on_calendar", "OnCalendar", self.on_calendar.to_field_value()),
            Field::new("persistent", "Persistent", self.persistent.to_field_value()),
            Field::new("randomized_delay_sec", "RandomizedDelaySec", self.randomized_delay_sec.to_field_value()),
            Field::new("unit", "Unit", self.unit.to_field_value()),
        ]
    }
}

/// A complete `.timer` unit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Timer {
    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "unit", default)]
    pub unit: UnitBlock,
    #[serde(rename = "timer", default)]
    pub timer: TimerBlock,
    #[serde(rename = "install", default)]
    pub install: InstallBlock,
}

impl UnitCodec for Timer {
    const SUFFIX: &'static str = "timer";

    fn name(&self) -> &str {
        &self.name
    }

    fn sections(&self) -> Vec<&dyn UnitSection> {
        vec![&self.unit, &self.timer, &self.install]
    }
}
