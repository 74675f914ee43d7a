use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde_helpers::{int_or_string, string_or_number};

/// `Other` is the open-ended entry; the user may give it a free-text name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appliance {
    Lamps,
    AirConditioner,
    Refrigerator,
    Freezer,
    WaterHeater,
    Microwave,
    WashingMachine,
    Television,
    Other,
}

impl Appliance {
    pub const ALL: [Appliance; 9] = [
        Appliance::Lamps,
        Appliance::AirConditioner,
        Appliance::Refrigerator,
        Appliance::Freezer,
        Appliance::WaterHeater,
        Appliance::Microwave,
        Appliance::WashingMachine,
        Appliance::Television,
        Appliance::Other,
    ];

    /// Label shown in the picker and stored as the equipment `type`.
    pub fn label(&self) -> &'static str {
        match self {
            Appliance::Lamps => "Lampes",
            Appliance::AirConditioner => "Climatiseur",
            Appliance::Refrigerator => "Réfrigérateur",
            Appliance::Freezer => "Congélateur",
            Appliance::WaterHeater => "Chauffe-eau",
            Appliance::Microwave => "Micro-ondes",
            Appliance::WashingMachine => "Lave-linge",
            Appliance::Television => "Télévision",
            Appliance::Other => "Autre",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }
}

/// Quantities are signed on purpose: they come straight from number inputs and
/// validation must be able to see and reject non-positive values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "int_or_string")]
    pub quantity: i32,
    #[serde(deserialize_with = "int_or_string")]
    pub power_watts: i32,
    #[serde(default, deserialize_with = "int_or_string")]
    pub hours_per_day: i32,
}

impl Equipment {
    pub fn new(appliance: Appliance, name: Option<String>) -> Self {
        let name = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        Self {
            id: Uuid::new_v4().to_string(),
            kind: appliance.label().to_string(),
            name,
            quantity: 1,
            power_watts: 0,
            hours_per_day: 0,
        }
    }

    /// Name shown in lists: the custom name when present, the type otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.kind)
    }

    pub fn is_valid(&self) -> bool {
        self.quantity > 0 && self.power_watts >= 0
    }

    /// Daily energy in watt-hours (`quantity * watts * hours`).
    pub fn daily_energy_wh(&self) -> i64 {
        i64::from(self.quantity) * i64::from(self.power_watts) * i64::from(self.hours_per_day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentField {
    Quantity,
    PowerWatts,
    HoursPerDay,
}

pub fn total_daily_energy_wh(items: &[Equipment]) -> i64 {
    items.iter().map(Equipment::daily_energy_wh).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_line_has_defaults_and_unique_id() {
        let a = Equipment::new(Appliance::Refrigerator, None);
        let b = Equipment::new(Appliance::Refrigerator, None);
        assert_eq!(a.kind, "Réfrigérateur");
        assert_eq!((a.quantity, a.power_watts, a.hours_per_day), (1, 0, 0));
        assert_ne!(a.id, b.id);
        assert!(a.is_valid());
    }

    #[test]
    fn other_keeps_trimmed_custom_name() {
        let item = Equipment::new(Appliance::Other, Some("  Pompe à eau ".into()));
        assert_eq!(item.kind, "Autre");
        assert_eq!(item.display_name(), "Pompe à eau");
        assert_eq!(Equipment::new(Appliance::Other, Some(" ".into())).name, None);
    }

    #[test]
    fn decodes_stringly_typed_numbers() {
        let item: Equipment = serde_json::from_str(
            r#"{"id":17,"type":"Climatiseur","quantity":"2","powerWatts":"1200","hoursPerDay":8}"#,
        )
        .expect("decode");
        assert_eq!(item.id, "17");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.daily_energy_wh(), 2 * 1200 * 8);
    }

    #[test]
    fn label_round_trips_through_picker() {
        for appliance in Appliance::ALL {
            assert_eq!(Appliance::from_label(appliance.label()), Some(appliance));
        }
        assert_eq!(Appliance::from_label(""), None);
    }
}
