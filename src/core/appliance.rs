use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::quantity::{energy::KilowattHours, power::Watts, time::Hours};

/// A single appliance line of the household inventory.
///
/// The engine receives these already validated and never stores anything derived from them.
#[serde_as]
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    /// Opaque caller-supplied identifier.
    pub id: String,

    /// Free-form category as entered by the user, for example `bulb` or `AC`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Rated power of a single unit.
    #[serde(rename = "power_w")]
    pub power: Watts,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Average operating hours on a day the appliance is used.
    pub hours_per_day: Hours,

    #[serde(default = "default_days_per_week")]
    pub days_per_week: f64,

    /// Free-text efficiency rating such as `3-star`.
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub star_label: Option<String>,
}

const fn default_quantity() -> u32 {
    1
}

const fn default_days_per_week() -> f64 {
    7.0
}

impl Appliance {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, power: Watts) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            power,
            quantity: default_quantity(),
            hours_per_day: Hours(1.0),
            days_per_week: default_days_per_week(),
            star_label: None,
        }
    }

    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub const fn with_hours_per_day(mut self, hours_per_day: Hours) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }

    pub const fn with_days_per_week(mut self, days_per_week: f64) -> Self {
        self.days_per_week = days_per_week;
        self
    }

    pub fn with_star_label(mut self, star_label: impl Into<String>) -> Self {
        self.star_label = Some(star_label.into());
        self
    }

    /// Average daily energy, spreading the weekly usage over all seven days.
    pub fn daily_energy(&self) -> KilowattHours {
        let average_hours = self.hours_per_day * (self.days_per_week / 7.0);
        self.power * f64::from(self.quantity) * average_hours
    }

    /// Monthly energy assuming the appliance runs every day of the month.
    ///
    /// Used by the AC rule which deliberately ignores `days_per_week`.
    pub fn monthly_energy_every_day(&self) -> KilowattHours {
        self.power * f64::from(self.quantity) * self.hours_per_day * super::calculator::DAYS_PER_MONTH
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        Category::classify(&self.kind)
    }
}

/// Appliance categories the recommendation rules know about.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Category {
    Lighting,
    AirConditioner,
    Refrigerator,
}

impl Category {
    /// Match a free-form appliance type, ignoring case.
    #[must_use]
    pub fn classify(kind: &str) -> Option<Self> {
        match kind.to_lowercase().as_str() {
            "bulb" | "tube" | "lighting" => Some(Self::Lighting),
            "ac" | "air_conditioner" | "air conditioner" => Some(Self::AirConditioner),
            "fridge" | "refrigerator" => Some(Self::Refrigerator),
            _ => None,
        }
    }
}
