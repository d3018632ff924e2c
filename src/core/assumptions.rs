use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{cost::Cost, power::Watts, time::Hours},
};

/// Tunable coefficients of the recommendation rules.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Assumptions {
    /// Fraction of AC energy saved per degree of setpoint increase.
    pub ac_coefficient_per_degree: f64,

    /// Power of the LED replacing a conventional bulb.
    pub default_led_w: Watts,

    /// Stand-by power assumed for every device.
    pub default_standby_w: Watts,

    /// Daily stand-by hours assumed for every device.
    pub default_standby_hours: Hours,

    /// Retrofit cost of a single LED.
    pub lighting_cost_per_unit: Cost,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            ac_coefficient_per_degree: 0.04,
            default_led_w: Watts(9.0),
            default_standby_w: Watts(10.0),
            default_standby_hours: Hours(2.0),
            lighting_cost_per_unit: Cost(80.0),
        }
    }
}

impl Assumptions {
    pub const KEYS: [&'static str; 5] = [
        "ac_coefficient_per_degree",
        "default_led_w",
        "default_standby_w",
        "default_standby_hours",
        "lighting_cost_per_unit",
    ];

    /// Resolve named overrides against the defaults.
    ///
    /// Absent keys keep their defaults, unknown keys are ignored.
    pub fn from_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut this = Self::default();
        for (key, value) in overrides {
            match key {
                "ac_coefficient_per_degree" => this.ac_coefficient_per_degree = value,
                "default_led_w" => this.default_led_w = Watts(value),
                "default_standby_w" => this.default_standby_w = Watts(value),
                "default_standby_hours" => this.default_standby_hours = Hours(value),
                "lighting_cost_per_unit" => this.lighting_cost_per_unit = Cost(value),
                _ => warn!(key, value, "ignoring unknown assumption"),
            }
        }
        this
    }

    /// Named values in the same form [`Assumptions::from_overrides`] accepts.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, f64); 5] {
        [
            (Self::KEYS[0], self.ac_coefficient_per_degree),
            (Self::KEYS[1], self.default_led_w.0),
            (Self::KEYS[2], self.default_standby_w.0),
            (Self::KEYS[3], self.default_standby_hours.0),
            (Self::KEYS[4], self.lighting_cost_per_unit.0),
        ]
    }
}
