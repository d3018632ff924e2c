use std::fmt::{Display, Formatter};

use bon::bon;
use serde::{Deserialize, Serialize};

use crate::{
    core::calculator::payback,
    quantity::{
        cost::Cost,
        emission::{EmissionFactor, KilogramsCo2},
        energy::KilowattHours,
        power::Watts,
        rate::KilowattHourRate,
        time::{Hours, Months},
    },
};

/// Added to the payback when scoring so that an instant payback does not divide by zero.
const PAYBACK_EPSILON: f64 = 1e-6;

#[derive(Debug, Hash, Serialize, Deserialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum MeasureCode {
    /// Replace conventional bulbs and tubes with LEDs.
    LightingSwap,

    /// Raise the air conditioner setpoint.
    AcSetpoint,

    /// Switch idle devices off at the wall.
    StandbyCut,

    /// Replace an old fridge with a high-efficiency one.
    FridgeUpgrade,
}

impl MeasureCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LightingSwap => "lighting_swap",
            Self::AcSetpoint => "ac_setpoint",
            Self::StandbyCut => "standby_cut",
            Self::FridgeUpgrade => "fridge_upgrade",
        }
    }
}

impl Display for MeasureCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw inputs of a recommendation, enough to audit the computation without re-deriving it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Details {
    LightingSwap {
        appliance_id: String,
        #[serde(rename = "p_old_w")]
        old_power: Watts,
        #[serde(rename = "p_led_w")]
        led_power: Watts,
        #[serde(rename = "n")]
        quantity: u32,
        #[serde(rename = "t")]
        hours_per_day: Hours,
        retrofit_cost: Cost,
    },

    AcSetpoint {
        appliance_id: String,
        #[serde(rename = "e_ac_month")]
        ac_monthly: KilowattHours,
        #[serde(rename = "delta_t")]
        delta_celsius: f64,
        coefficient: f64,
    },

    StandbyCut {
        #[serde(rename = "p_s")]
        standby_power: Watts,
        #[serde(rename = "t")]
        hours_per_day: Hours,
        #[serde(rename = "n")]
        n_devices: usize,
    },

    FridgeUpgrade {
        appliance_id: String,
        #[serde(rename = "e_old_year")]
        old_yearly: KilowattHours,
        #[serde(rename = "e_new_year")]
        new_yearly: KilowattHours,
        retrofit_cost: Cost,
    },
}

impl Details {
    #[must_use]
    pub fn appliance_id(&self) -> Option<&str> {
        match self {
            Self::LightingSwap { appliance_id, .. }
            | Self::AcSetpoint { appliance_id, .. }
            | Self::FridgeUpgrade { appliance_id, .. } => Some(appliance_id),
            Self::StandbyCut { .. } => None,
        }
    }

    /// Flat `(key, value)` view for reports.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::LightingSwap {
                appliance_id,
                old_power,
                led_power,
                quantity,
                hours_per_day,
                retrofit_cost,
            } => vec![
                ("appliance_id", appliance_id.clone()),
                ("p_old_w", old_power.0.to_string()),
                ("p_led_w", led_power.0.to_string()),
                ("n", quantity.to_string()),
                ("t", hours_per_day.0.to_string()),
                ("retrofit_cost", retrofit_cost.0.to_string()),
            ],
            Self::AcSetpoint { appliance_id, ac_monthly, delta_celsius, coefficient } => vec![
                ("appliance_id", appliance_id.clone()),
                ("e_ac_month", ac_monthly.0.to_string()),
                ("delta_t", delta_celsius.to_string()),
                ("coefficient", coefficient.to_string()),
            ],
            Self::StandbyCut { standby_power, hours_per_day, n_devices } => vec![
                ("p_s", standby_power.0.to_string()),
                ("t", hours_per_day.0.to_string()),
                ("n", n_devices.to_string()),
            ],
            Self::FridgeUpgrade { appliance_id, old_yearly, new_yearly, retrofit_cost } => vec![
                ("appliance_id", appliance_id.clone()),
                ("e_old_year", old_yearly.0.to_string()),
                ("e_new_year", new_yearly.0.to_string()),
                ("retrofit_cost", retrofit_cost.0.to_string()),
            ],
        }
    }
}

/// What it takes to implement a measure.
#[derive(Copy, Clone, Debug)]
pub enum Retrofit {
    /// Behavioural change, pays back immediately.
    Free,

    /// One-off purchase, pays back from the monthly savings.
    Purchase(Cost),
}

/// A scored efficiency measure instantiated against the household data.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    pub code: MeasureCode,
    pub title: String,
    pub details: Details,

    #[serde(rename = "delta_kwh_month")]
    pub delta_energy: KilowattHours,

    #[serde(rename = "delta_cost_month")]
    pub delta_cost: Cost,

    #[serde(rename = "delta_co2_month")]
    pub delta_co2: KilogramsCo2,

    #[serde(rename = "payback_months")]
    pub payback: Option<Months>,

    /// Ranking heuristic, meaningless on its own.
    pub impact_score: f64,

    /// The formula applied, for display.
    pub formula: String,
}

#[bon]
impl Recommendation {
    /// Price the monthly energy saving and round the figures for output.
    ///
    /// The impact score is computed from the unrounded cost saving and payback.
    #[builder]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: MeasureCode,
        title: String,
        details: Details,
        formula: String,
        delta_energy: KilowattHours,
        tariff: KilowattHourRate,
        emission_factor: EmissionFactor,
        retrofit: Retrofit,
    ) -> Self {
        let delta_cost = delta_energy * tariff;
        let delta_co2 = delta_energy * emission_factor;
        let payback = match retrofit {
            Retrofit::Free => Some(Months::ZERO),
            Retrofit::Purchase(retrofit_cost) => payback(retrofit_cost, delta_cost),
        };
        Self {
            code,
            title,
            details,
            formula,
            delta_energy: delta_energy.round_to(2),
            delta_cost: delta_cost.round_to(2),
            delta_co2: delta_co2.round_to(2),
            payback: payback.map(|payback| payback.round_to(1)),
            impact_score: impact_score(delta_cost, payback),
        }
    }
}

/// Monthly cost saving weighted by how quickly the measure pays back.
///
/// The weight is `12 / payback` clamped to `0.1..=1.0`, or `1.0` without a finite payback.
#[must_use]
pub fn impact_score(delta_cost: Cost, payback: Option<Months>) -> f64 {
    let payback_factor =
        payback.map_or(1.0, |payback| (12.0 / (payback.0 + PAYBACK_EPSILON)).clamp(0.1, 1.0));
    delta_cost.0 * payback_factor
}
