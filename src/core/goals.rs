use serde::{Deserialize, Serialize};

use crate::{
    core::kpi::Kpis,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Actual figures below this are treated as this, so that an idle household does not divide by zero.
const MIN_ACTUAL: f64 = 0.0001;

/// Optional monthly targets of the household.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    #[serde(default, rename = "monthly_kwh", skip_serializing_if = "Option::is_none")]
    pub monthly_energy: Option<KilowattHours>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_cost: Option<Cost>,
}

/// Whole percents, `0..=100`.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub energy: Option<u8>,
    pub cost: Option<u8>,
}

impl Goals {
    pub fn progress(&self, kpis: &Kpis) -> GoalProgress {
        GoalProgress {
            energy: self.monthly_energy.and_then(|goal| progress(goal.0, kpis.monthly_kwh.0)),
            cost: self.monthly_cost.and_then(|goal| progress(goal.0, kpis.monthly_cost.0)),
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn progress(goal: f64, actual: f64) -> Option<u8> {
    (goal > 0.0).then(|| (goal / actual.max(MIN_ACTUAL) * 100.0).clamp(0.0, 100.0) as u8)
}
