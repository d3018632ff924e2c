use enumset::EnumSet;
use serde::Serialize;

use crate::{
    core::{
        kpi::Kpis,
        recommendation::{MeasureCode, Recommendation},
    },
    quantity::{cost::Cost, emission::KilogramsCo2, energy::KilowattHours},
};

/// Monthly savings of a set of recommendations.
#[must_use]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sum,
)]
pub struct ScenarioTotals {
    pub saved_kwh: KilowattHours,
    pub saved_cost: Cost,
    pub saved_co2: KilogramsCo2,
}

impl From<&Recommendation> for ScenarioTotals {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            saved_kwh: recommendation.delta_energy,
            saved_cost: recommendation.delta_cost,
            saved_co2: recommendation.delta_co2,
        }
    }
}

impl<'a> FromIterator<&'a Recommendation> for ScenarioTotals {
    fn from_iter<T: IntoIterator<Item = &'a Recommendation>>(iterator: T) -> Self {
        iterator.into_iter().map(Self::from).sum()
    }
}

impl ScenarioTotals {
    pub fn round_to(self, decimals: i32) -> Self {
        Self {
            saved_kwh: self.saved_kwh.round_to(decimals),
            saved_cost: self.saved_cost.round_to(decimals),
            saved_co2: self.saved_co2.round_to(decimals),
        }
    }

    /// Monthly energy before and after applying the scenario.
    pub fn project(self, baseline: &Kpis) -> Projection {
        Projection {
            baseline: baseline.monthly_kwh,
            after: (baseline.monthly_kwh - self.saved_kwh).max(KilowattHours::ZERO),
        }
    }
}

/// Sum the savings without recomputing any of them.
pub fn aggregate<'a, I>(recommendations: I) -> ScenarioTotals
where
    I: IntoIterator<Item = &'a Recommendation>,
{
    recommendations.into_iter().collect()
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub baseline: KilowattHours,
    pub after: KilowattHours,
}

/// A named selection of recommendations together with their totals.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub recommendations: Vec<Recommendation>,
    pub totals: ScenarioTotals,
}

impl Scenario {
    /// Keep the recommendations with one of the selected codes, in their original order.
    pub fn from_selection<I>(name: impl Into<String>, recommendations: I, codes: EnumSet<MeasureCode>) -> Self
    where
        I: IntoIterator<Item = Recommendation>,
    {
        let recommendations: Vec<_> = recommendations
            .into_iter()
            .filter(|recommendation| codes.contains(recommendation.code))
            .collect();
        let totals = aggregate(&recommendations);
        Self { name: name.into(), recommendations, totals }
    }
}
