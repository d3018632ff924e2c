use std::cmp::Reverse;

use itertools::Itertools;
use serde::Serialize;

use crate::{core::appliance::Appliance, quantity::energy::KilowattHours};

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    /// Appliance type exactly as entered.
    pub kind: String,

    pub daily_energy: KilowattHours,
}

/// Daily energy per appliance type, largest consumers first.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EnergyBreakdown(Vec<BreakdownEntry>);

impl<'a> FromIterator<&'a Appliance> for EnergyBreakdown {
    fn from_iter<T: IntoIterator<Item = &'a Appliance>>(iterator: T) -> Self {
        let mut entries: Vec<BreakdownEntry> = Vec::new();
        for appliance in iterator {
            match entries.iter_mut().find(|entry| entry.kind == appliance.kind) {
                Some(entry) => entry.daily_energy += appliance.daily_energy(),
                None => entries.push(BreakdownEntry {
                    kind: appliance.kind.clone(),
                    daily_energy: appliance.daily_energy(),
                }),
            }
        }
        Self(entries.into_iter().sorted_by_key(|entry| Reverse(entry.daily_energy)).collect())
    }
}

impl EnergyBreakdown {
    #[must_use]
    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.0
    }

    /// The `n` largest consumers.
    #[must_use]
    pub fn top(&self, n: usize) -> &[BreakdownEntry] {
        &self.0[..n.min(self.0.len())]
    }

    pub fn total(&self) -> KilowattHours {
        self.0.iter().map(|entry| entry.daily_energy).sum()
    }

    /// Fraction of the total daily energy, zero for an idle household.
    #[must_use]
    pub fn share(&self, entry: &BreakdownEntry) -> f64 {
        let total = self.total();
        if total > KilowattHours::ZERO { entry.daily_energy.0 / total.0 } else { 0.0 }
    }
}
