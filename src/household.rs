//! The household file: inventory, tariff and goals the engine is run against.

pub mod preset;

use std::{collections::BTreeMap, fmt::Debug, fs, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use self::preset::Preset;
use crate::{
    core::{appliance::Appliance, assumptions::Assumptions, goals::Goals},
    prelude::*,
    quantity::{emission::EmissionFactor, rate::KilowattHourRate},
};

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Household {
    #[serde(default = "default_name")]
    pub name: String,

    /// Electricity price per kilowatt-hour.
    #[serde(default = "default_tariff")]
    pub tariff: KilowattHourRate,

    /// Grid emissions per kilowatt-hour.
    #[serde(default = "default_emission_factor")]
    pub emission_factor: EmissionFactor,

    /// Overrides of the recommendation coefficients, by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub assumptions: BTreeMap<String, f64>,

    #[serde(default)]
    pub goals: Goals,

    #[serde(default)]
    pub appliances: Vec<Appliance>,
}

fn default_name() -> String {
    "Demo User".to_string()
}

const fn default_tariff() -> KilowattHourRate {
    KilowattHourRate(8.0)
}

const fn default_emission_factor() -> EmissionFactor {
    EmissionFactor(0.7)
}

impl Default for Household {
    fn default() -> Self {
        Self {
            name: default_name(),
            tariff: default_tariff(),
            emission_factor: default_emission_factor(),
            assumptions: BTreeMap::new(),
            goals: Goals::default(),
            appliances: Vec::new(),
        }
    }
}

impl Household {
    pub fn from_preset(preset: Preset) -> Self {
        Self { appliances: preset.appliances(), ..Self::default() }
    }

    #[instrument(name = "Reading the household…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read `{}`, run `init` to create one", path.display())
        })?;
        Self::parse(&contents).with_context(|| format!("invalid household file `{}`", path.display()))
    }

    #[instrument(skip(self), name = "Writing the household…")]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P) -> Result {
        let path = path.as_ref();
        fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }

    /// Deserialize and validate.
    pub fn parse(contents: &str) -> Result<Self> {
        let this: Self = toml::from_str(contents)?;
        this.validate()?;
        debug!(household = %this.name, n_appliances = this.appliances.len(), "parsed");
        Ok(this)
    }

    pub fn validate(&self) -> Result {
        ensure!(
            self.tariff.0.is_finite() && self.tariff.0 >= 0.0,
            "tariff must be a finite non-negative number, got {}",
            self.tariff.0,
        );
        ensure!(
            self.emission_factor.0.is_finite() && self.emission_factor.0 >= 0.0,
            "emission factor must be a finite non-negative number, got {}",
            self.emission_factor.0,
        );
        for (key, value) in &self.assumptions {
            ensure!(value.is_finite(), "assumption `{key}` must be finite, got {value}");
        }
        for appliance in &self.appliances {
            validate_appliance(appliance)
                .with_context(|| format!("invalid appliance `{}`", appliance.id))?;
        }
        if let Some(id) = self.appliances.iter().map(|appliance| &appliance.id).duplicates().next() {
            bail!("duplicate appliance id `{id}`");
        }
        Ok(())
    }

    pub fn assumptions(&self) -> Assumptions {
        Assumptions::from_overrides(self.assumptions.iter().map(|(key, value)| (key.as_str(), *value)))
    }
}

fn validate_appliance(appliance: &Appliance) -> Result {
    ensure!(!appliance.id.is_empty(), "id must not be empty");
    ensure!(
        appliance.power.0.is_finite() && appliance.power.0 > 0.0,
        "power must be positive, got {}",
        appliance.power.0,
    );
    ensure!(appliance.quantity >= 1, "quantity must be at least 1");
    ensure!(
        (0.0..=24.0).contains(&appliance.hours_per_day.0),
        "hours per day must be within 0..=24, got {}",
        appliance.hours_per_day.0,
    );
    ensure!(
        (0.0..=7.0).contains(&appliance.days_per_week),
        "days per week must be within 0..=7, got {}",
        appliance.days_per_week,
    );
    Ok(())
}
