use serde::Serialize;

use crate::{
    core::{
        appliance::Appliance,
        calculator::{daily_energy, monthly_co2, monthly_cost, monthly_energy},
    },
    quantity::{
        cost::Cost,
        emission::{EmissionFactor, KilogramsCo2},
        energy::KilowattHours,
        rate::KilowattHourRate,
    },
};

/// Household energy, cost and emissions summary.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub daily_kwh: KilowattHours,
    pub monthly_kwh: KilowattHours,
    pub monthly_cost: Cost,
    pub monthly_co2: KilogramsCo2,
}

impl Kpis {
    /// Compute the bundle, rounding only the final figures.
    pub fn compute<'a, I>(appliances: I, tariff: KilowattHourRate, emission_factor: EmissionFactor) -> Self
    where
        I: IntoIterator<Item = &'a Appliance>,
    {
        let daily = daily_energy(appliances);
        let monthly = monthly_energy(daily);
        Self {
            daily_kwh: daily.round_to(3),
            monthly_kwh: monthly.round_to(3),
            monthly_cost: monthly_cost(monthly, tariff).round_to(2),
            monthly_co2: monthly_co2(monthly, emission_factor).round_to(2),
        }
    }
}

pub fn compute_kpis<'a, I>(appliances: I, tariff: KilowattHourRate, emission_factor: EmissionFactor) -> Kpis
where
    I: IntoIterator<Item = &'a Appliance>,
{
    Kpis::compute(appliances, tariff, emission_factor)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{power::Watts, time::Hours};

    fn appliances() -> Vec<Appliance> {
        vec![
            Appliance::new("bulb-1", "bulb", Watts(60.0)).with_quantity(5).with_hours_per_day(Hours(6.0)),
            Appliance::new("ac-1", "AC", Watts(1200.0))
                .with_hours_per_day(Hours(3.0))
                .with_days_per_week(6.0),
        ]
    }

    #[test]
    fn test_empty() {
        let kpis = compute_kpis(&[] as &[Appliance], KilowattHourRate(8.0), EmissionFactor(0.7));
        assert_eq!(kpis, Kpis::default());
        assert_eq!(kpis.monthly_cost, Cost::ZERO);
        assert_eq!(kpis.monthly_co2, KilogramsCo2::ZERO);
    }

    #[test]
    fn test_compute() {
        let kpis = compute_kpis(&appliances(), KilowattHourRate(8.0), EmissionFactor(0.7));
        // 1.8 kWh of lighting and 3.6 × 6/7 kWh of AC per day:
        assert_abs_diff_eq!(kpis.daily_kwh.0, 4.886);
        assert_abs_diff_eq!(kpis.monthly_kwh.0, 146.571);
        assert_abs_diff_eq!(kpis.monthly_cost.0, 1172.57);
        assert_abs_diff_eq!(kpis.monthly_co2.0, 102.6);
    }

    #[test]
    fn test_linear_in_tariff() {
        let appliances = appliances();
        let base = compute_kpis(&appliances, KilowattHourRate(4.0), EmissionFactor(0.5));
        let doubled = compute_kpis(&appliances, KilowattHourRate(8.0), EmissionFactor(0.5));
        assert_eq!(base.monthly_kwh, doubled.monthly_kwh);
        assert_eq!(base.monthly_co2, doubled.monthly_co2);
        assert_abs_diff_eq!(doubled.monthly_cost.0, 2.0 * base.monthly_cost.0, epsilon = 0.02);
    }

    #[test]
    fn test_linear_in_emission_factor() {
        let appliances = appliances();
        let base = compute_kpis(&appliances, KilowattHourRate(8.0), EmissionFactor(0.35));
        let tripled = compute_kpis(&appliances, KilowattHourRate(8.0), EmissionFactor(1.05));
        assert_eq!(base.monthly_cost, tripled.monthly_cost);
        assert_abs_diff_eq!(tripled.monthly_co2.0, 3.0 * base.monthly_co2.0, epsilon = 0.02);
    }
}
