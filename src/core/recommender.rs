use bon::Builder;

use crate::{
    core::{
        appliance::{Appliance, Category},
        assumptions::Assumptions,
        calculator::{
            ac_setpoint_delta,
            appliance_upgrade_delta,
            lighting_swap_delta,
            standby_cut_delta,
        },
        ranking::{RankMode, rank},
        recommendation::{Details, MeasureCode, Recommendation, Retrofit},
    },
    prelude::*,
    quantity::{
        cost::Cost,
        emission::EmissionFactor,
        energy::KilowattHours,
        rate::KilowattHourRate,
    },
};

/// Suggested AC setpoint increase.
pub const AC_SETBACK_CELSIUS: f64 = 2.0;

pub const FRIDGE_RETROFIT_COST: Cost = Cost(25_000.0);

/// Assumed consumption of a new high-efficiency fridge.
pub const NEW_FRIDGE_YEARLY: KilowattHours = KilowattHours(180.0);

/// Applies the fixed measure rules to an appliance inventory.
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Recommender<'a> {
    appliances: &'a [Appliance],
    tariff: KilowattHourRate,
    emission_factor: EmissionFactor,

    #[builder(default)]
    assumptions: Assumptions,
}

impl<S: recommender_builder::IsComplete> RecommenderBuilder<'_, S> {
    /// Generate the recommendations ranked by monthly cost savings.
    pub fn generate(self) -> Vec<Recommendation> {
        self.build().generate()
    }
}

impl Recommender<'_> {
    #[instrument(skip_all, fields(n_appliances = self.appliances.len()))]
    fn generate(self) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        recommendations.extend(self.appliances.iter().filter_map(|appliance| self.lighting_swap(appliance)));
        recommendations.extend(self.appliances.iter().filter_map(|appliance| self.ac_setpoint(appliance)));
        recommendations.extend(self.standby_cut());
        recommendations.extend(self.appliances.iter().filter_map(|appliance| self.fridge_upgrade(appliance)));
        debug!(n_recommendations = recommendations.len(), "generated");
        rank(&mut recommendations, RankMode::Cost);
        recommendations
    }

    /// Every bulb or tube drawing more than an LED.
    fn lighting_swap(&self, appliance: &Appliance) -> Option<Recommendation> {
        let led_power = self.assumptions.default_led_w;
        if appliance.category() != Some(Category::Lighting) || appliance.power <= led_power {
            return None;
        }
        let retrofit_cost = self.assumptions.lighting_cost_per_unit * f64::from(appliance.quantity);
        let recommendation = Recommendation::builder()
            .code(MeasureCode::LightingSwap)
            .title(format!(
                "Swap {}x {}W bulbs to {}W LEDs",
                appliance.quantity,
                appliance.power.0.trunc(),
                led_power.0.trunc(),
            ))
            .details(Details::LightingSwap {
                appliance_id: appliance.id.clone(),
                old_power: appliance.power,
                led_power,
                quantity: appliance.quantity,
                hours_per_day: appliance.hours_per_day,
                retrofit_cost,
            })
            .formula("ΔE = ((P_old − P_led) × N × T / 1000) × 30".to_string())
            .delta_energy(lighting_swap_delta(
                appliance.power,
                led_power,
                appliance.quantity,
                appliance.hours_per_day,
            ))
            .tariff(self.tariff)
            .emission_factor(self.emission_factor)
            .retrofit(Retrofit::Purchase(retrofit_cost))
            .build();
        Some(recommendation)
    }

    fn ac_setpoint(&self, appliance: &Appliance) -> Option<Recommendation> {
        if appliance.category() != Some(Category::AirConditioner) {
            return None;
        }
        let coefficient = self.assumptions.ac_coefficient_per_degree;
        let ac_monthly = appliance.monthly_energy_every_day();
        let recommendation = Recommendation::builder()
            .code(MeasureCode::AcSetpoint)
            .title(format!("Increase AC setpoint by +{AC_SETBACK_CELSIUS} °C"))
            .details(Details::AcSetpoint {
                appliance_id: appliance.id.clone(),
                ac_monthly: ac_monthly.round_to(2),
                delta_celsius: AC_SETBACK_CELSIUS,
                coefficient,
            })
            .formula(format!("ΔE = E_AC × ({coefficient} × ΔT)"))
            .delta_energy(ac_setpoint_delta(ac_monthly, AC_SETBACK_CELSIUS, coefficient))
            .tariff(self.tariff)
            .emission_factor(self.emission_factor)
            .retrofit(Retrofit::Free)
            .build();
        Some(recommendation)
    }

    /// A single household-wide suggestion.
    ///
    /// Every inventory line counts as one device, and an empty inventory still counts as one.
    fn standby_cut(&self) -> Option<Recommendation> {
        let n_devices = self.appliances.len().max(1);
        let standby_power = self.assumptions.default_standby_w;
        let hours_per_day = self.assumptions.default_standby_hours;
        let delta_energy = standby_cut_delta(standby_power, hours_per_day, n_devices);
        if delta_energy <= KilowattHours::ZERO {
            return None;
        }
        let recommendation = Recommendation::builder()
            .code(MeasureCode::StandbyCut)
            .title("Eliminate standby power on idle devices".to_string())
            .details(Details::StandbyCut { standby_power, hours_per_day, n_devices })
            .formula("ΔE = (P_s × t × N / 1000) × 30".to_string())
            .delta_energy(delta_energy)
            .tariff(self.tariff)
            .emission_factor(self.emission_factor)
            .retrofit(Retrofit::Free)
            .build();
        Some(recommendation)
    }

    fn fridge_upgrade(&self, appliance: &Appliance) -> Option<Recommendation> {
        if appliance.category() != Some(Category::Refrigerator) {
            return None;
        }
        let old_yearly = old_fridge_yearly(appliance.star_label.as_deref());
        let recommendation = Recommendation::builder()
            .code(MeasureCode::FridgeUpgrade)
            .title("Upgrade to high-efficiency fridge".to_string())
            .details(Details::FridgeUpgrade {
                appliance_id: appliance.id.clone(),
                old_yearly,
                new_yearly: NEW_FRIDGE_YEARLY,
                retrofit_cost: FRIDGE_RETROFIT_COST,
            })
            .formula("ΔE = (E_old − E_new) / 12".to_string())
            .delta_energy(appliance_upgrade_delta(old_yearly, NEW_FRIDGE_YEARLY))
            .tariff(self.tariff)
            .emission_factor(self.emission_factor)
            .retrofit(Retrofit::Purchase(FRIDGE_RETROFIT_COST))
            .build();
        Some(recommendation)
    }
}

/// Coarse guess of an existing fridge's yearly consumption from its star label.
///
/// Labels starting with `2` denote the older, less efficient units.
#[must_use]
pub fn old_fridge_yearly(star_label: Option<&str>) -> KilowattHours {
    if star_label.is_some_and(|label| label.starts_with('2')) {
        KilowattHours(300.0)
    } else {
        KilowattHours(240.0)
    }
}

/// Rule-based recommendations, ranked by monthly cost savings.
pub fn generate_recommendations(
    appliances: &[Appliance],
    tariff: KilowattHourRate,
    emission_factor: EmissionFactor,
    assumptions: Assumptions,
) -> Vec<Recommendation> {
    Recommender::builder()
        .appliances(appliances)
        .tariff(tariff)
        .emission_factor(emission_factor)
        .assumptions(assumptions)
        .generate()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{power::Watts, time::{Hours, Months}};

    const TARIFF: KilowattHourRate = KilowattHourRate(8.0);
    const EMISSION_FACTOR: EmissionFactor = EmissionFactor(0.7);

    fn recommend(appliances: &[Appliance]) -> Vec<Recommendation> {
        generate_recommendations(appliances, TARIFF, EMISSION_FACTOR, Assumptions::default())
    }

    fn only(recommendations: &[Recommendation], code: MeasureCode) -> Vec<&Recommendation> {
        recommendations.iter().filter(|recommendation| recommendation.code == code).collect()
    }

    #[test]
    fn test_empty_inventory() {
        let recommendations = recommend(&[]);
        assert_eq!(recommendations.len(), 1);
        let standby = &recommendations[0];
        assert_eq!(standby.code, MeasureCode::StandbyCut);
        assert_eq!(
            standby.details,
            Details::StandbyCut { standby_power: Watts(10.0), hours_per_day: Hours(2.0), n_devices: 1 },
        );
        assert_abs_diff_eq!(standby.delta_energy.0, 0.6);
    }

    #[test]
    fn test_no_standby_without_standby_power() {
        let recommendations = generate_recommendations(
            &[],
            TARIFF,
            EMISSION_FACTOR,
            Assumptions::from_overrides([("default_standby_w", 0.0)]),
        );
        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_lighting_swap() {
        let appliances = [Appliance::new("bulb-1", "Bulb", Watts(60.0))
            .with_quantity(5)
            .with_hours_per_day(Hours(6.0))];
        let recommendations = recommend(&appliances);
        let lighting = only(&recommendations, MeasureCode::LightingSwap);
        assert_eq!(lighting.len(), 1);
        let lighting = lighting[0];
        assert_eq!(lighting.title, "Swap 5x 60W bulbs to 9W LEDs");
        assert_eq!(lighting.details.appliance_id(), Some("bulb-1"));
        assert_abs_diff_eq!(lighting.delta_energy.0, 45.9);
        assert_abs_diff_eq!(lighting.delta_cost.0, 367.2);
        assert_abs_diff_eq!(lighting.delta_co2.0, 32.13);
        // 400 / 367.2:
        assert_eq!(lighting.payback, Some(Months(1.1)));
        assert_abs_diff_eq!(lighting.impact_score, 367.2, epsilon = 1e-9);
    }

    #[test]
    fn test_lighting_swap_skips_efficient_bulbs() {
        let appliances = [
            Appliance::new("led-1", "bulb", Watts(9.0)).with_quantity(4),
            Appliance::new("fan-1", "fan", Watts(70.0)),
        ];
        assert!(only(&recommend(&appliances), MeasureCode::LightingSwap).is_empty());
    }

    #[test]
    fn test_ac_setpoint() {
        let appliances = [Appliance::new("ac-1", "Air Conditioner", Watts(1200.0))
            .with_hours_per_day(Hours(3.0))
            .with_days_per_week(6.0)];
        let recommendations = recommend(&appliances);
        let ac = only(&recommendations, MeasureCode::AcSetpoint);
        assert_eq!(ac.len(), 1);
        let ac = ac[0];
        // 108 kWh/month regardless of days per week, 8% saved:
        assert_abs_diff_eq!(ac.delta_energy.0, 8.64);
        assert_abs_diff_eq!(ac.delta_cost.0, 69.12);
        assert_eq!(ac.payback, Some(Months::ZERO));
        assert_eq!(ac.title, "Increase AC setpoint by +2 °C");
        assert_eq!(ac.formula, "ΔE = E_AC × (0.04 × ΔT)");
    }

    #[test]
    fn test_ac_setpoint_coefficient_override() {
        let appliances = [Appliance::new("ac-1", "ac", Watts(1000.0)).with_hours_per_day(Hours(4.0))];
        let recommendations = generate_recommendations(
            &appliances,
            TARIFF,
            EMISSION_FACTOR,
            Assumptions::from_overrides([("ac_coefficient_per_degree", 0.05)]),
        );
        let ac = only(&recommendations, MeasureCode::AcSetpoint)[0];
        assert_abs_diff_eq!(ac.delta_energy.0, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_standby_counts_inventory_lines() {
        let appliances = [
            Appliance::new("bulb-1", "bulb", Watts(9.0)).with_quantity(10),
            Appliance::new("tv-1", "tv", Watts(90.0)),
            Appliance::new("router-1", "router", Watts(10.0)),
        ];
        let recommendations = recommend(&appliances);
        let standby = only(&recommendations, MeasureCode::StandbyCut);
        assert_eq!(standby.len(), 1);
        assert_abs_diff_eq!(standby[0].delta_energy.0, 1.8);
        assert_eq!(standby[0].details.appliance_id(), None);
    }

    #[test]
    fn test_old_fridge_yearly() {
        assert_eq!(old_fridge_yearly(Some("2-star")), KilowattHours(300.0));
        assert_eq!(old_fridge_yearly(Some("3-star")), KilowattHours(240.0));
        assert_eq!(old_fridge_yearly(Some("two stars")), KilowattHours(240.0));
        assert_eq!(old_fridge_yearly(None), KilowattHours(240.0));
    }

    #[test]
    fn test_fridge_upgrade() {
        let appliances = [
            Appliance::new("fridge-1", "Fridge", Watts(120.0)).with_star_label("2-star"),
            Appliance::new("fridge-2", "refrigerator", Watts(120.0)),
        ];
        let recommendations = recommend(&appliances);
        let fridges = only(&recommendations, MeasureCode::FridgeUpgrade);
        assert_eq!(fridges.len(), 2);

        // Ranked by savings, the old one first:
        assert_eq!(fridges[0].details.appliance_id(), Some("fridge-1"));
        assert_abs_diff_eq!(fridges[0].delta_energy.0, 10.0);
        assert_abs_diff_eq!(fridges[0].delta_cost.0, 80.0);
        assert_eq!(fridges[0].payback, Some(Months(312.5)));
        assert_abs_diff_eq!(fridges[0].impact_score, 8.0, epsilon = 1e-9);

        assert_eq!(fridges[1].details.appliance_id(), Some("fridge-2"));
        assert_abs_diff_eq!(fridges[1].delta_energy.0, 5.0);
    }

    #[test]
    fn test_fridge_without_tariff_has_no_payback() {
        let appliances = [Appliance::new("fridge-1", "fridge", Watts(120.0))];
        let recommendations = generate_recommendations(
            &appliances,
            KilowattHourRate::ZERO,
            EMISSION_FACTOR,
            Assumptions::default(),
        );
        let fridge = only(&recommendations, MeasureCode::FridgeUpgrade)[0];
        assert_eq!(fridge.payback, None);
        assert!(fridge.delta_co2 > crate::quantity::emission::KilogramsCo2::ZERO);
    }

    #[test]
    fn test_default_ranking() {
        let appliances = [
            Appliance::new("fridge-1", "fridge", Watts(120.0)).with_hours_per_day(Hours(24.0)),
            Appliance::new("bulb-1", "bulb", Watts(60.0)).with_quantity(5).with_hours_per_day(Hours(6.0)),
            Appliance::new("ac-1", "AC", Watts(1200.0)).with_hours_per_day(Hours(3.0)),
        ];
        let codes: Vec<_> = recommend(&appliances).into_iter().map(|recommendation| recommendation.code).collect();
        assert_eq!(
            codes,
            [
                MeasureCode::LightingSwap,
                MeasureCode::AcSetpoint,
                MeasureCode::FridgeUpgrade,
                MeasureCode::StandbyCut,
            ],
        );
    }
}
