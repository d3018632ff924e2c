use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::{core::recommendation::Recommendation, quantity::time::Months};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RankMode {
    /// Highest monthly cost savings first.
    #[default]
    Cost,

    /// Highest monthly CO2 savings first.
    Co2,
}

/// Re-sort the recommendations in place without touching any of them.
///
/// Ties are broken by the faster payback, recommendations without a finite payback go last.
/// The sort is stable, so fully tied recommendations keep their relative order.
pub fn rank(recommendations: &mut [Recommendation], mode: RankMode) {
    match mode {
        RankMode::Cost => recommendations.sort_by_key(|recommendation| {
            (Reverse(recommendation.delta_cost), payback_key(recommendation))
        }),
        RankMode::Co2 => recommendations.sort_by_key(|recommendation| {
            (Reverse(recommendation.delta_co2), payback_key(recommendation))
        }),
    }
}

fn payback_key(recommendation: &Recommendation) -> (bool, Option<Months>) {
    (recommendation.payback.is_none(), recommendation.payback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::recommendation::{Details, MeasureCode},
        quantity::{
            cost::Cost,
            emission::KilogramsCo2,
            energy::KilowattHours,
            power::Watts,
            time::{Hours, Months},
        },
    };

    fn recommendation(id: &str, cost: f64, co2: f64, payback: Option<f64>) -> Recommendation {
        Recommendation {
            code: MeasureCode::LightingSwap,
            title: id.to_string(),
            details: Details::LightingSwap {
                appliance_id: id.to_string(),
                old_power: Watts(60.0),
                led_power: Watts(9.0),
                quantity: 1,
                hours_per_day: Hours(1.0),
                retrofit_cost: Cost(80.0),
            },
            delta_energy: KilowattHours(1.0),
            delta_cost: Cost(cost),
            delta_co2: KilogramsCo2(co2),
            payback: payback.map(Months),
            impact_score: cost,
            formula: String::new(),
        }
    }

    fn titles(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations.iter().map(|recommendation| recommendation.title.as_str()).collect()
    }

    #[test]
    fn test_rank_by_cost() {
        let mut recommendations = vec![
            recommendation("a", 10.0, 5.0, Some(3.0)),
            recommendation("b", 30.0, 1.0, Some(3.0)),
            recommendation("c", 20.0, 9.0, None),
        ];
        rank(&mut recommendations, RankMode::Cost);
        assert_eq!(titles(&recommendations), ["b", "c", "a"]);
    }

    #[test]
    fn test_rank_ties_by_payback() {
        let mut recommendations = vec![
            recommendation("absent", 10.0, 1.0, None),
            recommendation("slow", 10.0, 1.0, Some(24.0)),
            recommendation("instant", 10.0, 1.0, Some(0.0)),
            recommendation("fast", 10.0, 1.0, Some(2.0)),
        ];
        rank(&mut recommendations, RankMode::Cost);
        assert_eq!(titles(&recommendations), ["instant", "fast", "slow", "absent"]);
    }

    #[test]
    fn test_rank_stable_under_ties() {
        let mut recommendations = vec![
            recommendation("first", 10.0, 1.0, Some(1.0)),
            recommendation("second", 10.0, 1.0, Some(1.0)),
            recommendation("third", 10.0, 1.0, Some(1.0)),
        ];
        rank(&mut recommendations, RankMode::Cost);
        assert_eq!(titles(&recommendations), ["first", "second", "third"]);
    }

    #[test]
    fn test_rank_by_co2_keeps_fields() {
        let mut recommendations = vec![
            recommendation("a", 10.0, 5.0, Some(3.0)),
            recommendation("b", 30.0, 1.0, Some(3.0)),
            recommendation("c", 20.0, 9.0, None),
        ];
        let original = recommendations.clone();
        rank(&mut recommendations, RankMode::Co2);
        assert_eq!(titles(&recommendations), ["c", "a", "b"]);
        for ranked in &recommendations {
            let before = original.iter().find(|recommendation| recommendation.title == ranked.title).unwrap();
            assert_eq!(ranked, before);
        }

        rank(&mut recommendations, RankMode::Cost);
        assert_eq!(titles(&recommendations), ["b", "c", "a"]);
    }
}
