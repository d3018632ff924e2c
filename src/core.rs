pub mod appliance;
pub mod assumptions;
pub mod breakdown;
pub mod calculator;
pub mod goals;
pub mod kpi;
pub mod ranking;
pub mod recommendation;
pub mod recommender;
pub mod scenario;

pub use self::{
    appliance::{Appliance, Category},
    assumptions::Assumptions,
    breakdown::EnergyBreakdown,
    goals::{GoalProgress, Goals},
    kpi::{Kpis, compute_kpis},
    ranking::{RankMode, rank},
    recommendation::{Details, MeasureCode, Recommendation},
    recommender::{Recommender, generate_recommendations},
    scenario::{Scenario, ScenarioTotals, aggregate},
};
