use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{
        appliance::Appliance,
        breakdown::{BreakdownEntry, EnergyBreakdown},
        goals::{GoalProgress, Goals},
        kpi::Kpis,
        recommendation::Recommendation,
        scenario::{Projection, Scenario},
    },
    quantity::time::Months,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn right(cell: Cell) -> Cell {
    cell.set_alignment(CellAlignment::Right)
}

#[must_use]
pub fn build_appliances_table(appliances: &[Appliance]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Type"),
        right(Cell::new("Power")),
        right(Cell::new("Qty")),
        right(Cell::new("Hours/day")),
        right(Cell::new("Days/week")),
        Cell::new("Label"),
        right(Cell::new("Daily")),
    ]);
    for appliance in appliances {
        table.add_row(vec![
            Cell::new(&appliance.id).add_attribute(Attribute::Dim),
            Cell::new(&appliance.kind),
            right(Cell::new(appliance.power)),
            right(Cell::new(appliance.quantity)),
            right(Cell::new(appliance.hours_per_day)),
            right(Cell::new(appliance.days_per_week)),
            Cell::new(appliance.star_label.as_deref().unwrap_or("")),
            right(Cell::new(appliance.daily_energy().round_to(3))).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

#[must_use]
pub fn build_kpis_table(kpis: &Kpis) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            right(Cell::new("Daily")),
            right(Cell::new("Monthly")),
            right(Cell::new("Cost")),
            right(Cell::new("CO₂")),
        ])
        .add_row(vec![
            right(Cell::new(kpis.daily_kwh)),
            right(Cell::new(kpis.monthly_kwh)).add_attribute(Attribute::Bold),
            right(Cell::new(kpis.monthly_cost)).add_attribute(Attribute::Bold),
            right(Cell::new(kpis.monthly_co2)),
        ]);
    table
}

/// Render the `entries` with their share of the whole `breakdown`.
#[must_use]
pub fn build_breakdown_table(breakdown: &EnergyBreakdown, entries: &[BreakdownEntry]) -> Table {
    let mut table = new_table();
    table.set_header(vec![Cell::new("Type"), right(Cell::new("Daily")), right(Cell::new("Share"))]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.kind),
            right(Cell::new(entry.daily_energy.round_to(3))),
            right(Cell::new(format!("{:.0}%", breakdown.share(entry) * 100.0))).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[must_use]
pub fn build_goals_table(goals: &Goals, progress: GoalProgress, kpis: &Kpis) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Goal"),
        right(Cell::new("Target")),
        right(Cell::new("Actual")),
        right(Cell::new("Progress")),
    ]);
    if let Some(goal) = goals.monthly_energy {
        table.add_row(vec![
            Cell::new("Monthly energy"),
            right(Cell::new(goal)),
            right(Cell::new(kpis.monthly_kwh)),
            progress_cell(progress.energy),
        ]);
    }
    if let Some(goal) = goals.monthly_cost {
        table.add_row(vec![
            Cell::new("Monthly cost"),
            right(Cell::new(goal)),
            right(Cell::new(kpis.monthly_cost)),
            progress_cell(progress.cost),
        ]);
    }
    table
}

fn progress_cell(percent: Option<u8>) -> Cell {
    match percent {
        Some(percent) => right(Cell::new(format!("{percent}%"))).fg(if percent >= 100 {
            Color::Green
        } else if percent >= 75 {
            Color::DarkYellow
        } else {
            Color::Red
        }),
        None => right(Cell::new("n/a")).add_attribute(Attribute::Dim),
    }
}

#[must_use]
pub fn build_recommendations_table(recommendations: &[Recommendation]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Measure"),
        right(Cell::new("Energy")),
        right(Cell::new("Savings")),
        right(Cell::new("CO₂")),
        right(Cell::new("Payback")),
        right(Cell::new("Score")),
        Cell::new("Details"),
    ]);
    for recommendation in recommendations {
        let details = recommendation
            .details
            .entries()
            .into_iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .join("\n");
        table.add_row(vec![
            Cell::new(format!("{}\n{}", recommendation.title, recommendation.code))
                .add_attribute(Attribute::Bold),
            right(Cell::new(recommendation.delta_energy)),
            right(Cell::new(recommendation.delta_cost)).fg(Color::Green),
            right(Cell::new(recommendation.delta_co2)),
            payback_cell(recommendation.payback),
            right(Cell::new(format!("{:.2}", recommendation.impact_score))).add_attribute(Attribute::Dim),
            Cell::new(format!("{details}\n{}", recommendation.formula)).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

fn payback_cell(payback: Option<Months>) -> Cell {
    match payback {
        Some(payback) => right(Cell::new(payback)).fg(if payback <= Months(12.0) {
            Color::Green
        } else {
            Color::DarkYellow
        }),
        None => right(Cell::new("never")).fg(Color::Red),
    }
}

#[must_use]
pub fn build_scenario_table(scenario: &Scenario, projection: Projection) -> Table {
    let totals = scenario.totals.round_to(2);
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Scenario"),
            right(Cell::new("Measures")),
            right(Cell::new("Energy")),
            right(Cell::new("Savings")),
            right(Cell::new("CO₂")),
            right(Cell::new("Before")),
            right(Cell::new("After")),
        ])
        .add_row(vec![
            Cell::new(&scenario.name).add_attribute(Attribute::Bold),
            right(Cell::new(scenario.recommendations.len())),
            right(Cell::new(totals.saved_kwh)),
            right(Cell::new(totals.saved_cost)).fg(Color::Green),
            right(Cell::new(totals.saved_co2)),
            right(Cell::new(projection.baseline)).add_attribute(Attribute::Dim),
            right(Cell::new(projection.after.round_to(2))).add_attribute(Attribute::Bold),
        ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{assumptions::Assumptions, recommender::generate_recommendations},
        household::Preset,
        quantity::{emission::EmissionFactor, rate::KilowattHourRate},
    };

    #[test]
    fn test_recommendations_table() {
        let recommendations = generate_recommendations(
            &Preset::Basic2Bhk.appliances(),
            KilowattHourRate(8.0),
            EmissionFactor(0.7),
            Assumptions::default(),
        );
        let rendered = build_recommendations_table(&recommendations).to_string();
        assert!(rendered.contains("lighting_swap"));
        assert!(rendered.contains("appliance_id = bulb-1"));
    }

    #[test]
    fn test_breakdown_table() {
        let appliances = Preset::Basic1Bhk.appliances();
        let breakdown: EnergyBreakdown = appliances.iter().collect();
        let rendered = build_breakdown_table(&breakdown, breakdown.top(2)).to_string();
        assert!(rendered.contains("fridge"));
        assert!(!rendered.contains("tv"));
    }
}
