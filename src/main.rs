use std::path::Path;

use clap::{Parser, crate_version};
use energy_advisor::{
    cli::{Args, Command, InitArgs, OutputArgs, ScenarioArgs},
    core::{
        breakdown::EnergyBreakdown,
        kpi::Kpis,
        ranking::rank,
        recommendation::Recommendation,
        recommender::Recommender,
        scenario::{Projection, Scenario, ScenarioTotals},
    },
    household::Household,
    prelude::*,
    tables::{
        build_appliances_table,
        build_breakdown_table,
        build_goals_table,
        build_kpis_table,
        build_recommendations_table,
        build_scenario_table,
    },
};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Energy hogs shown on the dashboard.
const N_TOP_CONSUMERS: usize = 5;

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy())
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    match args.command {
        Command::Init(init_args) => init(&args.household_path, &init_args),
        Command::Kpis => kpis(&Household::read_from(&args.household_path)?),
        Command::Recommend(recommend_args) => {
            recommend(&Household::read_from(&args.household_path)?, recommend_args.output)
        }
        Command::Scenario(scenario_args) => {
            scenario(&Household::read_from(&args.household_path)?, scenario_args)
        }
    }
}

fn init(path: &Path, args: &InitArgs) -> Result {
    ensure!(
        args.force || !path.exists(),
        "`{}` already exists, pass `--force` to overwrite it",
        path.display(),
    );
    let household = Household::from_preset(args.preset);
    household.write_to(path)?;
    info!(path = %path.display(), n_appliances = household.appliances.len(), "created");
    Ok(())
}

fn kpis(household: &Household) -> Result {
    let kpis = Kpis::compute(&household.appliances, household.tariff, household.emission_factor);
    let breakdown: EnergyBreakdown = household.appliances.iter().collect();
    println!("{}", build_appliances_table(&household.appliances));
    println!("{}", build_kpis_table(&kpis));
    println!("{}", build_breakdown_table(&breakdown, breakdown.entries()));
    println!("{}", build_breakdown_table(&breakdown, breakdown.top(N_TOP_CONSUMERS)));
    println!("{}", build_goals_table(&household.goals, household.goals.progress(&kpis), &kpis));
    Ok(())
}

fn recommendations(household: &Household, output: OutputArgs) -> Vec<Recommendation> {
    let mut recommendations = Recommender::builder()
        .appliances(&household.appliances)
        .tariff(household.tariff)
        .emission_factor(household.emission_factor)
        .assumptions(household.assumptions())
        .generate();
    rank(&mut recommendations, output.rank);
    recommendations
}

fn recommend(household: &Household, output: OutputArgs) -> Result {
    let recommendations = recommendations(household, output);
    info!(n_recommendations = recommendations.len(), rank = ?output.rank, "generated");
    if output.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        println!("{}", build_recommendations_table(&recommendations));
    }
    Ok(())
}

#[derive(Serialize)]
struct ScenarioReport<'a> {
    name: &'a str,
    recommendations: &'a [Recommendation],
    totals: ScenarioTotals,
    projection: Projection,
}

fn scenario(household: &Household, args: ScenarioArgs) -> Result {
    let baseline = Kpis::compute(&household.appliances, household.tariff, household.emission_factor);
    let measures = args.measures();
    let recommendations = recommendations(household, args.output);
    let scenario = Scenario::from_selection(args.name, recommendations, measures);
    let projection = scenario.totals.project(&baseline);
    info!(scenario = %scenario.name, n_recommendations = scenario.recommendations.len(), "built");
    if args.output.json {
        let report = ScenarioReport {
            name: &scenario.name,
            recommendations: &scenario.recommendations,
            totals: scenario.totals.round_to(2),
            projection: Projection { baseline: projection.baseline, after: projection.after.round_to(2) },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", build_recommendations_table(&scenario.recommendations));
        println!("{}", build_scenario_table(&scenario, projection));
    }
    Ok(())
}
