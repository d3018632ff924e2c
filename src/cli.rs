use std::path::PathBuf;

use clap::{Parser, Subcommand};
use enumset::EnumSet;

use crate::{
    core::{ranking::RankMode, recommendation::MeasureCode},
    household::Preset,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Household file with the appliance inventory.
    #[clap(long = "household", env = "HOUSEHOLD_PATH", default_value = "household.toml", global = true)]
    pub household_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a household file from a preset appliance pack.
    Init(InitArgs),

    /// Show the appliances, consumption KPIs, breakdown and goal progress.
    Kpis,

    /// List the ranked efficiency recommendations.
    Recommend(RecommendArgs),

    /// Combine selected recommendations into a what-if scenario.
    Scenario(ScenarioArgs),
}

#[derive(Parser)]
pub struct InitArgs {
    #[clap(long, value_enum, default_value = "demo")]
    pub preset: Preset,

    /// Overwrite an existing household file.
    #[clap(long)]
    pub force: bool,
}

#[derive(Copy, Clone, Parser)]
pub struct OutputArgs {
    #[clap(long, value_enum, default_value = "cost", env = "RANK_MODE")]
    pub rank: RankMode,

    /// Print JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct RecommendArgs {
    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct ScenarioArgs {
    #[clap(long, default_value = "My scenario")]
    pub name: String,

    /// Measures to include, all of them when omitted.
    #[clap(long = "measure", value_enum, value_delimiter = ',', num_args = 1..)]
    pub measures: Vec<MeasureCode>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl ScenarioArgs {
    #[must_use]
    pub fn measures(&self) -> EnumSet<MeasureCode> {
        if self.measures.is_empty() { EnumSet::all() } else { self.measures.iter().copied().collect() }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_scenario_measures() {
        let args = Args::try_parse_from([
            "energy-advisor",
            "scenario",
            "--measure",
            "lighting_swap,standby_cut",
        ])
        .unwrap();
        let Command::Scenario(args) = args.command else { panic!("expected the scenario command") };
        assert_eq!(args.measures(), MeasureCode::LightingSwap | MeasureCode::StandbyCut);
    }

    #[test]
    fn test_scenario_all_measures_by_default() {
        let args = Args::try_parse_from(["energy-advisor", "scenario"]).unwrap();
        let Command::Scenario(args) = args.command else { panic!("expected the scenario command") };
        assert_eq!(args.measures(), EnumSet::all());
    }
}
