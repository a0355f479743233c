use clap::Parser;
use mdp_search::{
    config::PlannerConfig,
    domains::GridWorld,
    search::{PlannerBuilder, SearchEngineName, SearchResult},
    Error, Result, Verbosity,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Plan a path through a grid world map.
struct Cli {
    #[arg(help = "The map file, '#' walls, '.' free cells, 'S' start and 'G' goal")]
    map: PathBuf,
    #[arg(
        help = "TOML file with the cost weight and search limits",
        short = 'c',
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "Weight of the accumulated reward, overrides the configuration. \
        Only used by the weighted-greedy engine.",
        short = 'w',
        long = "weight",
        id = "WEIGHT"
    )]
    weight: Option<f64>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::WeightedGreedy
    )]
    search_engine_name: SearchEngineName,
    #[arg(help = "Write the plan to this file", short = 'o', long = "output", id = "OUTPUT")]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match plan(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether a plan was found.
fn plan(cli: Cli) -> Result<bool> {
    let mut config = match &cli.config {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(weight) = cli.weight {
        config = config.with_cost_weight(weight);
    }

    let map_text = std::fs::read_to_string(&cli.map).map_err(|source| Error::Io {
        operation: format!("read map {}", cli.map.display()),
        source,
    })?;
    let grid = GridWorld::parse(&map_text)?;
    info!(width = grid.width(), height = grid.height());

    let mut planner = PlannerBuilder::new()
        .transition_source(grid.domain())
        .goal(grid.goal_condition())
        .heuristic(grid.heuristic())
        .evaluation(cli.search_engine_name.evaluation(config.cost_weight)?)
        .limits(config.limits()?)
        .structural_equivalence()
        .build()?;

    match planner.plan_from_state(&grid.start())? {
        SearchResult::Success(plan) => {
            let steps = plan
                .steps()
                .map(|(state, action)| format!("{} {}", state, action))
                .collect::<Vec<_>>()
                .join("\n");

            println!("Plan found:");
            println!("{}", steps);
            println!("{}", grid.render(plan.states()));
            println!("Plan length: {}", plan.len());
            println!("Plan reward: {}", plan.total_reward());

            if let Some(path) = &cli.plan {
                std::fs::write(path, steps).map_err(|source| Error::Io {
                    operation: format!("write plan {}", path.display()),
                    source,
                })?;
            }
            Ok(true)
        }
        result => {
            println!("No plan found: {:?}", result);
            Ok(false)
        }
    }
}
