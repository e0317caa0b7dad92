use clap::{Parser, Subcommand};
use costsearch::search::{
    GraphProblem, SearchConfig, SearchEngineName, SearchError, SearchProblem, Solution,
    TransportationProblem,
};
use std::{
    fmt::{Debug, Display},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve a search problem with backtracking, dynamic programming or
/// uniform-cost search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "A TOML search config file, command line options override it",
        short = 'c',
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: uniform-cost]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        help = "Maximum search depth for backtracking and dynamic programming",
        long = "max-depth",
        id = "MAX_DEPTH"
    )]
    max_depth: Option<usize>,
    #[arg(
        help = "Maximum number of state expansions",
        long = "max-expansions",
        id = "MAX_EXPANSIONS"
    )]
    max_expansions: Option<usize>,
    #[arg(
        help = "Time limit for the search, e.g. \"30s\" or \"5m\"",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Memory limit for the search in MB",
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(help = "Print the solution as JSON", long = "json")]
    json: bool,
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

#[derive(Subcommand)]
enum Commands {
    /// Travel from block 1 to block N, walking one block for cost 1 or taking
    /// the tram from block s to block 2s for cost 2.
    Transportation {
        #[arg(help = "Number of blocks", short = 'n', long = "blocks", id = "BLOCKS")]
        num_blocks: u64,
    },
    /// Find a cheapest path through a labelled graph described in TOML.
    Graph {
        #[arg(help = "The graph problem file")]
        problem: PathBuf,
    },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
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

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(engine = %config.engine, "configured search");

    let result = match &cli.command {
        Commands::Transportation { num_blocks } => {
            solve(&TransportationProblem::new(*num_blocks), &config, cli.json)
        }
        Commands::Graph { problem } => match GraphProblem::from_path(problem) {
            Ok(problem) => solve(&problem, &config, cli.json),
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<SearchConfig, String> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_path(path).map_err(|e| e.to_string())?,
        None => SearchConfig::default(),
    };
    if let Some(engine) = cli.search_engine_name {
        config.engine = engine;
    }
    if let Some(max_depth) = cli.max_depth {
        config.limits.max_depth = max_depth;
    }
    if cli.max_expansions.is_some() {
        config.limits.max_expansions = cli.max_expansions;
    }
    if cli.time_limit.is_some() {
        config.limits.time_limit = cli.time_limit;
    }
    if cli.memory_limit_mb.is_some() {
        config.limits.memory_limit_mb = cli.memory_limit_mb;
    }
    Ok(config)
}

fn solve<P: SearchProblem>(
    problem: &P,
    config: &SearchConfig,
    json: bool,
) -> Result<(), SearchError> {
    let solution = config.engine.search(problem, config.limits)?;
    if solution.is_solved() {
        info!("solution found");
        info!(
            total_cost = solution.total_cost().into_inner(),
            solution_length = solution.len()
        );
    } else {
        info!("no solution found");
    }
    print_solution(&solution, json);
    Ok(())
}

fn print_solution<S: Debug, A: Display>(solution: &Solution<S, A>, json: bool) {
    if json {
        match serde_json::to_string_pretty(&solution.to_report()) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("failed to serialise solution: {}", e),
        }
    } else {
        println!("{}", solution);
    }
}
