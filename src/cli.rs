use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use numbers_game::{
    BestResult, HeuristicKind, InformedConfig, SolverError, solve_exhaustive, solve_informed,
    solve_memoized, validate_inputs,
};

/// Scenarios run by `--demo`
const DEMO_SCENARIOS: &[(f64, &[f64])] = &[
    (25.0, &[1.0, 2.0, 3.0, 4.0]),
    (525.0, &[5.0, 7.0, 10.0, 13.0]),
    (25.0, &[1.0, 2.0, 3.0, 4.0, 5.0]),
    (147.0, &[4.0, 5.0, 8.0, 20.0, 27.0]),
    (432.0, &[3.0, 5.0, 7.0, 11.0, 13.0]),
    (737.0, &[1.0, 4.0, 5.0, 6.0, 7.0, 25.0]),
    (728.0, &[6.0, 10.0, 25.0, 75.0, 5.0, 50.0]),
];

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Which search strategies to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Exhaustive,
    Memoized,
    Informed,
    /// Every strategy, and the informed search once per heuristic
    All,
}

/// Frontier ordering for the informed search
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    Remaining,
    Difference,
    RatioMax,
    RatioMin,
}

impl HeuristicArg {
    pub fn to_heuristic_kind(self) -> HeuristicKind {
        match self {
            HeuristicArg::Remaining => HeuristicKind::Remaining,
            HeuristicArg::Difference => HeuristicKind::Difference,
            HeuristicArg::RatioMax => HeuristicKind::RatioMax,
            HeuristicArg::RatioMin => HeuristicKind::RatioMin,
        }
    }
}

/// Numbers game - combine numbers with + - * / to get as close as possible to a target
#[derive(Parser, Debug)]
#[command(name = "numbers-game")]
#[command(about = "Find arithmetic expressions over a set of numbers closest to a target value")]
#[command(version, allow_negative_numbers = true)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(required_unless_present = "demo")]
    pub target: Option<f64>,

    /// Source numbers; each may be used at most once
    #[arg(required_unless_present = "demo")]
    pub numbers: Vec<f64>,

    /// Search strategy to run
    #[arg(short, long, value_enum, default_value = "all")]
    pub strategy: StrategyArg,

    /// Heuristic for the informed search (ignored by `all`, which runs every heuristic)
    #[arg(long, value_enum, default_value = "difference")]
    pub heuristic: HeuristicArg,

    /// Let the informed search reuse recorded partial results
    #[arg(long)]
    pub memo: bool,

    /// Let the informed search skip mirrored orderings of + and *
    #[arg(long)]
    pub dedup: bool,

    /// Run the built-in scenarios instead of a single query
    #[arg(long, conflicts_with_all = ["target", "numbers"])]
    pub demo: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// One target/numbers query
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub target: f64,
    pub numbers: Vec<f64>,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub scenarios: Vec<Scenario>,
    pub strategy: StrategyArg,
    pub heuristic: HeuristicKind,
    pub informed: InformedConfig,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let scenarios = match args.target {
        Some(target) if !args.demo => {
            validate_inputs(target, &args.numbers).context("Invalid target or numbers")?;
            vec![Scenario {
                target,
                numbers: args.numbers,
            }]
        }
        _ => DEMO_SCENARIOS
            .iter()
            .map(|(target, numbers)| Scenario {
                target: *target,
                numbers: numbers.to_vec(),
            })
            .collect(),
    };

    Ok(CliConfig {
        scenarios,
        strategy: args.strategy,
        heuristic: args.heuristic.to_heuristic_kind(),
        informed: InformedConfig::new(args.memo, args.dedup),
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Wall-clock time as `s . ms us ns`
fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.subsec_nanos();
    format!(
        "{:03} . {:03} {:03} {:03}",
        elapsed.as_secs(),
        nanos / 1_000_000,
        nanos / 1_000 % 1_000,
        nanos % 1_000
    )
}

fn format_report(label: &str, result: &BestResult, elapsed: Duration) -> String {
    let best = format!("{} = {}", result.expression.infix(), result.value);
    format!(
        "{:<11} best: {:>30}, explored {:>10} nodes in {} seconds",
        label,
        best,
        result.explored,
        format_elapsed(elapsed)
    )
}

fn timed<F>(label: &str, scenario: &Scenario, search: F) -> Result<()>
where
    F: FnOnce() -> Result<BestResult, SolverError>,
{
    let start = Instant::now();
    let result = search().with_context(|| format!("{} search failed", label))?;
    let elapsed = start.elapsed();

    if !result.is_exact(scenario.target) {
        warn!(
            "{}: no exact match for {}, closest is {}",
            label, scenario.target, result.value
        );
    }
    println!("{}", format_report(label, &result, elapsed));
    Ok(())
}

fn run_scenario(config: &CliConfig, scenario: &Scenario) -> Result<()> {
    let target = scenario.target;
    let numbers = scenario.numbers.as_slice();
    let total = numbers.len();

    println!("target: {}", target);
    println!(
        "numbers: {}",
        numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    if matches!(config.strategy, StrategyArg::Exhaustive | StrategyArg::All) {
        timed("DFS", scenario, || solve_exhaustive(target, numbers))?;
    }
    if matches!(config.strategy, StrategyArg::Memoized | StrategyArg::All) {
        timed("DFS MEMO", scenario, || solve_memoized(target, numbers))?;
    }
    match config.strategy {
        StrategyArg::Informed => {
            let kind = config.heuristic;
            timed(kind.label(), scenario, || {
                solve_informed(target, numbers, config.informed, kind.build(target, total))
            })?;
        }
        StrategyArg::All => {
            for kind in HeuristicKind::ALL {
                timed(kind.label(), scenario, || {
                    solve_informed(target, numbers, config.informed, kind.build(target, total))
                })?;
            }
        }
        StrategyArg::Exhaustive | StrategyArg::Memoized => {}
    }

    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Running {} scenario(s) with strategy {:?}",
        config.scenarios.len(),
        config.strategy
    );

    for scenario in &config.scenarios {
        run_scenario(&config, scenario)?;
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numbers_game::Expression;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_heuristic_conversion() {
        assert_eq!(
            HeuristicArg::Remaining.to_heuristic_kind(),
            HeuristicKind::Remaining
        );
        assert_eq!(
            HeuristicArg::Difference.to_heuristic_kind(),
            HeuristicKind::Difference
        );
        assert_eq!(
            HeuristicArg::RatioMax.to_heuristic_kind(),
            HeuristicKind::RatioMax
        );
        assert_eq!(
            HeuristicArg::RatioMin.to_heuristic_kind(),
            HeuristicKind::RatioMin
        );
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "numbers-game",
            "25",
            "1",
            "2",
            "3",
            "4",
            "--strategy",
            "informed",
            "--heuristic",
            "ratio-max",
            "--memo",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, Some(25.0));
            assert_eq!(args.numbers, vec![1.0, 2.0, 3.0, 4.0]);
            assert_eq!(args.strategy, StrategyArg::Informed);
            assert_eq!(args.heuristic, HeuristicArg::RatioMax);
            assert!(args.memo);
            assert!(!args.dedup);
            assert!(!args.demo);
        }
    }

    #[test]
    fn test_cli_args_negative_values() {
        let args = CliArgs::try_parse_from(["numbers-game", "-7", "2", "-9"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, Some(-7.0));
            assert_eq!(args.numbers, vec![2.0, -9.0]);
            assert_eq!(args.strategy, StrategyArg::All);
        }
    }

    #[test]
    fn test_cli_args_require_query_or_demo() {
        assert!(CliArgs::try_parse_from(["numbers-game"]).is_err());
        assert!(CliArgs::try_parse_from(["numbers-game", "--demo"]).is_ok());
        assert!(CliArgs::try_parse_from(["numbers-game", "--demo", "25", "1"]).is_err());
    }

    #[test]
    fn test_config_from_query() -> Result<()> {
        let args = CliArgs::try_parse_from(["numbers-game", "6", "2", "3", "--dedup"])?;
        let config = config_from_args(args)?;
        assert_eq!(
            config.scenarios,
            vec![Scenario {
                target: 6.0,
                numbers: vec![2.0, 3.0],
            }]
        );
        assert_eq!(config.informed, InformedConfig::new(false, true));
        assert_eq!(config.heuristic, HeuristicKind::Difference);
        Ok(())
    }

    #[test]
    fn test_config_from_demo() -> Result<()> {
        let args = CliArgs::try_parse_from(["numbers-game", "--demo"])?;
        let config = config_from_args(args)?;
        assert_eq!(config.scenarios.len(), DEMO_SCENARIOS.len());
        assert_eq!(config.scenarios.first().map(|s| s.target), Some(25.0));
        Ok(())
    }

    #[test]
    fn test_config_rejects_non_finite_target() -> Result<()> {
        let args = CliArgs::try_parse_from(["numbers-game", "inf", "1", "2"])?;
        assert!(config_from_args(args).is_err());
        Ok(())
    }

    #[test]
    fn test_format_elapsed() {
        let elapsed = Duration::new(2, 3_004_005);
        assert_eq!(format_elapsed(elapsed), "002 . 003 004 005");
    }

    #[test]
    fn test_format_report() {
        let result = BestResult {
            expression: Expression::binary(
                numbers_game::Operator::Mul,
                Expression::literal(2.0),
                Expression::literal(3.0),
            ),
            value: 6.0,
            explored: 42,
        };
        let line = format_report("DFS", &result, Duration::from_millis(1));
        assert!(line.starts_with("DFS         best:"));
        assert!(line.contains("2 * 3 = 6"));
        assert!(line.contains("explored         42 nodes"));
        assert!(line.ends_with("000 . 001 000 000 seconds"));
    }
}
