use std::path::PathBuf;
use std::sync::Once;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use psum_core::{AccumulatorMode, BenchConfig, BenchRunner, Comparison, SumStrategy};
use tracing::info;


static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "psum=info,psum_core=info,psum_cli=info";

#[derive(Debug, Parser)]
#[command(
    name = "psum",
    author,
    version,
    about = "Partitioned summation benchmark",
    long_about = None
)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate samples and time the summation strategies on them.
    Run {
        /// Strategy to run; `all` compares every strategy on the same sample
        #[arg(long, value_enum, default_value_t = StrategyArg::All)]
        strategy: StrategyArg,
        /// Write the suite report as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the effective configuration as TOML.
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Debug, Clone, Default, Args)]
struct ConfigArgs {
    /// TOML configuration file; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Element count to benchmark (repeatable)
    #[arg(long = "size", value_name = "N")]
    sizes: Vec<usize>,
    /// Worker count for the partitioned and parallel-query strategies
    #[arg(long, value_name = "W")]
    workers: Option<usize>,
    /// Seed for reproducible samples
    #[arg(long)]
    seed: Option<u64>,
    /// How partition workers combine partial sums
    #[arg(long, value_enum)]
    accumulator: Option<AccumulatorArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Sequential,
    Partitioned,
    ParallelQuery,
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<SumStrategy> {
        match self {
            StrategyArg::Sequential => vec![SumStrategy::Sequential],
            StrategyArg::Partitioned => vec![SumStrategy::Partitioned],
            StrategyArg::ParallelQuery => vec![SumStrategy::ParallelQuery],
            StrategyArg::All => SumStrategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AccumulatorArg {
    Atomic,
    Collected,
}

impl From<AccumulatorArg> for AccumulatorMode {
    fn from(value: AccumulatorArg) -> Self {
        match value {
            AccumulatorArg::Atomic => AccumulatorMode::Atomic,
            AccumulatorArg::Collected => AccumulatorMode::Collected,
        }
    }
}

impl ConfigArgs {
    /// Layer the flags over the config file (or defaults).
    fn resolve(&self) -> anyhow::Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)?,
            None => BenchConfig::default(),
        };
        if !self.sizes.is_empty() {
            config.sizes = self.sizes.clone();
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(accumulator) = self.accumulator {
            config.accumulator = accumulator.into();
        }
        config.validate()?;
        Ok(config)
    }
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    !(trimmed.is_empty()
        || trimmed == "0"
        || trimmed.eq_ignore_ascii_case("false")
        || trimmed.eq_ignore_ascii_case("off"))
}

/// `PSUM_TRACE=1` enables the default filter; any other non-toggle value is
/// used as the filter expression itself.
fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed == "1" || trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("on") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn maybe_init_tracing() {
    let raw = match std::env::var("PSUM_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

fn print_comparison(comparison: &Comparison) {
    for run in &comparison.runs {
        println!(
            "{:<15} {:>10} elements  {:>12.3} ms  sum = {}",
            run.strategy.name(),
            run.elements,
            run.elapsed_ms,
            run.total
        );
    }
    if comparison.runs.len() > 1 {
        if let Some(fastest) = comparison.fastest() {
            println!("fastest for {} elements: {}", comparison.elements, fastest.strategy);
        }
    }
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let CliArgs { command } = CliArgs::parse();

    match command {
        Commands::Run { strategy, json, config } => {
            let config = config.resolve()?;
            let mut runner = BenchRunner::new(config)?;
            let report = runner.run_suite(&strategy.strategies())?;
            for comparison in &report.comparisons {
                print_comparison(comparison);
            }
            if let Some(path) = json {
                report.write_json(&path)?;
                info!(target: "psum_cli", "report written to {}", path.display());
            }
        }
        Commands::Config { config } => {
            let config = config.resolve()?;
            let text = config.to_toml_string().context("render configuration")?;
            print!("{}", text);
        }
    }

    Ok(())
}
