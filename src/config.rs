//! Command-line surface and the validated run configuration it produces.

use clap::{Parser, ValueEnum};
use rand::RngCore;
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SelectorKind {
    #[value(name = "tour")]
    Tournament,
    #[value(name = "rol")]
    Roulette,
    #[value(name = "lex")]
    Lexicase,
    #[value(name = "rand")]
    Random,
}

/// Raw command-line arguments, parsed by `clap` before validation.
#[derive(Parser, Debug)]
#[command(name = "symb-regr-gp", about = "Symbolic regression via tree-based genetic programming")]
pub struct Cli {
    #[arg(long, default_value_t = 20)]
    pub popsize: i64,

    #[arg(long, default_value_t = 0)]
    pub elitism: i64,

    #[arg(long, default_value_t = 2)]
    pub toursize: i64,

    #[arg(long, value_enum, default_value_t = SelectorKind::Tournament)]
    pub selector: SelectorKind,

    #[arg(long, default_value_t = 10)]
    pub gens: i64,

    #[arg(long, default_value_t = 1)]
    pub threads: i64,

    #[arg(long, default_value = "datasets/synth1/synth1-train.csv")]
    pub file: String,

    #[arg(long, default_value_t = 0.9)]
    pub cxprob: f64,

    #[arg(long, default_value_t = 0.05)]
    pub mutprob: f64,

    #[arg(long, default_value_t = 1)]
    pub seed: i64,

    #[arg(long, default_value_t = false)]
    pub getstats: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    NonPositive { flag: &'static str, value: i64 },
    Negative { flag: &'static str, value: i64 },
    TournamentSizeTooSmall(i64),
    ProbabilityOutOfRange { flag: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { flag, value } => write!(f, "--{} must be > 0, got {}", flag, value),
            ConfigError::Negative { flag, value } => write!(f, "--{} must be >= 0, got {}", flag, value),
            ConfigError::TournamentSizeTooSmall(v) => write!(f, "--toursize must be >= 2 when --selector=tour, got {}", v),
            ConfigError::ProbabilityOutOfRange { flag, value } => write!(f, "--{} must be within [0, 1], got {}", flag, value),
        }
    }
}

impl StdError for ConfigError {}

/// A fully validated configuration, immutable for the life of the run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub popsize: usize,
    pub elitism: usize,
    pub toursize: usize,
    pub selector: SelectorKind,
    pub gens: usize,
    pub threads: usize,
    pub file: String,
    pub cxprob: f64,
    pub mutprob: f64,
    pub seed: i64,
    pub getstats: bool,
}

impl TryFrom<Cli> for RunConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.popsize <= 0 {
            return Err(ConfigError::NonPositive { flag: "popsize", value: cli.popsize });
        }
        if cli.elitism < 0 {
            return Err(ConfigError::Negative { flag: "elitism", value: cli.elitism });
        }
        if cli.gens <= 0 {
            return Err(ConfigError::NonPositive { flag: "gens", value: cli.gens });
        }
        if cli.threads <= 0 {
            return Err(ConfigError::NonPositive { flag: "threads", value: cli.threads });
        }
        if cli.selector == SelectorKind::Tournament && cli.toursize < 2 {
            return Err(ConfigError::TournamentSizeTooSmall(cli.toursize));
        }
        if !(0.0..=1.0).contains(&cli.cxprob) {
            return Err(ConfigError::ProbabilityOutOfRange { flag: "cxprob", value: cli.cxprob });
        }
        if !(0.0..=1.0).contains(&cli.mutprob) {
            return Err(ConfigError::ProbabilityOutOfRange { flag: "mutprob", value: cli.mutprob });
        }

        let seed = if cli.seed <= 0 {
            let mut os_rng = rand::rngs::OsRng;
            let drawn = (os_rng.next_u64() >> 1) as i64;
            log::info!("seed <= 0 supplied; drew random seed {}", drawn);
            drawn
        } else {
            cli.seed
        };

        return Ok(RunConfig {
            popsize: cli.popsize as usize,
            elitism: cli.elitism as usize,
            toursize: cli.toursize.max(0) as usize,
            selector: cli.selector,
            gens: cli.gens as usize,
            threads: cli.threads as usize,
            file: cli.file,
            cxprob: cli.cxprob,
            mutprob: cli.mutprob,
            seed,
            getstats: cli.getstats,
        });
    }
}
