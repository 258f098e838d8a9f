//! Orchestrates generations: single run or a 30-seed statistical sweep.

use crate::config::{RunConfig, SelectorKind};
use crate::dataset::{self, Dataset};
use crate::error::Error;
use crate::evaluator::{evaluate, Rmse};
use crate::generator::Generator;
use crate::genetic_ops::apply_genetic_ops;
use crate::individual::Individual;
use crate::opcode::OpSet;
use crate::population::Population;
use crate::selector::Selector;
use crate::stats::{StatsAccumulator, StatsRow};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Number of seeds swept when `getstats` is set.
pub const SWEEP_RUNS: usize = 30;

/// Depth bounds for the Ramped half-and-half initializer. Kept below
/// `MAX_DEPTH` so an initial individual cannot itself violate the depth
/// guard applied later to genetic operators.
const INIT_MIN_DEPTH: usize = 2;
const INIT_MAX_DEPTH: usize = 6;

pub enum RunOutcome {
    Single { rows: Vec<StatsRow>, best: Option<Individual> },
    Sweep { rows: Vec<StatsRow> },
}

fn selector_for(config: &RunConfig) -> Selector {
    match config.selector {
        SelectorKind::Tournament => Selector::Tournament { size: config.toursize },
        SelectorKind::Roulette => Selector::Roulette,
        SelectorKind::Lexicase => Selector::Lexicase,
        SelectorKind::Random => Selector::Random,
    }
}

/// Runs the evolutionary loop once with the given seed, returning the
/// per-generation statistics and the fittest individual found.
fn run_once(config: &RunConfig, dataset: &Dataset, opset: &OpSet, seed: u64) -> (Vec<StatsRow>, Option<Individual>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let generator = Generator::Ramped { min_depth: INIT_MIN_DEPTH, max_depth: INIT_MAX_DEPTH };
    let selector = selector_for(config);
    let rmse = Rmse;

    let mut pop = Population::create(config.popsize, &generator, opset, &mut rng);
    let mut evals = evaluate(&mut pop, &rmse, dataset, config.threads);

    let mut rows = Vec::with_capacity(config.gens);
    for gen in 0..config.gens {
        let (better_children, worse_children) = if gen == 0 {
            (0.0, 0.0)
        } else {
            let parents = selector.select(&pop, config.popsize, config.elitism, dataset, config.threads, &mut rng);
            let (offspring, better, worse) = apply_genetic_ops(&parents, &generator, opset, config.cxprob, config.mutprob, &mut rng);
            pop = offspring;
            evals = evaluate(&mut pop, &rmse, dataset, config.threads);
            (better, worse)
        };

        let stats = pop.get_stats();
        rows.push(StatsRow {
            gen,
            evals,
            repeated: stats.repeated,
            best_fit: stats.best_fit,
            worst_fit: stats.worst_fit,
            mean_fit: stats.mean_fit,
            max_size: stats.max_size,
            min_size: stats.min_size,
            mean_size: stats.mean_size,
            better_children,
            worse_children,
        });
    }

    let best = pop.best().cloned();
    return (rows, best);
}

pub fn run(config: &RunConfig) -> Result<RunOutcome, Error> {
    let dataset = dataset::load(&config.file)?;
    let opset = OpSet::new(dataset.variables());

    if config.getstats {
        let mut accumulator = StatsAccumulator::new();
        for run_index in 0..SWEEP_RUNS {
            let seed = (config.seed as u64).wrapping_add(run_index as u64);
            log::info!("sweep run {} of {} (seed {})", run_index + 1, SWEEP_RUNS, seed);
            let (rows, _best) = run_once(config, &dataset, &opset, seed);
            accumulator.push_run(rows);
        }
        let averaged = accumulator.averaged();
        std::fs::create_dir_all("analysis")?;
        let file = std::fs::File::create("analysis/data.csv")?;
        StatsAccumulator::write_csv(&averaged, file)?;
        return Ok(RunOutcome::Sweep { rows: averaged });
    }

    let (rows, best) = run_once(config, &dataset, &opset, config.seed as u64);
    return Ok(RunOutcome::Single { rows, best });
}
