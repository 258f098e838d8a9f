//! RMSE fitness and the parallel batch-evaluation pipeline.

use crate::dataset::Dataset;
use crate::expr::Expression;
use crate::population::Population;

/// Root-mean-squared-error fitness: lower is better. `None` when the
/// dataset has no rows, since the mean is then undefined.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rmse;

impl Rmse {
    pub fn fitness(&self, expr: &Expression, dataset: &Dataset) -> Option<f64> {
        let n = dataset.rows();
        if n == 0 {
            return None;
        }
        let mut sum_sq = 0.0;
        for i in 0..n {
            let (input, output) = dataset.row(i);
            let diff = expr.eval(input) - output;
            sum_sq += diff * diff;
        }
        return Some((sum_sq / n as f64).sqrt());
    }
}

/// Evaluates every individual with invalid fitness, splitting the work
/// into `threads` contiguous chunks (each clamped to the todo list's
/// length, so no chunk boundary can run past the end). Returns the number
/// of individuals evaluated.
pub fn evaluate(pop: &mut Population, rmse: &Rmse, dataset: &Dataset, threads: usize) -> usize {
    let todo: Vec<usize> = pop
        .individuals()
        .iter()
        .enumerate()
        .filter(|(_, ind)| !ind.fitness_valid())
        .map(|(i, _)| i)
        .collect();
    let evals = todo.len();
    if evals == 0 {
        return 0;
    }
    let threads = if evals < threads { 1 } else { threads };
    let chunk_size = (evals + threads - 1) / threads;

    let results: Vec<(usize, Option<f64>)> = if threads <= 1 {
        todo.iter().map(|&i| (i, rmse.fitness(pop.individuals()[i].code(), dataset))).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("failed to build evaluation thread pool");
        use rayon::prelude::*;
        pool.install(|| {
            todo.chunks(chunk_size)
                .collect::<Vec<_>>()
                .par_iter()
                .flat_map(|chunk| chunk.iter().map(|&i| (i, rmse.fitness(pop.individuals()[i].code(), dataset))).collect::<Vec<_>>())
                .collect()
        })
    };

    for (i, fitness) in results {
        let fitness = fitness.unwrap_or(f64::INFINITY);
        pop.individuals_mut()[i].set_fitness(fitness);
    }
    return evals;
}
