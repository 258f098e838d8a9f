//! Parent selection strategies.

use crate::dataset::Dataset;
use crate::individual::Individual;
use crate::population::Population;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

#[derive(Clone, Copy, Debug)]
pub enum Selector {
    Random,
    Tournament { size: usize },
    Roulette,
    Lexicase,
}

impl Selector {
    /// Returns a new population of exactly `num` individuals. The first
    /// `elitism` slots are the top-`elitism` individuals from `pop`; the
    /// rest are chosen by this selector's method.
    pub fn select(&self, pop: &Population, num: usize, elitism: usize, dataset: &Dataset, threads: usize, rng: &mut StdRng) -> Population {
        let elitism = elitism.min(num);
        let mut out: Vec<Individual> = pop.n_best(elitism);
        let remaining = num - elitism;

        match self {
            Selector::Random => {
                for _ in 0..remaining {
                    let idx = rng.gen_range(0..pop.len());
                    out.push(pop.individuals()[idx].clone());
                }
            }
            Selector::Tournament { size } => {
                for _ in 0..remaining {
                    out.push(tournament_pick(pop, *size, rng));
                }
            }
            Selector::Roulette => {
                out.extend(roulette_pick_many(pop, remaining, rng));
            }
            Selector::Lexicase => {
                out.extend(lexicase_select(pop, remaining, dataset, threads, rng));
            }
        }
        return Population::from_vec(out);
    }
}

fn tournament_pick(pop: &Population, size: usize, rng: &mut StdRng) -> Individual {
    let indivs = pop.individuals();
    let mut best: Option<&Individual> = None;
    for _ in 0..size {
        let idx = rng.gen_range(0..indivs.len());
        let candidate = &indivs[idx];
        if !candidate.fitness_valid() {
            continue;
        }
        best = match best {
            None => Some(candidate),
            Some(b) if candidate.fitness() < b.fitness() => Some(candidate),
            Some(b) => Some(b),
        };
    }
    return match best {
        Some(b) => b.clone(),
        None => {
            log::error!("tournament selection found no individual with valid fitness");
            panic!("tournament selection requires at least one valid-fitness individual");
        }
    };
}

fn roulette_pick_many(pop: &Population, count: usize, rng: &mut StdRng) -> Vec<Individual> {
    let indivs = pop.individuals();
    let fits: Vec<f64> = indivs.iter().map(|i| i.fitness()).collect();
    let s: f64 = fits.iter().sum();
    // w_i = 1 - fitness_i / S; may be negative when fitness_i > S, reproduced verbatim.
    let weights: Vec<f64> = fits.iter().map(|f| 1.0 - f / s).collect();
    let w: f64 = weights.iter().sum();

    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let u = rng.gen::<f64>() * w;
        let mut running = 0.0;
        let mut chosen = indivs.len() - 1;
        for (i, wt) in weights.iter().enumerate() {
            running += wt;
            if running > u {
                chosen = i;
                break;
            }
        }
        picked.push(indivs[chosen].clone());
    }
    return picked;
}

fn lexicase_select(pop: &Population, num: usize, dataset: &Dataset, threads: usize, rng: &mut StdRng) -> Vec<Individual> {
    if num == 0 {
        return Vec::new();
    }
    let threads = if num < threads { 1 } else { threads };
    let chunk_size = (num + threads - 1) / threads;
    let chunk_count = (num + chunk_size - 1) / chunk_size;
    // Draw each worker's seed from the shared stream before dispatch, so
    // reproducibility does not depend on OS thread scheduling.
    let seeds: Vec<u64> = (0..chunk_count).map(|_| rng.gen()).collect();
    let candidates: Vec<Individual> = pop.individuals().to_vec();

    let run_chunk = |chunk_idx: usize, seed: u64| -> Vec<Individual> {
        let count = if chunk_idx == chunk_count - 1 { num - chunk_idx * chunk_size } else { chunk_size };
        let mut worker_rng = StdRng::seed_from_u64(seed);
        (0..count).map(|_| lexicase_one(&candidates, dataset, &mut worker_rng)).collect()
    };

    let results: Vec<Vec<Individual>> = if threads <= 1 {
        seeds.iter().enumerate().map(|(i, &seed)| run_chunk(i, seed)).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("failed to build lexicase thread pool");
        pool.install(|| seeds.par_iter().enumerate().map(|(i, &seed)| run_chunk(i, seed)).collect())
    };
    return results.into_iter().flatten().collect();
}

fn lexicase_one(pop: &[Individual], dataset: &Dataset, rng: &mut StdRng) -> Individual {
    let mut cases: Vec<usize> = (0..dataset.rows()).collect();
    let mut candidates: Vec<Individual> = pop.to_vec();
    loop {
        if cases.is_empty() {
            let idx = rng.gen_range(0..candidates.len());
            return candidates[idx].clone();
        }
        let case_idx = rng.gen_range(0..cases.len());
        let case = cases.remove(case_idx);
        let (input, output) = dataset.row(case);
        let case_fits: Vec<f64> = candidates.iter().map(|ind| (ind.code().eval(input) - output).abs()).collect();
        let best = case_fits.iter().cloned().fold(f64::INFINITY, f64::min);
        candidates = candidates
            .into_iter()
            .zip(case_fits)
            .filter(|(_, f)| *f == best)
            .map(|(ind, _)| ind)
            .collect();
        if candidates.len() == 1 {
            return candidates.into_iter().next().unwrap();
        }
    }
}
