//! A population of individuals and its aggregate statistics.

use crate::generator::Generator;
use crate::individual::Individual;
use crate::opcode::OpSet;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug)]
pub struct Stats {
    pub best_fit: f64,
    pub worst_fit: f64,
    pub mean_fit: f64,
    pub max_size: usize,
    pub min_size: usize,
    pub mean_size: f64,
    pub repeated: usize,
}

#[derive(Clone, Debug)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn create(n: usize, generator: &Generator, opset: &OpSet, rng: &mut impl Rng) -> Self {
        let individuals = (0..n).map(|_| Individual::new(generator.generate(opset, rng))).collect();
        return Population { individuals };
    }

    pub fn from_vec(individuals: Vec<Individual>) -> Self {
        return Population { individuals };
    }

    pub fn len(&self) -> usize {
        return self.individuals.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.individuals.is_empty();
    }

    pub fn individuals(&self) -> &[Individual] {
        return &self.individuals;
    }

    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        return &mut self.individuals;
    }

    /// The valid-fitness individual minimizing fitness, or `None` if every
    /// individual's fitness is invalid.
    pub fn best(&self) -> Option<&Individual> {
        return self
            .individuals
            .iter()
            .filter(|i| i.fitness_valid())
            .min_by(|a, b| a.fitness().partial_cmp(&b.fitness()).unwrap_or(Ordering::Equal));
    }

    /// The `min(k, len)` best individuals, ascending by fitness; invalid
    /// fitness sorts last. Stable, so ties preserve input order.
    pub fn n_best(&self, k: usize) -> Vec<Individual> {
        let mut sorted = self.individuals.clone();
        sorted.sort_by(|a, b| match (a.fitness_valid(), b.fitness_valid()) {
            (true, true) => a.fitness().partial_cmp(&b.fitness()).unwrap_or(Ordering::Equal),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        });
        sorted.truncate(k.min(sorted.len()));
        return sorted;
    }

    pub fn get_stats(&self) -> Stats {
        let n = self.individuals.len();
        let valid_fits: Vec<f64> = self.individuals.iter().filter(|i| i.fitness_valid()).map(|i| i.fitness()).collect();
        let best_fit = valid_fits.iter().cloned().fold(f64::INFINITY, f64::min);
        let worst_fit = valid_fits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean_fit = if n == 0 { 0.0 } else { valid_fits.iter().sum::<f64>() / n as f64 };

        let sizes: Vec<usize> = self.individuals.iter().map(|i| i.size()).collect();
        let max_size = sizes.iter().cloned().max().unwrap_or(0);
        let min_size = sizes.iter().cloned().min().unwrap_or(0);
        let mean_size = if n == 0 { 0.0 } else { sizes.iter().sum::<usize>() as f64 / n as f64 };

        let formats: HashSet<String> = self.individuals.iter().map(|i| i.format()).collect();
        let repeated = n - formats.len();

        return Stats { best_fit, worst_fit, mean_fit, max_size, min_size, mean_size, repeated };
    }
}
