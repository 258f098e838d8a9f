//! Subtree crossover and mutation, with depth bounding, and the
//! generation-level statistics they feed.

use crate::generator::Generator;
use crate::individual::Individual;
use crate::opcode::OpSet;
use crate::population::Population;
use rand::rngs::StdRng;
use rand::Rng;

pub const MAX_DEPTH: usize = 7;

/// Clones the individual's expression, grafts a freshly generated subtree
/// at a random position, and keeps the parent if the result is too deep.
pub fn mutate(individual: &Individual, generator: &Generator, opset: &OpSet, rng: &mut StdRng) -> Individual {
    let code = individual.code();
    let pos = rng.gen_range(0..code.len());
    let subtree = generator.generate(opset, rng);
    let candidate = code.replace_subtree(pos, &subtree);
    if candidate.depth() > MAX_DEPTH {
        return individual.clone();
    }
    return Individual::new(candidate);
}

/// Exchanges a random subtree between two parents. Returns the parents
/// unchanged if either has fewer than two opcodes. The depth guard is
/// applied per child independently.
pub fn crossover(a: &Individual, b: &Individual, rng: &mut StdRng) -> (Individual, Individual) {
    if a.code().len() < 2 || b.code().len() < 2 {
        return (a.clone(), b.clone());
    }
    let (pos_a, subtree_a) = a.code().random_subtree(rng);
    let (pos_b, subtree_b) = b.code().random_subtree(rng);
    let child_a_code = a.code().replace_subtree(pos_a, &subtree_b);
    let child_b_code = b.code().replace_subtree(pos_b, &subtree_a);
    let child_a = if child_a_code.depth() > MAX_DEPTH { a.clone() } else { Individual::new(child_a_code) };
    let child_b = if child_b_code.depth() > MAX_DEPTH { b.clone() } else { Individual::new(child_b_code) };
    return (child_a, child_b);
}

/// Applies crossover across consecutive pairs and mutation per-index to a
/// clone of `pop`, accumulating the `(better, worse)` child counts defined
/// against the *pre-operation* mean parent fitness.
///
/// The `>`/`<` direction below matches the reference implementation
/// verbatim even though it reads as inverted for a lower-is-better
/// fitness: a crossover child scoring strictly above the mean parent
/// fitness counts as `better_child`, strictly below as `worse_child`.
pub fn apply_genetic_ops(
    pop: &Population,
    generator: &Generator,
    opset: &OpSet,
    p_cross: f64,
    p_mut: f64,
    rng: &mut StdRng,
) -> (Population, f64, f64) {
    let n = pop.len();
    let mut offspring: Vec<Individual> = pop.individuals().to_vec();
    let mut cx_children: Vec<Individual> = Vec::new();

    let mut i = 1;
    while i < n {
        if rng.gen::<f64>() < p_cross {
            let (child_a, child_b) = crossover(&offspring[i - 1], &offspring[i], rng);
            offspring[i - 1] = child_a.clone();
            offspring[i] = child_b.clone();
            cx_children.push(child_a);
            cx_children.push(child_b);
        }
        i += 2;
    }

    let mut total_fit = 0.0;
    for i in 0..n {
        total_fit += pop.individuals()[i].fitness();
        if rng.gen::<f64>() < p_mut {
            offspring[i] = mutate(&offspring[i], generator, opset, rng);
        }
    }
    let mean_parent_fit = total_fit / n as f64;

    let mut better_child = 0.0;
    let mut worse_child = 0.0;
    for child in &cx_children {
        // Children are freshly built via `Individual::new` and have not been
        // evaluated yet; their fitness is invalid, so this comparison treats
        // it as 0.0 rather than the unevaluated sentinel.
        let fitness = if child.fitness_valid() { child.fitness() } else { 0.0 };
        if fitness > mean_parent_fit {
            better_child += 1.0;
        } else if fitness < mean_parent_fit {
            worse_child += 1.0;
        }
    }

    return (Population::from_vec(offspring), better_child, worse_child);
}
