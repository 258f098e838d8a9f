//! Grow, Full, and Ramped half-and-half population initializers.

use crate::expr::Expression;
use crate::opcode::{Opcode, OpSet};
use rand::seq::SliceRandom;
use rand::Rng;

/// The three initialization strategies. `min_depth`/`max_depth` bound the
/// depth at which a terminal must be emitted.
#[derive(Clone, Copy, Debug)]
pub enum Generator {
    Grow { min_depth: usize, max_depth: usize },
    Full { min_depth: usize, max_depth: usize },
    Ramped { min_depth: usize, max_depth: usize },
}

impl Generator {
    pub fn generate(&self, opset: &OpSet, rng: &mut impl Rng) -> Expression {
        match *self {
            Generator::Grow { min_depth, max_depth } => grow(min_depth, max_depth, opset, rng),
            Generator::Full { min_depth, max_depth } => full(min_depth, max_depth, opset, rng),
            Generator::Ramped { min_depth, max_depth } => {
                if rng.gen::<f64>() >= 0.5 {
                    grow(min_depth, max_depth, opset, rng)
                } else {
                    full(min_depth, max_depth, opset, rng)
                }
            }
        }
    }
}

fn pick_terminal(opset: &OpSet, rng: &mut impl Rng) -> Opcode {
    return opset.terminals().choose(rng).expect("opset has no terminals").clone();
}

fn pick_primitive(opset: &OpSet, rng: &mut impl Rng) -> Opcode {
    return opset.primitives().choose(rng).expect("opset has no primitives").clone();
}

/// Builds a pre-order node sequence via an explicit LIFO of pending child
/// depths, so that popping the last-pushed depth yields pre-order output.
/// A primitive is emitted at every depth short of `max_depth`, a terminal
/// at `max_depth`, and a terminal early when `depth >= min_depth` and a
/// fresh draw falls under `terminal_ratio` (Grow uses a positive ratio,
/// Full passes 0.0 so it never triggers).
fn build(min_depth: usize, max_depth: usize, terminal_ratio: f64, opset: &OpSet, rng: &mut impl Rng) -> Expression {
    let mut nodes: Vec<Opcode> = Vec::new();
    let mut stack: Vec<usize> = vec![0];
    while let Some(depth) = stack.pop() {
        let force_terminal = depth >= max_depth || (depth >= min_depth && rng.gen::<f64>() < terminal_ratio);
        if force_terminal {
            nodes.push(pick_terminal(opset, rng));
        } else {
            let primitive = pick_primitive(opset, rng);
            let arity = primitive.arity();
            nodes.push(primitive);
            for _ in 0..arity {
                stack.push(depth + 1);
            }
        }
    }
    return Expression::new(nodes);
}

fn grow(min_depth: usize, max_depth: usize, opset: &OpSet, rng: &mut impl Rng) -> Expression {
    let terminal_ratio = opset.terminals().len() as f64 / (opset.terminals().len() + opset.primitives().len()) as f64;
    return build(min_depth, max_depth, terminal_ratio, opset, rng);
}

fn full(min_depth: usize, max_depth: usize, opset: &OpSet, rng: &mut impl Rng) -> Expression {
    let h = rng.gen_range(min_depth..=max_depth);
    return build(h, h, 0.0, opset, rng);
}
