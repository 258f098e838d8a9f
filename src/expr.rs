//! Prefix-encoded expression trees over [`Opcode`].

use crate::opcode::Opcode;
use rand::Rng;

/// A well-formed expression tree, stored as a flat pre-order sequence of
/// opcodes. A traversal starting at any node position and consuming each
/// opcode's declared arity consumes exactly the nodes of that subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression(Vec<Opcode>);

impl Expression {
    pub fn new(nodes: Vec<Opcode>) -> Self {
        return Expression(nodes);
    }

    pub fn len(&self) -> usize {
        return self.0.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty();
    }

    pub fn nodes(&self) -> &[Opcode] {
        return &self.0;
    }

    /// Depth-first walk of the subtree rooted at `pos`. Calls `tfn` on
    /// terminals and `nfn` on internal nodes after both children have been
    /// visited. Returns the index of the last opcode of that subtree.
    pub fn traverse(&self, pos: usize, mut nfn: impl FnMut(usize), mut tfn: impl FnMut(usize)) -> usize {
        return self.traverse_rec(pos, &mut nfn, &mut tfn);
    }

    fn traverse_rec(&self, pos: usize, nfn: &mut impl FnMut(usize), tfn: &mut impl FnMut(usize)) -> usize {
        let op = &self.0[pos];
        if op.arity() == 0 {
            tfn(pos);
            return pos;
        }
        let mut cursor = pos;
        for _ in 0..op.arity() {
            cursor = self.traverse_rec(cursor + 1, nfn, tfn);
        }
        nfn(pos);
        return cursor;
    }

    fn subtree_end(&self, pos: usize) -> usize {
        return self.traverse(pos, |_| {}, |_| {});
    }

    /// Recursive prefix evaluation. The left child of a primitive is
    /// evaluated before the right; protected division applies its
    /// threshold to the right operand.
    pub fn eval(&self, input: &[f64]) -> f64 {
        let mut stack: Vec<f64> = Vec::with_capacity(self.0.len());
        for op in self.0.iter().rev() {
            match op {
                Opcode::Variable { index, .. } => stack.push(input[*index]),
                Opcode::Primitive(p) => {
                    let a = stack.pop().expect("malformed expression");
                    let b = stack.pop().expect("malformed expression");
                    stack.push(p.eval(a, b));
                }
            }
        }
        return stack.pop().expect("empty expression");
    }

    /// Height of the tree from the root; leaves have depth 0. Computed
    /// iteratively with a depth stack seeded with a single zero.
    pub fn depth(&self) -> usize {
        let mut stack: Vec<usize> = vec![0];
        let mut max_depth = 0;
        for op in self.0.iter() {
            let d = stack.pop().expect("malformed expression");
            if d > max_depth {
                max_depth = d;
            }
            for _ in 0..op.arity() {
                stack.push(d + 1);
            }
        }
        return max_depth;
    }

    /// Picks a position uniformly and returns it along with a clone of the
    /// subtree rooted there.
    pub fn random_subtree(&self, rng: &mut impl Rng) -> (usize, Expression) {
        let pos = rng.gen_range(0..self.0.len());
        let end = self.subtree_end(pos);
        return (pos, Expression(self.0[pos..=end].to_vec()));
    }

    /// Returns a new expression: the prefix before `pos`, followed by
    /// `subtree`, followed by the tail after the original subtree rooted
    /// at `pos`. Does not mutate `self`.
    pub fn replace_subtree(&self, pos: usize, subtree: &Expression) -> Expression {
        let end = self.subtree_end(pos);
        let mut out = Vec::with_capacity(pos + subtree.len() + (self.0.len() - end - 1));
        out.extend_from_slice(&self.0[..pos]);
        out.extend_from_slice(&subtree.0);
        out.extend_from_slice(&self.0[end + 1..]);
        return Expression(out);
    }

    fn format_rec(&self, pos: usize) -> (String, usize) {
        let op = &self.0[pos];
        if op.arity() == 0 {
            return (op.format(&[]), pos);
        }
        let (left, left_end) = self.format_rec(pos + 1);
        let (right, right_end) = self.format_rec(left_end + 1);
        return (op.format(&[left, right]), right_end);
    }

    pub fn format(&self) -> String {
        return self.format_rec(0).0;
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
