use symb_regr_gp::expr::Expression;
use symb_regr_gp::individual::Individual;
use symb_regr_gp::opcode::{Opcode, Primitive};

fn leaf() -> Expression {
    Expression::new(vec![Opcode::Variable { name: "x0".to_string(), index: 0 }])
}

fn two_node_tree() -> Expression {
    Expression::new(vec![
        Opcode::Primitive(Primitive::Add),
        Opcode::Variable { name: "x0".to_string(), index: 0 },
        Opcode::Variable { name: "x1".to_string(), index: 1 },
    ])
}

#[test]
fn test_individual_creation_has_invalid_fitness() {
    let ind = Individual::new(leaf());
    assert!(!ind.fitness_valid());
    assert_eq!(ind.fitness(), f64::NEG_INFINITY);
}

#[test]
fn test_set_fitness_marks_valid() {
    let mut ind = Individual::new(leaf());
    ind.set_fitness(1.5);
    assert!(ind.fitness_valid());
    assert_eq!(ind.fitness(), 1.5);
}

#[test]
fn test_size_counts_opcodes() {
    let ind = Individual::new(two_node_tree());
    assert_eq!(ind.size(), 3);
}

#[test]
fn test_depth_is_memoized_until_code_replaced() {
    let mut ind = Individual::new(leaf());
    assert_eq!(ind.depth(), 0);
    ind.replace_code(two_node_tree());
    assert_eq!(ind.depth(), 1);
}

#[test]
fn test_replace_code_invalidates_fitness() {
    let mut ind = Individual::new(leaf());
    ind.set_fitness(0.5);
    ind.replace_code(two_node_tree());
    assert!(!ind.fitness_valid());
}

#[test]
fn test_clone_preserves_fitness_and_code() {
    let mut ind = Individual::new(two_node_tree());
    ind.set_fitness(2.0);
    let cloned = ind.clone();
    assert_eq!(cloned.fitness(), 2.0);
    assert_eq!(cloned.code(), ind.code());
}
