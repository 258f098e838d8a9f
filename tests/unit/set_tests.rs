use symb_regr_gp::opcode::OpSet;

#[test]
fn test_opset_terminal_count_matches_variable_names() {
    let names = vec!["x0".to_string(), "x1".to_string(), "x2".to_string()];
    let opset = OpSet::new(&names);
    assert_eq!(opset.num_vars(), 3);
    assert_eq!(opset.terminals().len(), 3);
}

#[test]
fn test_opset_primitive_set_is_fixed() {
    let opset = OpSet::new(&["x0".to_string()]);
    let symbols: Vec<&str> = opset.primitives().iter().map(|p| p.name()).collect();
    assert_eq!(symbols, vec!["+", "-", "*", "/"]);
}

#[test]
fn test_opset_terminal_names_track_input_order() {
    let names = vec!["a".to_string(), "b".to_string()];
    let opset = OpSet::new(&names);
    assert_eq!(opset.terminals()[0].name(), "a");
    assert_eq!(opset.terminals()[1].name(), "b");
}

#[test]
fn test_opset_with_single_variable() {
    let opset = OpSet::new(&["x0".to_string()]);
    assert_eq!(opset.num_vars(), 1);
}
