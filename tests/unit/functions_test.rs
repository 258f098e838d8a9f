use symb_regr_gp::opcode::Primitive;

#[test]
fn test_protected_div_zero_divisor() {
    assert_eq!(Primitive::Div.eval(1.0, 0.0), 0.0);
}

#[test]
fn test_protected_div_divides_above_threshold() {
    assert_eq!(Primitive::Div.eval(10.0, 2.0), 5.0);
}

#[test]
fn test_overflow_mul_stays_finite_or_infinite_consistently() {
    let a = 1e308f64;
    let result = Primitive::Mul.eval(a, a);
    assert!(result.is_infinite());
}

#[test]
fn test_sub_is_not_commutative() {
    assert_eq!(Primitive::Sub.eval(5.0, 2.0), 3.0);
    assert_eq!(Primitive::Sub.eval(2.0, 5.0), -3.0);
}

#[test]
fn test_add_identity() {
    assert_eq!(Primitive::Add.eval(0.0, 4.0), 4.0);
}

#[test]
fn test_symbol_strings() {
    assert_eq!(Primitive::Add.symbol(), "+");
    assert_eq!(Primitive::Sub.symbol(), "-");
    assert_eq!(Primitive::Mul.symbol(), "*");
    assert_eq!(Primitive::Div.symbol(), "/");
}
