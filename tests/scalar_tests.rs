use naval_grid::Scalar;

#[test]
fn test_integers_pass_through() {
    assert_eq!(5u8.truncated(), Some(5));
    assert_eq!((-5i32).exact(), Some(-5));
    assert_eq!(u64::MAX.truncated(), None);
}

#[test]
fn test_floats_truncate_toward_zero() {
    assert_eq!(10.9f64.truncated(), Some(10));
    assert_eq!((-2.7f32).truncated(), Some(-2));
    assert_eq!(f64::NAN.truncated(), None);
    assert_eq!(f64::INFINITY.truncated(), None);
}

#[test]
fn test_floats_exact_only_when_integral() {
    assert_eq!(12.0f64.exact(), Some(12));
    assert_eq!(12.1f64.exact(), None);
}

#[test]
fn test_strings_parse_as_numbers() {
    assert_eq!("42".truncated(), Some(42));
    assert_eq!(" 7 ".exact(), Some(7));
    assert_eq!("3.75".truncated(), Some(3));
    assert_eq!("3.75".exact(), None);
    assert_eq!("abc".truncated(), None);
    assert_eq!(String::from("-4").truncated(), Some(-4));
    assert_eq!("".exact(), None);
    // the whole token must be numeric, not just a prefix
    assert_eq!("10px".truncated(), None);
    assert_eq!("3x".exact(), None);
}
