// Number parsing checked against the standard library conversion

use core::str::FromStr;

use leptjson::{parse, ParseError, Value, ValueType};
use test_log::test;

fn parse_number(json: &str) -> Result<f64, ParseError> {
    let mut value = Value::new();
    parse(&mut value, json)?;
    assert_eq!(value.get_type(), ValueType::Number);
    Ok(value.get_number())
}

macro_rules! generate_number_tests {
    ($($name:ident: $json:expr,)*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_number_ $name>]() {
                    let expected = f64::from_str($json).unwrap();
                    let parsed = parse_number($json).unwrap();
                    assert_eq!(
                        parsed.to_bits(),
                        expected.to_bits(),
                        "{} parsed as {} but expected {}",
                        $json,
                        parsed,
                        expected
                    );
                }
            }
        )*
    };
}

generate_number_tests! {
    zero: "0",
    negative_zero: "-0",
    negative_zero_fraction: "-0.0",
    one: "1",
    negative_one: "-1",
    fraction: "1.5",
    negative_fraction: "-1.5",
    pi: "3.1416",
    exponent_upper: "1E10",
    exponent_lower: "1e10",
    exponent_plus: "1E+10",
    exponent_minus: "1E-10",
    negative_exponent: "-1E10",
    negative_exponent_lower: "-1e10",
    negative_exponent_plus: "-1E+10",
    negative_exponent_minus: "-1E-10",
    fraction_exponent: "1.234E+10",
    fraction_small_exponent: "1.234E-10",
    max_double: "1.7976931348623157e308",
    min_denormal: "4.9406564584124654e-324",
    max_subnormal: "2.2250738585072009e-308",
    min_normal: "2.2250738585072014e-308",
    one_plus_epsilon: "1.0000000000000002",
    long_integer: "12345678901234567890123",
}

#[test]
fn test_number_with_whitespace() {
    assert_eq!(parse_number(" \n-42\t"), Ok(-42.0));
}

#[test]
fn test_underflow_rounds_to_zero() {
    assert_eq!(parse_number("1e-10000"), Ok(0.0));
    let negative = parse_number("-1e-10000").unwrap();
    assert_eq!(negative, 0.0);
    assert!(negative.is_sign_negative());
}

#[test]
fn test_overflow_is_reported() {
    assert_eq!(parse_number("1e309"), Err(ParseError::NumberTooBig));
    assert_eq!(parse_number("-1e309"), Err(ParseError::NumberTooBig));
}
