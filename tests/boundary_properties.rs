//! Property tests for the exported operations.

use hello_world::{
    add, dispatch, greet, say_hello, ArgumentTypeError, Arguments, HelloError, Value, ValueKind,
};
use proptest::prelude::*;

fn non_text() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        Just(Value::Opaque(ValueKind::Object)),
        Just(Value::Opaque(ValueKind::Function)),
    ]
}

fn non_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<String>().prop_map(Value::Text),
        Just(Value::Opaque(ValueKind::Symbol)),
    ]
}

fn finite() -> impl Strategy<Value = f64> {
    -1.0e300..1.0e300f64
}

#[test]
fn say_hello_never_varies() {
    for _ in 0..3 {
        assert_eq!(say_hello(), "Hello from C++!");
    }
}

proptest! {
    #[test]
    fn greet_wraps_any_text(name in any::<String>()) {
        let args = Arguments::new(vec![Value::Text(name.clone())]);
        prop_assert_eq!(greet(&args), Ok(format!("Hello, {name}! Welcome to C++!")));
    }

    #[test]
    fn greet_rejects_non_text(first in non_text()) {
        let args = Arguments::new(vec![first]);
        prop_assert_eq!(
            greet(&args),
            Err(HelloError::ArgumentType(ArgumentTypeError::StringExpected))
        );
    }

    #[test]
    fn add_matches_f64_addition(a in finite(), b in finite()) {
        let args = Arguments::new(vec![Value::Number(a), Value::Number(b)]);
        prop_assert_eq!(add(&args), Ok(a + b));
    }

    #[test]
    fn add_is_commutative(a in finite(), b in finite()) {
        let ab = add(&Arguments::new(vec![Value::Number(a), Value::Number(b)]));
        let ba = add(&Arguments::new(vec![Value::Number(b), Value::Number(a)]));
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn add_rejects_a_single_argument(a in finite()) {
        let args = Arguments::new(vec![Value::Number(a)]);
        prop_assert_eq!(
            add(&args),
            Err(HelloError::ArgumentType(ArgumentTypeError::TwoNumbersExpected))
        );
    }

    #[test]
    fn add_rejects_any_non_number(bad in non_number(), good in finite(), bad_first in any::<bool>()) {
        let values = if bad_first {
            vec![bad, Value::Number(good)]
        } else {
            vec![Value::Number(good), bad]
        };
        prop_assert_eq!(
            add(&Arguments::new(values)),
            Err(HelloError::ArgumentType(ArgumentTypeError::NumbersExpected))
        );
    }

    #[test]
    fn unknown_names_never_dispatch(name in "[a-z]{1,12}") {
        prop_assume!(!["add", "greet"].contains(&name.as_str()));
        prop_assert_eq!(
            dispatch(&name, &Arguments::empty()),
            Err(HelloError::UnknownOperation(name.clone()))
        );
    }
}
