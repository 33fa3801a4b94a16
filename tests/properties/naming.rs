//! Property tests for naming conversions.

use proptest::prelude::*;

use dddc::naming::{camel_case, pascal_case, pluralize, snake_case};

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,23}").unwrap()
}

fn snake_identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}(_[a-z]{1,8}){0,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Case conversions and pluralization never panic.
    #[test]
    fn property_naming_never_panics(s in "(?s).{0,64}") {
        let _ = pascal_case(&s);
        let _ = camel_case(&s);
        let _ = snake_case(&s);
        let _ = pluralize(&s);
    }

    /// PROPERTY: snake → Pascal → snake is lossless for plain words.
    #[test]
    fn property_snake_pascal_round_trip(s in snake_identifier()) {
        let pascal = pascal_case(&s);
        prop_assert_eq!(pascal_case(&pascal), pascal.clone());
        prop_assert_eq!(snake_case(&pascal), s);
    }

    /// PROPERTY: snake_case output has no uppercase letters.
    #[test]
    fn property_snake_case_is_lowercase(s in identifier()) {
        let snake = snake_case(&s);
        prop_assert!(!snake.chars().any(|c| c.is_uppercase()));
    }

    /// PROPERTY: Pluralizing a non-empty word never yields an empty word.
    #[test]
    fn property_plural_non_empty(s in identifier()) {
        prop_assert!(!pluralize(&s).is_empty());
    }
}
