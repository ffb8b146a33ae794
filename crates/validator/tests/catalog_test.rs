//! Built-in catalog behavior, resolved through the registry.

use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn registry() -> ValidatorRegistry {
    ValidatorRegistry::with_builtins()
}

fn resolve(registry: &ValidatorRegistry, name: &str, config: Value) -> Validator {
    registry
        .get_validator(&ValidatorDescriptor::new(name).with_valid_value(config))
        .unwrap()
}

// ============================================================================
// PRESENCE
// ============================================================================

#[rstest]
#[case(json!("text"), true)]
#[case(json!(0), true)]
#[case(json!(false), true)]
#[case(json!([]), true)]
#[case(json!({}), true)]
#[case(json!(""), false)]
#[case(Value::Null, false)]
fn is_defined(registry: ValidatorRegistry, #[case] input: Value, #[case] expected: bool) {
    let validator = resolve(&registry, "isDefined", Value::Null);
    assert_eq!(validator.validate(&input), expected);
}

// ============================================================================
// LENGTH
// ============================================================================

#[rstest]
#[case("min", json!("abc"), true)]
#[case("min", json!("ab"), false)]
#[case("min", json!([1, 2, 3]), true)]
#[case("min", json!([1]), false)]
#[case("min", json!("дом"), true)]
#[case("min", json!(12345), false)]
#[case("min", Value::Null, false)]
#[case("max", json!("abc"), true)]
#[case("max", json!("abcd"), false)]
#[case("max", json!([]), true)]
#[case("max", json!([1, 2, 3, 4]), false)]
#[case("max", json!(1), false)]
fn length(
    registry: ValidatorRegistry,
    #[case] name: &str,
    #[case] input: Value,
    #[case] expected: bool,
) {
    let validator = resolve(&registry, name, json!(3));
    assert_eq!(validator.validate(&input), expected);
}

// ============================================================================
// CONTENT
// ============================================================================

#[rstest]
#[case(json!("ab"), json!("xaby"), true)]
#[case(json!("ab"), json!("xy"), false)]
#[case(json!("ab"), json!(["ab", "c"]), true)]
#[case(json!("ab"), json!(["abc"]), false)]
#[case(json!(2), json!([1, 2]), true)]
#[case(json!(2), json!("123"), true)]
#[case(json!("ab"), json!(""), false)]
#[case(json!("ab"), Value::Null, false)]
#[case(json!(1), json!(12), false)]
fn contain(
    registry: ValidatorRegistry,
    #[case] needle: Value,
    #[case] input: Value,
    #[case] expected: bool,
) {
    let validator = resolve(&registry, "contain", needle);
    assert_eq!(validator.validate(&input), expected);
}

#[rstest]
#[case(json!("xy"), true)]
#[case(json!([]), true)]
#[case(json!("xab"), false)]
#[case(json!(["ab"]), false)]
#[case(json!(""), false)]
#[case(Value::Null, false)]
#[case(json!(5), false)]
fn not_contain(registry: ValidatorRegistry, #[case] input: Value, #[case] expected: bool) {
    let validator = resolve(&registry, "notContain", json!("ab"));
    assert_eq!(validator.validate(&input), expected);
}

#[rstest]
#[case(json!("abc"), json!("abc"), true)]
#[case(json!("abc"), json!("ABC"), false)]
#[case(json!(1), json!("1"), true)]
#[case(json!("abc"), Value::Null, false)]
#[case(Value::Null, Value::Null, true)]
#[case(Value::Null, json!(""), true)]
#[case(Value::Null, json!("abc"), false)]
fn like_and_not_like(
    registry: ValidatorRegistry,
    #[case] config: Value,
    #[case] input: Value,
    #[case] expected: bool,
) {
    let like = resolve(&registry, "like", config.clone());
    let not_like = resolve(&registry, "notLike", config);
    assert_eq!(like.validate(&input), expected);
    assert_eq!(not_like.validate(&input), !expected);
}

// ============================================================================
// NUMERIC
// ============================================================================

#[rstest]
#[case("equal", json!(5), true)]
#[case("equal", json!("5"), true)]
#[case("equal", json!(5.0), true)]
#[case("equal", json!(6), false)]
#[case("equal", json!("five"), false)]
#[case("notEqual", json!(6), true)]
#[case("notEqual", json!("5"), false)]
#[case("greaterThan", json!(6), true)]
#[case("greaterThan", json!(5), false)]
#[case("greaterThanOrEqual", json!(5), true)]
#[case("greaterThanOrEqual", json!("4.5"), false)]
#[case("lessThan", json!(4), true)]
#[case("lessThan", json!(5), false)]
#[case("lessThanOrEqual", json!(5), true)]
#[case("lessThanOrEqual", json!("abc"), false)]
fn comparisons(
    registry: ValidatorRegistry,
    #[case] name: &str,
    #[case] input: Value,
    #[case] expected: bool,
) {
    let validator = resolve(&registry, name, json!(5));
    assert_eq!(validator.validate(&input), expected);
}

#[rstest]
#[case(json!(1), true)]
#[case(json!(4), true)]
#[case(json!(2.5), true)]
#[case(json!("3"), true)]
#[case(json!(0), false)]
#[case(json!(5), false)]
#[case(json!("x"), false)]
fn between_and_not_between(
    registry: ValidatorRegistry,
    #[case] input: Value,
    #[case] expected: bool,
) {
    let between = resolve(&registry, "between", json!([1, 4]));
    let not_between = resolve(&registry, "notBetween", json!([1, 4]));
    assert_eq!(between.validate(&input), expected);
    assert_eq!(not_between.validate(&input), !expected);
}

// ============================================================================
// SETS
// ============================================================================

#[rstest]
#[case(json!("a"), true, false)]
#[case(json!(1), true, false)]
#[case(json!("1"), true, false)]
#[case(json!("b"), false, true)]
#[case(json!(""), false, false)]
#[case(Value::Null, false, false)]
fn membership(
    registry: ValidatorRegistry,
    #[case] input: Value,
    #[case] in_values: bool,
    #[case] not_in_values: bool,
) {
    let allowed = json!(["a", 1]);
    assert_eq!(
        resolve(&registry, "inValues", allowed.clone()).validate(&input),
        in_values
    );
    assert_eq!(
        resolve(&registry, "notInValues", allowed).validate(&input),
        not_in_values
    );
}

#[rstest]
fn scalar_set_configuration(registry: ValidatorRegistry) {
    let validator = resolve(&registry, "inValues", json!("a"));
    assert!(validator.validate(&json!("a")));
    assert!(!validator.validate(&json!("ab")));
}

// ============================================================================
// TYPES
// ============================================================================

#[rstest]
#[case("isString", json!("2"), true)]
#[case("isString", json!(2), false)]
#[case("isArray", json!([]), true)]
#[case("isArray", json!({}), false)]
#[case("isNumber", json!(-1.5), true)]
#[case("isNumber", json!("1"), false)]
#[case("isInteger", json!(3), true)]
#[case("isInteger", json!(-2.3), false)]
#[case("isBoolean", json!(false), true)]
#[case("isBoolean", json!("true"), false)]
#[case("isFunction", json!("function"), false)]
fn types(
    registry: ValidatorRegistry,
    #[case] name: &str,
    #[case] input: Value,
    #[case] expected: bool,
) {
    let validator = resolve(&registry, name, Value::Null);
    assert_eq!(validator.validate(&input), expected);
}

// ============================================================================
// DOMAINS
// ============================================================================

#[fixture]
fn domain() -> Value {
    json!([{ "code": 1, "name": "a" }, { "code": 2, "name": "b" }])
}

#[rstest]
#[case(json!(2), true)]
#[case(json!(3), false)]
#[case(json!("b"), false)]
#[case(json!(0), false)]
#[case(Value::Null, false)]
fn code_in_domain(
    registry: ValidatorRegistry,
    domain: Value,
    #[case] input: Value,
    #[case] expected: bool,
) {
    let validator = resolve(&registry, "codeInDomain", domain);
    assert_eq!(validator.validate(&input), expected);
}

#[rstest]
#[case(json!("b"), true)]
#[case(json!("c"), false)]
#[case(json!(2), false)]
#[case(json!(""), false)]
#[case(Value::Null, false)]
fn value_in_domain(
    registry: ValidatorRegistry,
    domain: Value,
    #[case] input: Value,
    #[case] expected: bool,
) {
    let validator = resolve(&registry, "valueInDomain", domain);
    assert_eq!(validator.validate(&input), expected);
}

// ============================================================================
// GIS
// ============================================================================

#[rstest]
#[case(json!({ "accuracy": 4 }), true)]
#[case(json!({ "coords": { "accuracy": 10 } }), true)]
#[case(json!({ "coords": { "accuracy": 12 } }), false)]
#[case(json!({}), false)]
fn precision(registry: ValidatorRegistry, #[case] fix: Value, #[case] expected: bool) {
    let validator = resolve(&registry, "precision", json!(10));
    assert_eq!(validator.validate(&fix), expected);
}

#[rstest]
#[case(&[json!([0, 0]), json!([0, 100])], true)]
#[case(&[json!([0, 0]), json!([0, 200])], false)]
#[case(&[json!([42.678748, 23.338703]), json!([42.678803, 23.338928]), json!(true)], true)]
#[case(&[json!([42.680026, 23.336611]), json!([42.678803, 23.338928]), json!(true)], false)]
fn max_distance(registry: ValidatorRegistry, #[case] args: &[Value], #[case] expected: bool) {
    let validator = resolve(&registry, "maxDistance", json!(100));
    assert_eq!(validator.validate_args(args), expected);
}

#[rstest]
fn max_distance_check_args(registry: ValidatorRegistry) {
    let validator = registry
        .get_validator_json(&json!({
            "name": "maxDistance",
            "validValue": 100,
            "errorMessage": "points are too far apart"
        }))
        .unwrap();

    assert!(validator.check_args(&[json!([0, 0]), json!([60, 80])]).is_ok());
    let err = validator
        .check_args(&[json!([0, 0]), json!([0, 101])])
        .unwrap_err();
    assert_eq!(err.code, "maxDistance");
    assert_eq!(err.message, "points are too far apart");
    assert_eq!(err.param("valid_value"), Some("100"));
}
