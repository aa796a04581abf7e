//! JSON parameter marshaling.
//!
//! Turns a client-supplied JSON object into a [`ParameterView`], coercing
//! each field through the component's declared parameter types or, for
//! undeclared fields, through primitive type inference. The payload has
//! already been bounds-checked by the gateway; the transport contract
//! guarantees a single JSON object at the root, so any other shape is
//! reported as a protocol violation rather than repaired.

use serde_json::Value as JsonValue;

use crate::descriptor::ParameterKind;
use crate::parameter_types::ParameterTypeMap;
use crate::parameter_view::{ParameterView, ParameterViewBuilder};
use crate::value::ParameterValue;

use super::gateway::{InteropError, InteropResult};

/// Parses `parameters_json` into a view sized for `declared_count` entries.
///
/// Fields are visited in arrival order. Fewer fields than declared is fine;
/// a field beyond the declared count fails before the builder's capacity
/// invariant can be violated.
pub(crate) fn parse_parameter_view(
    parameters_json: &[u8],
    parameter_types: &ParameterTypeMap,
    declared_count: usize,
) -> InteropResult<ParameterView> {
    let root: JsonValue = serde_json::from_slice(parameters_json)?;
    let JsonValue::Object(fields) = root else {
        return Err(InteropError::PayloadNotAnObject);
    };

    let mut builder = ParameterViewBuilder::new(declared_count);
    for (name, value) in fields {
        if builder.len() == declared_count {
            return Err(InteropError::DeclaredCountExceeded {
                declared: declared_count,
            });
        }
        let value = match parameter_types.get(&name) {
            Some(declared) => coerce_declared(&name, declared.kind, value)?,
            None => infer_unknown(&name, value)?,
        };
        builder.add(name, value);
    }

    Ok(builder.into_parameter_view())
}

/// Coerces a JSON value into the declared kind.
///
/// Structured values are permitted because the schema is known; JSON null
/// is accepted for any declared kind.
fn coerce_declared(
    name: &str,
    kind: ParameterKind,
    value: JsonValue,
) -> InteropResult<ParameterValue> {
    let mismatch = |value: &JsonValue| InteropError::TypeMismatch {
        parameter: name.to_string(),
        expected: kind,
        found: json_kind(value),
    };

    match (kind, value) {
        (_, JsonValue::Null) => Ok(ParameterValue::Null),
        (ParameterKind::Integer, JsonValue::Number(n)) => match n.as_i64() {
            Some(i) => Ok(ParameterValue::Integer(i)),
            None => Err(mismatch(&JsonValue::Number(n))),
        },
        (ParameterKind::Float, JsonValue::Number(n)) => match n.as_f64() {
            Some(f) => Ok(ParameterValue::Float(f)),
            None => Err(mismatch(&JsonValue::Number(n))),
        },
        (ParameterKind::String, JsonValue::String(s)) => Ok(ParameterValue::String(s)),
        (ParameterKind::Boolean, JsonValue::Bool(b)) => Ok(ParameterValue::Boolean(b)),
        (ParameterKind::List, value @ JsonValue::Array(_)) => Ok(ParameterValue::from(value)),
        (ParameterKind::Map, value @ JsonValue::Object(_)) => Ok(ParameterValue::from(value)),
        (_, value) => Err(mismatch(&value)),
    }
}

/// Infers a primitive type for a field with no declared parameter.
///
/// Only integer numbers, strings, boolean literals, and null can be
/// inferred; an untyped nested structure cannot be marshaled safely.
fn infer_unknown(name: &str, value: JsonValue) -> InteropResult<ParameterValue> {
    match value {
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Ok(ParameterValue::Integer(i)),
            None => Err(InteropError::UnknownParameterShape {
                parameter: name.to_string(),
                found: "number",
            }),
        },
        JsonValue::String(s) => Ok(ParameterValue::String(s)),
        JsonValue::Bool(b) => Ok(ParameterValue::Boolean(b)),
        JsonValue::Null => Ok(ParameterValue::Null),
        value => Err(InteropError::UnknownParameterShape {
            parameter: name.to_string(),
            found: json_kind(&value),
        }),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::{
        ComponentTypeDescriptor, PropertyDescriptor, RootComponent,
    };
    use crate::parameter_types::ParameterTypeCache;

    use super::*;

    struct Counter;

    impl RootComponent for Counter {
        fn type_name() -> &'static str {
            "Counter"
        }
        fn properties() -> Vec<PropertyDescriptor> {
            vec![
                PropertyDescriptor::parameter("Count", ParameterKind::Integer),
                PropertyDescriptor::parameter("Tags", ParameterKind::List),
                PropertyDescriptor::parameter("Style", ParameterKind::Map),
            ]
        }
    }

    fn counter_types() -> std::sync::Arc<crate::parameter_types::ParameterTypeMap> {
        ParameterTypeCache::new().get_parameter_types(&ComponentTypeDescriptor::of::<Counter>())
    }

    #[test]
    fn test_declared_integer_is_native() {
        let view = parse_parameter_view(br#"{"Count": 5}"#, &counter_types(), 1).unwrap();
        assert_eq!(view.get("Count"), Some(&ParameterValue::Integer(5)));
    }

    #[test]
    fn test_declared_lookup_is_case_insensitive() {
        let view = parse_parameter_view(br#"{"count": 5}"#, &counter_types(), 1).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.get("Count"), Some(&ParameterValue::Integer(5)));
    }

    #[test]
    fn test_declared_structured_values_are_permitted() {
        let view = parse_parameter_view(
            br#"{"Tags": ["a", "b"], "Style": {"width": 10}}"#,
            &counter_types(),
            2,
        )
        .unwrap();
        assert_eq!(
            view.get("Tags"),
            Some(&ParameterValue::List(vec![
                ParameterValue::from("a"),
                ParameterValue::from("b"),
            ]))
        );
        assert!(matches!(view.get("Style"), Some(ParameterValue::Map(_))));
    }

    #[test]
    fn test_declared_type_mismatch_names_the_parameter() {
        let result = parse_parameter_view(br#"{"Count": "five"}"#, &counter_types(), 1);
        match result {
            Err(InteropError::TypeMismatch {
                parameter,
                expected,
                found,
            }) => {
                assert_eq!(parameter, "Count");
                assert_eq!(expected, ParameterKind::Integer);
                assert_eq!(found, "string");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unknown_primitives_are_inferred() {
        let view = parse_parameter_view(
            br#"{"Extra": "x", "Flag": true, "Level": 3, "Missing": null}"#,
            &counter_types(),
            4,
        )
        .unwrap();
        assert_eq!(view.get("Extra"), Some(&ParameterValue::from("x")));
        assert_eq!(view.get("Flag"), Some(&ParameterValue::Boolean(true)));
        assert_eq!(view.get("Level"), Some(&ParameterValue::Integer(3)));
        assert_eq!(view.get("Missing"), Some(&ParameterValue::Null));
    }

    #[test]
    fn test_unknown_nested_value_fails_naming_the_parameter() {
        let result = parse_parameter_view(br#"{"Extra": {"nested": 1}}"#, &counter_types(), 1);
        match result {
            Err(InteropError::UnknownParameterShape { parameter, found }) => {
                assert_eq!(parameter, "Extra");
                assert_eq!(found, "object");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unknown_float_cannot_be_inferred() {
        let result = parse_parameter_view(br#"{"Extra": 1.5}"#, &counter_types(), 1);
        assert!(matches!(
            result,
            Err(InteropError::UnknownParameterShape { .. })
        ));
    }

    #[test]
    fn test_fewer_fields_than_declared_is_tolerated() {
        let view = parse_parameter_view(br#"{"Count": 1}"#, &counter_types(), 10).unwrap();
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_excess_fields_are_rejected() {
        let result = parse_parameter_view(br#"{"Count": 1, "Extra": "x"}"#, &counter_types(), 1);
        assert!(matches!(
            result,
            Err(InteropError::DeclaredCountExceeded { declared: 1 })
        ));
    }

    #[test]
    fn test_non_object_root_is_a_protocol_violation() {
        let result = parse_parameter_view(br#"[1, 2]"#, &counter_types(), 2);
        assert!(matches!(result, Err(InteropError::PayloadNotAnObject)));
    }

    #[test]
    fn test_arrival_order_is_preserved() {
        let view = parse_parameter_view(
            br#"{"Style": {}, "Count": 1, "Extra": "x"}"#,
            &counter_types(),
            3,
        )
        .unwrap();
        let names: Vec<_> = view.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Style", "Count", "Extra"]);
    }
}
