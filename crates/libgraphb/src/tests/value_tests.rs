use crate::Argument;
use crate::ArgumentTypeNotSupportedError;
use crate::Value;
use serde_json::json;

#[test]
fn scalars_render_as_literals() {
    assert_eq!(Value::Bool(true).render(), "true");
    assert_eq!(Value::Bool(false).render(), "false");
    assert_eq!(Value::Int(0).render(), "0");
    assert_eq!(Value::Int(42).render(), "42");
    assert_eq!(Value::Int(-7).render(), "-7");
    assert_eq!(Value::from("blob").render(), r#""blob""#);
}

#[test]
fn regex_renders_quoted() {
    assert_eq!(Value::regex("^Steven.*$").render(), r#""^Steven.*$""#);
}

#[test]
fn strings_are_not_escaped() {
    // Escaping is the caller's responsibility.
    assert_eq!(Value::from(r#"a\"b"#).render(), r#""a\"b""#);
}

#[test]
fn lists_render_in_order() {
    assert_eq!(Value::BoolList(vec![true, false, true]).render(), "[true,false,true]");
    assert_eq!(Value::IntList(vec![3, 1, 2]).render(), "[3,1,2]");
    assert_eq!(Value::from(vec!["b", "a"]).render(), r#"["b","a"]"#);
}

#[test]
fn empty_lists_render_as_brackets() {
    assert_eq!(Value::BoolList(vec![]).render(), "[]");
    assert_eq!(Value::IntList(vec![]).render(), "[]");
    assert_eq!(Value::StringList(vec![]).render(), "[]");
}

#[test]
fn object_renders_children_in_braces() {
    let value = Value::Object(vec![
        Argument::string("title", "what"),
        Argument::int("count", 2),
        Argument::object("nested", [Argument::bool("deep", true)]),
    ]);
    assert_eq!(
        value.render(),
        r#"{title:"what",count:2,nested:{deep:true}}"#,
    );
}

#[test]
fn empty_object_renders_as_braces() {
    assert_eq!(Value::Object(vec![]).render(), "{}");
}

#[test]
fn argument_value_renders_as_the_argument() {
    let value = Value::from(Argument::function("eq", [Argument::int("age", 7)]));
    assert_eq!(value.render(), "eq(age,7)");
}

#[test]
fn display_matches_render() {
    let value = Value::IntList(vec![1, 2]);
    assert_eq!(value.to_string(), value.render());
}

#[test]
fn json_scalars_coerce() {
    assert_eq!(Value::try_from(json!(true)), Ok(Value::Bool(true)));
    assert_eq!(Value::try_from(json!(-12)), Ok(Value::Int(-12)));
    assert_eq!(Value::try_from(json!("x")), Ok(Value::String("x".to_string())));
}

#[test]
fn json_homogeneous_arrays_coerce() {
    assert_eq!(
        Value::try_from(json!([true, false])),
        Ok(Value::BoolList(vec![true, false])),
    );
    assert_eq!(
        Value::try_from(json!([1, 2, 3])),
        Ok(Value::IntList(vec![1, 2, 3])),
    );
    assert_eq!(
        Value::try_from(json!(["a", "b"])),
        Ok(Value::StringList(vec!["a".to_string(), "b".to_string()])),
    );
    assert_eq!(Value::try_from(json!([])).map(|v| v.render()), Ok("[]".to_string()));
}

#[test]
fn json_unsupported_values_are_rejected_with_the_value() {
    for value in [
        json!(null),
        json!(1.5),
        json!({"a": 1}),
        json!([1, "a"]),
        json!([[1]]),
        json!(u64::MAX),
    ] {
        assert_eq!(
            Value::try_from(value.clone()),
            Err(ArgumentTypeNotSupportedError { value }),
        );
    }
}

#[test]
fn unsupported_error_message_names_the_value() {
    let err = Value::try_from(json!(1.5)).unwrap_err();
    assert_eq!(err.to_string(), "Argument value type is not supported: `1.5`");
}
