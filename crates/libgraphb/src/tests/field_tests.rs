use crate::Argument;
use crate::BooleanClause;
use crate::Field;
use crate::NameKind;
use crate::OperationBuildError;

#[test]
fn bare_field_renders_name_only() {
    assert_eq!(Field::new("uid").render(), "uid");
}

#[test]
fn no_empty_parens_or_braces() {
    let field = Field::new("question").with_arguments([]).with_fields([]);
    assert_eq!(field.render(), "question");
}

#[test]
fn arguments_are_comma_separated_in_order() {
    let field = Field::new("users")
        .with_argument(Argument::int("first", 10))
        .with_argument(Argument::string("after", "abc"))
        .with_argument(Argument::bool("active", true));
    assert_eq!(field.render(), r#"users(first:10,after:"abc",active:true)"#);
}

#[test]
fn children_render_in_insertion_order() {
    let field = Field::new("friend")
        .with_field_names(["name", "age"])
        .with_field(Field::new("pets").with_field_names(["name@."]));
    assert_eq!(field.render(), "friend{name,age,pets{name@.}}");
}

#[test]
fn alias_renders_before_name() {
    let field = Field::new("user")
        .with_alias("me")
        .with_argument(Argument::int("id", 1))
        .with_field_names(["id"]);
    assert_eq!(field.render(), "me:user(id:1){id}");
    assert_eq!(field.alias(), Some("me"));
}

#[test]
fn function_field_wraps_argument_as_func_selector() {
    let field = Field::function("bd")
        .with_argument(Argument::function(
            "eq",
            [Argument::string("name@en", "Blade Runner")],
        ))
        .with_field_names(["uid", "name@en", "initial_release_date", "netflix_id"]);

    assert!(field.is_function_field());
    assert_eq!(field.arguments().len(), 1);
    assert_eq!(field.arguments()[0].name(), "func");
    assert_eq!(
        field.render(),
        r#"bd(func:eq(name@en,"Blade Runner")){uid,name@en,initial_release_date,netflix_id}"#,
    );
}

#[test]
fn plain_field_with_function_argument_renders_predicate_directly() {
    let field = Field::new("director.film@filter")
        .with_argument(Argument::function(
            "le",
            [Argument::string("initial_release_date", "2000")],
        ))
        .with_field_names(["initial_release_date"]);
    assert_eq!(
        field.render(),
        r#"director.film@filter(le(initial_release_date,"2000")){initial_release_date}"#,
    );
}

#[test]
fn boolean_arguments_join_inside_parens() {
    let field = Field::new("director.film@filter")
        .with_boolean_arguments(BooleanClause::new(["OR"], [
            Argument::function("allofterms", [Argument::string("name@en", "jonesindiana")]),
            Argument::function("allofterms", [Argument::string("name@en", "jurassicpark")]),
        ]).unwrap())
        .with_field_names(["uid"]);

    assert_eq!(field.argument_operators(), &["OR".to_string()]);
    assert_eq!(
        field.render(),
        r#"director.film@filter(allofterms(name@en,"jonesindiana") OR allofterms(name@en,"jurassicpark")){uid}"#,
    );
}

#[test]
fn filter_renders_after_arguments_and_before_children() {
    let field = Field::new("films")
        .with_argument(Argument::int("first", 2))
        .with_filter(BooleanClause::single(
            Argument::function("has", [Argument::string("genre", "")]),
        ))
        .with_field_names(["uid"]);
    assert_eq!(field.render(), "films(first:2)@filter(has(genre)){uid}");
}

#[test]
fn filter_without_arguments() {
    let field = Field::new("films")
        .with_filter(BooleanClause::single(
            Argument::function("has", [Argument::string("genre", "")]),
        ));
    assert_eq!(field.render(), "films@filter(has(genre))");
}

#[test]
fn field_lookup_searches_direct_children_only() {
    let field = Field::new("root")
        .with_field(Field::new("a").with_field_names(["deep"]))
        .with_field_names(["b"]);
    assert_eq!(field.field("a").map(Field::name), Some("a"));
    assert_eq!(field.field("b").map(Field::name), Some("b"));
    assert!(field.field("deep").is_none());
}

#[test]
fn validate_accepts_graphql_names() {
    let field = Field::new("user")
        .with_alias("me")
        .with_field_names(["id", "_name"]);
    assert_eq!(field.validate(), Ok(()));
}

#[test]
fn validate_rejects_invalid_field_name() {
    let field = Field::new("user").with_field_names(["id", "name@en"]);
    assert_eq!(
        field.validate(),
        Err(OperationBuildError::InvalidName {
            kind: NameKind::Field,
            name: "name@en".to_string(),
        }),
    );
}

#[test]
fn validate_rejects_invalid_alias() {
    let field = Field::new("user").with_alias("1st");
    assert_eq!(
        field.validate(),
        Err(OperationBuildError::InvalidName {
            kind: NameKind::Alias,
            name: "1st".to_string(),
        }),
    );
}
