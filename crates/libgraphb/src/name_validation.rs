/// Returns `true` if `name` fully matches `[_A-Za-z][_0-9A-Za-z]*`.
///
/// See: <https://spec.graphql.org/October2021/#Name>
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
        _ => false,
    }
}
