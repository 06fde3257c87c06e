use regex::Regex;

use crate::error::{Result, TypeGenError};

/// Check that a raw schema name is a valid Avro identifier.
///
/// Valid names start with a letter or underscore and contain only letters,
/// digits and underscores. Anything else fails with
/// [`TypeGenError::InvalidName`]; names are never rewritten into shape.
pub fn validate_name(raw: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    if re.is_match(raw) {
        Ok(())
    } else {
        Err(TypeGenError::InvalidName(raw.to_string()))
    }
}

/// Compose a type identifier from a path of ancestor names.
///
/// Each segment is split on underscores, every sub-token gets its first
/// letter capitalized, the sub-tokens are rejoined and the segment as a
/// whole is capitalized; segments are then joined with `_`. Pure and
/// deterministic: the same path always yields the same identifier, which is
/// what keeps sibling anonymous types at different depths from colliding.
///
/// `["Person", "spouse_name"]` becomes `Person_SpouseName`.
pub fn compose_name(path: &[String]) -> String {
    path.iter()
        .map(|segment| capitalize(&pascal_segment(segment)))
        .collect::<Vec<_>>()
        .join("_")
}

/// Split one path segment on `_` and capitalize each sub-token.
///
/// Only underscores split; no other separator is recognized.
fn pascal_segment(segment: &str) -> String {
    segment.split('_').map(capitalize).collect()
}

/// Capitalize first letter
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifier_names() {
        for name in ["Person", "_private", "A1_b2", "x"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_invalid_names() {
        for name in ["Some name", "1abc", "", "na-me", "a.b"] {
            let err = validate_name(name).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("'{name}' is not a valid avro name")
            );
        }
    }

    #[test]
    fn composes_path_identifiers() {
        let path = |segments: &[&str]| segments.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(compose_name(&path(&["Person", "age"])), "Person_Age");
        assert_eq!(
            compose_name(&path(&["Person", "spouse_name"])),
            "Person_SpouseName"
        );
        assert_eq!(
            compose_name(&path(&["Person", "tags", "Map"])),
            "Person_Tags_Map"
        );
    }

    #[test]
    fn composition_is_deterministic() {
        let path = vec!["outer_thing".to_string(), "inner_value".to_string()];
        assert_eq!(compose_name(&path), compose_name(&path));
        assert_eq!(compose_name(&path), "OuterThing_InnerValue");
    }
}
