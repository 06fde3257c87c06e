use crate::schema::{PrimitiveKind, SchemaNode};

/// Whether a flattened union stays inline at its use site.
///
/// Only the common nullable-field shape inlines: exactly two branches, one
/// of them `null`, somewhere below the document root. Every other union
/// (top-level, more than two branches, no null branch) is promoted to a
/// standalone declaration. This policy is fixed; wider "simple" shapes do
/// not inline.
pub fn union_inlines(path: &[String], branches: &[SchemaNode]) -> bool {
    !path.is_empty() && branches.len() == 2 && branches.iter().any(is_null)
}

fn is_null(node: &SchemaNode) -> bool {
    matches!(node, SchemaNode::Primitive(PrimitiveKind::Null))
}

/// The tag under which a union branch is wrapped, or `None` for a bare
/// branch.
///
/// `null` is always bare. Other primitives are tagged with their own
/// keyword, unless primitive wrapping is disabled, in which case they stay
/// bare too. Named types tag with their declared name; arrays, maps and
/// nested unions take a literal kind tag.
pub fn branch_tag(node: &SchemaNode, wrap_primitives: bool) -> Option<String> {
    match node {
        SchemaNode::Primitive(PrimitiveKind::Null) => None,
        SchemaNode::Primitive(kind) => {
            wrap_primitives.then(|| kind.as_str().to_string())
        }
        SchemaNode::Record { name, .. } | SchemaNode::Enum { name, .. } => Some(name.clone()),
        SchemaNode::Ref(name) => Some(name.clone()),
        SchemaNode::Array { .. } => Some("array".to_string()),
        SchemaNode::Map { .. } => Some("map".to_string()),
        SchemaNode::Union(_) => Some("union".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn below_root() -> Vec<String> {
        vec!["Person".to_string(), "field".to_string()]
    }

    #[test]
    fn nullable_pair_inlines_below_the_root() {
        let branches = vec![
            SchemaNode::Primitive(PrimitiveKind::Null),
            SchemaNode::Primitive(PrimitiveKind::String),
        ];
        assert!(union_inlines(&below_root(), &branches));
        // The same shape at the document root is promoted.
        assert!(!union_inlines(&[], &branches));
    }

    #[test]
    fn three_branches_never_inline() {
        let branches = vec![
            SchemaNode::Primitive(PrimitiveKind::Null),
            SchemaNode::Primitive(PrimitiveKind::Int),
            SchemaNode::Primitive(PrimitiveKind::Double),
        ];
        assert!(!union_inlines(&below_root(), &branches));
    }

    #[test]
    fn pair_without_null_never_inlines() {
        let branches = vec![
            SchemaNode::Primitive(PrimitiveKind::Int),
            SchemaNode::Primitive(PrimitiveKind::String),
        ];
        assert!(!union_inlines(&below_root(), &branches));
    }

    #[test]
    fn tags_follow_branch_kind() {
        assert_eq!(
            branch_tag(&SchemaNode::Primitive(PrimitiveKind::Null), true),
            None
        );
        assert_eq!(
            branch_tag(&SchemaNode::Primitive(PrimitiveKind::Int), true),
            Some("int".to_string())
        );
        assert_eq!(
            branch_tag(&SchemaNode::Primitive(PrimitiveKind::Int), false),
            None
        );
        assert_eq!(
            branch_tag(&SchemaNode::Ref("Color".to_string()), true),
            Some("Color".to_string())
        );
        assert_eq!(
            branch_tag(
                &SchemaNode::Array {
                    items: Box::new(SchemaNode::Primitive(PrimitiveKind::String)),
                },
                true
            ),
            Some("array".to_string())
        );
        assert_eq!(
            branch_tag(&SchemaNode::Union(Vec::new()), true),
            Some("union".to_string())
        );
    }
}
