use crate::error::{Result, TypeGenError};
use crate::schema::SchemaNode;

/// Ordered registry of named type declarations produced by one flattening
/// pass.
///
/// Entries are appended in discovery order: every node registers only after
/// its children have finished their own registrations, so inner
/// declarations precede the record that contains them and the root schema's
/// declaration is always last. That order is the output order and must stay
/// stable.
#[derive(Debug, Default)]
pub struct DeclarationTable {
    entries: Vec<(String, SchemaNode)>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration under `name`.
    ///
    /// A repeated name is an error, never a merge.
    pub fn register(&mut self, name: &str, node: SchemaNode) -> Result<()> {
        if self.contains(name) {
            return Err(TypeGenError::DuplicateName(name.to_string()));
        }
        self.entries.push((name.to_string(), node));
        Ok(())
    }

    /// Whether `name` has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// All declarations, in registration order.
    pub fn entries(&self) -> &[(String, SchemaNode)] {
        &self.entries
    }

    /// Name of the most recently registered declaration, i.e. the root
    /// schema's own entry once flattening has finished.
    pub fn last_name(&self) -> Option<&str> {
        self.entries.last().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PrimitiveKind;

    #[test]
    fn repeated_names_are_an_error() {
        let mut table = DeclarationTable::new();
        table
            .register("Dup", SchemaNode::Primitive(PrimitiveKind::Int))
            .unwrap();
        let err = table
            .register("Dup", SchemaNode::Primitive(PrimitiveKind::String))
            .unwrap_err();
        assert_eq!(err.to_string(), "duplicate declaration of type 'Dup'");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn preserves_registration_order() {
        let mut table = DeclarationTable::new();
        for name in ["Inner", "Middle", "Outer"] {
            table
                .register(name, SchemaNode::Primitive(PrimitiveKind::Null))
                .unwrap();
        }
        let names: Vec<&str> = table.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Inner", "Middle", "Outer"]);
        assert_eq!(table.last_name(), Some("Outer"));
    }
}
