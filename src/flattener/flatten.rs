use crate::common::names::{compose_name, validate_name};
use crate::error::Result;
use crate::flattener::state::DeclarationTable;
use crate::flattener::unions::union_inlines;
use crate::schema::{RecordField, SchemaNode};

/// Flatten a schema tree into `table`, returning the node to use at the
/// original site.
///
/// Primitives and bare references pass through untouched. Records, enums,
/// maps and promoted unions are registered as standalone declarations and
/// replaced by a [`SchemaNode::Ref`] to their declared name. Arrays and
/// inlined nullable unions stay structural, rebuilt around their flattened
/// children.
///
/// `path` is the chain of ancestor names (record name, field name) used
/// only to synthesize identifiers for anonymous types; records and enums
/// always take their own declared name. `name_override` replaces the
/// declared name of the node itself, which lets a caller re-register a
/// subtree under an alias.
///
/// Registration is strictly post-order: a node registers only after all of
/// its children have registered, so the table ends with the root schema's
/// own declaration.
pub fn flatten_node(
    node: &SchemaNode,
    path: &[String],
    table: &mut DeclarationTable,
    name_override: Option<&str>,
) -> Result<SchemaNode> {
    match node {
        SchemaNode::Primitive(_) | SchemaNode::Ref(_) => Ok(node.clone()),

        SchemaNode::Record { name, fields } => {
            validate_name(name)?;
            let declared = name_override.unwrap_or(name).to_string();

            let mut flat_fields = Vec::with_capacity(fields.len());
            for field in fields {
                let mut field_path = path.to_vec();
                field_path.push(declared.clone());
                field_path.push(field.name.clone());
                let field_type = flatten_node(&field.field_type, &field_path, table, None)?;
                flat_fields.push(RecordField {
                    name: field.name.clone(),
                    field_type,
                });
            }

            table.register(
                &declared,
                SchemaNode::Record {
                    name: declared.clone(),
                    fields: flat_fields,
                },
            )?;
            Ok(SchemaNode::Ref(declared))
        }

        SchemaNode::Enum { name, symbols } => {
            validate_name(name)?;
            let declared = name_override.unwrap_or(name).to_string();
            table.register(
                &declared,
                SchemaNode::Enum {
                    name: declared.clone(),
                    symbols: symbols.clone(),
                },
            )?;
            Ok(SchemaNode::Ref(declared))
        }

        // Arrays never introduce a naming segment and are never registered;
        // they stay structural at their use site.
        SchemaNode::Array { items } => {
            let items = flatten_node(items, path, table, None)?;
            Ok(SchemaNode::Array {
                items: Box::new(items),
            })
        }

        // Maps are always promoted: every target needs a named alias to
        // express an indexed type cleanly.
        SchemaNode::Map { values } => {
            let values = flatten_node(values, path, table, None)?;
            let mut map_path = path.to_vec();
            map_path.push("Map".to_string());
            let synthesized = compose_name(&map_path);
            table.register(
                &synthesized,
                SchemaNode::Map {
                    values: Box::new(values),
                },
            )?;
            Ok(SchemaNode::Ref(synthesized))
        }

        SchemaNode::Union(branches) => {
            // An empty union registers nothing; the document-level check
            // reports it as an empty document.
            if branches.is_empty() {
                return Ok(SchemaNode::Union(Vec::new()));
            }

            let candidate = if path.is_empty() {
                "Union".to_string()
            } else {
                compose_name(path)
            };

            let mut flat_branches = Vec::with_capacity(branches.len());
            for branch in branches {
                flat_branches.push(flatten_node(branch, path, table, None)?);
            }

            if union_inlines(path, &flat_branches) {
                Ok(SchemaNode::Union(flat_branches))
            } else {
                table.register(&candidate, SchemaNode::Union(flat_branches))?;
                Ok(SchemaNode::Ref(candidate))
            }
        }
    }
}
