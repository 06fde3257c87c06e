//! Target-syntax transformers.
//!
//! One shared traversal ([`type_expression`]) turns flattened schema nodes
//! into type expressions; the per-target [`TargetSyntax`] trait carries
//! only the syntax that actually differs between Flow and TypeScript, so
//! both targets share the node dispatch and the union tagging policy and
//! produce structurally equivalent output.

pub mod flow;
pub mod typescript;

use crate::error::{Result, TypeGenError};
use crate::flattener::state::DeclarationTable;
use crate::flattener::unions::branch_tag;
use crate::schema::{PrimitiveKind, SchemaNode};

/// Output syntax selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Target {
    Flow,
    Typescript,
}

impl Target {
    pub(crate) fn syntax(self) -> &'static dyn TargetSyntax {
        match self {
            Target::Flow => &flow::FlowSyntax,
            Target::Typescript => &typescript::TypescriptSyntax,
        }
    }
}

/// Syntax-level rendering rules for one output target.
///
/// Constructs both targets spell identically are default methods; an
/// implementor only supplies object shape, map shape, branch wrapping and
/// the optional file pragma.
pub trait TargetSyntax {
    /// Declaration-level object body for a record's rendered fields.
    fn record(&self, fields: &[(String, String)]) -> String;

    /// Inline single-field object wrapping one tagged union branch.
    fn tagged(&self, tag: &str, value: &str) -> String;

    /// Indexed type over string keys.
    fn map(&self, values: &str) -> String;

    /// Pragma line prefixed to the whole output file, if the target needs
    /// one.
    fn pragma(&self) -> Option<&'static str> {
        None
    }

    /// Keyword for a primitive type. `bytes` has no rendering in either
    /// target and fails.
    fn primitive(&self, kind: PrimitiveKind) -> Result<String> {
        let keyword = match kind {
            PrimitiveKind::Null => "null",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Int
            | PrimitiveKind::Long
            | PrimitiveKind::Float
            | PrimitiveKind::Double => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Bytes => {
                return Err(TypeGenError::UnsupportedPrimitive("bytes".to_string()))
            }
        };
        Ok(keyword.to_string())
    }

    fn array(&self, items: &str) -> String {
        format!("Array<{items}>")
    }

    fn union(&self, branches: &[String]) -> String {
        branches.join(" | ")
    }

    /// An enum renders as a union of its symbols as string literal types.
    fn enumeration(&self, symbols: &[String]) -> String {
        symbols
            .iter()
            .map(|symbol| format!("\"{symbol}\""))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn declaration(&self, name: &str, expression: &str) -> String {
        format!("export type {name} = {expression};")
    }

    fn alias(&self, exported: &str, target: &str) -> String {
        format!("export type {exported} = {target};")
    }
}

/// Render one flattened schema node as a type expression.
///
/// Bare references are checked against the declaration table here; a name
/// that was never registered fails with
/// [`TypeGenError::UnknownCustomType`].
pub fn type_expression(
    node: &SchemaNode,
    table: &DeclarationTable,
    syntax: &dyn TargetSyntax,
    wrap_primitives: bool,
) -> Result<String> {
    match node {
        SchemaNode::Primitive(kind) => syntax.primitive(*kind),
        SchemaNode::Ref(name) => {
            if table.contains(name) {
                Ok(name.clone())
            } else {
                Err(TypeGenError::UnknownCustomType(name.clone()))
            }
        }
        SchemaNode::Record { fields, .. } => {
            let mut rendered = Vec::with_capacity(fields.len());
            for field in fields {
                let expression =
                    type_expression(&field.field_type, table, syntax, wrap_primitives)?;
                rendered.push((field.name.clone(), expression));
            }
            Ok(syntax.record(&rendered))
        }
        SchemaNode::Enum { symbols, .. } => Ok(syntax.enumeration(symbols)),
        SchemaNode::Array { items } => {
            let items = type_expression(items, table, syntax, wrap_primitives)?;
            Ok(syntax.array(&items))
        }
        SchemaNode::Map { values } => {
            let values = type_expression(values, table, syntax, wrap_primitives)?;
            Ok(syntax.map(&values))
        }
        SchemaNode::Union(branches) => union_expression(branches, table, syntax, wrap_primitives),
    }
}

/// Render a union: unique bare branches first in first-seen order, tagged
/// branches after in their original order.
///
/// Bare branches are deduplicated by rendered expression, so `int` and
/// `double` collapse into one `number`. Tagged branches are never
/// deduplicated; their tags already keep them apart.
fn union_expression(
    branches: &[SchemaNode],
    table: &DeclarationTable,
    syntax: &dyn TargetSyntax,
    wrap_primitives: bool,
) -> Result<String> {
    let mut bare: Vec<String> = Vec::new();
    let mut tagged: Vec<String> = Vec::new();

    for branch in branches {
        let expression = type_expression(branch, table, syntax, wrap_primitives)?;
        match branch_tag(branch, wrap_primitives) {
            None => {
                if !bare.contains(&expression) {
                    bare.push(expression);
                }
            }
            Some(tag) => tagged.push(syntax.tagged(&tag, &expression)),
        }
    }

    bare.extend(tagged);
    Ok(syntax.union(&bare))
}
