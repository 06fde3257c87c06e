use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, TypeGenError};

/// The eight Avro primitive type keywords.
///
/// `bytes` is representable so that parsing never loses information, but
/// neither output target can express it and the transformer rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
}

impl PrimitiveKind {
    /// The Avro keyword for this primitive, also used as its union tag.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Null => "null",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Bytes => "bytes",
            PrimitiveKind::String => "string",
        }
    }

    /// Look up a primitive by its Avro keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "null" => Some(PrimitiveKind::Null),
            "boolean" => Some(PrimitiveKind::Boolean),
            "int" => Some(PrimitiveKind::Int),
            "long" => Some(PrimitiveKind::Long),
            "float" => Some(PrimitiveKind::Float),
            "double" => Some(PrimitiveKind::Double),
            "bytes" => Some(PrimitiveKind::Bytes),
            "string" => Some(PrimitiveKind::String),
            _ => None,
        }
    }
}

/// One node of a parsed Avro schema tree, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Primitive(PrimitiveKind),
    /// A bare name referencing a previously declared record or enum.
    Ref(String),
    Record {
        name: String,
        fields: Vec<RecordField>,
    },
    Enum {
        name: String,
        symbols: Vec<String>,
    },
    Array {
        items: Box<SchemaNode>,
    },
    Map {
        values: Box<SchemaNode>,
    },
    Union(Vec<SchemaNode>),
}

/// A named field inside a record schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: SchemaNode,
}

/// Parse a JSON value into a schema tree.
///
/// Accepts the three Avro schema spellings: a bare type name, an object
/// with a `"type"` attribute, or an array of schemas (a union). Bare names
/// that are not one of the eight primitive keywords become [`SchemaNode::Ref`];
/// whether they resolve is checked later against the declaration table.
pub fn parse_schema(value: &Value) -> Result<SchemaNode> {
    match value {
        Value::String(name) => Ok(parse_type_name(name)),
        Value::Array(branches) => {
            let branches = branches
                .iter()
                .map(parse_schema)
                .collect::<Result<Vec<_>>>()?;
            Ok(SchemaNode::Union(branches))
        }
        Value::Object(obj) => parse_schema_object(obj),
        other => Err(TypeGenError::InvalidSchema(format!(
            "expected a schema, found {other}"
        ))),
    }
}

fn parse_type_name(name: &str) -> SchemaNode {
    match PrimitiveKind::from_keyword(name) {
        Some(kind) => SchemaNode::Primitive(kind),
        None => SchemaNode::Ref(name.to_string()),
    }
}

fn parse_schema_object(obj: &serde_json::Map<String, Value>) -> Result<SchemaNode> {
    let type_attr = obj
        .get("type")
        .ok_or_else(|| TypeGenError::InvalidSchema("schema object has no \"type\"".to_string()))?;

    let type_name = match type_attr {
        Value::String(s) => s.as_str(),
        // Avro permits the type attribute to itself be a full schema,
        // e.g. {"type": ["null", "string"]}.
        other => return parse_schema(other),
    };

    match type_name {
        "record" => parse_record(obj),
        "enum" => parse_enum(obj),
        "array" => {
            let items = obj.get("items").ok_or_else(|| {
                TypeGenError::InvalidSchema("array schema has no \"items\"".to_string())
            })?;
            Ok(SchemaNode::Array {
                items: Box::new(parse_schema(items)?),
            })
        }
        "map" => {
            let values = obj.get("values").ok_or_else(|| {
                TypeGenError::InvalidSchema("map schema has no \"values\"".to_string())
            })?;
            Ok(SchemaNode::Map {
                values: Box::new(parse_schema(values)?),
            })
        }
        // {"type": "string"} and friends: an object wrapper around a
        // bare type name.
        other => Ok(parse_type_name(other)),
    }
}

fn parse_record(obj: &serde_json::Map<String, Value>) -> Result<SchemaNode> {
    let name = name_attr(obj, "record")?;
    let fields = obj
        .get("fields")
        .and_then(|f| f.as_array())
        .ok_or_else(|| {
            TypeGenError::InvalidSchema(format!("record '{name}' has no \"fields\" list"))
        })?;

    let mut parsed = Vec::with_capacity(fields.len());
    for field in fields {
        let field_obj = field.as_object().ok_or_else(|| {
            TypeGenError::InvalidSchema(format!("field of record '{name}' is not an object"))
        })?;
        let field_name = name_attr(field_obj, "field")?;
        let field_type = field_obj.get("type").ok_or_else(|| {
            TypeGenError::InvalidSchema(format!("field '{field_name}' has no \"type\""))
        })?;
        parsed.push(RecordField {
            name: field_name,
            field_type: parse_schema(field_type)?,
        });
    }

    Ok(SchemaNode::Record {
        name,
        fields: parsed,
    })
}

fn parse_enum(obj: &serde_json::Map<String, Value>) -> Result<SchemaNode> {
    let name = name_attr(obj, "enum")?;
    let symbols = obj
        .get("symbols")
        .and_then(|s| s.as_array())
        .ok_or_else(|| {
            TypeGenError::InvalidSchema(format!("enum '{name}' has no \"symbols\" list"))
        })?
        .iter()
        .map(|s| {
            s.as_str().map(str::to_string).ok_or_else(|| {
                TypeGenError::InvalidSchema(format!("enum '{name}' has a non-string symbol"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SchemaNode::Enum { name, symbols })
}

fn name_attr(obj: &serde_json::Map<String, Value>, what: &str) -> Result<String> {
    obj.get("name")
        .and_then(|n| n.as_str())
        .map(str::to_string)
        .ok_or_else(|| TypeGenError::InvalidSchema(format!("{what} schema has no \"name\"")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_keyword_parses_as_primitive() {
        let node = parse_schema(&json!("long")).unwrap();
        assert_eq!(node, SchemaNode::Primitive(PrimitiveKind::Long));
    }

    #[test]
    fn bare_name_parses_as_reference() {
        let node = parse_schema(&json!("Person")).unwrap();
        assert_eq!(node, SchemaNode::Ref("Person".to_string()));
    }

    #[test]
    fn wrapped_type_attribute_unwraps() {
        let node = parse_schema(&json!({ "type": "string" })).unwrap();
        assert_eq!(node, SchemaNode::Primitive(PrimitiveKind::String));
    }

    #[test]
    fn record_without_fields_is_rejected() {
        let err = parse_schema(&json!({ "type": "record", "name": "Empty" })).unwrap_err();
        assert!(matches!(err, TypeGenError::InvalidSchema(_)));
    }
}
