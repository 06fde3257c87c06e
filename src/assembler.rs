use std::fs;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::error::{Result, TypeGenError};
use crate::flattener::flatten::flatten_node;
use crate::flattener::state::DeclarationTable;
use crate::schema::parse_schema;
use crate::transform::{type_expression, Target};

/// Exported name of the trailing alias that marks the schema's public
/// entry type.
pub const ENTRY_ALIAS: &str = "AvroType";

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Output syntax.
    pub target: Target,
    /// Wrap non-null primitive union branches in single-field tagged
    /// objects. On by default.
    pub wrap_primitives: bool,
    /// Register the root schema's declaration under this name instead of
    /// its own.
    pub root_name: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            target: Target::Flow,
            wrap_primitives: true,
            root_name: None,
        }
    }
}

/// Generate type declarations for an already-parsed schema document.
///
/// The document is either a single schema or an array of schemas (an
/// implicit top-level union). Returns the full output file text.
pub fn avro_to_types(schema: &Value, options: &GeneratorOptions) -> Result<String> {
    let node = parse_schema(schema)?;
    let mut table = DeclarationTable::new();
    flatten_node(&node, &[], &mut table, options.root_name.as_deref())?;
    render_file(&table, options)
}

/// Generate type declarations from raw schema text.
pub fn avro_to_types_from_str(text: &str, options: &GeneratorOptions) -> Result<String> {
    let schema: Value = serde_json::from_str(text)?;
    avro_to_types(&schema, options)
}

/// Render every declaration table entry in order, followed by the public
/// entry alias pointing at the last entry (the root schema's declaration).
fn render_file(table: &DeclarationTable, options: &GeneratorOptions) -> Result<String> {
    let root = table
        .last_name()
        .ok_or(TypeGenError::EmptyDocument)?
        .to_string();
    let syntax = options.target.syntax();

    let mut declarations = Vec::with_capacity(table.len() + 1);
    for (name, node) in table.entries() {
        let expression = type_expression(node, table, syntax, options.wrap_primitives)?;
        declarations.push(syntax.declaration(name, &expression));
    }
    declarations.push(syntax.alias(ENTRY_ALIAS, &root));

    let mut out = String::new();
    if let Some(pragma) = syntax.pragma() {
        out.push_str(pragma);
        out.push_str("\n\n");
    }
    out.push_str(&declarations.join("\n\n"));
    out.push('\n');
    Ok(out)
}

/// Convert an Avro schema file into a type declaration file.
///
/// Reads the schema from a filesystem path or an http(s) URL, generates
/// declarations per `options`, and writes the output file. Any failure
/// aborts the conversion with no partial output.
pub fn convert_avro_to_types(input: &str, output: &str, options: &GeneratorOptions) -> Result<()> {
    let content = fetch_schema_text(input)?;
    let rendered = avro_to_types_from_str(&content, options)?;
    fs::write(output, rendered)?;
    Ok(())
}

/// Fetch schema text from an http(s) URL or a filesystem path.
fn fetch_schema_text(input: &str) -> Result<String> {
    if let Ok(parsed) = Url::parse(input) {
        if matches!(parsed.scheme(), "http" | "https") {
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .map_err(|e| TypeGenError::Fetch(e.to_string()))?;
            let response = client
                .get(input)
                .send()
                .map_err(|e| TypeGenError::Fetch(e.to_string()))?;
            return response.text().map_err(|e| TypeGenError::Fetch(e.to_string()));
        }
    }
    Ok(fs::read_to_string(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_is_an_error() {
        // A bare primitive registers nothing, so nothing can be declared.
        let err = avro_to_types(&json!("string"), &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, TypeGenError::EmptyDocument));

        let err = avro_to_types(&json!([]), &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, TypeGenError::EmptyDocument));
    }

    #[test]
    fn malformed_json_text_is_an_error() {
        let err = avro_to_types_from_str("{ not json", &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, TypeGenError::Json(_)));
    }
}
