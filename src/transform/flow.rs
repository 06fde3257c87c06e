use super::TargetSyntax;

/// Flow target: exact object types, indexer-style maps, `// @flow` pragma.
pub struct FlowSyntax;

impl TargetSyntax for FlowSyntax {
    fn record(&self, fields: &[(String, String)]) -> String {
        if fields.is_empty() {
            return "{||}".to_string();
        }
        let mut body = String::from("{|\n");
        for (name, expression) in fields {
            body.push_str(&format!("  {name}: {expression},\n"));
        }
        body.push_str("|}");
        body
    }

    fn tagged(&self, tag: &str, value: &str) -> String {
        format!("{{| {tag}: {value} |}}")
    }

    fn map(&self, values: &str) -> String {
        format!("{{ [key: string]: {values} }}")
    }

    fn pragma(&self) -> Option<&'static str> {
        Some("// @flow")
    }
}
