use super::TargetSyntax;

/// TypeScript target: open object literals and `Record` maps.
pub struct TypescriptSyntax;

impl TargetSyntax for TypescriptSyntax {
    fn record(&self, fields: &[(String, String)]) -> String {
        if fields.is_empty() {
            return "{}".to_string();
        }
        let mut body = String::from("{\n");
        for (name, expression) in fields {
            body.push_str(&format!("  {name}: {expression};\n"));
        }
        body.push('}');
        body
    }

    fn tagged(&self, tag: &str, value: &str) -> String {
        format!("{{ {tag}: {value} }}")
    }

    fn map(&self, values: &str) -> String {
        format!("Record<string, {values}>")
    }
}
