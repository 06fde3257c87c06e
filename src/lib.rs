//! # avrotypes
//!
//! Generate [Flow](https://flow.org/) or
//! [TypeScript](https://www.typescriptlang.org/) type declarations from
//! [Apache Avro](https://avro.apache.org/) schemas.
//!
//! ## Features
//!
//! - Flattens nested records, enums, maps and unions into an ordered set
//!   of named top-level declarations
//! - Deterministic identifier synthesis for anonymous unions and maps
//! - Inlines the common nullable-field union shape at its use site
//! - Tags primitive union branches in single-field objects (optional)
//! - Two output targets, Flow and TypeScript, sharing one traversal
//! - CLI tool `avro2types` for file conversion
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use serde_json::json;
//! use avrotypes::{avro_to_types, GeneratorOptions};
//!
//! let schema = json!({
//!     "type": "record",
//!     "name": "Person",
//!     "fields": [
//!         { "name": "age", "type": "int" },
//!         { "name": "spouse_name", "type": ["null", "string"] }
//!     ]
//! });
//!
//! let output = avro_to_types(&schema, &GeneratorOptions::default()).unwrap();
//! assert!(output.starts_with("// @flow"));
//! assert!(output.contains("export type Person"));
//! assert!(output.ends_with("export type AvroType = Person;\n"));
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! avro2types person.avsc person.js
//! avro2types person.avsc person.ts --target typescript
//! ```
//!
//! ## Crate Layout
//!
//! - [`schema`] — Schema model (`SchemaNode`, `PrimitiveKind`) and JSON parsing
//! - [`common`] — Name validation and identifier composition
//! - [`flattener`] — Flattening engine, declaration table, union policy
//! - [`transform`] — Shared traversal plus the Flow/TypeScript syntaxes
//! - [`assembler`] — Output file assembly and the conversion entry points
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod assembler;
pub mod common;
pub mod error;
pub mod flattener;
pub mod schema;
pub mod transform;

pub use assembler::{
    avro_to_types, avro_to_types_from_str, convert_avro_to_types, GeneratorOptions, ENTRY_ALIAS,
};
pub use error::TypeGenError;
pub use transform::Target;
