//! Schema flattening: the walk that replaces nested anonymous structure
//! with references to standalone named declarations.

pub mod flatten;
pub mod state;
pub mod unions;

pub use flatten::flatten_node;
pub use state::DeclarationTable;
