use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TypeGenError>;

/// Errors raised while turning an Avro schema into type declarations.
///
/// Every variant aborts the whole invocation at the point of detection;
/// there is no recovery path and no partial output.
#[derive(Debug, Error)]
pub enum TypeGenError {
    /// A record or enum declared a name that is not a valid Avro identifier.
    #[error("'{0}' is not a valid avro name")]
    InvalidName(String),

    /// Two distinct declarations resolved to the same table name.
    #[error("duplicate declaration of type '{0}'")]
    DuplicateName(String),

    /// A bare type name was never registered as a declaration.
    #[error("{0} is not a valid custom type name.")]
    UnknownCustomType(String),

    /// The schema uses an Avro primitive neither target can express.
    #[error("the '{0}' type is not supported")]
    UnsupportedPrimitive(String),

    /// Flattening produced no declarations at all.
    #[error("schema document contains no type declarations")]
    EmptyDocument,

    /// The parsed JSON does not have the shape of an Avro schema.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// The input text was not valid JSON.
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the input or writing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Fetching a remote schema failed.
    #[error("failed to fetch schema: {0}")]
    Fetch(String),
}
