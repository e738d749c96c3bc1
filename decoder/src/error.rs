use flowline_schema::FieldType;
use thiserror::Error;

/// Everything that can go wrong while loading a schema or decoding a line
/// stream. Line and field indices are 0-based.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema load error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Malformed line {line}: no delimiter in {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("Field decode error at line {line}, field {field}: {raw:?} is not a valid {ty}")]
    FieldDecode {
        line: usize,
        field: usize,
        ty: FieldType,
        raw: String,
    },

    #[error(
        "Field count mismatch at line {line}: prefix {prefix:?} declares {expected} fields but the line has {found}"
    )]
    FieldCountMismatch {
        line: usize,
        prefix: String,
        expected: usize,
        found: usize,
    },

    #[error("Unmatched line {line}: prefix {prefix:?} is not allowed at any open scope")]
    UnmatchedLine { line: usize, prefix: String },
}
