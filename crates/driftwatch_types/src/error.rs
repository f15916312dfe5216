use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Duplicate column name: {0}")]
    DuplicateColumnError(String),

    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    ColumnLengthError {
        column: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Failed to serialize: {0}")]
    SerializeError(String),

    #[error("Failed to deserialize: {0}")]
    DeSerializeError(String),

    #[error("Failed to get parent path")]
    GetParentPathError,

    #[error("Failed to create directory")]
    CreateDirectoryError,

    #[error("Failed to write to file")]
    WriteError,

    #[error("Failed to read file")]
    ReadError,
}
