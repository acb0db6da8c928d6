/// Error types for wheel generation and OBJ parsing
use std::fmt;

/// Which indexed table a record or face corner refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Vertex,
    Normal,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Vertex => f.write_str("vertex"),
            RecordKind::Normal => f.write_str("normal"),
        }
    }
}

/// Rejected wheel parameters. Raised before any geometry is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error("number of sides must be an integer between 3 and 360, got {0}")]
    InvalidSides(i64),

    #[error("radius must be a positive number, got {0}")]
    InvalidRadius(f32),

    #[error("width must be a positive number, got {0}")]
    InvalidWidth(f32),
}

/// Fatal OBJ parse errors. Malformed faces are not errors; see `ParseWarning`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObjError {
    #[error("line {line}: malformed {kind} record `{text}`")]
    MalformedRecord {
        line: usize,
        kind: RecordKind,
        text: String,
    },

    #[error("line {line}: {kind} index {index} is out of range ({count} declared)")]
    IndexOutOfRange {
        line: usize,
        kind: RecordKind,
        index: usize,
        count: usize,
    },
}
