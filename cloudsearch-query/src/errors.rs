/// Error types for building and rendering structured queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A factory was called with arguments that break its contract
    Argument(String),
    /// An expression reached the serializer without the data its kind requires
    Consistency(String),
}

impl QueryError {
    pub fn is_argument(&self) -> bool {
        matches!(self, QueryError::Argument(_))
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Argument(msg) => write!(f, "Invalid argument: {}", msg),
            QueryError::Consistency(msg) => write!(f, "Inconsistent expression: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}
