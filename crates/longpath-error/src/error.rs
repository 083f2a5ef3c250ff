//! The error type shared by every longpath query.

use crate::ErrorKind;
use std::fmt;

/// An error raised by a path or cycle query.
///
/// Every error names its [`ErrorKind`], the operation that raised it, and the
/// inputs that triggered it as key-value context (a vertex id, a requested
/// length). Structural invariant violations inside the search never surface
/// as values of this type; those abort.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that raised this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Whether this error blames the caller's input. See [`ErrorKind::is_input`].
    pub fn is_input_error(&self) -> bool {
        self.kind.is_input()
    }

    /// Name the operation raising this error.
    ///
    /// Calling this again while bubbling up keeps the inner operation in the
    /// context under "via", so the chain stays readable outermost-first.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("via", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.operation.is_empty() {
            write!(f, " in {}", self.operation)?;
        }

        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }

        if !self.context.is_empty() {
            write!(f, " (")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} = {}", key, value)?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")?;
        if let Some(source) = &self.source {
            write!(f, "\ncaused by: {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::new(ErrorKind::Unexpected, msg)
    }
}

impl Error {
    /// Create an Unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create an Unsupported error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create a VertexOutOfRange error
    pub fn vertex_out_of_range(vertex: impl Into<String>) -> Self {
        let vertex = vertex.into();
        Self::new(
            ErrorKind::VertexOutOfRange,
            format!("vertex '{}' does not belong to this graph", vertex),
        )
        .with_context("vertex", vertex)
    }

    /// Create a GraphInvalid error
    pub fn graph_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::GraphInvalid, message)
    }

    /// Create a TreeCorrupted error
    pub fn tree_corrupted(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TreeCorrupted, message)
    }

    /// Create a LayerMissing error
    pub fn layer_missing(pair: impl Into<String>) -> Self {
        let pair = pair.into();
        Self::new(
            ErrorKind::LayerMissing,
            format!("no representative tree for pair '{}'", pair),
        )
        .with_context("pair", pair)
    }

    /// Create a WitnessInvalid error
    pub fn witness_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::WitnessInvalid, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::InvalidArgument, "k must be at least 1");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "k must be at least 1");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::VertexOutOfRange, "not in graph")
            .with_operation("graph::neighbours")
            .with_context("vertex", "17")
            .with_context("vertex_count", "10");

        assert_eq!(err.operation(), "graph::neighbours");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("vertex", "17".to_string()));
    }

    #[test]
    fn test_operation_chaining_keeps_inner_operation() {
        let err = Error::new(ErrorKind::LayerMissing, "failed")
            .with_operation("search::disjoint_member")
            .with_operation("finder::find_paths");

        assert_eq!(err.operation(), "finder::find_paths");
        assert_eq!(err.context().len(), 1);
        assert_eq!(
            err.context()[0],
            ("via", "search::disjoint_member".to_string())
        );
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::InvalidArgument, "k must be at least 1")
            .with_operation("finder::find_paths")
            .with_context("k", "0");

        let display = format!("{}", err);
        assert_eq!(
            display,
            "InvalidArgument in finder::find_paths: k must be at least 1 (k = 0)"
        );
    }

    #[test]
    fn test_debug_includes_source() {
        let inner = Error::new(ErrorKind::TreeCorrupted, "missing child edge");
        let err = Error::new(ErrorKind::Unexpected, "search aborted").set_source(inner);

        let debug = format!("{:?}", err);
        assert!(debug.starts_with("Unexpected: search aborted"));
        assert!(debug.contains("caused by: TreeCorrupted"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::vertex_out_of_range("42");
        assert_eq!(err.kind(), ErrorKind::VertexOutOfRange);
        assert!(err.message().contains("42"));

        let err = Error::invalid_argument("k must be at least 1");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Error::layer_missing("(3, 7)");
        assert_eq!(err.kind(), ErrorKind::LayerMissing);
        assert!(err.message().contains("(3, 7)"));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_set_source() {
        let inner = Error::new(ErrorKind::TreeCorrupted, "missing child edge");
        let err = Error::new(ErrorKind::Unexpected, "search aborted").set_source(inner);

        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_from_strings() {
        let err: Error = "something odd".into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);

        let err: Error = String::from("still odd").into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }
}
