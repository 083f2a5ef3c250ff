//! Error kinds for longpath operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Input errors
    // =========================================================================
    /// Invalid argument passed to a query (e.g. a non-positive path length)
    InvalidArgument,

    /// A vertex handle does not belong to the graph it was used with
    VertexOutOfRange,

    /// The graph value itself is malformed
    GraphInvalid,

    // =========================================================================
    // Search errors
    // =========================================================================
    /// A representative tree violates its structural invariants
    TreeCorrupted,

    /// A tree expected from the previous layer is missing
    LayerMissing,

    /// A witness set could not be ordered into a concrete path
    WitnessInvalid,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether this kind blames the caller's input rather than search state.
    ///
    /// Input errors are surfaced before any layer is built; everything else
    /// points at the query machinery itself.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidArgument
                | ErrorKind::VertexOutOfRange
                | ErrorKind::GraphInvalid
                | ErrorKind::ConfigInvalid
        )
    }
}
