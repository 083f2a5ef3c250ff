//! # longpath-error
//!
//! Unified error handling for longpath.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., InvalidArgument, VertexOutOfRange)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use longpath_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidArgument, "path length must be positive")
//!         .with_operation("finder::find_paths")
//!         .with_context("k", "0"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, longpath_error::Error>`
//! - Invalid inputs surface as `Err` immediately, with no partial result
//! - Logic invariant violations are bugs: they assert and abort, never `Err`
//! - Errors are final: the graph is immutable for the lifetime of a query,
//!   so there is no retry axis and no transient failure state

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using longpath Error
pub type Result<T> = std::result::Result<T, Error>;
