//! Error types for dispatch-signature resolution.

use thiserror::Error;

use crate::backend::Backend;

/// Result type for dispatch operations.
pub type Result<T> = core::result::Result<T, DispatchError>;

/// Errors produced while binding a call or resolving its backend.
///
/// Classifiers and probes themselves never fail; the only failure points
/// are a registry miss, a call that does not fit the declared signature,
/// and a candidate set mixing arrays from different device backends.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// No probe is registered under this function name.
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    /// More positional arguments than the signature declares.
    #[error("{function}() takes {expected} positional argument(s) but {given} were given")]
    TooManyArguments {
        function: &'static str,
        expected: usize,
        given: usize,
    },

    /// A named argument the signature does not declare.
    #[error("{function}() got an unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword {
        function: &'static str,
        keyword: String,
    },

    /// The same parameter supplied both positionally and by name.
    #[error("{function}() got multiple values for argument '{parameter}'")]
    DuplicateArgument {
        function: &'static str,
        parameter: &'static str,
    },

    /// A required parameter was not supplied.
    #[error("{function}() missing required argument '{parameter}'")]
    MissingArgument {
        function: &'static str,
        parameter: &'static str,
    },

    /// Input arrays live on different backends.
    #[error("cannot mix arrays from '{lhs}' and '{rhs}' in one call")]
    MixedBackends { lhs: Backend, rhs: Backend },
}
