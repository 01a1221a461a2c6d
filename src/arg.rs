//! Argument descriptors for backend resolution.
//!
//! The dispatch layer never touches concrete tensors. Callers describe each
//! argument of a public API call with an [`ArgValue`] and the registry
//! decides which of those descriptors should count towards backend
//! resolution.

use crate::backend::Backend;

/// One argument of a public signal API call, as seen by the dispatch layer.
///
/// This is a closed description of argument *kind*, not a container for the
/// data itself: `Array` records only which backend the array lives on,
/// `Callable` is an opaque token for window-generator callbacks, and
/// `Poly1d` carries the coefficients of the legacy one-dimensional
/// polynomial type.
///
/// `None` doubles as the neutral placeholder meaning "carries no array
/// content relevant to backend resolution". The classifiers in
/// [`crate::classify`] rewrite non-array forms to it; resolvers skip it.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Absent argument, or the neutral placeholder.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex { re: f64, im: f64 },
    /// String argument (window name, mode, filter type, ...).
    Str(String),
    /// Tuple argument: a `(name, param)` window spec or a tuple-form
    /// linear-system description whose elements may themselves be arrays.
    Tuple(Vec<ArgValue>),
    /// Host-memory numeric sequence (a plain list of numbers).
    Seq(Vec<f64>),
    /// Backend-tagged array handle.
    Array(Backend),
    /// Opaque callable, e.g. a custom window generator.
    Callable,
    /// Legacy 1-D polynomial object (coefficients, highest order first).
    Poly1d(Vec<f64>),
}

impl ArgValue {
    /// True for the neutral placeholder.
    pub fn is_none(&self) -> bool {
        matches!(self, ArgValue::None)
    }

    /// True when the value itself is array-bearing (a tagged array handle
    /// or a host sequence).
    pub fn is_array_like(&self) -> bool {
        matches!(self, ArgValue::Array(_) | ArgValue::Seq(_))
    }

    /// Backend tag, for device array handles.
    pub fn backend(&self) -> Option<Backend> {
        match self {
            ArgValue::Array(backend) => Some(*backend),
            _ => None,
        }
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        ArgValue::Bool(v)
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        ArgValue::Int(v)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        ArgValue::Float(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::Str(v.to_string())
    }
}

impl From<Vec<f64>> for ArgValue {
    fn from(v: Vec<f64>) -> Self {
        ArgValue::Seq(v)
    }
}

impl From<Backend> for ArgValue {
    fn from(backend: Backend) -> Self {
        ArgValue::Array(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_like() {
        assert!(ArgValue::Array(Backend::Cuda).is_array_like());
        assert!(ArgValue::Seq(vec![1.0, 2.0]).is_array_like());
        assert!(!ArgValue::Str("hann".into()).is_array_like());
        assert!(!ArgValue::None.is_array_like());
    }

    #[test]
    fn test_backend_tag() {
        assert_eq!(ArgValue::Array(Backend::Wgpu).backend(), Some(Backend::Wgpu));
        assert_eq!(ArgValue::Seq(vec![0.0]).backend(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(ArgValue::from(4i64), ArgValue::Int(4));
        assert_eq!(ArgValue::from(0.2), ArgValue::Float(0.2));
        assert_eq!(ArgValue::from("hann"), ArgValue::Str("hann".to_string()));
        assert_eq!(
            ArgValue::from(Backend::Cuda),
            ArgValue::Array(Backend::Cuda)
        );
    }
}
