//! Per-backend capability lists.
//!
//! Dispatch never guesses backend compatibility: resolution consults this
//! table and falls back to the host runtime for functions a device backend
//! cannot service. The built-in table carries the known CUDA gaps;
//! deployments override it from a TOML document when a backend gains or
//! loses an implementation.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use crate::backend::Backend;

/// Function names each backend cannot service.
///
/// Immutable once handed to a resolver. An empty matrix means every
/// backend services everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CapabilityMatrix {
    denied: FxHashMap<Backend, FxHashSet<String>>,
}

impl CapabilityMatrix {
    /// The known device-side gaps: the Parks-McClellan design routine has
    /// no CUDA implementation, and the two steady-state initial-condition
    /// helpers have a mismatched API there.
    pub fn builtin() -> Self {
        let mut matrix = Self::default();
        for function in ["remez", "lfilter_zi", "sosfilt_zi"] {
            matrix.deny(Backend::Cuda, function);
        }
        matrix
    }

    /// Parse an override table from a TOML document.
    ///
    /// ```
    /// use solvr_dispatch::{Backend, CapabilityMatrix};
    ///
    /// let matrix = CapabilityMatrix::from_toml_str(
    ///     "[denied]\ncuda = [\"remez\"]\nwgpu = [\"lombscargle\"]\n",
    /// )
    /// .unwrap();
    /// assert!(!matrix.supports(Backend::Wgpu, "lombscargle"));
    /// assert!(matrix.supports(Backend::Cpu, "lombscargle"));
    /// ```
    pub fn from_toml_str(doc: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(doc)
    }

    /// Mark `function` as unavailable on `backend`.
    pub fn deny(&mut self, backend: Backend, function: impl Into<String>) {
        self.denied.entry(backend).or_default().insert(function.into());
    }

    /// Whether `backend` can service `function`.
    pub fn supports(&self, backend: Backend, function: &str) -> bool {
        self.denied
            .get(&backend)
            .is_none_or(|set| !set.contains(function))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_denies_cuda_gaps() {
        let matrix = CapabilityMatrix::builtin();
        assert!(!matrix.supports(Backend::Cuda, "remez"));
        assert!(!matrix.supports(Backend::Cuda, "lfilter_zi"));
        assert!(!matrix.supports(Backend::Cuda, "sosfilt_zi"));
        // same functions stay available on the host
        assert!(matrix.supports(Backend::Cpu, "remez"));
        assert!(matrix.supports(Backend::Cuda, "welch"));
    }

    #[test]
    fn test_empty_matrix_allows_everything() {
        let matrix = CapabilityMatrix::default();
        assert!(matrix.supports(Backend::Cuda, "remez"));
        assert!(matrix.supports(Backend::Wgpu, "anything"));
    }

    #[test]
    fn test_from_toml() {
        let matrix = CapabilityMatrix::from_toml_str(
            r#"
            [denied]
            cuda = ["remez", "sosfilt_zi"]
            wgpu = ["medfilt2d"]
            "#,
        )
        .unwrap();
        assert!(!matrix.supports(Backend::Cuda, "remez"));
        assert!(!matrix.supports(Backend::Wgpu, "medfilt2d"));
        assert!(matrix.supports(Backend::Cuda, "medfilt2d"));
    }

    #[test]
    fn test_empty_toml_document() {
        let matrix = CapabilityMatrix::from_toml_str("").unwrap();
        assert!(matrix.supports(Backend::Cuda, "remez"));
    }
}
