//! Array backend identifiers.
//!
//! The compute layer ships the same algorithms for three runtimes; dispatch
//! picks one per call based on where the input arrays live. [`Backend`] is
//! the identifier the rest of this crate resolves to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The array library an input array originated from.
///
/// `Cpu` is the host runtime and doubles as the default namespace: calls
/// whose inputs carry no device arrays at all resolve to it. All three
/// variants are always recognized regardless of which runtimes the compute
/// layer was built with, since a caller can hand us a descriptor for an
/// array produced elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Host CPU runtime (the default namespace).
    #[default]
    Cpu,
    /// NVIDIA CUDA runtime.
    Cuda,
    /// Cross-platform WebGPU runtime.
    Wgpu,
}

impl Backend {
    /// Stable lowercase name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Cpu => "cpu",
            Backend::Cuda => "cuda",
            Backend::Wgpu => "wgpu",
        }
    }

    /// True for the host runtime.
    pub const fn is_host(self) -> bool {
        matches!(self, Backend::Cpu)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
