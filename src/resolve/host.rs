//! Default resolution policy.

use super::NamespaceResolver;
use crate::arg::ArgValue;
use crate::backend::Backend;
use crate::capability::CapabilityMatrix;
use crate::error::{DispatchError, Result};

/// Default resolver: device arrays decide, everything else is host data.
///
/// Backend votes are collected from tagged array handles; host sequences
/// and raw tuples count as host data; scalars, strings, callables and
/// placeholders are skipped entirely. A candidate set with no votes at all
/// resolves to the host backend. Two different backends in one candidate
/// set is a [`DispatchError::MixedBackends`] error: inputs must be moved
/// to one library before the call can be dispatched.
#[derive(Debug, Clone)]
pub struct HostResolver {
    capabilities: CapabilityMatrix,
}

impl HostResolver {
    /// Resolver with the built-in capability table.
    pub fn new() -> Self {
        Self {
            capabilities: CapabilityMatrix::builtin(),
        }
    }

    /// Resolver with an explicit capability table.
    pub fn with_capabilities(capabilities: CapabilityMatrix) -> Self {
        Self { capabilities }
    }
}

impl Default for HostResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceResolver for HostResolver {
    fn resolve(&self, candidates: &[ArgValue]) -> Result<Backend> {
        let mut resolved: Option<Backend> = None;
        for value in candidates {
            let backend = match value {
                ArgValue::Array(backend) => *backend,
                // Host containers are implicitly host arrays.
                ArgValue::Seq(_) | ArgValue::Tuple(_) => Backend::Cpu,
                _ => continue,
            };
            match resolved {
                None => resolved = Some(backend),
                Some(prev) if prev == backend => {}
                Some(prev) => {
                    return Err(DispatchError::MixedBackends {
                        lhs: prev,
                        rhs: backend,
                    });
                }
            }
        }
        Ok(resolved.unwrap_or_default())
    }

    fn supports(&self, backend: Backend, function: &str) -> bool {
        self.capabilities.supports(backend, function)
    }
}
