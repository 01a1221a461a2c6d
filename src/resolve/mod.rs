//! Backend resolution from candidate argument sets.
//!
//! This is the seam between the signature registry and the array-library
//! abstraction: probes collect candidate values, a [`NamespaceResolver`]
//! decides which backend they belong to. Only the default host-oriented
//! policy ships here; the compute layer can plug in its own.

mod host;

pub use host::HostResolver;

use crate::arg::ArgValue;
use crate::backend::Backend;
use crate::error::Result;

/// Resolves which array backend a set of candidate values belongs to.
///
/// Implementations must tolerate any mix of array-like and non-array-like
/// values: probes forward placeholders, absent optionals, and plain scalars
/// alongside genuine array descriptors, and none of those may fail
/// resolution on their own. The error taxonomy (ambiguous backend, mixed
/// backends) is owned by the implementation.
pub trait NamespaceResolver {
    /// Determine the backend for a candidate set.
    fn resolve(&self, candidates: &[ArgValue]) -> Result<Backend>;

    /// Whether `backend` can service `function`.
    ///
    /// Consulted by [`Probe::resolve`](crate::registry::Probe::resolve)
    /// before committing to a device backend. The default claims support
    /// for everything.
    fn supports(&self, _backend: Backend, _function: &str) -> bool {
        true
    }
}
