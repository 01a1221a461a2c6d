//! Static registry of dispatch-signature probes.
//!
//! One probe per public signal API function. A probe knows the function's
//! exact parameter list and which of those parameters can carry arrays; it
//! binds a call, filters the bound arguments through the classifiers and
//! hands the survivors to a [`NamespaceResolver`].
//!
//! The registry is built once on first use and is read-only afterwards, so
//! any number of lookups and probe invocations may run concurrently.

mod bind;
mod signal;

pub use bind::{BoundArgs, CallArgs};

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::arg::ArgValue;
use crate::backend::Backend;
use crate::error::{DispatchError, Result};
use crate::resolve::NamespaceResolver;

// ============================================================================
// Parameter model
// ============================================================================

/// How a parameter may be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Positionally or by name.
    PositionalOrKeyword,
    /// By name only (declared after the bare `*` marker).
    KeywordOnly,
    /// Catch-all for extra positional arguments.
    VarArgs,
    /// Catch-all for extra named arguments.
    VarKwargs,
}

/// Default value of an optional parameter, const-constructible so the
/// signature tables can live in statics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex { re: f64, im: f64 },
    Str(&'static str),
    Tuple(&'static [DefaultValue]),
}

impl DefaultValue {
    /// Materialize as a call-argument descriptor.
    pub fn materialize(&self) -> ArgValue {
        match self {
            DefaultValue::None => ArgValue::None,
            DefaultValue::Bool(v) => ArgValue::Bool(*v),
            DefaultValue::Int(v) => ArgValue::Int(*v),
            DefaultValue::Float(v) => ArgValue::Float(*v),
            DefaultValue::Complex { re, im } => ArgValue::Complex { re: *re, im: *im },
            DefaultValue::Str(v) => ArgValue::Str((*v).to_string()),
            DefaultValue::Tuple(elements) => {
                ArgValue::Tuple(elements.iter().map(DefaultValue::materialize).collect())
            }
        }
    }
}

/// One parameter of a probed function's signature.
///
/// The `Param` table of a probe must stay structurally identical to the
/// wrapped function's parameter list: names, order, defaults and
/// keyword-only markers. A drifted table mis-binds calls silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub default: Option<DefaultValue>,
}

impl Param {
    /// Required positional-or-keyword parameter.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::PositionalOrKeyword,
            default: None,
        }
    }

    /// Optional positional-or-keyword parameter.
    pub const fn optional(name: &'static str, default: DefaultValue) -> Self {
        Self {
            name,
            kind: ParamKind::PositionalOrKeyword,
            default: Some(default),
        }
    }

    /// Keyword-only parameter.
    pub const fn keyword(name: &'static str, default: DefaultValue) -> Self {
        Self {
            name,
            kind: ParamKind::KeywordOnly,
            default: Some(default),
        }
    }

    /// Catch-all for extra positional arguments.
    pub const fn varargs() -> Self {
        Self {
            name: "args",
            kind: ParamKind::VarArgs,
            default: None,
        }
    }

    /// Catch-all for extra named arguments.
    pub const fn varkwargs() -> Self {
        Self {
            name: "kwds",
            kind: ParamKind::VarKwargs,
            default: None,
        }
    }

    /// True for the two variadic catch-alls.
    pub const fn is_variadic(&self) -> bool {
        matches!(self.kind, ParamKind::VarArgs | ParamKind::VarKwargs)
    }
}

// ============================================================================
// Probe specification
// ============================================================================

/// Candidate values collected by one probe invocation.
pub type Candidates = SmallVec<[ArgValue; 8]>;

/// How a probe derives its candidate set.
#[derive(Clone, Copy)]
pub enum ProbeKind {
    /// The function takes no array-like input at all; resolution is
    /// statically the host namespace, independent of the arguments.
    HostOnly,
    /// Gather candidates from the bound arguments.
    Select(fn(&BoundArgs) -> Candidates),
}

impl fmt::Debug for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::HostOnly => f.write_str("HostOnly"),
            ProbeKind::Select(_) => f.write_str("Select(..)"),
        }
    }
}

/// Registered dispatch signature of one public function.
#[derive(Debug)]
pub struct ProbeSpec {
    /// Canonical function name (aliases share the spec under other keys).
    pub name: &'static str,
    /// Exact mirror of the wrapped function's parameter list.
    pub params: &'static [Param],
    pub kind: ProbeKind,
}

// ============================================================================
// Probe handle and registry lookup
// ============================================================================

/// Handle to one registered probe.
///
/// Callable with the same argument shape as the corresponding public API
/// function, via [`CallArgs`]; returns the resolved backend.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    spec: &'static ProbeSpec,
}

impl Probe {
    /// Canonical name of the probed function.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// The probed function's parameter table.
    pub fn params(&self) -> &'static [Param] {
        self.spec.params
    }

    /// True when the function takes no array-like input.
    pub fn is_host_only(&self) -> bool {
        matches!(self.spec.kind, ProbeKind::HostOnly)
    }

    /// Whether this probe and `other` share one registered spec (alias
    /// groups do).
    pub fn shares_spec(&self, other: &Probe) -> bool {
        std::ptr::eq(self.spec, other.spec)
    }

    /// Candidate values that should count towards backend resolution for
    /// one call, post-classification.
    pub fn candidates(&self, call: &CallArgs) -> Result<Candidates> {
        match self.spec.kind {
            ProbeKind::HostOnly => Ok(Candidates::new()),
            ProbeKind::Select(select) => {
                let bound = bind::bind(self.spec, call)?;
                Ok(select(&bound))
            }
        }
    }

    /// Resolve the backend for one call.
    ///
    /// Host-only probes report the default namespace without touching the
    /// arguments. Otherwise the call is bound, classified, and the
    /// surviving candidates are handed to `resolver`; if the resolved
    /// backend cannot service this function per the resolver's capability
    /// list, resolution falls back to the host.
    pub fn resolve(&self, call: &CallArgs, resolver: &dyn NamespaceResolver) -> Result<Backend> {
        if matches!(self.spec.kind, ProbeKind::HostOnly) {
            return Ok(Backend::default());
        }
        let candidates = self.candidates(call)?;
        log::trace!(
            "{}: {} resolution candidate(s)",
            self.spec.name,
            candidates.len()
        );
        let backend = resolver.resolve(&candidates)?;
        if !resolver.supports(backend, self.spec.name) {
            log::debug!(
                "{}: no {} implementation, falling back to {}",
                self.spec.name,
                backend,
                Backend::default()
            );
            return Ok(Backend::default());
        }
        Ok(backend)
    }
}

/// Look up the probe for a public function name.
pub fn probe_for(name: &str) -> Result<Probe> {
    REGISTRY
        .get(name)
        .map(|spec| Probe { spec })
        .ok_or_else(|| DispatchError::UnknownFunction {
            name: name.to_string(),
        })
}

/// Whether `name` is a registered public function.
pub fn is_registered(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// Every registered function name, aliases included.
pub fn registered_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

static REGISTRY: LazyLock<FxHashMap<&'static str, &'static ProbeSpec>> = LazyLock::new(|| {
    let mut map = FxHashMap::with_capacity_and_hasher(signal::ENTRIES.len(), Default::default());
    for (name, spec) in signal::ENTRIES {
        let prev = map.insert(*name, *spec);
        debug_assert!(prev.is_none(), "duplicate probe registration: {name}");
    }
    map
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        assert!(probe_for("convolve").is_ok());
        assert!(is_registered("welch"));
        assert!(!is_registered("no_such_function"));
        assert!(matches!(
            probe_for("no_such_function"),
            Err(DispatchError::UnknownFunction { name }) if name == "no_such_function"
        ));
    }

    #[test]
    fn test_aliases_resolve_to_canonical_name() {
        let butter = probe_for("butter").unwrap();
        assert_eq!(butter.name(), "bessel");
    }

    #[test]
    fn test_default_value_materialization() {
        assert_eq!(DefaultValue::Float(1.0).materialize(), ArgValue::Float(1.0));
        assert_eq!(
            DefaultValue::Str("hann").materialize(),
            ArgValue::Str("hann".to_string())
        );
        assert_eq!(
            DefaultValue::Tuple(&[DefaultValue::Str("tukey"), DefaultValue::Float(0.25)])
                .materialize(),
            ArgValue::Tuple(vec![
                ArgValue::Str("tukey".to_string()),
                ArgValue::Float(0.25),
            ])
        );
    }
}
