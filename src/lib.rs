//! solvr-dispatch - Array-Backend Dispatch Signatures for the Signal API
//!
//! solvr-dispatch is the signature registry behind the signal API's
//! array-backend abstraction. For each public function it declares which
//! arguments are array-bearing, so the dispatch layer can inspect a call,
//! work out which backend (CPU, CUDA, WebGPU) the input arrays live on, and
//! route the call to the matching implementation.
//!
//! There is no numerical code here: the compute kernels, the tensor type
//! and the actual call forwarding all live in the compute layer. This crate
//! answers exactly one question per call: "which backend?".
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    dispatch layer                        │
//! │        (holds the call, routes to a backend impl)       │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ probe_for(name).resolve(args)
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                    solvr-dispatch                        │
//! │   signature registry → classifiers → candidate values   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ NamespaceResolver::resolve
//! ┌──────────────────────────▼──────────────────────────────┐
//! │              array-library abstraction                   │
//! │        (which library does this array belong to?)       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Current Modules
//!
//! - [`registry`] - Per-function signature probes and the name lookup table
//! - [`classify`] - Predicates deciding whether one argument carries arrays
//! - [`resolve`] - The resolver seam and the default host-oriented policy
//! - [`capability`] - Per-backend lists of unsupported functions
//! - [`arg`] - Closed argument descriptors the probes operate on
//! - [`backend`] - Backend identifiers
//!
//! # Design Rules
//!
//! - Probe parameter tables mirror the public signatures exactly, so both
//!   call conventions (positional and named) bind the way the wrapped
//!   function would.
//! - Classifiers never fail; an unrecognized argument kind is forwarded to
//!   the resolver rather than silently dropped.
//! - Alias groups (several public names, one argument shape) share a single
//!   registered spec.
//! - Everything is immutable after the registry is built; calls may resolve
//!   concurrently without synchronization.
//!
//! # Example
//!
//! ```
//! use solvr_dispatch::{probe_for, Backend, CallArgs, HostResolver};
//!
//! // butter(4, Wn) with the critical frequencies on CUDA
//! let call = CallArgs::new().arg(4i64).named("Wn", Backend::Cuda);
//! let probe = probe_for("butter").unwrap();
//! let backend = probe.resolve(&call, &HostResolver::new()).unwrap();
//! assert_eq!(backend, Backend::Cuda);
//!
//! // scalar frequencies carry no array content, so the host runtime wins
//! let call = CallArgs::new().arg(4i64).arg(0.2);
//! assert_eq!(
//!     probe.resolve(&call, &HostResolver::new()).unwrap(),
//!     Backend::Cpu
//! );
//! ```

pub mod arg;
pub mod backend;
pub mod capability;
pub mod classify;
pub mod error;
pub mod registry;
pub mod resolve;

pub use arg::ArgValue;
pub use backend::Backend;
pub use capability::CapabilityMatrix;
pub use error::{DispatchError, Result};
pub use registry::{probe_for, CallArgs, Probe};
pub use resolve::{HostResolver, NamespaceResolver};
