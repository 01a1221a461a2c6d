//! Argument classifiers.
//!
//! Pure predicates deciding whether one argument should count towards
//! backend resolution. Each takes a raw descriptor and returns either the
//! value unchanged (a resolution candidate) or the neutral placeholder.
//!
//! None of them fail: unrecognized kinds fall into the pass-through branch
//! and reach the resolver, which tolerates non-array values. All four are
//! idempotent on their own placeholder output.

use crate::arg::ArgValue;

/// Handle `system` argument overloads.
///
/// Only the tuple form of a linear-system description carries dispatchable
/// coefficient arrays today; opaque system objects are not yet supported
/// for backend dispatch. Non-tuples collapse to the single-element
/// placeholder tuple `(None,)` so callers can splat the result either way.
pub fn skip_if_system(arg: &ArgValue) -> ArgValue {
    match arg {
        ArgValue::Tuple(_) => arg.clone(),
        _ => ArgValue::Tuple(vec![ArgValue::None]),
    }
}

/// Handle `window` being a name, a `(name, param)` spec, a generator
/// callback, or an explicit coefficient array.
///
/// Only the last form carries array content; the other three are recipes
/// for building one on whichever backend ends up selected.
pub fn skip_if_window_spec(arg: &ArgValue) -> ArgValue {
    match arg {
        ArgValue::Str(_) | ArgValue::Tuple(_) | ArgValue::Callable => ArgValue::None,
        _ => arg.clone(),
    }
}

/// Legacy 1-D polynomial objects are not backend-resolvable arrays.
pub fn skip_if_poly1d(arg: &ArgValue) -> ArgValue {
    match arg {
        ArgValue::Poly1d(_) => ArgValue::None,
        _ => arg.clone(),
    }
}

/// Plain integers are counts, not data.
///
/// Same contract as the n-d image layer's size parameters, which accept
/// either a scalar count or a per-axis array.
pub fn skip_if_int(arg: &ArgValue) -> ArgValue {
    match arg {
        ArgValue::Int(_) => ArgValue::None,
        _ => arg.clone(),
    }
}
