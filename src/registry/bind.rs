//! Call binding against a probe's parameter table.
//!
//! Public API calls arrive positionally, by name, or mixed, and must
//! land on the declared parameters exactly the way the
//! wrapped function would bind them, or the candidate selection downstream
//! would silently read the wrong argument.

use smallvec::{SmallVec, smallvec};

use super::{Param, ParamKind, ProbeSpec};
use crate::arg::ArgValue;
use crate::error::{DispatchError, Result};

/// Arguments of one public API call, in caller order.
///
/// Built with [`CallArgs::arg`] for positional values and
/// [`CallArgs::named`] for named ones.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    positional: Vec<ArgValue>,
    named: Vec<(String, ArgValue)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a named argument.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.named.push((name.into(), value.into()));
        self
    }
}

/// A call bound to a probe's parameter table.
///
/// Holds one value per declared parameter, in declaration order, with
/// defaults materialized for everything the caller omitted. Extra
/// positional arguments swallowed by a varargs catch-all are kept
/// separately; extra named arguments swallowed by a kwargs catch-all are
/// dropped; neither is ever an array candidate.
#[derive(Debug)]
pub struct BoundArgs {
    params: &'static [Param],
    values: SmallVec<[ArgValue; 8]>,
    varargs: Vec<ArgValue>,
}

static NONE: ArgValue = ArgValue::None;

impl BoundArgs {
    /// Value bound to the parameter `name`.
    ///
    /// Names the table does not declare yield the placeholder; selection
    /// code only queries declared names, so a miss is conservative rather
    /// than fatal.
    pub fn arg(&self, name: &str) -> &ArgValue {
        for (param, value) in self.params.iter().zip(&self.values) {
            if !param.is_variadic() && param.name == name {
                return value;
            }
        }
        &NONE
    }

    /// Extra positional arguments captured by the varargs catch-all.
    pub fn varargs(&self) -> &[ArgValue] {
        &self.varargs
    }
}

/// Bind `call` against `spec`'s parameter table.
pub(super) fn bind(spec: &'static ProbeSpec, call: &CallArgs) -> Result<BoundArgs> {
    let params = spec.params;
    let mut slots: SmallVec<[Option<ArgValue>; 8]> = smallvec![None; params.len()];
    let mut varargs = Vec::new();

    let has_varargs = params.iter().any(|p| p.kind == ParamKind::VarArgs);
    let has_varkwargs = params.iter().any(|p| p.kind == ParamKind::VarKwargs);

    let positional_slots: SmallVec<[usize; 8]> = params
        .iter()
        .enumerate()
        .filter(|(_, p)| p.kind == ParamKind::PositionalOrKeyword)
        .map(|(i, _)| i)
        .collect();

    for (i, value) in call.positional.iter().enumerate() {
        match positional_slots.get(i) {
            Some(&slot) => slots[slot] = Some(value.clone()),
            None if has_varargs => varargs.push(value.clone()),
            None => {
                return Err(DispatchError::TooManyArguments {
                    function: spec.name,
                    expected: positional_slots.len(),
                    given: call.positional.len(),
                });
            }
        }
    }

    for (name, value) in &call.named {
        let declared = params
            .iter()
            .position(|p| !p.is_variadic() && p.name == name.as_str());
        match declared {
            Some(slot) => {
                if slots[slot].is_some() {
                    return Err(DispatchError::DuplicateArgument {
                        function: spec.name,
                        parameter: params[slot].name,
                    });
                }
                slots[slot] = Some(value.clone());
            }
            // Extra keywords are only legal with a kwargs catch-all; they
            // are never array candidates either way.
            None if has_varkwargs => {}
            None => {
                return Err(DispatchError::UnexpectedKeyword {
                    function: spec.name,
                    keyword: name.clone(),
                });
            }
        }
    }

    let mut values = SmallVec::with_capacity(params.len());
    for (param, slot) in params.iter().zip(slots) {
        let value = match slot {
            Some(value) => value,
            None if param.is_variadic() => ArgValue::None,
            None => match &param.default {
                Some(default) => default.materialize(),
                None => {
                    return Err(DispatchError::MissingArgument {
                        function: spec.name,
                        parameter: param.name,
                    });
                }
            },
        };
        values.push(value);
    }

    Ok(BoundArgs {
        params,
        values,
        varargs,
    })
}
