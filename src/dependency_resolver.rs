use alloc::{
    string::{String, ToString as _},
    vec::Vec,
};
use tracing::{debug, debug_span, error};

use crate::{
    any::Value,
    argument::{ArgumentBuffer, Arguments},
    container::Container,
    descriptor::Param,
    errors::ResolveErrorKind,
};

/// Chain of types being constructed by one `make` call
#[derive(Default)]
pub(crate) struct ResolutionPath {
    stack: Vec<String>,
}

impl ResolutionPath {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub(crate) fn enter(&mut self, type_name: &str) -> Result<(), ResolveErrorKind> {
        if self.stack.iter().any(|name| name == type_name) {
            let mut path = self.stack.clone();
            path.push(type_name.to_string());

            let err = ResolveErrorKind::CyclicDependency { path };
            error!("{}", err);
            return Err(err);
        }

        self.stack.push(type_name.to_string());
        Ok(())
    }

    #[inline]
    pub(crate) fn leave(&mut self) {
        self.stack.pop();
    }
}

/// Supplies a value for one parameter.
///
/// A parameter with a type hint is built by the container with empty arguments,
/// so dependencies never take values from `buffer`.
/// A parameter without one takes the first value of `buffer`, then its default value.
pub(crate) fn resolve_parameter(
    container: &Container,
    param: &Param,
    buffer: &mut ArgumentBuffer,
    owner: &str,
    path: &mut ResolutionPath,
) -> Result<Value, ResolveErrorKind> {
    let span = debug_span!("resolve", parameter = param.name(), owner);
    let _guard = span.enter();

    if let Some(type_hint) = param.type_hint() {
        if !container.registry().contains(type_hint) {
            let err = ResolveErrorKind::UnresolvableType {
                parameter: param.name().to_string(),
                type_hint: type_hint.to_string(),
                owner: owner.to_string(),
            };
            error!("{}", err);
            return Err(err);
        }

        debug!(type_hint, "Dependency");
        return container.make_in_path(type_hint, ArgumentBuffer::new(), path);
    }

    if let Some(value) = buffer.pop_front() {
        debug!("Primitive taken from arguments");
        return Ok(value);
    }

    if let Some(value) = param.default_value() {
        debug!("Primitive taken from default value");
        return Ok(value.clone());
    }

    let err = ResolveErrorKind::UnresolvablePrimitive {
        parameter: param.name().to_string(),
        owner: owner.to_string(),
    };
    error!("{}", err);
    Err(err)
}

/// Resolves parameters in declared order, sharing one `buffer` between them.
/// The first error is returned as is.
pub(crate) fn resolve_parameters(
    container: &Container,
    params: &[Param],
    buffer: &mut ArgumentBuffer,
    owner: &str,
    path: &mut ResolutionPath,
) -> Result<Arguments, ResolveErrorKind> {
    let mut values = Vec::with_capacity(params.len());
    for param in params {
        values.push(resolve_parameter(container, param, buffer, owner, path)?);
    }

    debug!(count = values.len(), "Parameters resolved");

    Ok(Arguments::new(values))
}
