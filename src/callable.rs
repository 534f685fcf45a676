use alloc::{borrow::Cow, vec::Vec};

use crate::{
    any::Value,
    argument::Arguments,
    descriptor::Param,
    errors::InstantiateErrorKind,
    instantiator::{boxed_instantiator, boxed_instantiator_fn, BoxedCloneInstantiator, Handler},
};

/// Free function or closure that can be invoked by [`crate::Container::call`].
///
/// # Examples
/// ```rust
/// use autowire::{args, Callable, Container, Inject, Primitive, Registry};
///
/// #[derive(Default)]
/// struct Mailer;
///
/// let container = Container::new(Registry::new().provide_default::<Mailer>());
/// let send = Callable::from_fn(|Inject(_mailer): Inject<Mailer>, Primitive(to): Primitive<String>| Ok(to.len()));
///
/// let sent = container.call_fn(&send, args![String::from("admin")]).unwrap();
/// assert_eq!(sent.downcast_ref::<usize>(), Some(&5));
/// ```
#[derive(Clone)]
pub struct Callable {
    pub(crate) name: Cow<'static, str>,
    pub(crate) params: Vec<Param>,
    pub(crate) invoker: BoxedCloneInstantiator,
}

impl Callable {
    /// Creates a callable from a closure, taking its parameters from the argument types
    #[must_use]
    pub fn from_fn<H, Args>(handler: H) -> Self
    where
        H: Handler<Args, Error = InstantiateErrorKind>,
        Args: 'static,
    {
        Self {
            name: Cow::Borrowed("closure"),
            params: H::params(),
            invoker: boxed_instantiator(handler),
        }
    }

    /// Creates a callable from explicit parameters and a function receiving the resolved arguments
    #[must_use]
    pub fn new<F>(params: Vec<Param>, invoker: F) -> Self
    where
        F: FnMut(Arguments) -> Result<Value, InstantiateErrorKind> + Clone + Send + Sync + 'static,
    {
        Self {
            name: Cow::Borrowed("closure"),
            params,
            invoker: boxed_instantiator_fn(invoker),
        }
    }

    /// Sets the name used in logs and errors
    #[inline]
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::Callable;
    use crate::{
        any::Value,
        descriptor::Param,
        inject::{Inject, Primitive},
    };

    use alloc::{string::String, vec};

    struct Engine;

    #[test]
    fn test_from_fn() {
        let callable = Callable::from_fn(|Inject(_): Inject<Engine>, Primitive(name): Primitive<String>| Ok(name)).named("start");

        assert_eq!(callable.name(), "start");
        assert_eq!(callable.params().len(), 2);
        assert_eq!(callable.params()[0].type_hint(), Some("Engine"));
        assert!(callable.params()[1].type_hint().is_none());
    }

    #[test]
    fn test_new() {
        let callable = Callable::new(vec![Param::typed("engine", "Engine"), Param::primitive("name")], |arguments| {
            Ok(Value::new(arguments.len()))
        });

        assert_eq!(callable.name(), "closure");
        assert_eq!(callable.params().len(), 2);
    }
}
