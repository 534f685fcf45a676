use alloc::{collections::BTreeMap, string::String, sync::Arc, vec::Vec};
use core::any::TypeId;

use crate::{
    any::{TypeInfo, Value},
    argument::Arguments,
    errors::InstantiateErrorKind,
    instantiator::{boxed_instantiator_fn, boxed_method_fn, BoxedCloneInstantiator, BoxedCloneMethod},
};

/// One formal parameter of a constructor, method or callable.
///
/// A parameter with a type hint is a dependency and is built by the container.
/// A parameter without one is a primitive and is taken from the caller's arguments or its default value.
#[derive(Clone)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Param {
    pub(crate) name: String,
    pub(crate) type_hint: Option<String>,
    pub(crate) default: Option<Value>,
}

impl Param {
    #[inline]
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: None,
            default: None,
        }
    }

    /// Parameter with a declared type.
    /// The hint is looked up in [`crate::Registry`] by name, so hints like `int` or `A|B` can't be resolved.
    #[inline]
    #[must_use]
    pub fn typed(name: impl Into<String>, type_hint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: Some(type_hint.into()),
            default: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn dependency<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::typed(name, TypeInfo::of::<T>().short_name())
    }

    #[inline]
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

#[derive(Clone)]
pub struct MethodDescriptor {
    pub(crate) name: String,
    pub(crate) params: Vec<Param>,
    pub(crate) method: BoxedCloneMethod,
}

impl MethodDescriptor {
    /// Creates a method from its parameters and a function receiving the instance and the resolved arguments
    #[must_use]
    pub fn new<F>(name: impl Into<String>, params: Vec<Param>, method: F) -> Self
    where
        F: FnMut((Value, Arguments)) -> Result<Value, InstantiateErrorKind> + Clone + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params,
            method: boxed_method_fn(method),
        }
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

/// Introspection data of a constructible type
#[derive(Clone)]
pub struct TypeDescriptor {
    pub(crate) name: String,
    pub(crate) type_info: Option<TypeInfo>,
    /// `TypeId` of `Arc<T>` for the bound `T`
    pub(crate) shared_type_id: Option<TypeId>,
    pub(crate) params: Option<Vec<Param>>,
    pub(crate) instantiator: BoxedCloneInstantiator,
    pub(crate) methods: BTreeMap<String, MethodDescriptor>,
}

impl TypeDescriptor {
    /// Type without a constructor. It's instantiated with empty arguments.
    #[must_use]
    pub fn new<F>(name: impl Into<String>, instantiator: F) -> Self
    where
        F: FnMut(Arguments) -> Result<Value, InstantiateErrorKind> + Clone + Send + Sync + 'static,
    {
        Self::from_parts(name.into(), None, boxed_instantiator_fn(instantiator))
    }

    /// Type with a constructor taking `params`
    #[must_use]
    pub fn with_constructor<F>(name: impl Into<String>, params: Vec<Param>, instantiator: F) -> Self
    where
        F: FnMut(Arguments) -> Result<Value, InstantiateErrorKind> + Clone + Send + Sync + 'static,
    {
        Self::from_parts(name.into(), Some(params), boxed_instantiator_fn(instantiator))
    }

    #[inline]
    #[must_use]
    pub(crate) fn from_parts(
        name: String,
        params: Option<Vec<Param>>,
        instantiator: BoxedCloneInstantiator,
    ) -> Self {
        Self {
            name,
            type_info: None,
            shared_type_id: None,
            params,
            instantiator,
            methods: BTreeMap::new(),
        }
    }

    /// Binds the descriptor to the Rust type it builds,
    /// so methods can be found for instances passed to [`crate::Container::call_method`],
    /// including instances shared as `Arc<T>`.
    #[inline]
    #[must_use]
    pub fn bind<T: ?Sized + 'static>(mut self) -> Self {
        self.type_info = Some(TypeInfo::of::<T>());
        self.shared_type_id = Some(TypeId::of::<Arc<T>>());
        self
    }

    #[inline]
    #[must_use]
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.insert(method.name.clone(), method);
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> Option<TypeInfo> {
        self.type_info
    }

    /// Constructor parameters or `None` if the type has no constructor
    #[inline]
    #[must_use]
    pub fn params(&self) -> Option<&[Param]> {
        self.params.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn get_method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.get(name)
    }
}
