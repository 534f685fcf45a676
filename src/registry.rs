use alloc::{
    collections::BTreeMap,
    string::{String, ToString as _},
};
use core::any::TypeId;

use crate::{
    any::TypeInfo,
    descriptor::{MethodDescriptor, TypeDescriptor},
    errors::InstantiateErrorKind,
    instantiator::{boxed_instantiator, boxed_method, Handler, MethodHandler},
};

/// Catalog of constructible types, looked up by name during resolution.
///
/// Typed registrations use the short type name (see [`TypeInfo::short_name`]),
/// so two types with the same name from different modules replace each other.
#[derive(Default, Clone)]
pub struct Registry {
    types: BTreeMap<String, TypeDescriptor>,
    type_names: BTreeMap<TypeId, String>,
    pending_methods: BTreeMap<String, BTreeMap<String, MethodDescriptor>>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            types: BTreeMap::new(),
            type_names: BTreeMap::new(),
            pending_methods: BTreeMap::new(),
        }
    }

    /// Registers the type returned by `instantiator` with its arguments as the constructor parameters.
    /// An instantiator without arguments registers a type without a constructor.
    #[inline]
    #[must_use]
    pub fn provide<Inst, Args>(mut self, instantiator: Inst) -> Self
    where
        Inst: Handler<Args, Error = InstantiateErrorKind>,
        Args: 'static,
    {
        let params = Some(Inst::params()).filter(|params| !params.is_empty());

        self.add_type(
            TypeDescriptor::from_parts(
                TypeInfo::of::<Inst::Output>().short_name().to_string(),
                params,
                boxed_instantiator(instantiator),
            )
            .bind::<Inst::Output>(),
        );
        self
    }

    /// Registers a type without a constructor, built with [`Default::default`]
    #[inline]
    #[must_use]
    pub fn provide_default<T: Default + Send + Sync + 'static>(self) -> Self {
        self.provide(|| Ok(T::default()))
    }

    /// Registers a method of `T`, that can be called with [`crate::Container::call_method`]
    #[inline]
    #[must_use]
    pub fn method<T, H, Args>(mut self, name: impl Into<String>, method: H) -> Self
    where
        T: Send + Sync + 'static,
        H: MethodHandler<T, Args, Error = InstantiateErrorKind>,
        Args: 'static,
    {
        let name = name.into();
        self.add_method(
            TypeInfo::of::<T>().short_name(),
            MethodDescriptor {
                name,
                params: H::params(),
                method: boxed_method(method),
            },
        );
        self
    }

    /// Registers a descriptor built by hand, e.g. with string type hints
    #[inline]
    #[must_use]
    pub fn register(mut self, descriptor: TypeDescriptor) -> Self {
        self.add_type(descriptor);
        self
    }
}

impl Registry {
    pub(crate) fn add_type(&mut self, mut descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        if let Some(methods) = self.pending_methods.remove(&descriptor.name) {
            for (name, method) in methods {
                descriptor.methods.entry(name).or_insert(method);
            }
        }
        if let Some(type_info) = descriptor.type_info {
            self.type_names.insert(type_info.id, descriptor.name.clone());
        }
        if let Some(type_id) = descriptor.shared_type_id {
            self.type_names.insert(type_id, descriptor.name.clone());
        }
        self.types.insert(descriptor.name.clone(), descriptor)
    }

    pub(crate) fn add_method(&mut self, owner: &str, method: MethodDescriptor) {
        match self.types.get_mut(owner) {
            Some(descriptor) => {
                descriptor.methods.insert(method.name.clone(), method);
            }
            None => {
                self.pending_methods
                    .entry(owner.to_string())
                    .or_default()
                    .insert(method.name.clone(), method);
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Name the Rust type was registered under, if it was registered with its type
    #[inline]
    #[must_use]
    pub fn name_of(&self, type_id: &TypeId) -> Option<&str> {
        self.type_names.get(type_id).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn get_method(&self, type_name: &str, method: &str) -> Option<&MethodDescriptor> {
        self.types.get(type_name).and_then(|descriptor| descriptor.get_method(method))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
