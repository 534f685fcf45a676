use alloc::{boxed::Box, sync::Arc};
use core::{
    any::{type_name, Any, TypeId},
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
};

#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Type name without its module path, e.g. `Vec<alloc::string::String>` for `alloc::vec::Vec<alloc::string::String>`.
    /// Types are registered in [`crate::Registry`] under this name.
    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let path_end = self.name.find('<').unwrap_or(self.name.len());
        match self.name[..path_end].rfind("::") {
            Some(index) => &self.name[index + 2..],
            None => self.name,
        }
    }
}

/// Type-erased shared value.
///
/// Instances built by the container, caller-supplied primitive arguments and results of invocations are all values.
/// A value holding `Arc<T>`, e.g. a dependency returned from a closure, is also seen as `T` by
/// [`Value::is`], [`Value::downcast_ref`] and [`Value::downcast`].
#[derive(Clone)]
pub struct Value {
    type_info: TypeInfo,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Value {
    /// Wraps the value. A [`Value`] passed here is returned as is instead of being nested.
    #[must_use]
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        let boxed: Box<dyn Any + Send + Sync> = Box::new(value);
        match boxed.downcast::<Value>() {
            Ok(value) => *value,
            Err(boxed) => Self {
                type_info: TypeInfo::of::<T>(),
                inner: Arc::from(boxed),
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn from_arc<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            inner: value,
        }
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.is::<T>() || self.inner.is::<Arc<T>>()
    }

    #[inline]
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner
            .downcast_ref()
            .or_else(|| self.inner.downcast_ref::<Arc<T>>().map(|shared| &**shared))
    }

    #[inline]
    #[must_use]
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        match self.inner.clone().downcast() {
            Ok(value) => Some(value),
            Err(inner) => inner.downcast_ref::<Arc<T>>().cloned(),
        }
    }

    /// Returns `true` if both values point to the same allocation
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.inner).cast::<()>() == Arc::as_ptr(&other.inner).cast::<()>()
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value").field("type", &self.type_info.name).finish_non_exhaustive()
    }
}
