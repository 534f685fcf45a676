use alloc::{format, sync::Arc};

use crate::{any::Value, argument::incorrect_argument, descriptor::Param, errors::InstantiateErrorKind};

/// Argument of a closure registered in [`crate::Registry`] or wrapped in [`crate::Callable`].
/// It describes the parameter it stands for and extracts its resolved value.
pub trait FromArgument: Sized {
    #[must_use]
    fn param(index: usize) -> Param;

    /// # Errors
    /// - Returns [`InstantiateErrorKind::IncorrectArgument`] if the value has an unexpected type
    fn from_argument(value: &Value, index: usize) -> Result<Self, InstantiateErrorKind>;
}

/// Dependency parameter. The container builds `Dep` by its short type name.
pub struct Inject<Dep>(pub Arc<Dep>);

impl<Dep: Send + Sync + 'static> FromArgument for Inject<Dep> {
    fn param(index: usize) -> Param {
        Param::dependency::<Dep>(format!("arg{index}"))
    }

    fn from_argument(value: &Value, index: usize) -> Result<Self, InstantiateErrorKind> {
        value.downcast().map(Self).ok_or_else(|| incorrect_argument::<Dep>(value, index))
    }
}

/// Primitive parameter, taken from caller-supplied arguments
pub struct Primitive<T>(pub T);

impl<T: Clone + 'static> FromArgument for Primitive<T> {
    fn param(index: usize) -> Param {
        Param::primitive(format!("arg{index}"))
    }

    fn from_argument(value: &Value, index: usize) -> Result<Self, InstantiateErrorKind> {
        value.downcast_ref().cloned().map(Self).ok_or_else(|| incorrect_argument::<T>(value, index))
    }
}

/// Primitive parameter with [`Default::default`] used when no argument is left
pub struct OrDefault<T>(pub T);

impl<T: Default + Clone + Send + Sync + 'static> FromArgument for OrDefault<T> {
    fn param(index: usize) -> Param {
        Param::primitive(format!("arg{index}")).with_default(Value::new(T::default()))
    }

    fn from_argument(value: &Value, index: usize) -> Result<Self, InstantiateErrorKind> {
        value.downcast_ref().cloned().map(Self).ok_or_else(|| incorrect_argument::<T>(value, index))
    }
}

/// Untyped primitive parameter
impl FromArgument for Value {
    fn param(index: usize) -> Param {
        Param::primitive(format!("arg{index}"))
    }

    fn from_argument(value: &Value, _index: usize) -> Result<Self, InstantiateErrorKind> {
        Ok(value.clone())
    }
}
