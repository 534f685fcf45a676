use alloc::{
    collections::VecDeque,
    sync::Arc,
    vec::{self, Vec},
};
use core::any::type_name;

use crate::{any::Value, errors::InstantiateErrorKind};

/// Caller-supplied primitive values, consumed front to back during one resolution pass
#[derive(Default, Clone)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct ArgumentBuffer(VecDeque<Value>);

impl ArgumentBuffer {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(VecDeque::new())
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.0.push_back(value);
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<Value> {
        self.0.pop_front()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Value> for ArgumentBuffer {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Value>> for ArgumentBuffer {
    fn from(values: Vec<Value>) -> Self {
        Self(values.into())
    }
}

/// Resolved arguments, one per declared parameter and in the same order
#[derive(Default, Clone)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Arguments(Vec<Value>);

impl Arguments {
    #[inline]
    #[must_use]
    pub(crate) const fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// # Errors
    /// - Returns [`InstantiateErrorKind::MissingArgument`] if there is no argument at `index`
    #[inline]
    pub fn value(&self, index: usize) -> Result<&Value, InstantiateErrorKind> {
        self.0.get(index).ok_or(InstantiateErrorKind::MissingArgument { index })
    }

    /// Gets a shared instance at `index`, usually a resolved dependency.
    ///
    /// # Errors
    /// - Returns [`InstantiateErrorKind::MissingArgument`] if there is no argument at `index`
    /// - Returns [`InstantiateErrorKind::IncorrectArgument`] if the argument has another type
    pub fn dependency<T: Send + Sync + 'static>(&self, index: usize) -> Result<Arc<T>, InstantiateErrorKind> {
        let value = self.value(index)?;
        value.downcast().ok_or_else(|| incorrect_argument::<T>(value, index))
    }

    /// Gets a copy of a primitive at `index`.
    ///
    /// # Errors
    /// - Returns [`InstantiateErrorKind::MissingArgument`] if there is no argument at `index`
    /// - Returns [`InstantiateErrorKind::IncorrectArgument`] if the argument has another type
    pub fn primitive<T: Clone + 'static>(&self, index: usize) -> Result<T, InstantiateErrorKind> {
        let value = self.value(index)?;
        value.downcast_ref().cloned().ok_or_else(|| incorrect_argument::<T>(value, index))
    }
}

impl IntoIterator for Arguments {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[inline]
#[must_use]
pub(crate) fn incorrect_argument<T: ?Sized>(value: &Value, index: usize) -> InstantiateErrorKind {
    InstantiateErrorKind::IncorrectArgument {
        index,
        expected: type_name::<T>(),
        actual: value.type_info().name,
    }
}

#[cfg(test)]
mod tests {
    use super::{ArgumentBuffer, Arguments};
    use crate::{any::Value, errors::InstantiateErrorKind};

    use alloc::{string::String, sync::Arc, vec};

    struct Engine;

    #[test]
    fn test_buffer_fifo() {
        let mut buffer: ArgumentBuffer = [Value::new(1u8), Value::new(2u8)].into_iter().collect();
        buffer.push(Value::new(3u8));

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.pop_front().unwrap().downcast_ref::<u8>(), Some(&1));
        assert_eq!(buffer.pop_front().unwrap().downcast_ref::<u8>(), Some(&2));
        assert_eq!(buffer.pop_front().unwrap().downcast_ref::<u8>(), Some(&3));
        assert!(buffer.pop_front().is_none());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_arguments_access() {
        let engine = Arc::new(Engine);
        let arguments = Arguments::new(vec![Value::from_arc(engine.clone()), Value::new(String::from("red"))]);

        assert!(Arc::ptr_eq(&arguments.dependency::<Engine>(0).unwrap(), &engine));
        assert_eq!(arguments.primitive::<String>(1).unwrap(), "red");
        assert!(matches!(
            arguments.primitive::<u8>(1),
            Err(InstantiateErrorKind::IncorrectArgument { index: 1, .. })
        ));
        assert!(matches!(
            arguments.dependency::<Engine>(2),
            Err(InstantiateErrorKind::MissingArgument { index: 2 })
        ));
    }
}
