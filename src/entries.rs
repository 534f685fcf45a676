use alloc::{
    collections::BTreeMap,
    string::{String, ToString as _},
};

use crate::{any::Value, callable::Callable};

/// Value registered in a container under a string id
#[derive(Clone)]
pub enum Entry {
    /// Stored and returned as is
    Value(Value),
    /// Type name, built on the first lookup and cached
    Type(String),
    /// Callable invoked with autowired parameters on every lookup
    Deferred(Callable),
    /// Treated as [`Entry::Type`] if a type with this name is registered and as a string [`Entry::Value`] otherwise
    Text(String),
}

impl Entry {
    #[inline]
    #[must_use]
    pub fn value<T: Send + Sync + 'static>(value: T) -> Self {
        Self::Value(Value::new(value))
    }

    #[inline]
    #[must_use]
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self::Type(type_name.into())
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Callable> for Entry {
    fn from(callable: Callable) -> Self {
        Self::Deferred(callable)
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Entry as kept in a container, [`Entry::Text`] is resolved before it gets here
#[derive(Clone)]
pub(crate) enum StoredEntry {
    Value(Value),
    Type(String),
    Deferred(Callable),
}

impl From<StoredEntry> for Entry {
    fn from(entry: StoredEntry) -> Self {
        match entry {
            StoredEntry::Value(value) => Self::Value(value),
            StoredEntry::Type(type_name) => Self::Type(type_name),
            StoredEntry::Deferred(callable) => Self::Deferred(callable),
        }
    }
}

/// Entries of one container
#[derive(Default)]
pub(crate) struct Entries {
    map: BTreeMap<String, StoredEntry>,
}

impl Entries {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    #[inline]
    pub(crate) fn insert(&mut self, id: String, entry: StoredEntry) {
        self.map.insert(id, entry);
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, id: &str) -> Option<&StoredEntry> {
        self.map.get(id)
    }

    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    /// Replaces a still unbuilt [`StoredEntry::Type`] with its instance and returns the cached value.
    /// If the entry was built or replaced meanwhile, the current value wins.
    pub(crate) fn materialize(&mut self, id: &str, type_name: &str, value: Value) -> Value {
        match self.map.get(id) {
            Some(StoredEntry::Type(pending)) if pending == type_name => {
                self.map.insert(id.to_string(), StoredEntry::Value(value.clone()));
                value
            }
            Some(StoredEntry::Value(current)) => current.clone(),
            _ => value,
        }
    }

    /// Stores `value` if there is no entry with the id yet and returns the stored value.
    /// An entry set meanwhile is kept: a built value wins over `value`, any other entry is left as is.
    pub(crate) fn insert_if_absent(&mut self, id: &str, value: Value) -> Value {
        match self.map.get(id) {
            None => {
                self.map.insert(id.to_string(), StoredEntry::Value(value.clone()));
                value
            }
            Some(StoredEntry::Value(current)) => current.clone(),
            Some(_) => value,
        }
    }
}
