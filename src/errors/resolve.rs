use alloc::{string::String, vec::Vec};

use super::instantiate::InstantiateErrorKind;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Type {type_name:?} not found in registry")]
    UnknownType { type_name: String },
    #[error("Unable to resolve type {type_hint:?} of parameter {parameter:?} of {owner:?}")]
    UnresolvableType {
        parameter: String,
        type_hint: String,
        owner: String,
    },
    #[error("Unable to resolve primitive parameter {parameter:?} of {owner:?}")]
    UnresolvablePrimitive { parameter: String, owner: String },
    #[error("Entry {id:?} not found")]
    NotFound { id: String },
    #[error("Cyclic dependency detected: {}", path.join(" -> "))]
    CyclicDependency { path: Vec<String> },
    #[error("Method {method:?} not found for {owner:?}")]
    MethodNotFound { method: String, owner: String },
    #[error(transparent)]
    Instantiate(#[from] InstantiateErrorKind),
}
