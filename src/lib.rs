#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod argument;
pub(crate) mod callable;
pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod dependency_resolver;
pub(crate) mod descriptor;
pub(crate) mod entries;
pub(crate) mod errors;
pub(crate) mod inject;
pub(crate) mod instantiator;
pub(crate) mod registry;
pub(crate) mod service;

pub use any::{TypeInfo, Value};
pub use argument::{ArgumentBuffer, Arguments};
pub use callable::Callable;
pub use config::Config;
pub use container::{Container, Receiver, Target};
pub use descriptor::{MethodDescriptor, Param, TypeDescriptor};
pub use entries::Entry;
pub use errors::{InstantiateErrorKind, ResolveErrorKind};
pub use inject::{FromArgument, Inject, OrDefault, Primitive};
pub use instantiator::{Handler, MethodHandler};
pub use registry::Registry;
