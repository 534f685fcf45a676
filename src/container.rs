use alloc::{
    string::{String, ToString as _},
    sync::Arc,
};
use parking_lot::Mutex;
use tracing::{debug, error, info_span, warn};

use crate::{
    any::{TypeInfo, Value},
    argument::{ArgumentBuffer, Arguments},
    callable::Callable,
    config::Config,
    dependency_resolver::{resolve_parameters, ResolutionPath},
    descriptor::TypeDescriptor,
    entries::{Entries, Entry, StoredEntry},
    errors::{InstantiateErrorKind, ResolveErrorKind},
    registry::Registry,
    service::Service as _,
};

/// What [`Container::call`] invokes
#[derive(Clone)]
pub enum Target {
    Callable(Callable),
    /// Method name, looked up on the receiver's type
    Method(String),
}

impl From<Callable> for Target {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

impl From<String> for Target {
    fn from(method: String) -> Self {
        Self::Method(method)
    }
}

impl From<&str> for Target {
    fn from(method: &str) -> Self {
        Self::Method(method.to_string())
    }
}

/// Instance a method is called on
#[derive(Clone)]
pub enum Receiver {
    Instance(Value),
    /// Type name, built with empty arguments before the call
    Type(String),
}

impl From<Value> for Receiver {
    fn from(instance: Value) -> Self {
        Self::Instance(instance)
    }
}

impl From<String> for Receiver {
    fn from(type_name: String) -> Self {
        Self::Type(type_name)
    }
}

impl From<&str> for Receiver {
    fn from(type_name: &str) -> Self {
        Self::Type(type_name.to_string())
    }
}

#[derive(Clone)]
pub struct Container {
    pub(crate) inner: Arc<ContainerInner>,
}

pub(crate) struct ContainerInner {
    pub(crate) registry: Registry,
    pub(crate) entries: Mutex<Entries>,
    pub(crate) config: Config,
}

impl Container {
    #[inline]
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self::new_with_config(registry, Config::default())
    }

    #[inline]
    #[must_use]
    pub fn new_with_config(registry: Registry, config: Config) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                registry,
                entries: Mutex::new(Entries::new()),
                config,
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> Config {
        self.inner.config
    }

    /// Creates a new instance of the type, building its dependencies recursively.
    ///
    /// `arguments` are used for primitive constructor parameters in order.
    /// They are ignored if the type has no constructor or the constructor has no parameters.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::UnknownType`] if the type isn't registered
    /// - Returns [`ResolveErrorKind::UnresolvableType`] if a dependency parameter has a type that isn't registered
    /// - Returns [`ResolveErrorKind::UnresolvablePrimitive`] if a primitive parameter has neither an argument nor a default value
    /// - Returns [`ResolveErrorKind::CyclicDependency`] if the type depends on itself
    /// - Returns [`ResolveErrorKind::Instantiate`] if a constructor fails
    pub fn make(&self, type_name: &str, arguments: impl IntoIterator<Item = Value>) -> Result<Value, ResolveErrorKind> {
        let span = info_span!("make", type_name);
        let _guard = span.enter();

        self.make_in_path(type_name, arguments.into_iter().collect(), &mut ResolutionPath::new())
    }

    /// Same as [`Self::make`] for a type registered with its Rust type
    #[allow(clippy::missing_errors_doc)]
    pub fn make_typed<T: Send + Sync + 'static>(&self, arguments: impl IntoIterator<Item = Value>) -> Result<Arc<T>, ResolveErrorKind> {
        let type_info = TypeInfo::of::<T>();
        let type_name = self.inner.registry.name_of(&type_info.id).unwrap_or(type_info.short_name());

        let value = self.make(type_name, arguments)?;
        match value.downcast() {
            Some(instance) => Ok(instance),
            None => {
                let err = ResolveErrorKind::Instantiate(InstantiateErrorKind::IncorrectType {
                    expected: type_info.name,
                    actual: value.type_info().name,
                });
                error!("{}", err);
                Err(err)
            }
        }
    }

    pub(crate) fn make_in_path(&self, type_name: &str, buffer: ArgumentBuffer, path: &mut ResolutionPath) -> Result<Value, ResolveErrorKind> {
        let Some(descriptor) = self.inner.registry.get(type_name) else {
            let err = ResolveErrorKind::UnknownType {
                type_name: type_name.to_string(),
            };
            error!("{}", err);
            return Err(err);
        };

        if !self.inner.config.detect_cycles {
            return self.instantiate(descriptor, buffer, path);
        }

        path.enter(type_name)?;
        let result = self.instantiate(descriptor, buffer, path);
        path.leave();
        result
    }

    fn instantiate(&self, descriptor: &TypeDescriptor, mut buffer: ArgumentBuffer, path: &mut ResolutionPath) -> Result<Value, ResolveErrorKind> {
        let arguments = match descriptor.params() {
            Some(params) if !params.is_empty() => resolve_parameters(self, params, &mut buffer, descriptor.name(), path)?,
            _ => {
                if !buffer.is_empty() {
                    debug!(count = buffer.len(), "No constructor parameters, arguments ignored");
                }
                Arguments::default()
            }
        };

        match descriptor.instantiator.clone().call(arguments) {
            Ok(instance) => {
                debug!(type_name = descriptor.name(), "Made");
                Ok(instance)
            }
            Err(err) => {
                error!("{}", err);
                Err(ResolveErrorKind::Instantiate(err))
            }
        }
    }

    /// Invokes a callable or a method with autowired parameters.
    ///
    /// # Notes
    /// For [`Target::Method`] this returns `Ok(None)` if there is no receiver or the receiver's type has no such method,
    /// unless [`Config::strict_methods`] is set.
    ///
    /// # Errors
    /// - Returns the same errors as [`Self::make`] for the receiver and the parameters
    /// - Returns [`ResolveErrorKind::MethodNotFound`] if the method doesn't exist and [`Config::strict_methods`] is set
    pub fn call(
        &self,
        target: impl Into<Target>,
        arguments: impl IntoIterator<Item = Value>,
        receiver: Option<Receiver>,
    ) -> Result<Option<Value>, ResolveErrorKind> {
        match target.into() {
            Target::Callable(callable) => self.call_fn(&callable, arguments).map(Some),
            Target::Method(method) => self.call_method(&method, arguments, receiver),
        }
    }

    /// Invokes a callable, building its dependency parameters
    #[allow(clippy::missing_errors_doc)]
    pub fn call_fn(&self, callable: &Callable, arguments: impl IntoIterator<Item = Value>) -> Result<Value, ResolveErrorKind> {
        let span = info_span!("call", callable = callable.name());
        let _guard = span.enter();

        let mut buffer = arguments.into_iter().collect();
        let arguments = resolve_parameters(self, callable.params(), &mut buffer, callable.name(), &mut ResolutionPath::new())?;

        match callable.invoker.clone().call(arguments) {
            Ok(output) => {
                debug!("Called");
                Ok(output)
            }
            Err(err) => {
                error!("{}", err);
                Err(ResolveErrorKind::Instantiate(err))
            }
        }
    }

    /// Invokes a method on the receiver, building the receiver first if it's a type name.
    /// See [`Self::call`] for the missing method behaviour.
    #[allow(clippy::missing_errors_doc)]
    pub fn call_method(
        &self,
        method: &str,
        arguments: impl IntoIterator<Item = Value>,
        receiver: Option<Receiver>,
    ) -> Result<Option<Value>, ResolveErrorKind> {
        let span = info_span!("call_method", method);
        let _guard = span.enter();

        let (instance, owner) = match receiver {
            Some(Receiver::Type(type_name)) => (self.make(&type_name, [])?, type_name),
            Some(Receiver::Instance(instance)) => {
                let type_info = instance.type_info();
                let Some(owner) = self.inner.registry.name_of(&type_info.id) else {
                    return self.method_not_found(method, type_info.name);
                };
                let owner = owner.to_string();
                (instance, owner)
            }
            None => return self.method_not_found(method, "<none>"),
        };

        let Some(descriptor) = self.inner.registry.get_method(&owner, method) else {
            return self.method_not_found(method, &owner);
        };

        let mut buffer = arguments.into_iter().collect();
        let arguments = resolve_parameters(self, descriptor.params(), &mut buffer, &owner, &mut ResolutionPath::new())?;

        match descriptor.method.clone().call((instance, arguments)) {
            Ok(output) => {
                debug!(owner = owner.as_str(), "Called");
                Ok(Some(output))
            }
            Err(err) => {
                error!("{}", err);
                Err(ResolveErrorKind::Instantiate(err))
            }
        }
    }

    fn method_not_found(&self, method: &str, owner: &str) -> Result<Option<Value>, ResolveErrorKind> {
        if self.inner.config.strict_methods {
            let err = ResolveErrorKind::MethodNotFound {
                method: method.to_string(),
                owner: owner.to_string(),
            };
            error!("{}", err);
            return Err(err);
        }

        warn!(owner, "Method not found");
        Ok(None)
    }
}

impl Container {
    /// Registers an entry, replacing the previous one with the same id.
    /// [`Entry::Type`] is built lazily by [`Self::get`].
    ///
    /// Returns the entry as stored, i.e. [`Entry::Text`] is returned as [`Entry::Type`] or a string [`Entry::Value`].
    pub fn set(&self, id: impl Into<String>, entry: impl Into<Entry>) -> Entry {
        let id = id.into();
        let entry = match entry.into() {
            Entry::Text(text) if self.inner.registry.contains(&text) => StoredEntry::Type(text),
            Entry::Text(text) => StoredEntry::Value(Value::new(text)),
            Entry::Type(type_name) => StoredEntry::Type(type_name),
            Entry::Value(value) => StoredEntry::Value(value),
            Entry::Deferred(callable) => StoredEntry::Deferred(callable),
        };

        debug!(id = id.as_str(), "Entry set");

        self.inner.entries.lock().insert(id, entry.clone());
        entry.into()
    }

    pub fn set_array<I, K, E>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<String>,
        E: Into<Entry>,
    {
        for (id, entry) in entries {
            self.set(id, entry);
        }
    }

    /// Gets an entry.
    /// [`Entry::Type`] is built on the first call and cached, [`Entry::Deferred`] is called every time.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NotFound`] if there is no entry with the id
    /// - Returns errors of [`Self::make`] and [`Self::call_fn`] for unbuilt and deferred entries
    pub fn get(&self, id: &str) -> Result<Value, ResolveErrorKind> {
        let span = info_span!("get", id);
        let _guard = span.enter();

        // The lock isn't held while building, deferred callables may use the container
        let entry = self.inner.entries.lock().get(id).cloned();
        match entry {
            Some(StoredEntry::Value(value)) => {
                debug!("Found");
                Ok(value)
            }
            Some(StoredEntry::Type(type_name)) => {
                let value = self.make(&type_name, [])?;
                debug!("Cached");
                Ok(self.inner.entries.lock().materialize(id, &type_name, value))
            }
            Some(StoredEntry::Deferred(callable)) => self.call_fn(&callable, []),
            None => {
                let err = ResolveErrorKind::NotFound { id: id.to_string() };
                warn!("{}", err);
                Err(err)
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.inner.entries.lock().contains(id)
    }

    /// Gets the entry with the type name as id, or builds the type and registers it under this id.
    /// If another caller registers the id while the type is being built, its value is returned instead.
    ///
    /// # Errors
    /// - Returns errors of [`Self::get`] except [`ResolveErrorKind::NotFound`]
    /// - Returns errors of [`Self::make`] if there is no entry yet
    pub fn get_or_set(&self, type_name: &str) -> Result<Value, ResolveErrorKind> {
        match self.get(type_name) {
            Err(ResolveErrorKind::NotFound { .. }) => {}
            result => return result,
        }

        let value = self.make(type_name, [])?;
        debug!(id = type_name, "Entry set");
        Ok(self.inner.entries.lock().insert_if_absent(type_name, value))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{Container, Receiver, Target};
    use crate::{
        any::Value,
        callable::Callable,
        config::Config,
        descriptor::{Param, TypeDescriptor},
        entries::Entry,
        errors::{InstantiateErrorKind, ResolveErrorKind},
        inject::{Inject, OrDefault, Primitive},
        registry::Registry,
    };

    use alloc::{
        format,
        string::{String, ToString as _},
        sync::Arc,
        vec,
        vec::Vec,
    };
    use core::sync::atomic::{AtomicU8, Ordering};
    use tracing_test::traced_test;

    #[derive(Default)]
    struct Engine;
    struct Wheel(u8);
    struct Car(Arc<Engine>, Arc<Wheel>, String);

    struct Chicken(#[allow(dead_code)] Arc<Egg>);
    struct Egg(#[allow(dead_code)] Arc<Chicken>);

    fn registry() -> Registry {
        Registry::new()
            .provide_default::<Engine>()
            .provide(|OrDefault(size): OrDefault<u8>| Ok(Wheel(size)))
            .provide(|Inject(engine): Inject<Engine>, Inject(wheel): Inject<Wheel>, Primitive(color): Primitive<String>| {
                Ok(Car(engine, wheel, color))
            })
            .method::<Car, _, _>("color", |car: &Car| Ok(car.2.clone()))
            .method::<Car, _, _>("repaint", |car: &Car, Primitive(color): Primitive<String>| {
                Ok(format!("{} -> {color}", car.2))
            })
    }

    #[test]
    #[traced_test]
    fn test_make_graph() {
        let container = Container::new(registry());

        let car = container.make_typed::<Car>(args![String::from("red")]).unwrap();

        assert_eq!(car.1 .0, 0);
        assert_eq!(car.2, "red");
    }

    #[test]
    #[traced_test]
    fn test_make_without_caching() {
        let container = Container::new(registry());

        let engine_1 = container.make("Engine", []).unwrap();
        let engine_2 = container.make("Engine", [Value::new(1u8)]).unwrap();

        assert!(engine_1.is::<Engine>());
        assert!(!engine_1.ptr_eq(&engine_2));
    }

    #[test]
    #[traced_test]
    fn test_make_unknown() {
        let container = Container::new(registry());

        assert!(matches!(
            container.make("Bus", []),
            Err(ResolveErrorKind::UnknownType { type_name }) if type_name == "Bus"
        ));
    }

    #[test]
    #[traced_test]
    fn test_make_constructor_error() {
        let container = Container::new(Registry::new().provide(|Primitive(size): Primitive<u8>| {
            if size == 0 {
                return Err(InstantiateErrorKind::Custom(anyhow::anyhow!("size can't be zero")));
            }
            Ok(Wheel(size))
        }));

        assert!(container.make("Wheel", args![1u8]).is_ok());
        assert!(matches!(
            container.make("Wheel", args![0u8]),
            Err(ResolveErrorKind::Instantiate(InstantiateErrorKind::Custom(_)))
        ));
        assert!(matches!(
            container.make("Wheel", args![String::new()]),
            Err(ResolveErrorKind::Instantiate(InstantiateErrorKind::IncorrectArgument { index: 0, .. }))
        ));
    }

    #[test]
    #[traced_test]
    fn test_cyclic_dependency() {
        let registry = Registry::new()
            .provide(|Inject(egg): Inject<Egg>| Ok(Chicken(egg)))
            .provide(|Inject(chicken): Inject<Chicken>| Ok(Egg(chicken)));
        let container = Container::new(registry);

        match container.make("Chicken", []).unwrap_err() {
            ResolveErrorKind::CyclicDependency { path } => assert_eq!(path, vec!["Chicken", "Egg", "Chicken"]),
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    #[traced_test]
    fn test_diamond_isnt_cycle() {
        struct Left(#[allow(dead_code)] Arc<Engine>);
        struct Right(#[allow(dead_code)] Arc<Engine>);
        struct Top(#[allow(dead_code)] Arc<Left>, #[allow(dead_code)] Arc<Right>);

        let container = Container::new(
            Registry::new()
                .provide_default::<Engine>()
                .provide(|Inject(engine): Inject<Engine>| Ok(Left(engine)))
                .provide(|Inject(engine): Inject<Engine>| Ok(Right(engine)))
                .provide(|Inject(left): Inject<Left>, Inject(right): Inject<Right>| Ok(Top(left, right))),
        );

        assert!(container.make_typed::<Top>([]).is_ok());
    }

    #[test]
    #[traced_test]
    fn test_call_closure() {
        let container = Container::new(registry());
        let callable = Callable::from_fn(|Inject(engine): Inject<Engine>, Primitive(count): Primitive<u8>| Ok((engine, count)));

        let output = container.call(callable, args![4u8], None).unwrap().unwrap();
        let (_, count) = &*output.downcast::<(Arc<Engine>, u8)>().unwrap();

        assert_eq!(*count, 4);
    }

    #[test]
    #[traced_test]
    fn test_call_method_on_type_and_instance() {
        let container = Container::new(registry());

        let err = container
            .call("repaint", args![String::from("blue")], Some(Receiver::Type("Car".to_string())))
            .unwrap_err();
        assert!(matches!(err, ResolveErrorKind::UnresolvablePrimitive { .. }));

        let car = container.make("Car", args![String::from("red")]).unwrap();
        let color = container
            .call(Target::Method("repaint".to_string()), args![String::from("blue")], Some(car.into()))
            .unwrap()
            .unwrap();
        assert_eq!(color.downcast_ref::<String>().map(String::as_str), Some("red -> blue"));
    }

    #[test]
    #[traced_test]
    fn test_call_missing_method() {
        let container = Container::new(registry());
        let car = container.make("Car", args![String::from("red")]).unwrap();

        assert!(container.call_method("drive", [], Some(Receiver::Instance(car))).unwrap().is_none());
        assert!(container.call_method("color", [], Some(Value::new(1u8).into())).unwrap().is_none());
        assert!(container.call_method("color", [], None).unwrap().is_none());
        assert!(logs_contain("Method not found"));
    }

    #[test]
    #[traced_test]
    fn test_call_missing_method_strict() {
        let config = Config {
            strict_methods: true,
            ..Config::default()
        };
        let container = Container::new_with_config(registry(), config);

        assert!(matches!(
            container.call_method("drive", [], Some("Engine".into())),
            Err(ResolveErrorKind::MethodNotFound { method, owner }) if method == "drive" && owner == "Engine"
        ));
    }

    #[test]
    #[traced_test]
    fn test_dynamic_descriptor() {
        let container = Container::new(
            registry().register(TypeDescriptor::with_constructor(
                "Garage",
                vec![
                    Param::typed("car", "Car"),
                    Param::primitive("capacity").with_default(Value::new(2u32)),
                ],
                |arguments| {
                    let car = arguments.dependency::<Car>(0)?;
                    let capacity = arguments.primitive::<u32>(1)?;
                    Ok(Value::new((car.2.clone(), capacity)))
                },
            )),
        );

        assert!(matches!(
            container.make("Garage", args![String::from("red")]),
            Err(ResolveErrorKind::UnresolvablePrimitive { owner, .. }) if owner == "Car"
        ));

        let container = Container::new(
            Registry::new().register(TypeDescriptor::with_constructor("Counter", vec![Param::typed("start", "int")], |_| {
                Ok(Value::new(0u32))
            })),
        );
        assert!(matches!(
            container.make("Counter", args![1u32]),
            Err(ResolveErrorKind::UnresolvableType { type_hint, .. }) if type_hint == "int"
        ));
    }

    #[test]
    #[traced_test]
    fn test_entries() {
        let container = Container::new(registry());

        assert!(matches!(container.set("engine", "Engine"), Entry::Type(type_name) if type_name == "Engine"));
        assert!(matches!(container.set("name", "Engine Co"), Entry::Value(value) if value.is::<String>()));
        assert!(container.has("engine"));
        assert!(!container.has("wheel"));

        let engine_1 = container.get("engine").unwrap();
        let engine_2 = container.get("engine").unwrap();
        assert!(engine_1.is::<Engine>());
        assert!(engine_1.ptr_eq(&engine_2));

        assert_eq!(container.get("name").unwrap().downcast_ref::<String>().map(String::as_str), Some("Engine Co"));
        assert!(matches!(container.get("wheel"), Err(ResolveErrorKind::NotFound { id }) if id == "wheel"));

        assert!(matches!(container.set("engine", Entry::value(1u8)), Entry::Value(value) if value.is::<u8>()));
        assert!(container.get("engine").unwrap().is::<u8>());
    }

    #[test]
    #[traced_test]
    fn test_deferred_entry() {
        let calls = Arc::new(AtomicU8::new(0));
        let container = Container::new(registry());

        container.set(
            "engine",
            Callable::from_fn({
                let calls = calls.clone();
                move |Inject(engine): Inject<Engine>| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(engine)
                }
            }),
        );

        let engine_1 = container.get("engine").unwrap();
        let engine_2 = container.get("engine").unwrap();

        assert!(engine_1.is::<Arc<Engine>>());
        assert!(engine_1.is::<Engine>());
        assert!(!engine_1.ptr_eq(&engine_2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    #[traced_test]
    fn test_deferred_entry_uses_container() {
        let container = Container::new(registry());
        container.set("name", Entry::value(String::from("Engine Co")));

        let inner = container.clone();
        container.set(
            "label",
            Callable::new(vec![], move |_| {
                let name = inner.get("name").map_err(|err| InstantiateErrorKind::Custom(anyhow::Error::msg(err.to_string())))?;
                Ok(name)
            }),
        );

        assert!(container.get("label").unwrap().is::<String>());
    }

    #[test]
    #[traced_test]
    fn test_get_or_set() {
        let container = Container::new(registry());

        let engine_1 = container.get_or_set("Engine").unwrap();
        let engine_2 = container.get_or_set("Engine").unwrap();
        assert!(engine_1.ptr_eq(&engine_2));
        assert!(container.has("Engine"));

        assert!(matches!(container.get_or_set("Bus"), Err(ResolveErrorKind::UnknownType { .. })));
        assert!(!container.has("Bus"));
    }

    #[test]
    #[traced_test]
    fn test_get_or_set_concurrent() {
        use std::{sync::Barrier, thread, time::Duration};

        let made = Arc::new(AtomicU8::new(0));
        let container = Container::new(Registry::new().provide({
            let made = made.clone();
            move || {
                made.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(50));
                Ok(Engine)
            }
        }));
        let barrier = Arc::new(Barrier::new(2));

        let handles = (0..2)
            .map(|_| {
                let container = container.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    container.get_or_set("Engine").unwrap()
                })
            })
            .collect::<Vec<_>>();
        let values = handles.into_iter().map(|handle| handle.join().unwrap()).collect::<Vec<_>>();

        assert!(made.load(Ordering::SeqCst) >= 1);
        assert!(values[0].ptr_eq(&values[1]));
        assert!(values[0].ptr_eq(&container.get("Engine").unwrap()));
    }

    #[test]
    #[traced_test]
    fn test_method_on_shared_instance() {
        #[derive(Default)]
        struct Horn;

        let container = Container::new(
            Registry::new()
                .provide_default::<Horn>()
                .method::<Horn, _, _>("honk", |_: &Horn| Ok(String::from("beep"))),
        );
        container.set("horn", Callable::from_fn(|Inject(horn): Inject<Horn>| Ok(horn)));

        let horn = container.get("horn").unwrap();
        assert!(horn.is::<Horn>());

        let sound = container.call_method("honk", [], Some(Receiver::Instance(horn))).unwrap().unwrap();
        assert_eq!(sound.downcast_ref::<String>().map(String::as_str), Some("beep"));

        let horn = container
            .call(Callable::from_fn(|Inject(horn): Inject<Horn>| Ok(horn)), [], None)
            .unwrap()
            .unwrap();
        assert!(container.call_method("honk", [], Some(horn.into())).unwrap().is_some());
    }

    #[test]
    #[traced_test]
    fn test_unknown_type_entry_isnt_cached() {
        let container = Container::new(registry());
        container.set("bus", Entry::of_type("Bus"));

        assert!(matches!(container.get("bus"), Err(ResolveErrorKind::UnknownType { .. })));
        assert!(container.has("bus"));
    }

    #[test]
    fn test_container_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Container>();
    }
}
