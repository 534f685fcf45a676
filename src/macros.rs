macro_rules! all_the_tuples {
    ($name:ident) => {
        $name!([]);
        $name!([T1]);
        $name!([T1, T2]);
        $name!([T1, T2, T3]);
        $name!([T1, T2, T3, T4]);
        $name!([T1, T2, T3, T4, T5]);
        $name!([T1, T2, T3, T4, T5, T6]);
        $name!([T1, T2, T3, T4, T5, T6, T7]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12]);
    };
}

/// Builds a [`crate::Registry`] from a list of registry builder calls.
///
/// # Examples
/// ```rust
/// use autowire::{registry, Inject, Primitive};
/// use std::sync::Arc;
///
/// #[derive(Default)]
/// struct Database;
///
/// struct UserRepo(Arc<Database>, String);
///
/// let registry = registry! {
///     provide_default::<Database>(),
///     provide(|Inject(db): Inject<Database>, Primitive(table): Primitive<String>| Ok(UserRepo(db, table))),
///     method::<UserRepo, _, _>("table", |repo: &UserRepo| Ok(repo.1.clone())),
/// };
///
/// assert!(registry.contains("Database"));
/// assert!(registry.contains("UserRepo"));
/// ```
#[macro_export]
macro_rules! registry {
    (
        $(
            $entry:ident $( :: < $($generic:ty),+ > )? ( $($args:tt)* )
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut registry = $crate::Registry::new();
        $(
            registry = registry.$entry $( ::<$($generic),+> )? ( $($args)* );
        )*
        registry
    }};
}

/// Builds caller-supplied primitive arguments for [`crate::Container::make`] and [`crate::Container::call`].
///
/// # Examples
/// ```rust
/// use autowire::{args, Value};
///
/// let arguments: [Value; 2] = args![String::from("value"), 42u32];
/// assert!(arguments[1].is::<u32>());
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::Value::new($value)),*]
    };
}
