/// Config for a container
/// ## Fields
/// - `detect_cycles`:
///   If `true`, every `make` tracks the chain of types being constructed
///   and fails with [`crate::ResolveErrorKind::CyclicDependency`] when a type depends on itself.
///
///   If `false`, a cyclic graph recurses until the stack is exhausted.
/// - `strict_methods`:
///   If `true`, calling a method that doesn't exist fails with [`crate::ResolveErrorKind::MethodNotFound`].
///
///   If `false`, such call returns `Ok(None)`.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Config {
    pub detect_cycles: bool,
    pub strict_methods: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detect_cycles: true,
            strict_methods: false,
        }
    }
}
