#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error("Argument at position {index} is missing")]
    MissingArgument { index: usize },
    #[error("Incorrect argument type at position {index}. Actual: {actual}, expected: {expected}")]
    IncorrectArgument {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Incorrect type. Actual: {actual}, expected: {expected}")]
    IncorrectType { expected: &'static str, actual: &'static str },
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
