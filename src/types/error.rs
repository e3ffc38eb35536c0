use thiserror::Error;

/// Failure to resolve a property path against a state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },

    #[error("unknown property '{segment}' at '{path}'")]
    UnknownProperty { path: String, segment: String },

    #[error("invalid list index '{segment}' at '{path}'")]
    BadListIndex { path: String, segment: String },

    #[error("value at '{path}' has no properties to traverse")]
    NotTraversable { path: String },
}

/// Runtime failure while executing an expression tree.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("variable at '{path}' is {kind}, not a list")]
    NotAList { path: String, kind: &'static str },

    #[error("{message}")]
    Failed { message: String },
}

impl EvalError {
    /// Build a [`EvalError::Failed`] from any displayable message. Custom
    /// expression implementations use this for their own failure modes.
    pub fn failed(message: impl Into<String>) -> Self {
        EvalError::Failed {
            message: message.into(),
        }
    }
}
