use thiserror::Error;

/// Result type for icicle-processor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Hard errors raised when the host breaks the element-graph contract.
///
/// User mistakes (private fields, unmappable types) are never reported here;
/// they go through the [`Messager`](crate::processor::Messager) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed type spelling '{spec}': {message}")]
    TypeSpec { spec: String, message: String },

    #[error("Cannot resolve type element '{name}'")]
    UnresolvedType { name: String },

    #[error("Annotated element '{element}' is a {kind}, not a field")]
    NotAField { element: String, kind: String },

    #[error("Element '{element}' is not directly enclosed by a class")]
    NotEnclosedByClass { element: String },

    #[error("Superclass '{mirror}' of '{class}' is not a declared type")]
    NotADeclaredType { class: String, mirror: String },

    #[error("Duplicate class definition: {name}")]
    DuplicateClass { name: String },

    #[error("Unknown primitive kind: {name}")]
    UnknownPrimitive { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a type spelling error
    pub fn type_spec(spec: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeSpec { spec: spec.into(), message: message.into() }
    }

    /// Create an unresolved type error
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedType { name: name.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
