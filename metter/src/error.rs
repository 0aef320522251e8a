//! Runtime errors surfaced by generated accessors.

use thiserror::Error;

/// Errors produced when a generated accessor is driven with bad input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MetterError {
    /// A generated setter received a boxed value of the wrong type.
    #[error("setter for field `{field}` expected a value of type `{expected}`")]
    TypeMismatch {
        /// Derived field name the setter was registered under.
        field: &'static str,
        /// Rendered parameter type the setter accepts.
        expected: &'static str,
    },
}

impl MetterError {
    /// Called by generated setter entries when the boxed argument fails
    /// to downcast.
    #[must_use]
    pub fn type_mismatch(field: &'static str, expected: &'static str) -> Self {
        tracing::debug!(field, expected, "setter argument type mismatch");
        Self::TypeMismatch { field, expected }
    }
}
