//! Artifact naming: default names, override handling, and override
//! validation.

use std::fmt;

use crate::model::{ArtifactKind, ArtifactName, ClassDescriptor, MarkerConfig};

/// A rejected marker configuration. The host attaches a span and turns
/// this into a compile diagnostic.
#[derive(Debug)]
pub(crate) enum ConfigError {
    /// The `name` override is not a valid Rust identifier.
    InvalidName { class: String, value: String },
    /// The `module` override is not a valid module identifier.
    InvalidModule { class: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { class, value } => write!(
                f,
                "invalid artifact name `{value}` for `{class}`: expected a Rust identifier"
            ),
            Self::InvalidModule { class, value } => write!(
                f,
                "invalid module `{value}` for `{class}`: expected a single module identifier"
            ),
        }
    }
}

/// Computes the generated artifact's name.
///
/// Defaults to `<Type><Kind suffix>` in the source type's own module; a
/// type without a known module yields an artifact without one. The
/// `name` override replaces the simple name and the `module` override
/// replaces the target module, each independently of the other.
pub(crate) fn resolve(
    class: &ClassDescriptor,
    kind: ArtifactKind,
    config: &MarkerConfig,
) -> Result<ArtifactName, ConfigError> {
    let simple = match &config.name {
        Some(name) => {
            if !is_identifier(name) {
                return Err(ConfigError::InvalidName {
                    class: class.name.clone(),
                    value: name.clone(),
                });
            }
            name.clone()
        }
        None => format!("{}{}", class.name, kind.suffix()),
    };
    let package = match &config.module {
        Some(module) => {
            if !is_identifier(module) {
                return Err(ConfigError::InvalidModule {
                    class: class.name.clone(),
                    value: module.clone(),
                });
            }
            module.clone()
        }
        None => class.package.clone(),
    };
    Ok(ArtifactName { simple, package })
}

/// `syn` does the real work so keywords are rejected alongside
/// malformed spellings.
fn is_identifier(value: &str) -> bool {
    syn::parse_str::<syn::Ident>(value).is_ok()
}
