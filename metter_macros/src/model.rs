//! Descriptor model shared by the matcher, resolver, and generator.
//!
//! These types carry everything the code-generation core needs to know
//! about a marked type, decoupled from `syn` so the core stays a pure
//! function of its inputs.

/// Visibility of a declared method, as seen from generated code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Visibility {
    /// `pub`: reachable from anywhere the artifact could be placed.
    Public,
    /// `pub(crate)`: the module-private analogue of package visibility.
    Crate,
    /// `pub(super)` or `pub(in …)`: reachable only near the source module.
    Restricted,
    /// Inherited visibility; never eligible for generation.
    Private,
}

/// Receiver of an instance method. Associated functions without a
/// receiver never become descriptors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Receiver {
    Ref,
    RefMut,
}

/// One declared instance method of the marked type.
#[derive(Clone, Debug)]
pub(crate) struct MethodDescriptor {
    pub name: String,
    /// Rendered parameter types, excluding the receiver.
    pub params: Vec<String>,
    /// Rendered return type; `None` for unit.
    pub ret: Option<String>,
    pub visibility: Visibility,
    pub receiver: Receiver,
}

/// The marked type: simple name, module path (empty when unknown or at
/// the crate root), and its declared methods in declaration order.
#[derive(Clone, Debug)]
pub(crate) struct ClassDescriptor {
    pub name: String,
    pub package: String,
    pub methods: Vec<MethodDescriptor>,
}

/// Which accessor family a marker asks for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum AccessorKind {
    Getter,
    Setter,
}

/// A matched accessor: the derived field name paired with its method.
#[derive(Clone, Debug)]
pub(crate) struct AccessorEntry {
    pub field: String,
    pub method: MethodDescriptor,
    pub kind: AccessorKind,
}

/// Which artifact a marker generates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ArtifactKind {
    Getter,
    Setter,
    Factory,
}

impl ArtifactKind {
    /// Suffix appended to the source type's simple name by default.
    pub(crate) fn suffix(self) -> &'static str {
        match self {
            Self::Getter => "GetterSupplier",
            Self::Setter => "SetterSupplier",
            Self::Factory => "SupplierFactory",
        }
    }
}

/// Per-marker overrides parsed from the attribute arguments.
#[derive(Clone, Debug, Default)]
pub(crate) struct MarkerConfig {
    /// Replaces the artifact's simple name.
    pub name: Option<String>,
    /// Places the artifact in a generated module of this name instead of
    /// the source type's own module.
    pub module: Option<String>,
}

/// Resolved artifact name: simple name plus target module path.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct ArtifactName {
    pub simple: String,
    pub package: String,
}

impl ArtifactName {
    /// Renders `package::Simple`, or just `Simple` when the package is
    /// empty.
    pub(crate) fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            format!("{}::{}", self.package, self.simple)
        }
    }
}

/// One generated unit of source text plus its resolved name. Write-once;
/// the host turns the text into tokens and appends it after the marked
/// item.
#[derive(Clone, Debug)]
pub(crate) struct GeneratedArtifact {
    pub name: ArtifactName,
    pub text: String,
}
