//! Emits supplier and factory source text from matched accessors.
//!
//! The artifact is plain Rust source assembled line by line, so a fixed
//! descriptor always produces byte-identical text. The host parses the
//! text back into a token stream and appends it after the marked item.

use crate::emit::LineJoiner;
use crate::model::{
    AccessorEntry, AccessorKind, ArtifactName, ClassDescriptor, GeneratedArtifact,
};

const GETTER_ENTRY: &str = "    map.insert(\"{0}\", |target: &{1}| \
     ::std::boxed::Box::new({1}::{2}(target)) as ::std::boxed::Box<dyn ::std::any::Any>);";

const SETTER_ENTRY: &str = "    map.insert(\"{0}\", |target: &mut {1}, \
     value: ::std::boxed::Box<dyn ::std::any::Any>| match value.downcast::<{2}>() { \
     Ok(value) => { {1}::{3}(target, *value); Ok(()) } \
     Err(_) => Err(::metter::MetterError::type_mismatch(\"{0}\", \"{2}\")) });";

/// Generates one supplier artifact for `kind`.
///
/// One map entry is emitted per accessor, in the order the matcher
/// discovered them: key = the derived field name as a string literal,
/// value = a function pointer invoking the matched method. An empty
/// entry set still yields a complete artifact whose map is empty.
pub(crate) fn supplier(
    class: &ClassDescriptor,
    kind: AccessorKind,
    name: &ArtifactName,
    entries: &[AccessorEntry],
) -> GeneratedArtifact {
    debug_assert!(entries.iter().all(|entry| entry.kind == kind));

    let target = class.name.as_str();
    let map_type = map_type(kind, target);
    let (trait_name, fn_name, entry_template) = match kind {
        AccessorKind::Getter => ("GetterSupplier", "getters", GETTER_ENTRY),
        AccessorKind::Setter => ("SetterSupplier", "setters", SETTER_ENTRY),
    };

    let mut joiner = LineJoiner::new();
    joiner
        .linef(
            "#[doc = \"Generated accessor supplier for `{0}`.\"]",
            &[target],
        )
        .linef("pub struct {0};", &[name.simple.as_str()])
        .line("#[automatically_derived]")
        .linef(
            "impl ::metter::{0} for {1} {",
            &[trait_name, name.simple.as_str()],
        )
        .linef("    type Target = {0};", &[target])
        .linef("    fn {0}() -> {1} {", &[fn_name, map_type.as_str()])
        .line_if(
            entries.is_empty(),
            &format!("    let map: {map_type} = ::std::collections::HashMap::new();"),
        )
        .line_if(
            !entries.is_empty(),
            &format!(
                "    let mut map: {map_type} = \
                 ::std::collections::HashMap::with_capacity({});",
                entries.len()
            ),
        )
        .line_per_entry(
            entries.iter().map(|entry| (entry.field.as_str(), &entry.method)),
            entry_template,
            |field, method| {
                let mut args = vec![(*field).to_owned(), target.to_owned()];
                if kind == AccessorKind::Setter {
                    args.push(method.params.first().cloned().unwrap_or_default());
                }
                args.push(method.name.clone());
                args
            },
        )
        .line("    map")
        .line("    }")
        .line("}");

    finished(class, name, joiner)
}

/// Generates the factory artifact bundling both suppliers behind
/// `getters()` and `setters()`.
pub(crate) fn factory(
    class: &ClassDescriptor,
    name: &ArtifactName,
    getter_supplier: &str,
    setter_supplier: &str,
) -> GeneratedArtifact {
    let target = class.name.as_str();
    let mut joiner = LineJoiner::new();
    joiner
        .linef(
            "#[doc = \"Generated supplier factory for `{0}`.\"]",
            &[target],
        )
        .linef("pub struct {0};", &[name.simple.as_str()])
        .line("#[automatically_derived]")
        .linef(
            "impl ::metter::SupplierFactory for {0} {",
            &[name.simple.as_str()],
        )
        .linef("    type Target = {0};", &[target])
        .linef(
            "    fn getters() -> {0} {",
            &[map_type(AccessorKind::Getter, target).as_str()],
        )
        .linef(
            "    <{0} as ::metter::GetterSupplier>::getters()",
            &[getter_supplier],
        )
        .line("    }")
        .linef(
            "    fn setters() -> {0} {",
            &[map_type(AccessorKind::Setter, target).as_str()],
        )
        .linef(
            "    <{0} as ::metter::SetterSupplier>::setters()",
            &[setter_supplier],
        )
        .line("    }")
        .line("}");

    finished(class, name, joiner)
}

fn map_type(kind: AccessorKind, target: &str) -> String {
    let value = match kind {
        AccessorKind::Getter => format!("::metter::Getter<{target}>"),
        AccessorKind::Setter => format!("::metter::Setter<{target}>"),
    };
    format!("::std::collections::HashMap<&'static str, {value}>")
}

/// Seals the artifact, wrapping it in a generated module when the
/// resolved placement differs from the source type's own module.
fn finished(
    class: &ClassDescriptor,
    name: &ArtifactName,
    joiner: LineJoiner,
) -> GeneratedArtifact {
    let body = joiner.finish();
    let text = if name.package == class.package {
        body
    } else {
        let mut wrapper = LineJoiner::new();
        wrapper
            .linef("pub mod {0} {", &[name.package.as_str()])
            .line("use super::*;")
            .line(body.trim_end_matches('\n'))
            .line("}");
        wrapper.finish()
    };
    GeneratedArtifact {
        name: name.clone(),
        text,
    }
}
