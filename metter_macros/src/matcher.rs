//! Accessor discovery: naming convention, signature shape, and
//! visibility filtering.
//!
//! A getter is `get*` with a `&self` receiver, no parameters, and a
//! non-unit return, or `is*` with a `bool` return; a setter is `set*`
//! with a `&mut self` receiver, exactly one parameter, and a unit
//! return. The prefix must be followed by a new word (an underscore or
//! an uppercase letter), so `getaway` is not a getter. The remainder,
//! snake-cased, becomes the field name: `get_integer` and `getInteger`
//! both derive `integer`.

use heck::ToSnakeCase;

use crate::model::{
    AccessorEntry, AccessorKind, ClassDescriptor, MethodDescriptor, Receiver, Visibility,
};

/// Matches every eligible accessor of `kind` in declaration order.
///
/// `same_package` states whether the artifact will live in the source
/// type's own module; when it will not, only `pub` methods are
/// eligible. When two candidates derive the same field name the later
/// declaration wins, keeping the position of the first discovery.
/// A type with no eligible accessors yields an empty vector, which is
/// not an error: the generated map is simply empty.
pub(crate) fn match_accessors(
    class: &ClassDescriptor,
    kind: AccessorKind,
    same_package: bool,
) -> Vec<AccessorEntry> {
    let mut entries: Vec<AccessorEntry> = Vec::new();
    for method in &class.methods {
        if !visible(method.visibility, same_package) {
            continue;
        }
        let Some(field) = derive_field(method, kind) else {
            continue;
        };
        match entries.iter_mut().find(|entry| entry.field == field) {
            Some(existing) => existing.method = method.clone(),
            None => entries.push(AccessorEntry {
                field,
                method: method.clone(),
                kind,
            }),
        }
    }
    entries
}

fn visible(visibility: Visibility, same_package: bool) -> bool {
    match visibility {
        Visibility::Public => true,
        Visibility::Crate | Visibility::Restricted => same_package,
        Visibility::Private => false,
    }
}

fn derive_field(method: &MethodDescriptor, kind: AccessorKind) -> Option<String> {
    match kind {
        AccessorKind::Getter => {
            if method.receiver != Receiver::Ref || !method.params.is_empty() {
                return None;
            }
            if method.ret.is_some()
                && let Some(rest) = strip_accessor_prefix(&method.name, "get")
            {
                return field_name(rest);
            }
            if method.ret.as_deref() == Some("bool")
                && let Some(rest) = strip_accessor_prefix(&method.name, "is")
            {
                return field_name(rest);
            }
            None
        }
        AccessorKind::Setter => {
            if method.receiver != Receiver::RefMut
                || method.params.len() != 1
                || method.ret.is_some()
            {
                return None;
            }
            strip_accessor_prefix(&method.name, "set").and_then(field_name)
        }
    }
}

/// Strips `prefix` only when the remainder starts a new word.
fn strip_accessor_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(prefix)?;
    let first = rest.chars().next()?;
    (first == '_' || first.is_ascii_uppercase()).then_some(rest)
}

fn field_name(rest: &str) -> Option<String> {
    let trimmed = rest.trim_start_matches('_');
    (!trimmed.is_empty()).then(|| trimmed.to_snake_case())
}
