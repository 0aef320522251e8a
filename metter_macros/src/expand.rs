//! Marker expansion: ties parsing, matching, resolution, and generation
//! together.
//!
//! Each expansion is a pure function of the marked item's tokens and the
//! marker arguments. On success the original item is re-emitted
//! unchanged, followed by the generated artifact; on failure nothing of
//! the artifact is emitted at all.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemImpl;

use crate::model::{AccessorKind, ArtifactKind, GeneratedArtifact, MarkerConfig};
use crate::{generate, matcher, parse, resolve};

/// Expands `#[getter_supplier]` / `#[setter_supplier]`.
pub(crate) fn supplier(
    attr: TokenStream,
    item: TokenStream,
    kind: AccessorKind,
) -> syn::Result<TokenStream> {
    let item: ItemImpl = syn::parse2(item)?;
    let args = parse::marker_args(attr, false)?;
    let class = parse::class_descriptor(&item)?;

    // Without a module override the artifact sits right next to the
    // type, which is what keeps crate-visible accessors eligible.
    let same_package = args.config.module.is_none();
    let entries = matcher::match_accessors(&class, kind, same_package);

    let artifact_kind = match kind {
        AccessorKind::Getter => ArtifactKind::Getter,
        AccessorKind::Setter => ArtifactKind::Setter,
    };
    let name = resolve::resolve(&class, artifact_kind, &args.config)
        .map_err(|err| syn::Error::new_spanned(&item.self_ty, err.to_string()))?;

    let artifact = generate::supplier(&class, kind, &name, &entries);
    splice(item, &artifact)
}

/// Expands `#[supplier_factory]`.
pub(crate) fn factory(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let item: ItemImpl = syn::parse2(item)?;
    let args = parse::marker_args(attr, true)?;
    let class = parse::class_descriptor(&item)?;

    let name = resolve::resolve(&class, ArtifactKind::Factory, &args.config)
        .map_err(|err| syn::Error::new_spanned(&item.self_ty, err.to_string()))?;
    let getter_supplier = supplier_name(&item, &class, ArtifactKind::Getter, args.getters)?;
    let setter_supplier = supplier_name(&item, &class, ArtifactKind::Setter, args.setters)?;

    let artifact = generate::factory(&class, &name, &getter_supplier, &setter_supplier);
    splice(item, &artifact)
}

/// The factory defers to suppliers it does not generate itself.
/// Without an override the target resolves like a supplier name
/// (default suffix); an override is accepted as a path, so the factory
/// can reach a supplier relocated with `module = "…"`.
fn supplier_name(
    item: &ItemImpl,
    class: &crate::model::ClassDescriptor,
    kind: ArtifactKind,
    override_name: Option<String>,
) -> syn::Result<String> {
    if let Some(path) = override_name {
        if syn::parse_str::<syn::Path>(&path).is_err() {
            return Err(syn::Error::new_spanned(
                &item.self_ty,
                format!(
                    "invalid supplier path `{path}` for `{}`: expected a Rust path",
                    class.name
                ),
            ));
        }
        return Ok(path);
    }
    resolve::resolve(class, kind, &MarkerConfig::default())
        .map(|name| name.simple)
        .map_err(|err| syn::Error::new_spanned(&item.self_ty, err.to_string()))
}

fn splice(item: ItemImpl, artifact: &GeneratedArtifact) -> syn::Result<TokenStream> {
    let generated: TokenStream = artifact.text.parse().map_err(|err| {
        syn::Error::new_spanned(
            &item.self_ty,
            format!(
                "metter generated invalid code for `{}`: {err}",
                artifact.name.qualified()
            ),
        )
    })?;
    Ok(quote! {
        #item
        #generated
    })
}
