//! Parses marked impl blocks and marker arguments into the descriptor
//! model.
//!
//! Everything `syn`-specific lives here; the matcher, resolver, and
//! generator only ever see the plain descriptors from [`crate::model`].

use proc_macro2::TokenStream;
use quote::quote;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, LitStr, ReturnType};

use crate::model::{ClassDescriptor, MarkerConfig, MethodDescriptor, Receiver, Visibility};

/// Arguments accepted by the marker attributes.
#[derive(Default)]
pub(crate) struct MarkerArgs {
    pub config: MarkerConfig,
    /// Factory only: name of the getter supplier to defer to.
    pub getters: Option<String>,
    /// Factory only: name of the setter supplier to defer to.
    pub setters: Option<String>,
}

/// Parses `name = "…"`, `module = "…"` and, for the factory marker,
/// `getters = "…"` / `setters = "…"`. Unknown keys are rejected so typos
/// surface at the marker rather than as a missing artifact.
pub(crate) fn marker_args(attr: TokenStream, factory: bool) -> syn::Result<MarkerArgs> {
    let mut args = MarkerArgs::default();
    if attr.is_empty() {
        return Ok(args);
    }
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            args.config.name = Some(lit_str(&meta)?);
            Ok(())
        } else if meta.path.is_ident("module") {
            args.config.module = Some(lit_str(&meta)?);
            Ok(())
        } else if factory && meta.path.is_ident("getters") {
            args.getters = Some(lit_str(&meta)?);
            Ok(())
        } else if factory && meta.path.is_ident("setters") {
            args.setters = Some(lit_str(&meta)?);
            Ok(())
        } else {
            Err(meta.error("unknown metter marker argument"))
        }
    });
    syn::parse::Parser::parse2(parser, attr)?;
    Ok(args)
}

fn lit_str(meta: &syn::meta::ParseNestedMeta) -> syn::Result<String> {
    meta.value()?.parse::<LitStr>().map(|lit| lit.value())
}

/// Builds the descriptor for a marked impl block.
///
/// The marker only makes sense on an inherent impl of a plain,
/// non-generic type; anything else is a configuration error spanned to
/// the offending tokens.
pub(crate) fn class_descriptor(item: &ItemImpl) -> syn::Result<ClassDescriptor> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "metter markers apply to inherent impl blocks, not trait impls",
        ));
    }
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "metter markers do not support generic types",
        ));
    }
    let name = match item.self_ty.as_ref() {
        syn::Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .filter(|segment| segment.arguments.is_none())
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
    .ok_or_else(|| {
        syn::Error::new_spanned(
            &item.self_ty,
            "metter markers apply to named, non-generic types",
        )
    })?;

    let methods = item
        .items
        .iter()
        .filter_map(|impl_item| match impl_item {
            ImplItem::Fn(method) => method_descriptor(method),
            _ => None,
        })
        .collect();

    Ok(ClassDescriptor {
        name,
        // The expansion site is the source type's own module, so the
        // module path is irrelevant here; it only matters once a module
        // override relocates the artifact.
        package: String::new(),
        methods,
    })
}

/// Instance methods only; associated functions and `self`-by-value
/// methods are never accessor candidates.
fn method_descriptor(method: &ImplItemFn) -> Option<MethodDescriptor> {
    let receiver = match method.sig.receiver() {
        Some(receiver) if receiver.reference.is_some() => {
            if receiver.mutability.is_some() {
                Receiver::RefMut
            } else {
                Receiver::Ref
            }
        }
        _ => return None,
    };

    let params = method
        .sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Typed(arg) => {
                let ty = &arg.ty;
                Some(quote!(#ty).to_string())
            }
            FnArg::Receiver(_) => None,
        })
        .collect();

    let ret = match &method.sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => {
            let rendered = quote!(#ty).to_string();
            (rendered != "()").then_some(rendered)
        }
    };

    let visibility = match &method.vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(restricted) => {
            if restricted.path.is_ident("crate") {
                Visibility::Crate
            } else {
                Visibility::Restricted
            }
        }
        syn::Visibility::Inherited => Visibility::Private,
    };

    Some(MethodDescriptor {
        name: method.sig.ident.to_string(),
        params,
        ret,
        visibility,
        receiver,
    })
}

#[cfg(test)]
mod tests {
    use super::{class_descriptor, marker_args};
    use crate::model::{Receiver, Visibility};
    use anyhow::{Result, anyhow, ensure};
    use quote::quote;
    use rstest::rstest;
    use syn::{ItemImpl, parse_quote};

    #[rstest]
    fn collects_instance_methods_in_declaration_order() -> Result<()> {
        let item: ItemImpl = parse_quote! {
            impl Custom {
                pub fn get_integer(&self) -> i32 { self.integer }
                pub(crate) fn set_integer(&mut self, integer: i32) { self.integer = integer; }
                fn helper(&self) -> i32 { 0 }
                pub fn of(integer: i32) -> Self { Self { integer } }
                pub fn into_inner(self) -> i32 { self.integer }
            }
        };
        let class = class_descriptor(&item)?;
        ensure!(class.name == "Custom");
        let names: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
        ensure!(
            names == ["get_integer", "set_integer", "helper"],
            "got {names:?}"
        );
        ensure!(class.methods[0].receiver == Receiver::Ref);
        ensure!(class.methods[0].ret.as_deref() == Some("i32"));
        ensure!(class.methods[1].receiver == Receiver::RefMut);
        ensure!(class.methods[1].params == ["i32"]);
        ensure!(class.methods[1].visibility == Visibility::Crate);
        ensure!(class.methods[2].visibility == Visibility::Private);
        Ok(())
    }

    #[rstest]
    fn unit_returns_normalise_to_none() -> Result<()> {
        let item: ItemImpl = parse_quote! {
            impl Custom {
                pub fn set_integer(&mut self, integer: i32) -> () { self.integer = integer; }
            }
        };
        let class = class_descriptor(&item)?;
        ensure!(class.methods[0].ret.is_none(), "explicit unit not normalised");
        Ok(())
    }

    #[rstest]
    #[case::trait_impl(parse_quote! { impl Clone for Custom { fn clone(&self) -> Self { Self } } })]
    #[case::generic(parse_quote! { impl<T> Holder<T> { fn get_value(&self) -> T { self.value } } })]
    #[case::reference(parse_quote! { impl &Custom { fn get_integer(&self) -> i32 { 0 } } })]
    fn non_class_targets_are_configuration_errors(#[case] item: ItemImpl) -> Result<()> {
        ensure!(
            class_descriptor(&item).is_err(),
            "marker accepted a non-class element"
        );
        Ok(())
    }

    #[rstest]
    fn marker_args_parse_overrides() -> Result<()> {
        let args = marker_args(quote! { name = "CustomAccessors", module = "suppliers" }, false)?;
        ensure!(args.config.name.as_deref() == Some("CustomAccessors"));
        ensure!(args.config.module.as_deref() == Some("suppliers"));
        Ok(())
    }

    #[rstest]
    fn factory_only_keys_are_rejected_on_suppliers() -> Result<()> {
        let err = marker_args(quote! { getters = "CustomGetters" }, false)
            .err()
            .ok_or_else(|| anyhow!("supplier marker accepted a factory key"))?;
        ensure!(err.to_string().contains("unknown metter marker argument"));
        Ok(())
    }

    #[rstest]
    fn factory_keys_parse_on_the_factory_marker() -> Result<()> {
        let args = marker_args(
            quote! { getters = "CustomGetters", setters = "CustomSetters" },
            true,
        )?;
        ensure!(args.getters.as_deref() == Some("CustomGetters"));
        ensure!(args.setters.as_deref() == Some("CustomSetters"));
        Ok(())
    }
}
