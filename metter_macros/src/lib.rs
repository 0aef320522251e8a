//! Procedural macros for `metter`.
//!
//! The marker attributes scan an inherent impl block for methods that
//! follow the getter/setter naming convention and generate companion
//! supplier types exposing those accessors as lookup maps keyed by
//! field name. Discovery happens entirely during expansion; nothing is
//! reflected over at runtime.
//!
//! Users normally reach these through the `metter` crate, which
//! re-exports the attributes next to the traits the generated code
//! implements.

use proc_macro::TokenStream;

mod emit;
mod expand;
mod generate;
mod matcher;
mod model;
mod parse;
mod resolve;

use model::AccessorKind;

/// Generates `<Type>GetterSupplier`, a `metter::GetterSupplier` whose
/// map pairs each derived field name with a function invoking the
/// matching getter.
///
/// Accepted arguments: `name = "…"` replaces the generated type's name;
/// `module = "…"` places the artifact in a generated module, in which
/// case only `pub` accessors remain eligible. At most one marker may
/// target a given module name per scope.
///
/// ```ignore
/// #[metter::getter_supplier]
/// impl Person {
///     pub fn get_age(&self) -> u32 { self.age }
/// }
///
/// let getters = PersonGetterSupplier::getters();
/// ```
#[proc_macro_attribute]
pub fn getter_supplier(attr: TokenStream, item: TokenStream) -> TokenStream {
    run(attr, item, |attr, item| {
        expand::supplier(attr, item, AccessorKind::Getter)
    })
}

/// Generates `<Type>SetterSupplier`, a `metter::SetterSupplier` whose
/// map pairs each derived field name with a function forwarding a boxed
/// value to the matching setter.
///
/// Accepts the same `name` / `module` arguments as
/// [`macro@getter_supplier`].
#[proc_macro_attribute]
pub fn setter_supplier(attr: TokenStream, item: TokenStream) -> TokenStream {
    run(attr, item, |attr, item| {
        expand::supplier(attr, item, AccessorKind::Setter)
    })
}

/// Generates `<Type>SupplierFactory`, bundling the getter and setter
/// suppliers behind `getters()` and `setters()`.
///
/// The factory does not generate the suppliers; mark the impl block
/// with [`macro@getter_supplier`] and [`macro@setter_supplier`] as
/// well, or point the factory at custom suppliers via `getters = "…"` /
/// `setters = "…"`. Both accept a path, so a supplier relocated with
/// `module = "…"` can still be bundled
/// (`getters = "relocated::CustomGetterSupplier"`).
#[proc_macro_attribute]
pub fn supplier_factory(attr: TokenStream, item: TokenStream) -> TokenStream {
    run(attr, item, expand::factory)
}

/// Runs an expansion, converting failures into a compile diagnostic
/// while re-emitting the marked item so downstream code keeps its
/// definitions.
fn run(
    attr: TokenStream,
    item: TokenStream,
    expansion: impl FnOnce(
        proc_macro2::TokenStream,
        proc_macro2::TokenStream,
    ) -> syn::Result<proc_macro2::TokenStream>,
) -> TokenStream {
    let item2: proc_macro2::TokenStream = item.into();
    match expansion(attr.into(), item2.clone()) {
        Ok(tokens) => tokens.into(),
        Err(err) => {
            let diagnostic = err.to_compile_error();
            quote::quote! {
                #item2
                #diagnostic
            }
            .into()
        }
    }
}
