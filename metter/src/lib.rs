//! Compile-time accessor maps for Rust types.
//!
//! Marking an inherent impl block with [`getter_supplier`] or
//! [`setter_supplier`] generates a companion type whose map pairs each
//! field name with a function invoking the matching accessor, so a
//! field's getter or setter can be looked up by name without any runtime
//! reflection. The macros themselves live in the companion
//! `metter_macros` crate; this crate defines the traits the generated
//! code implements and the runtime support it calls into.
//!
//! ```
//! use metter::{GetterSupplier, getter_supplier};
//!
//! pub struct Person {
//!     age: u32,
//! }
//!
//! #[getter_supplier]
//! impl Person {
//!     pub fn get_age(&self) -> u32 {
//!         self.age
//!     }
//! }
//!
//! let getters = PersonGetterSupplier::getters();
//! let person = Person { age: 42 };
//! let value = getters["age"](&person);
//! assert_eq!(value.downcast_ref::<u32>(), Some(&42));
//! ```

pub use metter_macros::{getter_supplier, setter_supplier, supplier_factory};

mod error;
mod method;

pub use error::MetterError;
pub use method::{CachedGetterMethod, GetterMethod, InstancedGetterMethod, SetterMethod};

use std::any::Any;
use std::collections::HashMap;

/// A generated getter: borrows the target and returns the field value
/// boxed. Getters must therefore return owned, `'static` values.
pub type Getter<T> = fn(&T) -> Box<dyn Any>;

/// A generated setter: downcasts the boxed value to the setter's
/// parameter type and forwards it, reporting a
/// [`MetterError::TypeMismatch`] when the downcast fails.
pub type Setter<T> = fn(&mut T, Box<dyn Any>) -> Result<(), MetterError>;

/// Implemented by generated `<Type>GetterSupplier` companions.
pub trait GetterSupplier {
    /// The type whose accessors the map exposes.
    type Target;

    /// Builds the getter map, keyed by derived field name. Entries
    /// appear in declaration order of the matched methods; a type with
    /// no eligible getters yields an empty map.
    fn getters() -> HashMap<&'static str, Getter<Self::Target>>;
}

/// Implemented by generated `<Type>SetterSupplier` companions.
pub trait SetterSupplier {
    /// The type whose accessors the map exposes.
    type Target;

    /// Builds the setter map, keyed by derived field name.
    fn setters() -> HashMap<&'static str, Setter<Self::Target>>;
}

/// Implemented by generated `<Type>SupplierFactory` companions, which
/// bundle a getter and a setter supplier behind one type.
pub trait SupplierFactory {
    /// The type whose accessors the maps expose.
    type Target;

    /// Defers to the corresponding getter supplier.
    fn getters() -> HashMap<&'static str, Getter<Self::Target>>;

    /// Defers to the corresponding setter supplier.
    fn setters() -> HashMap<&'static str, Setter<Self::Target>>;
}
