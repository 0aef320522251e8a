//! Visibility filtering, module placement, and the collision policy.

use anyhow::{Result, ensure};
use metter::{GetterSupplier, SetterSupplier, getter_supplier, setter_supplier};
use rstest::rstest;

#[derive(Default)]
pub struct Secret {
    value: i32,
}

// Only inherited-visibility accessors: both generated maps stay empty.
#[getter_supplier]
#[setter_supplier]
impl Secret {
    fn get_value(&self) -> i32 {
        self.value
    }

    fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

#[rstest]
fn private_accessors_never_reach_the_maps() -> Result<()> {
    let mut secret = Secret::default();
    secret.set_value(5);
    ensure!(secret.get_value() == 5);

    ensure!(SecretGetterSupplier::getters().is_empty());
    ensure!(SecretSetterSupplier::setters().is_empty());
    Ok(())
}

#[derive(Default)]
pub struct Sample {
    size: u32,
    internal: u32,
}

// Crate-visible accessors are eligible at the default placement, right
// next to the type.
#[getter_supplier]
impl Sample {
    pub(crate) fn get_size(&self) -> u32 {
        self.size
    }

    pub(crate) fn get_internal(&self) -> u32 {
        self.internal
    }
}

#[rstest]
fn crate_visible_accessors_are_eligible_in_place() -> Result<()> {
    let getters = SampleGetterSupplier::getters();
    ensure!(getters.len() == 2, "expected 2 entries, got {}", getters.len());
    Ok(())
}

#[derive(Default)]
pub struct Relocated {
    size: u32,
    internal: u32,
}

// A module override moves the artifact out of the type's module, which
// drops everything but `pub` accessors.
#[getter_supplier(module = "relocated_suppliers")]
impl Relocated {
    pub fn get_size(&self) -> u32 {
        self.size
    }

    pub(crate) fn get_internal(&self) -> u32 {
        self.internal
    }
}

#[rstest]
fn module_override_excludes_crate_visible_accessors() -> Result<()> {
    let relocated = Relocated::default();
    ensure!(relocated.get_internal() == 0);

    let getters = relocated_suppliers::RelocatedGetterSupplier::getters();
    ensure!(getters.contains_key("size"));
    ensure!(
        !getters.contains_key("internal"),
        "crate-visible accessor leaked out of its module"
    );
    Ok(())
}

pub struct Flag {
    enable: bool,
}

// `get_enable` and `is_enable` derive the same field name; the later
// declaration wins.
#[getter_supplier]
impl Flag {
    pub fn get_enable(&self) -> bool {
        !self.enable
    }

    pub fn is_enable(&self) -> bool {
        self.enable
    }
}

#[rstest]
fn later_declaration_wins_the_field_name() -> Result<()> {
    let flag = Flag { enable: true };
    ensure!(!flag.get_enable(), "inverted getter must lose the entry");

    let getters = FlagGetterSupplier::getters();
    ensure!(getters.len() == 1, "collision produced {} entries", getters.len());
    let value = getters["enable"](&flag);
    ensure!(
        value.downcast_ref::<bool>() == Some(&true),
        "earlier declaration was not overridden"
    );
    Ok(())
}
