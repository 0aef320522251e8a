//! Functional-interface sugar mirroring the shapes of generated
//! accessors.
//!
//! These are optional conveniences for callers holding accessors as
//! values; the generated suppliers do not depend on them. Both traits
//! are blanket-implemented for closures, so any `Fn(&T) -> R` already
//! is a [`GetterMethod`].

use std::sync::OnceLock;

/// A getter held as a value: borrows the target, produces the field.
pub trait GetterMethod<T, R> {
    /// Invokes the getter against `target`.
    fn apply(&self, target: &T) -> R;
}

impl<T, R, F> GetterMethod<T, R> for F
where
    F: Fn(&T) -> R,
{
    fn apply(&self, target: &T) -> R {
        self(target)
    }
}

/// A setter held as a value: borrows the target mutably, consumes the
/// new field value.
pub trait SetterMethod<T, P> {
    /// Invokes the setter against `target` with `value`.
    fn accept(&self, target: &mut T, value: P);
}

impl<T, P, F> SetterMethod<T, P> for F
where
    F: Fn(&mut T, P),
{
    fn accept(&self, target: &mut T, value: P) {
        self(target, value);
    }
}

/// Decorator memoizing the wrapped getter: the first application stores
/// the result, later applications clone it without touching the target
/// again.
pub struct CachedGetterMethod<G, R> {
    getter: G,
    cached: OnceLock<R>,
}

impl<G, R> CachedGetterMethod<G, R> {
    /// Wraps `getter` with an empty cache.
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            cached: OnceLock::new(),
        }
    }
}

impl<T, R, G> GetterMethod<T, R> for CachedGetterMethod<G, R>
where
    G: GetterMethod<T, R>,
    R: Clone,
{
    fn apply(&self, target: &T) -> R {
        self.cached
            .get_or_init(|| {
                tracing::trace!("populating getter cache");
                self.getter.apply(target)
            })
            .clone()
    }
}

/// Decorator binding a getter to one target instance, so callers can
/// apply it without holding the target themselves.
pub struct InstancedGetterMethod<'t, T, G> {
    target: &'t T,
    getter: G,
}

impl<'t, T, G> InstancedGetterMethod<'t, T, G> {
    /// Binds `getter` to `target`.
    pub const fn new(target: &'t T, getter: G) -> Self {
        Self { target, getter }
    }

    /// Invokes the bound getter.
    pub fn apply<R>(&self) -> R
    where
        G: GetterMethod<T, R>,
    {
        self.getter.apply(self.target)
    }
}
