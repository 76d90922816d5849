//! Binding seam: from a wrapped callable to an externally invocable entry.
//!
//! Registering an entry point with the host runtime — and converting values
//! across its boundary — is the host binding layer's job, reached through
//! [`Registrar`]. This module only builds the guarded callable and hands it
//! over, with the host's calling-convention policy passed through unchanged.

use crate::invoke::{Callable, Guarded};
use crate::lock::RuntimeLock;

/// Policy for hosts that do not distinguish calling conventions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultPolicy;

/// Host binding layer for callables of one signature.
///
/// `register` turns a [`Callable`] plus a policy value into whatever the
/// host considers an externally invocable entry point. The policy is opaque
/// to this crate and reaches the host exactly as the caller supplied it.
pub trait Registrar<Args, Output> {
    type Policy: Default;
    type Entry;

    fn register<C>(&mut self, callable: C, policy: Self::Policy) -> Self::Entry
    where
        C: Callable<Args, Output = Output> + 'static;
}

/// Wrap `callable` so each invocation runs with `L` released, and register
/// the result under the host's default policy.
///
/// The registered entry has the identical calling shape as the original;
/// callers of the entry observe no difference beyond the lock being
/// released for the call's duration.
///
/// ```
/// use nogil::{wrap, Callable, DefaultPolicy, NoopLock, Registrar};
///
/// // Binding layer holding unary integer entry points.
/// #[derive(Default)]
/// struct UnaryTable {
///     entries: Vec<Box<dyn Fn(i64) -> i64>>,
/// }
///
/// impl Registrar<(i64,), i64> for UnaryTable {
///     type Policy = DefaultPolicy;
///     type Entry = usize;
///
///     fn register<C>(&mut self, callable: C, _policy: DefaultPolicy) -> usize
///     where
///         C: Callable<(i64,), Output = i64> + 'static,
///     {
///         self.entries.push(Box::new(move |x| callable.invoke((x,))));
///         self.entries.len() - 1
///     }
/// }
///
/// let mut table = UnaryTable::default();
/// let slot = wrap::<NoopLock, _, _, _, _>(&mut table, |x: i64| x * 2);
/// assert_eq!(table.entries[slot](21), 42);
/// ```
pub fn wrap<L, R, F, Args, Output>(registrar: &mut R, callable: F) -> R::Entry
where
    L: RuntimeLock,
    R: Registrar<Args, Output>,
    Guarded<L, F>: Callable<Args, Output = Output> + 'static,
{
    wrap_with::<L, R, F, Args, Output>(registrar, callable, R::Policy::default())
}

/// [`wrap`], with an explicit calling-convention policy.
pub fn wrap_with<L, R, F, Args, Output>(
    registrar: &mut R,
    callable: F,
    policy: R::Policy,
) -> R::Entry
where
    L: RuntimeLock,
    R: Registrar<Args, Output>,
    Guarded<L, F>: Callable<Args, Output = Output> + 'static,
{
    registrar.register(Guarded::new(callable), policy)
}
