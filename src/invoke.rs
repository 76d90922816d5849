//! Signature-adapting guarded invocation.
//!
//! [`Callable`] names the static shape of a callable — its ordered parameter
//! tuple and return type — and is implemented for every `Fn` of arity 0
//! through 8. [`Guarded`] wraps any such callable into a new one with the
//! identical shape whose every invocation runs with the host lock released.
//!
//! There is no explicit signature decomposition step: `Fn` bounds already
//! carry the components, and a method path like `T::method` coerces to the
//! free-function shape with the receiver as explicit first parameter. The
//! receiver case therefore needs no special handling:
//!
//! ```
//! use nogil::{Callable, Guarded, NoopLock};
//!
//! struct Counter {
//!     step: u64,
//! }
//!
//! impl Counter {
//!     fn bump(&self, by: u64) -> u64 {
//!         self.step + by
//!     }
//! }
//!
//! let wrapped = Guarded::<NoopLock, _>::new(Counter::bump);
//! let counter = Counter { step: 3 };
//! assert_eq!(wrapped.invoke((&counter, 4)), counter.bump(4));
//! ```

use std::marker::PhantomData;

use crate::guard::ReleaseGuard;
use crate::lock::RuntimeLock;

/// A callable of statically known shape.
///
/// `Args` is the ordered parameter list as a tuple; `Output` is the return
/// type (`()` for callables returning nothing). Implemented for all
/// `Fn(A1, .., An) -> R` up to eight parameters. Shapes beyond that have no
/// implementation, so wrapping them is a compile-time error:
///
/// ```compile_fail
/// use nogil::{Callable, Guarded, NoopLock};
///
/// fn nine(_: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8) {}
///
/// let wrapped = Guarded::<NoopLock, _>::new(nine);
/// wrapped.invoke((0, 0, 0, 0, 0, 0, 0, 0, 0));
/// ```
pub trait Callable<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Callable<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A1);
impl_callable!(A1, A2);
impl_callable!(A1, A2, A3);
impl_callable!(A1, A2, A3, A4);
impl_callable!(A1, A2, A3, A4, A5);
impl_callable!(A1, A2, A3, A4, A5, A6);
impl_callable!(A1, A2, A3, A4, A5, A6, A7);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8);

/// A callable wrapped to run outside the host lock.
///
/// Owns the original callable and exposes the same `Args`/`Output` shape
/// through [`Callable`]. Each invocation constructs one [`ReleaseGuard`],
/// forwards the arguments verbatim, and returns the result; the guard drops
/// — reacquiring the lock — after the result is produced and before control
/// returns to the caller. A panic in the callable propagates unchanged,
/// with the lock reacquired during unwinding.
pub struct Guarded<L, F> {
    inner: F,
    _lock: PhantomData<fn() -> L>,
}

impl<L: RuntimeLock, F> Guarded<L, F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            _lock: PhantomData,
        }
    }
}

impl<L, F, Args> Callable<Args> for Guarded<L, F>
where
    L: RuntimeLock,
    F: Callable<Args>,
{
    type Output = F::Output;

    fn invoke(&self, args: Args) -> F::Output {
        let _unlocked = ReleaseGuard::<L>::new();
        self.inner.invoke(args)
    }
}
