//! Scoped release of the host lock.

use std::marker::PhantomData;

use tracing::trace;

use crate::lock::RuntimeLock;

/// Releases the host lock for the extent of one scope.
///
/// Construction gives up the calling thread's hold and records the restore
/// token; dropping the guard takes the hold back, exactly once, on every
/// exit path — including unwinding out of a panic. There are no other
/// operations.
///
/// The guard is meant to live on the stack bracketing one critical section:
///
/// ```
/// use nogil::{EmbeddedLock, ReleaseGuard};
///
/// let _host = EmbeddedLock::acquire();
/// {
///     let _unlocked = ReleaseGuard::<EmbeddedLock>::new();
///     // lock released until the end of this scope
///     assert!(!EmbeddedLock::is_held());
/// }
/// assert!(EmbeddedLock::is_held());
/// ```
///
/// Constructing it requires the calling thread to hold the lock per `L`'s
/// contract. The saved state is thread-affine, so the guard is neither
/// `Send` nor `Sync`. Nesting two guards for the same lock on one thread is
/// unsupported.
#[must_use = "the lock is reacquired as soon as the guard drops"]
pub struct ReleaseGuard<L: RuntimeLock> {
    saved: Option<L::Saved>,
    _thread_bound: PhantomData<*mut ()>,
}

impl<L: RuntimeLock> ReleaseGuard<L> {
    pub fn new() -> Self {
        let saved = L::release();
        trace!(target: "nogil", lock = %std::any::type_name::<L>(), "released");
        Self {
            saved: Some(saved),
            _thread_bound: PhantomData,
        }
    }
}

impl<L: RuntimeLock> Default for ReleaseGuard<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: RuntimeLock> Drop for ReleaseGuard<L> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            L::restore(saved);
            trace!(target: "nogil", lock = %std::any::type_name::<L>(), "reacquired");
        }
    }
}
