//! Host runtime lock seam.
//!
//! The wrapping machinery never owns the global lock it steps outside of; it
//! only needs a release/restore pair from whichever runtime does. That pair
//! is the [`RuntimeLock`] trait. Two implementations ship with the crate:
//! [`NoopLock`] for hosts that have no global lock at all, and
//! [`EmbeddedLock`] for a runtime embedded in this same process. The CPython
//! GIL lives behind the `python` feature.

use std::cell::Cell;
use std::marker::PhantomData;

use parking_lot::lock_api::RawMutex as _;
use parking_lot::RawMutex;

/// A process-wide lock owned by a host runtime.
///
/// `release` gives up the calling thread's hold and returns the token
/// `restore` needs to take it back; `restore` consumes that token and blocks
/// until the hold is reestablished. Both run on the thread that holds (or is
/// reclaiming) the lock. Hosts whose lock operations can fail treat that
/// failure as fatal to the process; implementations do not attempt recovery.
pub trait RuntimeLock {
    /// Opaque token recording what `restore` needs to reestablish the hold.
    type Saved;

    fn release() -> Self::Saved;
    fn restore(saved: Self::Saved);
}

/// Lock for hosts that have none.
///
/// Keeps the guard abstraction intact when the target runtime has no global
/// lock: release and restore both do nothing.
pub struct NoopLock;

impl RuntimeLock for NoopLock {
    type Saved = ();

    fn release() {}
    fn restore(_: ()) {}
}

static EMBEDDED: RawMutex = RawMutex::INIT;

thread_local! {
    static HELD: Cell<bool> = const { Cell::new(false) };
}

/// Process-wide lock for a runtime embedded in this process.
///
/// The host takes the lock with [`EmbeddedLock::acquire`] before running
/// runtime-managed code on a thread; guarded native calls step outside it
/// and take it back as they return. Release and restore must balance on
/// each thread: releasing without holding — which is what nesting two
/// release guards comes down to — panics.
pub struct EmbeddedLock;

impl EmbeddedLock {
    /// Take the lock for the current thread, blocking until it is free.
    pub fn acquire() -> HostGuard {
        if HELD.get() {
            panic!("embedded runtime lock is already held by this thread");
        }
        EMBEDDED.lock();
        HELD.set(true);
        HostGuard {
            _thread_bound: PhantomData,
        }
    }

    /// Whether the current thread holds the lock.
    pub fn is_held() -> bool {
        HELD.get()
    }
}

/// Host-side hold on [`EmbeddedLock`]; dropping it releases the lock.
pub struct HostGuard {
    _thread_bound: PhantomData<*mut ()>,
}

impl Drop for HostGuard {
    fn drop(&mut self) {
        // Any guarded call that released the lock has restored it by now.
        debug_assert!(HELD.get());
        HELD.set(false);
        unsafe { EMBEDDED.unlock() };
    }
}

impl RuntimeLock for EmbeddedLock {
    type Saved = ();

    fn release() {
        if !HELD.get() {
            panic!("embedded runtime lock released without being held by this thread");
        }
        HELD.set(false);
        unsafe { EMBEDDED.unlock() };
    }

    fn restore(_: ()) {
        EMBEDDED.lock();
        HELD.set(true);
    }
}
