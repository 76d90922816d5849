//! CPython integration: the canonical host lock.
//!
//! [`PythonGil`] maps the release/restore pair onto the interpreter's own
//! thread-state save/restore calls, so a guarded callable runs with the GIL
//! dropped while other Python threads proceed.

use pyo3::ffi;

use crate::guard::ReleaseGuard;
use crate::lock::RuntimeLock;

/// The CPython global interpreter lock.
///
/// `release` must run on a thread holding the GIL; the interpreter treats a
/// violation as a fatal error, and this crate preserves that contract rather
/// than checking it. Nesting release guards on one thread is host-defined
/// and unsupported.
pub struct PythonGil;

impl RuntimeLock for PythonGil {
    type Saved = *mut ffi::PyThreadState;

    fn release() -> Self::Saved {
        unsafe { ffi::PyEval_SaveThread() }
    }

    fn restore(saved: Self::Saved) {
        unsafe { ffi::PyEval_RestoreThread(saved) }
    }
}

/// GIL-released scope:
///
/// ```ignore
/// let _nogil = NoGil::new();
/// // GIL released until the end of the enclosing scope
/// ```
pub type NoGil = ReleaseGuard<PythonGil>;
