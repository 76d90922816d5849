//! Scoped release of a host runtime's global lock around native calls.
//!
//! A host scripting runtime keeps a process-wide lock held while it runs
//! managed code. Wrapping a native callable with [`Guarded`] produces a
//! callable of the identical shape that releases the lock for exactly the
//! duration of each invocation and reacquires it on every exit path, so
//! long-running native work no longer stalls the runtime's other threads:
//!
//! ```
//! use nogil::{Callable, EmbeddedLock, Guarded};
//!
//! fn checksum(data: &[u8]) -> u64 {
//!     data.iter().map(|&b| u64::from(b)).sum()
//! }
//!
//! let _host = EmbeddedLock::acquire();
//! let wrapped = Guarded::<EmbeddedLock, _>::new(checksum);
//! assert_eq!(wrapped.invoke((&[1u8, 2, 3][..],)), 6);
//! ```

// Core modules
pub mod bind;
pub mod guard;
pub mod invoke;
pub mod lock;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used items
pub use bind::{wrap, wrap_with, DefaultPolicy, Registrar};
pub use guard::ReleaseGuard;
pub use invoke::{Callable, Guarded};
pub use lock::{EmbeddedLock, HostGuard, NoopLock, RuntimeLock};

#[cfg(feature = "python")]
pub use python::{NoGil, PythonGil};
