// Backend registry — process-wide one-shot binding
//
// Whether a chunked engine is present is decided once per process: the
// first successful `register_backend` call flips the state from
// Unavailable to Available, and the binding is immutable afterwards.
// Callers probe availability through `backend()` / `backend_available()`
// instead of calling into an absent engine.

use once_cell::sync::OnceCell;

use stoat_core::{ChunkedBackend, Error, Result};

static BACKEND: OnceCell<Box<dyn ChunkedBackend>> = OnceCell::new();

/// Bind `backend` as the process-wide chunked engine.
///
/// Fails with [`Error::BackendAlreadyRegistered`] if an engine is already
/// bound; the first successful registration wins for the life of the
/// process.
pub fn register_backend(backend: Box<dyn ChunkedBackend>) -> Result<()> {
    BACKEND.set(backend).map_err(|_| {
        // set() only fails when the cell is populated, so get() is Some here
        let existing = BACKEND
            .get()
            .map(|b| b.name().to_string())
            .unwrap_or_default();
        Error::BackendAlreadyRegistered { existing }
    })
}

/// The bound engine, or `None` when this process has none.
pub fn backend() -> Option<&'static dyn ChunkedBackend> {
    BACKEND.get().map(|b| &**b)
}

/// Whether a chunked engine is bound in this process.
pub fn backend_available() -> bool {
    BACKEND.get().is_some()
}
