use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::dtype::DType;
use crate::error::Result;
use crate::pad::{PadMode, PadOptions, PadWidth};
use crate::shape::Shape;

// ChunkedBackend — Abstraction over the optional chunked/lazy array engine
//
// The backend is an external capability: it may or may not be present in a
// given process, and when present it is bound exactly once. That one-shot
// dynamic binding is why these are trait objects rather than the generic
// `Array<B: Backend>` shape a compute library would use — a process-wide
// registry needs `dyn`.
//
// The trait surface is deliberately narrow: only the operations the
// padding and windowing wrappers actually call. Everything else the engine
// can do (scheduling, chunk layout, materialization) stays behind its own
// API.

/// An opaque handle to a backend-owned array.
///
/// The wrapper layer never reads elements; it only inspects geometry.
/// Backends downcast through [`ChunkedArray::as_any`] to recover their
/// concrete array type on the way back in.
pub trait ChunkedArray: Send + Sync {
    /// The array's shape.
    fn shape(&self) -> Shape;

    /// The array's element dtype.
    fn dtype(&self) -> DType;

    /// Downcast support for backend implementations.
    fn as_any(&self) -> &dyn Any;
}

impl fmt::Debug for dyn ChunkedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkedArray(shape={:?}, dtype={:?})", self.shape(), self.dtype())
    }
}

/// Shared handle to a backend array, as passed through the wrapper layer.
pub type ArrayRef = Arc<dyn ChunkedArray>;

/// The operations a chunked/lazy array engine exposes to the wrapper layer.
pub trait ChunkedBackend: Send + Sync {
    /// A short name identifying the engine (e.g. "chunkwise").
    fn name(&self) -> &str;

    /// The engine's version string, when it reports one. Used in
    /// diagnostics only.
    fn version(&self) -> Option<&str> {
        None
    }

    /// The engine's native pad. `mode` and `opts` are forwarded untouched;
    /// width distribution along each axis is the engine's business.
    fn pad(
        &self,
        array: &ArrayRef,
        pad_width: &PadWidth,
        mode: PadMode,
        opts: &PadOptions,
    ) -> Result<ArrayRef>;

    /// Round every element to the nearest integer, keeping the dtype.
    fn round(&self, array: &ArrayRef) -> Result<ArrayRef>;

    /// Cast to `dtype`.
    fn cast(&self, array: &ArrayRef, dtype: DType) -> Result<ArrayRef>;

    /// The engine's native sliding-window view. `window_shape` gives the
    /// window extent per windowed axis; `axes` selects the windowed axes
    /// (all axes when `None`).
    fn sliding_window_view(
        &self,
        array: &ArrayRef,
        window_shape: &[usize],
        axes: Option<&[usize]>,
    ) -> Result<ArrayRef>;
}

impl fmt::Debug for dyn ChunkedBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version() {
            Some(v) => write!(f, "ChunkedBackend({} {})", self.name(), v),
            None => write!(f, "ChunkedBackend({})", self.name()),
        }
    }
}
