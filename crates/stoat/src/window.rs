// Sliding-window view — re-export of the engine's own entry point
//
// The engine's sliding-window view is only reachable when an engine is
// bound, so the export is a capability probe: `Some(handle)` wrapping the
// bound engine's entry point, or `None` as the absent marker. Callers
// branch on the `Option` instead of dereferencing an absent binding.

use stoat_core::{ArrayRef, ChunkedBackend, Result};

use crate::registry;

/// Handle to the bound engine's sliding-window-view entry point.
#[derive(Clone, Copy)]
pub struct SlidingWindowView {
    backend: &'static dyn ChunkedBackend,
}

impl SlidingWindowView {
    /// Build the windowed view, with the engine's own signature and
    /// semantics: `window_shape` gives the window extent per windowed
    /// axis, `axes` selects the windowed axes (all axes when `None`).
    pub fn apply(
        &self,
        array: &ArrayRef,
        window_shape: &[usize],
        axes: Option<&[usize]>,
    ) -> Result<ArrayRef> {
        self.backend.sliding_window_view(array, window_shape, axes)
    }

    /// Name of the engine backing this handle.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

/// The engine's sliding-window view, or `None` when no engine is bound in
/// this process.
pub fn sliding_window_view() -> Option<SlidingWindowView> {
    registry::backend().map(|backend| SlidingWindowView { backend })
}
