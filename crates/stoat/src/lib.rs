//! # Stoat
//!
//! Shape-validated padding and sliding-window views over chunked
//! lazy-array backends.
//!
//! Stoat sits between a labeled-array front end and an optional chunked
//! engine. It forwards pad and window calls to the engine's native
//! operations and papers over two known engine defects: pad results whose
//! shape disagrees with the pad widths, and mean-mode padding that upcasts
//! integer arrays to float.
//!
//! ## Usage
//!
//! ```rust
//! use stoat::prelude::*;
//!
//! # fn demo(array: ArrayRef) -> stoat::Result<()> {
//! // With an engine registered via `register_backend`:
//! let padded = pad(
//!     &array,
//!     &PadWidth::from(vec![[1, 1], [2, 2]]),
//!     PadMode::Constant,
//!     &PadOptions::default(),
//! )?;
//!
//! // The window export is a capability probe, `None` without an engine:
//! if let Some(view) = sliding_window_view() {
//!     let windows = view.apply(&padded, &[3], Some(&[0]))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! | Crate | Purpose |
//! |-------|---------|
//! | `stoat-core` | Shape, DType, PadWidth/PadMode, Error, backend traits |
//! | `stoat` | Pad wrappers, backend registry, window export |
//!
//! ## Modules
//!
//! - [`compat`] — `pad` / `pad_with` and the output-shape validator
//! - [`registry`] — process-wide one-shot engine binding
//! - [`window`] — `sliding_window_view` capability probe

pub mod compat;
pub mod registry;
pub mod window;

/// Re-export core types.
pub use stoat_core::{
    ArrayRef, ChunkedArray, ChunkedBackend, DType, Error, PadMode, PadOptions, PadWidth,
    ReflectType, Result, Shape,
};

pub use compat::{pad, pad_with, validate_pad_output_shape};
pub use registry::{backend, backend_available, register_backend};
pub use window::{sliding_window_view, SlidingWindowView};

/// Everything you need in one import.
pub mod prelude {
    pub use crate::compat::{pad, pad_with, validate_pad_output_shape};
    pub use crate::registry::{backend, backend_available, register_backend};
    pub use crate::window::{sliding_window_view, SlidingWindowView};
    pub use stoat_core::{
        ArrayRef, ChunkedArray, ChunkedBackend, DType, Error, PadMode, PadOptions, PadWidth,
        ReflectType, Result, Shape,
    };
}
