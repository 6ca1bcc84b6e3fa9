//! # stoat-core
//!
//! Vocabulary types and the backend trait boundary for stoat.
//!
//! This crate provides:
//! - [`Shape`] — n-dimensional axis extents
//! - [`DType`] — element data types (F32, F64, I32, I64, U8, U32)
//! - [`PadWidth`] / [`PadMode`] / [`PadOptions`] — pad specification
//! - [`ChunkedBackend`] / [`ChunkedArray`] — abstraction over the optional
//!   chunked/lazy array engine
//! - [`Error`] / [`Result`] — the crate-wide error type

pub mod backend;
pub mod dtype;
pub mod error;
pub mod pad;
pub mod shape;

pub use backend::{ArrayRef, ChunkedArray, ChunkedBackend};
pub use dtype::DType;
pub use error::{Error, Result};
pub use pad::{PadMode, PadOptions, PadWidth, ReflectType};
pub use shape::Shape;
