use crate::shape::Shape;

/// All errors that can occur within stoat.
///
/// This enum captures every failure mode: malformed pad widths, output
/// shapes that disagree with what the pad widths imply, and attempts to use
/// or rebind an absent backend. Using a single error type across the
/// library simplifies error propagation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Per-axis pad widths whose length disagrees with the array's rank.
    /// A conforming backend rejects this before the validator ever runs.
    #[error("invalid value for pad width: {pairs} per-axis pairs for an array of rank {rank}")]
    InvalidPadWidth { pairs: usize, rank: usize },

    /// The backend's pad returned an array whose shape does not match the
    /// shape implied by the input shape and the pad widths. Some backend
    /// releases compute the wrong output shape for non-constant pad modes;
    /// upgrade the backend, switch to `PadMode::Constant`, or materialize
    /// the array eagerly before padding.
    #[error(
        "backend pad returned shape {got}, expected {expected}. Some backend releases \
         compute the wrong output shape for non-constant pad modes; try upgrading the \
         backend, using a different pad mode such as PadMode::Constant, or materializing \
         the array eagerly before padding. \
         See: https://github.com/ginozza/stoat/issues/53"
    )]
    PadOutputMismatch { expected: Shape, got: Shape },

    /// An operation that delegates to the backend was invoked, but no
    /// backend is bound in this process.
    #[error("no chunked-array backend is registered; `{op}` requires one")]
    BackendUnavailable { op: &'static str },

    /// A second backend registration was attempted. The binding is decided
    /// once per process and immutable afterwards.
    #[error("a chunked-array backend is already registered: {existing}")]
    BackendAlreadyRegistered { existing: String },

    /// Axis index out of range for the shape's rank.
    #[error("dimension out of range: dim {dim} for shape with {rank} axes")]
    DimOutOfRange { dim: usize, rank: usize },

    /// Generic message for backend-side failures passed through the trait
    /// boundary.
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an error from any string message.
    pub fn msg(s: impl Into<String>) -> Self {
        Error::Msg(s.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
