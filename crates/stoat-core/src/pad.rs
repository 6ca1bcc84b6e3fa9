use std::fmt;

use crate::error::{Error, Result};
use crate::shape::Shape;

// PadWidth — How many elements to add around each axis
//
// Backends accept the width specification in three forms, so we model it as
// a tagged variant instead of sniffing the shape of an untyped argument at
// runtime. The only malformed state the type system cannot rule out is a
// per-axis list whose length disagrees with the array's rank; that is
// checked when the expected output shape is computed.

/// Pad-width specification for a pad operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PadWidth {
    /// Total number of elements added to every axis. How the backend
    /// distributes the total along an axis is backend-defined; the
    /// expected extent of axis `i` is `dims[i] + k`, the scalar
    /// broadcasting over all axes the way a scalar broadcasts in an
    /// elementwise add.
    Uniform(usize),
    /// A `(before, after)` pair applied identically to every axis.
    UniformPair(usize, usize),
    /// One `[before, after]` pair per axis. The length must equal the
    /// array's rank.
    PerAxis(Vec<[usize; 2]>),
}

impl PadWidth {
    /// The output shape a conforming backend must produce when padding an
    /// array of shape `input` with these widths.
    ///
    /// Fails with [`Error::InvalidPadWidth`] if a per-axis list does not
    /// match the rank; a conforming backend will have rejected that input
    /// before its pad ever returned.
    pub fn expected_shape(&self, input: &Shape) -> Result<Shape> {
        let dims = input.dims();
        let out: Vec<usize> = match self {
            PadWidth::Uniform(k) => dims.iter().map(|&d| d + k).collect(),
            PadWidth::UniformPair(before, after) => {
                dims.iter().map(|&d| d + before + after).collect()
            }
            PadWidth::PerAxis(pairs) => {
                if pairs.len() != input.rank() {
                    return Err(Error::InvalidPadWidth {
                        pairs: pairs.len(),
                        rank: input.rank(),
                    });
                }
                dims.iter()
                    .zip(pairs.iter())
                    .map(|(&d, &[b, a])| d + b + a)
                    .collect()
            }
        };
        Ok(Shape::new(out))
    }
}

// Convenient From implementations, mirroring the forms backends accept:
// 1 → Uniform, (1, 2) → UniformPair, vec![[1, 1], [2, 2]] → PerAxis.

impl From<usize> for PadWidth {
    fn from(k: usize) -> Self {
        PadWidth::Uniform(k)
    }
}

impl From<(usize, usize)> for PadWidth {
    fn from((before, after): (usize, usize)) -> Self {
        PadWidth::UniformPair(before, after)
    }
}

impl From<Vec<[usize; 2]>> for PadWidth {
    fn from(pairs: Vec<[usize; 2]>) -> Self {
        PadWidth::PerAxis(pairs)
    }
}

impl From<&[[usize; 2]]> for PadWidth {
    fn from(pairs: &[[usize; 2]]) -> Self {
        PadWidth::PerAxis(pairs.to_vec())
    }
}

/// Pad mode, matching the mode set of the backend's native pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadMode {
    /// Pad with a constant value (`PadOptions::constant_value`, default 0).
    #[default]
    Constant,
    /// Repeat the edge values of each axis.
    Edge,
    /// Ramp linearly between the edge value and `PadOptions::end_values`.
    LinearRamp,
    /// Pad with the maximum along each axis.
    Maximum,
    /// Pad with the mean along each axis.
    Mean,
    /// Pad with the median along each axis.
    Median,
    /// Pad with the minimum along each axis.
    Minimum,
    /// Mirror without repeating the edge element.
    Reflect,
    /// Mirror including the edge element.
    Symmetric,
    /// Wrap around to the opposite edge.
    Wrap,
    /// Extend without initializing the new elements.
    Empty,
}

impl fmt::Display for PadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PadMode::Constant => "constant",
            PadMode::Edge => "edge",
            PadMode::LinearRamp => "linear_ramp",
            PadMode::Maximum => "maximum",
            PadMode::Mean => "mean",
            PadMode::Median => "median",
            PadMode::Minimum => "minimum",
            PadMode::Reflect => "reflect",
            PadMode::Symmetric => "symmetric",
            PadMode::Wrap => "wrap",
            PadMode::Empty => "empty",
        };
        write!(f, "{}", s)
    }
}

/// How [`PadMode::Reflect`] and [`PadMode::Symmetric`] treat the values at
/// the reflection boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflectType {
    /// Reflect values unchanged.
    #[default]
    Even,
    /// Reflect around the edge value (2 * edge - value).
    Odd,
}

/// Mode-specific options forwarded to the backend's pad untouched.
///
/// Unset fields leave the backend's own defaults in effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PadOptions {
    /// Fill value for [`PadMode::Constant`].
    pub constant_value: Option<f64>,
    /// Terminal value for [`PadMode::LinearRamp`].
    pub end_values: Option<f64>,
    /// How many edge elements the statistic modes (`Maximum`, `Mean`,
    /// `Median`, `Minimum`) look at; the whole axis when unset.
    pub stat_length: Option<usize>,
    /// Boundary handling for the mirroring modes.
    pub reflect_type: Option<ReflectType>,
}
