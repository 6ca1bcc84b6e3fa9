#![allow(dead_code)]

// Test doubles for the engine side of the trait boundary: a dense
// in-memory array handle and a small engine with tunable misbehavior.

use std::any::Any;
use std::sync::Arc;

use stoat::{
    ArrayRef, ChunkedArray, ChunkedBackend, DType, Error, PadMode, PadOptions, PadWidth, Result,
    Shape,
};

/// Dense row-major array used as the engine-owned buffer in tests.
pub struct DenseArray {
    pub data: Vec<f64>,
    pub shape: Shape,
    pub dtype: DType,
}

impl DenseArray {
    pub fn new(data: Vec<f64>, shape: impl Into<Shape>, dtype: DType) -> ArrayRef {
        let shape = shape.into();
        assert_eq!(data.len(), shape.elem_count(), "fixture size mismatch");
        Arc::new(DenseArray { data, shape, dtype })
    }

    pub fn from_f64(values: &[f64], shape: impl Into<Shape>) -> ArrayRef {
        Self::new(values.to_vec(), shape, DType::F64)
    }

    pub fn from_i64(values: &[i64], shape: impl Into<Shape>) -> ArrayRef {
        let data = values.iter().map(|&v| v as f64).collect();
        Self::new(data, shape, DType::I64)
    }

    /// Read the values back out of an opaque handle.
    pub fn values(array: &ArrayRef) -> Vec<f64> {
        array
            .as_any()
            .downcast_ref::<DenseArray>()
            .expect("handle was not produced by the mock engine")
            .data
            .clone()
    }
}

impl ChunkedArray for DenseArray {
    fn shape(&self) -> Shape {
        self.shape.clone()
    }

    fn dtype(&self) -> DType {
        self.dtype
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn contiguous_strides(dims: &[usize]) -> Vec<usize> {
    let mut strides = vec![0usize; dims.len()];
    if !dims.is_empty() {
        strides[dims.len() - 1] = 1;
        for i in (0..dims.len() - 1).rev() {
            strides[i] = strides[i + 1] * dims[i + 1];
        }
    }
    strides
}

fn downcast(array: &ArrayRef) -> &DenseArray {
    array
        .as_any()
        .downcast_ref::<DenseArray>()
        .expect("handle was not produced by the mock engine")
}

/// In-memory engine with tunable misbehavior.
#[derive(Default)]
pub struct MockEngine {
    /// Drop one element from the last axis of every pad result,
    /// reproducing the output-shape defect the validator flags.
    pub shape_defect: bool,
}

impl MockEngine {
    /// Per-axis `[before, after]` pairs for a pad call. A scalar width is
    /// the total added per axis; this engine appends all of it after.
    fn resolve_pairs(&self, pad_width: &PadWidth, rank: usize) -> Result<Vec<[usize; 2]>> {
        match pad_width {
            PadWidth::Uniform(k) => Ok(vec![[0, *k]; rank]),
            PadWidth::UniformPair(b, a) => Ok(vec![[*b, *a]; rank]),
            PadWidth::PerAxis(pairs) => {
                if pairs.len() != rank {
                    return Err(Error::InvalidPadWidth {
                        pairs: pairs.len(),
                        rank,
                    });
                }
                Ok(pairs.clone())
            }
        }
    }
}

impl ChunkedBackend for MockEngine {
    fn name(&self) -> &str {
        "mock-engine"
    }

    fn version(&self) -> Option<&str> {
        Some("0.0.0-test")
    }

    fn pad(
        &self,
        array: &ArrayRef,
        pad_width: &PadWidth,
        mode: PadMode,
        opts: &PadOptions,
    ) -> Result<ArrayRef> {
        let input = downcast(array);
        let in_dims = input.shape.dims();
        let rank = in_dims.len();
        let pairs = self.resolve_pairs(pad_width, rank)?;

        let mut out_dims: Vec<usize> = in_dims
            .iter()
            .zip(pairs.iter())
            .map(|(&d, &[b, a])| d + b + a)
            .collect();
        if self.shape_defect && rank > 0 {
            out_dims[rank - 1] -= 1;
        }

        let fill = match mode {
            PadMode::Constant => opts.constant_value.unwrap_or(0.0),
            PadMode::Mean => input.data.iter().sum::<f64>() / input.data.len() as f64,
            _ => 0.0,
        };
        // Mean is computed in floating point, like the real engine.
        let out_dtype = if mode == PadMode::Mean && input.dtype.is_int() {
            DType::F64
        } else {
            input.dtype
        };

        let out_shape = Shape::new(out_dims.clone());
        let mut data = vec![fill; out_shape.elem_count()];
        if !self.shape_defect {
            let in_strides = contiguous_strides(in_dims);
            let out_strides = contiguous_strides(&out_dims);
            for (flat, &v) in input.data.iter().enumerate() {
                let mut rem = flat;
                let mut off = 0;
                for d in 0..rank {
                    let idx = rem / in_strides[d];
                    rem %= in_strides[d];
                    off += (idx + pairs[d][0]) * out_strides[d];
                }
                data[off] = v;
            }
        }

        Ok(DenseArray::new(data, out_shape, out_dtype))
    }

    fn round(&self, array: &ArrayRef) -> Result<ArrayRef> {
        let input = downcast(array);
        let data = input.data.iter().map(|v| v.round()).collect();
        Ok(DenseArray::new(data, input.shape.clone(), input.dtype))
    }

    fn cast(&self, array: &ArrayRef, dtype: DType) -> Result<ArrayRef> {
        let input = downcast(array);
        let data = if dtype.is_int() {
            input.data.iter().map(|v| v.trunc()).collect()
        } else {
            input.data.clone()
        };
        Ok(DenseArray::new(data, input.shape.clone(), dtype))
    }

    fn sliding_window_view(
        &self,
        array: &ArrayRef,
        window_shape: &[usize],
        axes: Option<&[usize]>,
    ) -> Result<ArrayRef> {
        let input = downcast(array);
        let mut out_dims = input.shape.dims().to_vec();
        let windowed: Vec<usize> = match axes {
            Some(axes) => axes.to_vec(),
            None => (0..out_dims.len()).collect(),
        };
        if windowed.len() != window_shape.len() {
            return Err(Error::msg(format!(
                "sliding_window_view: {} window extents for {} axes",
                window_shape.len(),
                windowed.len()
            )));
        }
        for (&axis, &w) in windowed.iter().zip(window_shape.iter()) {
            let d = input.shape.dim(axis)?;
            if w > d {
                return Err(Error::msg(format!(
                    "sliding_window_view: window {} exceeds axis extent {}",
                    w, d
                )));
            }
            out_dims[axis] = d - w + 1;
        }
        out_dims.extend_from_slice(window_shape);

        let out_shape = Shape::new(out_dims);
        let data = vec![0.0; out_shape.elem_count()];
        Ok(DenseArray::new(data, out_shape, input.dtype))
    }
}
