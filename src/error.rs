use thiserror::Error;

/// Shape and range errors reported by the checked entry points.
///
/// The kernels themselves never return these. They trust their caller and
/// panic on an out-of-bounds slice index instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GemmError {
    #[error("inner dimension mismatch: [{m}x{p}] * [{p2}x{n}]")]
    InnerDimMismatch {
        m: usize,
        p: usize,
        p2: usize,
        n: usize,
    },
    #[error("output shape mismatch: expected {expected:?}, got {got:?}")]
    OutputShape {
        expected: (usize, usize),
        got: (usize, usize),
    },
    #[error("empty matrix: {rows}x{cols}")]
    EmptyMatrix { rows: usize, cols: usize },
    #[error("buffer too small: need {needed} elements, got {len}")]
    BufferTooSmall { needed: usize, len: usize },
    #[error("leading dimension {ld} is smaller than row count {rows}")]
    LeadingDim { ld: usize, rows: usize },
    #[error("row range {start}..{end} is empty or outside 0..{rows}")]
    RowRange {
        start: usize,
        end: usize,
        rows: usize,
    },
    #[error("column range {start}..{end} is empty or outside 0..{cols}")]
    ColRange {
        start: usize,
        end: usize,
        cols: usize,
    },
    #[error("invalid viewport length: {0}")]
    ParseViewport(String),
}

pub type Result<T> = std::result::Result<T, GemmError>;
