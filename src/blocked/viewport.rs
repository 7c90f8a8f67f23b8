//! Viewport-tiled sub-block GEMM.
//!
//! The sub-block kernel walks the full inner dimension `0..p` for every
//! column of the block, so the whole `rows × p` panel of A streams through
//! cache once per column. Cutting `0..p` into viewports of `vlen` indices
//! and finishing the whole block for one viewport before moving on keeps
//! only a `rows × vlen` slice of A hot at a time. The price is that the C
//! block is revisited once per viewport.
//!
//! If `rows × vlen` doubles fit in L1 the A slice is reused from L1 for
//! every column of the block.

use std::env::{self, VarError};
use std::ops::Range;
use std::str::FromStr;

use crate::blocked::block::{Block, update_panel};
use crate::error::{GemmError, Result};
use crate::matrix::view::{MatMut, MatRef};

/// Viewport width used when none is given.
pub const DEFAULT_VLEN: usize = 30;

/// Environment variable read by [`Viewport::from_env`].
pub const VLEN_ENV: &str = "COLGEMM_VLEN";

/// Width of the inner-dimension chunks used by [`matmul_viewport`].
///
/// Always at least 1. A width of 0 asks for [`DEFAULT_VLEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    width: usize,
}

impl Viewport {
    /// `Viewport::new(0)` is the same as `Viewport::default()`.
    pub fn new(width: usize) -> Self {
        if width == 0 {
            Self::default()
        } else {
            Viewport { width }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Reads the width from `COLGEMM_VLEN`, falling back to the default
    /// when the variable is unset.
    ///
    /// # Errors
    /// Returns [`GemmError::ParseViewport`] if the variable is set but is
    /// not valid unicode or not an integer.
    pub fn from_env() -> Result<Self> {
        Self::from_var(env::var(VLEN_ENV))
    }

    fn from_var(var: std::result::Result<String, VarError>) -> Result<Self> {
        match var {
            Ok(v) => v.parse(),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(e @ VarError::NotUnicode(_)) => {
                Err(GemmError::ParseViewport(format!("{}: {}", VLEN_ENV, e)))
            }
        }
    }

    /// Consecutive, non-overlapping chunks covering `0..p` in increasing
    /// order. Every chunk is `width` long except possibly the last; a width
    /// of `p` or more gives a single chunk.
    pub fn chunks(&self, p: usize) -> Chunks {
        Chunks {
            next: 0,
            end: p,
            width: self.width,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: DEFAULT_VLEN,
        }
    }
}

/// Accepts any integer. Zero and negative widths select [`DEFAULT_VLEN`].
impl FromStr for Viewport {
    type Err = GemmError;

    fn from_str(s: &str) -> Result<Self> {
        let width = s
            .trim()
            .parse::<i128>()
            .map_err(|e| GemmError::ParseViewport(format!("{:?}: {}", s, e)))?;
        if width <= 0 {
            return Ok(Self::default());
        }
        usize::try_from(width)
            .map(Viewport::new)
            .map_err(|e| GemmError::ParseViewport(format!("{:?}: {}", s, e)))
    }
}

/// Iterator returned by [`Viewport::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks {
    next: usize,
    end: usize,
    width: usize,
}

impl Iterator for Chunks {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.next >= self.end {
            return None;
        }
        let start = self.next;
        let stop = start.saturating_add(self.width).min(self.end);
        self.next = stop;
        Some(start..stop)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end.saturating_sub(self.next).div_ceil(self.width);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Chunks {}

/// Viewport-tiled sub-block multiply-accumulate.
///
/// Same result region and semantics as
/// [`matmul_block`](crate::blocked::block::matmul_block):
/// `C[R:E, S:L] += alpha * A[R:E, :] * B[:, S:L]`. The inner dimension is
/// processed one viewport at a time, in increasing order, and each
/// viewport's contribution is added on top of what the previous ones left
/// in C. Products are the same as in one full pass; only the points where
/// partial sums land in C move, so results agree with the sub-block kernel
/// up to floating-point reassociation.
///
/// Terminates after `ceil(p / width)` passes.
///
/// # Arguments
///
/// * `c` - Matrix C (m × n), accumulated into
/// * `a` - Matrix A (m × p)
/// * `b` - Matrix B (p × n)
/// * `alpha` - Scale applied to every A·B contribution
/// * `block` - Region of C to update
/// * `viewport` - Inner-dimension chunk width
pub fn matmul_viewport(
    c: &mut MatMut<'_>,
    a: &MatRef<'_>,
    b: &MatRef<'_>,
    alpha: f64,
    block: &Block,
    viewport: Viewport,
) {
    for inner in viewport.chunks(a.cols()) {
        update_panel(c, a, b, alpha, block, inner);
    }
}
