//! Cache-blocked column-major DGEMM: `C += alpha * A * B`.
//!
//! Three kernels, each more cache aware than the last:
//!
//! - [`matmul_naive_jki`]: full-matrix reference, no blocking
//! - [`matmul_block`]: updates one rectangular block of C
//! - [`matmul_viewport`]: same block, with the shared inner dimension cut
//!   into fixed-width viewports so the slice of A in use stays in cache
//!
//! All of them skip the column update when `B[k, j]` is exactly zero, and
//! all of them add into C rather than overwrite it. Zero C first if you
//! want a fresh product.
//!
//! Matrices are column-major: element `(i, j)` of an `m`-row matrix is at
//! offset `j * m + i`. Buffers are borrowed through [`MatRef`] and
//! [`MatMut`], which carry the `{rows, cols, ld}` descriptor.
//!
//! ## Usage
//!
//! ```
//! use colgemm::{MatMut, MatRef, multiply};
//!
//! let a = [1.0, 0.0, 0.0, 1.0]; // identity
//! let b = [2.0, 4.0, 3.0, 5.0]; // [[2, 3], [4, 5]]
//! let mut c = [0.0; 4];
//!
//! multiply(
//!     &mut MatMut::new(&mut c, 2, 2)?,
//!     &MatRef::new(&a, 2, 2)?,
//!     &MatRef::new(&b, 2, 2)?,
//!     0.5,
//! )?;
//!
//! assert_eq!(c, [1.0, 2.0, 1.5, 2.5]);
//! # Ok::<(), colgemm::GemmError>(())
//! ```
//!
//! The `multiply*` functions check shapes and ranges and return a
//! [`GemmError`]. The kernels underneath trust their caller: a bad range
//! panics on a slice index instead.
//!
//! ## Splitting work
//!
//! Blocks that don't overlap can be updated concurrently.
//! [`MatMut::split_cols_at`] hands out disjoint column panels of one C
//! buffer, each of which can go to its own thread.

pub mod blocked;
pub mod error;
pub mod kernels;
pub mod matrix;

use log::debug;

pub use blocked::{Block, DEFAULT_VLEN, Viewport, matmul_block, matmul_viewport};
pub use error::{GemmError, Result};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_jki::matmul_naive_jki;
pub use matrix::{MatMut, MatRef, Matrix};

/// Checks that `C (m×n) += A (m×p) * B (p×n)` is well formed and returns
/// `(m, n, p)`.
fn check_operands(
    c: &MatMut<'_>,
    a: &MatRef<'_>,
    b: &MatRef<'_>,
) -> Result<(usize, usize, usize)> {
    for (rows, cols) in [a.size(), b.size(), c.size()] {
        if rows == 0 || cols == 0 {
            return Err(GemmError::EmptyMatrix { rows, cols });
        }
    }

    let (m, p) = a.size();
    let (p2, n) = b.size();
    if p != p2 {
        return Err(GemmError::InnerDimMismatch { m, p, p2, n });
    }
    if c.size() != (m, n) {
        return Err(GemmError::OutputShape {
            expected: (m, n),
            got: c.size(),
        });
    }
    Ok((m, n, p))
}

/// Checked reference multiply: `C[:, start_col..] += A * B[:, start_col..]`.
///
/// Runs [`matmul_naive_jki`] over columns `start_col..n`. Pass
/// `start_col = 0` for the full product.
pub fn multiply_columns(
    c: &mut MatMut<'_>,
    a: &MatRef<'_>,
    b: &MatRef<'_>,
    start_col: usize,
) -> Result<()> {
    let (m, n, p) = check_operands(c, a, b)?;
    Block::new(0..m, start_col..n).validate(m, n)?;

    debug!(
        "reference GEMM: M={}, N={}, P={}, cols={}..{}",
        m, n, p, start_col, n
    );
    matmul_naive_jki(c, a, b, start_col..n);
    Ok(())
}

/// Checked full-matrix `C += alpha * A * B`.
///
/// Uses the viewport kernel over the whole of C with the default viewport
/// width.
pub fn multiply(c: &mut MatMut<'_>, a: &MatRef<'_>, b: &MatRef<'_>, alpha: f64) -> Result<()> {
    let block = Block::full(c.rows(), c.cols());
    multiply_viewport(c, a, b, alpha, &block, Viewport::default())
}

/// Checked sub-block `C[R:E, S:L] += alpha * A[R:E, :] * B[:, S:L]`.
pub fn multiply_block(
    c: &mut MatMut<'_>,
    a: &MatRef<'_>,
    b: &MatRef<'_>,
    alpha: f64,
    block: &Block,
) -> Result<()> {
    let (m, n, p) = check_operands(c, a, b)?;
    block.validate(m, n)?;

    debug!(
        "block GEMM: M={}, N={}, P={}, rows={:?}, cols={:?}, alpha={}",
        m, n, p, block.rows, block.cols, alpha
    );
    matmul_block(c, a, b, alpha, block);
    Ok(())
}

/// Checked viewport-tiled sub-block update. Same result as
/// [`multiply_block`] up to floating-point reassociation.
pub fn multiply_viewport(
    c: &mut MatMut<'_>,
    a: &MatRef<'_>,
    b: &MatRef<'_>,
    alpha: f64,
    block: &Block,
    viewport: Viewport,
) -> Result<()> {
    let (m, n, p) = check_operands(c, a, b)?;
    block.validate(m, n)?;

    debug!(
        "viewport GEMM: M={}, N={}, P={}, rows={:?}, cols={:?}, vlen={}, passes={}, alpha={}",
        m,
        n,
        p,
        block.rows,
        block.cols,
        viewport.width(),
        viewport.chunks(p).len(),
        alpha
    );
    matmul_viewport(c, a, b, alpha, block, viewport);
    Ok(())
}
