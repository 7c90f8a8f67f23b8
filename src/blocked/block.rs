//! Sub-block GEMM.

use std::ops::Range;

use crate::error::{GemmError, Result};
use crate::kernels::axpy::axpy;
use crate::matrix::view::{MatMut, MatRef};

/// A rectangular region of C: rows `[R, E)` × columns `[S, L)`.
///
/// The same row range selects the row panel of A and the same column range
/// selects the column panel of B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Block {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Block { rows, cols }
    }

    /// The whole `m × n` matrix.
    pub fn full(m: usize, n: usize) -> Self {
        Block {
            rows: 0..m,
            cols: 0..n,
        }
    }

    /// Checks `0 <= R < E <= m` and `0 <= S < L <= n`.
    pub fn validate(&self, m: usize, n: usize) -> Result<()> {
        let (start, end) = (self.rows.start, self.rows.end);
        if start >= end || end > m {
            return Err(GemmError::RowRange {
                start,
                end,
                rows: m,
            });
        }
        let (start, end) = (self.cols.start, self.cols.end);
        if start >= end || end > n {
            return Err(GemmError::ColRange {
                start,
                end,
                cols: n,
            });
        }
        Ok(())
    }

    /// True if element `(i, j)` lies inside the block.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.rows.contains(&i) && self.cols.contains(&j)
    }
}

/// Sub-block multiply-accumulate: `C[R:E, S:L] += alpha * A[R:E, :] * B[:, S:L]`.
///
/// Loop order is j-k-i. For each `(j, k)` the coefficient `B[k, j] * alpha`
/// is formed once and reused down the whole row range; a zero `B[k, j]`
/// skips the row loop entirely. Nothing outside the block is written.
///
/// Range validity is the caller's job (see [`Block::validate`] and
/// [`crate::multiply_block`]). An out-of-range block panics on a slice
/// index.
///
/// # Arguments
///
/// * `c` - Matrix C (m × n), accumulated into
/// * `a` - Matrix A (m × p)
/// * `b` - Matrix B (p × n)
/// * `alpha` - Scale applied to every A·B contribution
/// * `block` - Region of C to update
pub fn matmul_block(
    c: &mut MatMut<'_>,
    a: &MatRef<'_>,
    b: &MatRef<'_>,
    alpha: f64,
    block: &Block,
) {
    update_panel(c, a, b, alpha, block, 0..a.cols());
}

/// One pass over `block` using only inner indices `inner`.
///
/// Shared by [`matmul_block`] (one pass over `0..p`) and the viewport
/// kernel (one pass per chunk).
pub(crate) fn update_panel(
    c: &mut MatMut<'_>,
    a: &MatRef<'_>,
    b: &MatRef<'_>,
    alpha: f64,
    block: &Block,
    inner: Range<usize>,
) {
    let rows = block.rows.clone();
    for j in block.cols.clone() {
        let b_col = &b.col(j)[inner.clone()];
        let c_col = &mut c.col_mut(j)[rows.clone()];
        for (k, &bkj) in inner.clone().zip(b_col) {
            if bkj != 0.0 {
                let coeff = bkj * alpha;
                axpy(c_col, &a.col(k)[rows.clone()], coeff);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_jki::matmul_naive_jki;

    #[test]
    fn test_validate_accepts_full() {
        assert!(Block::full(3, 4).validate(3, 4).is_ok());
        assert!(Block::new(1..2, 3..4).validate(3, 4).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        assert_eq!(
            Block::new(2..2, 0..1).validate(3, 3),
            Err(GemmError::RowRange {
                start: 2,
                end: 2,
                rows: 3
            })
        );
        assert_eq!(
            Block::new(0..4, 0..1).validate(3, 3),
            Err(GemmError::RowRange {
                start: 0,
                end: 4,
                rows: 3
            })
        );
        assert_eq!(
            Block::new(0..1, 1..5).validate(3, 3),
            Err(GemmError::ColRange {
                start: 1,
                end: 5,
                cols: 3
            })
        );
    }

    #[test]
    fn test_full_block_matches_reference() {
        let (m, n, p) = (7, 5, 6);
        let a: Vec<f64> = (0..m * p).map(|i| (i % 10) as f64).collect();
        let b: Vec<f64> = (0..p * n).map(|i| (i % 7) as f64).collect();
        let mut c_ref = vec![0.0; m * n];
        let mut c_blk = vec![0.0; m * n];

        let av = MatRef::new(&a, m, p).unwrap();
        let bv = MatRef::new(&b, p, n).unwrap();
        matmul_naive_jki(&mut MatMut::new(&mut c_ref, m, n).unwrap(), &av, &bv, 0..n);
        matmul_block(
            &mut MatMut::new(&mut c_blk, m, n).unwrap(),
            &av,
            &bv,
            1.0,
            &Block::full(m, n),
        );

        // Integer-valued operands, so the sums are exact
        assert_eq!(c_ref, c_blk);
    }

    #[test]
    fn test_only_block_is_written() {
        let (m, n, p) = (4, 4, 3);
        let a = vec![1.0; m * p];
        let b = vec![1.0; p * n];
        let mut c = vec![0.0; m * n];
        let block = Block::new(1..3, 2..4);

        matmul_block(
            &mut MatMut::new(&mut c, m, n).unwrap(),
            &MatRef::new(&a, m, p).unwrap(),
            &MatRef::new(&b, p, n).unwrap(),
            2.0,
            &block,
        );

        for j in 0..n {
            for i in 0..m {
                let expected = if block.contains(i, j) { 6.0 } else { 0.0 };
                assert_eq!(c[j * m + i], expected, "C[{}, {}]", i, j);
            }
        }
    }
}
