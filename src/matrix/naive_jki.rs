use std::ops::Range;

use crate::kernels::axpy::axpy;
use crate::matrix::view::{MatMut, MatRef};

/// Reference column-major multiply-accumulate using j-k-i loop order.
///
/// Computes `C[:, cols] += A * B[:, cols]` over every row of A. This is the
/// column-major twin of the i-k-j order: the innermost loop walks one
/// column of A and one column of C, both stride 1.
///
/// When `B[k, j]` is exactly zero the whole column update is skipped, which
/// saves M reads of A and M adds into C. The A column is looked up from `k`
/// on every step, so a skipped column never shifts the rows used for the
/// next one.
///
/// No shape checking beyond what slice indexing does. Callers that want
/// errors instead of panics go through [`crate::multiply_columns`].
///
/// # Arguments
///
/// * `c` - Matrix C (m × n), accumulated into
/// * `a` - Matrix A (m × p)
/// * `b` - Matrix B (p × n)
/// * `cols` - Column range `[S, N)` of C and B to update
pub fn matmul_naive_jki(
    c: &mut MatMut<'_>,
    a: &MatRef<'_>,
    b: &MatRef<'_>,
    cols: Range<usize>,
) {
    let p = a.cols();
    for j in cols {
        let b_col = b.col(j);
        let c_col = c.col_mut(j);
        for (k, &beta) in b_col.iter().enumerate().take(p) {
            // zero in B[k,j] does not change C[:,j]
            if beta != 0.0 {
                axpy(c_col, a.col(k), beta);
            }
        }
    }
}
