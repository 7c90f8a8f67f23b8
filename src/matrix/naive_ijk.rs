use crate::matrix::view::{MatMut, MatRef};

/// Dot-product matrix multiplication using i-j-k loop order.
///
/// The textbook triple loop: every `C[i, j]` gets one full dot product of
/// row `i` of A with column `j` of B, scaled by `alpha`. In column-major
/// storage the row walk over A has stride `ld`, so this is slow. It sums
/// in a different order from every other kernel here, which is exactly
/// what makes it a useful independent oracle.
///
/// No zero skipping, no blocking. Use this as a correctness baseline, not
/// for performance.
///
/// # Arguments
///
/// * `c` - Matrix C (m × n), accumulated into (C += alpha * A * B)
/// * `a` - Matrix A (m × p)
/// * `b` - Matrix B (p × n)
pub fn matmul_naive_ijk(c: &mut MatMut<'_>, a: &MatRef<'_>, b: &MatRef<'_>, alpha: f64) {
    let (m, p) = a.size();
    let n = b.cols();
    for i in 0..m {
        for j in 0..n {
            let b_col = b.col(j);
            let mut sum = 0.0;
            for (k, &bv) in b_col.iter().enumerate().take(p) {
                sum += a.get(i, k) * bv;
            }
            c.col_mut(j)[i] += alpha * sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2x3_times_3x2() {
        // A = [[1, 2, 3], [4, 5, 6]], B = [[7, 8], [9, 10], [11, 12]]
        let a = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let b = [7.0, 9.0, 11.0, 8.0, 10.0, 12.0];
        let mut c = vec![0.0; 4];

        let av = MatRef::new(&a, 2, 3).unwrap();
        let bv = MatRef::new(&b, 3, 2).unwrap();
        let mut cv = MatMut::new(&mut c, 2, 2).unwrap();
        matmul_naive_ijk(&mut cv, &av, &bv, 1.0);

        // [[58, 64], [139, 154]] column by column
        assert_eq!(c, vec![58.0, 139.0, 64.0, 154.0]);
    }

    #[test]
    fn test_alpha_scales_result() {
        let a = [1.0, 0.0, 0.0, 1.0];
        let b = [2.0, 4.0, 3.0, 5.0];
        let mut c = vec![0.0; 4];

        let av = MatRef::new(&a, 2, 2).unwrap();
        let bv = MatRef::new(&b, 2, 2).unwrap();
        let mut cv = MatMut::new(&mut c, 2, 2).unwrap();
        matmul_naive_ijk(&mut cv, &av, &bv, 0.5);

        assert_eq!(c, vec![1.0, 2.0, 1.5, 2.5]);
    }
}
