//! Column update microkernel.

/// Computes `y[i] += x[i] * coeff` for every `i`.
///
/// Unrolled by 4 so the compiler keeps four independent adds in flight.
/// Each element is still updated exactly once with the same operands, so
/// the result is identical to the plain loop.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length.
#[inline]
pub fn axpy(y: &mut [f64], x: &[f64], coeff: f64) {
    assert_eq!(y.len(), x.len(), "axpy: length mismatch");

    let mut y_chunks = y.chunks_exact_mut(4);
    let mut x_chunks = x.chunks_exact(4);
    for (yc, xc) in (&mut y_chunks).zip(&mut x_chunks) {
        yc[0] += xc[0] * coeff;
        yc[1] += xc[1] * coeff;
        yc[2] += xc[2] * coeff;
        yc[3] += xc[3] * coeff;
    }

    // Leftover rows that don't fill a group of 4
    for (yv, &xv) in y_chunks
        .into_remainder()
        .iter_mut()
        .zip(x_chunks.remainder())
    {
        *yv += xv * coeff;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axpy_matches_plain_loop() {
        for len in [0, 1, 3, 4, 5, 8, 11] {
            let x: Vec<f64> = (0..len).map(|i| i as f64 + 0.5).collect();
            let mut y: Vec<f64> = (0..len).map(|i| (i % 3) as f64).collect();
            let mut expected = y.clone();
            for i in 0..len {
                expected[i] += x[i] * 1.25;
            }

            axpy(&mut y, &x, 1.25);

            assert_eq!(y, expected, "len {}", len);
        }
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_axpy_length_mismatch() {
        let mut y = vec![0.0; 3];
        axpy(&mut y, &[1.0, 2.0], 1.0);
    }
}
