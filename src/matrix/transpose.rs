/// Converts a row-major buffer into column-major order.
///
/// `src` holds a `rows × cols` matrix row by row; `dst` receives the same
/// logical matrix column by column. Read as raw buffers this is a plain
/// transpose, which is how [`Matrix::from_rows`](crate::Matrix::from_rows)
/// turns nested row data into the storage the kernels expect.
///
/// # Panics
///
/// Panics if either buffer holds fewer than `rows * cols` elements.
///
/// # Example
///
/// ```
/// use colgemm::matrix::transpose::row_to_col_major;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3 matrix, row-major
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];
///
/// row_to_col_major(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,   // column 0
///                      2.0, 5.0,   // column 1
///                      3.0, 6.0]); // column 2
/// ```
pub fn row_to_col_major(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    assert!(src.len() >= rows * cols, "src: expected {} elements", rows * cols);
    assert!(dst.len() >= rows * cols, "dst: expected {} elements", rows * cols);

    if rows == 0 || cols == 0 {
        return;
    }
    for (i, row) in src.chunks_exact(cols).take(rows).enumerate() {
        for (j, &v) in row.iter().enumerate() {
            dst[j * rows + i] = v;
        }
    }
}
