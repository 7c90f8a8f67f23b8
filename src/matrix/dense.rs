use std::fmt;

use crate::blocked::{Block, Viewport};
use crate::error::{GemmError, Result};
use crate::matrix::transpose::row_to_col_major;
use crate::matrix::view::{MatMut, MatRef};

/// Owned column-major `f64` matrix.
///
/// A thin owner around a `Vec<f64>` so tests, benchmarks and callers that
/// don't manage their own buffers have something to hand the kernels.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::with_value(rows, cols, 0.0)
    }

    /// `rows × cols` matrix with every element set to `value`.
    pub fn with_value(rows: usize, cols: usize, value: f64) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Square `n × n` matrix with `value` on the diagonal.
    pub fn diagonal(n: usize, value: f64) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = value;
        }
        m
    }

    pub fn identity(n: usize) -> Self {
        Self::diagonal(n, 1.0)
    }

    /// Wraps column-major `data`.
    ///
    /// # Errors
    /// Returns [`GemmError::BufferTooSmall`] unless `data.len() == rows * cols`.
    pub fn from_column_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let needed = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if data.len() != needed {
            return Err(GemmError::BufferTooSmall {
                needed,
                len: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Builds a matrix from row-major nested data.
    ///
    /// # Errors
    /// Returns [`GemmError::OutputShape`] if the rows are ragged.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());

        let mut flat = Vec::with_capacity(nrows * ncols);
        for r in rows {
            let r = r.as_ref();
            if r.len() != ncols {
                return Err(GemmError::OutputShape {
                    expected: (1, ncols),
                    got: (1, r.len()),
                });
            }
            flat.extend_from_slice(r);
        }

        let mut data = vec![0.0; nrows * ncols];
        row_to_col_major(&flat, &mut data, nrows, ncols);
        Ok(Matrix {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element `(i, j)`.
    ///
    /// # Panics
    /// Panics if `(i, j)` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "({}, {}) out of bounds", i, j);
        self.data[j * self.rows + i]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.rows && j < self.cols, "({}, {}) out of bounds", i, j);
        self.data[j * self.rows + i] = value;
    }

    /// Column-major element storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn view(&self) -> MatRef<'_> {
        MatRef::contiguous(&self.data, self.rows, self.cols)
    }

    pub fn view_mut(&mut self) -> MatMut<'_> {
        MatMut::contiguous(&mut self.data, self.rows, self.cols)
    }

    /// Fresh product `self * other`.
    ///
    /// # Errors
    /// Returns [`GemmError::InnerDimMismatch`] if `self.cols() != other.rows()`,
    /// or [`GemmError::EmptyMatrix`] for a zero-sized operand.
    pub fn times(&self, other: &Matrix) -> Result<Matrix> {
        let mut c = Matrix::zeros(self.rows, other.cols);
        c.mult_add(1.0, self, other)?;
        Ok(c)
    }

    /// Multiplies every element by `f` in place.
    pub fn scale(&mut self, f: f64) {
        for v in &mut self.data {
            *v *= f;
        }
    }

    /// Elementwise `self + other` as a new matrix.
    ///
    /// # Errors
    /// Returns [`GemmError::OutputShape`] if the sizes differ.
    pub fn plus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |x, y| x + y)
    }

    /// Elementwise `self - other` as a new matrix.
    ///
    /// # Errors
    /// Returns [`GemmError::OutputShape`] if the sizes differ.
    pub fn minus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |x, y| x - y)
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        if self.size() != other.size() {
            return Err(GemmError::OutputShape {
                expected: self.size(),
                got: other.size(),
            });
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&x, &y)| f(x, y))
                .collect(),
        })
    }

    /// In-place `self += alpha * a * b`.
    pub fn mult_add(&mut self, alpha: f64, a: &Matrix, b: &Matrix) -> Result<()> {
        let block = Block::full(self.rows, self.cols);
        crate::multiply_viewport(
            &mut self.view_mut(),
            &a.view(),
            &b.view(),
            alpha,
            &block,
            Viewport::default(),
        )
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[j * self.rows + i])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
