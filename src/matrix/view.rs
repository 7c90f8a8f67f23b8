//! Borrowed column-major matrix views.
//!
//! A view is a flat `f64` slice plus a `{rows, cols, ld}` descriptor.
//! Element `(i, j)` lives at offset `j * ld + i`. For contiguous storage
//! `ld == rows`; a larger `ld` only shows up on panels produced by
//! [`MatMut::split_cols_at`].

use crate::error::{GemmError, Result};

/// Minimum buffer length that can hold a `rows x cols` matrix with leading
/// dimension `ld`. The last column only needs `rows` elements. `None` if
/// that length does not fit in a `usize`.
fn required_len(rows: usize, cols: usize, ld: usize) -> Option<usize> {
    if rows == 0 || cols == 0 {
        Some(0)
    } else {
        (cols - 1).checked_mul(ld)?.checked_add(rows)
    }
}

fn check_layout(len: usize, rows: usize, cols: usize, ld: usize) -> Result<()> {
    if ld < rows {
        return Err(GemmError::LeadingDim { ld, rows });
    }
    // An overflowing requirement can never be met by a real buffer.
    let needed = required_len(rows, cols, ld).unwrap_or(usize::MAX);
    if len < needed {
        return Err(GemmError::BufferTooSmall { needed, len });
    }
    Ok(())
}

/// Read-only column-major view.
#[derive(Debug, Clone, Copy)]
pub struct MatRef<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a> MatRef<'a> {
    /// Contiguous view, `ld == rows`.
    ///
    /// # Errors
    /// Returns [`GemmError::BufferTooSmall`] if `data` holds fewer than
    /// `rows * cols` elements.
    pub fn new(data: &'a [f64], rows: usize, cols: usize) -> Result<Self> {
        Self::with_ld(data, rows, cols, rows)
    }

    /// Contiguous view over a buffer already known to hold exactly
    /// `rows * cols` elements.
    pub(crate) fn contiguous(data: &'a [f64], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        MatRef {
            data,
            rows,
            cols,
            ld: rows,
        }
    }

    /// View with an explicit leading dimension.
    pub fn with_ld(data: &'a [f64], rows: usize, cols: usize, ld: usize) -> Result<Self> {
        check_layout(data.len(), rows, cols, ld)?;
        Ok(MatRef {
            data,
            rows,
            cols,
            ld,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn ld(&self) -> usize {
        self.ld
    }

    /// Returns `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element `(i, j)`.
    ///
    /// # Panics
    /// Panics if the offset `j * ld + i` is outside the buffer.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[j * self.ld + i]
    }

    /// Column `j` as a `rows`-long slice.
    #[inline]
    pub fn col(&self, j: usize) -> &'a [f64] {
        let start = j * self.ld;
        &self.data[start..start + self.rows]
    }
}

/// Mutable column-major view. Kernels accumulate into this.
#[derive(Debug)]
pub struct MatMut<'a> {
    data: &'a mut [f64],
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a> MatMut<'a> {
    /// Contiguous view, `ld == rows`.
    pub fn new(data: &'a mut [f64], rows: usize, cols: usize) -> Result<Self> {
        Self::with_ld(data, rows, cols, rows)
    }

    pub(crate) fn contiguous(data: &'a mut [f64], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        MatMut {
            data,
            rows,
            cols,
            ld: rows,
        }
    }

    /// View with an explicit leading dimension.
    pub fn with_ld(data: &'a mut [f64], rows: usize, cols: usize, ld: usize) -> Result<Self> {
        check_layout(data.len(), rows, cols, ld)?;
        Ok(MatMut {
            data,
            rows,
            cols,
            ld,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn ld(&self) -> usize {
        self.ld
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn col_mut(&mut self, j: usize) -> &mut [f64] {
        let start = j * self.ld;
        &mut self.data[start..start + self.rows]
    }

    /// Read-only view of the same storage, for inspecting C between
    /// updates without giving up the mutable borrow.
    pub fn view(&self) -> MatRef<'_> {
        MatRef {
            data: &*self.data,
            rows: self.rows,
            cols: self.cols,
            ld: self.ld,
        }
    }

    /// Splits into the column panels `[0, mid)` and `[mid, cols)`.
    ///
    /// The two halves never alias, so they can be updated from different
    /// threads. Column `j` of the right half is column `mid + j` of `self`.
    ///
    /// # Panics
    /// Panics if `mid > cols`.
    pub fn split_cols_at(self, mid: usize) -> (MatMut<'a>, MatMut<'a>) {
        let MatMut {
            data,
            rows,
            cols,
            ld,
        } = self;
        assert!(mid <= cols, "split {} out of 0..={}", mid, cols);
        let at = (mid * ld).min(data.len());
        let (left, right) = data.split_at_mut(at);
        (
            MatMut {
                data: left,
                rows,
                cols: mid,
                ld,
            },
            MatMut {
                data: right,
                rows,
                cols: cols - mid,
                ld,
            },
        )
    }
}
