//! Scalar microkernels for the innermost loop of the column-major GEMMs.
//!
//! Every kernel in this crate eventually boils down to "add a scaled column
//! of A into a column of C". That single operation lives here so the three
//! loop nests only differ in how they walk the outer dimensions.
//!
//! Available kernels:
//! - `axpy`: `y += x * coeff` over one column, unrolled by 4

pub mod axpy;
