//! Column-major matrix storage, views and unblocked kernels.
//!
//! The unblocked kernels are the correctness baselines the cache-blocked
//! variants in [`crate::blocked`] are checked against.

pub mod dense;
pub mod naive_ijk;
pub mod naive_jki;
pub mod transpose;
pub mod view;

pub use dense::Matrix;
pub use view::{MatMut, MatRef};
