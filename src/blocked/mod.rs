//! Cache-blocked column-major GEMM.
//!
//! Both kernels update one rectangular block of C, `rows × cols`, reading
//! the matching row panel of A and column panel of B. Blocks that don't
//! overlap can be updated independently, which is what lets an outer
//! driver spread tiles over threads or passes.
//!
//! Available implementations:
//! - `block`: whole inner dimension in one pass
//! - `viewport`: inner dimension cut into fixed-width chunks so the A
//!   panel slice in use stays cache resident

pub mod block;
pub mod viewport;

pub use block::{Block, matmul_block};
pub use viewport::{DEFAULT_VLEN, Viewport, matmul_viewport};
