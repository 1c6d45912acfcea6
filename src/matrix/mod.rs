//! Matrix storage and the i-j-k kernels.
//!
//! `square` holds the flat row-major [`Matrix`] type, `naive_ijk` the
//! kernel that works on its buffer, and `rows` the same loop over nested
//! row sequences together with their shape checks.

pub mod naive_ijk;
pub mod rows;
pub mod square;

pub use square::Matrix;
