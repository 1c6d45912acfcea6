//! Dense square integer matrix multiplication.
//!
//! One operation, C = A * B, computed with the plain i-j-k triple loop
//! over `i32`. The only thing added on top of the textbook loop is a
//! dimension check: all three matrices must be square with the same
//! dimension, and if they aren't, nothing is written to C.
//!
//! ## Usage
//!
//! ```
//! use densemul::{multiply, Matrix};
//!
//! let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
//! let mut c = Matrix::zeros(2);
//!
//! multiply(&a, &b, &mut c).unwrap();
//! assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
//! ```
//!
//! Raw row-major buffers and nested rows work too:
//!
//! ```
//! use densemul::{multiply_rows, multiply_slices};
//!
//! let mut c = vec![0; 4];
//! multiply_slices(&[1, 2, 3, 4], &[5, 6, 7, 8], &mut c, 2).unwrap();
//! assert_eq!(c, vec![19, 22, 43, 50]);
//!
//! let mut c = vec![vec![0; 2]; 2];
//! multiply_rows(&[vec![1, 2], vec![3, 4]], &[vec![5, 6], vec![7, 8]], &mut c).unwrap();
//! assert_eq!(c, vec![vec![19, 22], vec![43, 50]]);
//! ```
//!
//! ## Overflow
//!
//! Products and sums wrap (two's complement). There is no checked or
//! saturating mode.

pub mod error;
pub mod matrix;

pub use error::{Extent, MatmulError, Operand, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;

use log::{debug, warn};

/// Matrix multiply: C = A * B
///
/// Every entry of `c` is overwritten; its prior contents don't matter.
/// `a` and `b` are only read.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`] if `b` or `c` does not have
/// the same dimension as `a`. In that case `c` is left untouched.
pub fn multiply(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
    let n = a.dim();
    check_dim(Operand::B, b.dim(), n)?;
    check_dim(Operand::C, c.dim(), n)?;

    debug!("multiply {}x{}", n, n);
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    Ok(())
}

/// Same as [`multiply`] but over row-major slices of dimension `n`.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`] if any slice doesn't hold
/// exactly `n * n` entries, or if `n * n` overflows `usize`. Nothing is
/// written to `c` in that case.
pub fn multiply_slices(a: &[i32], b: &[i32], c: &mut [i32], n: usize) -> Result<()> {
    check_len(Operand::A, a.len(), n)?;
    check_len(Operand::B, b.len(), n)?;
    check_len(Operand::C, c.len(), n)?;

    debug!("multiply_slices {}x{}", n, n);
    matmul_naive_ijk(a, b, c, n);
    Ok(())
}

/// Same as [`multiply`] but over nested rows. The dimension is `a.len()`.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`] if any operand is not
/// `n` rows of `n` entries, including when a single row is short or long.
/// Nothing is written to `c` in that case.
pub fn multiply_rows(a: &[Vec<i32>], b: &[Vec<i32>], c: &mut [Vec<i32>]) -> Result<()> {
    let n = a.len();
    for (operand, m) in [(Operand::A, a), (Operand::B, b), (Operand::C, &*c)] {
        matrix::rows::check_square(operand, m, n).inspect_err(|e| warn!("{}", e))?;
    }

    debug!("multiply_rows {}x{}", n, n);
    matrix::rows::matmul_rows_ijk(a, b, c);
    Ok(())
}

fn check_dim(operand: Operand, dim: usize, n: usize) -> Result<()> {
    if dim == n {
        return Ok(());
    }
    let err = MatmulError::DimensionMismatch {
        operand,
        expected: n,
        found: Extent::Square(dim),
    };
    warn!("{}", err);
    Err(err)
}

fn check_len(operand: Operand, len: usize, n: usize) -> Result<()> {
    if n.checked_mul(n) == Some(len) {
        return Ok(());
    }
    let err = MatmulError::DimensionMismatch {
        operand,
        expected: n,
        found: Extent::Flat(len),
    };
    warn!("{}", err);
    Err(err)
}
