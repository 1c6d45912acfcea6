//! Nested row-sequence matrices (`[Vec<i32>]`).
//!
//! The nested form makes no promise that rows agree in length, so every
//! operand is checked for rectangularity and squareness before use.

use crate::error::{Extent, MatmulError, Operand, Result};

/// Describe the shape of a nested matrix, or where it stops being square.
fn extent_of(rows: &[Vec<i32>]) -> Extent {
    let n = rows.len();
    match rows.iter().position(|row| row.len() != n) {
        Some(row) => Extent::Ragged {
            rows: n,
            row,
            len: rows[row].len(),
        },
        None => Extent::Square(n),
    }
}

/// Check that `rows` is an `n × n` nested matrix.
pub fn check_square(operand: Operand, rows: &[Vec<i32>], n: usize) -> Result<()> {
    match extent_of(rows) {
        Extent::Square(m) if m == n => Ok(()),
        found => Err(MatmulError::DimensionMismatch {
            operand,
            expected: n,
            found,
        }),
    }
}

/// i-j-k multiplication over nested rows, C = A * B.
///
/// Same arithmetic as [`super::naive_ijk::matmul_naive_ijk`]. Unchecked:
/// callers validate with [`check_square`] first.
pub fn matmul_rows_ijk(a: &[Vec<i32>], b: &[Vec<i32>], c: &mut [Vec<i32>]) {
    let n = a.len();
    for (a_row, c_row) in a.iter().zip(c.iter_mut()) {
        for j in 0..n {
            let mut sum = 0i32;
            for (p, &a_ip) in a_row.iter().enumerate() {
                sum = sum.wrapping_add(a_ip.wrapping_mul(b[p][j]));
            }
            c_row[j] = sum;
        }
    }
}
