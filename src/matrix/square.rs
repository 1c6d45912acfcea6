//! Square matrix backed by one flat row-major buffer.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{MatmulError, Result};

/// A dense `n × n` matrix of `i32`, stored row-major in a single `Vec`.
///
/// Entry `(i, j)` lives at `i * n + j`. The buffer length is always
/// exactly `n * n`.
///
/// # Example
///
/// ```
/// use densemul::Matrix;
///
/// let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
///
/// assert_eq!(m.dim(), 2);
/// assert_eq!(m[(1, 0)], 3);
/// assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Matrix {
    n: usize,
    data: Vec<i32>,
}

/// Number of entries in an `n × n` matrix.
///
/// # Panics
///
/// Panics if `n * n` overflows `usize`.
fn area(n: usize) -> usize {
    match n.checked_mul(n) {
        Some(len) => len,
        None => panic!("{}x{} matrix is too large to address", n, n),
    }
}

impl Matrix {
    /// All-zero matrix of dimension `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    pub fn zeros(n: usize) -> Self {
        Matrix {
            n,
            data: vec![0; area(n)],
        }
    }

    /// Identity matrix of dimension `n`.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, |i, j| i32::from(i == j))
    }

    /// Build a matrix by evaluating `f(i, j)` for every entry, row by row.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> i32,
    {
        let mut data = Vec::with_capacity(area(n));
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Matrix { n, data }
    }

    /// Wrap a row-major buffer. Fails unless `data.len() == n * n`.
    pub fn from_vec(n: usize, data: Vec<i32>) -> Result<Self> {
        if n.checked_mul(n) != Some(data.len()) {
            return Err(MatmulError::BufferLength { len: data.len(), n });
        }
        Ok(Matrix { n, data })
    }

    /// Copy a nested row sequence into a flat matrix.
    ///
    /// The dimension is the number of rows; every row must hold exactly
    /// that many entries.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(MatmulError::NotSquare {
                row: i,
                len: row.len(),
                expected: n,
            });
        }
        Ok(Matrix {
            n,
            data: rows.concat(),
        })
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<i32> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim()`.
    pub fn row(&self, i: usize) -> &[i32] {
        assert!(i < self.n, "row {} out of range for {}x{} matrix", i, self.n, self.n);
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // chunks_exact(0) panics, and an empty matrix has no rows anyway.
        self.data.chunks_exact(self.n.max(1)).take(self.n)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    /// Allocate and return `self * rhs`.
    ///
    /// ```
    /// use densemul::Matrix;
    ///
    /// let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    /// let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
    ///
    /// assert_eq!(a.product(&b).unwrap().to_rows(), vec![vec![19, 22], vec![43, 50]]);
    /// ```
    pub fn product(&self, rhs: &Matrix) -> Result<Matrix> {
        let mut out = Matrix::zeros(self.n);
        crate::multiply(self, rhs, &mut out)?;
        Ok(out)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (i, j): (usize, usize)) -> &i32 {
        assert!(
            i < self.n && j < self.n,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.n,
            self.n
        );
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i32 {
        assert!(
            i < self.n && j < self.n,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.n,
            self.n
        );
        &mut self.data[i * self.n + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for v in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}", v)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
