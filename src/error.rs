use std::fmt;

use thiserror::Error;

/// Which argument of a multiply call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Left operand.
    A,
    /// Right operand.
    B,
    /// Output.
    C,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand::A => "A",
            Operand::B => "B",
            Operand::C => "C",
        };
        f.write_str(name)
    }
}

/// The shape actually observed on an operand that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// A well-formed square matrix of this dimension.
    Square(usize),
    /// Nested rows where `row` holds `len` entries instead of `rows`.
    Ragged { rows: usize, row: usize, len: usize },
    /// A flat buffer of `len` entries.
    Flat(usize),
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Extent::Square(n) => write!(f, "{}x{}", n, n),
            Extent::Ragged { rows, row, len } => {
                write!(f, "{} rows with row {} of length {}", rows, row, len)
            }
            Extent::Flat(len) => write!(f, "a buffer of {} entries", len),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    #[error("dimension mismatch: {operand} is {found}, expected {expected}x{expected}")]
    DimensionMismatch {
        operand: Operand,
        expected: usize,
        found: Extent,
    },
    #[error("not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("buffer of {len} entries cannot hold a {n}x{n} matrix")]
    BufferLength { len: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, MatmulError>;
