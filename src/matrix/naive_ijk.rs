/// Square matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop: for each output cell `(i, j)` the
/// inner loop walks row `i` of A and column `j` of B, accumulating the dot
/// product from zero in increasing `p`. B is read with stride `n`, so this
/// is not cache friendly, but every output cell is written exactly once.
///
/// Arithmetic wraps on overflow (two's complement), so debug and release
/// builds produce the same bits.
///
/// No shape checks happen here beyond slice bounds. Use [`crate::multiply`]
/// or [`crate::multiply_slices`] for validated entry points.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten (C = A * B)
/// * `n` - Dimension of all three matrices
///
/// # Panics
///
/// Panics if any slice holds fewer than `n * n` entries.
pub fn matmul_naive_ijk(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let mut sum = 0i32;
            for (p, &a_ip) in a_row.iter().enumerate() {
                sum = sum.wrapping_add(a_ip.wrapping_mul(b[p * n + j]));
            }
            c[i * n + j] = sum;
        }
    }
}
