//! This is the operations module
//! Provide the eight pure vector and matrix operations behind the API
//!
//! Every function takes caller-supplied slices, computes one closed-form
//! result, and returns `Result<_, OpError>`. Nothing is stored between
//! calls and no function depends on another.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Absolute tolerance for near-zero checks.
pub const ABS_TOL: f64 = 1e-8;

/// Relative tolerance for near-zero checks.
pub const REL_TOL: f64 = 1e-5;

/// Failure kinds the operations can report.
///
/// Every failure is recoverable and carries a human-readable message via
/// `Display`; the HTTP layer forwards that message verbatim in the `error`
/// field.
#[derive(Debug, Clone, PartialEq)]
pub enum OpError {
    /// A required vector norm was exactly zero.
    ZeroVector {
        /// What the caller was trying to do, e.g. "normalize".
        action: &'static str,
    },
    /// The coefficient matrix is singular or not square.
    SingularSystem,
    /// Operand shapes do not line up for the requested operation.
    DimensionMismatch(String),
}

impl Display for OpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroVector { action } => write!(f, "Cannot {} zero vector", action),
            Self::SingularSystem => write!(f, "System has no unique solution"),
            Self::DimensionMismatch(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for OpError {}

/// Euclidean (L2) norm
/// norm = sqrt(sum(v[i]^2))
pub fn norm(vector: &[f64]) -> f64 {
    vector.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Approximate equality with the documented tolerances
/// is_close(a, b) = |a - b| <= ABS_TOL + REL_TOL * |b|
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABS_TOL + REL_TOL * b.abs()
}

/// Dot product; callers check the lengths first
fn dot(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right.iter()).map(|(x, y)| x * y).sum()
}

/// Check that two vectors have the same number of components
fn check_same_len(v1: &[f64], v2: &[f64]) -> Result<(), OpError> {
    if v1.len() != v2.len() {
        return Err(OpError::DimensionMismatch(format!(
            "Vectors have different dimensions ({} and {})",
            v1.len(),
            v2.len()
        )));
    }

    Ok(())
}

/// Shape of a rectangular matrix as (rows, cols)
/// Ragged rows are a dimension error; an empty matrix is 0 x 0
fn matrix_shape(matrix: &[Vec<f64>]) -> Result<(usize, usize), OpError> {
    let cols = matrix.first().map_or(0, Vec::len);
    if matrix.iter().any(|row| row.len() != cols) {
        return Err(OpError::DimensionMismatch(
            "Matrix rows have unequal lengths".to_string(),
        ));
    }

    Ok((matrix.len(), cols))
}

/// Unit vector
/// unit = v / ||v||
/// A vector with zero norm (the empty vector included) cannot be normalized
///
/// # Examples
///
/// ```
/// use vecmat::ops::unit_vector;
///
/// let unit = unit_vector(&[3.0, 4.0]).unwrap();
/// assert!((unit[0] - 0.6).abs() < 1e-12);
/// assert!((unit[1] - 0.8).abs() < 1e-12);
///
/// assert!(unit_vector(&[0.0, 0.0]).is_err());
/// ```
pub fn unit_vector(vector: &[f64]) -> Result<Vec<f64>, OpError> {
    let n = norm(vector);
    if n == 0.0 {
        return Err(OpError::ZeroVector {
            action: "normalize",
        });
    }

    Ok(vector.iter().map(|x| x / n).collect())
}

/// Angle between two vectors, in degrees
/// theta = acos(v1 . v2 / (||v1|| ||v2||))
/// The cosine is clamped to [-1, 1] so rounding cannot push acos out of
/// its domain; a zero vector has no direction and is an error
pub fn angle_between(v1: &[f64], v2: &[f64]) -> Result<f64, OpError> {
    check_same_len(v1, v2)?;

    let norm1 = norm(v1);
    let norm2 = norm(v2);
    if norm1 == 0.0 || norm2 == 0.0 {
        return Err(OpError::ZeroVector {
            action: "compute angle with",
        });
    }

    let cos_theta = (dot(v1, v2) / (norm1 * norm2)).clamp(-1.0, 1.0);
    Ok(cos_theta.acos().to_degrees())
}

/// Orthogonality check
/// Returns (orthogonal, dot product); orthogonal when the dot product is
/// within tolerance of zero. The zero vector reports orthogonal = true
pub fn orthogonality(v1: &[f64], v2: &[f64]) -> Result<(bool, f64), OpError> {
    check_same_len(v1, v2)?;

    let dot_product = dot(v1, v2);
    Ok((is_close(dot_product, 0.0), dot_product))
}

/// Parallelism check
/// Returns (parallel, cross product); parallel when the cross product norm
/// is within tolerance of zero. The zero vector reports parallel = true
///
/// Inputs must have 2 or 3 components. 2-D vectors are zero-extended, so
/// the cross product is always a 3-vector with the 2-D scalar cross
/// product as its z component
pub fn parallelism(v1: &[f64], v2: &[f64]) -> Result<(bool, Vec<f64>), OpError> {
    let a = extend_to_3d(v1)?;
    let b = extend_to_3d(v2)?;

    let cross = vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ];
    let parallel = is_close(norm(&cross), 0.0);

    Ok((parallel, cross))
}

/// Cross products are defined for 2- and 3-dimensional vectors only
fn extend_to_3d(vector: &[f64]) -> Result<[f64; 3], OpError> {
    match *vector {
        [x, y] => Ok([x, y, 0.0]),
        [x, y, z] => Ok([x, y, z]),
        _ => Err(OpError::DimensionMismatch(format!(
            "Cross product requires 2- or 3-dimensional vectors (got {})",
            vector.len()
        ))),
    }
}

/// Linear combination
/// result = sum(coefficients[i] * vectors[i])
/// Requires at least one vector, one coefficient per vector, and equal
/// vector dimensions
pub fn linear_combination(
    vectors: &[Vec<f64>],
    coefficients: &[f64],
) -> Result<Vec<f64>, OpError> {
    if vectors.is_empty() {
        return Err(OpError::DimensionMismatch(
            "Linear combination requires at least one vector".to_string(),
        ));
    }
    if vectors.len() != coefficients.len() {
        return Err(OpError::DimensionMismatch(format!(
            "Expected one coefficient per vector ({} vectors, {} coefficients)",
            vectors.len(),
            coefficients.len()
        )));
    }
    for vector in vectors {
        check_same_len(&vectors[0], vector)?;
    }

    let mut result = vec![0.0; vectors[0].len()];
    for (coefficient, vector) in coefficients.iter().zip(vectors) {
        for (acc, x) in result.iter_mut().zip(vector) {
            *acc += coefficient * x;
        }
    }

    Ok(result)
}

/// Solve the linear system A x = b
/// Gaussian elimination with partial pivoting on a working copy; an
/// exactly-zero pivot means the matrix is singular. A non-square matrix
/// has no unique solution either
///
/// # Examples
///
/// ```
/// use vecmat::ops::solve_system;
///
/// let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
/// let x = solve_system(&a, &[5.0, 7.0]).unwrap();
/// assert_eq!(x, vec![5.0, 7.0]);
///
/// let singular = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
/// assert!(solve_system(&singular, &[2.0, 2.0]).is_err());
/// ```
pub fn solve_system(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>, OpError> {
    let (rows, cols) = matrix_shape(a)?;
    if rows != cols {
        return Err(OpError::SingularSystem);
    }
    if b.len() != rows {
        return Err(OpError::DimensionMismatch(format!(
            "Matrix is {}x{} but the right-hand side has {} components",
            rows,
            cols,
            b.len()
        )));
    }

    let n = rows;
    let mut m = a.to_vec();
    let mut x = b.to_vec();

    // Forward elimination
    for col in 0..n {
        // Partial pivoting: bring the largest remaining entry up
        let mut pivot_row = col;
        for row in (col + 1)..n {
            if m[row][col].abs() > m[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        if m[pivot_row][col] == 0.0 {
            return Err(OpError::SingularSystem);
        }
        m.swap(col, pivot_row);
        x.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = m[row][col] / m[col][col];
            for k in col..n {
                m[row][k] -= factor * m[col][k];
            }
            x[row] -= factor * x[col];
        }
    }

    // Back substitution
    for col in (0..n).rev() {
        let mut sum = 0.0;
        for k in (col + 1)..n {
            sum += m[col][k] * x[k];
        }
        x[col] = (x[col] - sum) / m[col][col];
    }

    Ok(x)
}

/// Matrix transpose
/// (r x c) -> (c x r)
pub fn matrix_transpose(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, OpError> {
    let (rows, cols) = matrix_shape(matrix)?;

    Ok((0..cols)
        .map(|col| (0..rows).map(|row| matrix[row][col]).collect())
        .collect())
}

/// Matrix multiplication
/// (a x b) . (b x d) -> (a x d)
/// Inner dimensions must agree
pub fn matrix_multiply(m1: &[Vec<f64>], m2: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, OpError> {
    let (rows1, cols1) = matrix_shape(m1)?;
    let (rows2, cols2) = matrix_shape(m2)?;
    if cols1 != rows2 {
        return Err(OpError::DimensionMismatch(
            "Matrices not compatible for multiplication".to_string(),
        ));
    }

    let mut product = vec![vec![0.0; cols2]; rows1];
    for i in 0..rows1 {
        for j in 0..cols2 {
            let mut sum = 0.0;
            for k in 0..cols1 {
                sum += m1[i][k] * m2[k][j];
            }
            product[i][j] = sum;
        }
    }

    Ok(product)
}
