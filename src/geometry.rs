//! Plane areas and fixed-size 3D vector helpers.
//!
//! Points are `[x, y, z]` arrays. A vector is given by its start and end
//! points, so `(a, b)` denotes the vector `B − A`.
//!
//! Matrices are flat `[f64; 9]` arrays in row-major order:
//!
//! ```text
//! [a11, a12, a13,
//!  a21, a22, a23,
//!  a31, a32, a33]
//! ```

use std::f64::consts::PI;

/// A point in 3D space.
pub type Point3 = [f64; 3];

/// Area of a circle of the given radius: `π · r²`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::circle_area;
/// assert!((circle_area(1.0) - std::f64::consts::PI).abs() < 1e-15);
/// ```
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Area of an `a × b` rectangle.
pub fn rectangle_area(a: f64, b: f64) -> f64 {
    a * b
}

fn displacement(start: Point3, end: Point3) -> Point3 {
    [end[0] - start[0], end[1] - start[1], end[2] - start[2]]
}

/// Length of the sum of vectors `B − A` and `D − C`.
///
/// # Formula
/// ```text
/// ‖(B − A) + (D − C)‖₂
/// ```
///
/// # Examples
/// ```
/// use u_numkit::geometry::resulting_vector_length;
/// let origin = [0.0; 3];
/// // (3, 0, 0) + (0, 4, 0) has length 5
/// let len = resulting_vector_length(origin, [3.0, 0.0, 0.0], origin, [0.0, 4.0, 0.0]);
/// assert!((len - 5.0).abs() < 1e-15);
/// ```
pub fn resulting_vector_length(a: Point3, b: Point3, c: Point3, d: Point3) -> f64 {
    let u = displacement(a, b);
    let v = displacement(c, d);
    u.iter()
        .zip(v.iter())
        .map(|(ui, vi)| {
            let s = ui + vi;
            s * s
        })
        .sum::<f64>()
        .sqrt()
}

/// Dot product of vectors `B − A` and `D − C`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::scalar_product;
/// let origin = [0.0; 3];
/// assert_eq!(scalar_product(origin, [1.0, 2.0, 3.0], origin, [4.0, 5.0, 6.0]), 32.0);
/// ```
pub fn scalar_product(a: Point3, b: Point3, c: Point3, d: Point3) -> f64 {
    let u = displacement(a, b);
    let v = displacement(c, d);
    u.iter().zip(v.iter()).map(|(ui, vi)| ui * vi).sum()
}

/// Transposes a 3×3 matrix given and returned in row-major order.
///
/// # Examples
/// ```
/// use u_numkit::geometry::transpose_3x3;
/// let m = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
/// assert_eq!(transpose_3x3(m), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
/// ```
pub fn transpose_3x3(m: [f64; 9]) -> [f64; 9] {
    std::array::from_fn(|k| {
        let (row, col) = (k / 3, k % 3);
        m[col * 3 + row]
    })
}

/// Unpacks twelve coordinates given axis by axis into points `A, B, C, D`.
///
/// Input order is
/// `(xA, xB, yA, yB, zA, zB, xC, xD, yC, yD, zC, zD)`: the first six
/// values describe vector `A → B`, the last six vector `C → D`, each
/// alternating start and end coordinate per axis.
///
/// # Examples
/// ```
/// use u_numkit::geometry::{points_from_interleaved, scalar_product};
/// let [a, b, c, d] = points_from_interleaved([
///     0.0, 1.0, 0.0, 2.0, 0.0, 3.0, // A → B = (1, 2, 3)
///     1.0, 5.0, 1.0, 6.0, 1.0, 7.0, // C → D = (4, 5, 6)
/// ]);
/// assert_eq!(scalar_product(a, b, c, d), 32.0);
/// ```
pub fn points_from_interleaved(coords: [f64; 12]) -> [Point3; 4] {
    let vector = |offset: usize| -> (Point3, Point3) {
        let axis = &coords[offset..offset + 6];
        ([axis[0], axis[2], axis[4]], [axis[1], axis[3], axis[5]])
    };
    let (a, b) = vector(0);
    let (c, d) = vector(6);
    [a, b, c, d]
}
