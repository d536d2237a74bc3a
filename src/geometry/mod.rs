// ============================================================================
// Geometry and Trigonometry
// Planar and spatial formulas over f64 coordinates
// ============================================================================

use std::f64::consts::PI;

/// Area of a rectangle given by width and height.
///
/// # Example
/// ```
/// use numkit::geometry::rectangle_area;
///
/// assert_eq!(rectangle_area(5.0, 10.0), 50.0);
/// assert_eq!(rectangle_area(5.0, 5.0), 25.0);
/// ```
#[inline]
pub fn rectangle_area(width: f64, height: f64) -> f64 {
    width * height
}

/// Circumference of a circle given by radius.
///
/// # Example
/// ```
/// use numkit::geometry::circle_circumference;
///
/// assert_eq!(circle_circumference(5.0), 31.41592653589793);
/// assert_eq!(circle_circumference(0.0), 0.0);
/// ```
#[inline]
pub fn circle_circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Euclidean distance between two points in cartesian coordinates.
///
/// Computed via `hypot`, which avoids overflow and underflow in the
/// intermediate squares.
#[inline]
pub fn distance_between_points(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Angle in radians between two 2D vectors.
///
/// Returns NaN when either vector has zero magnitude (the angle is
/// undefined). The normalized dot product is clamped to `[-1, 1]` so that
/// rounding drift cannot push `acos` out of its domain.
pub fn angle_between_vectors(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dot = x1 * x2 + y1 * y2;
    let mag1 = x1.hypot(y1);
    let mag2 = x2.hypot(y2);
    // 0/0 when a magnitude is zero; clamp keeps NaN as NaN
    (dot / (mag1 * mag2)).clamp(-1.0, 1.0).acos()
}

/// Diagonal length of a rectangular parallelepiped with edges `a`, `b`, `c`.
///
/// Equivalent to `sqrt(a² + b² + c²)`, computed as a chained `hypot` for
/// numerical stability.
#[inline]
pub fn parallelepiped_diagonal(a: f64, b: f64, c: f64) -> f64 {
    a.hypot(b).hypot(c)
}

/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
///
/// Uses `f64::hypot`, which does not overflow for large inputs where the
/// naive `sqrt(a² + b²)` would.
#[inline]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Sine of an angle in radians.
#[inline]
pub fn sine(x: f64) -> f64 {
    x.sin()
}
