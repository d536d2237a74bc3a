// ============================================================================
// numkit
// Pure numeric utility functions over primitive scalars and strings
// ============================================================================

//! # numkit
//!
//! A flat collection of independent, pure numeric utility functions:
//! geometry formulas, number parsing and formatting, primality testing,
//! rounding policies, Fibonacci numbers, digit sums, and random integers.
//!
//! ## Design
//!
//! - **Stateless** — every function is a pure mapping from its arguments to
//!   a result; there is no shared state and no I/O, so concurrent use from
//!   any number of threads is inherently safe
//! - **Sentinel failure** — float operations never panic and never return
//!   errors; undefined results propagate as NaN or infinity per IEEE-754,
//!   and parse failures surface as NaN (or a caller-supplied fallback)
//! - **Explicit overflow** — the integer-valued operations (`fibonacci`,
//!   `sum_to_n`) and radix formatting use checked arithmetic and report
//!   through [`error::NumericResult`]
//!
//! ## Example
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! assert_eq!(rectangle_area(5.0, 10.0), 50.0);
//! assert_eq!(fibonacci(10), Ok(55));
//! assert_eq!(format_radix(255, 16).unwrap(), "ff");
//! assert_eq!(to_number_or("abc", 99.0), 99.0);
//!
//! let roll = random_integer(1, 6);
//! assert!((1..=6).contains(&roll));
//! ```

pub mod algebra;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod number_theory;
pub mod random;
pub mod rounding;

// Re-exports for convenience
pub mod prelude {
    pub use crate::algebra::{average, linear_equation_root, max_of};
    pub use crate::convert::{
        format_radix, is_finite_number, is_integer, is_safe_integer, parse_float, parse_integer,
        parse_number, sum_of_three, to_exponential, to_fixed, to_number_or, to_precision,
        MAX_SAFE_INTEGER,
    };
    pub use crate::error::{NumericError, NumericResult};
    pub use crate::geometry::{
        angle_between_vectors, circle_circumference, distance_between_points, hypotenuse,
        parallelepiped_diagonal, rectangle_area, sine,
    };
    pub use crate::number_theory::{
        count_of_odd_numbers, cube, digit_sum, fibonacci, is_power_of_two, is_prime, last_digit,
        sum_to_n,
    };
    pub use crate::random::{random_integer, random_integer_with};
    pub use crate::rounding::{ceil, floor, round, round_to_power_of_ten, trunc};
}
