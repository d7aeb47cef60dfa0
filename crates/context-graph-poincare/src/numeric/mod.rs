//! Numeric guards and complex arithmetic.
//!
//! Everything above this module assumes that no function here ever yields
//! NaN or an infinity. Constructors replace non-finite input with `0`,
//! divisions by ~0 return a finite value, and transcendental helpers clamp
//! their argument into the valid domain first.

mod complex;
mod guards;


pub use self::complex::Complex;
pub use self::guards::{
    clamp_to_disk, clamp_unit, finite_or, safe_acosh, safe_atanh, BOUNDARY_EPS, EPSILON,
    LARGE_MAGNITUDE, LIFT_MAX_NORM, MAX_DISK_NORM,
};
