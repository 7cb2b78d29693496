//! Test functions on the unit interval and unit square.
//!
//! Scalar functions used as ground-truth value surfaces when exercising the
//! smoothers: smooth bumps, kinks, jumps and near-singularities on [0, 1],
//! plus two functions of the plane.

use core::f64::consts::PI;
use num_traits::Float;

// ============================================================================
// 1-D Functions
// ============================================================================

/// f(x) = x
pub fn identity(x: f64) -> f64 {
    x
}

/// Parabola with its minimum 0 at x = 0.5 and value 1 at both ends.
pub fn parabola(x: f64) -> f64 {
    4.0 * (x - 0.5) * (x - 0.5)
}

/// Tent peaking at 1 for x = 0.5.
pub fn angle(x: f64) -> f64 {
    if x > 0.5 {
        2.0 - 2.0 * x
    } else {
        2.0 * x
    }
}

/// Two mirrored parabolic arcs meeting in a cusp at x = 0.5.
pub fn angle_squared(x: f64) -> f64 {
    let x = if x > 0.5 { 1.0 - x } else { x };
    4.0 * x * x
}

/// Cosine mixture with several local extrema.
pub fn bumpy(x: f64) -> f64 {
    let x = x * PI;
    let v = Float::cos(x) - 0.7 * Float::cos(2.0 * x) - 0.6 * Float::cos(3.0 * x)
        + 0.4 * Float::cos(4.0 * x)
        - 0.5 * Float::cos(5.0 * x);
    v / 3.134_345_884_81
}

/// Jump of height 4 at x = 0.5, joined by a steep ramp of width 1e-7.
pub fn step(x: f64) -> f64 {
    const EPS: f64 = 1e-7;
    if Float::abs(x - 0.5) < EPS {
        return 2.0 * (x - 0.5) / EPS + 2.0;
    }
    if x > 0.5 {
        4.5 - x
    } else {
        -x - 0.5
    }
}

/// Cubic arcs with a downward jump of 2 at x = 0.5.
pub fn flip(x: f64) -> f64 {
    const EPS: f64 = 1e-4;
    let x = 2.0 * x - 1.0;
    if x < -EPS {
        x * x * x + 1.0
    } else if x > EPS {
        x * x * x - 1.0
    } else {
        -x / EPS
    }
}

/// Three plateaus at 1, 10 and 4 with high-frequency ripple.
pub fn three_step(x: f64) -> f64 {
    if x < 0.3 {
        1.0 + Float::cos(1000.0 * x)
    } else if x < 0.7 {
        10.0 + Float::cos(800.0 * x)
    } else {
        4.0 + Float::cos(1200.0 * x)
    }
}

/// tan(3 (x - 0.5)): steep near both edges.
pub fn edges(x: f64) -> f64 {
    Float::tan(3.0 * (x - 0.5))
}

// ============================================================================
// 2-D Functions
// ============================================================================

/// Rosenbrock's banana function, minimum 0 at (1, 1).
pub fn rosenbrock(p: &[f64; 2]) -> f64 {
    let [x, y] = *p;
    (1.0 - x) * (1.0 - x) + 100.0 * (y - x * x) * (y - x * x)
}

/// Two rooms split at y = 0.5 whose values run in opposite directions along x.
pub fn two_room(p: &[f64; 2]) -> f64 {
    let [x, y] = *p;
    if y > 0.5 {
        2.0 - x
    } else {
        x
    }
}
