// Closed numeric intervals and degree-based trigonometry
//
// Every speed conversion in the crate goes through `Range::map`, so the
// degenerate-range rule lives here and nowhere else.

use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Closed interval `[lowest, highest]` over an ordered numeric type.
///
/// `lowest <= highest` is assumed, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range<T> {
    pub lowest: T,
    pub highest: T,
}

impl<T> Range<T> {
    pub const fn new(lowest: T, highest: T) -> Self {
        Self { lowest, highest }
    }
}

impl<T: PartialOrd + Copy> Range<T> {
    /// True if `lowest <= value <= highest`
    pub fn contains(&self, value: T) -> bool {
        value >= self.lowest && value <= self.highest
    }

    /// Clamp `value` into the range
    pub fn restrict(&self, value: T) -> T {
        if value < self.lowest {
            self.lowest
        } else if value > self.highest {
            self.highest
        } else {
            value
        }
    }

    /// True if the bounds are ordered
    pub fn is_ordered(&self) -> bool {
        self.lowest <= self.highest
    }
}

impl<T> Range<T>
where
    T: Copy + PartialEq + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    /// Linearly remap `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
    ///
    /// A zero-width input range maps everything onto `out_min`.
    pub fn map_value(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
        if in_max == in_min {
            return out_min;
        }
        (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
    }

    /// Linearly remap `x` from range `from` onto range `to`
    pub fn map(x: T, from: &Range<T>, to: &Range<T>) -> T {
        Self::map_value(x, from.lowest, from.highest, to.lowest, to.highest)
    }

    /// Interpret `value` as a point in `other` and return the matching point in `self`
    pub fn map_value_from_range(&self, value: T, other: &Range<T>) -> T {
        Self::map(value, other, self)
    }

    /// Interpret `value` as a point in `self` and return the matching point in `other`
    pub fn map_value_to_range(&self, value: T, other: &Range<T>) -> T {
        Self::map(value, self, other)
    }
}

pub fn deg_to_rad(angle: f64) -> f64 {
    angle * PI / 180.0
}

pub fn rad_to_deg(angle: f64) -> f64 {
    angle * 180.0 / PI
}

/// Cosine of an angle given in degrees
pub fn cos_degrees(angle: f64) -> f64 {
    deg_to_rad(angle).cos()
}

/// Sine of an angle given in degrees
pub fn sin_degrees(angle: f64) -> f64 {
    deg_to_rad(angle).sin()
}

/// -1, 0 or 1 depending on the sign of `x`
pub fn sign(x: f64) -> i8 {
    if x < 0.0 {
        -1
    } else if x > 0.0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_contains_is_inclusive() {
        let r = Range::new(-10.0_f64, 10.0);
        assert!(r.contains(-10.0));
        assert!(r.contains(10.0));
        assert!(r.contains(0.0));
        assert!(!r.contains(10.0001));
        assert!(!r.contains(-11.0));
    }

    #[test]
    fn test_restrict_clamps_and_is_idempotent() {
        let r = Range::new(-5, 5);
        for v in [-100, -5, -1, 0, 3, 5, 42] {
            let once = r.restrict(v);
            assert!(r.contains(once));
            assert_eq!(r.restrict(once), once);
        }
        assert_eq!(r.restrict(-100), -5);
        assert_eq!(r.restrict(42), 5);
        assert_eq!(r.restrict(3), 3);
    }

    #[test]
    fn test_map_linear() {
        let from = Range::new(-1.0_f64, 1.0);
        let to = Range::new(0.0_f64, 100.0);
        assert!((Range::map(0.0, &from, &to) - 50.0).abs() < EPS);
        assert!((Range::map(-1.0, &from, &to) - 0.0).abs() < EPS);
        assert!((Range::map(1.0, &from, &to) - 100.0).abs() < EPS);
        // Extrapolates outside the source range
        assert!((Range::map(2.0, &from, &to) - 150.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_range_maps_to_lowest() {
        let from = Range::new(5.0_f64, 5.0);
        let to = Range::new(0.0_f64, 10.0);
        for x in [-1000.0, 0.0, 5.0, 1e9] {
            assert_eq!(Range::map(x, &from, &to), 0.0);
        }
        // Integers must not panic on division by zero either
        assert_eq!(Range::map(7, &Range::new(3, 3), &Range::new(-2, 2)), -2);
    }

    #[test]
    fn test_map_from_then_to_round_trips() {
        let a = Range::new(-100.0_f64, 100.0);
        let b = Range::new(-1500.0_f64, 1500.0);
        let mut v = a.lowest;
        while v <= a.highest {
            let in_b = a.map_value_to_range(v, &b);
            let back = a.map_value_from_range(in_b, &b);
            assert!((back - v).abs() < 1e-9, "{} -> {} -> {}", v, in_b, back);
            v += 12.5;
        }
    }

    #[test]
    fn test_map_value_from_range_direction() {
        let native = Range::new(0.0_f64, 1000.0);
        let percent = Range::new(0.0_f64, 100.0);
        // 25 % of the percent range is 250 in native units
        assert!((native.map_value_from_range(25.0, &percent) - 250.0).abs() < EPS);
        assert!((native.map_value_to_range(250.0, &percent) - 25.0).abs() < EPS);
    }

    #[test]
    fn test_degree_trig() {
        assert!((cos_degrees(0.0) - 1.0).abs() < EPS);
        assert!(cos_degrees(90.0).abs() < EPS);
        assert!((cos_degrees(180.0) + 1.0).abs() < EPS);
        assert!((sin_degrees(90.0) - 1.0).abs() < EPS);
        assert!((rad_to_deg(deg_to_rad(33.0)) - 33.0).abs() < EPS);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(-0.5), -1);
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(3.0), 1);
    }
}
