use crate::core::data::complex::Complex;

/// Escape counts saturate here; a point that survives this many updates is
/// treated as inside the set.
pub const MAX_ITERATIONS: u32 = 255;

/// Counts the updates of z ← z² + c needed before the orbit of `c` leaves
/// the disc of radius 2, returning the 0-based index of the escaping update,
/// or [`MAX_ITERATIONS`] if the orbit never escapes.
///
/// The orbit is seeded with z = c, not the textbook z₀ = 0. Every escape
/// count is therefore one update ahead of the conventional definition, and
/// the palette banding depends on it; do not change the seed.
#[must_use]
pub fn iterate_point(c: Complex) -> u32 {
    let mut z = c;

    for i in 0..MAX_ITERATIONS {
        z = z * z + c;

        if z.magnitude_squared() > 4.0 {
            return i;
        }
    }

    MAX_ITERATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(iterate_point(Complex::new(0.0, 0.0)), MAX_ITERATIONS);
    }

    #[test]
    fn test_far_point_escapes_on_first_update() {
        // z = (2 + 2i)² + (2 + 2i) = 2 + 10i, |z|² = 104 > 4
        assert_eq!(iterate_point(Complex::new(2.0, 2.0)), 0);
    }

    #[test]
    fn test_interior_points_saturate() {
        // Main cardioid and period-2 bulb centres
        assert_eq!(iterate_point(Complex::new(-0.25, 0.0)), MAX_ITERATIONS);
        assert_eq!(iterate_point(Complex::new(-1.0, 0.0)), MAX_ITERATIONS);
    }

    #[test]
    fn test_count_is_always_in_range() {
        let samples = [
            Complex::new(-2.5, -2.0),
            Complex::new(1.5, 2.0),
            Complex::new(0.3, 0.5),
            Complex::new(-0.75, 0.1),
            Complex::new(100.0, -100.0),
        ];

        for c in samples {
            assert!(iterate_point(c) <= MAX_ITERATIONS);
        }
    }

    #[test]
    fn test_conjugate_points_share_escape_count() {
        let c = Complex::new(-0.7, 0.3);
        let conjugate = Complex::new(-0.7, -0.3);

        assert_eq!(iterate_point(c), iterate_point(conjugate));
    }
}
