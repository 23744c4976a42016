//! Goal signals sampled from a polyline of control points.

use crate::float::Float;
use crate::math::lerp;
use crate::spring::SpringState;

/// Sample the polyline through `points` at normalised time `t` in `[0, 1]`.
///
/// Returns the interpolated position and a velocity estimate, ready to be fed
/// to a spring as a `Goal::PositionVelocity`. The velocity is the segment
/// difference divided by the number of control points, with the sign of
/// `points[i0] - points[i1]`. An empty slice gives the zero state.
pub fn piecewise_interpolation<F: Float>(t: F, points: &[F]) -> SpringState<F> {
    let n = points.len();
    if n == 0 {
        return SpringState::default();
    }
    let last = n - 1;

    let t = t * F::from_usize(last);
    let i0 = t.floor().to_usize().min(last);
    let i1 = (i0 + 1).min(last);
    let alpha = t - t.floor();

    SpringState::new(
        lerp(points[i0], points[i1], alpha),
        (points[i0] - points[i1]) / F::from_usize(n),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_control_points() {
        let points = [0.0f64, 10.0, 20.0, 10.0];
        let start = piecewise_interpolation(0.0, &points);
        assert_eq!(start.x, 0.0);
        let mid = piecewise_interpolation(0.5, &points);
        assert!((mid.x - 15.0).abs() < 1e-12);
        let end = piecewise_interpolation(1.0, &points);
        assert_eq!(end.x, 10.0);
        assert_eq!(end.v, 0.0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(piecewise_interpolation(0.3f32, &[]), SpringState::default());
    }

    #[test]
    fn single_point() {
        let s = piecewise_interpolation(0.7f32, &[4.0]);
        assert_eq!(s, SpringState::new(4.0, 0.0));
    }
}
