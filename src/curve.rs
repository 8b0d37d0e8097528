use crate::error::LaneError;
use crate::math::{
    subdivided_points_along_curve, ParametricCurve2d, PeriodicCubicFn, Point2d, Vector2d,
};
use crate::support::{SupportPoint, SupportPoints};
use crate::util::Interval;
use log::debug;

/// A smooth closed curve through a set of support points, parameterised by arc-length.
///
/// The x and y coordinates are independent periodic cubic splines of the arc-length,
/// so the curve has continuous position, tangent and curvature everywhere, including
/// where it closes on itself. Parameters outside of the support points' range wrap around.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodicSplineCurve {
    x: PeriodicCubicFn,
    y: PeriodicCubicFn,
    /// The arc-length of the closing support point.
    length: f64,
}

impl PeriodicSplineCurve {
    /// Fits a curve to a validated set of support points.
    pub fn new(points: &SupportPoints) -> Self {
        let knots = points.arc_lengths();
        let curve = Self {
            x: PeriodicCubicFn::fit(&knots, &points.xs()),
            y: PeriodicCubicFn::fit(&knots, &points.ys()),
            length: points.total_length(),
        };
        debug!(
            "Fitted periodic spline through {} support points, length {:.3}",
            points.len(),
            curve.length
        );
        curve
    }

    /// Validates the support points and fits a curve to them.
    pub fn build(points: impl Into<Vec<SupportPoint>>) -> Result<Self, LaneError> {
        Ok(Self::new(&SupportPoints::new(points.into())?))
    }

    /// The length of the curve in m, i.e. the arc-length of its last support point.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The length of a single lap of the curve.
    pub fn period(&self) -> f64 {
        self.x.period()
    }

    /// Samples the curve at any arc-length, wrapping it onto the loop.
    pub fn evaluate(&self, param: f64) -> Point2d {
        Point2d::new(self.x.y(param), self.y.y(param))
    }

    /// Approximates one lap of the curve by a closed polyline
    /// whose consecutive points are no more than `max_spacing` apart.
    pub fn polyline(&self, max_spacing: f64) -> Result<Vec<Point2d>, LaneError> {
        if !(max_spacing.is_finite() && max_spacing > 0.0) {
            return Err(LaneError::InvalidPrecision(max_spacing));
        }
        Ok(subdivided_points_along_curve(self, max_spacing))
    }
}

impl ParametricCurve2d for PeriodicSplineCurve {
    fn sample(&self, t: f64) -> Point2d {
        self.evaluate(t)
    }

    fn bounds(&self) -> Interval<f64> {
        self.x.bounds()
    }

    fn sample_dt(&self, t: f64) -> Vector2d {
        Vector2d::new(self.x.dy(t), self.y.dy(t))
    }

    fn sample_dt2(&self, t: f64) -> Vector2d {
        Vector2d::new(self.x.dy2(t), self.y.dy2(t))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use cgmath::prelude::*;

    fn square() -> PeriodicSplineCurve {
        PeriodicSplineCurve::build([
            SupportPoint::new(0.0, 0.0, 0.0),
            SupportPoint::new(1.0, 1.0, 0.0),
            SupportPoint::new(2.0, 1.0, 1.0),
            SupportPoint::new(3.0, 0.0, 1.0),
            SupportPoint::new(4.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn passes_through_support_points() {
        let curve = square();
        for (s, x, y) in [(0.0, 0.0, 0.0), (1.0, 1.0, 0.0), (2.0, 1.0, 1.0), (3.0, 0.0, 1.0)] {
            let p = curve.evaluate(s);
            assert_approx_eq!(p.x, x, 1e-9);
            assert_approx_eq!(p.y, y, 1e-9);
        }
        assert_eq!(curve.length(), 4.0);
    }

    #[test]
    fn square_bulges_outwards_between_corners() {
        // Slopes at the corners solve to 0.75, giving a dip of 3/16 mid-edge
        let p = square().evaluate(0.5);
        assert_approx_eq!(p.x, 0.5, 1e-9);
        assert_approx_eq!(p.y, -0.1875, 1e-9);
    }

    #[test]
    fn tangent_and_curvature_are_continuous_at_seam() {
        let curve = square();
        let eps = 1e-9;
        let (d0, d1) = (curve.sample_dt(eps), curve.sample_dt(curve.length() - eps));
        assert_approx_eq!(d0.x, d1.x, 1e-6);
        assert_approx_eq!(d0.y, d1.y, 1e-6);
        let (d0, d1) = (curve.sample_dt2(eps), curve.sample_dt2(curve.length() - eps));
        assert_approx_eq!(d0.x, d1.x, 1e-6);
        assert_approx_eq!(d0.y, d1.y, 1e-6);
    }

    #[test]
    fn polyline_closes_the_loop() {
        let curve = square();
        let points = curve.polyline(0.05).unwrap();
        for pair in points.windows(2) {
            assert!(pair[0].distance(pair[1]) <= 0.05);
        }
        assert_approx_eq!(points[0].distance(points[points.len() - 1]), 0.0, 1e-9);
        assert!(matches!(
            curve.polyline(0.0),
            Err(LaneError::InvalidPrecision(_))
        ));
    }
}
