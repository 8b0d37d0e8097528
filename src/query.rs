use crate::curve::PeriodicSplineCurve;
use crate::error::LaneError;
use crate::math::{closest_point_on_curve, project_local, rot90, ParametricCurve2d, Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;

/// Parameters of the closest point search.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// The spacing of the first sampling grid, in m of arc-length.
    pub initial_step: f64,
    /// The search stops once the grid spacing is no larger than this, in m of arc-length.
    pub precision: f64,
    /// The distance ahead of the closest point used by [`CurveQuery::default_lookahead_point`], in m.
    pub lookahead_distance: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            initial_step: 0.2,
            precision: 0.001,
            lookahead_distance: 0.5,
        }
    }
}

/// A point on a lane along with the arc-length it was sampled at.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosestPoint {
    pub point: Point2d,
    /// The arc-length parameter; may lie outside the lane's first lap.
    pub param: f64,
}

/// Answers geometric queries against a single lane.
#[derive(Clone, Debug)]
pub struct CurveQuery {
    curve: PeriodicSplineCurve,
    params: SearchParams,
}

impl CurveQuery {
    /// Creates a query object with the default search parameters.
    pub fn new(curve: PeriodicSplineCurve) -> Self {
        Self {
            curve,
            params: SearchParams::default(),
        }
    }

    /// Creates a query object with the given search parameters.
    ///
    /// Both the initial step and the precision must be positive. An initial step
    /// smaller than the precision results in a single sampling pass at the precision.
    pub fn with_params(curve: PeriodicSplineCurve, params: SearchParams) -> Result<Self, LaneError> {
        for value in [params.initial_step, params.precision] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LaneError::InvalidPrecision(value));
            }
        }
        Ok(Self { curve, params })
    }

    /// Gets the underlying curve.
    pub fn curve(&self) -> &PeriodicSplineCurve {
        &self.curve
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// The length of the lane in m.
    pub fn length(&self) -> f64 {
        self.curve.length()
    }

    /// Samples the lane at any arc-length.
    pub fn evaluate(&self, param: f64) -> Point2d {
        self.curve.evaluate(param)
    }

    /// Finds the point on the lane closest to `point`, searching the whole lane.
    pub fn closest_point(&self, point: Point2d) -> ClosestPoint {
        let bracket = Interval::new(0.0, self.curve.length());
        self.search(point, self.params.precision, bracket)
    }

    /// Finds the point on the lane closest to `point` within an arc-length bracket.
    ///
    /// # Parameters
    /// * `point` - The query point
    /// * `precision` - The arc-length resolution of the result
    /// * `min_param` - The start of the bracket
    /// * `max_param` - The end of the bracket, or `None` for the length of the lane
    pub fn closest_point_in(
        &self,
        point: Point2d,
        precision: f64,
        min_param: f64,
        max_param: Option<f64>,
    ) -> Result<ClosestPoint, LaneError> {
        if !(precision.is_finite() && precision > 0.0) {
            return Err(LaneError::InvalidPrecision(precision));
        }
        let bracket = Interval::new(min_param, max_param.unwrap_or(self.curve.length()));
        if !(bracket.is_proper() && bracket.min.is_finite() && bracket.max.is_finite()) {
            return Err(LaneError::invalid_range(bracket.min, bracket.max));
        }
        Ok(self.search(point, precision, bracket))
    }

    /// Finds the point `distance` further along the lane than the point closest to `point`.
    pub fn lookahead_point(&self, point: Point2d, distance: f64) -> ClosestPoint {
        let param = self.closest_point(point).param + distance;
        ClosestPoint {
            point: self.curve.evaluate(param),
            param,
        }
    }

    /// Finds the lookahead point using the configured lookahead distance.
    pub fn default_lookahead_point(&self, point: Point2d) -> ClosestPoint {
        self.lookahead_point(point, self.params.lookahead_distance)
    }

    /// The unit tangent of the lane at the given arc-length.
    pub fn tangent(&self, param: f64) -> Vector2d {
        self.curve.sample_dt(param).normalize()
    }

    /// The signed lateral distance from the lane to `point`, measured at the closest point.
    /// Positive values lie to the left of the direction of travel.
    pub fn lateral_offset(&self, point: Point2d) -> f64 {
        let closest = self.closest_point(point);
        let tan = self.tangent(closest.param);
        project_local(point, closest.point, tan, rot90(tan)).y
    }

    fn search(&self, point: Point2d, precision: f64, bracket: Interval<f64>) -> ClosestPoint {
        let initial_step = f64::max(self.params.initial_step, precision);
        let (point, param) = closest_point_on_curve(&self.curve, point, initial_step, precision, bracket);
        ClosestPoint { point, param }
    }
}
