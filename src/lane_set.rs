use crate::curve::PeriodicSplineCurve;
use crate::error::LaneError;
use crate::math::Point2d;
use crate::query::{ClosestPoint, CurveQuery, SearchParams};
use crate::support::SupportPoints;
use log::debug;

/// A set of independent lanes, indexed in the order they were built.
#[derive(Clone, Debug, Default)]
pub struct LaneSet {
    lanes: Vec<CurveQuery>,
}

impl LaneSet {
    /// Builds one lane per set of support points, with the default search parameters.
    pub fn build(sources: impl IntoIterator<Item = SupportPoints>) -> Self {
        let lanes: Vec<_> = sources
            .into_iter()
            .map(|points| CurveQuery::new(PeriodicSplineCurve::new(&points)))
            .collect();
        debug!("Built lane set with {} lanes", lanes.len());
        Self { lanes }
    }

    /// Builds one lane per set of support points, sharing the given search parameters.
    pub fn with_params(
        sources: impl IntoIterator<Item = SupportPoints>,
        params: SearchParams,
    ) -> Result<Self, LaneError> {
        let lanes = sources
            .into_iter()
            .map(|points| CurveQuery::with_params(PeriodicSplineCurve::new(&points), params))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Built lane set with {} lanes, {:?}", lanes.len(), params);
        Ok(Self { lanes })
    }

    /// Builds one lane per set of `[arc_length, x, y]` rows.
    /// Fails on the first set of rows which cannot form a closed lane.
    pub fn from_rows<'a>(sources: impl IntoIterator<Item = &'a [[f64; 3]]>) -> Result<Self, LaneError> {
        let sources = sources
            .into_iter()
            .map(SupportPoints::from_rows)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::build(sources))
    }

    /// Gets the lane with the given index.
    pub fn get(&self, index: usize) -> Result<&CurveQuery, LaneError> {
        self.lanes
            .get(index)
            .ok_or_else(|| LaneError::unknown_lane(index, self.lanes.len()))
    }

    /// The number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Iterates over the lanes in index order.
    pub fn iter(&self) -> impl Iterator<Item = &CurveQuery> {
        self.lanes.iter()
    }

    /// Finds the lookahead point on every lane, in index order.
    pub fn lookahead_points(&self, point: Point2d, distance: f64) -> Vec<ClosestPoint> {
        self.lanes
            .iter()
            .map(|lane| lane.lookahead_point(point, distance))
            .collect()
    }
}
