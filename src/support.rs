//! Support points that define the shape of a lane.

use crate::error::{Degeneracy, LaneError};
use itertools::Itertools;

/// The minimum number of support points, including the closing point, needed to fit a lane.
pub const MIN_SUPPORT_POINTS: usize = 4;

/// The maximum distance between the first and last support point of a closed lane.
const CLOSURE_TOLERANCE: f64 = 1e-9;

/// A single support point of a lane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupportPoint {
    /// Distance along the lane from its start, in m.
    pub arc_length: f64,
    pub x: f64,
    pub y: f64,
}

impl SupportPoint {
    pub const fn new(arc_length: f64, x: f64, y: f64) -> Self {
        Self { arc_length, x, y }
    }
}

impl From<[f64; 3]> for SupportPoint {
    fn from([arc_length, x, y]: [f64; 3]) -> Self {
        Self { arc_length, x, y }
    }
}

/// An ordered, validated set of support points describing a closed loop.
///
/// Arc-lengths are strictly increasing, every value is finite, and the last
/// point lies on top of the first.
#[derive(Clone, Debug)]
pub struct SupportPoints {
    points: Vec<SupportPoint>,
}

impl SupportPoints {
    /// Validates a set of support points.
    pub fn new(points: Vec<SupportPoint>) -> Result<Self, LaneError> {
        if points.len() < MIN_SUPPORT_POINTS {
            return Err(Degeneracy::TooFewPoints {
                required: MIN_SUPPORT_POINTS,
                actual: points.len(),
            }
            .into());
        }

        if let Some(index) = points
            .iter()
            .position(|p| !(p.arc_length.is_finite() && p.x.is_finite() && p.y.is_finite()))
        {
            return Err(Degeneracy::NonFinite { index }.into());
        }

        if let Some((index, _)) = points
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (a, b))| b.arc_length <= a.arc_length)
        {
            return Err(Degeneracy::NonIncreasingArcLength { index: index + 1 }.into());
        }

        let (first, last) = (points[0], points[points.len() - 1]);
        if last.arc_length <= 0.0 {
            return Err(Degeneracy::NonPositiveLength {
                length: last.arc_length,
            }
            .into());
        }

        let gap = (last.x - first.x).hypot(last.y - first.y);
        if gap > CLOSURE_TOLERANCE {
            return Err(Degeneracy::Unclosed { gap }.into());
        }

        Ok(Self { points })
    }

    /// Creates support points from `[arc_length, x, y]` rows.
    pub fn from_rows(rows: &[[f64; 3]]) -> Result<Self, LaneError> {
        Self::new(rows.iter().copied().map(SupportPoint::from).collect())
    }

    /// Creates support points from a subset of a dense recording of a lane.
    ///
    /// # Parameters
    /// * `rows` - The recording as `[arc_length, x, y]` rows
    /// * `indices` - The rows to keep; must be strictly increasing
    pub fn select_rows(rows: &[[f64; 3]], indices: &[usize]) -> Result<Self, LaneError> {
        let mut prev = None;
        let mut points = Vec::with_capacity(indices.len());
        for &index in indices {
            if index >= rows.len() || prev.map_or(false, |prev| index <= prev) {
                return Err(Degeneracy::IndexOutOfRange {
                    index,
                    len: rows.len(),
                }
                .into());
            }
            prev = Some(index);
            points.push(SupportPoint::from(rows[index]));
        }
        Self::new(points)
    }

    /// Parses support points from a JSON array of `[arc_length, x, y]` rows
    /// or of `{"arc_length", "x", "y"}` objects.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, LaneError> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Rows {
            Arrays(Vec<[f64; 3]>),
            Objects(Vec<SupportPoint>),
        }

        match serde_json::from_str(json)? {
            Rows::Arrays(rows) => Self::from_rows(&rows),
            Rows::Objects(points) => Self::new(points),
        }
    }

    /// The number of support points, including the closing point.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn as_slice(&self) -> &[SupportPoint] {
        &self.points
    }

    /// The arc-length of the final (closing) support point.
    pub fn total_length(&self) -> f64 {
        self.points[self.points.len() - 1].arc_length
    }

    pub(crate) fn arc_lengths(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.arc_length).collect()
    }

    /// The x-coordinates, with the closing point snapped exactly onto the first.
    pub(crate) fn xs(&self) -> Vec<f64> {
        self.closed_coords(|p| p.x)
    }

    /// The y-coordinates, with the closing point snapped exactly onto the first.
    pub(crate) fn ys(&self) -> Vec<f64> {
        self.closed_coords(|p| p.y)
    }

    fn closed_coords(&self, f: impl Fn(&SupportPoint) -> f64) -> Vec<f64> {
        let mut coords: Vec<f64> = self.points.iter().map(f).collect();
        let last = coords.len() - 1;
        coords[last] = coords[0];
        coords
    }
}
