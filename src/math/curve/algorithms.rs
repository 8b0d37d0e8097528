use super::ParametricCurve2d;
use crate::debug::{debug_bracket, debug_point};
use crate::{math::Point2d, util::Interval};
use cgmath::prelude::*;
use log::trace;

/// Finds the point on a curve closest to `point` by repeatedly scanning a
/// shrinking bracket of t-values on a fixed grid.
///
/// Each pass samples the bracket every `step` units (half-open, starting at `bracket.min`),
/// keeps the first sample with the smallest squared distance, then narrows the bracket to
/// within one step of that sample and halves the step. The bracket is only ever narrowed,
/// never moved outside the previous one. At least one pass is always made; the search stops
/// once the step no longer exceeds `precision`.
///
/// The caller must ensure `bracket.min < bracket.max` and that `initial_step` and `precision`
/// are positive.
///
/// # Returns
/// The closest sampled point and its t-value.
pub fn closest_point_on_curve(
    curve: &impl ParametricCurve2d,
    point: Point2d,
    initial_step: f64,
    precision: f64,
    bracket: Interval<f64>,
) -> (Point2d, f64) {
    let mut bracket = bracket;
    let mut step = initial_step;

    loop {
        let count = (bracket.length() / step).ceil() as usize;
        let closest = (0..count)
            .map(|i| bracket.min + i as f64 * step)
            .map(|t| (t, (curve.sample(t) - point).magnitude2()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(bracket.min, |(t, _)| t);

        bracket = Interval::disc(closest, step).intersect(&bracket);
        trace!("step {step}: closest t = {closest}, bracket now {bracket:?}");
        debug_bracket("bracket", bracket);

        step *= 0.5;
        if step <= precision {
            let closest_point = curve.sample(closest);
            debug_point("closest", closest_point);
            return (closest_point, closest);
        }
    }
}

/// Approximates a curve by subdividing it until all segments are no longer than `max_length` units in length.
pub fn subdivided_points_along_curve(
    curve: &impl ParametricCurve2d,
    max_length: f64,
) -> Vec<Point2d> {
    SubdividedSamples::new(curve, max_length)
        .map(|(_, p)| p)
        .collect()
}

pub struct SubdividedSamples<'a, C> {
    curve: &'a C,
    stack: Vec<(f64, Point2d)>,
    length2: f64,
}

impl<'a, C: ParametricCurve2d> SubdividedSamples<'a, C> {
    fn new(curve: &'a C, max_length: f64) -> Self {
        let Interval { min, max } = curve.bounds();
        let mid = 0.5 * (min + max);
        Self {
            curve,
            stack: vec![
                (max, curve.sample(max)),
                (mid, curve.sample(mid)),
                (min, curve.sample(min)),
            ],
            length2: max_length.powi(2),
        }
    }
}

impl<'a, C: ParametricCurve2d> Iterator for SubdividedSamples<'a, C> {
    type Item = (f64, Point2d);

    fn next(&mut self) -> Option<Self::Item> {
        let (t1, p1) = self.stack.pop()?;
        if let Some((mut t2, mut p2)) = self.stack.last().copied() {
            while (p2 - p1).magnitude2() > self.length2 {
                let mid_t = 0.5 * (t1 + t2);
                (t2, p2) = (mid_t, self.curve.sample(mid_t));
                self.stack.push((t2, p2));
            }
        }
        Some((t1, p1))
    }
}
