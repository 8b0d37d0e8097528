//! Geometry of closed-loop driving lanes.
//!
//! A lane is a smooth periodic curve fitted through support points, parameterised
//! by arc-length. [CurveQuery] finds the point on a lane closest to a position,
//! and the lookahead point a fixed distance further along.

pub use cgmath;
pub use curve::PeriodicSplineCurve;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::{Degeneracy, LaneError};
pub use lane_set::LaneSet;
pub use query::{ClosestPoint, CurveQuery, SearchParams};
pub use support::{SupportPoint, SupportPoints, MIN_SUPPORT_POINTS};
pub use util::Interval;

mod curve;
mod debug;
mod error;
mod lane_set;
pub mod math;
mod query;
mod support;
mod util;
