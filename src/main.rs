use std::time::{Duration, Instant};

use lane_map::{math::Point2d, LaneError, LaneSet};

/// Support points every this many radians around each demo lane.
const SUPPORT_SPACING: f64 = std::f64::consts::PI / 12.0;

/// The lookahead distance used by the demo, in m.
const LOOKAHEAD: f64 = 0.5;

/// Rows of an ellipse-shaped lane, with arc-lengths from the chord lengths between rows.
fn ellipse_rows(a: f64, b: f64) -> Vec<[f64; 3]> {
    let count = (std::f64::consts::TAU / SUPPORT_SPACING).round() as usize;
    let mut rows = Vec::with_capacity(count + 1);
    let mut arc_length = 0.0;
    let mut prev: Option<(f64, f64)> = None;
    for i in 0..=count {
        let angle = (i % count) as f64 * SUPPORT_SPACING;
        let (x, y) = (a * angle.cos(), b * angle.sin());
        if let Some((px, py)) = prev {
            arc_length += (x - px).hypot(y - py);
        }
        rows.push([arc_length, x, y]);
        prev = Some((x, y));
    }
    rows
}

fn main() -> Result<(), LaneError> {
    let inner = ellipse_rows(4.0, 2.0);
    let outer = ellipse_rows(4.5, 2.5);
    let lanes = LaneSet::from_rows([inner.as_slice(), outer.as_slice()])?;

    println!("Querying...");
    const NUM_TICKS: u32 = 1000;
    for round in 0..5 {
        let start = Instant::now();
        let mut last = Vec::new();
        for tick in 0..NUM_TICKS {
            let angle = (round * NUM_TICKS + tick) as f64 * 0.01;
            let vehicle = Point2d::new(4.2 * angle.cos(), 2.2 * angle.sin());
            last = lanes.lookahead_points(vehicle, LOOKAHEAD);
        }
        let tick: Duration = start.elapsed() / NUM_TICKS;
        println!(
            "Avg. tick: {:?} ({} lanes) --> {:.0} ticks/s, last lookahead {:?}",
            tick,
            lanes.len(),
            1.0 / tick.as_secs_f64(),
            last.iter().map(|p| (p.point.x, p.point.y)).collect::<Vec<_>>(),
        );
    }
    Ok(())
}
