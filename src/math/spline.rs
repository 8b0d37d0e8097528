use super::CubicFn;
use crate::util::Interval;

/// A periodic cubic spline in one dimension.
///
/// The spline interpolates a set of knots `(x_i, y_i)` where the first and last
/// values are equal, and has continuous first and second derivatives everywhere,
/// including across the seam where `x_n` wraps back around to `x_0`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodicCubicFn {
    /// The knot positions, strictly increasing.
    knots: Vec<f64>,
    /// One cubic per interval between consecutive knots.
    segments: Vec<CubicFn>,
}

impl PeriodicCubicFn {
    /// Fits a periodic cubic spline through the given knots.
    ///
    /// The caller must ensure that `xs` is strictly increasing, that `xs` and `ys`
    /// have the same length of at least 4, and that the first and last `ys` are equal.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        debug_assert!(xs.len() >= 4);

        // `n` intervals, and `n` unknown slopes since the last knot shares the first's slope
        let n = xs.len() - 1;
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let delta: Vec<f64> = (0..n).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

        let mut sub = vec![0.0; n];
        let mut diag = vec![0.0; n];
        let mut sup = vec![0.0; n];
        let mut rhs = vec![0.0; n];
        for i in 0..n {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            sub[i] = h[i];
            diag[i] = 2.0 * (h[prev] + h[i]);
            sup[i] = h[prev];
            rhs[i] = 3.0 * (h[i] * delta[prev] + h[prev] * delta[i]);
        }
        let slopes = solve_cyclic_tridiagonal(&sub, &diag, &sup, &rhs);

        let segments = (0..n)
            .map(|i| {
                let m2 = slopes[(i + 1) % n];
                CubicFn::fit(xs[i], ys[i], slopes[i], xs[i + 1], ys[i + 1], m2)
            })
            .collect();

        Self {
            knots: xs.to_vec(),
            segments,
        }
    }

    /// The range of x-values covered by a single period.
    pub fn bounds(&self) -> Interval<f64> {
        Interval::new(self.knots[0], self.knots[self.knots.len() - 1])
    }

    /// The length of a single period.
    pub fn period(&self) -> f64 {
        self.bounds().length()
    }

    pub fn y(&self, x: f64) -> f64 {
        let (segment, x) = self.segment(x);
        segment.y(x)
    }

    pub fn dy(&self, x: f64) -> f64 {
        let (segment, x) = self.segment(x);
        segment.dy(x)
    }

    pub fn dy2(&self, x: f64) -> f64 {
        let (segment, x) = self.segment(x);
        segment.dy2(x)
    }

    /// Wraps `x` into the first period and finds the segment which contains it.
    fn segment(&self, x: f64) -> (&CubicFn, f64) {
        let bounds = self.bounds();
        let x = bounds.min + (x - bounds.min).rem_euclid(self.period());

        let idx = self.knots.partition_point(|&k| k <= x).saturating_sub(1);
        let idx = usize::min(idx, self.segments.len() - 1);

        (&self.segments[idx], x)
    }
}

/// Solves a cyclic tridiagonal linear system.
///
/// Row `i` of the system reads
/// `sub[i] * x[i - 1] + diag[i] * x[i] + sup[i] * x[i + 1] = rhs[i]`,
/// with indices taken modulo `n`, so `sub[0]` and `sup[n - 1]` are the corner entries.
/// The system must be diagonally dominant and have at least 3 rows.
pub fn solve_cyclic_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    debug_assert!(n >= 3);

    // Sherman-Morrison: solve with the corners folded into the diagonal, then correct
    let top_right = sub[0];
    let bottom_left = sup[n - 1];
    let gamma = -diag[0];

    let mut diag = diag.to_vec();
    diag[0] -= gamma;
    diag[n - 1] -= bottom_left * top_right / gamma;

    let x = solve_tridiagonal(sub, &diag, sup, rhs);

    let mut u = vec![0.0; n];
    u[0] = gamma;
    u[n - 1] = bottom_left;
    let z = solve_tridiagonal(sub, &diag, sup, &u);

    let fact = (x[0] + top_right * x[n - 1] / gamma) / (1.0 + z[0] + top_right * z[n - 1] / gamma);

    x.iter().zip(z).map(|(x, z)| x - fact * z).collect()
}

/// Solves a (non-cyclic) tridiagonal system with the Thomas algorithm.
/// `sub[0]` and `sup[n - 1]` are ignored.
fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];

    c[0] = sup[0] / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - sub[i] * c[i - 1];
        c[i] = sup[i] / denom;
        d[i] = (rhs[i] - sub[i] * d[i - 1]) / denom;
    }

    for i in (0..n - 1).rev() {
        d[i] -= c[i] * d[i + 1];
    }
    d
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn sine_spline(count: usize) -> PeriodicCubicFn {
        let period = std::f64::consts::TAU;
        let xs: Vec<f64> = (0..=count)
            .map(|i| period * i as f64 / count as f64)
            .collect();
        let mut ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        ys[count] = ys[0];
        PeriodicCubicFn::fit(&xs, &ys)
    }

    #[test]
    fn cyclic_solver_matches_product() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"closed loops never really end...");
        for n in 3..12 {
            let sub: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let sup: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let diag: Vec<f64> = (0..n).map(|_| rng.gen_range(3.0..5.0)).collect();
            let expected: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
            let rhs: Vec<f64> = (0..n)
                .map(|i| {
                    sub[i] * expected[(i + n - 1) % n]
                        + diag[i] * expected[i]
                        + sup[i] * expected[(i + 1) % n]
                })
                .collect();

            let x = solve_cyclic_tridiagonal(&sub, &diag, &sup, &rhs);
            for (x, e) in x.into_iter().zip(expected) {
                assert_approx_eq!(x, e, 1e-9);
            }
        }
    }

    #[test]
    fn interpolates_knots() {
        let xs = [0.0, 1.0, 2.5, 3.0, 4.5, 6.0];
        let ys = [1.0, 3.0, -2.0, 0.5, 4.0, 1.0];
        let spline = PeriodicCubicFn::fit(&xs, &ys);
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_approx_eq!(spline.y(*x), *y, 1e-9);
        }
    }

    #[test]
    fn derivatives_match_across_seam() {
        let xs = [0.0, 1.0, 2.5, 3.0, 4.5, 6.0];
        let ys = [1.0, 3.0, -2.0, 0.5, 4.0, 1.0];
        let spline = PeriodicCubicFn::fit(&xs, &ys);
        let eps = 1e-9;
        assert_approx_eq!(spline.dy(eps), spline.dy(6.0 - eps), 1e-6);
        assert_approx_eq!(spline.dy2(eps), spline.dy2(6.0 - eps), 1e-6);
    }

    #[test]
    fn approximates_sine() {
        let spline = sine_spline(32);
        for i in 0..100 {
            let x = 0.0628 * i as f64;
            assert_approx_eq!(spline.y(x), x.sin(), 1e-4);
            assert_approx_eq!(spline.dy(x), x.cos(), 1e-3);
        }
    }

    #[test]
    fn wraps_outside_bounds() {
        let spline = sine_spline(16);
        let period = spline.period();
        for x in [-7.5, -0.3, 0.0, 1.2, 5.9] {
            assert_approx_eq!(spline.y(x + period), spline.y(x), 1e-9);
            assert_approx_eq!(spline.y(x - 3.0 * period), spline.y(x), 1e-9);
        }
    }
}
