/// A cubic function.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicFn {
    coeffs: [f64; 4],
    offset: f64,
}

impl CubicFn {
    /// Fits a cubic which passes through `(x1, y1)` and `(x2, y2)`
    /// with slopes `dydx1` and `dydx2` at those points.
    pub fn fit(x1: f64, y1: f64, dydx1: f64, x2: f64, y2: f64, dydx2: f64) -> Self {
        let w = x2 - x1;
        let a = 2. * y1 - 2. * y2 + w * dydx1 + w * dydx2;
        let b = -3. * y1 + 3. * y2 - 2. * w * dydx1 - w * dydx2;
        let c = w * dydx1;
        let d = y1;
        Self {
            coeffs: [a * w.powi(-3), b * w.powi(-2), c * w.powi(-1), d],
            offset: -x1,
        }
    }

    pub fn y(&self, x: f64) -> f64 {
        let c = &self.coeffs;
        let x = x + self.offset;
        ((c[0] * x + c[1]) * x + c[2]) * x + c[3]
    }

    pub fn dy(&self, x: f64) -> f64 {
        let c = &self.coeffs;
        let x = x + self.offset;
        (c[0] * 3. * x + c[1] * 2.) * x + c[2]
    }

    pub fn dy2(&self, x: f64) -> f64 {
        let c = &self.coeffs;
        let x = x + self.offset;
        c[0] * 6. * x + c[1] * 2.
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    #[test]
    pub fn fit() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"closed loops never really end...");
        for _i in 0..100 {
            let x1 = rng.gen_range(-100.0..0.0);
            let x2 = rng.gen_range(1.0..100.0);
            let y1 = rng.gen_range(-100.0..100.0);
            let y2 = rng.gen_range(-100.0..100.0);
            let dydx1 = rng.gen_range(-10.0..10.0);
            let dydx2 = rng.gen_range(-10.0..10.0);
            let cubic = CubicFn::fit(x1, y1, dydx1, x2, y2, dydx2);

            assert_approx_eq!(cubic.y(x1), y1, 0.01);
            assert_approx_eq!(cubic.dy(x1), dydx1, 0.01);
            assert_approx_eq!(cubic.y(x2), y2, 0.01);
            assert_approx_eq!(cubic.dy(x2), dydx2, 0.01);
        }
    }

    #[test]
    pub fn straight_lines_have_no_curvature() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"closed loops never really end...");
        for _i in 0..100 {
            let x1 = rng.gen_range(-100.0..0.0);
            let x2 = rng.gen_range(1.0..100.0);
            let y1 = rng.gen_range(-100.0..100.0);
            let y2 = rng.gen_range(-100.0..100.0);
            let dydx = (y2 - y1) / (x2 - x1);
            let cubic = CubicFn::fit(x1, y1, dydx, x2, y2, dydx);

            assert_approx_eq!(cubic.y(0.5 * (x1 + x2)), 0.5 * (y1 + y2), 0.01);
            assert_approx_eq!(cubic.dy(0.5 * (x1 + x2)), dydx, 0.01);
            assert_approx_eq!(cubic.dy2(x1), 0.0, 0.001);
            assert_approx_eq!(cubic.dy2(x2), 0.0, 0.001);
        }
    }

    #[test]
    pub fn second_derivative_of_parabola() {
        // y = x^2 on [1, 3]
        let cubic = CubicFn::fit(1.0, 1.0, 2.0, 3.0, 9.0, 6.0);
        assert_approx_eq!(cubic.y(2.0), 4.0);
        assert_approx_eq!(cubic.dy2(1.0), 2.0);
        assert_approx_eq!(cubic.dy2(2.5), 2.0);
    }
}
