//! Mandelbrot Escape-Time Kernel

/// Iteration bound of `mandel`
pub const MANDEL_MAX_ITER: u32 = 79;
/// Sum of `mandelperf()` over the whole grid
pub const MANDEL_EXPECTED_SUM: u32 = 14304;

/// A point in the complex plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Create a complex number
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Modulus (`hypot`)
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// `self² + c`
    fn square_add(self, c: Complex) -> Complex {
        Complex::new(
            self.re * self.re - self.im * self.im + c.re,
            self.re * self.im + self.im * self.re + c.im,
        )
    }
}

/// Escape time of `z` under z ← z² + c with c = z.
///
/// Returns the iteration at which |z| first exceeds 2, or `MANDEL_MAX_ITER`
/// when it never does. The result is always in `0..=MANDEL_MAX_ITER`.
pub fn mandel(z: Complex) -> u32 {
    let c = z;
    let mut z = z;
    for n in 0..MANDEL_MAX_ITER {
        if z.norm() > 2.0 {
            return n;
        }
        z = z.square_add(c);
    }
    MANDEL_MAX_ITER
}

/// Evenly spaced values in `[start, stop)`.
///
/// Each value is computed as `start + i * delta` rather than accumulated, with
/// `delta = (start + step) - start`, the same points NumPy's `arange` yields.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let len = ((stop - start) / step).ceil().max(0.0) as usize;
    let delta = (start + step) - start;
    (0..len).map(|i| start + i as f64 * delta).collect()
}

/// Escape times over re ∈ [-2.0, 0.5) × im ∈ [-1.0, 1.0), step 0.1.
///
/// Row-major with the real part in the outer loop: 25 × 20 = 500 counts.
pub fn mandelperf() -> Vec<u32> {
    let re_axis = arange(-2.0, 0.5, 0.1);
    let im_axis = arange(-1.0, 1.0, 0.1);

    let mut counts = Vec::with_capacity(re_axis.len() * im_axis.len());
    for &re in &re_axis {
        for &im in &im_axis {
            counts.push(mandel(Complex::new(re, im)));
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandel_escapes_immediately() {
        assert_eq!(mandel(Complex::new(3.0, 0.0)), 0);
        assert_eq!(mandel(Complex::new(-2.0, -1.0)), 0);
    }

    #[test]
    fn test_mandel_interior_hits_bound() {
        assert_eq!(mandel(Complex::new(0.0, 0.0)), MANDEL_MAX_ITER);
        assert_eq!(mandel(Complex::new(-1.0, 0.0)), MANDEL_MAX_ITER);
    }

    #[test]
    fn test_mandel_bounded() {
        for re in -30..=30 {
            for im in -30..=30 {
                let z = Complex::new(re as f64 / 10.0, im as f64 / 10.0);
                assert!(mandel(z) <= 80);
            }
        }
    }

    #[test]
    fn test_arange_lengths() {
        assert_eq!(arange(-2.0, 0.5, 0.1).len(), 25);
        assert_eq!(arange(-1.0, 1.0, 0.1).len(), 20);
        assert!(arange(1.0, 0.0, 0.1).is_empty());
    }

    #[test]
    fn test_arange_values_not_accumulated() {
        let axis = arange(-1.0, 1.0, 0.1);
        let delta = (-1.0 + 0.1) - -1.0;
        assert_eq!(axis[0], -1.0);
        assert_eq!(axis[19], -1.0 + 19.0 * delta);
    }

    #[test]
    fn test_mandelperf_grid() {
        let counts = mandelperf();
        assert_eq!(counts.len(), 500);
        assert_eq!(counts.iter().sum::<u32>(), MANDEL_EXPECTED_SUM);
    }

    #[test]
    fn test_mandelperf_row_major() {
        let counts = mandelperf();
        // First row is re = -2.0, swept over the imaginary axis.
        assert_eq!(counts[0], mandel(Complex::new(-2.0, -1.0)));
        let last_re = arange(-2.0, 0.5, 0.1)[24];
        let last_im = arange(-1.0, 1.0, 0.1)[19];
        assert_eq!(counts[499], mandel(Complex::new(last_re, last_im)));
    }
}
