//! Random Matrix Kernels
//!
//! `randmatstat` measures many small products (5×5 blocks assembled into
//! 5×20 and 10×10 matrices); `randmatmul` measures one large dense product.

use crate::KernelError;
use ndarray::{Array1, Array2, Axis, concatenate};
use rand::Rng;
use rand_distr::StandardNormal;

/// Block size used by `randmatstat`
pub const RANDMATSTAT_DIM: usize = 5;
/// Trial count used by the `rand_mat_stat` benchmark
pub const RANDMATSTAT_TRIALS: usize = 1000;
/// Open interval both coefficients of variation must fall in
pub const RANDMATSTAT_BOUNDS: (f64, f64) = (0.5, 1.0);

/// Matrix size used by the `rand_mat_mul` benchmark
pub const RANDMATMUL_DIM: usize = 1000;

/// n×n matrix of independent standard-normal draws
pub fn standard_normal_matrix<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Array2<f64> {
    Array2::from_shape_simple_fn((n, n), || rng.sample(StandardNormal))
}

/// n×n matrix of independent uniform [0, 1) draws
pub fn uniform_matrix<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Array2<f64> {
    Array2::from_shape_simple_fn((n, n), || rng.gen::<f64>())
}

/// trace(m⁴), with the power taken by repeated multiplication
fn trace_of_fourth_power(m: &Array2<f64>) -> f64 {
    let m2 = m.dot(m);
    let m4 = m2.dot(&m2);
    m4.diag().sum()
}

/// Population standard deviation over mean.
fn coefficient_of_variation(values: &Array1<f64>) -> Result<f64, KernelError> {
    let mean = values.mean().ok_or(KernelError::EmptySample)?;
    Ok(values.std(0.0) / mean)
}

/// Coefficients of variation of trace((PᵀP)⁴) and trace((QᵀQ)⁴).
///
/// Slots 1..t each hold one trial built from four fresh 5×5 normal blocks
/// a, b, c, d with P = [a b c d] and Q = [[a b], [c d]]. Slot 0 stays zero and
/// is included in both statistics.
pub fn randmatstat<R: Rng + ?Sized>(rng: &mut R, t: usize) -> Result<(f64, f64), KernelError> {
    if t == 0 {
        return Err(KernelError::EmptySample);
    }

    let n = RANDMATSTAT_DIM;
    let mut v = Array1::<f64>::zeros(t);
    let mut w = Array1::<f64>::zeros(t);

    for i in 1..t {
        let a = standard_normal_matrix(rng, n);
        let b = standard_normal_matrix(rng, n);
        let c = standard_normal_matrix(rng, n);
        let d = standard_normal_matrix(rng, n);

        let p = concatenate(Axis(1), &[a.view(), b.view(), c.view(), d.view()])?;
        let top = concatenate(Axis(1), &[a.view(), b.view()])?;
        let bottom = concatenate(Axis(1), &[c.view(), d.view()])?;
        let q = concatenate(Axis(0), &[top.view(), bottom.view()])?;

        v[i] = trace_of_fourth_power(&p.t().dot(&p));
        w[i] = trace_of_fourth_power(&q.t().dot(&q));
    }

    Ok((coefficient_of_variation(&v)?, coefficient_of_variation(&w)?))
}

/// Product of two fresh n×n uniform [0, 1) matrices.
pub fn randmatmul<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Array2<f64> {
    let a = uniform_matrix(rng, n);
    let b = uniform_matrix(rng, n);
    a.dot(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_trace_of_fourth_power_diagonal() {
        let m = array![[2.0, 0.0], [0.0, 3.0]];
        assert!((trace_of_fourth_power(&m) - (16.0 + 81.0)).abs() < 1e-12);
    }

    #[test]
    fn test_coefficient_of_variation_population() {
        let values = array![0.0, 2.0, 4.0];
        // mean 2, population std sqrt(8/3)
        let expected = (8.0f64 / 3.0).sqrt() / 2.0;
        assert!((coefficient_of_variation(&values).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_randmatstat_within_bounds_across_seeds() {
        let (lo, hi) = RANDMATSTAT_BOUNDS;
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (s1, s2) = randmatstat(&mut rng, RANDMATSTAT_TRIALS).unwrap();
            assert!(s1 > lo && s1 < hi, "seed {}: s1 = {}", seed, s1);
            assert!(s2 > lo && s2 < hi, "seed {}: s2 = {}", seed, s2);
        }
    }

    #[test]
    fn test_randmatstat_zero_trials() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            randmatstat(&mut rng, 0),
            Err(KernelError::EmptySample)
        ));
    }

    #[test]
    fn test_randmatmul_shape_and_sign() {
        let mut rng = StdRng::seed_from_u64(3);
        let c = randmatmul(&mut rng, 64);
        assert_eq!(c.dim(), (64, 64));
        assert!(c.iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn test_randmatmul_matches_naive_product() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 8;
        let a = uniform_matrix(&mut rng, n);
        let b = uniform_matrix(&mut rng, n);

        let mut rng = StdRng::seed_from_u64(11);
        let c = randmatmul(&mut rng, n);

        for i in 0..n {
            for j in 0..n {
                let naive: f64 = (0..n).map(|k| a[[i, k]] * b[[k, j]]).sum();
                assert!((c[[i, j]] - naive).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_uniform_matrix_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let m = uniform_matrix(&mut rng, 10);
        assert!(m.iter().all(|&x| (0.0..1.0).contains(&x)));
    }
}
