use std::f64::consts::PI;

use tracing::debug;

use crate::error::{CombiError, Result};

/// `m` may exceed `n`. Large `n` overflows `2^n` to infinity.
pub fn approximate_binomial_coefficient(n: usize, m: usize) -> Result<f64> {
    if n == 0 {
        return Err(CombiError::EmptyPopulation);
    }

    let n = n as f64;
    let m = m as f64;

    let u = n * 0.5;
    let sig = (n * 0.25).sqrt();

    let power = -(m - u).powi(2) / (2.0 * sig * sig);
    let value = 1.0 / (sig * (2.0 * PI).sqrt()) * power.exp() * n.exp2();

    debug!(n, m, u, sig, value, "gaussian approximation");
    Ok(value)
}
