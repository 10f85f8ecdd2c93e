use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use crate::error::{CombiError, Result};

/// Fails with `SubsetTooLarge` when `m > n`.
pub fn exact_binomial_coefficient(n: usize, m: usize) -> Result<BigUint> {
    if m > n {
        return Err(CombiError::SubsetTooLarge {
            n: n as f64,
            m: m as f64,
        });
    }

    let k = m.min(n - m);
    let mut result = BigUint::one();
    for i in 0..k {
        result *= BigUint::from(n - i);
        result /= BigUint::from(i + 1);
    }

    debug!(n, m, %result, "exact binomial coefficient");
    Ok(result)
}

// ln(Γ(n+1) / (Γ(k+1) Γ(n-k+1)))
pub fn log_generalized_binomial(n: f64, k: f64) -> Result<f64> {
    if n.is_nan() || k.is_nan() {
        return Err(CombiError::NotANumber);
    }
    if n < 0.0 || k < 0.0 {
        return Err(CombiError::NegativeInput { n, k });
    }
    if n < k {
        return Err(CombiError::SubsetTooLarge { n, m: k });
    }

    let (a, _) = libm::lgamma_r(n + 1.0);
    let (b, _) = libm::lgamma_r(k + 1.0);
    let (c, _) = libm::lgamma_r(n - k + 1.0);
    Ok(a - b - c)
}

pub fn generalized_binomial(n: f64, k: f64) -> Result<f64> {
    let value = log_generalized_binomial(n, k)?.exp();
    debug!(n, k, value, "generalized binomial coefficient");
    Ok(value)
}
