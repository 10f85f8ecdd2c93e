use anyhow::Result;
use tracing::debug;

use crate::{
    binomial::{exact_binomial_coefficient, generalized_binomial},
    factorial::factorial,
    gaussian::approximate_binomial_coefficient,
};

pub const DEFAULT_PAIRS: [(usize, usize); 3] = [(5, 2), (10, 3), (15, 6)];

pub const DEFAULT_VECTS: usize = 20;

pub struct Report<F> {
    log: F,
}

impl<F> Report<F> {
    pub fn new(log: F) -> Self {
        Self { log }
    }
}

macro_rules! log {
    ($log:expr, $($arg:tt)*) => {
        ($log)(format!($($arg)*));
    };
}

impl<F: Fn(String)> Report<F> {
    // Stops at the first pair that can't be evaluated
    pub fn coefficients<T: AsRef<[(usize, usize)]>>(&self, pairs: T) -> Result<()> {
        for &(n, m) in pairs.as_ref() {
            debug!(n, m, "evaluating pair");
            let exact = exact_binomial_coefficient(n, m)?;
            let approx = approximate_binomial_coefficient(n, m)?;
            log!(self.log, "{exact} {approx}");
        }

        Ok(())
    }

    pub fn factorial(&self, n: usize) -> Result<()> {
        log!(self.log, "{}", factorial(n));
        Ok(())
    }

    /// A `data` of 0 asks for the maximum count, taken at exactly half of
    /// `vects` (10.5 for 21 vectors); the printed data count is truncated.
    pub fn inverse_matrices(&self, vects: usize, data: usize) -> Result<()> {
        let (data, k) = match data {
            0 => (vects / 2, vects as f64 / 2.0),
            data => (data, data as f64),
        };

        let count = generalized_binomial(vects as f64, k)?;
        log!(
            self.log,
            "inverse matrices for {vects} vectors, {data} data: {count:.0}"
        );

        Ok(())
    }
}
