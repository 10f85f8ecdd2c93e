use num_bigint::BigUint;
use num_traits::One;

pub fn factorial(mut n: usize) -> BigUint {
    let mut result = BigUint::one();

    while n > 1 {
        result *= BigUint::from(n);
        n -= 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fac(n: usize) -> u64 {
        u64::try_from(factorial(n)).unwrap()
    }

    #[test]
    fn test_small_factorials() {
        assert_eq!(fac(0), 1);
        assert_eq!(fac(1), 1);
        assert_eq!(fac(2), 2);
        assert_eq!(fac(3), 6);
        assert_eq!(fac(5), 120);
        assert_eq!(fac(10), 3_628_800);
        assert_eq!(fac(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_recurrence() {
        for n in 1..60 {
            assert_eq!(factorial(n), BigUint::from(n) * factorial(n - 1));
        }
    }

    #[test]
    fn test_beyond_u64() {
        // 21! no longer fits in 64 bits
        let value = factorial(21);
        assert!(u64::try_from(value.clone()).is_err());
        assert_eq!(value.to_string(), "51090942171709440000");
    }
}
