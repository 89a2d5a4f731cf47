//! Bucket sizing for [`CourseStore`](crate::CourseStore).
//!
//! The table targets 1.5 records per bucket at the estimated capacity and
//! always uses a prime bucket count.

// Load factor of 1.5 expressed as a ratio so sizing stays in integers.
const LOAD_FACTOR_NUM: usize = 3;
const LOAD_FACTOR_DEN: usize = 2;

/// Trial division up to the integer square root. Numbers below 2 are not prime.
pub const fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Smallest prime `>= n`.
pub const fn next_prime(n: usize) -> usize {
    let mut candidate = n;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Smallest prime `>= ceil(estimated / 1.5)`.
pub const fn bucket_count_for(estimated: usize) -> usize {
    let target = estimated
        .saturating_mul(LOAD_FACTOR_DEN)
        .div_ceil(LOAD_FACTOR_NUM);
    next_prime(target)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn small_primes() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn next_prime_is_inclusive() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(24), 29);
        assert_eq!(next_prime(334), 337);
    }

    #[test]
    fn default_capacity_sizing() {
        assert_eq!(bucket_count_for(500), 337);
        assert_eq!(bucket_count_for(1), 2);
        assert_eq!(bucket_count_for(3), 2);
        assert_eq!(bucket_count_for(15), 11);
    }

    proptest! {
        #[test]
        fn bucket_count_is_prime_and_large_enough(n in 1usize..200_000) {
            let count = bucket_count_for(n);
            prop_assert!(is_prime(count));
            prop_assert!(count as f64 >= (n as f64 / 1.5).ceil());
            prop_assert_eq!(count, bucket_count_for(n));
        }
    }
}
