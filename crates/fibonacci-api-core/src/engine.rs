//! The Fibonacci engine.
//!
//! [`fibonacci`] advances a pair of consecutive terms instead of recursing,
//! so cost is linear in `n` and stack depth is constant. Terms are
//! [`BigUint`] because F(10000) alone has 2090 decimal digits.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use fibonacci_api_common::EngineError;

/// Compute the `n`th Fibonacci number, with F(0) = 0 and F(1) = 1.
///
/// # Errors
///
/// Returns [`EngineError::NegativeIndex`] if `n` is negative.
///
/// # Example
///
/// ```
/// use fibonacci_api_core::fibonacci;
/// use num_bigint::BigUint;
///
/// assert_eq!(fibonacci(10).unwrap(), BigUint::from(55u32));
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<BigUint, EngineError> {
    if n < 0 {
        return Err(EngineError::NegativeIndex { index: n });
    }
    if n == 0 {
        return Ok(BigUint::zero());
    }

    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 2..=n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    Ok(b)
}
