//! Integration tests for fibonacci-api-core.
//!
//! These tests verify the engine and calculator through the public API:
//! - Recurrence and exactness of the engine
//! - Validation order and messages of the handlers
//! - Determinism and concurrent use of a shared calculator

use num_bigint::BigUint;

use fibonacci_api_common::{ApiError, EngineError, LimitsConfig};
use fibonacci_api_core::{Calculator, fibonacci};

// ============================================================================
// Test: Engine Recurrence
// ============================================================================

#[test]
fn test_recurrence_holds() {
    let mut prev2 = fibonacci(0).unwrap();
    let mut prev1 = fibonacci(1).unwrap();

    for n in 2..=300 {
        let current = fibonacci(n).unwrap();
        assert_eq!(current, &prev1 + &prev2, "recurrence broken at n = {n}");
        prev2 = prev1;
        prev1 = current;
    }
}

// ============================================================================
// Test: Exactness at the Upper Bound
// ============================================================================

#[test]
fn test_upper_bound_is_exact() {
    let f10000 = fibonacci(10_000).unwrap();
    let f9999 = fibonacci(9_999).unwrap();
    let f9998 = fibonacci(9_998).unwrap();

    assert_eq!(f10000, &f9999 + &f9998);

    let digits = f10000.to_str_radix(10);
    assert_eq!(digits.len(), 2090);
    assert!(digits.starts_with("33644"));
    assert!(digits.ends_with("875"));
}

// ============================================================================
// Test: Engine Precondition
// ============================================================================

#[test]
fn test_engine_rejects_negative_standalone() {
    let err = fibonacci(-42).unwrap_err();
    assert_eq!(err, EngineError::NegativeIndex { index: -42 });
}

// ============================================================================
// Test: Handlers
// ============================================================================

#[test]
fn test_sequence_matches_single_values() {
    let calc = Calculator::default();
    let sequence = calc.sequence(30).unwrap().sequence;

    for (i, value) in sequence.iter().enumerate() {
        let n = i64::try_from(i).unwrap();
        assert_eq!(value, &calc.single(n).unwrap().fibonacci);
    }
}

#[test]
fn test_validation_precedes_computation() {
    let calc = Calculator::new(LimitsConfig {
        max_index: 5,
        max_count: 5,
    });

    let err = calc.single(i64::MAX).unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));

    let err = calc.sequence(i64::MAX).unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));
}

#[test]
fn test_repeated_calls_are_identical() {
    let calc = Calculator::default();

    let first = calc.single(777).unwrap();
    let second = calc.single(777).unwrap();
    assert_eq!(first.fibonacci, second.fibonacci);

    let first = calc.sequence(64).unwrap();
    let second = calc.sequence(64).unwrap();
    assert_eq!(first.sequence, second.sequence);
}

// ============================================================================
// Test: Concurrent Use
// ============================================================================

#[test]
fn test_shared_calculator_across_threads() {
    let calc = Calculator::default();
    let expected = BigUint::from(6765u32);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| calc.single(20).unwrap().fibonacci))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
