//! Stock-adjustment validation.
//!
//! The only multi-path branch in the system: two failure kinds, one success
//! path. Failures are shown inline next to the input field; the form stays
//! open for correction.

use thiserror::Error;

/// Why a requested stock adjustment was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdjustmentError {
    /// Input did not parse as an integer, or parsed to zero (a no-op).
    #[error("enter a valid, non-zero number")]
    InvalidAmount,

    /// Applying the adjustment would drive the quantity below zero.
    #[error("adjustment cannot result in negative stock (current {current}, requested {requested})")]
    NegativeResultingStock { current: i64, requested: i64 },
}

/// Validates a user-entered adjustment against the current quantity.
///
/// Returns the delta to hand to [`ItemStore::adjust`](crate::store::ItemStore::adjust);
/// the store itself performs no bounds check.
pub fn validate_adjustment(current: i64, input: &str) -> Result<i64, AdjustmentError> {
    let requested: i64 = input
        .trim()
        .parse()
        .map_err(|_| AdjustmentError::InvalidAmount)?;
    if requested == 0 {
        return Err(AdjustmentError::InvalidAmount);
    }
    if current.saturating_add(requested) < 0 {
        return Err(AdjustmentError::NegativeResultingStock { current, requested });
    }
    Ok(requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_delta_within_stock_is_accepted() {
        assert_eq!(validate_adjustment(8, "-3"), Ok(-3));
    }

    #[test]
    fn positive_delta_is_accepted() {
        assert_eq!(validate_adjustment(0, "25"), Ok(25));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(validate_adjustment(8, "  -3 "), Ok(-3));
    }

    #[test]
    fn overdraw_is_rejected_with_context() {
        assert_eq!(
            validate_adjustment(8, "-10"),
            Err(AdjustmentError::NegativeResultingStock {
                current: 8,
                requested: -10,
            })
        );
    }

    #[test]
    fn zero_is_rejected_as_a_noop() {
        assert_eq!(validate_adjustment(8, "0"), Err(AdjustmentError::InvalidAmount));
    }

    #[test]
    fn unparsable_input_is_rejected() {
        for input in ["abc", "", "1.5", "--4", "ten"] {
            assert_eq!(
                validate_adjustment(8, input),
                Err(AdjustmentError::InvalidAmount),
                "input {input:?}"
            );
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: exactly the non-zero deltas with a non-negative
            /// resulting quantity pass.
            #[test]
            fn accepts_exactly_nonnegative_results(
                current in 0i64..10_000,
                delta in -20_000i64..20_000,
            ) {
                let outcome = validate_adjustment(current, &delta.to_string());
                if delta == 0 {
                    prop_assert_eq!(outcome, Err(AdjustmentError::InvalidAmount));
                } else if current + delta < 0 {
                    prop_assert_eq!(
                        outcome,
                        Err(AdjustmentError::NegativeResultingStock {
                            current,
                            requested: delta,
                        })
                    );
                } else {
                    prop_assert_eq!(outcome, Ok(delta));
                }
            }
        }
    }
}
