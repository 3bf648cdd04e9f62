//! Deterministic arbitration of the three department verdicts.

use crate::types::{DepartmentResult, Verdict};

/// Combine three department verdicts into the final decision.
///
/// Majority-with-veto: two or more REJECTs veto regardless of the third
/// verdict; unanimous APPROVE is required for approval; every other
/// combination is CONDITIONAL. Total over all verdict triples and
/// order-independent.
pub fn arbitrate(verdicts: [Verdict; 3]) -> Verdict {
    let rejects = verdicts.iter().filter(|v| **v == Verdict::Reject).count();
    let approves = verdicts.iter().filter(|v| **v == Verdict::Approve).count();

    if rejects >= 2 {
        Verdict::Reject
    } else if approves == verdicts.len() {
        Verdict::Approve
    } else {
        Verdict::Conditional
    }
}

/// Arbitrate from full department results.
pub fn arbitrate_results(results: &[DepartmentResult; 3]) -> Verdict {
    arbitrate([results[0].verdict, results[1].verdict, results[2].verdict])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::types::Verdict::{Approve, Conditional, Reject};

    const ALL: [Verdict; 3] = [Approve, Conditional, Reject];

    #[test]
    fn two_rejects_veto() {
        assert_eq!(arbitrate([Reject, Reject, Approve]), Reject);
        assert_eq!(arbitrate([Reject, Reject, Conditional]), Reject);
        assert_eq!(arbitrate([Reject, Reject, Reject]), Reject);
    }

    #[test]
    fn approval_requires_unanimity() {
        assert_eq!(arbitrate([Approve, Approve, Approve]), Approve);
        assert_eq!(arbitrate([Approve, Conditional, Approve]), Conditional);
        assert_eq!(arbitrate([Reject, Approve, Approve]), Conditional);
    }

    #[test]
    fn single_reject_or_any_conditional_yields_conditional() {
        assert_eq!(arbitrate([Conditional, Conditional, Conditional]), Conditional);
        assert_eq!(arbitrate([Approve, Approve, Reject]), Conditional);
        assert_eq!(arbitrate([Conditional, Reject, Approve]), Conditional);
    }

    #[test]
    fn total_over_all_27_triples() {
        for a in ALL {
            for b in ALL {
                for c in ALL {
                    let decision = arbitrate([a, b, c]);
                    let rejects = [a, b, c].iter().filter(|v| **v == Reject).count();
                    let approves = [a, b, c].iter().filter(|v| **v == Approve).count();
                    match decision {
                        Reject => assert!(rejects >= 2),
                        Approve => assert_eq!(approves, 3),
                        Conditional => {
                            assert!(rejects < 2);
                            assert!(approves < 3);
                        }
                    }
                }
            }
        }
    }

    fn verdict_strategy() -> impl Strategy<Value = Verdict> {
        prop_oneof![Just(Approve), Just(Conditional), Just(Reject)]
    }

    proptest! {
        #[test]
        fn order_independent(
            a in verdict_strategy(),
            b in verdict_strategy(),
            c in verdict_strategy(),
        ) {
            let expected = arbitrate([a, b, c]);
            for permutation in [
                [a, c, b],
                [b, a, c],
                [b, c, a],
                [c, a, b],
                [c, b, a],
            ] {
                prop_assert_eq!(arbitrate(permutation), expected);
            }
        }
    }
}
