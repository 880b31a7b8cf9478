use std::error::Error;
use std::fmt::{self, Display};

///
/// Error type for configurations that the p-adic descriptor layer cannot
/// represent. The original system left most of these cases as silent gaps;
/// here every one of them is an explicit, observable outcome.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// `p^precision_cap` does not fit into the fixed-width workspace that
    /// base ring elements are computed in.
    PrecisionCapTooLarge { prime: i64, precision_cap: usize },
    /// An exact coefficient has a denominator divisible by p and hence no
    /// image in the ring of integers of the base ring.
    RamifiedDenominator { prime: i64 },
    /// The leading coefficient of the defining polynomial becomes a non-unit
    /// after truncation to the base ring, so the truncated polynomial would
    /// not have the same degree as the exact modulus.
    NonUnitLeadingCoefficient,
    /// `integer_ring()` requires the exact defining polynomial to have
    /// integral coefficients; extensions with non-integral generators do not
    /// have a ring-of-integers view in this framework.
    NonIntegralModulus,
}

impl Display for ExtensionError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExtensionError::PrecisionCapTooLarge { prime, precision_cap } => {
                write!(f, "cannot track {} digits of {}-adic precision in the fixed-width element workspace", precision_cap, prime)
            },
            ExtensionError::RamifiedDenominator { prime } => {
                write!(f, "coefficient has a denominator divisible by {} and is not integral over the base ring", prime)
            },
            ExtensionError::NonUnitLeadingCoefficient => {
                write!(f, "leading coefficient of the defining polynomial is not a unit in the base ring")
            },
            ExtensionError::NonIntegralModulus => {
                write!(f, "ring of integers is only supported for extensions with an integral defining polynomial")
            }
        }
    }
}

impl Error for ExtensionError {}

#[test]
fn test_display_mentions_configuration() {
    let err = ExtensionError::PrecisionCapTooLarge { prime: 5, precision_cap: 100 };
    assert!(format!("{}", err).contains("5"));
    assert!(format!("{}", err).contains("100"));
    let err = ExtensionError::RamifiedDenominator { prime: 7 };
    assert!(format!("{}", err).contains("7"));
}
