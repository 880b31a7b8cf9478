use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::ExtensionError;
use crate::exact::{ExactField, Rational};
use crate::primality::is_prime;
use crate::print_mode::PrintOptions;

///
/// How a p-adic ring tracks the precision of its elements. Coercion into a
/// fraction field is implemented by a different map for each discipline,
/// so the tag participates in coercion decisions; it does not participate
/// in ring equality.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PrecisionDiscipline {
    /// Elements carry an absolute precision bounded by the cap.
    CappedAbsolute,
    /// Elements carry a relative precision bounded by the cap.
    CappedRelative,
    /// Elements behave like floating-point numbers: no error terms are
    /// tracked, every element claims the full working precision.
    FloatingPoint,
}

impl PrecisionDiscipline {

    pub(crate) fn phrase(&self) -> &'static str {
        match self {
            PrecisionDiscipline::CappedAbsolute => "capped absolute",
            PrecisionDiscipline::CappedRelative => "capped relative",
            PrecisionDiscipline::FloatingPoint => "floating point",
        }
    }
}

///
/// Descriptor of a p-adic base ring `Zp` or field `Qp` at a fixed precision
/// cap. All element arithmetic happens in the fixed-width workspace
/// `Z/p^cap`, so `p^cap` must fit into 64 bits; a cap that does not is
/// rejected at construction time.
///
/// This is the bottom of every extension tower: the ground ring that
/// [`crate::extension::PAdicExtension::ground_ring_of_tower()`] eventually
/// reaches.
///
/// # Example
/// ```
/// # use padic_rings::base::*;
/// let zp = PAdicBase::zp(5, 5).unwrap();
/// assert_eq!(5, zp.prime());
/// assert_eq!("5-adic ring with capped relative precision 5", format!("{}", zp));
/// assert_eq!(zp, zp.fraction_field().integer_ring());
/// ```
///
#[derive(Clone, Debug)]
pub struct PAdicBase {
    prime: i64,
    precision_cap: usize,
    // p^precision_cap, the workspace modulus elements are reduced by
    modulus: u64,
    field: bool,
    discipline: PrecisionDiscipline,
    print_options: PrintOptions,
}

///
/// An element of a [`PAdicBase`]: a lift modulo `p^cap`, known up to
/// `O(p^prec)`. Only the operations the descriptor layer needs exist;
/// a full p-adic arithmetic is deliberately out of scope.
///
#[derive(Clone, Copy, Debug)]
pub struct PAdicBaseEl {
    lift: u64,
    prec: u32,
}

impl PAdicBaseEl {

    pub fn lift(&self) -> u64 {
        self.lift
    }

    pub fn precision(&self) -> u32 {
        self.prec
    }
}

impl PAdicBase {

    ///
    /// Creates the descriptor of `Zp` (or `Qp` if `field` is set) with the
    /// given precision cap, precision discipline and print configuration.
    /// The prime is checked by Miller-Rabin, as for the caps: tracking more
    /// digits than the workspace supports is an explicit error.
    ///
    pub fn new(prime: i64, precision_cap: usize, field: bool, discipline: PrecisionDiscipline, print_options: PrintOptions) -> Result<Self, ExtensionError> {
        assert!(is_prime(prime, 10), "{} is not prime", prime);
        assert!(precision_cap > 0);
        let modulus = u32::try_from(precision_cap).ok()
            .and_then(|cap| (prime as u64).checked_pow(cap))
            .ok_or(ExtensionError::PrecisionCapTooLarge { prime, precision_cap })?;
        Ok(PAdicBase { prime, precision_cap, modulus, field, discipline, print_options })
    }

    ///
    /// The ring of p-adic integers `Zp` with default (series, capped
    /// relative) configuration.
    ///
    pub fn zp(prime: i64, precision_cap: usize) -> Result<Self, ExtensionError> {
        Self::new(prime, precision_cap, false, PrecisionDiscipline::CappedRelative, PrintOptions::default())
    }

    ///
    /// The field of p-adic numbers `Qp` with default (series, capped
    /// relative) configuration.
    ///
    pub fn qp(prime: i64, precision_cap: usize) -> Result<Self, ExtensionError> {
        Self::new(prime, precision_cap, true, PrecisionDiscipline::CappedRelative, PrintOptions::default())
    }

    pub fn prime(&self) -> i64 {
        self.prime
    }

    ///
    /// The characteristic of the residue field, which for a base ring is
    /// just the prime itself.
    ///
    pub fn residue_characteristic(&self) -> i64 {
        self.prime
    }

    pub fn precision_cap(&self) -> usize {
        self.precision_cap
    }

    pub fn is_field(&self) -> bool {
        self.field
    }

    pub fn discipline(&self) -> PrecisionDiscipline {
        self.discipline
    }

    pub fn print_options(&self) -> &PrintOptions {
        &self.print_options
    }

    ///
    /// The exact counterpart of this ring, which is the field of rational
    /// numbers. Always a field, even for `Zp`.
    ///
    pub fn exact_field(&self) -> ExactField {
        ExactField::Rationals
    }

    ///
    /// The field `Qp` with the same prime, cap and print configuration.
    /// Idempotent on fields.
    ///
    pub fn fraction_field(&self) -> PAdicBase {
        let mut result = self.clone();
        result.field = true;
        result
    }

    ///
    /// The ring `Zp` with the same prime, cap and print configuration.
    /// Idempotent on rings.
    ///
    pub fn integer_ring(&self) -> PAdicBase {
        let mut result = self.clone();
        result.field = false;
        result
    }

    pub fn zero(&self) -> PAdicBaseEl {
        PAdicBaseEl { lift: 0, prec: self.precision_cap as u32 }
    }

    pub fn one(&self) -> PAdicBaseEl {
        PAdicBaseEl { lift: 1, prec: self.precision_cap as u32 }
    }

    pub fn add(&self, lhs: &PAdicBaseEl, rhs: &PAdicBaseEl) -> PAdicBaseEl {
        PAdicBaseEl {
            lift: ((lhs.lift as u128 + rhs.lift as u128) % self.modulus as u128) as u64,
            prec: lhs.prec.min(rhs.prec),
        }
    }

    pub fn mul(&self, lhs: &PAdicBaseEl, rhs: &PAdicBaseEl) -> PAdicBaseEl {
        PAdicBaseEl {
            lift: ((lhs.lift as u128 * rhs.lift as u128) % self.modulus as u128) as u64,
            prec: lhs.prec.min(rhs.prec),
        }
    }

    pub fn negate(&self, el: &PAdicBaseEl) -> PAdicBaseEl {
        PAdicBaseEl {
            lift: if el.lift == 0 { 0 } else { self.modulus - el.lift },
            prec: el.prec,
        }
    }

    pub fn is_zero(&self, el: &PAdicBaseEl) -> bool {
        el.lift % self.pow_p(el.prec) == 0
    }

    ///
    /// Equality up to the joint known precision of both elements.
    ///
    pub fn eq_el(&self, lhs: &PAdicBaseEl, rhs: &PAdicBaseEl) -> bool {
        let m = self.pow_p(lhs.prec.min(rhs.prec));
        lhs.lift % m == rhs.lift % m
    }

    ///
    /// The p-adic valuation of an element, or `None` if the element is
    /// zero up to its known precision.
    ///
    pub fn valuation(&self, el: &PAdicBaseEl) -> Option<u32> {
        if self.is_zero(el) {
            return None;
        }
        let mut v = 0;
        let mut lift = el.lift;
        while lift % self.prime as u64 == 0 {
            lift /= self.prime as u64;
            v += 1;
        }
        return Some(v);
    }

    ///
    /// Returns the same residue annotated with a different known precision,
    /// clamped to the cap. Used by the fraction field coercion maps, which
    /// re-express precision but never change the underlying value.
    ///
    pub fn with_precision(&self, el: &PAdicBaseEl, prec: u32) -> PAdicBaseEl {
        PAdicBaseEl { lift: el.lift, prec: prec.min(self.precision_cap as u32) }
    }

    ///
    /// Reduces an exact rational coefficient into this ring. Fails if the
    /// denominator is divisible by p, since such a coefficient has negative
    /// valuation and no image modulo `p^cap`.
    ///
    pub fn from_rational(&self, c: &Rational) -> Result<PAdicBaseEl, ExtensionError> {
        if c.den() % self.prime as u128 == 0 {
            return Err(ExtensionError::RamifiedDenominator { prime: self.prime });
        }
        let num = c.num().rem_euclid(self.modulus as i128) as u64;
        let den = (c.den() % self.modulus as u128) as u64;
        let den_inv = inv_mod(den, self.modulus).ok_or(ExtensionError::RamifiedDenominator { prime: self.prime })?;
        Ok(PAdicBaseEl {
            lift: ((num as u128 * den_inv as u128) % self.modulus as u128) as u64,
            prec: self.precision_cap as u32,
        })
    }

    ///
    /// Samples an element with full precision, uniformly over the lifts
    /// modulo `p^cap` up to the bias of the modulo reduction. Uniformity is
    /// only as good as the supplied random source.
    ///
    pub fn random_element<F>(&self, mut rng: F) -> PAdicBaseEl
        where F: FnMut() -> u64
    {
        PAdicBaseEl {
            lift: rng() % self.modulus,
            prec: self.precision_cap as u32,
        }
    }

    fn pow_p(&self, e: u32) -> u64 {
        if e as usize >= self.precision_cap {
            self.modulus
        } else {
            (self.prime as u64).pow(e)
        }
    }
}

///
/// Ring equality: same prime, same precision cap, same ring/field flag,
/// same precision discipline, and print configurations that agree on
/// everything the active print mode consults.
///
impl PartialEq for PAdicBase {

    fn eq(&self, other: &Self) -> bool {
        self.prime == other.prime &&
            self.precision_cap == other.precision_cap &&
            self.field == other.field &&
            self.discipline == other.discipline &&
            self.print_options.eq_for_mode(&other.print_options)
    }
}

impl Display for PAdicBase {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-adic {} with {} precision {}",
            self.prime,
            if self.field { "field" } else { "ring" },
            self.discipline.phrase(),
            self.precision_cap)
    }
}

fn inv_mod(a: u64, m: u64) -> Option<u64> {
    let (mut old_r, mut r) = (a as i128, m as i128);
    let (mut old_s, mut s) = (1_i128, 0_i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    return Some(old_s.rem_euclid(m as i128) as u64);
}

#[test]
fn test_new_rejects_oversized_cap() {
    assert!(PAdicBase::zp(5, 5).is_ok());
    assert_eq!(
        Err(ExtensionError::PrecisionCapTooLarge { prime: 5, precision_cap: 100 }),
        PAdicBase::zp(5, 100).map(|_| ())
    );
}

#[test]
#[should_panic]
fn test_new_rejects_composite() {
    let _ = PAdicBase::zp(6, 5);
}

#[test]
fn test_field_views() {
    let zp = PAdicBase::zp(5, 5).unwrap();
    let qp = zp.fraction_field();
    assert!(qp.is_field());
    assert_eq!(qp, PAdicBase::qp(5, 5).unwrap());
    assert_eq!(zp, qp.integer_ring());
    assert_eq!(qp, qp.fraction_field());
    assert_eq!(ExactField::Rationals, zp.exact_field());
}

#[test]
fn test_from_rational() {
    let zp = PAdicBase::zp(5, 5).unwrap();
    let a = zp.from_rational(&Rational::from_integer(-5)).unwrap();
    assert_eq!(5u64.pow(5) - 5, a.lift());
    assert_eq!(Some(1), zp.valuation(&a));
    // 1/2 = 1563 mod 5^5, since 2 * 1563 = 3126 = 1 mod 3125
    let half = zp.from_rational(&Rational::new(1, 2)).unwrap();
    assert_eq!(1563, half.lift());
    assert_eq!(
        Err(ExtensionError::RamifiedDenominator { prime: 5 }),
        zp.from_rational(&Rational::new(1, 10)).map(|_| ())
    );
}

#[test]
fn test_element_arithmetic() {
    let zp = PAdicBase::zp(5, 3).unwrap();
    let a = zp.from_rational(&Rational::from_integer(117)).unwrap();
    let b = zp.from_rational(&Rational::from_integer(13)).unwrap();
    assert_eq!(5, zp.add(&a, &b).lift());
    assert_eq!((117u64 * 13) % 125, zp.mul(&a, &b).lift());
    assert!(zp.eq_el(&zp.add(&a, &zp.negate(&a)), &zp.zero()));
    assert!(zp.is_zero(&zp.with_precision(&b, 0)));
    assert_eq!(None, zp.valuation(&zp.zero()));
    assert_eq!(Some(0), zp.valuation(&b));
}

#[test]
fn test_random_element_has_full_precision() {
    let zp = PAdicBase::zp(5, 5).unwrap();
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..100 {
        let el = zp.random_element(|| rng.rand_u64());
        assert!(el.lift() < 5u64.pow(5));
        assert_eq!(5, el.precision());
    }
}
