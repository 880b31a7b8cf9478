use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// An exact rational number with fixed-width numerator and denominator,
/// always stored reduced with a positive denominator.
///
/// The descriptor layer only ever compares, displays and truncates these
/// coefficients, so machine-size width is sufficient; this mirrors how
/// the p-adic arithmetic itself runs inside a fixed-width workspace.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rational {
    num: i128,
    den: u128,
}

impl Rational {

    pub fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "denominator must be nonzero");
        let (num, den) = if den < 0 { (-num, (-den) as u128) } else { (num, den as u128) };
        let g = gcd(num.unsigned_abs(), den);
        if g == 0 {
            return Rational { num: 0, den: 1 };
        }
        Rational { num: num / g as i128, den: den / g }
    }

    pub fn from_integer(n: i128) -> Self {
        Rational { num: n, den: 1 }
    }

    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    pub fn num(&self) -> i128 {
        self.num
    }

    pub fn den(&self) -> u128 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    pub fn is_integral(&self) -> bool {
        self.den == 1
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }
}

impl Display for Rational {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    return a;
}

///
/// A univariate polynomial with exact rational coefficients, stored as a
/// dense coefficient vector in ascending degree order with no trailing
/// zeros. This is the representation of the *exact modulus* of a p-adic
/// extension: the defining polynomial before its coefficients are truncated
/// to the precision of the base ring.
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ExactPoly {
    coefficients: Vec<Rational>,
}

impl ExactPoly {

    pub fn from_coefficients(mut coefficients: Vec<Rational>) -> Self {
        while coefficients.last().map(|c| c.is_zero()).unwrap_or(false) {
            coefficients.pop();
        }
        ExactPoly { coefficients }
    }

    ///
    /// Creates the polynomial `sum_i coefficients[i] * x^i` from integer
    /// coefficients in ascending degree order.
    ///
    pub fn from_integer_coefficients(coefficients: &[i128]) -> Self {
        Self::from_coefficients(coefficients.iter().map(|c| Rational::from_integer(*c)).collect())
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coefficients.len() - 1)
        }
    }

    pub fn coefficient_at(&self, i: usize) -> Rational {
        self.coefficients.get(i).copied().unwrap_or(Rational::ZERO)
    }

    pub fn lc(&self) -> Option<Rational> {
        self.coefficients.last().copied()
    }

    ///
    /// Whether all coefficients are integers. Only integral polynomials
    /// define a ring-of-integers view of their extension.
    ///
    pub fn is_integral(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_integral())
    }

    pub fn is_monic(&self) -> bool {
        self.lc().map(|c| c.is_one()).unwrap_or(false)
    }

    pub fn fmt_with_var(&self, var: &str, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for i in (0..self.coefficients.len()).rev() {
            let c = self.coefficients[i];
            if c.is_zero() {
                continue;
            }
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
                first = false;
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let abs = Rational::new(c.num().abs(), c.den() as i128);
            if i == 0 {
                write!(f, "{}", abs)?;
            } else {
                if !abs.is_one() {
                    write!(f, "{}*", abs)?;
                }
                if i == 1 {
                    write!(f, "{}", var)?;
                } else {
                    write!(f, "{}^{}", var, i)?;
                }
            }
        }
        return Ok(());
    }
}

impl Display for ExactPoly {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_with_var("x", f)
    }
}

///
/// The exact, characteristic-zero counterpart of a p-adic ring: the
/// rationals for a base ring, and a number field for an extension. Note
/// that this view is always a *field*, even when the p-adic side is only
/// a ring of integers.
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExactField {
    Rationals,
    NumberField(NumberField),
}

impl ExactField {

    ///
    /// Extends this exact field by a root of the given polynomial,
    /// producing the number field `self[x]/(modulus)` with the generator
    /// named `var_name`.
    ///
    pub fn extension(&self, modulus: ExactPoly, var_name: impl Into<String>) -> NumberField {
        assert!(modulus.degree().map(|d| d >= 1).unwrap_or(false), "defining polynomial must not be constant");
        NumberField {
            modulus,
            var_name: var_name.into(),
            base: Box::new(self.clone()),
        }
    }
}

impl Display for ExactField {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExactField::Rationals => write!(f, "Rational field"),
            ExactField::NumberField(nf) => nf.fmt(f),
        }
    }
}

///
/// An algebraic number field given by a defining polynomial over an exact
/// base field. This is what [`crate::extension::PAdicExtension::exact_field()`]
/// produces: the unapproximated analogue of a p-adic extension.
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NumberField {
    modulus: ExactPoly,
    var_name: String,
    base: Box<ExactField>,
}

impl NumberField {

    pub fn modulus(&self) -> &ExactPoly {
        &self.modulus
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    pub fn base(&self) -> &ExactField {
        &self.base
    }

    pub fn degree(&self) -> usize {
        self.modulus.degree().unwrap()
    }
}

impl Display for NumberField {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Number field in {} defined by ", self.var_name)?;
        self.modulus.fmt_with_var(&self.var_name, f)
    }
}

#[test]
fn test_rational_reduction() {
    assert_eq!(Rational::new(1, 2), Rational::new(2, 4));
    assert_eq!(Rational::new(-1, 2), Rational::new(1, -2));
    assert_eq!(Rational::ZERO, Rational::new(0, 7));
    assert!(Rational::new(6, 3).is_integral());
    assert!(!Rational::new(1, 3).is_integral());
    assert_eq!("1/3", format!("{}", Rational::new(2, 6)));
    assert_eq!("-2", format!("{}", Rational::new(4, -2)));
}

#[test]
fn test_poly_normalization() {
    let f = ExactPoly::from_integer_coefficients(&[-5, 125, -15, 75, 0, 1]);
    assert_eq!(Some(5), f.degree());
    let g = ExactPoly::from_coefficients(vec![Rational::ONE, Rational::ZERO, Rational::ZERO]);
    assert_eq!(Some(0), g.degree());
    assert!(ExactPoly::from_integer_coefficients(&[0, 0]).is_zero());
    assert_eq!(Rational::ZERO, f.coefficient_at(4));
    assert_eq!(Rational::from_integer(75), f.coefficient_at(3));
}

#[test]
fn test_poly_display() {
    let f = ExactPoly::from_integer_coefficients(&[-5, 125, -15, 75, 0, 1]);
    assert_eq!("x^5 + 75*x^3 - 15*x^2 + 125*x - 5", format!("{}", f));
    let g = ExactPoly::from_coefficients(vec![Rational::new(-1, 2), Rational::ZERO, Rational::ONE]);
    assert_eq!("x^2 - 1/2", format!("{}", g));
    assert_eq!("-x", format!("{}", ExactPoly::from_integer_coefficients(&[0, -1])));
}

#[test]
fn test_number_field_display() {
    let f = ExactPoly::from_integer_coefficients(&[-5, 125, -15, 75, 0, 1]);
    let nf = ExactField::Rationals.extension(f, "w");
    assert_eq!(5, nf.degree());
    assert_eq!("Number field in w defined by w^5 + 75*w^3 - 15*w^2 + 125*w - 5", format!("{}", nf));
}
