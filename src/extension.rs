use std::fmt::{self, Display};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::base::{PAdicBase, PAdicBaseEl, PrecisionDiscipline};
use crate::construction::AlgebraicExtensionFunctor;
use crate::error::ExtensionError;
use crate::exact::{ExactPoly, NumberField, Rational};
use crate::poly::WorkingPoly;
use crate::print_mode::{PrintOptions, PrintOverrides};

///
/// Which arithmetic backend the elements of an extension use. The generic
/// backend accepts coercions from any ring it is the fraction field of;
/// the specialized backend needs a coercion map matched to the source
/// ring's precision discipline. The tag never participates in ring
/// equality.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Implementation {
    /// Arbitrary-precision big-integer arithmetic.
    Generic,
    /// Specialized fast arithmetic with per-discipline coercion maps.
    Specialized,
}

///
/// The shape of the defining polynomial, as classified by whichever
/// factory built the descriptor. Used for display only; no validation of
/// the shape happens in this layer.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ExtensionKind {
    Unramified,
    Eisenstein,
    General,
}

impl ExtensionKind {

    fn phrase(&self) -> &'static str {
        match self {
            ExtensionKind::Unramified => "Unramified",
            ExtensionKind::Eisenstein => "Eisenstein",
            ExtensionKind::General => "General",
        }
    }
}

///
/// The name tuple of an extension: the overall generator name plus the
/// optional names of the unramified and ramified sub-generators used by
/// general (neither Eisenstein nor unramified) extensions. Folded into the
/// print configuration at construction time.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableNames {
    pub var_name: String,
    pub unram_name: Option<String>,
    pub ram_name: Option<String>,
}

impl VariableNames {

    pub fn new(var_name: impl Into<String>) -> Self {
        VariableNames { var_name: var_name.into(), unram_name: None, ram_name: None }
    }

    pub fn with_unram_name(mut self, name: impl Into<String>) -> Self {
        self.unram_name = Some(name.into());
        self
    }

    pub fn with_ram_name(mut self, name: impl Into<String>) -> Self {
        self.ram_name = Some(name.into());
        self
    }
}

///
/// The ring an extension was built over: either a p-adic base ring, or
/// another extension (a tower). Towers of height greater than one are not
/// produced by the current factories, but everything here recurses
/// properly through them rather than assuming a single level.
///
/// Grounds are shared immutably between the descriptors built over them.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Ground {
    Base(Arc<PAdicBase>),
    Extension(Arc<PAdicExtension>),
}

///
/// An element of a [`Ground`].
///
#[derive(Clone, Debug)]
pub enum GroundEl {
    Base(PAdicBaseEl),
    Extension(PAdicExtensionEl),
}

impl Ground {

    pub fn prime(&self) -> i64 {
        match self {
            Ground::Base(b) => b.prime(),
            Ground::Extension(e) => e.prime(),
        }
    }

    pub fn is_field(&self) -> bool {
        match self {
            Ground::Base(b) => b.is_field(),
            Ground::Extension(e) => e.is_field(),
        }
    }

    pub fn discipline(&self) -> PrecisionDiscipline {
        match self {
            Ground::Base(b) => b.discipline(),
            Ground::Extension(e) => e.discipline(),
        }
    }

    pub fn exact_field(&self) -> crate::exact::ExactField {
        match self {
            Ground::Base(b) => b.exact_field(),
            Ground::Extension(e) => crate::exact::ExactField::NumberField(e.exact_field()),
        }
    }

    pub fn fraction_field(&self) -> Result<Ground, ExtensionError> {
        match self {
            Ground::Base(b) => Ok(Ground::Base(Arc::new(b.fraction_field()))),
            Ground::Extension(e) => Ok(Ground::Extension(Arc::new(e.fraction_field(None)?))),
        }
    }

    pub fn integer_ring(&self) -> Result<Ground, ExtensionError> {
        match self {
            Ground::Base(b) => Ok(Ground::Base(Arc::new(b.integer_ring()))),
            Ground::Extension(e) => Ok(Ground::Extension(Arc::new(e.integer_ring(None)?))),
        }
    }

    pub fn zero(&self) -> GroundEl {
        match self {
            Ground::Base(b) => GroundEl::Base(b.zero()),
            Ground::Extension(e) => GroundEl::Extension(e.zero()),
        }
    }

    pub fn from_rational(&self, c: &Rational) -> Result<GroundEl, ExtensionError> {
        match self {
            Ground::Base(b) => Ok(GroundEl::Base(b.from_rational(c)?)),
            Ground::Extension(e) => {
                let ground_el = e.ground.from_rational(c)?;
                Ok(GroundEl::Extension(e.from_ground(ground_el)))
            }
        }
    }

    pub fn add(&self, lhs: &GroundEl, rhs: &GroundEl) -> GroundEl {
        match (self, lhs, rhs) {
            (Ground::Base(b), GroundEl::Base(l), GroundEl::Base(r)) => GroundEl::Base(b.add(l, r)),
            (Ground::Extension(e), GroundEl::Extension(l), GroundEl::Extension(r)) => GroundEl::Extension(e.add(l, r)),
            _ => panic!("element does not belong to this ring"),
        }
    }

    pub fn is_zero(&self, el: &GroundEl) -> bool {
        match (self, el) {
            (Ground::Base(b), GroundEl::Base(x)) => b.is_zero(x),
            (Ground::Extension(e), GroundEl::Extension(x)) => x.coefficients.iter().all(|c| e.ground.is_zero(c)),
            _ => panic!("element does not belong to this ring"),
        }
    }

    ///
    /// Whether the element is a unit. For a tower ground this tests whether
    /// some coefficient is a unit in the layer below, which is the right
    /// criterion for the unramified towers the factories build.
    ///
    pub fn is_unit(&self, el: &GroundEl) -> bool {
        match (self, el) {
            (Ground::Base(b), GroundEl::Base(x)) => b.valuation(x) == Some(0),
            (Ground::Extension(e), GroundEl::Extension(x)) => x.coefficients.iter().any(|c| e.ground.is_unit(c)),
            _ => panic!("element does not belong to this ring"),
        }
    }

    ///
    /// Samples an element of the ground ring; see
    /// [`PAdicBase::random_element()`].
    ///
    pub fn random_element<F>(&self, mut rng: F) -> GroundEl
        where F: FnMut() -> u64
    {
        match self {
            Ground::Base(b) => GroundEl::Base(b.random_element(&mut rng)),
            Ground::Extension(e) => GroundEl::Extension(e.random_element(&mut rng as &mut dyn FnMut() -> u64)),
        }
    }
}

impl Display for Ground {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ground::Base(b) => b.fmt(f),
            Ground::Extension(e) => e.fmt(f),
        }
    }
}

///
/// An element of a [`PAdicExtension`]: its coordinate vector over the
/// ground ring with respect to the power basis `1, gen, ..., gen^(d-1)`.
/// Just enough structure for the inclusion of the ground ring, random
/// sampling and the fraction field coercion maps; general arithmetic in
/// the extension is out of scope for the descriptor layer.
///
#[derive(Clone, Debug)]
pub struct PAdicExtensionEl {
    pub(crate) coefficients: Vec<GroundEl>,
}

impl PAdicExtensionEl {

    pub fn coefficients(&self) -> &[GroundEl] {
        &self.coefficients
    }
}

///
/// Descriptor of the ring obtained by adjoining a root of a polynomial to
/// a p-adic base ring, capped at a given precision, with given print
/// options. The hard p-adic arithmetic lives elsewhere; this object wires
/// the extension into the coercion protocol, remembers how it was built
/// ([`PAdicExtension::construction()`]) and answers structural queries.
///
/// Once constructed, a descriptor is immutable; derived views like
/// [`PAdicExtension::fraction_field()`] are independently built
/// descriptors, never mutations.
///
/// # Example
/// ```
/// # use padic_rings::base::*;
/// # use padic_rings::exact::*;
/// # use padic_rings::extension::*;
/// let zp = PAdicBase::zp(5, 5).unwrap();
/// let f = ExactPoly::from_integer_coefficients(&[-5, 125, -15, 75, 0, 1]);
/// let w = zp.extension(f, VariableNames::new("w"), ExtensionKind::Eisenstein).unwrap();
/// assert_eq!(5, w.degree());
/// assert_eq!("x^5 + 75*x^3 - 15*x^2 + 125*x - 5", format!("{}", w.exact_modulus()));
/// ```
///
#[derive(Clone, Debug)]
pub struct PAdicExtension {
    given_poly: WorkingPoly<GroundEl>,
    exact_modulus: ExactPoly,
    precision_cap: usize,
    print_options: PrintOptions,
    ground: Ground,
    implementation: Implementation,
    kind: ExtensionKind,
}

impl PAdicExtension {

    ///
    /// Creates the descriptor of `ground[x]/(exact_modulus)`. The name
    /// tuple is folded into the print configuration before it is stored.
    ///
    /// Whether the polynomial actually has the shape claimed by `kind`
    /// (Eisenstein, unramified, ...) is not checked here; that is the
    /// calling factory's responsibility. What is checked is that the
    /// modulus survives truncation: every coefficient must reduce into the
    /// ground ring and the leading coefficient must stay a unit, so that
    /// the working polynomial keeps the degree of the exact one.
    ///
    pub fn new(
        exact_modulus: ExactPoly,
        ground: Ground,
        precision_cap: usize,
        print_options: PrintOptions,
        names: VariableNames,
        implementation: Implementation,
        kind: ExtensionKind,
    ) -> Result<Self, ExtensionError> {
        let mut print_options = print_options.with_var_name(names.var_name);
        if let Some(unram_name) = names.unram_name {
            print_options = print_options.with_unram_name(unram_name);
        }
        if let Some(ram_name) = names.ram_name {
            print_options = print_options.with_ram_name(ram_name);
        }
        Self::from_parts(exact_modulus, ground, precision_cap, print_options, implementation, kind)
    }

    ///
    /// As [`PAdicExtension::new()`], but with the names already folded into
    /// the print configuration. This is the path the construction functor
    /// and the `fraction_field`/`integer_ring` views go through.
    ///
    pub(crate) fn from_parts(
        exact_modulus: ExactPoly,
        ground: Ground,
        precision_cap: usize,
        print_options: PrintOptions,
        implementation: Implementation,
        kind: ExtensionKind,
    ) -> Result<Self, ExtensionError> {
        let degree = exact_modulus.degree().expect("defining polynomial must be nonzero");
        assert!(degree >= 1, "defining polynomial must not be constant");
        assert!(print_options.var_name().is_some(), "an extension needs a generator name");
        let coefficients = (0..=degree)
            .map(|i| ground.from_rational(&exact_modulus.coefficient_at(i)))
            .collect::<Result<Vec<_>, _>>()?;
        let given_poly = WorkingPoly::from_coefficients(coefficients);
        if !ground.is_unit(given_poly.lc()) {
            return Err(ExtensionError::NonUnitLeadingCoefficient);
        }
        debug_assert_eq!(given_poly.degree(), degree);
        Ok(PAdicExtension { given_poly, exact_modulus, precision_cap, print_options, ground, implementation, kind })
    }

    ///
    /// The rank of this extension as a module over its ground ring.
    ///
    pub fn degree(&self) -> usize {
        self.given_poly.degree()
    }

    ///
    /// The working modulus: the defining polynomial with coefficients
    /// truncated into the ground ring.
    ///
    pub fn defining_polynomial(&self) -> &WorkingPoly<GroundEl> {
        &self.given_poly
    }

    ///
    /// The defining polynomial with exact, unapproximated coefficients.
    ///
    pub fn defining_polynomial_exact(&self) -> &ExactPoly {
        &self.exact_modulus
    }

    ///
    /// Alias of [`PAdicExtension::defining_polynomial()`].
    ///
    pub fn modulus(&self) -> &WorkingPoly<GroundEl> {
        self.defining_polynomial()
    }

    ///
    /// Alias of [`PAdicExtension::defining_polynomial_exact()`].
    ///
    pub fn exact_modulus(&self) -> &ExactPoly {
        self.defining_polynomial_exact()
    }

    ///
    /// The ring this is an extension of: the coefficient ring of the
    /// working modulus.
    ///
    pub fn ground_ring(&self) -> &Ground {
        &self.ground
    }

    ///
    /// The p-adic base ring this is ultimately an extension of, found by
    /// walking down the tower. The current factories only build towers of
    /// height one, so today this is the same ring as
    /// `ground_ring()`; the recursion nevertheless handles any finite
    /// height.
    ///
    pub fn ground_ring_of_tower(&self) -> &PAdicBase {
        let mut current = self;
        loop {
            match &current.ground {
                Ground::Base(b) => return b,
                Ground::Extension(e) => current = e,
            }
        }
    }

    ///
    /// The univariate polynomial ring the working modulus lives in.
    ///
    pub fn polynomial_ring(&self) -> PolyRingDescriptor {
        PolyRingDescriptor { ground: self.ground.clone(), var_name: "x".to_owned() }
    }

    ///
    /// A number field with the same exact defining polynomial, built by
    /// extending the exact counterpart of the ground ring. Always a field,
    /// even when this extension is only a ring.
    ///
    pub fn exact_field(&self) -> NumberField {
        self.ground.exact_field().extension(self.exact_modulus.clone(), self.variable_name())
    }

    ///
    /// The functorial construction of this ring: a functor and a ground
    /// ring such that applying the one to the other rebuilds a descriptor
    /// equal to `self`. The functor also captures the data that makes the
    /// descriptor unique beyond the mathematics: precision cap, print
    /// configuration and backend tag.
    ///
    pub fn construction(&self) -> (AlgebraicExtensionFunctor, Ground) {
        let functor = AlgebraicExtensionFunctor::new(
            vec![self.exact_modulus.clone()],
            vec![self.variable_name().to_owned()],
            self.precision_cap,
            self.print_options.clone(),
            self.implementation,
            self.kind,
        );
        (functor, self.ground.clone())
    }

    ///
    /// The fraction field of this extension: the extension of the ground
    /// ring's fraction field by the same polynomial. Returns `self`
    /// unchanged if this already is a field and no print overrides are
    /// given.
    ///
    pub fn fraction_field(&self, overrides: Option<&PrintOverrides>) -> Result<PAdicExtension, ExtensionError> {
        if self.is_field() && overrides.is_none() {
            return Ok(self.clone());
        }
        self.change(true, overrides)
    }

    ///
    /// The ring of integers of this extension: the extension of the ground
    /// ring's integer ring by the same polynomial. Returns `self` unchanged
    /// if this already is a ring and no print overrides are given.
    ///
    /// Moving from a field to its ring of integers requires the exact
    /// defining polynomial to be integral; extensions with non-integral
    /// generators are an unsupported configuration and reported as such.
    ///
    pub fn integer_ring(&self, overrides: Option<&PrintOverrides>) -> Result<PAdicExtension, ExtensionError> {
        if !self.is_field() && overrides.is_none() {
            return Ok(self.clone());
        }
        if self.is_field() && !self.exact_modulus.is_integral() {
            return Err(ExtensionError::NonIntegralModulus);
        }
        self.change(false, overrides)
    }

    fn change(&self, field: bool, overrides: Option<&PrintOverrides>) -> Result<PAdicExtension, ExtensionError> {
        let ground = if field { self.ground.fraction_field()? } else { self.ground.integer_ring()? };
        let print_options = match overrides {
            Some(o) => self.print_options.with_overrides(o),
            None => self.print_options.clone(),
        };
        Self::from_parts(self.exact_modulus.clone(), ground, self.precision_cap, print_options, self.implementation, self.kind)
    }

    ///
    /// Samples an element by drawing `degree()` independent random ground
    /// ring elements and combining them as the coefficients of a polynomial
    /// evaluated at the generator. No precision-aware weighting happens;
    /// uniformity is only as good as the ground ring's sampler.
    ///
    pub fn random_element<F>(&self, mut rng: F) -> PAdicExtensionEl
        where F: FnMut() -> u64
    {
        // Horner evaluation of sum_i a_i gen^i, top coefficient first
        let mut result = self.from_ground(self.ground.random_element(&mut rng));
        for _ in 0..(self.degree() - 1) {
            result = self.mul_gen(result);
            result = self.add(&result, &self.from_ground(self.ground.random_element(&mut rng)));
        }
        return result;
    }

    pub fn zero(&self) -> PAdicExtensionEl {
        PAdicExtensionEl { coefficients: (0..self.degree()).map(|_| self.ground.zero()).collect() }
    }

    ///
    /// The inclusion of a ground ring element as a constant. This is the
    /// element-constructor capability through which values of the ground
    /// ring coerce into the extension.
    ///
    pub fn from_ground(&self, el: GroundEl) -> PAdicExtensionEl {
        let mut coefficients = Vec::with_capacity(self.degree());
        coefficients.push(el);
        coefficients.extend((1..self.degree()).map(|_| self.ground.zero()));
        PAdicExtensionEl { coefficients }
    }

    ///
    /// The coercion map `ground_ring() -> self`.
    ///
    #[stability::unstable(feature = "enable")]
    pub fn inclusion(&self) -> GroundInclusion<'_> {
        GroundInclusion { codomain: self }
    }

    pub fn add(&self, lhs: &PAdicExtensionEl, rhs: &PAdicExtensionEl) -> PAdicExtensionEl {
        assert_eq!(lhs.coefficients.len(), rhs.coefficients.len());
        PAdicExtensionEl {
            coefficients: lhs.coefficients.iter().zip(rhs.coefficients.iter())
                .map(|(l, r)| self.ground.add(l, r))
                .collect()
        }
    }

    ///
    /// Multiplies by the generator. Only supported while the result stays
    /// below the degree of the extension, which is all the descriptor layer
    /// ever needs.
    ///
    fn mul_gen(&self, mut el: PAdicExtensionEl) -> PAdicExtensionEl {
        debug_assert!(self.ground.is_zero(el.coefficients.last().unwrap()));
        el.coefficients.pop();
        el.coefficients.insert(0, self.ground.zero());
        return el;
    }

    pub fn prime(&self) -> i64 {
        self.ground_ring_of_tower().prime()
    }

    pub fn residue_characteristic(&self) -> i64 {
        self.prime()
    }

    pub fn precision_cap(&self) -> usize {
        self.precision_cap
    }

    pub fn is_field(&self) -> bool {
        self.ground.is_field()
    }

    pub fn discipline(&self) -> PrecisionDiscipline {
        self.ground.discipline()
    }

    pub fn implementation(&self) -> Implementation {
        self.implementation
    }

    pub fn kind(&self) -> ExtensionKind {
        self.kind
    }

    pub fn print_options(&self) -> &PrintOptions {
        &self.print_options
    }

    ///
    /// The name of the generator, as folded into the print configuration
    /// at construction time.
    ///
    pub fn variable_name(&self) -> &str {
        self.print_options.var_name().unwrap()
    }
}

///
/// Two extension descriptors are equal iff their ground rings are equal,
/// their *exact* defining polynomials are equal, their precision caps are
/// equal, and their print configurations agree under the mode-aware
/// comparison. Print options participate by design: two rings with
/// different printing conventions cannot share a canonical representative
/// in the coercion graph, so they are different objects even though they
/// contain "the same" elements. The backend tag does not participate.
///
impl PartialEq for PAdicExtension {

    fn eq(&self, other: &Self) -> bool {
        self.ground == other.ground &&
            self.exact_modulus == other.exact_modulus &&
            self.precision_cap == other.precision_cap &&
            self.print_options.eq_for_mode(&other.print_options)
    }
}

impl Display for PAdicExtension {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} extension in {} defined by ", self.kind.phrase(), self.variable_name())?;
        self.exact_modulus.fmt_with_var(self.variable_name(), f)?;
        write!(f, " over {}", self.ground)
    }
}

impl PAdicBase {

    ///
    /// Extends this base ring by a root of `exact_modulus`, inheriting the
    /// base ring's precision cap and print configuration and using the
    /// generic backend. This is the usual entry point for building an
    /// extension descriptor.
    ///
    pub fn extension(&self, exact_modulus: ExactPoly, names: VariableNames, kind: ExtensionKind) -> Result<PAdicExtension, ExtensionError> {
        PAdicExtension::new(
            exact_modulus,
            Ground::Base(Arc::new(self.clone())),
            self.precision_cap(),
            self.print_options().clone(),
            names,
            Implementation::Generic,
            kind,
        )
    }
}

///
/// The univariate polynomial ring a working modulus belongs to.
///
#[derive(Clone, Debug, PartialEq)]
pub struct PolyRingDescriptor {
    ground: Ground,
    var_name: String,
}

impl PolyRingDescriptor {

    pub fn base_ring(&self) -> &Ground {
        &self.ground
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl Display for PolyRingDescriptor {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Univariate polynomial ring in {} over {}", self.var_name, self.ground)
    }
}

///
/// The canonical map from the ground ring into the extension, mapping an
/// element to itself as a constant.
///
#[stability::unstable(feature = "enable")]
pub struct GroundInclusion<'a> {
    codomain: &'a PAdicExtension,
}

impl<'a> GroundInclusion<'a> {

    pub fn domain(&self) -> &Ground {
        self.codomain.ground_ring()
    }

    pub fn codomain(&self) -> &PAdicExtension {
        self.codomain
    }

    pub fn map(&self, el: GroundEl) -> PAdicExtensionEl {
        self.codomain.from_ground(el)
    }
}

#[cfg(test)]
fn eisenstein_5adic() -> PAdicExtension {
    let zp = PAdicBase::zp(5, 5).unwrap();
    let f = ExactPoly::from_integer_coefficients(&[-5, 125, -15, 75, 0, 1]);
    zp.extension(f, VariableNames::new("w"), ExtensionKind::Eisenstein).unwrap()
}

#[test]
fn test_degree_and_modulus() {
    let w = eisenstein_5adic();
    assert_eq!(5, w.degree());
    assert_eq!(w.defining_polynomial().degree(), w.defining_polynomial_exact().degree().unwrap());
    assert_eq!(w.modulus().degree(), w.degree());
    assert_eq!(
        ExactPoly::from_integer_coefficients(&[-5, 125, -15, 75, 0, 1]),
        *w.exact_modulus()
    );
    assert_eq!(5, w.prime());
    assert_eq!(5, w.residue_characteristic());
}

#[test]
fn test_ground_ring() {
    let w = eisenstein_5adic();
    let zp = PAdicBase::zp(5, 5).unwrap();
    assert_eq!(&Ground::Base(std::sync::Arc::new(zp.clone())), w.ground_ring());
    assert_eq!(&zp, w.ground_ring_of_tower());
    assert_eq!(
        "Univariate polynomial ring in x over 5-adic ring with capped relative precision 5",
        format!("{}", w.polynomial_ring())
    );
}

#[test]
fn test_equality_contract() {
    let w1 = eisenstein_5adic();
    let w2 = eisenstein_5adic();
    assert_eq!(w1, w2);
    assert_eq!(w2, w1);

    // different print configuration, same mathematics: unequal by design
    let zp = PAdicBase::zp(5, 5).unwrap();
    let f = ExactPoly::from_integer_coefficients(&[-5, 125, -15, 75, 0, 1]);
    let w3 = PAdicExtension::new(
        f.clone(),
        Ground::Base(std::sync::Arc::new(zp.clone())),
        5,
        zp.print_options().clone().with_pos(false),
        VariableNames::new("w"),
        Implementation::Generic,
        ExtensionKind::Eisenstein,
    ).unwrap();
    assert_ne!(w1, w3);

    // different precision cap
    let zp4 = PAdicBase::zp(5, 4).unwrap();
    let w4 = zp4.extension(f.clone(), VariableNames::new("w"), ExtensionKind::Eisenstein).unwrap();
    assert_ne!(w1, w4);

    // different exact modulus
    let g = ExactPoly::from_integer_coefficients(&[-5, 25, 0, 0, 0, 1]);
    let w5 = zp.extension(g, VariableNames::new("w"), ExtensionKind::Eisenstein).unwrap();
    assert_ne!(w1, w5);

    // different backend tag does not affect equality
    let w6 = PAdicExtension::new(
        f,
        Ground::Base(std::sync::Arc::new(zp.clone())),
        5,
        zp.print_options().clone(),
        VariableNames::new("w"),
        Implementation::Specialized,
        ExtensionKind::Eisenstein,
    ).unwrap();
    assert_eq!(w1, w6);
}

#[test]
fn test_fraction_field_idempotent() {
    let w = eisenstein_5adic();
    assert!(!w.is_field());
    let l = w.fraction_field(None).unwrap();
    assert!(l.is_field());
    assert_eq!(l, l.fraction_field(None).unwrap());
    assert_eq!(w, l.integer_ring(None).unwrap());
    // a ring is its own integer ring
    assert_eq!(w, w.integer_ring(None).unwrap());
    // overriding print options yields a different ring
    let l2 = w.fraction_field(Some(&PrintOverrides::pos(false))).unwrap();
    assert!(l2.is_field());
    assert_ne!(l, l2);
}

#[test]
fn test_integer_ring_requires_integral_modulus() {
    let qp = PAdicBase::qp(5, 5).unwrap();
    let f = ExactPoly::from_coefficients(vec![
        Rational::new(1, 2), Rational::from_integer(0), Rational::ONE,
    ]);
    let l = qp.extension(f, VariableNames::new("w"), ExtensionKind::General).unwrap();
    assert_eq!(Err(ExtensionError::NonIntegralModulus), l.integer_ring(None).map(|_| ()));
}

#[test]
fn test_exact_field_is_always_a_field() {
    let w = eisenstein_5adic();
    let nf = w.exact_field();
    assert_eq!(5, nf.degree());
    assert_eq!("w", nf.var_name());
    assert_eq!(&crate::exact::ExactField::Rationals, nf.base());
    // the p-adic side is a ring, the exact side is still a field
    assert!(!w.is_field());
    assert_eq!(nf, w.fraction_field(None).unwrap().exact_field());
}

#[test]
fn test_random_element_shape() {
    let w = eisenstein_5adic();
    let mut rng = oorandom::Rand64::new(42);
    for _ in 0..20 {
        let el = w.random_element(|| rng.rand_u64());
        assert_eq!(w.degree(), el.coefficients().len());
    }
}

#[test]
fn test_from_ground_and_inclusion() {
    let w = eisenstein_5adic();
    let zp = PAdicBase::zp(5, 5).unwrap();
    let x = GroundEl::Base(zp.from_rational(&Rational::from_integer(7)).unwrap());
    let el = w.inclusion().map(x);
    assert_eq!(5, el.coefficients().len());
    assert!(!w.ground_ring().is_zero(&el.coefficients()[0]));
    for c in &el.coefficients()[1..] {
        assert!(w.ground_ring().is_zero(c));
    }
}

#[test]
fn test_display() {
    let w = eisenstein_5adic();
    assert_eq!(
        "Eisenstein extension in w defined by w^5 + 75*w^3 - 15*w^2 + 125*w - 5 over 5-adic ring with capped relative precision 5",
        format!("{}", w)
    );
}

#[test]
fn test_tower_ground_ring_recursion() {
    // build a height-2 tower by hand; the factories do not produce these
    // yet, but the recursion must not assume a single level
    let zp = PAdicBase::zp(5, 5).unwrap();
    let f = ExactPoly::from_integer_coefficients(&[2, 4, 1]);
    let u = zp.extension(f, VariableNames::new("a"), ExtensionKind::Unramified).unwrap();
    let g = ExactPoly::from_integer_coefficients(&[-5, 0, 1]);
    let t = PAdicExtension::new(
        g,
        Ground::Extension(std::sync::Arc::new(u.clone())),
        5,
        zp.print_options().clone(),
        VariableNames::new("pi"),
        Implementation::Generic,
        ExtensionKind::Eisenstein,
    ).unwrap();
    assert_eq!(&zp, t.ground_ring_of_tower());
    assert_eq!(&Ground::Extension(std::sync::Arc::new(u)), t.ground_ring());
    assert_eq!(2, t.degree());
    let mut rng = oorandom::Rand64::new(7);
    let el = t.random_element(|| rng.rand_u64());
    assert_eq!(2, el.coefficients().len());
}
