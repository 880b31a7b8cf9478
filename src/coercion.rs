use crate::base::{PAdicBase, PAdicBaseEl, PrecisionDiscipline};
use crate::extension::{Ground, GroundEl, Implementation, PAdicExtension, PAdicExtensionEl};

///
/// A coercion map from an extension ring into its fraction field. There is
/// one concrete map per precision discipline of the source ring, since the
/// specialized backend re-expresses precision differently depending on how
/// the source tracks it; the generic backend uses the plain inclusion.
///
/// Obtained from [`PAdicExtension::coerce_map_from()`], never constructed
/// directly, so a value of this type is a witness that the coercion was
/// actually accepted.
///
pub enum FracFieldCoercion<'a> {
    /// Plain inclusion, used whenever the target runs on the generic
    /// backend.
    Generic { domain: &'a PAdicExtension, codomain: &'a PAdicExtension },
    /// Source tracks capped absolute precision: re-expresses each
    /// coefficient's precision relative to its valuation.
    CappedAbsolute { domain: &'a PAdicExtension, codomain: &'a PAdicExtension },
    /// Source tracks capped relative precision: clamps to the cap of the
    /// target.
    CappedRelative { domain: &'a PAdicExtension, codomain: &'a PAdicExtension },
    /// Source is floating-point style: every image claims the full working
    /// precision.
    FloatingPoint { domain: &'a PAdicExtension, codomain: &'a PAdicExtension },
}

impl<'a> FracFieldCoercion<'a> {

    pub fn domain(&self) -> &'a PAdicExtension {
        match self {
            FracFieldCoercion::Generic { domain, .. } => domain,
            FracFieldCoercion::CappedAbsolute { domain, .. } => domain,
            FracFieldCoercion::CappedRelative { domain, .. } => domain,
            FracFieldCoercion::FloatingPoint { domain, .. } => domain,
        }
    }

    pub fn codomain(&self) -> &'a PAdicExtension {
        match self {
            FracFieldCoercion::Generic { codomain, .. } => codomain,
            FracFieldCoercion::CappedAbsolute { codomain, .. } => codomain,
            FracFieldCoercion::CappedRelative { codomain, .. } => codomain,
            FracFieldCoercion::FloatingPoint { codomain, .. } => codomain,
        }
    }

    ///
    /// Carries an element of the domain across into the fraction field.
    /// The underlying value is never changed, only the precision
    /// annotation of each coefficient is re-expressed according to the
    /// domain's precision discipline.
    ///
    pub fn map(&self, el: &PAdicExtensionEl) -> PAdicExtensionEl {
        let ground = self.domain().ground_ring();
        match self {
            FracFieldCoercion::Generic { .. } => el.clone(),
            FracFieldCoercion::CappedAbsolute { .. } => {
                map_coefficients(ground, el, &|base, c| {
                    match base.valuation(c) {
                        Some(v) => base.with_precision(c, c.precision().saturating_sub(v)),
                        None => *c,
                    }
                })
            },
            FracFieldCoercion::CappedRelative { codomain, .. } => {
                let cap = codomain.precision_cap() as u32;
                map_coefficients(ground, el, &|base, c| base.with_precision(c, c.precision().min(cap)))
            },
            FracFieldCoercion::FloatingPoint { codomain, .. } => {
                let cap = codomain.precision_cap() as u32;
                map_coefficients(ground, el, &|base, c| base.with_precision(c, cap))
            },
        }
    }
}

fn map_coefficients<F>(ground: &Ground, el: &PAdicExtensionEl, f: &F) -> PAdicExtensionEl
    where F: Fn(&PAdicBase, &PAdicBaseEl) -> PAdicBaseEl
{
    PAdicExtensionEl {
        coefficients: el.coefficients().iter().map(|c| map_ground_el(ground, c, f)).collect(),
    }
}

fn map_ground_el<F>(ground: &Ground, el: &GroundEl, f: &F) -> GroundEl
    where F: Fn(&PAdicBase, &PAdicBaseEl) -> PAdicBaseEl
{
    match (ground, el) {
        (Ground::Base(b), GroundEl::Base(x)) => GroundEl::Base(f(b, x)),
        (Ground::Extension(e), GroundEl::Extension(x)) => GroundEl::Extension(map_coefficients(e.ground_ring(), x, f)),
        _ => panic!("element does not belong to this ring"),
    }
}

impl PAdicExtension {

    ///
    /// Decides whether elements of `from` coerce automatically into `self`,
    /// and if so, returns the map that carries them across.
    ///
    /// The only accepted sources are extensions whose fraction field equals
    /// `self`. For those, a target on the generic backend accepts
    /// unconditionally with the plain inclusion; a target on the
    /// specialized backend selects the coercion map matching the source's
    /// precision discipline. Every other source yields `None`, which is the
    /// one observable "no coercion" outcome of this protocol.
    ///
    pub fn coerce_map_from<'a>(&'a self, from: &'a PAdicExtension) -> Option<FracFieldCoercion<'a>> {
        let from_fraction_field = from.fraction_field(None).ok()?;
        if from_fraction_field != *self {
            return None;
        }
        if self.implementation() == Implementation::Generic {
            return Some(FracFieldCoercion::Generic { domain: from, codomain: self });
        }
        match from.discipline() {
            PrecisionDiscipline::CappedAbsolute => Some(FracFieldCoercion::CappedAbsolute { domain: from, codomain: self }),
            PrecisionDiscipline::CappedRelative => Some(FracFieldCoercion::CappedRelative { domain: from, codomain: self }),
            PrecisionDiscipline::FloatingPoint => Some(FracFieldCoercion::FloatingPoint { domain: from, codomain: self }),
        }
    }
}

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use crate::exact::{ExactPoly, Rational};
#[cfg(test)]
use crate::extension::{ExtensionKind, VariableNames};
#[cfg(test)]
use crate::print_mode::PrintOptions;

#[cfg(test)]
fn eisenstein(discipline: PrecisionDiscipline, implementation: Implementation) -> (PAdicExtension, PAdicExtension) {
    let zp = PAdicBase::new(5, 5, false, discipline, PrintOptions::default()).unwrap();
    let f = ExactPoly::from_integer_coefficients(&[-5, 125, -15, 75, 0, 1]);
    let w = PAdicExtension::new(
        f.clone(),
        Ground::Base(Arc::new(zp.clone())),
        5,
        zp.print_options().clone(),
        VariableNames::new("w"),
        implementation,
        ExtensionKind::Eisenstein,
    ).unwrap();
    let qp = zp.fraction_field();
    let l = PAdicExtension::new(
        f,
        Ground::Base(Arc::new(qp)),
        5,
        zp.print_options().clone(),
        VariableNames::new("w"),
        implementation,
        ExtensionKind::Eisenstein,
    ).unwrap();
    (w, l)
}

#[test]
fn test_generic_backend_accepts_unconditionally() {
    let (w, l) = eisenstein(PrecisionDiscipline::CappedRelative, Implementation::Generic);
    let coercion = l.coerce_map_from(&w).unwrap();
    assert!(matches!(coercion, FracFieldCoercion::Generic { .. }));
    assert_eq!(&w, coercion.domain());
    assert_eq!(&l, coercion.codomain());
}

#[test]
fn test_specialized_backend_dispatches_on_discipline() {
    let (w, l) = eisenstein(PrecisionDiscipline::CappedAbsolute, Implementation::Specialized);
    assert!(matches!(l.coerce_map_from(&w).unwrap(), FracFieldCoercion::CappedAbsolute { .. }));
    let (w, l) = eisenstein(PrecisionDiscipline::CappedRelative, Implementation::Specialized);
    assert!(matches!(l.coerce_map_from(&w).unwrap(), FracFieldCoercion::CappedRelative { .. }));
    let (w, l) = eisenstein(PrecisionDiscipline::FloatingPoint, Implementation::Specialized);
    assert!(matches!(l.coerce_map_from(&w).unwrap(), FracFieldCoercion::FloatingPoint { .. }));
}

#[test]
fn test_no_coercion_is_explicit() {
    let (w, l) = eisenstein(PrecisionDiscipline::CappedRelative, Implementation::Specialized);
    // the integer ring is not the fraction field of its own fraction field
    assert!(w.coerce_map_from(&l).is_none());
    // a mathematically different ring does not coerce either
    let zp = PAdicBase::zp(5, 5).unwrap();
    let g = ExactPoly::from_integer_coefficients(&[-5, 25, 0, 0, 0, 1]);
    let other = zp.extension(g, VariableNames::new("w"), ExtensionKind::Eisenstein).unwrap();
    assert!(l.coerce_map_from(&other).is_none());
}

#[test]
fn test_fields_coerce_into_themselves() {
    let (_, l) = eisenstein(PrecisionDiscipline::CappedRelative, Implementation::Generic);
    // a field is its own fraction field
    assert!(l.coerce_map_from(&l).is_some());
}

#[test]
fn test_capped_absolute_map_reexpresses_precision() {
    let (w, l) = eisenstein(PrecisionDiscipline::CappedAbsolute, Implementation::Specialized);
    let zp = match w.ground_ring() {
        Ground::Base(b) => b.clone(),
        _ => unreachable!(),
    };
    // 5 has valuation 1, so 5 digits of absolute precision are only 4
    // significant digits in the fraction field
    let five = w.from_ground(GroundEl::Base(zp.from_rational(&Rational::from_integer(5)).unwrap()));
    let image = l.coerce_map_from(&w).unwrap().map(&five);
    match &image.coefficients()[0] {
        GroundEl::Base(c) => assert_eq!(4, c.precision()),
        _ => unreachable!(),
    }
    // zero keeps its precision unchanged
    let zero = w.zero();
    let image = l.coerce_map_from(&w).unwrap().map(&zero);
    match &image.coefficients()[0] {
        GroundEl::Base(c) => assert_eq!(5, c.precision()),
        _ => unreachable!(),
    }
}

#[test]
fn test_floating_point_map_stamps_full_precision() {
    let (w, l) = eisenstein(PrecisionDiscipline::FloatingPoint, Implementation::Specialized);
    let zp = match w.ground_ring() {
        Ground::Base(b) => b.clone(),
        _ => unreachable!(),
    };
    let el = w.from_ground(GroundEl::Base(zp.with_precision(&zp.one(), 2)));
    let image = l.coerce_map_from(&w).unwrap().map(&el);
    match &image.coefficients()[0] {
        GroundEl::Base(c) => assert_eq!(5, c.precision()),
        _ => unreachable!(),
    }
}
