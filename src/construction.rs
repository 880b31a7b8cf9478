use serde::{Deserialize, Serialize};

use crate::error::ExtensionError;
use crate::exact::ExactPoly;
use crate::extension::{ExtensionKind, Ground, Implementation, PAdicExtension};
use crate::print_mode::PrintOptions;

///
/// The functorial construction of an extension ring: a serializable
/// description of "extend the given ring by roots of these polynomials",
/// together with everything that makes the resulting descriptor unique
/// beyond the mathematics (precision cap, print configuration, backend
/// tag). The surrounding framework uses such functors to compare and
/// recombine structures that were built along different paths.
///
/// Emitted by [`PAdicExtension::construction()`]; applying the functor to
/// the ground ring returned alongside it rebuilds an equal descriptor.
///
/// The moduli are stored as a list to leave room for multi-generator
/// towers; the current factories only ever emit a single generator, and
/// [`AlgebraicExtensionFunctor::apply()`] rejects anything else.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AlgebraicExtensionFunctor {
    moduli: Vec<ExactPoly>,
    var_names: Vec<String>,
    precision_cap: usize,
    print_options: PrintOptions,
    implementation: Implementation,
    kind: ExtensionKind,
}

impl AlgebraicExtensionFunctor {

    pub fn new(
        moduli: Vec<ExactPoly>,
        var_names: Vec<String>,
        precision_cap: usize,
        print_options: PrintOptions,
        implementation: Implementation,
        kind: ExtensionKind,
    ) -> Self {
        assert_eq!(moduli.len(), var_names.len());
        assert!(!moduli.is_empty());
        AlgebraicExtensionFunctor { moduli, var_names, precision_cap, print_options, implementation, kind }
    }

    pub fn moduli(&self) -> &[ExactPoly] {
        &self.moduli
    }

    pub fn var_names(&self) -> &[String] {
        &self.var_names
    }

    pub fn precision_cap(&self) -> usize {
        self.precision_cap
    }

    pub fn print_options(&self) -> &PrintOptions {
        &self.print_options
    }

    pub fn implementation(&self) -> Implementation {
        self.implementation
    }

    pub fn kind(&self) -> ExtensionKind {
        self.kind
    }

    ///
    /// Applies this functor to a ground ring, rebuilding the extension
    /// descriptor it was emitted from (equal under the descriptor equality
    /// contract, including print configuration).
    ///
    pub fn apply(&self, ground: &Ground) -> Result<PAdicExtension, ExtensionError> {
        assert!(self.moduli.len() == 1, "multi-generator extensions are not yet supported");
        debug_assert_eq!(Some(self.var_names[0].as_str()), self.print_options.var_name());
        PAdicExtension::from_parts(
            self.moduli[0].clone(),
            ground.clone(),
            self.precision_cap,
            self.print_options.clone(),
            self.implementation,
            self.kind,
        )
    }
}

#[cfg(test)]
use crate::base::PAdicBase;
#[cfg(test)]
use crate::extension::VariableNames;
#[cfg(test)]
use crate::print_mode::PrintMode;

#[test]
fn test_construction_round_trip() {
    let zp = PAdicBase::zp(5, 8).unwrap();
    let f = ExactPoly::from_integer_coefficients(&[2, 4, 1]);
    let r = zp.extension(f, VariableNames::new("a"), ExtensionKind::Unramified).unwrap();
    let (functor, ground) = r.construction();
    assert_eq!(ground, *r.ground_ring());
    assert_eq!(8, functor.precision_cap());
    assert_eq!(1, functor.moduli().len());
    assert_eq!(r, functor.apply(&ground).unwrap());
}

#[test]
fn test_construction_preserves_print_options() {
    let zp = PAdicBase::new(
        5, 8, false,
        crate::base::PrecisionDiscipline::CappedRelative,
        crate::print_mode::PrintOptions::new(PrintMode::ValUnit),
    ).unwrap();
    let f = ExactPoly::from_integer_coefficients(&[2, 4, 1]);
    let r = zp.extension(f, VariableNames::new("a"), ExtensionKind::Unramified).unwrap();
    let (functor, ground) = r.construction();
    assert_eq!(PrintMode::ValUnit, functor.print_options().mode());
    let rebuilt = functor.apply(&ground).unwrap();
    assert_eq!(r, rebuilt);
    assert_eq!("a", rebuilt.variable_name());
}

#[test]
fn test_functor_serialization_round_trip() {
    let zp = PAdicBase::zp(5, 8).unwrap();
    let f = ExactPoly::from_integer_coefficients(&[2, 4, 1]);
    let r = zp.extension(f, VariableNames::new("a"), ExtensionKind::Unramified).unwrap();
    let (functor, ground) = r.construction();
    let json = serde_json::to_string(&functor).unwrap();
    let deserialized: AlgebraicExtensionFunctor = serde_json::from_str(&json).unwrap();
    assert_eq!(functor, deserialized);
    assert_eq!(r, deserialized.apply(&ground).unwrap());
}
