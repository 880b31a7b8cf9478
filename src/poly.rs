///
/// A dense univariate polynomial over an arbitrary coefficient type, in
/// ascending degree order. This is the representation of the *working*
/// modulus of an extension: the exact defining polynomial with every
/// coefficient reduced into the (tower of) base ring(s).
///
/// Unlike [`crate::exact::ExactPoly`], no normalization is performed here;
/// deciding whether a coefficient is zero requires the ring the
/// coefficients live in, so the constructor trusts its caller to pass a
/// vector whose last entry is the (unit) leading coefficient.
///
#[derive(Clone, Debug)]
pub struct WorkingPoly<C> {
    coefficients: Vec<C>,
}

impl<C> WorkingPoly<C> {

    pub fn from_coefficients(coefficients: Vec<C>) -> Self {
        assert!(coefficients.len() >= 2, "a defining polynomial has degree at least 1");
        WorkingPoly { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficient_at(&self, i: usize) -> &C {
        &self.coefficients[i]
    }

    pub fn coefficients(&self) -> &[C] {
        &self.coefficients
    }

    pub fn lc(&self) -> &C {
        self.coefficients.last().unwrap()
    }
}

#[test]
fn test_degree() {
    let f = WorkingPoly::from_coefficients(vec![-5i64, 125, -15, 75, 0, 1]);
    assert_eq!(5, f.degree());
    assert_eq!(&75, f.coefficient_at(3));
    assert_eq!(&1, f.lc());
}

#[test]
#[should_panic]
fn test_rejects_constant() {
    let _ = WorkingPoly::from_coefficients(vec![1i64]);
}
