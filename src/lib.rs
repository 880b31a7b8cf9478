#![doc = include_str!("../Readme.md")]

///
/// This module contains [`error::ExtensionError`], the explicit signal for
/// configurations the descriptor layer does not support.
///
pub mod error;

///
/// This module contains a Miller-Rabin primality test, used to validate
/// the prime of a p-adic base ring at construction time.
///
pub mod primality;

///
/// This module contains the immutable print configuration
/// [`print_mode::PrintOptions`] of a p-adic ring, together with the
/// mode-aware comparison that ring equality is built on.
///
pub mod print_mode;

///
/// This module contains the exact (unapproximated) layer: rational
/// coefficients, the exact defining polynomial [`exact::ExactPoly`] and
/// the number-field view [`exact::NumberField`].
///
pub mod exact;

///
/// This module contains [`base::PAdicBase`], the descriptor of a p-adic
/// base ring `Zp` or field `Qp`, and its minimal element type.
///
pub mod base;

///
/// This module contains [`poly::WorkingPoly`], the dense representation of
/// a precision-truncated defining polynomial.
///
pub mod poly;

///
/// This module contains [`extension::PAdicExtension`], the descriptor of
/// an algebraic extension of a p-adic ring, and its structural queries.
///
pub mod extension;

///
/// This module contains the fraction field coercion protocol:
/// [`extension::PAdicExtension::coerce_map_from()`] and the per-discipline
/// maps [`coercion::FracFieldCoercion`].
///
pub mod coercion;

///
/// This module contains [`construction::AlgebraicExtensionFunctor`], the
/// serializable description of how an extension was built, consumed by the
/// surrounding framework's pushout algebra.
///
pub mod construction;
