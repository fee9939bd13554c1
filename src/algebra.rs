//! Capability providers consumed by the verifier.
//!
//! [`Curve`] and [`PairingCheck`] are the only arithmetic the verifier needs.
//! The `Native*` providers evaluate everything eagerly with the arkworks engine
//! of a [`Family`]. [`DeferredPairing`] keeps the in-circuit failure model: an
//! equality that does not hold is recorded instead of returned.

use crate::embedding::ScalarEmbedding;
use crate::errors::{SetupError, VerificationFailed};
use crate::family::{Family, G1El, G2El, GtEl, Scalar, ScalarField};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_serialize::Valid;
use log::{debug, trace};
use std::cell::Cell;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Group operations on G1 over the verifier's scalar representation.
pub trait Curve {
    type Scalar;
    type G1: Clone + Debug;

    /// Sum of `points[i] * scalars[i]`. Empty input gives the identity.
    fn multi_scalar_mul(
        &self,
        points: &[Self::G1],
        scalars: &[Self::Scalar],
    ) -> Result<Self::G1, SetupError>;

    fn add(&self, a: &Self::G1, b: &Self::G1) -> Self::G1;
}

/// Multi-pairing and equality assertion in the target group.
pub trait PairingCheck {
    type G1: Clone + Debug;
    type G2: Clone + Debug;
    type Gt: Clone + Debug;

    fn pair(&self, p: &[Self::G1], q: &[Self::G2]) -> Result<Self::Gt, SetupError>;

    fn assert_is_equal(&self, a: &Self::Gt, b: &Self::Gt) -> Result<(), VerificationFailed>;
}

impl<T: Curve + ?Sized> Curve for &T {
    type Scalar = T::Scalar;
    type G1 = T::G1;

    fn multi_scalar_mul(
        &self,
        points: &[Self::G1],
        scalars: &[Self::Scalar],
    ) -> Result<Self::G1, SetupError> {
        (**self).multi_scalar_mul(points, scalars)
    }

    fn add(&self, a: &Self::G1, b: &Self::G1) -> Self::G1 {
        (**self).add(a, b)
    }
}

impl<T: PairingCheck + ?Sized> PairingCheck for &T {
    type G1 = T::G1;
    type G2 = T::G2;
    type Gt = T::Gt;

    fn pair(&self, p: &[Self::G1], q: &[Self::G2]) -> Result<Self::Gt, SetupError> {
        (**self).pair(p, q)
    }

    fn assert_is_equal(&self, a: &Self::Gt, b: &Self::Gt) -> Result<(), VerificationFailed> {
        (**self).assert_is_equal(a, b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCurve<F: Family> {
    _family: PhantomData<F>,
}

impl<F: Family> NativeCurve<F> {
    pub fn new() -> Self {
        NativeCurve {
            _family: PhantomData,
        }
    }
}

impl<F: Family> Curve for NativeCurve<F> {
    type Scalar = Scalar<F>;
    type G1 = G1El<F>;

    fn multi_scalar_mul(
        &self,
        points: &[G1El<F>],
        scalars: &[Scalar<F>],
    ) -> Result<G1El<F>, SetupError> {
        if points.len() != scalars.len() {
            return Err(SetupError::MultiScalarMul {
                message: format!("{} points for {} scalars", points.len(), scalars.len()),
            });
        }
        if points.is_empty() {
            trace!("empty multi scalar mul on {}, returning identity", F::ID);
            return Ok(<G1El<F> as AffineRepr>::zero());
        }

        let scalars = scalars
            .iter()
            .map(<F::Embedding as ScalarEmbedding<ScalarField<F>>>::resolve)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| SetupError::MultiScalarMul {
                message: err.to_string(),
            })?;

        let sum = <<F::Engine as Pairing>::G1 as VariableBaseMSM>::msm(points, &scalars)
            .map_err(|len| SetupError::MultiScalarMul {
                message: format!("msm stopped after {} terms", len),
            })?;
        Ok(sum.into_affine())
    }

    fn add(&self, a: &G1El<F>, b: &G1El<F>) -> G1El<F> {
        (*a + *b).into_affine()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NativePairing<F: Family> {
    _family: PhantomData<F>,
}

impl<F: Family> NativePairing<F> {
    pub fn new() -> Self {
        NativePairing {
            _family: PhantomData,
        }
    }
}

fn check_points<T: Valid>(points: &[T], group: &str) -> Result<(), SetupError> {
    for (i, point) in points.iter().enumerate() {
        point.check().map_err(|err| SetupError::Pairing {
            message: format!("{} element {} is invalid: {}", group, i, err),
        })?;
    }
    Ok(())
}

impl<F: Family> PairingCheck for NativePairing<F> {
    type G1 = G1El<F>;
    type G2 = G2El<F>;
    type Gt = GtEl<F>;

    fn pair(&self, p: &[G1El<F>], q: &[G2El<F>]) -> Result<GtEl<F>, SetupError> {
        if p.len() != q.len() {
            return Err(SetupError::Pairing {
                message: format!("{} G1 elements for {} G2 elements", p.len(), q.len()),
            });
        }
        check_points(p, "G1")?;
        check_points(q, "G2")?;
        Ok(<F::Engine as Pairing>::multi_pairing(
            p.iter().copied(),
            q.iter().copied(),
        ))
    }

    fn assert_is_equal(&self, a: &GtEl<F>, b: &GtEl<F>) -> Result<(), VerificationFailed> {
        if a == b {
            Ok(())
        } else {
            Err(VerificationFailed)
        }
    }
}

/// Pairing provider that records equality assertions instead of failing them.
///
/// This mirrors a verifier compiled into a circuit, where an assertion is a
/// constraint: a bad proof does not produce an error at the call site, it
/// makes the whole system unsatisfiable. Check [`DeferredPairing::is_satisfied`]
/// once every assertion has been made.
#[derive(Debug, Default)]
pub struct DeferredPairing<F: Family> {
    native: NativePairing<F>,
    asserted: Cell<usize>,
    violated: Cell<usize>,
}

impl<F: Family> DeferredPairing<F> {
    pub fn new() -> Self {
        DeferredPairing {
            native: NativePairing::new(),
            asserted: Cell::new(0),
            violated: Cell::new(0),
        }
    }

    pub fn nb_assertions(&self) -> usize {
        self.asserted.get()
    }

    pub fn nb_violations(&self) -> usize {
        self.violated.get()
    }

    pub fn is_satisfied(&self) -> bool {
        self.violated.get() == 0
    }
}

impl<F: Family> PairingCheck for DeferredPairing<F> {
    type G1 = G1El<F>;
    type G2 = G2El<F>;
    type Gt = GtEl<F>;

    fn pair(&self, p: &[G1El<F>], q: &[G2El<F>]) -> Result<GtEl<F>, SetupError> {
        self.native.pair(p, q)
    }

    fn assert_is_equal(&self, a: &GtEl<F>, b: &GtEl<F>) -> Result<(), VerificationFailed> {
        self.asserted.set(self.asserted.get() + 1);
        if self.native.assert_is_equal(a, b).is_err() {
            debug!(
                "assertion {} on {} does not hold",
                self.asserted.get(),
                F::ID
            );
            self.violated.set(self.violated.get() + 1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::EmulatedScalar;
    use crate::family::{Bls12_377, Bn254};
    use crate::helpers::{init, rand_scalar};
    use ark_ec::PrimeGroup;

    #[test]
    fn empty_msm_is_identity() {
        init();
        let curve = NativeCurve::<Bn254>::new();
        let sum = curve.multi_scalar_mul(&[], &[]).unwrap();
        assert!(sum.is_zero());

        let curve = NativeCurve::<Bls12_377>::new();
        assert!(curve.multi_scalar_mul(&[], &[]).unwrap().is_zero());
    }

    #[test]
    fn msm_matches_weighted_sum() {
        let mut rng = rand::rng();
        let curve = NativeCurve::<Bls12_377>::new();
        let generator = <ark_bls12_377::Bls12_377 as Pairing>::G1::generator();

        let weights: Vec<ark_bls12_377::Fr> = (0..5).map(|_| rand_scalar(&mut rng)).collect();
        let points: Vec<_> = (1..=5u64)
            .map(|i| (generator * ark_bls12_377::Fr::from(i)).into_affine())
            .collect();
        let expected: ark_bls12_377::Fr = weights
            .iter()
            .zip(1..=5u64)
            .map(|(w, i)| *w * ark_bls12_377::Fr::from(i))
            .sum();

        let sum = curve.multi_scalar_mul(&points, &weights).unwrap();
        assert_eq!(sum, (generator * expected).into_affine());
    }

    #[test]
    fn emulated_msm_matches_native_scalars() {
        let mut rng = rand::rng();
        let curve = NativeCurve::<Bn254>::new();
        let generator = <ark_bn254::Bn254 as Pairing>::G1::generator();
        let value: ark_bn254::Fr = rand_scalar(&mut rng);

        let scalar = <crate::embedding::Emulated as ScalarEmbedding<_>>::embed(&value);
        let sum = curve
            .multi_scalar_mul(&[generator.into_affine()], &[scalar])
            .unwrap();
        assert_eq!(sum, (generator * value).into_affine());
    }

    #[test]
    fn msm_length_mismatch_is_setup_error() {
        let curve = NativeCurve::<Bls12_377>::new();
        let point = <ark_bls12_377::Bls12_377 as Pairing>::G1Affine::generator();
        let result = curve.multi_scalar_mul(&[point, point], &[ark_bls12_377::Fr::from(1u64)]);
        assert!(matches!(result, Err(SetupError::MultiScalarMul { .. })));
    }

    #[test]
    fn msm_rejects_non_canonical_limbs() {
        let curve = NativeCurve::<Bn254>::new();
        let point = <ark_bn254::Bn254 as Pairing>::G1Affine::generator();
        let scalar = EmulatedScalar {
            limbs: vec![u64::MAX; 4],
        };
        let result = curve.multi_scalar_mul(&[point], &[scalar]);
        assert!(matches!(result, Err(SetupError::MultiScalarMul { .. })));
    }

    #[test]
    fn add_is_group_addition() {
        let curve = NativeCurve::<Bn254>::new();
        let g = <ark_bn254::Bn254 as Pairing>::G1::generator();
        let sum = curve.add(&g.into_affine(), &(g * ark_bn254::Fr::from(2u64)).into_affine());
        assert_eq!(sum, (g * ark_bn254::Fr::from(3u64)).into_affine());
    }

    #[test]
    fn pair_rejects_point_off_curve() {
        let pairing = NativePairing::<Bn254>::new();
        let bad = ark_bn254::G1Affine::new_unchecked(ark_bn254::Fq::from(1u64), ark_bn254::Fq::from(1u64));
        let result = pairing.pair(&[bad], &[ark_bn254::G2Affine::generator()]);
        assert!(matches!(result, Err(SetupError::Pairing { .. })));
    }

    #[test]
    fn pair_rejects_length_mismatch() {
        let pairing = NativePairing::<Bn254>::new();
        let result = pairing.pair(&[ark_bn254::G1Affine::generator()], &[]);
        assert!(matches!(result, Err(SetupError::Pairing { .. })));
    }

    #[test]
    fn pair_is_bilinear() {
        let pairing = NativePairing::<Bn254>::new();
        let g1 = ark_bn254::G1Affine::generator();
        let g2 = ark_bn254::G2Affine::generator();
        let two = ark_bn254::Fr::from(2u64);

        let lhs = pairing.pair(&[(g1 * two).into_affine()], &[g2]).unwrap();
        let rhs = pairing.pair(&[g1], &[(g2 * two).into_affine()]).unwrap();
        assert!(pairing.assert_is_equal(&lhs, &rhs).is_ok());

        let other = pairing.pair(&[g1], &[g2]).unwrap();
        assert_eq!(pairing.assert_is_equal(&lhs, &other), Err(VerificationFailed));
    }

    #[test]
    fn deferred_pairing_records_violations() {
        init();
        let pairing = DeferredPairing::<Bn254>::new();
        let g1 = ark_bn254::G1Affine::generator();
        let g2 = ark_bn254::G2Affine::generator();
        let e = pairing.pair(&[g1], &[g2]).unwrap();
        let e2 = pairing.pair(&[(g1 * ark_bn254::Fr::from(2u64)).into_affine()], &[g2]).unwrap();

        assert!(pairing.assert_is_equal(&e, &e).is_ok());
        assert!(pairing.is_satisfied());

        assert!(pairing.assert_is_equal(&e, &e2).is_ok());
        assert_eq!(pairing.nb_assertions(), 2);
        assert_eq!(pairing.nb_violations(), 1);
        assert!(!pairing.is_satisfied());
    }
}
