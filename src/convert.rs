//! Mapping native Groth16 artifacts into the verifier's representation.
//!
//! The target family is chosen by the type parameter. Every conversion fails
//! with [`ConversionError::TypeMismatch`] when the native value comes from
//! another family.

use crate::embedding::ScalarEmbedding;
use crate::errors::ConversionError;
use crate::family::{Family, FamilyId, G1El, G2El, GtEl, ScalarField};
use crate::groth16::{FamilyProof, FamilyVerifyingKey, FamilyWitness, Proof, VerifyingKey, Witness};
use crate::native::{NativeProof, NativeVerifyingKey, NativeWitness};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Zero;
use ark_relations::r1cs::ConstraintSystemRef;
use ark_serialize::Valid;
use itertools::Itertools;
use log::{debug, trace};

fn mismatch<F: Family>(artifact: &'static str, found: FamilyId) -> ConversionError {
    ConversionError::TypeMismatch {
        artifact,
        expected: F::ID,
        found,
    }
}

pub(crate) fn negate<A: AffineRepr>(point: &A) -> A {
    (-point.into_group()).into_affine()
}

/// Typed proof from the native proof.
pub fn value_of_proof<F: Family>(native: &NativeProof) -> Result<FamilyProof<F>, ConversionError> {
    let proof = F::proof(native).ok_or_else(|| mismatch::<F>("proof", native.family()))?;
    Ok(Proof {
        ar: proof.a,
        krs: proof.c,
        bs: proof.b,
    })
}

/// Typed verifying key from the native key.
///
/// Precomputes `e(alpha, beta)` and negates gamma and delta so that the
/// verifier can check a single multi-pairing against a constant.
pub fn value_of_verifying_key<F: Family>(
    native: &NativeVerifyingKey,
) -> Result<FamilyVerifyingKey<F>, ConversionError> {
    let vk = F::verifying_key(native)
        .ok_or_else(|| mismatch::<F>("verifying key", native.family()))?;

    vk.alpha_g1
        .check()
        .map_err(|err| ConversionError::PairingPrecompute {
            message: format!("alpha: {}", err),
        })?;
    vk.beta_g2
        .check()
        .map_err(|err| ConversionError::PairingPrecompute {
            message: format!("beta: {}", err),
        })?;
    let e = <F::Engine as Pairing>::pairing(vk.alpha_g1, vk.beta_g2);
    trace!("e(alpha, beta) on {}: {:?}", F::ID, e);

    let k = vk.gamma_abc_g1.iter().copied().collect_vec();
    debug!("Converted {} verifying key with {} K elements", F::ID, k.len());

    Ok(VerifyingKey {
        e,
        k,
        gamma_neg: negate(&vk.gamma_g2),
        delta_neg: negate(&vk.delta_g2),
    })
}

/// Typed public witness from the native witness.
///
/// Scalars are embedded with the family's strategy, which emulates them when
/// the verification context runs over a different field.
pub fn value_of_witness<F: Family>(
    native: &NativeWitness,
) -> Result<FamilyWitness<F>, ConversionError> {
    let witness = F::witness(native).ok_or_else(|| mismatch::<F>("witness", native.family()))?;
    let public = witness
        .public()?
        .iter()
        .map(<F::Embedding as ScalarEmbedding<ScalarField<F>>>::embed)
        .collect_vec();
    debug!("Converted {} witness with {} public inputs", F::ID, public.len());
    Ok(Witness { public })
}

/// Zero-valued verifying key sized for `nb_public_variables` (one wire included).
pub fn placeholder_verifying_key<F: Family>(nb_public_variables: usize) -> FamilyVerifyingKey<F> {
    VerifyingKey {
        e: <GtEl<F> as Zero>::zero(),
        k: vec![<G1El<F> as AffineRepr>::zero(); nb_public_variables],
        gamma_neg: <G2El<F> as AffineRepr>::zero(),
        delta_neg: <G2El<F> as AffineRepr>::zero(),
    }
}

/// Zero-valued witness sized for `nb_public_variables` (one wire included).
pub fn placeholder_witness<F: Family>(nb_public_variables: usize) -> FamilyWitness<F> {
    Witness {
        public: vec![
            <F::Embedding as ScalarEmbedding<ScalarField<F>>>::zero();
            nb_public_variables.saturating_sub(1)
        ],
    }
}

pub fn placeholder_verifying_key_for<F: Family>(
    cs: &ConstraintSystemRef<ScalarField<F>>,
) -> FamilyVerifyingKey<F> {
    placeholder_verifying_key::<F>(cs.num_instance_variables())
}

pub fn placeholder_witness_for<F: Family>(
    cs: &ConstraintSystemRef<ScalarField<F>>,
) -> FamilyWitness<F> {
    placeholder_witness::<F>(cs.num_instance_variables())
}
