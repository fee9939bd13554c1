use crate::errors::ConversionError;
use crate::family::{Family, FamilyId};
use ark_ff::PrimeField;
use ark_groth16::{Proof, VerifyingKey};
use ark_relations::r1cs::ConstraintSystemRef;
use std::iter::once;

/// A Groth16 proof produced by one of the supported native backends.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq)]
pub enum NativeProof {
    Bn254(Proof<ark_bn254::Bn254>),
    Bls12_377(Proof<ark_bls12_377::Bls12_377>),
    Bls12_381(Proof<ark_bls12_381::Bls12_381>),
    Mnt6_753(Proof<ark_mnt6_753::MNT6_753>),
}

impl NativeProof {
    pub fn new<F: Family>(proof: Proof<F::Engine>) -> Self {
        F::wrap_proof(proof)
    }

    pub fn family(&self) -> FamilyId {
        match self {
            NativeProof::Bn254(_) => FamilyId::Bn254,
            NativeProof::Bls12_377(_) => FamilyId::Bls12_377,
            NativeProof::Bls12_381(_) => FamilyId::Bls12_381,
            NativeProof::Mnt6_753(_) => FamilyId::Mnt6_753,
        }
    }
}

/// A Groth16 verifying key produced by one of the supported native backends.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq)]
pub enum NativeVerifyingKey {
    Bn254(VerifyingKey<ark_bn254::Bn254>),
    Bls12_377(VerifyingKey<ark_bls12_377::Bls12_377>),
    Bls12_381(VerifyingKey<ark_bls12_381::Bls12_381>),
    Mnt6_753(VerifyingKey<ark_mnt6_753::MNT6_753>),
}

impl NativeVerifyingKey {
    pub fn new<F: Family>(vk: VerifyingKey<F::Engine>) -> Self {
        F::wrap_verifying_key(vk)
    }

    pub fn family(&self) -> FamilyId {
        match self {
            NativeVerifyingKey::Bn254(_) => FamilyId::Bn254,
            NativeVerifyingKey::Bls12_377(_) => FamilyId::Bls12_377,
            NativeVerifyingKey::Bls12_381(_) => FamilyId::Bls12_381,
            NativeVerifyingKey::Mnt6_753(_) => FamilyId::Mnt6_753,
        }
    }
}

/// A full assignment over one of the supported scalar fields.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeWitness {
    Bn254(FullWitness<ark_bn254::Fr>),
    Bls12_377(FullWitness<ark_bls12_377::Fr>),
    Bls12_381(FullWitness<ark_bls12_381::Fr>),
    Mnt6_753(FullWitness<ark_mnt6_753::Fr>),
}

impl NativeWitness {
    pub fn new<F: Family>(
        witness: FullWitness<<F::Engine as ark_ec::pairing::Pairing>::ScalarField>,
    ) -> Self {
        F::wrap_witness(witness)
    }

    pub fn family(&self) -> FamilyId {
        match self {
            NativeWitness::Bn254(_) => FamilyId::Bn254,
            NativeWitness::Bls12_377(_) => FamilyId::Bls12_377,
            NativeWitness::Bls12_381(_) => FamilyId::Bls12_381,
            NativeWitness::Mnt6_753(_) => FamilyId::Mnt6_753,
        }
    }
}

/// Witness assignment as the native backend sees it.
///
/// `instance` follows the arkworks layout: index 0 holds the constant one wire
/// and the public inputs follow it. `secret` holds the private assignment and is
/// never read by the verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullWitness<F> {
    instance: Vec<F>,
    secret: Vec<F>,
}

impl<F: PrimeField> FullWitness<F> {
    /// Build from an instance vector that already carries the one wire.
    pub fn new(instance: Vec<F>, secret: Vec<F>) -> Self {
        FullWitness { instance, secret }
    }

    /// Build a public-only witness, prepending the one wire.
    pub fn from_public_inputs(public: impl IntoIterator<Item = F>) -> Self {
        FullWitness {
            instance: once(F::one()).chain(public).collect(),
            secret: Vec::new(),
        }
    }

    /// Read the assignment out of a synthesized constraint system.
    ///
    /// Fails if the system was synthesized in setup mode, since then only the
    /// shape is known and the instance assignment is incomplete.
    pub fn from_constraint_system(cs: &ConstraintSystemRef<F>) -> Result<Self, ConversionError> {
        let cs = cs.borrow().ok_or_else(|| ConversionError::WitnessExtraction {
            message: "constraint system is not initialised".to_string(),
        })?;
        if cs.instance_assignment.len() != cs.num_instance_variables {
            return Err(ConversionError::WitnessExtraction {
                message: format!(
                    "instance assignment has {} values for {} public variables",
                    cs.instance_assignment.len(),
                    cs.num_instance_variables
                ),
            });
        }
        Ok(FullWitness {
            instance: cs.instance_assignment.clone(),
            secret: cs.witness_assignment.clone(),
        })
    }

    /// Public inputs, without the one wire.
    pub fn public(&self) -> Result<&[F], ConversionError> {
        match self.instance.split_first() {
            Some((one, public)) if one.is_one() => Ok(public),
            Some(_) => Err(ConversionError::WitnessExtraction {
                message: "first instance value is not the one wire".to_string(),
            }),
            None => Err(ConversionError::WitnessExtraction {
                message: "witness has no public part".to_string(),
            }),
        }
    }

    /// Number of public variables, one wire included.
    pub fn nb_public_variables(&self) -> usize {
        self.instance.len()
    }

    pub fn secret(&self) -> &[F] {
        &self.secret
    }
}
