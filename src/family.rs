use crate::embedding::{Direct, Emulated, ScalarEmbedding};
use crate::native::{FullWitness, NativeProof, NativeVerifyingKey, NativeWitness};
use ark_ec::pairing::{Pairing, PairingOutput};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Runtime name of a supported family.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyId {
    #[serde(rename = "bn254")]
    Bn254,
    #[serde(rename = "bls12-377")]
    Bls12_377,
    #[serde(rename = "bls12-381")]
    Bls12_381,
    #[serde(rename = "mnt6-753")]
    Mnt6_753,
}

impl FamilyId {
    pub const ALL: [FamilyId; 4] = [
        FamilyId::Bn254,
        FamilyId::Bls12_377,
        FamilyId::Bls12_381,
        FamilyId::Mnt6_753,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FamilyId::Bn254 => "bn254",
            FamilyId::Bls12_377 => "bls12-377",
            FamilyId::Bls12_381 => "bls12-381",
            FamilyId::Mnt6_753 => "mnt6-753",
        }
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algebraic family: {0}")]
pub struct UnknownFamily(pub String);

impl FromStr for FamilyId {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FamilyId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A pairing-friendly family the verifier can be instantiated over.
///
/// The set is closed: the trait is sealed and every implementor has a matching
/// variant in each of the native artifact enums. A family fixes the native
/// engine and the way its scalars are embedded into the verification context.
pub trait Family: sealed::Sealed + Sized + 'static {
    const ID: FamilyId;

    type Engine: Pairing;

    /// Scalar embedding strategy, fixed per family.
    type Embedding: ScalarEmbedding<<Self::Engine as Pairing>::ScalarField>;

    fn proof(native: &NativeProof) -> Option<&ark_groth16::Proof<Self::Engine>>;

    fn verifying_key(
        native: &NativeVerifyingKey,
    ) -> Option<&ark_groth16::VerifyingKey<Self::Engine>>;

    fn witness(
        native: &NativeWitness,
    ) -> Option<&FullWitness<<Self::Engine as Pairing>::ScalarField>>;

    fn wrap_proof(proof: ark_groth16::Proof<Self::Engine>) -> NativeProof;

    fn wrap_verifying_key(vk: ark_groth16::VerifyingKey<Self::Engine>) -> NativeVerifyingKey;

    fn wrap_witness(
        witness: FullWitness<<Self::Engine as Pairing>::ScalarField>,
    ) -> NativeWitness;
}

pub type ScalarField<F> = <<F as Family>::Engine as Pairing>::ScalarField;
pub type G1El<F> = <<F as Family>::Engine as Pairing>::G1Affine;
pub type G2El<F> = <<F as Family>::Engine as Pairing>::G2Affine;
pub type GtEl<F> = PairingOutput<<F as Family>::Engine>;
/// Scalar type seen by the verifier, after embedding.
pub type Scalar<F> = <<F as Family>::Embedding as ScalarEmbedding<ScalarField<F>>>::Scalar;

/// BN254. Scalars are emulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bn254;

/// BLS12-377. Scalars are embedded directly.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bls12_377;

/// BLS12-381. Scalars are emulated.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bls12_381;

/// MNT6-753. Scalars are embedded directly.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mnt6_753;

impl sealed::Sealed for Bn254 {}
impl sealed::Sealed for Bls12_377 {}
impl sealed::Sealed for Bls12_381 {}
impl sealed::Sealed for Mnt6_753 {}

impl Family for Bn254 {
    const ID: FamilyId = FamilyId::Bn254;
    type Engine = ark_bn254::Bn254;
    type Embedding = Emulated;

    fn proof(native: &NativeProof) -> Option<&ark_groth16::Proof<Self::Engine>> {
        match native {
            NativeProof::Bn254(proof) => Some(proof),
            _ => None,
        }
    }

    fn verifying_key(
        native: &NativeVerifyingKey,
    ) -> Option<&ark_groth16::VerifyingKey<Self::Engine>> {
        match native {
            NativeVerifyingKey::Bn254(vk) => Some(vk),
            _ => None,
        }
    }

    fn witness(native: &NativeWitness) -> Option<&FullWitness<ark_bn254::Fr>> {
        match native {
            NativeWitness::Bn254(witness) => Some(witness),
            _ => None,
        }
    }

    fn wrap_proof(proof: ark_groth16::Proof<Self::Engine>) -> NativeProof {
        NativeProof::Bn254(proof)
    }

    fn wrap_verifying_key(vk: ark_groth16::VerifyingKey<Self::Engine>) -> NativeVerifyingKey {
        NativeVerifyingKey::Bn254(vk)
    }

    fn wrap_witness(witness: FullWitness<ark_bn254::Fr>) -> NativeWitness {
        NativeWitness::Bn254(witness)
    }
}

impl Family for Bls12_377 {
    const ID: FamilyId = FamilyId::Bls12_377;
    type Engine = ark_bls12_377::Bls12_377;
    type Embedding = Direct;

    fn proof(native: &NativeProof) -> Option<&ark_groth16::Proof<Self::Engine>> {
        match native {
            NativeProof::Bls12_377(proof) => Some(proof),
            _ => None,
        }
    }

    fn verifying_key(
        native: &NativeVerifyingKey,
    ) -> Option<&ark_groth16::VerifyingKey<Self::Engine>> {
        match native {
            NativeVerifyingKey::Bls12_377(vk) => Some(vk),
            _ => None,
        }
    }

    fn witness(native: &NativeWitness) -> Option<&FullWitness<ark_bls12_377::Fr>> {
        match native {
            NativeWitness::Bls12_377(witness) => Some(witness),
            _ => None,
        }
    }

    fn wrap_proof(proof: ark_groth16::Proof<Self::Engine>) -> NativeProof {
        NativeProof::Bls12_377(proof)
    }

    fn wrap_verifying_key(vk: ark_groth16::VerifyingKey<Self::Engine>) -> NativeVerifyingKey {
        NativeVerifyingKey::Bls12_377(vk)
    }

    fn wrap_witness(witness: FullWitness<ark_bls12_377::Fr>) -> NativeWitness {
        NativeWitness::Bls12_377(witness)
    }
}

impl Family for Bls12_381 {
    const ID: FamilyId = FamilyId::Bls12_381;
    type Engine = ark_bls12_381::Bls12_381;
    type Embedding = Emulated;

    fn proof(native: &NativeProof) -> Option<&ark_groth16::Proof<Self::Engine>> {
        match native {
            NativeProof::Bls12_381(proof) => Some(proof),
            _ => None,
        }
    }

    fn verifying_key(
        native: &NativeVerifyingKey,
    ) -> Option<&ark_groth16::VerifyingKey<Self::Engine>> {
        match native {
            NativeVerifyingKey::Bls12_381(vk) => Some(vk),
            _ => None,
        }
    }

    fn witness(native: &NativeWitness) -> Option<&FullWitness<ark_bls12_381::Fr>> {
        match native {
            NativeWitness::Bls12_381(witness) => Some(witness),
            _ => None,
        }
    }

    fn wrap_proof(proof: ark_groth16::Proof<Self::Engine>) -> NativeProof {
        NativeProof::Bls12_381(proof)
    }

    fn wrap_verifying_key(vk: ark_groth16::VerifyingKey<Self::Engine>) -> NativeVerifyingKey {
        NativeVerifyingKey::Bls12_381(vk)
    }

    fn wrap_witness(witness: FullWitness<ark_bls12_381::Fr>) -> NativeWitness {
        NativeWitness::Bls12_381(witness)
    }
}

impl Family for Mnt6_753 {
    const ID: FamilyId = FamilyId::Mnt6_753;
    type Engine = ark_mnt6_753::MNT6_753;
    type Embedding = Direct;

    fn proof(native: &NativeProof) -> Option<&ark_groth16::Proof<Self::Engine>> {
        match native {
            NativeProof::Mnt6_753(proof) => Some(proof),
            _ => None,
        }
    }

    fn verifying_key(
        native: &NativeVerifyingKey,
    ) -> Option<&ark_groth16::VerifyingKey<Self::Engine>> {
        match native {
            NativeVerifyingKey::Mnt6_753(vk) => Some(vk),
            _ => None,
        }
    }

    fn witness(native: &NativeWitness) -> Option<&FullWitness<ark_mnt6_753::Fr>> {
        match native {
            NativeWitness::Mnt6_753(witness) => Some(witness),
            _ => None,
        }
    }

    fn wrap_proof(proof: ark_groth16::Proof<Self::Engine>) -> NativeProof {
        NativeProof::Mnt6_753(proof)
    }

    fn wrap_verifying_key(vk: ark_groth16::VerifyingKey<Self::Engine>) -> NativeVerifyingKey {
        NativeVerifyingKey::Mnt6_753(vk)
    }

    fn wrap_witness(witness: FullWitness<ark_mnt6_753::Fr>) -> NativeWitness {
        NativeWitness::Mnt6_753(witness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_names_round_trip() {
        for id in FamilyId::ALL {
            assert_eq!(id.to_string().parse::<FamilyId>(), Ok(id));
        }
        assert_eq!("BLS12-381".parse::<FamilyId>(), Ok(FamilyId::Bls12_381));
        assert_eq!(
            "bls24-315".parse::<FamilyId>(),
            Err(UnknownFamily("bls24-315".to_string()))
        );
    }

    #[test]
    fn family_id_serde_matches_display() {
        for id in FamilyId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id));
            assert_eq!(serde_json::from_str::<FamilyId>(&json).unwrap(), id);
        }
    }

    #[test]
    fn markers_report_their_id() {
        assert_eq!(Bn254::ID, FamilyId::Bn254);
        assert_eq!(Bls12_377::ID, FamilyId::Bls12_377);
        assert_eq!(Bls12_381::ID, FamilyId::Bls12_381);
        assert_eq!(Mnt6_753::ID, FamilyId::Mnt6_753);
    }
}
