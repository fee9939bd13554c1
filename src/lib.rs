//! # WARNING
//! This library has not been audited for security! Don't use it to secure anything of value.
//!# Groth16 recursion kernel
//!
//!This crate provides the verification kernel for checking a Groth16 proof produced over one pairing-friendly
//!curve inside a context that computes over another curve's field. Four families are supported: BN254,
//!BLS12-381, BLS12-377 and MNT6-753. Each is a zero-sized marker implementing `family::Family`, which fixes the
//!pairing engine and whether scalars are carried directly or emulated as 64-bit limbs.
//!
//!The core types are `groth16::Proof`, `groth16::VerifyingKey`, `groth16::Witness` and `groth16::Verifier`.
//!
//!The general flow is:
//!
//!- Wrap arkworks artifacts with `NativeProof::new`, `NativeVerifyingKey::new` and `NativeWitness::new`
//!- Convert them with `convert::value_of_proof`, `convert::value_of_verifying_key` and `convert::value_of_witness`
//!- Or, when only the shape is needed, build `convert::placeholder_verifying_key` and `convert::placeholder_witness`
//!- Build a verifier, e.g. `groth16::native_verifier`, and call `assert_proof`
//!
//!Errors are typed with `thiserror`. Setup problems (`errors::SetupError`) are always distinguishable from a
//!proof that simply does not verify (`errors::VerificationFailed`).
//!

/// Group and pairing providers the verifier is written against.
pub mod algebra;
/// Native-to-kernel conversions and placeholder construction.
pub mod convert;
/// Scalar embedding strategies.
pub mod embedding;
/// Error types for conversion, setup and verification.
pub mod errors;
/// Supported curve families.
pub mod family;
/// Kernel data model and the proof verifier.
pub mod groth16;
#[cfg(test)]
mod helpers;
/// Native arkworks artifacts tagged with their family.
pub mod native;

pub use convert::{
    placeholder_verifying_key, placeholder_witness, value_of_proof, value_of_verifying_key,
    value_of_witness,
};
pub use errors::{AssertProofError, ConversionError, SetupError, VerificationFailed};
pub use family::{Bls12_377, Bls12_381, Bn254, Family, FamilyId, Mnt6_753};
pub use groth16::{Proof, Verifier, VerifyingKey, Witness, native_verifier};
pub use native::{FullWitness, NativeProof, NativeVerifyingKey, NativeWitness};
