//! Error types, split by the phase they can occur in.
//!
//! Conversion and setup errors mean the caller handed over a malformed or
//! mismatched artifact. [`VerificationFailed`] means everything was well formed
//! but the proof does not satisfy the pairing equation. The two are kept as
//! separate kinds in [`AssertProofError`].

use crate::family::FamilyId;
use thiserror::Error;

/// Errors raised while mapping native artifacts into the abstract representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The native value belongs to a different family than the requested target.
    #[error("expected {expected} {artifact}, got {found} {artifact}")]
    TypeMismatch {
        /// Which artifact was being converted.
        artifact: &'static str,
        /// Family requested by the caller.
        expected: FamilyId,
        /// Family of the native value.
        found: FamilyId,
    },

    /// Computing `e(alpha, beta)` on the native key failed.
    #[error("precompute pairing: {message}")]
    PairingPrecompute {
        /// Description of the failure.
        message: String,
    },

    /// The native witness has no usable public part.
    #[error("get public witness: {message}")]
    WitnessExtraction {
        /// Description of the failure.
        message: String,
    },
}

/// Errors raised by [`crate::embedding::ScalarEmbedding::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbeddingError {
    /// Limb vector has the wrong length for the target field.
    #[error("expected {expected} limbs, got {actual}")]
    LimbCount {
        /// Limbs required by the field.
        expected: usize,
        /// Limbs supplied.
        actual: usize,
    },

    /// Limbs encode an integer not below the field modulus.
    #[error("limbs do not encode a canonical field element")]
    NonCanonical,
}

/// Caller errors detected while evaluating the verification equation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Verifying key and witness belong to different circuits.
    #[error("verifying key has {nb_keys} K elements, witness has {nb_public} public inputs")]
    ShapeMismatch {
        /// Length of `vk.k`.
        nb_keys: usize,
        /// Length of `witness.public`.
        nb_public: usize,
    },

    /// The curve provider could not compute the weighted sum.
    #[error("multi scalar mul: {message}")]
    MultiScalarMul {
        /// Description of the failure.
        message: String,
    },

    /// The pairing provider could not evaluate the multi-pairing.
    #[error("pairing: {message}")]
    Pairing {
        /// Description of the failure.
        message: String,
    },
}

/// The proof does not satisfy the verification equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("proof does not satisfy the pairing equation")]
pub struct VerificationFailed;

/// Outcome of a failed [`crate::groth16::Verifier::assert_proof`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertProofError {
    /// The inputs were malformed; nothing was verified.
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// The inputs were well formed and the proof is invalid.
    #[error(transparent)]
    Failed(#[from] VerificationFailed),
}

impl AssertProofError {
    /// True when the proof was evaluated and rejected, as opposed to a setup error.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, AssertProofError::Failed(_))
    }
}
