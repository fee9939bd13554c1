//! Strategies for carrying a native scalar into the verification context.
//!
//! When the verification context computes over the same field as the native
//! proof, scalars are re-encoded as they are ([`Direct`]). Otherwise they are
//! decomposed into 64-bit limbs and carried as a foreign-field value
//! ([`Emulated`]). The choice is fixed per [`crate::family::Family`].

use crate::errors::EmbeddingError;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use std::fmt::Debug;

pub trait ScalarEmbedding<F: PrimeField> {
    type Scalar: Clone + Debug + PartialEq + CanonicalSerialize + CanonicalDeserialize;

    fn embed(value: &F) -> Self::Scalar;

    /// Value used for placeholder witnesses.
    fn zero() -> Self::Scalar;

    /// Recover the native field element the scalar stands for.
    fn resolve(scalar: &Self::Scalar) -> Result<F, EmbeddingError>;
}

/// Same-field re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Direct;

impl<F: PrimeField> ScalarEmbedding<F> for Direct {
    type Scalar = F;

    fn embed(value: &F) -> F {
        *value
    }

    fn zero() -> F {
        F::zero()
    }

    fn resolve(scalar: &F) -> Result<F, EmbeddingError> {
        Ok(*scalar)
    }
}

/// Foreign-field embedding as little-endian 64-bit limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emulated;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, CanonicalSerialize, CanonicalDeserialize)]
pub struct EmulatedScalar {
    /// Least significant limb first.
    pub limbs: Vec<u64>,
}

impl<F: PrimeField> ScalarEmbedding<F> for Emulated {
    type Scalar = EmulatedScalar;

    fn embed(value: &F) -> EmulatedScalar {
        EmulatedScalar {
            limbs: value.into_bigint().as_ref().to_vec(),
        }
    }

    fn zero() -> EmulatedScalar {
        EmulatedScalar {
            limbs: vec![0; F::BigInt::default().as_ref().len()],
        }
    }

    fn resolve(scalar: &EmulatedScalar) -> Result<F, EmbeddingError> {
        let mut repr = F::BigInt::default();
        let expected = repr.as_ref().len();
        if scalar.limbs.len() != expected {
            return Err(EmbeddingError::LimbCount {
                expected,
                actual: scalar.limbs.len(),
            });
        }
        repr.as_mut().copy_from_slice(&scalar.limbs);
        F::from_bigint(repr).ok_or(EmbeddingError::NonCanonical)
    }
}
