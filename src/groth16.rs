use crate::algebra::{Curve, NativeCurve, NativePairing, PairingCheck};
use crate::errors::{AssertProofError, SetupError};
use crate::family::{Family, G1El, G2El, GtEl, Scalar};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use log::{debug, trace};

/// Groth16 proof over abstract group elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof<G1, G2> {
    pub ar: G1,
    pub krs: G1,
    pub bs: G2,
}

/// Groth16 verifying key prepared for a single multi-pairing check.
///
/// `e` is the precomputed `e(alpha, beta)` and the G2 elements are already
/// negated, so verification never divides in the target group. `k[0]` is the
/// coefficient of the one wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyingKey<G1, G2, Gt> {
    pub e: Gt,
    pub k: Vec<G1>,
    pub gamma_neg: G2,
    pub delta_neg: G2,
}

impl<G1, G2, Gt> VerifyingKey<G1, G2, Gt> {
    /// Number of public variables the key was generated for, one wire included.
    pub fn nb_public_variables(&self) -> usize {
        self.k.len()
    }
}

/// Public inputs of a proof. The one wire is not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness<S> {
    pub public: Vec<S>,
}

impl<G1: CanonicalSerialize, G2: CanonicalSerialize> CanonicalSerialize for Proof<G1, G2> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.ar.serialize_with_mode(&mut writer, compress)?;
        self.krs.serialize_with_mode(&mut writer, compress)?;
        self.bs.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.ar.serialized_size(compress)
            + self.krs.serialized_size(compress)
            + self.bs.serialized_size(compress)
    }
}

impl<G1: Valid, G2: Valid> Valid for Proof<G1, G2> {
    fn check(&self) -> Result<(), SerializationError> {
        self.ar.check()?;
        self.krs.check()?;
        self.bs.check()
    }
}

impl<G1: CanonicalDeserialize, G2: CanonicalDeserialize> CanonicalDeserialize for Proof<G1, G2> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        Ok(Proof {
            ar: G1::deserialize_with_mode(&mut reader, compress, validate)?,
            krs: G1::deserialize_with_mode(&mut reader, compress, validate)?,
            bs: G2::deserialize_with_mode(&mut reader, compress, validate)?,
        })
    }
}

impl<G1, G2, Gt> CanonicalSerialize for VerifyingKey<G1, G2, Gt>
where
    G1: CanonicalSerialize,
    G2: CanonicalSerialize,
    Gt: CanonicalSerialize,
{
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.e.serialize_with_mode(&mut writer, compress)?;
        self.k.serialize_with_mode(&mut writer, compress)?;
        self.gamma_neg.serialize_with_mode(&mut writer, compress)?;
        self.delta_neg.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.e.serialized_size(compress)
            + self.k.serialized_size(compress)
            + self.gamma_neg.serialized_size(compress)
            + self.delta_neg.serialized_size(compress)
    }
}

impl<G1: Valid, G2: Valid, Gt: Valid> Valid for VerifyingKey<G1, G2, Gt> {
    fn check(&self) -> Result<(), SerializationError> {
        self.e.check()?;
        self.k.iter().try_for_each(Valid::check)?;
        self.gamma_neg.check()?;
        self.delta_neg.check()
    }
}

impl<G1, G2, Gt> CanonicalDeserialize for VerifyingKey<G1, G2, Gt>
where
    G1: CanonicalDeserialize,
    G2: CanonicalDeserialize,
    Gt: CanonicalDeserialize,
{
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        Ok(VerifyingKey {
            e: Gt::deserialize_with_mode(&mut reader, compress, validate)?,
            k: Vec::<G1>::deserialize_with_mode(&mut reader, compress, validate)?,
            gamma_neg: G2::deserialize_with_mode(&mut reader, compress, validate)?,
            delta_neg: G2::deserialize_with_mode(&mut reader, compress, validate)?,
        })
    }
}

impl<S: CanonicalSerialize> CanonicalSerialize for Witness<S> {
    fn serialize_with_mode<W: Write>(
        &self,
        writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.public.serialize_with_mode(writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.public.serialized_size(compress)
    }
}

impl<S: Valid> Valid for Witness<S> {
    fn check(&self) -> Result<(), SerializationError> {
        self.public.iter().try_for_each(Valid::check)
    }
}

impl<S: CanonicalDeserialize> CanonicalDeserialize for Witness<S> {
    fn deserialize_with_mode<R: Read>(
        reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        Ok(Witness {
            public: Vec::<S>::deserialize_with_mode(reader, compress, validate)?,
        })
    }
}

pub type FamilyProof<F> = Proof<G1El<F>, G2El<F>>;
pub type FamilyVerifyingKey<F> = VerifyingKey<G1El<F>, G2El<F>, GtEl<F>>;
pub type FamilyWitness<F> = Witness<Scalar<F>>;

/// Checks Groth16 proofs with the given curve and pairing providers.
#[derive(Debug, Clone)]
pub struct Verifier<C, P> {
    curve: C,
    pairing: P,
}

/// Verifier evaluating the equation eagerly on the family's native engine.
pub fn native_verifier<F: Family>() -> Verifier<NativeCurve<F>, NativePairing<F>> {
    Verifier::new(NativeCurve::new(), NativePairing::new())
}

impl<C, P> Verifier<C, P>
where
    C: Curve,
    P: PairingCheck<G1 = C::G1>,
{
    pub fn new(curve: C, pairing: P) -> Self {
        Verifier { curve, pairing }
    }

    /// Asserts that `proof` holds for `witness` under `vk`.
    ///
    /// Checks `e(k_sum, -gamma) * e(krs, -delta) * e(ar, bs) == e(alpha, beta)`
    /// where `k_sum = k[0] + sum(k[i + 1] * public[i])`.
    ///
    /// A mismatched key/witness pair or a provider failure is reported as
    /// [`AssertProofError::Setup`]. A well formed proof that does not satisfy
    /// the equation is [`AssertProofError::Failed`]. With a recording pairing
    /// provider the latter never surfaces here.
    pub fn assert_proof(
        &self,
        vk: &VerifyingKey<C::G1, P::G2, P::Gt>,
        proof: &Proof<C::G1, P::G2>,
        witness: &Witness<C::Scalar>,
    ) -> Result<(), AssertProofError> {
        let Some((one_wire, inputs)) = vk.k.split_first() else {
            return Err(SetupError::ShapeMismatch {
                nb_keys: 0,
                nb_public: witness.public.len(),
            }
            .into());
        };
        if inputs.len() != witness.public.len() {
            return Err(SetupError::ShapeMismatch {
                nb_keys: vk.k.len(),
                nb_public: witness.public.len(),
            }
            .into());
        }
        debug!("Verifying proof with {} public inputs", witness.public.len());

        let k_sum = self.curve.multi_scalar_mul(inputs, &witness.public)?;
        let k_sum = self.curve.add(&k_sum, one_wire);
        trace!("k_sum: {:?}", k_sum);

        let result = self.pairing.pair(
            &[k_sum, proof.krs.clone(), proof.ar.clone()],
            &[vk.gamma_neg.clone(), vk.delta_neg.clone(), proof.bs.clone()],
        )?;
        self.pairing.assert_is_equal(&result, &vk.e)?;
        Ok(())
    }
}
