//! Fixtures shared by the unit tests: native artifacts produced with arkworks'
//! Groth16 prover for two small circuits.

use crate::family::{Family, ScalarField};
use crate::native::{FullWitness, NativeProof, NativeVerifyingKey, NativeWitness};
use ark_ff::{Field, PrimeField};
use ark_groth16::Groth16;
use ark_relations::lc;
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, SynthesisError, Variable,
};
use ark_snark::SNARK;
use ark_std::rand::{SeedableRng, rngs::StdRng};
use log::debug;
use rand::Rng;
use rootcause::prelude::ResultExt;
use rootcause::{Report, bail};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rand_scalar<T, S>(rng: &mut T) -> S
where
    T: Rng,
    S: Field,
{
    let mut bytes = [0; 256];
    loop {
        rng.fill_bytes(&mut bytes);
        if let Some(out) = S::from_random_bytes(&bytes) {
            return out;
        }
    }
}

/// Public `a * b` and `a + b`, secret `a` and `b`.
#[derive(Clone)]
pub struct ProductCircuit<F: PrimeField> {
    a: Option<F>,
    b: Option<F>,
}

impl<F: PrimeField> ProductCircuit<F> {
    pub fn new(a: F, b: F) -> Self {
        ProductCircuit {
            a: Some(a),
            b: Some(b),
        }
    }

    pub fn empty() -> Self {
        ProductCircuit { a: None, b: None }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for ProductCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let a_value = || self.a.ok_or(SynthesisError::AssignmentMissing);
        let b_value = || self.b.ok_or(SynthesisError::AssignmentMissing);

        let product = cs.new_input_variable(|| Ok(a_value()? * b_value()?))?;
        let sum = cs.new_input_variable(|| Ok(a_value()? + b_value()?))?;
        let a = cs.new_witness_variable(a_value)?;
        let b = cs.new_witness_variable(b_value)?;

        cs.enforce_constraint(lc!() + a, lc!() + b, lc!() + product)?;
        cs.enforce_constraint(lc!() + a + b, lc!() + Variable::One, lc!() + sum)?;
        Ok(())
    }
}

/// No public inputs: secret `a` with `a * a = b`, `b` secret as well.
#[derive(Clone)]
pub struct SecretSquareCircuit<F: PrimeField> {
    a: Option<F>,
}

impl<F: PrimeField> SecretSquareCircuit<F> {
    pub fn new(a: F) -> Self {
        SecretSquareCircuit { a: Some(a) }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for SecretSquareCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let a_value = || self.a.ok_or(SynthesisError::AssignmentMissing);
        let a = cs.new_witness_variable(a_value)?;
        let b = cs.new_witness_variable(|| Ok(a_value()?.square()))?;
        cs.enforce_constraint(lc!() + a, lc!() + a, lc!() + b)?;
        Ok(())
    }
}

pub struct NativeArtifacts {
    pub proof: NativeProof,
    pub vk: NativeVerifyingKey,
    pub witness: NativeWitness,
}

/// Run setup, prove and witness extraction for `circuit` on `F`'s engine.
pub fn native_artifacts<F, C>(circuit: C) -> Result<NativeArtifacts, Report>
where
    F: Family,
    C: ConstraintSynthesizer<ScalarField<F>> + Clone,
{
    let mut rng = StdRng::seed_from_u64(0);
    let (pk, vk) = Groth16::<F::Engine>::circuit_specific_setup(circuit.clone(), &mut rng)
        .context("Running Groth16 setup")?;
    let proof = Groth16::<F::Engine>::prove(&pk, circuit.clone(), &mut rng)
        .context("Generating Groth16 proof")?;

    let cs = ConstraintSystem::<ScalarField<F>>::new_ref();
    circuit
        .generate_constraints(cs.clone())
        .context("Synthesizing witness")?;
    if !cs.is_satisfied().context("Checking constraints")? {
        bail!("Circuit assignment is not satisfying");
    }
    let witness = FullWitness::from_constraint_system(&cs).context("Extracting witness")?;
    debug!(
        "Generated {} artifacts with {} public variables",
        F::ID,
        witness.nb_public_variables()
    );

    Ok(NativeArtifacts {
        proof: NativeProof::new::<F>(proof),
        vk: NativeVerifyingKey::new::<F>(vk),
        witness: NativeWitness::new::<F>(witness),
    })
}
