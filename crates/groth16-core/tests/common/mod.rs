//! Fixture generation with arkworks
//!
//! Runs a real Groth16 setup and prover for a two-constraint circuit and
//! exports key, proof and public inputs in the bellman JSON format.

#![allow(dead_code)]

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ff::{BigInteger, PrimeField};
use ark_groth16::Groth16;
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystemRef, LinearCombination, SynthesisError,
};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use num_bigint::BigUint;
use serde_json::{json, Value};

/// Witnesses `a`, `b`; public inputs `c = a·b` and `d = a·a`, in that order.
#[derive(Clone, Copy)]
pub struct MulCircuit {
    pub a: Fr,
    pub b: Fr,
}

impl ConstraintSynthesizer<Fr> for MulCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let a = cs.new_witness_variable(|| Ok(self.a))?;
        let b = cs.new_witness_variable(|| Ok(self.b))?;
        let c = cs.new_input_variable(|| Ok(self.a * self.b))?;
        let d = cs.new_input_variable(|| Ok(self.a * self.a))?;

        cs.enforce_constraint(
            LinearCombination::from(a),
            LinearCombination::from(b),
            LinearCombination::from(c),
        )?;
        cs.enforce_constraint(
            LinearCombination::from(a),
            LinearCombination::from(a),
            LinearCombination::from(d),
        )?;
        Ok(())
    }
}

/// One key / proof / public input set
pub struct Fixture {
    pub vk: Value,
    pub proof: Value,
    pub public: Vec<BigUint>,
    pub ark_pk: ark_groth16::ProvingKey<Bn254>,
    pub ark_vk: ark_groth16::VerifyingKey<Bn254>,
    pub ark_proof: ark_groth16::Proof<Bn254>,
    pub ark_inputs: Vec<Fr>,
}

impl Fixture {
    pub fn vk_json(&self) -> Vec<u8> {
        serde_json::to_vec(&self.vk).unwrap()
    }

    pub fn proof_json(&self) -> Vec<u8> {
        serde_json::to_vec(&self.proof).unwrap()
    }

    /// Public inputs as JSON: the first in decimal, the rest in hex.
    pub fn public_json(&self) -> Vec<u8> {
        public_json(&self.public)
    }

    /// A fresh proof under this fixture's key for other witnesses.
    pub fn prove(&self, a: u64, b: u64, seed: u64) -> (Value, Vec<BigUint>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let circuit = MulCircuit {
            a: Fr::from(a),
            b: Fr::from(b),
        };
        let proof = Groth16::<Bn254>::prove(&self.ark_pk, circuit, &mut rng).unwrap();
        let inputs = [circuit.a * circuit.b, circuit.a * circuit.a];
        (
            proof_to_json(&proof),
            inputs.iter().map(fr_to_biguint).collect(),
        )
    }
}

/// Setup and prove with one seeded rng.
pub fn generate(a: u64, b: u64, seed: u64) -> Fixture {
    generate_fr(Fr::from(a), Fr::from(b), seed)
}

pub fn generate_fr(a: Fr, b: Fr, seed: u64) -> Fixture {
    let mut rng = StdRng::seed_from_u64(seed);
    let circuit = MulCircuit { a, b };

    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(circuit, &mut rng).unwrap();
    let proof = Groth16::<Bn254>::prove(&pk, circuit, &mut rng).unwrap();
    let ark_inputs = vec![a * b, a * a];

    Fixture {
        vk: vk_to_json(&vk),
        proof: proof_to_json(&proof),
        public: ark_inputs.iter().map(fr_to_biguint).collect(),
        ark_pk: pk,
        ark_vk: vk,
        ark_proof: proof,
        ark_inputs,
    }
}

pub fn public_json(inputs: &[BigUint]) -> Vec<u8> {
    let strings: Vec<String> = inputs
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if i == 0 {
                v.to_string()
            } else {
                format!("0x{}", v.to_str_radix(16))
            }
        })
        .collect();
    serde_json::to_vec(&strings).unwrap()
}

pub fn fr_to_biguint(f: &Fr) -> BigUint {
    BigUint::from_bytes_be(&f.into_bigint().to_bytes_be())
}

pub fn fq_hex(f: &Fq) -> String {
    format!("0x{}", hex::encode(f.into_bigint().to_bytes_be()))
}

pub fn g1_json(p: &G1Affine) -> Value {
    json!([fq_hex(&p.x), fq_hex(&p.y)])
}

/// Rows are `[c0, c1]`, the swapped layout.
pub fn g2_table(p: &G2Affine) -> [[String; 2]; 2] {
    [
        [fq_hex(&p.x.c0), fq_hex(&p.x.c1)],
        [fq_hex(&p.y.c0), fq_hex(&p.y.c1)],
    ]
}

pub fn g2_json(p: &G2Affine) -> Value {
    json!(g2_table(p))
}

/// A point on the twist that is not in the prime-order subgroup.
pub fn g2_outside_subgroup() -> G2Affine {
    (1u64..)
        .filter_map(|x| G2Affine::get_point_from_x_unchecked(Fq2::from(x), false))
        .find(|p| !p.is_in_correct_subgroup_assuming_on_curve())
        .unwrap()
}

/// Swap the limbs inside each row of every G2 table in `doc`.
pub fn to_natural_layout(doc: &mut Value, fields: &[&str]) {
    for field in fields {
        let rows = doc[*field].as_array_mut().unwrap();
        for row in rows {
            row.as_array_mut().unwrap().swap(0, 1);
        }
    }
}

pub fn vk_to_json(vk: &ark_groth16::VerifyingKey<Bn254>) -> Value {
    json!({
        "alpha_g1": g1_json(&vk.alpha_g1),
        "beta_g2": g2_json(&vk.beta_g2),
        "gamma_g2": g2_json(&vk.gamma_g2),
        "delta_g2": g2_json(&vk.delta_g2),
        "ic": vk.gamma_abc_g1.iter().map(g1_json).collect::<Vec<_>>(),
    })
}

pub fn proof_to_json(proof: &ark_groth16::Proof<Bn254>) -> Value {
    json!({
        "a": g1_json(&proof.a),
        "b": g2_json(&proof.b),
        "c": g1_json(&proof.c),
        "inputs": [],
    })
}
