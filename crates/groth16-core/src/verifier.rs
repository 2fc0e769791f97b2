//! Groth16 verification
//!
//! Checks
//!
//! ```text
//! e(A, B) · e(-alpha, beta) · e(-vk_x, gamma) · e(-C, delta) == 1
//! ```
//!
//! where `vk_x = ic[0] + Σ inputs[i] · ic[i + 1]`, as one multi-pairing.

use crate::codec::G1Point;
use crate::config::LoaderConfig;
use crate::errors::{Bn254Error, Error, VerifyError};
use crate::inputs::load_public_inputs;
use crate::key::{load_verification_key_with, VerificationKey};
use crate::ops;
use crate::proof::{load_proof_with, Proof};
use crate::scalar::{is_canonical, scalar_to_bytes, Scalar};

/// Outcome of a structurally valid verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

/// Why a proof was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `inputs.len() + 1 != ic.len()`
    InputCountMismatch { expected: usize, actual: usize },
    /// An input is not below the scalar field modulus
    InputOutOfRange { index: usize },
    /// The pairing product is not the identity
    PairingMismatch,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Verify a Groth16 proof.
///
/// # Returns
/// * `Ok(true)` if the proof is valid for `inputs` under `vk`
/// * `Ok(false)` if it is not, including a wrong number of inputs or an
///   input outside the scalar field
/// * `Err(VerifyError)` only if the curve backend faults
pub fn verify(vk: &VerificationKey, proof: &Proof, inputs: &[Scalar]) -> Result<bool, VerifyError> {
    verify_detailed(vk, proof, inputs).map(|verdict| verdict.is_accepted())
}

/// Verify a Groth16 proof and report why it was rejected.
pub fn verify_detailed(
    vk: &VerificationKey,
    proof: &Proof,
    inputs: &[Scalar],
) -> Result<Verdict, VerifyError> {
    if inputs.len() + 1 != vk.gamma_abc.len() {
        log::debug!(
            "rejected: expected {} public inputs, got {}",
            vk.num_public_inputs(),
            inputs.len()
        );
        return Ok(Verdict::Rejected(Rejection::InputCountMismatch {
            expected: vk.num_public_inputs(),
            actual: inputs.len(),
        }));
    }

    // Every input, not just the first
    if let Some(index) = inputs.iter().position(|input| !is_canonical(input)) {
        log::debug!("rejected: public input {} is not below the field modulus", index);
        return Ok(Verdict::Rejected(Rejection::InputOutOfRange { index }));
    }

    let vk_x = prepare_inputs(vk, inputs)?;
    log::trace!("vk_x = {}", vk_x);

    let pairs = [
        (*proof.a.as_bytes(), *proof.b.as_bytes()),
        (*(-vk.alpha).as_bytes(), *vk.beta.as_bytes()),
        (*(-vk_x).as_bytes(), *vk.gamma.as_bytes()),
        (*(-proof.c).as_bytes(), *vk.delta.as_bytes()),
    ];

    if ops::pairing_check(&pairs)? {
        log::debug!("proof accepted");
        Ok(Verdict::Accepted)
    } else {
        log::debug!("rejected: pairing check failed");
        Ok(Verdict::Rejected(Rejection::PairingMismatch))
    }
}

/// Combine the public inputs with the key: `ic[0] + Σ inputs[i] · ic[i + 1]`.
///
/// Accumulates in index order from the point at infinity and adds the
/// constant term last. Inputs must already be range-checked.
fn prepare_inputs(vk: &VerificationKey, inputs: &[Scalar]) -> Result<G1Point, Bn254Error> {
    let mut acc = G1Point::identity();
    for (input, base) in inputs.iter().zip(vk.gamma_abc.iter().skip(1)) {
        let scalar = scalar_to_bytes(input).ok_or(Bn254Error::ScalarTooLarge)?;
        acc = acc.add(&base.mul(&scalar)?)?;
    }
    acc.add(&vk.gamma_abc[0])
}

/// Load a verification key, proof and public inputs from JSON and verify.
pub fn verify_json(
    vk_json: &[u8],
    proof_json: &[u8],
    public_inputs_json: &[u8],
    config: &LoaderConfig,
) -> Result<bool, Error> {
    let vk = load_verification_key_with(vk_json, config)?;
    let proof = load_proof_with(proof_json, config)?;
    let inputs = load_public_inputs(public_inputs_json)?;

    Ok(verify(&vk, &proof, &inputs)?)
}
