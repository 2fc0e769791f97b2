//! Groth16 verifier for BN254 proofs
//!
//! Loads verification keys, proofs and public inputs in the bellman JSON
//! format and checks them with a single multi-pairing. Curve arithmetic is
//! delegated to `solana-bn254`.
//!
//! # Example
//!
//! ```ignore
//! use groth16_bn254_core::{load_proof, load_public_inputs, load_verification_key, verify};
//!
//! let vk = load_verification_key(&std::fs::read("vk.json")?)?;
//! let proof = load_proof(&std::fs::read("proof.json")?)?;
//! let inputs = load_public_inputs(&std::fs::read("public.json")?)?;
//!
//! println!("Verified: {}", verify(&vk, &proof, &inputs)?);
//! ```

pub mod codec;
pub mod config;
pub mod errors;
pub mod inputs;
pub mod key;
pub mod ops;
pub mod proof;
pub mod scalar;
pub mod types;
pub mod verifier;

pub use codec::{decode_g1, decode_g2, decode_g2_unswapped, decode_g2_with, G1Point, G2Point};
pub use config::{G2Layout, LoaderConfig};
pub use errors::{
    Bn254Error, Error, KeyError, PointError, ProofError, PublicInputError, ScalarError, VerifyError,
};
pub use inputs::load_public_inputs;
pub use key::{load_verification_key, load_verification_key_with, VerificationKey};
pub use proof::{load_proof, load_proof_with, Proof};
pub use scalar::{parse_scalar, scalar_modulus, Scalar};
pub use verifier::{verify, verify_detailed, verify_json, Rejection, Verdict};
