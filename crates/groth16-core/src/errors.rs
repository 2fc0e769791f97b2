//! Error types for the Groth16 verifier

use std::borrow::Cow;

use thiserror::Error;

/// Top-level error for loading and verifying in one call
#[derive(Debug, Error)]
pub enum Error {
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Proof error: {0}")]
    Proof(#[from] ProofError),

    #[error("Public input error: {0}")]
    PublicInput(#[from] PublicInputError),

    #[error("Verify error: {0}")]
    Verify(#[from] VerifyError),
}

/// Faults raised while evaluating the verification equation
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("BN254 error: {0}")]
    Bn254(#[from] Bn254Error),
}

/// Numeric string parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScalarError {
    #[error("Empty numeric literal")]
    Empty,

    #[error("Invalid numeric literal: {literal:?}")]
    InvalidDigit { literal: String },
}

/// Point decoding errors
#[derive(Debug, Error, PartialEq)]
pub enum PointError {
    #[error("Invalid hex in limb {index}: {source}")]
    InvalidHex {
        index: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Invalid limb count: expected {expected}, got {actual}")]
    InvalidLimbCount { expected: usize, actual: usize },

    #[error("Invalid limb {index} length: expected 32 bytes, got {actual}")]
    InvalidLimbLength { index: usize, actual: usize },

    #[error("Coordinate limb {index} is not below the base field modulus")]
    CoordinateOutOfRange { index: usize },

    /// Off the curve, or (G2 only) outside the prime-order subgroup
    #[error("Point is not on the curve or not in the prime-order subgroup")]
    InvalidPoint,
}

/// Verification key loading errors
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Invalid VK JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid point {field}: {source}")]
    Point {
        field: Cow<'static, str>,
        #[source]
        source: PointError,
    },
}

/// Proof loading errors
#[derive(Debug, Error)]
pub enum ProofError {
    #[error("Invalid proof JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid point {field}: {source}")]
    Point {
        field: Cow<'static, str>,
        #[source]
        source: PointError,
    },
}

/// Public input loading errors
#[derive(Debug, Error)]
pub enum PublicInputError {
    #[error("Invalid public inputs JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid public input {index}: {source}")]
    Scalar {
        index: usize,
        #[source]
        source: ScalarError,
    },
}

/// BN254 operation errors
#[derive(Debug, Error)]
pub enum Bn254Error {
    #[error("Curve backend error: {0}")]
    Backend(String),

    #[error("Scalar does not fit in 32 bytes")]
    ScalarTooLarge,

    #[error("Pairing check failed")]
    PairingFailed,
}
