//! Proof loading from bellman-style JSON
//!
//! `{"a": [x, y], "b": [[x0, x1], [y0, y1]], "c": [x, y], "inputs": [...]}`
//!
//! The `inputs` list some exporters embed is ignored; public inputs are
//! loaded separately with [`crate::inputs::load_public_inputs`].

use std::borrow::Cow;

use serde::Deserialize;

use crate::codec::{decode_g1, decode_g2_with, G1Point, G2Point};
use crate::config::LoaderConfig;
use crate::errors::{PointError, ProofError};

/// Parsed Groth16 proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

#[derive(Debug, Deserialize)]
struct ProofJson {
    a: [String; 2],
    b: [[String; 2]; 2],
    c: [String; 2],
}

/// Load a proof with the default (swapped) G2 layout.
pub fn load_proof(bytes: &[u8]) -> Result<Proof, ProofError> {
    load_proof_with(bytes, &LoaderConfig::default())
}

/// Load a proof.
pub fn load_proof_with(bytes: &[u8], config: &LoaderConfig) -> Result<Proof, ProofError> {
    let raw: ProofJson = serde_json::from_slice(bytes)?;

    let a = decode_g1(&raw.a).map_err(point_error("a"))?;
    let b = decode_g2_with(&raw.b, config.g2_layout).map_err(point_error("b"))?;
    let c = decode_g1(&raw.c).map_err(point_error("c"))?;

    Ok(Proof { a, b, c })
}

fn point_error(field: &'static str) -> impl FnOnce(PointError) -> ProofError {
    move |source| ProofError::Point {
        field: Cow::Borrowed(field),
        source,
    }
}
