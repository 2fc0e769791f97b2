//! Verification key loading from bellman-style JSON
//!
//! ```json
//! {
//!   "alpha_g1": ["0x..", "0x.."],
//!   "beta_g2":  [["0x..", "0x.."], ["0x..", "0x.."]],
//!   "gamma_g2": [["0x..", "0x.."], ["0x..", "0x.."]],
//!   "delta_g2": [["0x..", "0x.."], ["0x..", "0x.."]],
//!   "ic":       [["0x..", "0x.."], ...]
//! }
//! ```

use std::borrow::Cow;

use serde::Deserialize;

use crate::codec::{decode_g1, decode_g2_with, G1Point, G2Point};
use crate::config::LoaderConfig;
use crate::errors::{KeyError, PointError};

/// Parsed Groth16 verification key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationKey {
    pub alpha: G1Point,
    pub beta: G2Point,
    pub gamma: G2Point,
    pub delta: G2Point,
    /// `gamma_abc[0]` is the constant term, `gamma_abc[i + 1]` pairs with
    /// public input `i`
    pub gamma_abc: Vec<G1Point>,
}

/// JSON layout of a verification key
#[derive(Debug, Deserialize)]
struct VerificationKeyJson {
    alpha_g1: [String; 2],
    beta_g2: [[String; 2]; 2],
    gamma_g2: [[String; 2]; 2],
    delta_g2: [[String; 2]; 2],
    ic: Vec<[String; 2]>,
}

impl VerificationKey {
    /// Number of public inputs this key expects
    pub fn num_public_inputs(&self) -> usize {
        self.gamma_abc.len().saturating_sub(1)
    }
}

/// Load a verification key with the default (swapped) G2 layout.
pub fn load_verification_key(bytes: &[u8]) -> Result<VerificationKey, KeyError> {
    load_verification_key_with(bytes, &LoaderConfig::default())
}

/// Load a verification key.
pub fn load_verification_key_with(
    bytes: &[u8],
    config: &LoaderConfig,
) -> Result<VerificationKey, KeyError> {
    let raw: VerificationKeyJson = serde_json::from_slice(bytes)?;
    let layout = config.g2_layout;

    let alpha = decode_g1(&raw.alpha_g1).map_err(point_error("alpha_g1"))?;
    let beta = decode_g2_with(&raw.beta_g2, layout).map_err(point_error("beta_g2"))?;
    let gamma = decode_g2_with(&raw.gamma_g2, layout).map_err(point_error("gamma_g2"))?;
    let delta = decode_g2_with(&raw.delta_g2, layout).map_err(point_error("delta_g2"))?;

    let gamma_abc = raw
        .ic
        .iter()
        .enumerate()
        .map(|(i, parts)| decode_g1(parts).map_err(point_error(format!("ic[{}]", i))))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "loaded verification key with {} ic points ({:?} G2 layout)",
        gamma_abc.len(),
        layout
    );

    Ok(VerificationKey {
        alpha,
        beta,
        gamma,
        delta,
        gamma_abc,
    })
}

fn point_error(field: impl Into<Cow<'static, str>>) -> impl FnOnce(PointError) -> KeyError {
    let field = field.into();
    move |source| KeyError::Point { field, source }
}
