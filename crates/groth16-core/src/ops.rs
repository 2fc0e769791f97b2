//! BN254 operations over the big-endian alt_bn128 API
//!
//! All curve arithmetic is delegated to `solana-bn254`. Inside a Solana
//! program that crate forwards to the runtime; everywhere else it evaluates
//! with arkworks. Either way points are exchanged in the EIP-196/197 byte
//! encoding.

use crate::errors::Bn254Error;
use crate::types::{FieldBytes, FQ_MODULUS, G1, G1_IDENTITY, G2};
use solana_bn254::prelude::{
    alt_bn128_g1_addition_be, alt_bn128_g1_multiplication_be, alt_bn128_pairing_be,
};

/// `a + b` on G1.
pub fn g1_add(a: &G1, b: &G1) -> Result<G1, Bn254Error> {
    let mut input = [0u8; 128];
    input[..64].copy_from_slice(a);
    input[64..].copy_from_slice(b);

    let output = alt_bn128_g1_addition_be(&input)
        .map_err(|e| Bn254Error::Backend(format!("G1 addition failed: {:?}", e)))?;
    g1_from_output(&output)
}

/// `scalar · point` on G1, with the scalar as 32 big-endian bytes.
pub fn g1_mul(point: &G1, scalar: &FieldBytes) -> Result<G1, Bn254Error> {
    let mut input = [0u8; 96];
    input[..64].copy_from_slice(point);
    input[64..].copy_from_slice(scalar);

    let output = alt_bn128_g1_multiplication_be(&input)
        .map_err(|e| Bn254Error::Backend(format!("G1 multiplication failed: {:?}", e)))?;
    g1_from_output(&output)
}

fn g1_from_output(output: &[u8]) -> Result<G1, Bn254Error> {
    output
        .try_into()
        .map_err(|_| Bn254Error::Backend(format!("unexpected G1 output length {}", output.len())))
}

/// Negates a G1 point: (x, y) -> (x, p - y). The identity maps to itself.
pub fn g1_neg(point: &G1) -> G1 {
    let mut result = *point;

    let y = &point[32..64];
    if y.iter().all(|&b| b == 0) {
        return result;
    }

    // p - y, big-endian with borrow
    let mut borrow = 0i16;
    for i in (0..32).rev() {
        let diff = FQ_MODULUS[i] as i16 - y[i] as i16 - borrow;
        if diff < 0 {
            result[32 + i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[32 + i] = diff as u8;
            borrow = 0;
        }
    }

    result
}

/// Returns true if the backend accepts `point` as a G1 element.
///
/// Adding the identity forces a full deserialization (field range and curve
/// equation) without changing the point.
pub fn is_valid_g1(point: &G1) -> bool {
    g1_add(point, &G1_IDENTITY).is_ok()
}

/// Returns true if the backend accepts `point` as a G2 element.
///
/// The pairing entry point deserializes every operand before evaluating, which
/// checks the twist equation and subgroup membership. Pairing against the G1
/// identity keeps the product trivial.
pub fn is_valid_g2(point: &G2) -> bool {
    pairing_check(&[(G1_IDENTITY, *point)]).is_ok()
}

/// Evaluate `∏ e(g1_i, g2_i) == 1` over all pairs.
///
/// An empty product is the identity.
pub fn pairing_check(pairs: &[(G1, G2)]) -> Result<bool, Bn254Error> {
    if pairs.is_empty() {
        return Ok(true);
    }

    let input: Vec<u8> = pairs
        .iter()
        .flat_map(|(g1, g2)| g1.iter().chain(g2.iter()).copied())
        .collect();

    let output = alt_bn128_pairing_be(&input)
        .map_err(|e| Bn254Error::Backend(format!("pairing failed: {:?}", e)))?;

    // one big-endian word, 1 for the identity
    let word: FieldBytes = output
        .as_slice()
        .try_into()
        .map_err(|_| Bn254Error::PairingFailed)?;
    Ok(word[31] == 1)
}
