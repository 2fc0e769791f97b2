//! Numeric string parsing for public inputs
//!
//! Literals are decimal, or hexadecimal when prefixed with `0x`. Values are
//! not reduced; range checks against the scalar field modulus happen at
//! verification time.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::errors::ScalarError;
use crate::types::{FieldBytes, FR_MODULUS};

/// An unbounded unsigned integer.
pub type Scalar = BigUint;

/// Returns the BN254 scalar field modulus.
pub fn scalar_modulus() -> &'static Scalar {
    static MODULUS: OnceLock<Scalar> = OnceLock::new();
    MODULUS.get_or_init(|| BigUint::from_bytes_be(&FR_MODULUS))
}

/// Parse a decimal or `0x`-prefixed hexadecimal literal.
pub fn parse_scalar(s: &str) -> Result<Scalar, ScalarError> {
    let (digits, radix) = match s.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };

    if digits.is_empty() {
        return Err(ScalarError::Empty);
    }

    // BigUint also accepts '_' separators and a '+' sign
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ScalarError::InvalidDigit {
            literal: s.to_string(),
        });
    }

    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| ScalarError::InvalidDigit {
        literal: s.to_string(),
    })
}

/// Returns true if `s` is a canonical scalar field element (`s < r`).
pub fn is_canonical(s: &Scalar) -> bool {
    s < scalar_modulus()
}

/// Encode as 32 big-endian bytes, or `None` if the value needs more.
pub fn scalar_to_bytes(s: &Scalar) -> Option<FieldBytes> {
    let bytes = s.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }

    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    Some(out)
}
