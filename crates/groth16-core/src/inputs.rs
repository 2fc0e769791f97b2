//! Public input loading
//!
//! A JSON array of numeric strings, e.g. `["33", "0x2a"]`. Order is kept; it
//! must line up with `ic[1..]` of the verification key.

use crate::errors::PublicInputError;
use crate::scalar::{parse_scalar, Scalar};

/// Load public inputs from a JSON array of decimal or `0x`-hex strings.
pub fn load_public_inputs(bytes: &[u8]) -> Result<Vec<Scalar>, PublicInputError> {
    let raw: Vec<String> = serde_json::from_slice(bytes)?;

    let inputs = raw
        .iter()
        .enumerate()
        .map(|(index, s)| {
            parse_scalar(s).map_err(|source| PublicInputError::Scalar { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("loaded {} public inputs", inputs.len());
    Ok(inputs)
}
