//! Hex limb decoding for G1 and G2 points
//!
//! Every coordinate limb is a 32-byte big-endian hex string with an optional
//! `0x` prefix. Limbs are written by index into fixed-width buffers in the
//! alt_bn128 encoding order and the result is validated by the curve backend.
//!
//! G2 tables come in two layouts (see [`G2Layout`]). The default swaps the
//! two limbs of each row:
//!
//! ```text
//! source  [[w, x], [y, z]]
//! bytes   x || w || z || y
//! ```

use core::fmt;
use core::ops::Neg;

use crate::config::G2Layout;
use crate::errors::{Bn254Error, PointError};
use crate::ops;
use crate::types::{FieldBytes, FQ_MODULUS, G1, G1_IDENTITY, G2, LIMB_SIZE};

/// A validated G1 point in its 64-byte big-endian encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct G1Point(G1);

/// A validated G2 point in its 128-byte big-endian encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct G2Point(G2);

impl G1Point {
    /// The point at infinity.
    pub const fn identity() -> Self {
        Self(G1_IDENTITY)
    }

    /// Validate a 64-byte `x || y` encoding.
    pub fn from_bytes(bytes: &G1) -> Result<Self, PointError> {
        for (index, limb) in bytes.chunks_exact(LIMB_SIZE).enumerate() {
            check_coordinate(limb, index)?;
        }
        if !ops::is_valid_g1(bytes) {
            return Err(PointError::InvalidPoint);
        }
        Ok(Self(*bytes))
    }

    pub fn as_bytes(&self) -> &G1 {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0 == G1_IDENTITY
    }

    /// `self + other`
    pub fn add(&self, other: &Self) -> Result<Self, Bn254Error> {
        ops::g1_add(&self.0, &other.0).map(Self)
    }

    /// `scalar · self`, with the scalar as 32 big-endian bytes
    pub fn mul(&self, scalar: &FieldBytes) -> Result<Self, Bn254Error> {
        ops::g1_mul(&self.0, scalar).map(Self)
    }
}

impl Neg for G1Point {
    type Output = G1Point;

    fn neg(self) -> G1Point {
        G1Point(ops::g1_neg(&self.0))
    }
}

impl G2Point {
    /// Validate a 128-byte `x.c1 || x.c0 || y.c1 || y.c0` encoding.
    pub fn from_bytes(bytes: &G2) -> Result<Self, PointError> {
        for (index, limb) in bytes.chunks_exact(LIMB_SIZE).enumerate() {
            check_coordinate(limb, index)?;
        }
        if !ops::is_valid_g2(bytes) {
            return Err(PointError::InvalidPoint);
        }
        Ok(Self(*bytes))
    }

    pub fn as_bytes(&self) -> &G2 {
        &self.0
    }
}

/// Decode a G1 point from its `[x, y]` limbs.
pub fn decode_g1<S: AsRef<str>>(parts: &[S]) -> Result<G1Point, PointError> {
    if parts.len() != 2 {
        return Err(PointError::InvalidLimbCount {
            expected: 2,
            actual: parts.len(),
        });
    }

    let mut bytes = [0u8; 64];
    for (index, part) in parts.iter().enumerate() {
        let limb = decode_limb(part.as_ref(), index)?;
        bytes[index * LIMB_SIZE..(index + 1) * LIMB_SIZE].copy_from_slice(&limb);
    }

    G1Point::from_bytes(&bytes)
}

/// Decode a G2 point from a `[[x.c0, x.c1], [y.c0, y.c1]]` table.
pub fn decode_g2<S: AsRef<str>>(parts: &[[S; 2]; 2]) -> Result<G2Point, PointError> {
    decode_g2_with(parts, G2Layout::Swapped)
}

/// Decode a G2 point from a `[[x.c1, x.c0], [y.c1, y.c0]]` table.
pub fn decode_g2_unswapped<S: AsRef<str>>(parts: &[[S; 2]; 2]) -> Result<G2Point, PointError> {
    decode_g2_with(parts, G2Layout::Natural)
}

/// Decode a G2 point whose table follows `layout`.
pub fn decode_g2_with<S: AsRef<str>>(
    parts: &[[S; 2]; 2],
    layout: G2Layout,
) -> Result<G2Point, PointError> {
    G2Point::from_bytes(&g2_bytes(parts, layout)?)
}

/// Lay the four limbs out in encoding order without validating the point.
fn g2_bytes<S: AsRef<str>>(parts: &[[S; 2]; 2], layout: G2Layout) -> Result<G2, PointError> {
    let mut bytes = [0u8; 128];
    for (slot, (row, col)) in layout.limb_order().into_iter().enumerate() {
        let limb = decode_limb(parts[row][col].as_ref(), row * 2 + col)?;
        bytes[slot * LIMB_SIZE..(slot + 1) * LIMB_SIZE].copy_from_slice(&limb);
    }
    Ok(bytes)
}

/// Decode one 32-byte limb; `index` is the limb position in the source.
fn decode_limb(s: &str, index: usize) -> Result<FieldBytes, PointError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let raw = hex::decode(digits).map_err(|source| PointError::InvalidHex { index, source })?;

    let actual = raw.len();
    let limb = FieldBytes::try_from(raw.as_slice())
        .map_err(|_| PointError::InvalidLimbLength { index, actual })?;

    check_coordinate(&limb, index)?;
    Ok(limb)
}

fn check_coordinate(limb: &[u8], index: usize) -> Result<(), PointError> {
    if limb >= &FQ_MODULUS[..] {
        return Err(PointError::CoordinateOutOfRange { index });
    }
    Ok(())
}

impl fmt::Display for G1Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "G1({}, {})",
            hex::encode(&self.0[..32]),
            hex::encode(&self.0[32..])
        )
    }
}

impl fmt::Debug for G1Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for G2Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limbs: Vec<String> = self.0.chunks_exact(LIMB_SIZE).map(hex::encode).collect();
        write!(
            f,
            "G2(({}, {}), ({}, {}))",
            limbs[0], limbs[1], limbs[2], limbs[3]
        )
    }
}

impl fmt::Debug for G2Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
