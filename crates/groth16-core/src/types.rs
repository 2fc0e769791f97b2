//! Raw byte layouts consumed by the BN254 operations
//!
//! Uses the big-endian alt_bn128 encoding (EIP-196/197).

use hex_literal::hex;

/// A 32-byte big-endian field element or scalar.
pub type FieldBytes = [u8; 32];

/// A 64-byte G1 point (uncompressed, big-endian x || y).
pub type G1 = [u8; 64];

/// A 128-byte G2 point (big-endian x.c1 || x.c0 || y.c1 || y.c0).
pub type G2 = [u8; 128];

/// Size of one coordinate limb in bytes
pub const LIMB_SIZE: usize = 32;

/// G1 identity point (point at infinity)
/// For BN254, the identity is represented as (0, 0)
pub const G1_IDENTITY: G1 = [0u8; 64];

/// G2 identity point (point at infinity)
pub const G2_IDENTITY: G2 = [0u8; 128];

/// BN254 G1 generator point
/// x = 1, y = 2
pub const G1_GENERATOR: G1 = {
    let mut g = [0u8; 64];
    g[31] = 1; // x = 1
    g[63] = 2; // y = 2
    g
};

/// BN254 scalar field modulus (r, the `q` public inputs are checked against)
/// 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const FR_MODULUS: FieldBytes =
    hex!("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001");

/// BN254 base field modulus (p)
/// 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const FQ_MODULUS: FieldBytes =
    hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");
