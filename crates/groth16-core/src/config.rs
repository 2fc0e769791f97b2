//! Loader configuration

use serde::Deserialize;

/// Row layout of the 2×2 limb table a G2 point is written as.
///
/// Both layouts list the x coordinate in row 0 and y in row 1. They differ in
/// the order of the two limbs inside a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum G2Layout {
    /// Each row is `[c0, c1]`; the limbs are swapped into the `c1, c0`
    /// encoding order. This is what bellman-style JSON exports emit.
    #[default]
    Swapped,
    /// Each row is already `[c1, c0]`.
    Natural,
}

impl G2Layout {
    /// Source `(row, column)` for each of the four encoding limbs.
    pub const fn limb_order(self) -> [(usize, usize); 4] {
        match self {
            G2Layout::Swapped => [(0, 1), (0, 0), (1, 1), (1, 0)],
            G2Layout::Natural => [(0, 0), (0, 1), (1, 0), (1, 1)],
        }
    }
}

/// Options for loading keys and proofs
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Limb layout of G2 points (`beta_g2`, `gamma_g2`, `delta_g2`, `b`)
    pub g2_layout: G2Layout,
}

impl LoaderConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the G2 limb layout
    pub fn with_g2_layout(mut self, layout: G2Layout) -> Self {
        self.g2_layout = layout;
        self
    }
}
