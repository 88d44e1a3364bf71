//! Chemical elements with CPK presentation attributes.

use serde::{Deserialize, Serialize};

/// The handful of elements the ball-and-stick demos render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    /// Hydrogen.
    H,
    /// Carbon.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Unrecognized element.
    Unknown,
}

impl Element {
    /// One- or two-letter element symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::Unknown => "?",
        }
    }

    /// Standard CPK color as linear RGB.
    #[must_use]
    pub fn cpk_color(self) -> [f32; 3] {
        match self {
            Self::H => [1.0, 1.0, 1.0],
            Self::C => [0.5, 0.5, 0.5],
            Self::N => [0.19, 0.31, 0.97],
            Self::O => [1.0, 0.05, 0.05],
            Self::Unknown => [0.8, 0.0, 0.8],
        }
    }

    /// Van der Waals radius in angstroms.
    #[must_use]
    pub fn vdw_radius(self) -> f32 {
        match self {
            Self::H => 1.2,
            Self::C => 1.7,
            Self::N => 1.55,
            Self::O => 1.52,
            Self::Unknown => 1.5,
        }
    }
}
