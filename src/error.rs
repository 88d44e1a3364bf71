//! Crate-level error types.

use std::fmt;

/// Errors produced by the molstick crate.
#[derive(Debug)]
pub enum MolstickError {
    /// Bond endpoints coincide (or nearly so), leaving the bond direction
    /// undefined.
    DegenerateBond {
        /// Separation between the two endpoints.
        length: f32,
    },
    /// Bond angle outside the open interval (0, π) radians.
    InvalidBondAngle {
        /// The rejected angle in radians.
        angle: f32,
    },
    /// Non-positive (or non-finite) bond length.
    InvalidBondLength {
        /// The rejected length.
        length: f32,
    },
    /// Atom index out of range for the requested atom count.
    InvalidAtomIndex {
        /// The rejected index.
        index: usize,
        /// Number of atoms available.
        count: usize,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scene descriptor serialization failure.
    DescriptorEncode(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for MolstickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateBond { length } => {
                write!(f, "degenerate bond: endpoint separation {length} is below epsilon")
            }
            Self::InvalidBondAngle { angle } => {
                write!(f, "bond angle {angle} rad is outside (0, \u{3c0})")
            }
            Self::InvalidBondLength { length } => {
                write!(f, "bond length {length} is not positive")
            }
            Self::InvalidAtomIndex { index, count } => {
                write!(f, "atom index {index} out of range for {count} atoms")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::DescriptorEncode(msg) => {
                write!(f, "descriptor encode error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MolstickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolstickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
