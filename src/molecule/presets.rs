//! Stock molecules used by the demos.

use super::{Element, Molecule};
use crate::error::MolstickError;

/// O-H bond length in angstroms.
const WATER_BOND_LENGTH: f32 = 0.9584;

/// H-O-H bond angle in degrees.
const WATER_BOND_ANGLE_DEG: f32 = 104.5;

/// The bent water molecule from the ball-and-stick demo: oxygen at the
/// origin, two hydrogens fanned 104.5 degrees apart.
///
/// # Errors
///
/// Never fails for the built-in constants; the `Result` is the
/// [`Molecule::bent_triatomic`] signature passed through.
pub fn water() -> Result<Molecule, MolstickError> {
    Molecule::bent_triatomic(
        "water",
        Element::O,
        Element::H,
        WATER_BOND_LENGTH,
        WATER_BOND_ANGLE_DEG.to_radians(),
    )
}
